//! Canvas size, layout constants and simulation tuning.

use super::types::Point;

/// Canvas bounds and the fixed constants used by placement.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
	/// Canvas width in pixels.
	pub width: f64,
	/// Canvas height in pixels.
	pub height: f64,
	/// Radius of the circle used by star and ring layouts.
	pub radius: f64,
	/// Horizontal distance between neighbours on a bus.
	pub bus_spacing: f64,
	/// Force simulation tuning.
	pub simulation: SimulationConfig,
}

impl LayoutConfig {
	/// Default layout on a canvas of the given size.
	pub fn with_size(width: f64, height: f64) -> Self {
		Self {
			width,
			height,
			..Self::default()
		}
	}

	/// Middle of the canvas.
	pub fn center(&self) -> Point {
		Point::new(self.width / 2.0, self.height / 2.0)
	}

	/// Left margin of a bus line.
	pub fn bus_start_x(&self) -> f64 {
		self.width / 4.0
	}
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			width: 800.0,
			height: 600.0,
			radius: 200.0,
			bus_spacing: 100.0,
			simulation: SimulationConfig::default(),
		}
	}
}

/// Force parameters plus the activity decay that lets the simulation go idle.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
	/// Repulsion between every pair of particles.
	pub force_charge: f32,
	/// Pull along each link.
	pub force_spring: f32,
	/// Cap on the force applied to one particle.
	pub force_max: f32,
	/// Velocity scale.
	pub node_speed: f32,
	/// Velocity kept from one step to the next.
	pub damping_factor: f32,
	/// Fraction of the distance to the target alpha covered each step.
	pub alpha_decay: f64,
	/// Below this alpha, with a zero target, stepping stops.
	pub alpha_min: f64,
	/// Alpha target held while a drag gesture is in progress.
	pub drag_alpha_target: f64,
}

impl Default for SimulationConfig {
	fn default() -> Self {
		let alpha_min = 0.001_f64;
		Self {
			force_charge: 300.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
			alpha_decay: 1.0 - alpha_min.powf(1.0 / 300.0),
			alpha_min,
			drag_alpha_target: 0.3,
		}
	}
}
