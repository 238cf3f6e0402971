//! Force-directed relaxation behind a small capability trait, so the editor
//! does not care which physics backend moves the particles.

use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::debug;

use super::config::SimulationConfig;
use super::device::Device;
use super::types::{Link, Point};

/// What the editor needs from a force simulation.
///
/// The editor drives time: each animation frame it calls [`ForceLayout::step`]
/// and then reads [`ForceLayout::positions`] back into the model.
pub trait ForceLayout {
	/// Replace every particle and constraint and restart the simulation.
	/// Devices without a position start near `fallback`.
	fn seed(&mut self, devices: &[Device], links: &[Link], fallback: Point);

	/// Advance one frame. Returns `false` once the simulation has gone idle.
	fn step(&mut self, dt: f32) -> bool;

	/// Current coordinate of every particle, by device id.
	fn positions(&self) -> Vec<(String, Point)>;

	/// Keep the simulation warm at `target` activity (drag in progress).
	fn reheat(&mut self, target: f64);

	/// Let activity decay back to zero.
	fn cool(&mut self);

	/// Hold `id` fixed at `point`.
	fn pin(&mut self, id: &str, point: Point);

	/// Hand `id` back to the simulation.
	fn unpin(&mut self, id: &str);

	/// Whether stepping still moves anything.
	fn is_active(&self) -> bool;
}

const SEED_RADIUS: f64 = 10.0;
const NODE_MASS: f32 = 10.0;

/// Offset of the `i`th unplaced particle around the fallback point.
fn phyllotaxis(i: usize) -> (f64, f64) {
	let golden_angle = PI * (3.0 - 5.0_f64.sqrt());
	let radius = SEED_RADIUS * (0.5 + i as f64).sqrt();
	let angle = i as f64 * golden_angle;
	(radius * angle.cos(), radius * angle.sin())
}

/// [`ForceLayout`] backed by the `force_graph` crate, with d3-style alpha
/// decay layered on top so the layout settles and stops.
pub struct ForceGraphLayout {
	graph: ForceGraph<String, ()>,
	index: HashMap<String, DefaultNodeIdx>,
	config: SimulationConfig,
	center: Point,
	alpha: f64,
	alpha_target: f64,
}

impl ForceGraphLayout {
	/// Empty simulation that centres on `center`.
	pub fn new(config: SimulationConfig, center: Point) -> Self {
		Self {
			graph: ForceGraph::new(Self::parameters(&config)),
			index: HashMap::new(),
			config,
			center,
			alpha: 0.0,
			alpha_target: 0.0,
		}
	}

	fn parameters(config: &SimulationConfig) -> SimulationParameters {
		SimulationParameters {
			force_charge: config.force_charge,
			force_spring: config.force_spring,
			force_max: config.force_max,
			node_speed: config.node_speed,
			damping_factor: config.damping_factor,
		}
	}

	/// Current activity; 1 right after seeding.
	pub fn alpha(&self) -> f64 {
		self.alpha
	}

	/// Shift free particles so their mean sits on the canvas centre.
	fn recenter(&mut self) {
		let (mut sx, mut sy, mut n) = (0.0_f64, 0.0_f64, 0usize);
		self.graph.visit_nodes(|node| {
			if !node.data.is_anchor {
				sx += node.x() as f64;
				sy += node.y() as f64;
				n += 1;
			}
		});
		if n == 0 {
			return;
		}
		let (dx, dy) = (
			(self.center.x - sx / n as f64) as f32,
			(self.center.y - sy / n as f64) as f32,
		);
		self.graph.visit_nodes_mut(|node| {
			if !node.data.is_anchor {
				node.data.x += dx;
				node.data.y += dy;
			}
		});
	}

	fn with_node(&mut self, id: &str, f: impl Fn(&mut NodeData<String>)) {
		let Some(&idx) = self.index.get(id) else {
			debug!("No particle for '{}'", id);
			return;
		};
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				f(&mut node.data);
			}
		});
	}
}

impl ForceLayout for ForceGraphLayout {
	fn seed(&mut self, devices: &[Device], links: &[Link], fallback: Point) {
		self.graph = ForceGraph::new(Self::parameters(&self.config));
		self.index.clear();

		let mut unplaced = 0;
		for device in devices {
			let point = device.position.unwrap_or_else(|| {
				let (dx, dy) = phyllotaxis(unplaced);
				unplaced += 1;
				Point::new(fallback.x + dx, fallback.y + dy)
			});
			let idx = self.graph.add_node(NodeData {
				x: point.x as f32,
				y: point.y as f32,
				mass: NODE_MASS,
				is_anchor: device.pinned,
				user_data: device.id.clone(),
			});
			self.index.insert(device.id.clone(), idx);
		}

		for link in links {
			if let (Some(&src), Some(&tgt)) = (self.index.get(&link.source), self.index.get(&link.target))
			{
				self.graph.add_edge(src, tgt, EdgeData::default());
			}
		}

		self.alpha = 1.0;
	}

	fn step(&mut self, dt: f32) -> bool {
		if !self.is_active() {
			return false;
		}
		self.alpha += (self.alpha_target - self.alpha) * self.config.alpha_decay;
		self.graph.update(dt * self.alpha as f32);
		self.recenter();
		true
	}

	fn positions(&self) -> Vec<(String, Point)> {
		let mut out = Vec::with_capacity(self.index.len());
		self.graph.visit_nodes(|node| {
			out.push((
				node.data.user_data.clone(),
				Point::new(node.x() as f64, node.y() as f64),
			));
		});
		out
	}

	fn reheat(&mut self, target: f64) {
		self.alpha_target = target;
		self.alpha = self.alpha.max(target);
	}

	fn cool(&mut self) {
		self.alpha_target = 0.0;
	}

	fn pin(&mut self, id: &str, point: Point) {
		self.with_node(id, |data| {
			data.x = point.x as f32;
			data.y = point.y as f32;
			data.is_anchor = true;
		});
	}

	fn unpin(&mut self, id: &str) {
		self.with_node(id, |data| data.is_anchor = false);
	}

	fn is_active(&self) -> bool {
		self.alpha_target > 0.0 || self.alpha >= self.config.alpha_min
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::topology::device::{DeviceRegistry, DeviceType};

	fn position(layout: &ForceGraphLayout, id: &str) -> Point {
		layout
			.positions()
			.into_iter()
			.find(|(pid, _)| pid == id)
			.map(|(_, p)| p)
			.unwrap()
	}

	fn seeded() -> ForceGraphLayout {
		let mut registry = DeviceRegistry::new();
		registry.add(DeviceType::Router);
		registry.add(DeviceType::Switch);
		registry.add(DeviceType::Computer);
		let mut devices = registry.list().to_vec();
		devices[0].position = Some(Point::new(400.0, 300.0));
		devices[1].position = Some(Point::new(600.0, 300.0));

		let links = vec![
			Link::new("switch_1", "router_1"),
			Link::new("computer_1", "switch_1"),
		];
		let mut layout = ForceGraphLayout::new(SimulationConfig::default(), Point::new(400.0, 300.0));
		layout.seed(&devices, &links, Point::new(400.0, 300.0));
		layout
	}

	#[test]
	fn seeding_keeps_known_positions_and_spreads_the_rest() {
		let layout = seeded();
		assert_eq!(layout.positions().len(), 3);
		assert_eq!(position(&layout, "switch_1"), Point::new(600.0, 300.0));

		let fallback = position(&layout, "computer_1");
		assert_ne!(fallback, Point::new(400.0, 300.0));
		assert!((fallback.x - 400.0).abs() <= SEED_RADIUS);
		assert!((fallback.y - 300.0).abs() <= SEED_RADIUS);
		assert!(layout.is_active());
	}

	#[test]
	fn pinned_particles_hold_still() {
		let mut layout = seeded();
		let held = Point::new(100.0, 100.0);
		layout.pin("router_1", held);
		for _ in 0..20 {
			layout.step(0.016);
		}
		let p = position(&layout, "router_1");
		assert!((p.x - held.x).abs() < 1e-3 && (p.y - held.y).abs() < 1e-3);
		for (_, p) in layout.positions() {
			assert!(p.x.is_finite() && p.y.is_finite());
		}
	}

	#[test]
	fn activity_decays_to_idle_unless_reheated() {
		let mut layout = seeded();
		layout.reheat(0.3);
		for _ in 0..1000 {
			assert!(layout.step(0.016));
		}
		assert!(layout.alpha() > 0.29);

		layout.cool();
		let mut steps = 0;
		while layout.step(0.016) {
			steps += 1;
			assert!(steps < 1000, "simulation never went idle");
		}
		assert!(!layout.is_active());
	}

	#[test]
	fn unknown_ids_are_ignored() {
		let mut layout = seeded();
		let before = layout.positions();
		layout.pin("router_9", Point::new(0.0, 0.0));
		layout.unpin("router_9");
		assert_eq!(layout.positions(), before);
	}
}
