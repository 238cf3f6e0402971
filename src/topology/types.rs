//! Plain values shared by the model, layout and renderer.

use std::fmt;

/// A coordinate on the canvas, in canvas pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal offset from the canvas's left edge.
	pub x: f64,
	/// Vertical offset from the canvas's top edge.
	pub y: f64,
}

impl Point {
	/// Point at `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Point at `angle` radians on the circle of `radius` around `self`.
	pub fn on_circle(self, radius: f64, angle: f64) -> Self {
		Self {
			x: self.x + radius * angle.cos(),
			y: self.y + radius * angle.sin(),
		}
	}
}

/// Undirected connection between two devices, by id.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Link {
	/// Id of the device the link was synthesized from.
	pub source: String,
	/// Id of the device it attaches to.
	pub target: String,
}

impl Link {
	/// Link between the devices named `source` and `target`.
	pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
		}
	}
}

/// Arrangement strategy selected by the user.
///
/// Values coming from the UI that name none of the known shapes are kept
/// as `Other` and leave positions untouched on the next placement pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TopologyKind {
	/// First router in the centre, everything else on a circle around it.
	#[default]
	Star,
	/// Everything on one horizontal line.
	Bus,
	/// Everything on one circle.
	Ring,
	/// Unrecognised selection; placement leaves positions alone.
	Other(String),
}

impl From<&str> for TopologyKind {
	fn from(value: &str) -> Self {
		match value {
			"star" => Self::Star,
			"bus" => Self::Bus,
			"ring" => Self::Ring,
			other => Self::Other(other.to_string()),
		}
	}
}

impl fmt::Display for TopologyKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Star => f.write_str("star"),
			Self::Bus => f.write_str("bus"),
			Self::Ring => f.write_str("ring"),
			Self::Other(value) => f.write_str(value),
		}
	}
}
