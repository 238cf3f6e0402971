//! Devices and the registry that hands out their ids.

use std::fmt;
use std::str::FromStr;

use super::error::TopologyError;
use super::types::Point;

/// The three kinds of equipment a topology is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceType {
	/// Core device; routers form a full mesh.
	Router,
	/// Hangs off a router.
	Switch,
	/// Hangs off a switch.
	Computer,
}

impl DeviceType {
	/// Every type, in layout group order.
	pub const ALL: [DeviceType; 3] = [Self::Router, Self::Switch, Self::Computer];

	/// Lowercase name, also the id prefix.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Router => "router",
			Self::Switch => "switch",
			Self::Computer => "computer",
		}
	}

	/// Display asset for this type, resolved relative to the page.
	pub fn asset_ref(self) -> &'static str {
		match self {
			Self::Router => "assets/router.png",
			Self::Switch => "assets/switch.png",
			Self::Computer => "assets/computer.jpg",
		}
	}
}

impl fmt::Display for DeviceType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for DeviceType {
	type Err = TopologyError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"router" => Ok(Self::Router),
			"switch" => Ok(Self::Switch),
			"computer" => Ok(Self::Computer),
			other => Err(TopologyError::UnknownDeviceType(other.to_string())),
		}
	}
}

/// A node of the topology graph.
#[derive(Clone, Debug, PartialEq)]
pub struct Device {
	/// `<type>_<n>`, unique in the registry.
	pub id: String,
	/// What the device is.
	pub kind: DeviceType,
	/// `None` until a placement pass or the simulation assigns one.
	pub position: Option<Point>,
	/// Held by an active drag gesture; placement must leave it alone.
	pub pinned: bool,
}

impl Device {
	/// Display asset for this device's type.
	pub fn asset_ref(&self) -> &'static str {
		self.kind.asset_ref()
	}
}

/// Insertion-ordered device list. Add-only, so ids are never reused.
#[derive(Clone, Debug, Default)]
pub struct DeviceRegistry {
	devices: Vec<Device>,
}

impl DeviceRegistry {
	/// Empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a device named `<type>_<n>`, `n` being one more than the
	/// number of devices of that type already present.
	pub fn add(&mut self, kind: DeviceType) -> &Device {
		let ordinal = self.count_of(kind) + 1;
		let idx = self.devices.len();
		self.devices.push(Device {
			id: format!("{}_{}", kind, ordinal),
			kind,
			position: None,
			pinned: false,
		});
		&self.devices[idx]
	}

	/// Every device, in the order it was added.
	pub fn list(&self) -> &[Device] {
		&self.devices
	}

	/// Number of devices.
	pub fn len(&self) -> usize {
		self.devices.len()
	}

	/// Whether no device has been added yet.
	pub fn is_empty(&self) -> bool {
		self.devices.is_empty()
	}

	/// Number of devices of `kind`.
	pub fn count_of(&self, kind: DeviceType) -> usize {
		self.devices.iter().filter(|d| d.kind == kind).count()
	}

	/// Device with id `id`.
	pub fn get(&self, id: &str) -> Option<&Device> {
		self.devices.iter().find(|d| d.id == id)
	}

	/// Mutable access to the device with id `id`.
	pub fn get_mut(&mut self, id: &str) -> Option<&mut Device> {
		self.devices.iter_mut().find(|d| d.id == id)
	}

	pub(crate) fn devices_mut(&mut self) -> &mut [Device] {
		&mut self.devices
	}
}

/// Devices split by type, each group in registry insertion order.
///
/// Holds indices into the slice it was built from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Groups {
	/// Router indices.
	pub routers: Vec<usize>,
	/// Switch indices.
	pub switches: Vec<usize>,
	/// Computer indices.
	pub computers: Vec<usize>,
}

impl Groups {
	/// Group `devices` by type.
	pub fn partition(devices: &[Device]) -> Self {
		let mut groups = Self::default();
		for (i, device) in devices.iter().enumerate() {
			match device.kind {
				DeviceType::Router => groups.routers.push(i),
				DeviceType::Switch => groups.switches.push(i),
				DeviceType::Computer => groups.computers.push(i),
			}
		}
		groups
	}

	/// Routers, then switches, then computers.
	pub fn in_group_order(&self) -> impl Iterator<Item = usize> + '_ {
		self.routers
			.iter()
			.chain(&self.switches)
			.chain(&self.computers)
			.copied()
	}
}
