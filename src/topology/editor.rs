//! The model object the UI layer issues commands against.

use log::{debug, info, warn};

use super::config::LayoutConfig;
use super::device::{Device, DeviceRegistry, DeviceType};
use super::error::TopologyError;
use super::links;
use super::placement;
use super::simulation::{ForceGraphLayout, ForceLayout};
use super::types::{Link, Point, TopologyKind};

/// The topology model plus the commands a UI layer drives it with.
///
/// Devices are the source of truth; links are rebuilt wholesale by
/// [`TopologyEditor::generate_topology`] and never edited directly.
pub struct TopologyEditor<L: ForceLayout> {
	registry: DeviceRegistry,
	links: Vec<Link>,
	kind: TopologyKind,
	config: LayoutConfig,
	layout: L,
}

impl TopologyEditor<ForceGraphLayout> {
	/// Editor backed by [`ForceGraphLayout`].
	pub fn with_force_graph(config: LayoutConfig) -> Self {
		let layout = ForceGraphLayout::new(config.simulation.clone(), config.center());
		Self::new(config, layout)
	}
}

impl<L: ForceLayout> TopologyEditor<L> {
	/// Empty editor on `layout`, star shape selected.
	pub fn new(config: LayoutConfig, layout: L) -> Self {
		Self {
			registry: DeviceRegistry::new(),
			links: Vec::new(),
			kind: TopologyKind::default(),
			config,
			layout,
		}
	}

	/// Devices in insertion order.
	pub fn devices(&self) -> &[Device] {
		self.registry.list()
	}

	/// Links from the last generate.
	pub fn links(&self) -> &[Link] {
		&self.links
	}

	/// Selected shape.
	pub fn topology_kind(&self) -> &TopologyKind {
		&self.kind
	}

	/// Layout configuration.
	pub fn config(&self) -> &LayoutConfig {
		&self.config
	}

	/// Simulation backend.
	pub fn layout(&self) -> &L {
		&self.layout
	}

	/// Device with id `id`.
	pub fn device(&self, id: &str) -> Option<&Device> {
		self.registry.get(id)
	}

	/// Where `id` is drawn: its coordinate, or the canvas centre if it has none yet.
	pub fn position_of(&self, id: &str) -> Option<Point> {
		self.registry
			.get(id)
			.map(|d| d.position.unwrap_or_else(|| self.config.center()))
	}

	/// Register a device of `kind` and re-render.
	pub fn add_device(&mut self, kind: DeviceType) -> &Device {
		let id = self.registry.add(kind).id.clone();
		info!("Added device {}", id);
		self.rerender();
		// Just pushed, so it is the last entry.
		&self.registry.list()[self.registry.len() - 1]
	}

	/// Takes effect on the next add or generate.
	pub fn set_topology_kind(&mut self, kind: TopologyKind) {
		debug!("Topology kind set to {}", kind);
		self.kind = kind;
	}

	/// Rebuild every link from the current devices, then re-render.
	pub fn generate_topology(&mut self) {
		self.links = links::synthesize(self.registry.list());
		info!(
			"Generated {} topology: {} devices, {} links",
			self.kind,
			self.registry.len(),
			self.links.len()
		);
		self.rerender();
	}

	/// Placement pass followed by a fresh simulation seeded from the result.
	pub fn rerender(&mut self) {
		let placement = placement::place(self.registry.list(), &self.kind, &self.config);
		placement::apply(self.registry.devices_mut(), &placement);
		self.layout
			.seed(self.registry.list(), &self.links, self.config.center());
	}

	/// Pin `id` where it currently is and keep the simulation warm.
	pub fn drag_start(&mut self, id: &str) -> Result<(), TopologyError> {
		let center = self.config.center();
		let device = self.device_mut(id)?;
		let point = *device.position.get_or_insert(center);
		device.pinned = true;
		self.layout.pin(id, point);
		self.layout.reheat(self.config.simulation.drag_alpha_target);
		Ok(())
	}

	/// Move the dragged device to `point`.
	pub fn drag_move(&mut self, id: &str, point: Point) -> Result<(), TopologyError> {
		let device = self.device_mut(id)?;
		device.position = Some(point);
		device.pinned = true;
		self.layout.pin(id, point);
		Ok(())
	}

	/// Release `id` and let the simulation settle.
	pub fn drag_end(&mut self, id: &str) -> Result<(), TopologyError> {
		self.device_mut(id)?.pinned = false;
		self.layout.unpin(id);
		self.layout.cool();
		Ok(())
	}

	/// Step the simulation and pull its coordinates into unpinned devices.
	pub fn tick(&mut self, dt: f32) -> bool {
		if !self.layout.step(dt) {
			return false;
		}
		for (id, point) in self.layout.positions() {
			match self.registry.get_mut(&id) {
				Some(device) if !device.pinned => device.position = Some(point),
				Some(_) => {}
				None => warn!("Simulation reported unknown device {}", id),
			}
		}
		true
	}

	/// Topmost device whose icon box, `half_extent` on each side of its
	/// centre, covers `point`.
	pub fn device_at(&self, point: Point, half_extent: f64) -> Option<&Device> {
		self.registry.list().iter().rev().find(|d| {
			let p = d.position.unwrap_or_else(|| self.config.center());
			(point.x - p.x).abs() <= half_extent && (point.y - p.y).abs() <= half_extent
		})
	}

	fn device_mut(&mut self, id: &str) -> Result<&mut Device, TopologyError> {
		self.registry
			.get_mut(id)
			.ok_or_else(|| TopologyError::UnknownDevice(id.to_string()))
	}
}
