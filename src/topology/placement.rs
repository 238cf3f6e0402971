//! Placement policy: where each device sits for a chosen topology shape.

use std::f64::consts::PI;

use log::debug;

use super::config::LayoutConfig;
use super::device::{Device, Groups};
use super::types::{Point, TopologyKind};

/// One slot per device, aligned with the device slice it was computed for.
/// `None` means "leave this device where it is".
pub type Placement = Vec<Option<Point>>;

/// Compute target coordinates for every unpinned device.
pub fn place(devices: &[Device], kind: &TopologyKind, config: &LayoutConfig) -> Placement {
	let groups = Groups::partition(devices);
	let mut placement = vec![None; devices.len()];

	match kind {
		TopologyKind::Star => place_star(&groups, config, &mut placement),
		TopologyKind::Bus => place_bus(&groups, config, &mut placement),
		TopologyKind::Ring => {
			let ring: Vec<usize> = groups.in_group_order().collect();
			place_on_circle(&ring, config, &mut placement);
		}
		TopologyKind::Other(value) => {
			debug!("Topology kind '{}' has no layout, keeping positions", value);
		}
	}

	for (slot, device) in placement.iter_mut().zip(devices) {
		if device.pinned {
			*slot = None;
		}
	}
	placement
}

/// Write a placement into the devices it was computed for.
pub fn apply(devices: &mut [Device], placement: &[Option<Point>]) {
	for (device, slot) in devices.iter_mut().zip(placement) {
		if let Some(point) = slot {
			if !device.pinned {
				device.position = Some(*point);
			}
		}
	}
}

fn place_star(groups: &Groups, config: &LayoutConfig, placement: &mut Placement) {
	if let Some(&hub) = groups.routers.first() {
		placement[hub] = Some(config.center());
	}
	let rim: Vec<usize> = groups
		.routers
		.iter()
		.skip(1)
		.chain(&groups.switches)
		.chain(&groups.computers)
		.copied()
		.collect();
	place_on_circle(&rim, config, placement);
}

/// Spread `order` evenly around the layout circle, starting at angle 0.
fn place_on_circle(order: &[usize], config: &LayoutConfig, placement: &mut Placement) {
	if order.is_empty() {
		return;
	}
	let center = config.center();
	let increment = 2.0 * PI / order.len() as f64;
	for (step, &idx) in order.iter().enumerate() {
		placement[idx] = Some(center.on_circle(config.radius, step as f64 * increment));
	}
}

fn place_bus(groups: &Groups, config: &LayoutConfig, placement: &mut Placement) {
	let (start_x, y) = (config.bus_start_x(), config.height / 2.0);
	for (slot, idx) in groups.in_group_order().enumerate() {
		placement[idx] = Some(Point::new(start_x + slot as f64 * config.bus_spacing, y));
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::topology::device::{DeviceRegistry, DeviceType};

	const EPS: f64 = 1e-9;

	fn registry(kinds: &[DeviceType]) -> DeviceRegistry {
		let mut registry = DeviceRegistry::new();
		for &kind in kinds {
			registry.add(kind);
		}
		registry
	}

	fn angle_of(p: Point, center: Point) -> f64 {
		(p.y - center.y).atan2(p.x - center.x).rem_euclid(2.0 * PI)
	}

	fn distance(a: Point, b: Point) -> f64 {
		((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
	}

	#[test]
	fn star_centres_first_router_and_spreads_the_rest() {
		use DeviceType::*;
		// Interleaved on purpose: layout order comes from the groups.
		let reg = registry(&[Router, Switch, Router, Computer, Switch, Router]);
		let config = LayoutConfig::default();
		let center = config.center();
		let placement = place(reg.list(), &TopologyKind::Star, &config);

		assert_eq!(placement[0], Some(center));

		// routers[1..], switches, computers
		let rim = [2, 5, 1, 4, 3];
		let increment = 2.0 * PI / 5.0;
		for (step, &idx) in rim.iter().enumerate() {
			let p = placement[idx].unwrap();
			assert!((distance(p, center) - config.radius).abs() < EPS);
			let expected = step as f64 * increment;
			assert!((angle_of(p, center) - expected).abs() < 1e-6, "device {idx}");
		}
	}

	#[test]
	fn star_without_routers_puts_everyone_on_the_circle() {
		use DeviceType::*;
		let reg = registry(&[Switch, Computer, Computer, Switch]);
		let config = LayoutConfig::default();
		let center = config.center();
		let placement = place(reg.list(), &TopologyKind::Star, &config);

		let order = [0, 3, 1, 2];
		for (step, &idx) in order.iter().enumerate() {
			let p = placement[idx].unwrap();
			assert!((distance(p, center) - config.radius).abs() < EPS);
			assert!((angle_of(p, center) - step as f64 * PI / 2.0).abs() < 1e-6);
		}
	}

	#[test]
	fn star_with_a_single_router() {
		let reg = registry(&[DeviceType::Router]);
		let config = LayoutConfig::default();
		let placement = place(reg.list(), &TopologyKind::Star, &config);
		assert_eq!(placement, vec![Some(config.center())]);
	}

	#[test]
	fn ring_steps_evenly_and_wraps() {
		use DeviceType::*;
		let reg = registry(&[Computer, Router, Switch, Router, Computer, Switch, Switch]);
		let config = LayoutConfig::default();
		let center = config.center();
		let placement = place(reg.list(), &TopologyKind::Ring, &config);

		let order = [1, 3, 2, 5, 6, 0, 4];
		let increment = 2.0 * PI / order.len() as f64;
		let angles: Vec<f64> = order
			.iter()
			.map(|&idx| angle_of(placement[idx].unwrap(), center))
			.collect();
		for pair in angles.windows(2) {
			assert!((pair[1] - pair[0] - increment).abs() < 1e-6);
		}
		assert!(angles[0].abs() < 1e-6);
		let wrapped = angles[angles.len() - 1] + increment;
		assert!((wrapped - 2.0 * PI).abs() < 1e-6);
	}

	#[test]
	fn bus_runs_left_to_right_in_group_order() {
		use DeviceType::*;
		let reg = registry(&[Switch, Router, Computer, Router, Switch]);
		let config = LayoutConfig::default();
		let placement = place(reg.list(), &TopologyKind::Bus, &config);

		let order = [1, 3, 0, 4, 2];
		for (slot, &idx) in order.iter().enumerate() {
			let p = placement[idx].unwrap();
			assert!((p.x - (200.0 + slot as f64 * 100.0)).abs() < EPS);
			assert!((p.y - 300.0).abs() < EPS);
		}
	}

	#[test]
	fn unknown_kind_places_nothing() {
		let reg = registry(&[DeviceType::Router, DeviceType::Switch]);
		let placement = place(
			reg.list(),
			&TopologyKind::Other("mesh".into()),
			&LayoutConfig::default(),
		);
		assert_eq!(placement, vec![None, None]);
	}

	#[test]
	fn pinned_devices_are_left_alone() {
		use DeviceType::*;
		let mut reg = registry(&[Router, Switch, Computer]);
		let held = Point::new(12.0, 34.0);
		if let Some(device) = reg.get_mut("switch_1") {
			device.position = Some(held);
			device.pinned = true;
		}
		let config = LayoutConfig::default();
		let placement = place(reg.list(), &TopologyKind::Ring, &config);
		assert_eq!(placement[1], None);

		let mut devices = reg.list().to_vec();
		apply(&mut devices, &placement);
		assert_eq!(devices[1].position, Some(held));
		assert!(devices[0].position.is_some());
		assert!(devices[2].position.is_some());

		// Once released the next pass moves it again.
		devices[1].pinned = false;
		let placement = place(&devices, &TopologyKind::Ring, &config);
		apply(&mut devices, &placement);
		assert_ne!(devices[1].position, Some(held));
	}
}
