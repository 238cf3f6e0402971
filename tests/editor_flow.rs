//! End-to-end editor behaviour on the force_graph backend.

#![allow(unused_crate_dependencies)]

use std::f64::consts::PI;

use network_topology_canvas::topology::{
	DeviceType, LayoutConfig, Point, TopologyEditor, TopologyKind,
};

fn distance(a: Point, b: Point) -> f64 {
	((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

#[test]
fn star_example_from_three_routers_two_switches_one_computer() {
	let config = LayoutConfig::default();
	let center = config.center();
	let mut editor = TopologyEditor::with_force_graph(config.clone());
	editor.set_topology_kind(TopologyKind::Star);
	for kind in [
		DeviceType::Router,
		DeviceType::Router,
		DeviceType::Router,
		DeviceType::Switch,
		DeviceType::Switch,
		DeviceType::Computer,
	] {
		editor.add_device(kind);
	}
	editor.generate_topology();

	assert_eq!(editor.position_of("router_1"), Some(center));

	let rim = ["router_2", "router_3", "switch_1", "switch_2", "computer_1"];
	for (step, id) in rim.iter().enumerate() {
		let p = editor.position_of(id).unwrap();
		assert!((distance(p, center) - config.radius).abs() < 1e-9);
		let angle = (p.y - center.y).atan2(p.x - center.x).rem_euclid(2.0 * PI);
		assert!((angle - step as f64 * 2.0 * PI / 5.0).abs() < 1e-6, "{id}");
	}

	// 3 router pairs, 2 switch uplinks, 1 computer uplink
	assert_eq!(editor.links().len(), 6);
}

#[test]
fn generate_twice_yields_the_same_links() {
	let mut editor = TopologyEditor::with_force_graph(LayoutConfig::default());
	for kind in [DeviceType::Computer, DeviceType::Router, DeviceType::Switch] {
		editor.add_device(kind);
	}
	editor.set_topology_kind(TopologyKind::Ring);
	editor.generate_topology();
	let first = editor.links().to_vec();
	editor.generate_topology();
	assert_eq!(editor.links(), &first[..]);
}

#[test]
fn simulation_moves_free_devices_but_not_the_dragged_one() {
	let mut editor = TopologyEditor::with_force_graph(LayoutConfig::default());
	editor.set_topology_kind(TopologyKind::Bus);
	for kind in [DeviceType::Router, DeviceType::Switch, DeviceType::Computer] {
		editor.add_device(kind);
	}
	editor.generate_topology();

	let held = Point::new(120.0, 80.0);
	editor.drag_start("switch_1").unwrap();
	editor.drag_move("switch_1", held).unwrap();

	for _ in 0..30 {
		assert!(editor.tick(0.016));
	}
	assert_eq!(editor.position_of("switch_1"), Some(held));
	for device in editor.devices() {
		let p = device.position.unwrap();
		assert!(p.x.is_finite() && p.y.is_finite(), "{} drifted to NaN", device.id);
	}

	editor.drag_end("switch_1").unwrap();
	assert!(!editor.device("switch_1").unwrap().pinned);

	let mut frames = 0;
	while editor.tick(0.016) {
		frames += 1;
		assert!(frames < 2000, "layout never settled");
	}
}

#[test]
fn ids_stay_unique_and_increase_per_type() {
	let mut editor = TopologyEditor::with_force_graph(LayoutConfig::default());
	let mut ids = Vec::new();
	for kind in [
		DeviceType::Switch,
		DeviceType::Router,
		DeviceType::Switch,
		DeviceType::Switch,
		DeviceType::Router,
	] {
		ids.push(editor.add_device(kind).id.clone());
	}
	assert_eq!(
		ids,
		["switch_1", "router_1", "switch_2", "switch_3", "router_2"]
	);
}
