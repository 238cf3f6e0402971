//! Link synthesis. Shape-agnostic: the same rules apply to every topology kind.

use log::debug;

use super::device::{Device, Groups};
use super::types::Link;

/// Build the full link set for `devices` from scratch.
///
/// - every router links to every router added before it
/// - switch `i` links to router `i mod routers`
/// - computer `i` links to switch `i mod switches`
///
/// An empty router or switch group yields no links for the dependent group.
pub fn synthesize(devices: &[Device]) -> Vec<Link> {
	let groups = Groups::partition(devices);
	let id = |idx: usize| devices[idx].id.clone();
	let mut links = Vec::new();

	for (i, &router) in groups.routers.iter().enumerate() {
		for &earlier in &groups.routers[..i] {
			links.push(Link::new(id(router), id(earlier)));
		}
	}

	attach(&groups.switches, &groups.routers, &id, &mut links);
	attach(&groups.computers, &groups.switches, &id, &mut links);

	links
}

fn attach(
	members: &[usize],
	uplinks: &[usize],
	id: &impl Fn(usize) -> String,
	links: &mut Vec<Link>,
) {
	if uplinks.is_empty() {
		if !members.is_empty() {
			debug!("{} device(s) left unlinked: nothing to attach to", members.len());
		}
		return;
	}
	for (i, &member) in members.iter().enumerate() {
		links.push(Link::new(id(member), id(uplinks[i % uplinks.len()])));
	}
}
