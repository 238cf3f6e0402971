//! Browser entry point for the topology editor.

// Every dependency is used by the library; this target only mounts it.
#![allow(unused_crate_dependencies)]

use leptos::prelude::*;
use network_topology_canvas::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(App)
}
