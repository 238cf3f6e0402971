use leptos::prelude::*;

use crate::components::SharedEditor;
use crate::components::toolbar::Toolbar;
use crate::components::topology_canvas::TopologyCanvas;
use crate::topology::{LayoutConfig, TopologyEditor};

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let editor: SharedEditor =
		StoredValue::new_local(TopologyEditor::with_force_graph(LayoutConfig::default()));

	view! {
		<div class="topology-editor">
			<h1>"Network Topology"</h1>
			<p class="subtitle">
				"Add devices, pick a shape and generate links. Drag devices to reposition them."
			</p>
			<Toolbar editor=editor />
			<TopologyCanvas editor=editor />
		</div>
	}
}
