use leptos::prelude::*;
use log::warn;
use web_sys::{Event, MouseEvent};

use super::SharedEditor;
use crate::topology::{DeviceType, TopologyKind};

/// Controls for adding devices and generating the topology.
#[component]
pub fn Toolbar(editor: SharedEditor) -> impl IntoView {
	let (device_type, set_device_type) = signal(DeviceType::Router.as_str().to_string());
	// (devices, links)
	let (counts, set_counts) = signal((0usize, 0usize));
	let refresh_counts = move || {
		if let Some(c) = editor.try_with_value(|e| (e.devices().len(), e.links().len())) {
			set_counts.set(c);
		}
	};

	let on_add = move |_: MouseEvent| {
		let kind = match device_type.get_untracked().parse::<DeviceType>() {
			Ok(kind) => kind,
			Err(err) => {
				warn!("{}", err);
				return;
			}
		};
		editor.update_value(|e| {
			e.add_device(kind);
		});
		refresh_counts();
	};

	let on_kind = move |ev: Event| {
		let kind = TopologyKind::from(event_target_value(&ev).as_str());
		editor.update_value(|e| e.set_topology_kind(kind));
	};

	let on_generate = move |_: MouseEvent| {
		editor.update_value(|e| e.generate_topology());
		refresh_counts();
	};

	view! {
		<div class="toolbar">
			<label>
				"Device "
				<select on:change=move |ev| set_device_type.set(event_target_value(&ev))>
					{DeviceType::ALL
						.into_iter()
						.map(|kind| view! { <option value=kind.as_str()>{kind.as_str()}</option> })
						.collect_view()}
				</select>
			</label>
			<button on:click=on_add>"Add device"</button>
			<label>
				"Topology "
				<select on:change=on_kind>
					<option value="star">"Star"</option>
					<option value="bus">"Bus"</option>
					<option value="ring">"Ring"</option>
				</select>
			</label>
			<button on:click=on_generate>"Generate topology"</button>
			<span class="status">
				{move || {
					let (devices, links) = counts.get();
					format!("{} devices, {} links", devices, links)
				}}
			</span>
		</div>
	}
}
