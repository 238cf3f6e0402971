use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::render::{self, CanvasScene, ICON_SIZE};
use crate::components::SharedEditor;
use crate::topology::Point;

/// Longest frame step handed to the simulation, in seconds. Keeps a tab
/// that was in the background from flinging every particle off screen.
const MAX_FRAME_DT: f64 = 0.05;

fn pointer_position(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<Point> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some(Point::new(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

#[component]
pub fn TopologyCanvas(editor: SharedEditor) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let dragging: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window): Option<Window> = web_sys::window() else {
			error!("No window to animate in");
			return;
		};

		let (w, h) = editor.with_value(|e| (e.config().width, e.config().height));
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
			Ok(Some(ctx)) => match ctx.dyn_into() {
				Ok(ctx) => ctx,
				Err(_) => {
					error!("Canvas context is not a 2d rendering context");
					return;
				}
			},
			_ => {
				error!("2d canvas context unavailable");
				return;
			}
		};
		let mut scene = CanvasScene::new(ctx);
		let mut last_frame = js_sys::Date::now();

		let animate_inner = animate.clone();
		*animate.borrow_mut() = Some(Closure::new(move || {
			let now = js_sys::Date::now();
			let dt = ((now - last_frame) / 1000.0).clamp(0.0, MAX_FRAME_DT) as f32;
			last_frame = now;

			let alive = editor
				.try_update_value(|editor| {
					editor.tick(dt);
					render::render(editor, &mut scene);
				})
				.is_some();
			// The editor went away with its owner; stop scheduling frames.
			if !alive {
				return;
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(win) = web_sys::window() {
					let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let dragging_md = dragging.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(point) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		let hit = editor.with_value(|e| e.device_at(point, ICON_SIZE / 2.0).map(|d| d.id.clone()));
		let Some(id) = hit else {
			return;
		};
		match editor.try_update_value(|e| e.drag_start(&id)) {
			Some(Ok(())) => *dragging_md.borrow_mut() = Some(id),
			Some(Err(err)) => warn!("Drag start ignored: {}", err),
			None => {}
		}
	};

	let dragging_mm = dragging.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(id) = dragging_mm.borrow().clone() else {
			return;
		};
		let Some(point) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(Err(err)) = editor.try_update_value(|e| e.drag_move(&id, point)) {
			warn!("Drag move ignored: {}", err);
		}
	};

	let end_drag = move |dragging: &RefCell<Option<String>>| {
		let Some(id) = dragging.borrow_mut().take() else {
			return;
		};
		if let Some(Err(err)) = editor.try_update_value(|e| e.drag_end(&id)) {
			warn!("Drag end ignored: {}", err);
		}
	};
	let dragging_mu = dragging.clone();
	let on_mouseup = move |_: MouseEvent| end_drag(&dragging_mu);
	let on_mouseleave = move |_: MouseEvent| end_drag(&dragging);

	view! {
		<canvas
			node_ref=canvas_ref
			class="topology-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			style="display: block; cursor: grab;"
		/>
	}
}
