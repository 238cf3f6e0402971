use std::collections::HashMap;

use log::warn;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::topology::{DeviceType, ForceLayout, Point, TopologyEditor};

pub const ICON_SIZE: f64 = 40.0;
/// Distance from a device's centre down to its label baseline.
pub const LABEL_OFFSET: f64 = 25.0;

const BACKGROUND: &str = "#ffffff";
const EDGE_COLOR: &str = "#999";
const EDGE_WIDTH: f64 = 2.0;
const LABEL_COLOR: &str = "#222";
const LABEL_FONT: &str = "12px sans-serif";

fn placeholder_color(kind: DeviceType) -> &'static str {
	match kind {
		DeviceType::Router => "#1f77b4",
		DeviceType::Switch => "#ff7f0e",
		DeviceType::Computer => "#2ca02c",
	}
}

/// Drawing primitives the topology is rendered with.
pub trait Scene {
	fn clear(&mut self, width: f64, height: f64);
	fn line(&mut self, from: Point, to: Point);
	/// Draw the asset of a `kind` device with its top-left corner at `at`.
	fn image(&mut self, kind: DeviceType, at: Point, size: f64);
	/// Draw `text` horizontally centred on `at`.
	fn text(&mut self, text: &str, at: Point);
}

/// Redraw the whole topology from the editor's current state.
///
/// Link endpoints are looked up from the devices on every call, so edges
/// follow their devices as the simulation moves them.
pub fn render<L: ForceLayout>(editor: &TopologyEditor<L>, scene: &mut impl Scene) {
	let config = editor.config();
	scene.clear(config.width, config.height);

	for link in editor.links() {
		if let (Some(from), Some(to)) = (
			editor.position_of(&link.source),
			editor.position_of(&link.target),
		) {
			scene.line(from, to);
		}
	}

	let center = config.center();
	let half = ICON_SIZE / 2.0;
	for device in editor.devices() {
		let p = device.position.unwrap_or(center);
		scene.image(device.kind, Point::new(p.x - half, p.y - half), ICON_SIZE);
	}
	for device in editor.devices() {
		let p = device.position.unwrap_or(center);
		scene.text(&device.id, Point::new(p.x, p.y + LABEL_OFFSET));
	}
}

/// [`Scene`] on a 2d canvas context. Device images are loaded once up front;
/// until one has loaded its devices are drawn as coloured squares.
pub struct CanvasScene {
	ctx: CanvasRenderingContext2d,
	images: HashMap<DeviceType, HtmlImageElement>,
}

impl CanvasScene {
	pub fn new(ctx: CanvasRenderingContext2d) -> Self {
		let mut images = HashMap::new();
		for kind in DeviceType::ALL {
			match HtmlImageElement::new() {
				Ok(img) => {
					img.set_src(kind.asset_ref());
					images.insert(kind, img);
				}
				Err(err) => warn!("Could not create image for {}: {:?}", kind, err),
			}
		}
		Self { ctx, images }
	}
}

impl Scene for CanvasScene {
	fn clear(&mut self, width: f64, height: f64) {
		self.ctx.set_fill_style_str(BACKGROUND);
		self.ctx.fill_rect(0.0, 0.0, width, height);
	}

	fn line(&mut self, from: Point, to: Point) {
		self.ctx.set_stroke_style_str(EDGE_COLOR);
		self.ctx.set_line_width(EDGE_WIDTH);
		self.ctx.begin_path();
		self.ctx.move_to(from.x, from.y);
		self.ctx.line_to(to.x, to.y);
		self.ctx.stroke();
	}

	fn image(&mut self, kind: DeviceType, at: Point, size: f64) {
		let loaded = self
			.images
			.get(&kind)
			.filter(|img| img.complete() && img.natural_width() > 0);
		let drawn = match loaded {
			Some(img) => self
				.ctx
				.draw_image_with_html_image_element_and_dw_and_dh(img, at.x, at.y, size, size)
				.is_ok(),
			None => false,
		};
		if !drawn {
			self.ctx.set_fill_style_str(placeholder_color(kind));
			self.ctx.fill_rect(at.x, at.y, size, size);
		}
	}

	fn text(&mut self, text: &str, at: Point) {
		self.ctx.set_fill_style_str(LABEL_COLOR);
		self.ctx.set_font(LABEL_FONT);
		self.ctx.set_text_align("center");
		let _ = self.ctx.fill_text(text, at.x, at.y);
	}
}
