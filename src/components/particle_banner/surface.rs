//! Drawing surface abstraction.
//!
//! The scene only needs a handful of raster operations, so they sit behind
//! [`Surface`]. [`CanvasSurface`] implements it on an HTML canvas.

use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::error::{BannerError, BannerResult, js_reason};

/// Compositing mode for subsequent draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendMode {
	/// Plain painting over what is already there.
	SourceOver,
	/// Additive-looking blend: overlapping dots brighten.
	Screen,
}

impl BlendMode {
	/// Value for `globalCompositeOperation`.
	pub fn as_css(self) -> &'static str {
		match self {
			BlendMode::SourceOver => "source-over",
			BlendMode::Screen => "screen",
		}
	}
}

/// RGBA pixels read back from a surface, row-major, 4 bytes per pixel.
#[derive(Clone, Debug, Default)]
pub struct PixelBuffer {
	/// Width in pixels.
	pub width: u32,
	/// Height in pixels.
	pub height: u32,
	/// RGBA bytes.
	pub data: Vec<u8>,
}

impl PixelBuffer {
	/// Wrap raw RGBA bytes.
	pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
		Self {
			width,
			height,
			data,
		}
	}

	/// Alpha channel at (x, y). Out-of-range reads are transparent.
	pub fn alpha(&self, x: u32, y: u32) -> u8 {
		if x >= self.width || y >= self.height {
			return 0;
		}
		let idx = (x as usize + y as usize * self.width as usize) * 4 + 3;
		self.data.get(idx).copied().unwrap_or(0)
	}
}

/// Raster operations the banner draws with.
pub trait Surface {
	/// Resize the backing store. Discards all pixel data.
	fn resize(&mut self, width: u32, height: u32);
	/// Clear the whole surface to transparent.
	fn clear(&self);
	/// Compositing for every draw that follows.
	fn set_blend_mode(&self, mode: BlendMode);
	/// Fill `text` horizontally centered on `x` with its baseline at `y`.
	fn fill_text_centered(&self, text: &str, font: &str, x: f64, y: f64);
	/// Fill a disc with a CSS color.
	fn fill_circle(&self, x: f64, y: f64, radius: f64, color: &str);
	/// Read back the top-left `width` x `height` pixels.
	fn read_pixels(&self, width: u32, height: u32) -> BannerResult<PixelBuffer>;
}

/// [`Surface`] backed by a 2d canvas context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Grab the canvas' 2d context.
	pub fn from_canvas(canvas: HtmlCanvasElement) -> BannerResult<Self> {
		let ctx = canvas
			.get_context("2d")
			.map_err(|e| BannerError::Context(js_reason(&e)))?
			.ok_or_else(|| BannerError::Context("canvas returned no 2d context".into()))?
			.dyn_into::<CanvasRenderingContext2d>()
			.map_err(|_| BannerError::Context("context is not a CanvasRenderingContext2d".into()))?;
		Ok(Self { canvas, ctx })
	}
}

impl Surface for CanvasSurface {
	fn resize(&mut self, width: u32, height: u32) {
		self.canvas.set_width(width);
		self.canvas.set_height(height);
	}

	fn clear(&self) {
		self.ctx.clear_rect(
			0.0,
			0.0,
			self.canvas.width() as f64,
			self.canvas.height() as f64,
		);
	}

	fn set_blend_mode(&self, mode: BlendMode) {
		if let Err(e) = self.ctx.set_global_composite_operation(mode.as_css()) {
			log::warn!("header-banner: blend mode {} rejected: {}", mode.as_css(), js_reason(&e));
		}
	}

	fn fill_text_centered(&self, text: &str, font: &str, x: f64, y: f64) {
		self.ctx.set_font(font);
		self.ctx.set_text_align("center");
		if let Err(e) = self.ctx.fill_text(text, x, y) {
			log::warn!("header-banner: fill_text failed: {}", js_reason(&e));
		}
	}

	fn fill_circle(&self, x: f64, y: f64, radius: f64, color: &str) {
		self.ctx.set_fill_style_str(color);
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, PI * 2.0);
		self.ctx.fill();
	}

	fn read_pixels(&self, width: u32, height: u32) -> BannerResult<PixelBuffer> {
		if width == 0 || height == 0 {
			return Ok(PixelBuffer::new(width, height, Vec::new()));
		}
		let image = self
			.ctx
			.get_image_data(0.0, 0.0, width as f64, height as f64)
			.map_err(|e| BannerError::PixelReadback(js_reason(&e)))?;
		Ok(PixelBuffer::new(image.width(), image.height(), image.data().0))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn alpha_reads_fourth_channel() {
		let mut data = vec![0u8; 2 * 2 * 4];
		// pixel (1, 1) of a 2x2 buffer starts at byte 12
		data[12] = 9;
		data[15] = 200;
		let buffer = PixelBuffer::new(2, 2, data);
		assert_eq!(buffer.alpha(1, 1), 200);
		assert_eq!(buffer.alpha(0, 1), 0);
	}

	#[test]
	fn out_of_range_alpha_is_transparent() {
		let buffer = PixelBuffer::new(1, 1, vec![255, 255, 255, 255]);
		assert_eq!(buffer.alpha(0, 0), 255);
		assert_eq!(buffer.alpha(1, 0), 0);
		assert_eq!(buffer.alpha(0, 5), 0);
	}

	#[test]
	fn blend_modes_map_to_composite_operations() {
		assert_eq!(BlendMode::Screen.as_css(), "screen");
		assert_eq!(BlendMode::SourceOver.as_css(), "source-over");
	}
}
