//! In-memory surface and platform for unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::error::{BannerError, BannerResult};
use super::platform::Platform;
use super::surface::{BlendMode, PixelBuffer, Surface};
use super::types::FrameHandle;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
	Resize(u32, u32),
	Clear,
	Blend(BlendMode),
	Text {
		text: String,
		font: String,
		x: f64,
		y: f64,
	},
	Circle {
		x: f64,
		y: f64,
		radius: f64,
		color: String,
	},
	ReadPixels(u32, u32),
}

/// Records every call and serves pixels from configured opaque rectangles.
#[derive(Default)]
pub struct RecordingSurface {
	calls: RefCell<Vec<Call>>,
	/// Inclusive (x0, y0, x1, y1, alpha) rectangles.
	rects: Vec<(u32, u32, u32, u32, u8)>,
	fail_readback: bool,
}

impl RecordingSurface {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_opaque_rect(mut self, x0: u32, y0: u32, x1: u32, y1: u32, alpha: u8) -> Self {
		self.rects.push((x0, y0, x1, y1, alpha));
		self
	}

	pub fn failing_readback(mut self) -> Self {
		self.fail_readback = true;
		self
	}

	pub fn calls(&self) -> Vec<Call> {
		self.calls.borrow().clone()
	}

	pub fn take_calls(&self) -> Vec<Call> {
		std::mem::take(&mut *self.calls.borrow_mut())
	}

	fn record(&self, call: Call) {
		self.calls.borrow_mut().push(call);
	}
}

impl Surface for RecordingSurface {
	fn resize(&mut self, width: u32, height: u32) {
		self.record(Call::Resize(width, height));
	}

	fn clear(&self) {
		self.record(Call::Clear);
	}

	fn set_blend_mode(&self, mode: BlendMode) {
		self.record(Call::Blend(mode));
	}

	fn fill_text_centered(&self, text: &str, font: &str, x: f64, y: f64) {
		self.record(Call::Text {
			text: text.to_string(),
			font: font.to_string(),
			x,
			y,
		});
	}

	fn fill_circle(&self, x: f64, y: f64, radius: f64, color: &str) {
		self.record(Call::Circle {
			x,
			y,
			radius,
			color: color.to_string(),
		});
	}

	fn read_pixels(&self, width: u32, height: u32) -> BannerResult<PixelBuffer> {
		self.record(Call::ReadPixels(width, height));
		if self.fail_readback {
			return Err(BannerError::PixelReadback("surface lost".into()));
		}
		let mut data = vec![0u8; width as usize * height as usize * 4];
		if data.is_empty() {
			return Ok(PixelBuffer::new(width, height, data));
		}
		for &(x0, y0, x1, y1, alpha) in &self.rects {
			for y in y0..=y1.min(height.saturating_sub(1)) {
				for x in x0..=x1.min(width.saturating_sub(1)) {
					data[(x as usize + y as usize * width as usize) * 4 + 3] = alpha;
				}
			}
		}
		Ok(PixelBuffer::new(width, height, data))
	}
}

struct PendingTimer {
	millis: u32,
	cancelled: Rc<Cell<bool>>,
	callback: Box<dyn FnOnce()>,
}

/// Handle for a [`ManualPlatform`] timer. Dropping it cancels the timer.
pub struct ManualTimer(Rc<Cell<bool>>);

impl Drop for ManualTimer {
	fn drop(&mut self) {
		self.0.set(true);
	}
}

/// Platform whose timers only fire when the test says so.
#[derive(Default)]
pub struct ManualPlatform {
	timers: RefCell<Vec<PendingTimer>>,
	pub cancelled_frames: RefCell<Vec<FrameHandle>>,
	pub navigations: RefCell<Vec<String>>,
	fail_navigation: bool,
}

impl ManualPlatform {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn failing_navigation(mut self) -> Self {
		self.fail_navigation = true;
		self
	}

	/// Delays of timers still waiting to fire.
	pub fn pending_delays(&self) -> Vec<u32> {
		self.timers
			.borrow()
			.iter()
			.filter(|t| !t.cancelled.get())
			.map(|t| t.millis)
			.collect()
	}

	/// Run every live timer; returns how many fired.
	pub fn fire_timers(&self) -> usize {
		let timers = std::mem::take(&mut *self.timers.borrow_mut());
		let mut fired = 0;
		for timer in timers {
			if !timer.cancelled.get() {
				(timer.callback)();
				fired += 1;
			}
		}
		fired
	}
}

impl Platform for ManualPlatform {
	type Timer = ManualTimer;

	fn cancel_frame(&self, handle: FrameHandle) {
		self.cancelled_frames.borrow_mut().push(handle);
	}

	fn schedule_after(&self, millis: u32, callback: Box<dyn FnOnce()>) -> ManualTimer {
		let cancelled = Rc::new(Cell::new(false));
		self.timers.borrow_mut().push(PendingTimer {
			millis,
			cancelled: cancelled.clone(),
			callback,
		});
		ManualTimer(cancelled)
	}

	fn navigate(&self, path: &str) -> BannerResult<()> {
		if self.fail_navigation {
			return Err(BannerError::Navigation {
				path: path.to_string(),
				reason: "history unavailable".into(),
			});
		}
		self.navigations.borrow_mut().push(path.to_string());
		Ok(())
	}
}
