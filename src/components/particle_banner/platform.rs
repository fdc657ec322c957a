//! Host scheduling and navigation services.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{PopStateEvent, Window};

use super::error::{BannerError, BannerResult, js_reason};
use super::types::FrameHandle;

/// Services the controller needs from its host besides the drawing surface.
pub trait Platform {
	/// Delayed callback handle. Dropping it cancels the callback.
	type Timer;

	/// Drop a requested animation frame before it fires.
	fn cancel_frame(&self, handle: FrameHandle);
	/// Run `callback` once after `millis`, unless the timer is dropped first.
	fn schedule_after(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Self::Timer;
	/// Client-side transition to `path`.
	fn navigate(&self, path: &str) -> BannerResult<()>;
}

/// Browser platform: `window` animation frames, gloo timers, History API.
pub struct WebPlatform {
	window: Window,
}

impl WebPlatform {
	/// Platform backed by `window`.
	pub fn new(window: Window) -> Self {
		Self { window }
	}
}

impl Platform for WebPlatform {
	type Timer = Timeout;

	fn cancel_frame(&self, handle: FrameHandle) {
		if let Err(e) = self.window.cancel_animation_frame(handle.0) {
			log::warn!("header-banner: cancel_animation_frame failed: {}", js_reason(&e));
		}
	}

	fn schedule_after(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Timeout {
		Timeout::new(millis, callback)
	}

	fn navigate(&self, path: &str) -> BannerResult<()> {
		let fail = |e: JsValue| BannerError::Navigation {
			path: path.to_string(),
			reason: js_reason(&e),
		};
		let history = self.window.history().map_err(fail)?;
		history
			.push_state_with_url(&JsValue::NULL, "", Some(path))
			.map_err(fail)?;
		// Routers listen for popstate; pushState alone does not fire it.
		let event = PopStateEvent::new("popstate").map_err(fail)?;
		self.window.dispatch_event(&event).map_err(fail)?;
		Ok(())
	}
}
