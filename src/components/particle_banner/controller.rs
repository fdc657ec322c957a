//! Lifecycle and input hooks for the banner.
//!
//! [`BannerController`] maps host events onto scene mutations. It does no
//! drawing of its own apart from driving [`Scene::render_frame`] through the
//! [`FrameLoop`].

use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

use log::{info, warn};

use super::config::BannerConfig;
use super::frame_loop::{CancelToken, FrameLoop};
use super::platform::Platform;
use super::scene::Scene;
use super::surface::Surface;
use super::types::FrameHandle;

/// Events a host adapter forwards to the banner.
pub trait LifecycleHooks {
	/// Host element is in the DOM and has a size.
	fn on_mount(&mut self, width: u32, height: u32);
	/// Host element changed size; the scene is rebuilt.
	fn on_resize(&mut self, width: u32, height: u32);
	/// Pointer moved to host-local (x, y).
	fn on_pointer_move(&mut self, x: f64, y: f64);
	/// Pointer left the host.
	fn on_pointer_leave(&mut self);
	/// Click anywhere on the host.
	fn on_click(&mut self);
	/// A touch began; the pointer is released shortly after.
	fn on_touch_start(&mut self);
	/// Host is going away. Stops the loop and any pending timer.
	fn on_teardown(&mut self);
}

/// Owns the scene and frame loop and reacts to [`LifecycleHooks`].
pub struct BannerController<S: Surface, P: Platform> {
	scene: Rc<RefCell<Scene<S>>>,
	platform: P,
	frame_loop: FrameLoop,
	touch_release: Option<P::Timer>,
}

impl<S: Surface + 'static, P: Platform> BannerController<S, P> {
	/// Controller for an unmounted banner.
	pub fn new(surface: S, platform: P, config: BannerConfig) -> Self {
		Self {
			scene: Rc::new(RefCell::new(Scene::new(surface, config))),
			platform,
			frame_loop: FrameLoop::new(),
			touch_release: None,
		}
	}

	/// One refresh tick. `Break` means the loop is over and the host must not
	/// request another frame.
	pub fn frame(&mut self) -> ControlFlow<()> {
		let scene = &self.scene;
		self.frame_loop.step(|| scene.borrow_mut().render_frame())
	}

	/// Record the host's id for the next frame so teardown can cancel it.
	pub fn frame_requested(&mut self, handle: FrameHandle) {
		self.frame_loop.frame_requested(handle);
	}

	/// Open the call-to-action route. Failures are logged only.
	pub fn navigate(&self) {
		let destination = self.scene.borrow().config().destination.clone();
		match self.platform.navigate(&destination) {
			Ok(()) => info!("header-banner: navigating to {}", destination),
			Err(e) => warn!("header-banner: {}", e),
		}
	}

	/// Borrow the scene.
	pub fn scene(&self) -> std::cell::Ref<'_, Scene<S>> {
		self.scene.borrow()
	}

	/// Token that stops the frame loop without borrowing the controller.
	pub fn cancel_token(&self) -> CancelToken {
		self.frame_loop.token()
	}

	/// False once the loop has been cancelled.
	pub fn is_running(&self) -> bool {
		!self.frame_loop.is_cancelled()
	}

	#[cfg(test)]
	pub(crate) fn platform(&self) -> &P {
		&self.platform
	}
}

impl<S: Surface + 'static, P: Platform> LifecycleHooks for BannerController<S, P> {
	fn on_mount(&mut self, width: u32, height: u32) {
		info!("header-banner: mounted at {}x{}", width, height);
		self.scene.borrow_mut().initialize(width, height);
	}

	fn on_resize(&mut self, width: u32, height: u32) {
		self.scene.borrow_mut().initialize(width, height);
	}

	fn on_pointer_move(&mut self, x: f64, y: f64) {
		self.scene.borrow_mut().set_pointer(x, y);
	}

	fn on_pointer_leave(&mut self) {
		self.scene.borrow_mut().release_pointer();
	}

	fn on_click(&mut self) {
		self.scene.borrow_mut().cycle_radius();
	}

	/// Touch has no "leave" event, so the pointer is released after a delay.
	/// A newer touch replaces (and thereby cancels) the pending release.
	fn on_touch_start(&mut self) {
		let delay = self.scene.borrow().config().touch_release_ms;
		let scene = Rc::downgrade(&self.scene);
		self.touch_release = Some(self.platform.schedule_after(
			delay,
			Box::new(move || {
				if let Some(scene) = scene.upgrade() {
					scene.borrow_mut().release_pointer();
				}
			}),
		));
	}

	fn on_teardown(&mut self) {
		if let Some(handle) = self.frame_loop.cancel() {
			self.platform.cancel_frame(handle);
		}
		self.touch_release = None;
		info!(
			"header-banner: torn down after {} frames",
			self.frame_loop.frames()
		);
	}
}
