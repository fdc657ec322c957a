//! Leptos component wrapping the particle banner canvas.
//!
//! The component sizes a canvas to its host element, builds a
//! [`BannerController`] on mount, and forwards pointer, touch, click and
//! window-resize events to its [`LifecycleHooks`]. An animation loop runs via
//! `requestAnimationFrame` until the component is cleaned up.

use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, HtmlDivElement, MouseEvent, TouchEvent};

use super::config::BannerConfig;
use super::controller::{BannerController, LifecycleHooks};
use super::error::js_reason;
use super::frame_loop::CancelToken;
use super::platform::{Platform, WebPlatform};
use super::surface::{CanvasSurface, Surface};
use super::types::{Coordinate, FrameHandle};

type WebController = BannerController<CanvasSurface, WebPlatform>;
type SharedController = Rc<RefCell<Option<WebController>>>;
type SharedCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Everything the mount effect creates, released together on cleanup.
#[derive(Clone, Default)]
struct Mounted {
	controller: SharedController,
	/// Lets cleanup stop the loop even while the controller is borrowed.
	token: Rc<RefCell<Option<CancelToken>>>,
	animate: SharedCallback,
	resize_cb: SharedCallback,
}

fn host_size(host: &HtmlDivElement) -> (u32, u32) {
	(
		host.client_width().max(0) as u32,
		host.client_height().max(0) as u32,
	)
}

/// Client coordinates translated into the host element's box.
fn local_point(host_ref: NodeRef<leptos::html::Div>, client_x: i32, client_y: i32) -> Option<Coordinate> {
	let host = host_ref.get_untracked()?;
	let rect = host.get_bounding_client_rect();
	let client = Coordinate::new(client_x as f64, client_y as f64);
	Some(client.relative_to(Coordinate::new(rect.left(), rect.top())))
}

/// Run one frame for the controller in `slot`.
///
/// Once the loop is cancelled the controller is taken out and torn down, so
/// a cleanup that found it borrowed still releases it here.
fn drive_frame<S: Surface + 'static, P: Platform>(
	slot: &mut Option<BannerController<S, P>>,
) -> ControlFlow<()> {
	let Some(c) = slot.as_mut() else {
		return ControlFlow::Break(());
	};
	if c.frame().is_break() {
		if let Some(mut c) = slot.take() {
			c.on_teardown();
		}
		return ControlFlow::Break(());
	}
	ControlFlow::Continue(())
}

/// Title rendered as particles that scatter away from the cursor.
///
/// Fills its parent; give the parent a height. Clicking toggles a wider
/// repulsion radius, and the call-to-action button navigates to
/// `config.destination`.
#[component]
pub fn ParticleBanner(
	#[prop(optional)] config: Option<BannerConfig>,
	#[prop(into, default = "Get in touch".to_string())] cta_label: String,
) -> impl IntoView {
	let config = config.unwrap_or_default();
	let host_ref = NodeRef::<leptos::html::Div>::new();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let mounted = Mounted::default();
	let mounted_init = mounted.clone();

	Effect::new(move |_| {
		let (Some(host), Some(canvas)) = (host_ref.get(), canvas_ref.get()) else {
			return;
		};
		if mounted_init.controller.borrow().is_some() {
			return;
		}
		let Some(window) = web_sys::window() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		let surface = match CanvasSurface::from_canvas(canvas) {
			Ok(surface) => surface,
			Err(e) => {
				warn!("header-banner: {}; banner stays blank", e);
				return;
			}
		};
		let mut controller =
			BannerController::new(surface, WebPlatform::new(window.clone()), config.clone());
		let (w, h) = host_size(&host);
		controller.on_mount(w, h);
		*mounted_init.token.borrow_mut() = Some(controller.cancel_token());
		*mounted_init.controller.borrow_mut() = Some(controller);

		let (controller_resize, host_resize) = (mounted_init.controller.clone(), host.clone());
		*mounted_init.resize_cb.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *controller_resize.borrow_mut() {
				let (nw, nh) = host_size(&host_resize);
				c.on_resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *mounted_init.resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (controller_anim, animate_inner) =
			(mounted_init.controller.clone(), mounted_init.animate.clone());
		*mounted_init.animate.borrow_mut() = Some(Closure::new(move || {
			let mut guard = controller_anim.borrow_mut();
			if drive_frame(&mut guard).is_break() {
				// A closure cannot free itself while it runs.
				let slot = animate_inner.clone();
				Timeout::new(0, move || drop(slot.borrow_mut().take())).forget();
				return;
			}
			let Some(c) = guard.as_mut() else {
				return;
			};
			if let (Some(cb), Some(win)) = (animate_inner.borrow().as_ref(), web_sys::window()) {
				match win.request_animation_frame(cb.as_ref().unchecked_ref()) {
					Ok(id) => c.frame_requested(FrameHandle(id)),
					Err(e) => warn!("header-banner: requestAnimationFrame failed: {}", js_reason(&e)),
				}
			}
		}));
		if let Some(ref cb) = *mounted_init.animate.borrow() {
			match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				Ok(id) => {
					if let Some(ref mut c) = *mounted_init.controller.borrow_mut() {
						c.frame_requested(FrameHandle(id));
					}
				}
				Err(e) => warn!("header-banner: requestAnimationFrame failed: {}", js_reason(&e)),
			}
		}
	});

	let stored = StoredValue::new_local(mounted.clone());
	on_cleanup(move || {
		let Some(mounted) = stored.try_get_value() else {
			return;
		};
		if let Some(token) = mounted.token.borrow().as_ref() {
			token.cancel();
		}
		if let (Some(window), Some(cb)) = (web_sys::window(), mounted.resize_cb.borrow_mut().take()) {
			let _ = window.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
		// Unmounting from inside a handler (e.g. the CTA navigating away) finds
		// the controller borrowed. The cancelled token then makes the next
		// frame tear the controller down and release the frame callback.
		let Ok(mut slot) = mounted.controller.try_borrow_mut() else {
			return;
		};
		if let Some(mut c) = slot.take() {
			c.on_teardown();
		}
		mounted.animate.borrow_mut().take();
	});

	let controller_mm = mounted.controller.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(point) = local_point(host_ref, ev.client_x(), ev.client_y()) else {
			return;
		};
		if let Some(ref mut c) = *controller_mm.borrow_mut() {
			c.on_pointer_move(point.x, point.y);
		}
	};

	let controller_tm = mounted.controller.clone();
	let on_touchmove = move |ev: TouchEvent| {
		let Some(touch) = ev.touches().get(0) else {
			return;
		};
		let Some(point) = local_point(host_ref, touch.client_x(), touch.client_y()) else {
			return;
		};
		if let Some(ref mut c) = *controller_tm.borrow_mut() {
			c.on_pointer_move(point.x, point.y);
		}
	};

	let controller_ml = mounted.controller.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *controller_ml.borrow_mut() {
			c.on_pointer_leave();
		}
	};

	let controller_ck = mounted.controller.clone();
	let on_click = move |_: MouseEvent| {
		if let Some(ref mut c) = *controller_ck.borrow_mut() {
			c.on_click();
		}
	};

	let controller_ts = mounted.controller.clone();
	let on_touchstart = move |_: TouchEvent| {
		if let Some(ref mut c) = *controller_ts.borrow_mut() {
			c.on_touch_start();
		}
	};

	let controller_cta = mounted.controller.clone();
	let on_cta = move |ev: MouseEvent| {
		// Keep the click from also toggling the radius.
		ev.stop_propagation();
		if let Some(ref c) = *controller_cta.borrow() {
			c.navigate();
		}
	};

	view! {
		<div
			node_ref=host_ref
			class="particle-banner"
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			on:touchmove=on_touchmove
			on:touchstart=on_touchstart
			on:click=on_click
			style="position: relative; width: 100%; height: 100%; overflow: hidden;"
		>
			<canvas
				node_ref=canvas_ref
				class="particle-banner-canvas"
				style="display: block; position: absolute; inset: 0;"
			/>
			<button
				class="particle-banner-cta"
				on:click=on_cta
				style="position: absolute; left: 50%; bottom: 12%; transform: translateX(-50%);"
			>
				{cta_label}
			</button>
		</div>
	}
}
