//! header-banner: particle title banner for the landing page.
//!
//! This crate provides a WASM-based banner component that rasterizes a title
//! into particles which scatter away from the cursor and drift back home.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::particle_banner::{BannerConfig, BannerError, ParticleBanner};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("header-banner: logging initialized");
}

/// Load banner configuration from a script element with id="banner-config".
/// Expected format: JSON object with any subset of [`BannerConfig`] fields.
fn load_banner_config() -> Option<BannerConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("banner-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match BannerConfig::from_json(&json_text) {
		Ok(config) => {
			info!("header-banner: loaded config for title {:?}", config.title);
			Some(config)
		}
		Err(e) => {
			warn!("header-banner: {}; using defaults", e);
			None
		}
	}
}

/// Main application component.
/// Loads the banner config from the DOM and renders the header.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_banner_config().unwrap_or_default();
	let title = config.title.clone();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text=title.clone() />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<header class="header-banner">
			<h1 class="visually-hidden">{title}</h1>
			<ParticleBanner config=config cta_label="Contact us" />
		</header>
	}
}
