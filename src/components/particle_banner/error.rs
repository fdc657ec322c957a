//! Error types for the banner.
//!
//! None of these are fatal to the page. The worst outcome is a blank banner.

use wasm_bindgen::JsValue;

/// Everything that can go wrong between the banner and the browser.
#[derive(Debug, thiserror::Error)]
pub enum BannerError {
	/// The canvas node was not in the DOM when the banner mounted.
	#[error("canvas element is not mounted")]
	CanvasMissing,
	/// `getContext("2d")` threw or returned nothing.
	#[error("2d drawing context unavailable: {0}")]
	Context(String),
	/// `getImageData` failed, e.g. on a zero-sized canvas.
	#[error("pixel read-back failed: {0}")]
	PixelReadback(String),
	/// The History API rejected the transition.
	#[error("navigation to {path} failed: {reason}")]
	Navigation {
		/// Route that was requested.
		path: String,
		/// Message thrown by the browser.
		reason: String,
	},
	/// Config parsed but holds unusable values.
	#[error("invalid banner config: {0}")]
	Config(String),
	/// Config is not valid JSON or has unknown keys.
	#[error("failed to parse banner config: {0}")]
	ConfigParse(#[from] serde_json::Error),
}

/// Result alias for banner operations.
pub type BannerResult<T> = Result<T, BannerError>;

/// Render a thrown JS value for an error message.
pub(crate) fn js_reason(value: &JsValue) -> String {
	value
		.as_string()
		.unwrap_or_else(|| format!("{:?}", value))
}
