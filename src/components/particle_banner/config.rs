//! Banner configuration.
//!
//! Every field has a default, so a page can override just the title or the
//! palette from JSON and keep the rest.

use serde::Deserialize;

use super::error::{BannerError, BannerResult};
use super::scene::MAX_RADIUS;
use super::theme::Palette;

/// Motion tuning for individual particles.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticlePhysics {
	/// Pixels of influence per unit of interaction radius.
	pub radius_scale: f64,
	/// Peak push applied to a particle sitting right under the pointer.
	pub repulsion: f64,
	/// Fraction of the offset to origin added to velocity each frame.
	pub spring: f64,
	/// Lower bound of the per-particle velocity damping.
	pub friction_min: f64,
	/// Upper bound of the per-particle velocity damping.
	pub friction_max: f64,
	/// Smallest dot radius in pixels.
	pub size_min: f64,
	/// Largest dot radius in pixels.
	pub size_max: f64,
}

impl Default for ParticlePhysics {
	fn default() -> Self {
		Self {
			radius_scale: 20.0,
			repulsion: 4.0,
			spring: 0.04,
			friction_min: 0.86,
			friction_max: 0.92,
			size_min: 1.2,
			size_max: 2.8,
		}
	}
}

/// Complete banner configuration.
///
/// [`MAX_RADIUS`], the sampling density and the alpha threshold are
/// constants, not configuration. Unknown keys are rejected.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BannerConfig {
	/// Text rasterized to find particle seed points.
	pub title: String,
	/// Base interaction radius, restored after the maximum.
	pub cursor_radius: f64,
	/// Font size as a fraction of the host width.
	pub font_scale: f64,
	/// Text baseline as a fraction of the host height.
	pub baseline: f64,
	/// Delay before a touch stops repelling particles.
	pub touch_release_ms: u32,
	/// Route opened by the banner's call to action.
	pub destination: String,
	/// Colors dealt out to particles.
	pub palette: Palette,
	/// Per-particle motion tuning.
	pub physics: ParticlePhysics,
}

impl Default for BannerConfig {
	fn default() -> Self {
		Self {
			title: "Let's build".to_string(),
			cursor_radius: 4.0,
			font_scale: 1.0 / 6.0,
			baseline: 0.6,
			touch_release_ms: 1000,
			destination: "/contacts".to_string(),
			palette: Palette::default(),
			physics: ParticlePhysics::default(),
		}
	}
}

impl BannerConfig {
	/// Parse a (possibly partial) JSON document and validate the result.
	pub fn from_json(json: &str) -> BannerResult<Self> {
		let config: Self = serde_json::from_str(json)?;
		config.validate()?;
		Ok(config)
	}

	/// Reject values that would break the scene's geometry or motion.
	pub fn validate(&self) -> BannerResult<()> {
		if !(self.cursor_radius > 0.0) {
			return Err(BannerError::Config(format!(
				"cursor_radius must be positive, got {}",
				self.cursor_radius
			)));
		}
		if self.cursor_radius > MAX_RADIUS {
			return Err(BannerError::Config(format!(
				"cursor_radius {} exceeds the maximum {}",
				self.cursor_radius, MAX_RADIUS
			)));
		}
		if self.palette.is_empty() {
			return Err(BannerError::Config("palette is empty".into()));
		}
		if !(self.font_scale > 0.0 && self.font_scale <= 1.0) {
			return Err(BannerError::Config(format!(
				"font_scale must be in (0, 1], got {}",
				self.font_scale
			)));
		}
		if !(self.baseline > 0.0 && self.baseline <= 1.0) {
			return Err(BannerError::Config(format!(
				"baseline must be in (0, 1], got {}",
				self.baseline
			)));
		}
		let p = &self.physics;
		if !(p.friction_min > 0.0 && p.friction_max < 1.0 && p.friction_min <= p.friction_max) {
			return Err(BannerError::Config(format!(
				"friction range must sit inside (0, 1), got {}..{}",
				p.friction_min, p.friction_max
			)));
		}
		if p.size_min > p.size_max {
			return Err(BannerError::Config("size_min exceeds size_max".into()));
		}
		Ok(())
	}
}
