//! Particle title banner.
//!
//! Draws a title onto a canvas, samples its opaque pixels on a grid, and
//! replaces the text with one particle per sample:
//! - Particles scatter away from the pointer and spring back to their origin
//! - Clicking toggles a wider repulsion radius
//! - Resizing the host redraws the title and reseeds from scratch
//!
//! The browser glue lives in [`ParticleBanner`]; the scene, particles and
//! frame loop only talk to the [`Surface`] and [`Platform`] traits.
//!
//! # Example
//!
//! ```ignore
//! use header_banner::{BannerConfig, ParticleBanner};
//!
//! let config = BannerConfig {
//!     title: "Hello".into(),
//!     ..BannerConfig::default()
//! };
//!
//! view! { <ParticleBanner config=config cta_label="Contact us" /> }
//! ```

mod component;
mod config;
mod controller;
mod error;
mod frame_loop;
mod particle;
mod platform;
mod scene;
mod surface;
pub mod theme;
mod types;

#[cfg(test)]
mod testing;

pub use component::ParticleBanner;
pub use config::{BannerConfig, ParticlePhysics};
pub use controller::{BannerController, LifecycleHooks};
pub use error::{BannerError, BannerResult};
pub use frame_loop::{CancelToken, FrameLoop};
pub use particle::Particle;
pub use platform::{Platform, WebPlatform};
pub use scene::{
	ALPHA_THRESHOLD, MAX_RADIUS, NARROW_QUANTITY, Scene, SceneState, WIDE_BREAKPOINT, WIDE_QUANTITY,
	grid_step, particle_quantity,
};
pub use surface::{BlendMode, CanvasSurface, PixelBuffer, Surface};
pub use theme::{Color, Palette};
pub use types::{Coordinate, FrameHandle};
