//! Scene state and particle seeding.
//!
//! The title is drawn once per layout, read back as pixels, and wiped. Every
//! grid point landing on an opaque pixel becomes a [`Particle`]. After that
//! the surface only ever shows particles.

use log::{debug, warn};

use super::config::BannerConfig;
use super::particle::Particle;
use super::surface::{BlendMode, Surface};
use super::types::Coordinate;

/// Largest interaction radius a click can reach.
pub const MAX_RADIUS: f64 = 10.0;
/// Alpha (0-255) a pixel must exceed to seed a particle.
pub const ALPHA_THRESHOLD: u8 = 120;
/// Host widths at or above this sample the title more densely.
pub const WIDE_BREAKPOINT: u32 = 768;
/// Particles per row on wide hosts.
pub const WIDE_QUANTITY: u32 = 200;
/// Particles per row on narrow hosts.
pub const NARROW_QUANTITY: u32 = 120;

/// Pointer and interaction radius read by every particle each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneState {
	/// Host-local pointer position, or [`Coordinate::OFF_SCREEN`].
	pub pointer: Coordinate,
	/// Interaction radius in config units (scaled to pixels by the physics).
	pub radius: f64,
}

impl SceneState {
	/// Fresh state with the pointer off-screen.
	pub fn new(radius: f64) -> Self {
		Self {
			pointer: Coordinate::OFF_SCREEN,
			radius,
		}
	}

	/// Toggle between the base radius and the maximum.
	pub fn cycle_radius(&mut self, base: f64, max: f64) {
		self.radius = if self.radius < max { max } else { base };
	}
}

/// Target particle count for a host of the given width.
pub fn particle_quantity(width: u32) -> u32 {
	if width < WIDE_BREAKPOINT {
		NARROW_QUANTITY
	} else {
		WIDE_QUANTITY
	}
}

/// Grid spacing used on both axes when sampling the title.
pub fn grid_step(width: u32, quantity: u32) -> u32 {
	let step = (width as f64 / quantity.max(1) as f64).round() as u32;
	step.max(1)
}

/// Owns the drawing surface, the particles, and the pointer state.
pub struct Scene<S: Surface> {
	surface: S,
	config: BannerConfig,
	state: SceneState,
	particles: Vec<Particle>,
	width: u32,
	height: u32,
}

impl<S: Surface> Scene<S> {
	/// Empty scene; nothing is drawn until [`Scene::initialize`].
	pub fn new(surface: S, config: BannerConfig) -> Self {
		let state = SceneState::new(config.cursor_radius);
		Self {
			surface,
			config,
			state,
			particles: Vec::new(),
			width: 0,
			height: 0,
		}
	}

	/// Size the surface to the host, draw the title, and reseed.
	///
	/// Safe to call repeatedly; each call starts from a blank surface.
	pub fn initialize(&mut self, width: u32, height: u32) {
		self.surface.clear();
		self.surface.resize(width, height);
		self.width = width;
		self.height = height;

		// A previous seeding left the surface in screen mode.
		self.surface.set_blend_mode(BlendMode::SourceOver);
		let font = format!("bold {}px sans-serif", width as f64 * self.config.font_scale);
		self.surface.fill_text_centered(
			&self.config.title,
			&font,
			width as f64 / 2.0,
			height as f64 * self.config.baseline,
		);
		self.seed_particles(width, height);
	}

	/// Replace the particle list with one particle per opaque grid point.
	pub fn seed_particles(&mut self, width: u32, height: u32) {
		let pixels = match self.surface.read_pixels(width, height) {
			Ok(pixels) => Some(pixels),
			Err(e) => {
				warn!("header-banner: {}; rendering without particles", e);
				None
			}
		};

		self.surface.clear();
		self.surface.set_blend_mode(BlendMode::Screen);

		let step = grid_step(width, particle_quantity(width)) as usize;

		self.particles = Vec::new();
		let Some(pixels) = pixels else {
			return;
		};
		for x in (0..width).step_by(step) {
			for y in (0..height).step_by(step) {
				if pixels.alpha(x, y) > ALPHA_THRESHOLD {
					let seed = self.particles.len();
					self.particles.push(Particle::new(
						Coordinate::new(x as f64, y as f64),
						seed,
						&self.config.palette,
						&self.config.physics,
					));
				}
			}
		}
		debug!(
			"header-banner: seeded {} particles on {}x{} (step {})",
			self.particles.len(),
			width,
			height,
			step
		);
	}

	/// Clear and redraw every particle once.
	pub fn render_frame(&mut self) {
		self.surface.clear();
		for particle in &mut self.particles {
			particle.render(&self.surface, &self.state, &self.config.physics);
		}
	}

	/// Move the pointer to host-local (x, y).
	pub fn set_pointer(&mut self, x: f64, y: f64) {
		self.state.pointer = Coordinate::new(x, y);
	}

	/// Park the pointer off-screen so nothing is repelled.
	pub fn release_pointer(&mut self) {
		self.state.pointer = Coordinate::OFF_SCREEN;
	}

	/// Toggle the interaction radius between base and [`MAX_RADIUS`].
	pub fn cycle_radius(&mut self) {
		self.state.cycle_radius(self.config.cursor_radius, MAX_RADIUS);
	}

	/// Current pointer and radius.
	pub fn state(&self) -> &SceneState {
		&self.state
	}

	/// Particles from the latest seeding.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Configuration the scene was built with.
	pub fn config(&self) -> &BannerConfig {
		&self.config
	}

	/// Host size from the latest [`Scene::initialize`].
	pub fn size(&self) -> (u32, u32) {
		(self.width, self.height)
	}

	#[cfg(test)]
	pub(crate) fn surface(&self) -> &S {
		&self.surface
	}
}
