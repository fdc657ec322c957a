//! Seed-point particles that scatter from the pointer and drift home.

use super::config::ParticlePhysics;
use super::scene::SceneState;
use super::surface::Surface;
use super::theme::{Color, Palette};
use super::types::Coordinate;

/// A dot anchored to one opaque pixel of the title.
#[derive(Clone, Debug)]
pub struct Particle {
	/// Home position on the title.
	pub origin: Coordinate,
	/// Current position.
	pub position: Coordinate,
	/// Per-frame motion.
	pub velocity: Coordinate,
	/// Dot radius in pixels.
	pub size: f64,
	/// Velocity kept each frame, in (0, 1).
	pub friction: f64,
	/// Fill color.
	pub color: Color,
}

impl Particle {
	/// Place a particle at rest on its origin.
	///
	/// Color, size and friction come from `seed` so the same layout always
	/// produces the same look.
	pub fn new(origin: Coordinate, seed: usize, palette: &Palette, physics: &ParticlePhysics) -> Self {
		let seed = seed as f64;
		let color_idx = (pseudo_random(seed * 1.1 + 0.5) * palette.colors.len() as f64) as usize;
		Self {
			origin,
			position: origin,
			velocity: Coordinate::default(),
			size: physics.size_min
				+ pseudo_random(seed * 2.3 + 0.5) * (physics.size_max - physics.size_min),
			friction: physics.friction_min
				+ pseudo_random(seed * 3.7 + 0.5) * (physics.friction_max - physics.friction_min),
			color: palette.get(color_idx),
		}
	}

	/// Advance one frame against the pointer in `state`.
	pub fn update(&mut self, state: &SceneState, physics: &ParticlePhysics) {
		let influence = state.radius * physics.radius_scale;
		let (dx, dy) = (
			self.position.x - state.pointer.x,
			self.position.y - state.pointer.y,
		);
		let distance = (dx * dx + dy * dy).sqrt();

		if !state.pointer.is_off_screen() && distance < influence && distance > f64::EPSILON {
			// Falls off linearly: full strength under the pointer, zero at the edge.
			let strength = physics.repulsion * (1.0 - distance / influence);
			self.velocity.x += dx / distance * strength;
			self.velocity.y += dy / distance * strength;
		} else {
			self.velocity.x += (self.origin.x - self.position.x) * physics.spring;
			self.velocity.y += (self.origin.y - self.position.y) * physics.spring;
		}

		self.velocity.x *= self.friction;
		self.velocity.y *= self.friction;
		self.position.x += self.velocity.x;
		self.position.y += self.velocity.y;
	}

	/// Paint the dot at its current position.
	pub fn draw<S: Surface>(&self, surface: &S) {
		surface.fill_circle(self.position.x, self.position.y, self.size, &self.color.to_css());
	}

	/// Update, then draw.
	pub fn render<S: Surface>(&mut self, surface: &S, state: &SceneState, physics: &ParticlePhysics) {
		self.update(state, physics);
		self.draw(surface);
	}

	/// How far the particle currently sits from home.
	pub fn displacement(&self) -> f64 {
		self.position.distance_to(self.origin)
	}
}

/// Simple pseudo-random function (deterministic)
fn pseudo_random(seed: f64) -> f64 {
	let x = (seed * 12.9898 + seed * 78.233).sin() * 43758.5453;
	x - x.floor()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_banner::testing::{Call, RecordingSurface};

	fn state(pointer: Coordinate, radius: f64) -> SceneState {
		SceneState { pointer, radius }
	}

	fn particle_at(x: f64, y: f64) -> Particle {
		Particle::new(
			Coordinate::new(x, y),
			7,
			&Palette::default(),
			&ParticlePhysics::default(),
		)
	}

	#[test]
	fn new_particle_rests_on_origin_with_palette_color() {
		let palette = Palette::glacier();
		let physics = ParticlePhysics::default();
		for seed in 0..50 {
			let p = Particle::new(Coordinate::new(3.0, 4.0), seed, &palette, &physics);
			assert_eq!(p.position, p.origin);
			assert_eq!(p.velocity, Coordinate::default());
			assert!(palette.colors.contains(&p.color));
			assert!(p.size >= physics.size_min && p.size <= physics.size_max);
			assert!(p.friction >= physics.friction_min && p.friction <= physics.friction_max);
		}
	}

	#[test]
	fn same_seed_same_particle() {
		let a = particle_at(10.0, 10.0);
		let b = particle_at(10.0, 10.0);
		assert_eq!(a.color, b.color);
		assert_eq!(a.size, b.size);
		assert_eq!(a.friction, b.friction);
	}

	#[test]
	fn pointer_inside_radius_pushes_away() {
		let physics = ParticlePhysics::default();
		let mut p = particle_at(100.0, 100.0);
		// pointer to the left of the particle, well inside 4 * 20 px
		p.update(&state(Coordinate::new(90.0, 100.0), 4.0), &physics);
		assert!(p.position.x > 100.0, "moved to {:?}", p.position);
		assert!((p.position.y - 100.0).abs() < 1e-9);
	}

	#[test]
	fn closer_pointer_pushes_harder() {
		let physics = ParticlePhysics::default();
		let mut near = particle_at(100.0, 100.0);
		let mut far = particle_at(100.0, 100.0);
		near.update(&state(Coordinate::new(95.0, 100.0), 4.0), &physics);
		far.update(&state(Coordinate::new(40.0, 100.0), 4.0), &physics);
		assert!(near.displacement() > far.displacement());
		assert!(far.displacement() > 0.0);
	}

	#[test]
	fn pointer_outside_radius_leaves_resting_particle_alone() {
		let physics = ParticlePhysics::default();
		let mut p = particle_at(100.0, 100.0);
		p.update(&state(Coordinate::new(300.0, 100.0), 4.0), &physics);
		assert_eq!(p.position, p.origin);
	}

	#[test]
	fn off_screen_pointer_never_displaces() {
		let physics = ParticlePhysics::default();
		// Huge radius that would reach the sentinel if it were a real point.
		let leave = state(Coordinate::OFF_SCREEN, 1000.0);
		for (x, y) in [(0.0, 0.0), (-9990.0, -9990.0), (500.0, 20.0)] {
			let mut p = particle_at(x, y);
			for _ in 0..10 {
				p.update(&leave, &physics);
			}
			assert_eq!(p.displacement(), 0.0, "particle at ({x}, {y}) moved");
		}
	}

	#[test]
	fn displaced_particle_eases_back_home() {
		let physics = ParticlePhysics::default();
		let mut p = particle_at(100.0, 100.0);
		let push = state(Coordinate::new(98.0, 100.0), 4.0);
		for _ in 0..5 {
			p.update(&push, &physics);
		}
		let pushed = p.displacement();
		assert!(pushed > 1.0);

		let idle = state(Coordinate::OFF_SCREEN, 4.0);
		for _ in 0..400 {
			p.update(&idle, &physics);
		}
		assert!(p.displacement() < 0.01, "still {} px away", p.displacement());
	}

	#[test]
	fn render_draws_a_dot_in_particle_color() {
		let surface = RecordingSurface::new();
		let mut p = particle_at(12.0, 34.0);
		p.render(&surface, &state(Coordinate::OFF_SCREEN, 4.0), &ParticlePhysics::default());
		assert_eq!(
			surface.calls(),
			vec![Call::Circle {
				x: 12.0,
				y: 34.0,
				radius: p.size,
				color: p.color.to_css(),
			}]
		);
	}

	#[test]
	fn pseudo_random_stays_in_unit_range() {
		for i in 0..200 {
			let v = pseudo_random(i as f64 * 0.37);
			assert!((0.0..1.0).contains(&v));
		}
	}
}
