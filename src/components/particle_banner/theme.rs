//! Particle colors.
//!
//! The palette is additive-friendly: particles are drawn with the `screen`
//! blend mode, so overlapping dots brighten toward white.

use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Opacity in [0, 1]; defaults to opaque.
	#[serde(default = "opaque")]
	pub a: f64,
}

fn opaque() -> f64 {
	1.0
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit opacity.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// CSS color string, hex when opaque.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Fixed set of colors particles pick from when seeded.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Palette {
	/// Colors in pick order.
	pub colors: Vec<Color>,
}

impl Palette {
	/// Warm brand palette: coral, amber, and a cool accent.
	pub fn brand() -> Self {
		Self {
			colors: vec![
				Color::rgb(255, 94, 91),   // Coral
				Color::rgb(255, 179, 71),  // Amber
				Color::rgb(255, 237, 102), // Lemon
				Color::rgb(0, 206, 201),   // Turquoise
				Color::rgb(108, 92, 231),  // Violet
			],
		}
	}

	/// Cold palette for dark pages.
	pub fn glacier() -> Self {
		Self {
			colors: vec![
				Color::rgb(94, 129, 172),  // Steel blue
				Color::rgb(136, 192, 208), // Frost
				Color::rgb(143, 188, 187), // Sea foam
				Color::rgb(229, 233, 240), // Snow
			],
		}
	}

	/// True if there is nothing to pick from.
	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}

	/// Color at `index`, wrapping around the palette.
	///
	/// Falls back to white for an empty palette.
	pub fn get(&self, index: usize) -> Color {
		if self.colors.is_empty() {
			return Color::rgb(255, 255, 255);
		}
		self.colors[index % self.colors.len()]
	}
}

impl Default for Palette {
	fn default() -> Self {
		Self::brand()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_colors_render_as_hex() {
		assert_eq!(Color::rgb(255, 94, 91).to_css(), "#ff5e5b");
		assert_eq!(Color::rgba(1, 2, 3, 0.5).to_css(), "rgba(1, 2, 3, 0.5)");
	}

	#[test]
	fn palette_wraps_indices() {
		let palette = Palette::glacier();
		assert_eq!(palette.get(0), palette.get(palette.colors.len()));
		assert_eq!(palette.get(1), palette.colors[1]);
	}

	#[test]
	fn empty_palette_falls_back_to_white() {
		let palette = Palette { colors: Vec::new() };
		assert!(palette.is_empty());
		assert_eq!(palette.get(3), Color::rgb(255, 255, 255));
	}

	#[test]
	fn palette_deserializes_from_color_list() {
		let palette: Palette =
			serde_json::from_str(r#"[{"r":1,"g":2,"b":3},{"r":4,"g":5,"b":6,"a":0.5}]"#).unwrap();
		assert_eq!(palette.colors, vec![Color::rgb(1, 2, 3), Color::rgba(4, 5, 6, 0.5)]);
	}
}
