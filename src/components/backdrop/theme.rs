//! Visual styling for the backdrops.
//!
//! Colors, palettes, and the attribute ranges each entity is seeded from.
//! Every scene builds its populations from one of the presets below.

use std::f64::consts::PI;
use std::ops::Range;

use rand::Rng;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// A fixed set of colors entities pick from at seed time.
#[derive(Clone, Debug)]
pub struct Palette {
	pub colors: Vec<Color>,
}

impl Palette {
	/// Saturated neon tones for the starflow field
	pub fn neon() -> Self {
		Self {
			colors: vec![
				Color::rgb(139, 233, 253), // Cyan
				Color::rgb(189, 147, 249), // Purple
				Color::rgb(255, 121, 198), // Pink
				Color::rgb(241, 250, 140), // Yellow
				Color::rgb(97, 218, 251),  // React blue
				Color::rgb(255, 255, 255), // White
			],
		}
	}

	/// Neon tones with green in place of white, for the cosmic drift
	pub fn cosmic() -> Self {
		Self {
			colors: vec![
				Color::rgb(139, 233, 253), // Cyan
				Color::rgb(189, 147, 249), // Purple
				Color::rgb(255, 121, 198), // Pink
				Color::rgb(80, 250, 123),  // Green
				Color::rgb(241, 250, 140), // Yellow
				Color::rgb(97, 218, 251),  // React blue
			],
		}
	}

	/// Near-whites for the angel scene
	pub fn glowing() -> Self {
		Self {
			colors: vec![
				Color::rgb(255, 255, 255), // White
				Color::rgb(248, 248, 255), // Ghost white
				Color::rgb(255, 250, 240), // Floral white
				Color::rgb(240, 248, 255), // Alice blue
				Color::rgb(245, 245, 245), // White smoke
			],
		}
	}

	pub fn contains(&self, color: Color) -> bool {
		self.colors.contains(&color)
	}

	/// Uniformly picks one color. An empty palette yields white.
	pub fn pick<R: Rng>(&self, rng: &mut R) -> Color {
		if self.colors.is_empty() {
			return Color::rgb(255, 255, 255);
		}
		self.colors[rng.gen_range(0..self.colors.len())]
	}
}

/// Draws a uniform sample from `range`, tolerating empty ranges.
pub fn sample<R: Rng>(rng: &mut R, range: &Range<f64>) -> f64 {
	if range.start < range.end {
		rng.gen_range(range.clone())
	} else {
		range.start
	}
}

/// Which way ambient stars drift, and how they are recycled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Drift {
	/// Moves up; reappears below the bottom edge once above `-2 * size`.
	Rising,
	/// Moves down; reappears at the top with a fresh speed once below the bottom edge.
	Falling,
}

/// Sinusoidal opacity flicker.
#[derive(Clone, Copy, Debug)]
pub struct Pulse {
	/// Angular speed in radians per second.
	pub speed: f64,
	/// Fraction of the base opacity the flicker swings by.
	pub amount: f64,
}

/// Ambient star configuration.
#[derive(Clone, Debug)]
pub struct StarStyle {
	pub size: Range<f64>,
	/// Pixels per frame
	pub speed: Range<f64>,
	pub opacity: Range<f64>,
	pub palette: Palette,
	pub drift: Drift,
	pub pulse: Option<Pulse>,
	/// Shadow blur as a multiple of the star radius
	pub glow: f64,
}

impl StarStyle {
	/// Slow rising, pulsing near-white stars
	pub fn angel() -> Self {
		Self {
			size: 1.0..3.0,
			speed: 0.1..0.4,
			opacity: 0.3..0.8,
			palette: Palette::glowing(),
			drift: Drift::Rising,
			pulse: Some(Pulse {
				speed: 0.5,
				amount: 0.2,
			}),
			glow: 2.0,
		}
	}

	/// Falling neon starfield
	pub fn starflow() -> Self {
		Self {
			size: 0.5..2.5,
			speed: 0.1..0.6,
			opacity: 0.5..1.0,
			palette: Palette::neon(),
			drift: Drift::Falling,
			pulse: None,
			glow: 4.0,
		}
	}
}

/// Falling feather configuration.
#[derive(Clone, Debug)]
pub struct FeatherStyle {
	pub size: Range<f64>,
	pub rotation_speed: Range<f64>,
	pub fall_speed: Range<f64>,
	pub sway_amplitude: Range<f64>,
	pub sway_frequency: Range<f64>,
	pub opacity: Range<f64>,
	pub time_offset: Range<f64>,
	/// Number of barb pairs along the shaft
	pub barbs: usize,
}

impl Default for FeatherStyle {
	fn default() -> Self {
		Self {
			size: 10.0..25.0,
			rotation_speed: -0.005..0.005,
			fall_speed: 0.2..0.7,
			sway_amplitude: 0.5..1.5,
			sway_frequency: 0.01..0.03,
			opacity: 0.2..0.6,
			time_offset: 0.0..1000.0,
			barbs: 10,
		}
	}
}

/// Drifting dot configuration.
#[derive(Clone, Debug)]
pub struct CosmicStyle {
	pub radius: Range<f64>,
	/// Per-axis velocity, pixels per frame
	pub velocity: Range<f64>,
	pub alpha: Range<f64>,
	pub palette: Palette,
}

impl Default for CosmicStyle {
	fn default() -> Self {
		Self {
			radius: 0.5..2.5,
			velocity: -0.1..0.1,
			alpha: 0.2..0.7,
			palette: Palette::cosmic(),
		}
	}
}

/// Shooting star configuration for one spawn kind.
#[derive(Clone, Debug)]
pub struct StreakStyle {
	pub length: Range<f64>,
	/// Pixels travelled over the whole lifetime
	pub speed: Range<f64>,
	/// Travel direction in radians (0 = right, PI/2 = down)
	pub angle: Range<f64>,
	pub opacity: f64,
	/// Lifetime in milliseconds
	pub duration: Range<f64>,
	/// Origin x measured back from the right edge instead of from the left
	pub from_right: Option<f64>,
	/// Fraction of the surface height origins are drawn from
	pub origin_band: f64,
}

impl StreakStyle {
	/// Ordinary streaks pointing anywhere in the downward quarter-arc
	pub fn normal() -> Self {
		Self {
			length: 100.0..180.0,
			speed: 200.0..500.0,
			angle: PI / 4.0..PI * 3.0 / 4.0,
			opacity: 1.0,
			duration: 1500.0..2500.0,
			from_right: None,
			origin_band: 0.3,
		}
	}

	/// Rare fast streak running top-right to bottom-left
	pub fn bright() -> Self {
		Self {
			length: 180.0..300.0,
			speed: 600.0..1100.0,
			angle: PI * 0.75..PI * 0.75,
			opacity: 1.5,
			duration: 1000.0..1800.0,
			from_right: Some(150.0),
			origin_band: 0.3,
		}
	}
}

/// Flowing sine band layer.
#[derive(Clone, Debug)]
pub struct WaveStyle {
	pub bands: usize,
	pub color: Color,
	/// Alpha of the first band; each later band is `alpha_step` fainter
	pub alpha: f64,
	pub alpha_step: f64,
	/// Horizontal distance between path samples, in pixels
	pub step: f64,
}

impl Default for WaveStyle {
	fn default() -> Self {
		Self {
			bands: 3,
			color: Color::rgb(123, 97, 255),
			alpha: 0.05,
			alpha_step: 0.01,
			step: 10.0,
		}
	}
}

impl WaveStyle {
	/// Band alpha, never negative.
	pub fn band_alpha(&self, band: usize) -> f64 {
		(self.alpha - self.alpha_step * band as f64).max(0.0)
	}
}
