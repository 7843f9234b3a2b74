//! Population sizing and seeding.
//!
//! Counts scale with the surface so density looks the same on any screen,
//! but every kind is capped.

use rand::Rng;

use super::entities::{CosmicParticle, Feather, Star};
use super::surface::SurfaceSize;
use super::theme::{CosmicStyle, FeatherStyle, StarStyle, sample};

/// How many entities of one kind a surface gets.
#[derive(Clone, Copy, Debug)]
pub enum Density {
	/// One entity per `area` square pixels, at most `cap`.
	PerArea { cap: usize, area: f64 },
	/// One entity per `width` horizontal pixels, at most `cap`.
	PerWidth { cap: usize, width: f64 },
}

impl Density {
	pub const STARFLOW_STARS: Density = Density::PerArea {
		cap: 150,
		area: 8000.0,
	};
	pub const ANGEL_STARS: Density = Density::PerArea {
		cap: 50,
		area: 15000.0,
	};
	pub const COSMIC_PARTICLES: Density = Density::PerArea {
		cap: 100,
		area: 10000.0,
	};
	pub const FEATHERS: Density = Density::PerWidth {
		cap: 12,
		width: 100.0,
	};

	/// Entity count for `size`.
	pub fn count(self, size: SurfaceSize) -> usize {
		let (cap, raw) = match self {
			Density::PerArea { cap, area } => (cap, size.area() / area),
			Density::PerWidth { cap, width } => (cap, size.width / width),
		};
		if !raw.is_finite() || raw <= 0.0 {
			return 0;
		}
		cap.min(raw.floor() as usize)
	}
}

pub fn seed_stars<R: Rng>(
	rng: &mut R,
	style: &StarStyle,
	density: Density,
	size: SurfaceSize,
) -> Vec<Star> {
	(0..density.count(size))
		.map(|_| Star::random(rng, style, size))
		.collect()
}

pub fn seed_feathers<R: Rng>(
	rng: &mut R,
	style: &FeatherStyle,
	density: Density,
	size: SurfaceSize,
) -> Vec<Feather> {
	(0..density.count(size))
		.map(|_| Feather {
			x: rng.gen_range(0.0..1.0) * size.width,
			y: rng.gen_range(0.0..1.0) * size.height,
			size: sample(rng, &style.size),
			rotation: rng.gen_range(0.0..std::f64::consts::TAU),
			rotation_speed: sample(rng, &style.rotation_speed),
			fall_speed: sample(rng, &style.fall_speed),
			sway_amplitude: sample(rng, &style.sway_amplitude),
			sway_frequency: sample(rng, &style.sway_frequency),
			opacity: sample(rng, &style.opacity),
			time_offset: sample(rng, &style.time_offset),
		})
		.collect()
}

pub fn seed_cosmic<R: Rng>(
	rng: &mut R,
	style: &CosmicStyle,
	density: Density,
	size: SurfaceSize,
) -> Vec<CosmicParticle> {
	(0..density.count(size))
		.map(|_| CosmicParticle {
			x: rng.gen_range(0.0..1.0) * size.width,
			y: rng.gen_range(0.0..1.0) * size.height,
			radius: sample(rng, &style.radius),
			color: style.palette.pick(rng),
			vx: sample(rng, &style.velocity),
			vy: sample(rng, &style.velocity),
			alpha: sample(rng, &style.alpha),
		})
		.collect()
}
