//! Per-instance simulation state for each backdrop.
//!
//! A scene owns everything one canvas needs between frames: its RNG, its
//! populations, and its clocks. Nothing here touches the DOM, so scenes can be
//! driven frame by frame without a browser.

use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::entities::{CosmicParticle, Feather, ShootingStar, Star};
use super::population::{Density, seed_cosmic, seed_feathers, seed_stars};
use super::spawn::{SpawnRule, Spawner};
use super::surface::SurfaceSize;
use super::theme::{CosmicStyle, FeatherStyle, StarStyle, WaveStyle};

/// Simulation half of a backdrop.
pub trait Scene {
	/// Adopts a new surface size and reseeds every population for it.
	fn resize(&mut self, size: SurfaceSize);

	/// Advances the simulation to host timestamp `now` (milliseconds).
	fn tick(&mut self, now: f64);

	/// Current surface size.
	fn size(&self) -> SurfaceSize;
}

/// Falling neon stars, shooting stars, and flowing trails.
pub struct StarflowScene {
	rng: SmallRng,
	size: SurfaceSize,
	pub star_style: StarStyle,
	pub trails: WaveStyle,
	pub stars: Vec<Star>,
	pub shooting_stars: Vec<ShootingStar>,
	pub normal: Spawner,
	pub bright: Spawner,
	/// Latest host timestamp, milliseconds
	pub now: f64,
}

impl StarflowScene {
	pub fn new(seed: u64) -> Self {
		Self {
			rng: SmallRng::seed_from_u64(seed),
			size: SurfaceSize::default(),
			star_style: StarStyle::starflow(),
			trails: WaveStyle {
				step: 20.0,
				..WaveStyle::default()
			},
			stars: Vec::new(),
			shooting_stars: Vec::new(),
			normal: Spawner::new(SpawnRule::normal()),
			bright: Spawner::new(SpawnRule::bright()),
			now: 0.0,
		}
	}

	/// Trail phase, advancing one radian every two seconds.
	pub fn trail_phase(&self) -> f64 {
		self.now / 2000.0
	}

	/// Drops every streak whose lifetime has run out at `now`.
	pub fn expire(&mut self, now: f64) {
		self.shooting_stars.retain(|s| !s.is_expired(now));
	}
}

impl Scene for StarflowScene {
	fn resize(&mut self, size: SurfaceSize) {
		self.size = size;
		self.stars = seed_stars(&mut self.rng, &self.star_style, Density::STARFLOW_STARS, size);
	}

	fn tick(&mut self, now: f64) {
		self.now = now;

		for star in &mut self.stars {
			star.step(&mut self.rng, &self.star_style, self.size);
		}

		self.normal
			.roll(&mut self.rng, now, self.size, &mut self.shooting_stars);
		self.bright
			.roll(&mut self.rng, now, self.size, &mut self.shooting_stars);

		self.expire(now);
	}

	fn size(&self) -> SurfaceSize {
		self.size
	}
}

/// Drifting dots over filled wave bands.
pub struct CosmicScene {
	rng: SmallRng,
	size: SurfaceSize,
	pub style: CosmicStyle,
	pub waves: WaveStyle,
	pub particles: Vec<CosmicParticle>,
	/// Wave phase; grows by `phase_step` every frame
	pub phase: f64,
	pub phase_step: f64,
}

impl CosmicScene {
	pub fn new(seed: u64) -> Self {
		Self {
			rng: SmallRng::seed_from_u64(seed),
			size: SurfaceSize::default(),
			style: CosmicStyle::default(),
			waves: WaveStyle::default(),
			particles: Vec::new(),
			phase: 0.0,
			phase_step: 0.01,
		}
	}
}

impl Scene for CosmicScene {
	fn resize(&mut self, size: SurfaceSize) {
		self.size = size;
		self.particles = seed_cosmic(&mut self.rng, &self.style, Density::COSMIC_PARTICLES, size);
	}

	fn tick(&mut self, _now: f64) {
		self.phase += self.phase_step;
		for p in &mut self.particles {
			p.step(self.size);
		}
	}

	fn size(&self) -> SurfaceSize {
		self.size
	}
}

/// Pulsing rising stars and slowly falling feathers around a soft glow.
pub struct AngelScene {
	rng: SmallRng,
	size: SurfaceSize,
	pub star_style: StarStyle,
	pub feather_style: FeatherStyle,
	pub stars: Vec<Star>,
	pub feathers: Vec<Feather>,
	/// Scene time in seconds
	pub time: f64,
}

impl AngelScene {
	pub fn new(seed: u64) -> Self {
		Self {
			rng: SmallRng::seed_from_u64(seed),
			size: SurfaceSize::default(),
			star_style: StarStyle::angel(),
			feather_style: FeatherStyle::default(),
			stars: Vec::new(),
			feathers: Vec::new(),
			time: 0.0,
		}
	}
}

impl Scene for AngelScene {
	fn resize(&mut self, size: SurfaceSize) {
		self.size = size;
		self.stars = seed_stars(&mut self.rng, &self.star_style, Density::ANGEL_STARS, size);
		self.feathers = seed_feathers(&mut self.rng, &self.feather_style, Density::FEATHERS, size);
	}

	fn tick(&mut self, now: f64) {
		self.time = now * 0.001;

		for star in &mut self.stars {
			star.step(&mut self.rng, &self.star_style, self.size);
		}
		for feather in &mut self.feathers {
			feather.step(&mut self.rng, self.time, self.size);
		}
	}

	fn size(&self) -> SurfaceSize {
		self.size
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::f64::consts::PI;

	fn streak(start: f64, duration: f64) -> ShootingStar {
		ShootingStar {
			x: 10.0,
			y: 10.0,
			length: 100.0,
			speed: 250.0,
			angle: PI / 2.0,
			opacity: 1.0,
			duration,
			start,
		}
	}

	#[test]
	fn test_angel_counts_for_800_by_600() {
		let mut scene = AngelScene::new(1);
		scene.resize(SurfaceSize::new(800.0, 600.0));

		assert_eq!(scene.stars.len(), 32);
		assert_eq!(scene.feathers.len(), 8);
	}

	#[test]
	fn test_resize_twice_keeps_count_but_reseeds() {
		let mut scene = AngelScene::new(1);
		let size = SurfaceSize::new(800.0, 600.0);

		scene.resize(size);
		let first: Vec<(f64, f64)> = scene.stars.iter().map(|s| (s.x, s.y)).collect();
		scene.resize(size);
		let second: Vec<(f64, f64)> = scene.stars.iter().map(|s| (s.x, s.y)).collect();

		assert_eq!(first.len(), second.len());
		assert_ne!(first, second);
	}

	#[test]
	fn test_same_seed_same_scene() {
		let size = SurfaceSize::new(1024.0, 768.0);
		let mut a = StarflowScene::new(99);
		let mut b = StarflowScene::new(99);
		a.resize(size);
		b.resize(size);

		for frame in 0..600 {
			let now = frame as f64 * 16.0;
			a.tick(now);
			b.tick(now);
		}

		assert_eq!(a.stars.len(), b.stars.len());
		for (sa, sb) in a.stars.iter().zip(&b.stars) {
			assert_eq!((sa.x, sa.y), (sb.x, sb.y));
		}
		assert_eq!(a.shooting_stars.len(), b.shooting_stars.len());
	}

	#[test]
	fn test_streak_lifecycle_end_to_end() {
		let mut scene = StarflowScene::new(3);
		scene.resize(SurfaceSize::new(800.0, 600.0));
		scene.shooting_stars.push(streak(0.0, 2000.0));

		let s = &scene.shooting_stars[0];
		let progress = s.progress(1000.0);
		assert_eq!(progress, 0.5);
		assert_eq!(s.fade(progress), (0.5 * s.opacity).min(1.5));

		scene.expire(1999.0);
		assert_eq!(scene.shooting_stars.len(), 1);
		scene.expire(2000.0);
		assert!(scene.shooting_stars.is_empty());
	}

	#[test]
	fn test_tick_filters_expired_before_painting() {
		let mut scene = StarflowScene::new(3);
		scene.resize(SurfaceSize::new(800.0, 600.0));
		scene.shooting_stars.push(streak(0.0, 1500.0));
		scene.shooting_stars.push(streak(1000.0, 1500.0));

		scene.tick(1500.0);

		assert!(scene.shooting_stars.iter().all(|s| !s.is_expired(scene.now)));
		assert!(scene.shooting_stars.iter().any(|s| s.start == 1000.0));
	}

	#[test]
	fn test_stars_survive_many_frames() {
		let mut scene = AngelScene::new(8);
		scene.resize(SurfaceSize::new(800.0, 600.0));

		for frame in 0..10_000 {
			scene.tick(frame as f64 * 16.0);
		}

		assert_eq!(scene.stars.len(), 32);
		assert_eq!(scene.feathers.len(), 8);
		for s in &scene.stars {
			assert!(s.y >= -s.size * 2.0 - s.speed && s.y <= 600.0 + s.size);
		}
	}

	#[test]
	fn test_cosmic_phase_advances_every_frame() {
		let mut scene = CosmicScene::new(5);
		scene.resize(SurfaceSize::new(640.0, 480.0));

		scene.tick(0.0);
		scene.tick(16.0);
		scene.tick(32.0);

		assert!((scene.phase - 0.03).abs() < 1e-12);
		assert_eq!(scene.particles.len(), 30);
		for p in &scene.particles {
			assert!((0.0..=640.0).contains(&p.x));
			assert!((0.0..=480.0).contains(&p.y));
		}
	}

	#[test]
	fn test_zero_area_yields_empty_frames() {
		let mut scene = StarflowScene::new(1);
		scene.resize(SurfaceSize::new(0.0, 0.0));
		scene.tick(16.0);
		assert!(scene.stars.is_empty());

		let mut angel = AngelScene::new(1);
		angel.resize(SurfaceSize::default());
		angel.tick(16.0);
		assert!(angel.stars.is_empty() && angel.feathers.is_empty());
	}
}
