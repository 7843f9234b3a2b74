//! Entity records and their per-frame motion.
//!
//! Ambient entities (stars, feathers, cosmic particles) are recycled in place
//! when they leave the surface. Shooting stars are time-bounded and get
//! removed by their owning scene once expired.

use rand::Rng;

use super::surface::SurfaceSize;
use super::theme::{Color, Drift, Pulse, StarStyle, StreakStyle, sample};

/// Speed above which a shooting star renders as the bright variant.
pub const BRIGHT_SPEED_THRESHOLD: f64 = 500.0;

/// An ambient backdrop point.
#[derive(Clone, Debug)]
pub struct Star {
	pub x: f64,
	pub y: f64,
	pub size: f64,
	/// Pixels per frame
	pub speed: f64,
	pub opacity: f64,
	pub color: Color,
}

impl Star {
	pub fn random<R: Rng>(rng: &mut R, style: &StarStyle, size: SurfaceSize) -> Self {
		Self {
			x: rng.gen_range(0.0..1.0) * size.width,
			y: rng.gen_range(0.0..1.0) * size.height,
			size: sample(rng, &style.size),
			speed: sample(rng, &style.speed),
			opacity: sample(rng, &style.opacity),
			color: style.palette.pick(rng),
		}
	}

	/// Advances one frame, recycling at the opposite edge.
	pub fn step<R: Rng>(&mut self, rng: &mut R, style: &StarStyle, size: SurfaceSize) {
		match style.drift {
			Drift::Rising => {
				self.y -= self.speed;
				if self.y < -self.size * 2.0 {
					self.y = size.height + self.size;
					self.x = rng.gen_range(0.0..1.0) * size.width;
				}
			}
			Drift::Falling => {
				self.y += self.speed;
				if self.y > size.height {
					self.y = 0.0;
					self.x = rng.gen_range(0.0..1.0) * size.width;
					self.speed = sample(rng, &style.speed);
				}
			}
		}
	}

	/// Opacity after flicker at `time` seconds, clamped to [0, 1].
	pub fn display_opacity(&self, pulse: Option<Pulse>, time: f64) -> f64 {
		let flicker = pulse
			.map(|p| (time * p.speed).sin() * p.amount * self.opacity)
			.unwrap_or(0.0);
		(self.opacity + flicker).clamp(0.0, 1.0)
	}
}

/// A falling, swaying, spinning feather.
#[derive(Clone, Debug)]
pub struct Feather {
	pub x: f64,
	pub y: f64,
	pub size: f64,
	pub rotation: f64,
	pub rotation_speed: f64,
	pub fall_speed: f64,
	pub sway_amplitude: f64,
	pub sway_frequency: f64,
	pub opacity: f64,
	/// Decorrelates the sway phase between feathers
	pub time_offset: f64,
}

impl Feather {
	/// Advances one frame at scene time `time` (seconds).
	pub fn step<R: Rng>(&mut self, rng: &mut R, time: f64, size: SurfaceSize) {
		let sway = ((time + self.time_offset) * self.sway_frequency).sin() * self.sway_amplitude;

		self.rotation += self.rotation_speed;
		self.y += self.fall_speed;
		self.x += sway * 0.1;

		if self.y > size.height + self.size * 2.0 {
			self.y = -self.size;
			self.x = rng.gen_range(0.0..1.0) * size.width;
		}
	}
}

/// A drifting dot that wraps toroidally.
#[derive(Clone, Debug)]
pub struct CosmicParticle {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub color: Color,
	pub vx: f64,
	pub vy: f64,
	pub alpha: f64,
}

impl CosmicParticle {
	pub fn step(&mut self, size: SurfaceSize) {
		self.x += self.vx;
		self.y += self.vy;

		if self.x < 0.0 {
			self.x = size.width;
		}
		if self.x > size.width {
			self.x = 0.0;
		}
		if self.y < 0.0 {
			self.y = size.height;
		}
		if self.y > size.height {
			self.y = 0.0;
		}
	}
}

/// A transient streak travelling from its origin along `angle`.
#[derive(Clone, Debug)]
pub struct ShootingStar {
	pub x: f64,
	pub y: f64,
	pub length: f64,
	pub speed: f64,
	pub angle: f64,
	pub opacity: f64,
	/// Lifetime in milliseconds
	pub duration: f64,
	/// Creation timestamp in milliseconds
	pub start: f64,
}

impl ShootingStar {
	pub fn random<R: Rng>(rng: &mut R, style: &StreakStyle, size: SurfaceSize, now: f64) -> Self {
		let x = match style.from_right {
			Some(inset) => size.width - rng.gen_range(0.0..1.0) * inset,
			None => rng.gen_range(0.0..1.0) * size.width,
		};
		Self {
			x,
			y: rng.gen_range(0.0..1.0) * size.height * style.origin_band,
			length: sample(rng, &style.length),
			speed: sample(rng, &style.speed),
			angle: sample(rng, &style.angle),
			opacity: style.opacity,
			duration: sample(rng, &style.duration),
			start: now,
		}
	}

	pub fn is_expired(&self, now: f64) -> bool {
		now - self.start >= self.duration
	}

	/// Elapsed fraction of the lifetime, clamped to [0, 1].
	pub fn progress(&self, now: f64) -> f64 {
		((now - self.start) / self.duration).clamp(0.0, 1.0)
	}

	pub fn is_bright(&self) -> bool {
		self.speed > BRIGHT_SPEED_THRESHOLD
	}

	/// Head position at `progress`.
	pub fn head(&self, progress: f64) -> (f64, f64) {
		(
			self.x + self.angle.cos() * self.speed * progress,
			self.y + self.angle.sin() * self.speed * progress,
		)
	}

	/// Trail length before shrinking with progress.
	pub fn trail_length(&self) -> f64 {
		if self.is_bright() {
			self.length * 1.5
		} else {
			self.length
		}
	}

	/// Tail end of the trail at `progress`.
	pub fn tail(&self, progress: f64) -> (f64, f64) {
		let (hx, hy) = self.head(progress);
		let trail = self.trail_length() * (1.0 - progress);
		(
			hx - self.angle.cos() * trail,
			hy - self.angle.sin() * trail,
		)
	}

	/// Linear fade towards the end of life.
	pub fn fade(&self, progress: f64) -> f64 {
		((1.0 - progress) * self.opacity).min(1.5)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::SmallRng;
	use rstest::rstest;
	use std::f64::consts::PI;

	fn surface() -> SurfaceSize {
		SurfaceSize::new(800.0, 600.0)
	}

	fn streak(start: f64, duration: f64) -> ShootingStar {
		ShootingStar {
			x: 100.0,
			y: 50.0,
			length: 120.0,
			speed: 300.0,
			angle: PI / 2.0,
			opacity: 1.0,
			duration,
			start,
		}
	}

	#[test]
	fn test_rising_star_respawns_below_bottom() {
		let mut rng = SmallRng::seed_from_u64(7);
		let style = StarStyle::angel();
		let mut star = Star {
			x: 400.0,
			y: -3.9,
			size: 2.0,
			speed: 0.2,
			opacity: 0.5,
			color: Color::rgb(255, 255, 255),
		};

		star.step(&mut rng, &style, surface());

		assert_eq!(star.y, 600.0 + 2.0);
		assert!((0.0..800.0).contains(&star.x));
	}

	#[test]
	fn test_rising_star_inside_bound_only_moves() {
		let mut rng = SmallRng::seed_from_u64(7);
		let style = StarStyle::angel();
		let mut star = Star {
			x: 400.0,
			y: 10.0,
			size: 2.0,
			speed: 0.25,
			opacity: 0.5,
			color: Color::rgb(255, 255, 255),
		};

		star.step(&mut rng, &style, surface());

		assert_eq!(star.x, 400.0);
		assert_eq!(star.y, 9.75);
	}

	#[test]
	fn test_falling_star_respawns_at_top_with_new_speed() {
		let mut rng = SmallRng::seed_from_u64(11);
		let style = StarStyle::starflow();
		let mut star = Star {
			x: 10.0,
			y: 599.9,
			size: 1.0,
			speed: 0.5,
			opacity: 0.7,
			color: Color::rgb(255, 255, 255),
		};

		star.step(&mut rng, &style, surface());

		assert_eq!(star.y, 0.0);
		assert!((0.0..800.0).contains(&star.x));
		assert!(style.speed.contains(&star.speed));
	}

	#[rstest]
	#[case(0.0, 0.5)]
	#[case(PI, 0.5)] // sin(PI * 0.5) = 1
	#[case(3.0 * PI, 0.5)] // sin(3PI * 0.5) = -1
	fn test_pulse_stays_within_twenty_percent(#[case] time: f64, #[case] base: f64) {
		let star = Star {
			x: 0.0,
			y: 0.0,
			size: 1.0,
			speed: 0.1,
			opacity: base,
			color: Color::rgb(255, 255, 255),
		};
		let alpha = star.display_opacity(StarStyle::angel().pulse, time);
		assert!(alpha >= base * 0.8 - 1e-9 && alpha <= base * 1.2 + 1e-9);
	}

	#[test]
	fn test_feather_respawns_at_top() {
		let mut rng = SmallRng::seed_from_u64(5);
		let mut feather = Feather {
			x: 100.0,
			y: 640.0,
			size: 20.0,
			rotation: 0.0,
			rotation_speed: 0.004,
			fall_speed: 0.5,
			sway_amplitude: 1.0,
			sway_frequency: 0.02,
			opacity: 0.4,
			time_offset: 0.0,
		};

		feather.step(&mut rng, 0.0, surface());

		assert_eq!(feather.y, -20.0);
		assert!((0.0..800.0).contains(&feather.x));
		assert_eq!(feather.rotation, 0.004);
	}

	#[rstest]
	#[case(-0.05, 300.0, 800.0, 300.0)] // left edge -> right edge
	#[case(800.05, 300.0, 0.0, 300.0)] // right edge -> left edge
	#[case(400.0, -0.05, 400.0, 600.0)] // top -> bottom
	#[case(400.0, 600.05, 400.0, 0.0)] // bottom -> top
	fn test_cosmic_wraps_toroidally(
		#[case] x: f64,
		#[case] y: f64,
		#[case] expected_x: f64,
		#[case] expected_y: f64,
	) {
		let mut particle = CosmicParticle {
			x,
			y,
			radius: 1.0,
			color: Color::rgb(80, 250, 123),
			vx: 0.0,
			vy: 0.0,
			alpha: 0.5,
		};

		particle.step(surface());

		assert_eq!(particle.x, expected_x);
		assert_eq!(particle.y, expected_y);
	}

	#[test]
	fn test_streak_half_way() {
		let star = streak(0.0, 2000.0);

		let progress = star.progress(1000.0);
		assert_eq!(progress, 0.5);
		assert_eq!(star.fade(progress), (0.5 * 1.0_f64).min(1.5));
		assert!(!star.is_expired(1999.0));
		assert!(star.is_expired(2000.0));
	}

	#[test]
	fn test_streak_head_and_tail_follow_angle() {
		let star = streak(0.0, 2000.0);

		let (hx, hy) = star.head(0.5);
		assert!((hx - 100.0).abs() < 1e-9);
		assert!((hy - 200.0).abs() < 1e-9);

		let (tx, ty) = star.tail(0.5);
		assert!((tx - 100.0).abs() < 1e-9);
		assert!((ty - 140.0).abs() < 1e-9);
	}

	#[test]
	fn test_bright_variant_by_speed() {
		let mut star = streak(0.0, 1000.0);
		assert!(!star.is_bright());
		assert_eq!(star.trail_length(), 120.0);

		star.speed = 700.0;
		star.opacity = 1.5;
		assert!(star.is_bright());
		assert_eq!(star.trail_length(), 180.0);
		assert_eq!(star.fade(0.0), 1.5);
	}
}
