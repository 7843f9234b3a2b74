//! Rate-limited shooting star spawning.
//!
//! Each frame rolls a small probability per spawn kind. A successful roll
//! only produces streaks if the kind's minimum interval has elapsed since its
//! previous batch, so batches never come closer than the interval.

use std::ops::RangeInclusive;

use rand::Rng;

use super::entities::ShootingStar;
use super::surface::SurfaceSize;
use super::theme::StreakStyle;

/// Gate and batch size for one spawn kind.
#[derive(Clone, Debug)]
pub struct SpawnRule {
	/// Minimum milliseconds between batches
	pub min_interval: f64,
	/// Chance per frame of attempting a batch
	pub probability: f64,
	/// Streaks per batch
	pub batch: RangeInclusive<usize>,
	pub style: StreakStyle,
}

impl SpawnRule {
	pub fn normal() -> Self {
		Self {
			min_interval: 3000.0,
			probability: 0.008,
			batch: 1..=3,
			style: StreakStyle::normal(),
		}
	}

	pub fn bright() -> Self {
		Self {
			min_interval: 10000.0,
			probability: 0.002,
			batch: 1..=1,
			style: StreakStyle::bright(),
		}
	}
}

/// A spawn kind together with the time of its latest batch.
#[derive(Clone, Debug)]
pub struct Spawner {
	pub rule: SpawnRule,
	last: Option<f64>,
}

impl Spawner {
	pub fn new(rule: SpawnRule) -> Self {
		Self { rule, last: None }
	}

	/// Timestamp of the latest batch, if any.
	pub fn last_spawn(&self) -> Option<f64> {
		self.last
	}

	fn interval_elapsed(&self, now: f64) -> bool {
		self.last
			.is_none_or(|last| now - last >= self.rule.min_interval)
	}

	/// Rolls for this frame and appends any new streaks to `out`.
	/// Returns how many were created.
	pub fn roll<R: Rng>(
		&mut self,
		rng: &mut R,
		now: f64,
		size: SurfaceSize,
		out: &mut Vec<ShootingStar>,
	) -> usize {
		if !rng.gen_bool(self.rule.probability.clamp(0.0, 1.0)) {
			return 0;
		}
		if !self.interval_elapsed(now) {
			return 0;
		}
		self.last = Some(now);

		let count = rng.gen_range(self.rule.batch.clone());
		out.extend((0..count).map(|_| ShootingStar::random(rng, &self.rule.style, size, now)));
		count
	}
}
