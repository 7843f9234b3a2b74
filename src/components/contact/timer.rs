//! A single cancellable one-shot timer.

use std::time::Duration;

use leptos::prelude::*;
use log::warn;

/// Holds at most one pending timeout. Scheduling replaces (and clears) the
/// previous one; dropping the slot clears whatever is pending.
#[derive(Default)]
pub struct TimerSlot {
	handle: Option<TimeoutHandle>,
}

impl TimerSlot {
	pub fn schedule(&mut self, delay: Duration, f: impl FnOnce() + 'static) {
		self.cancel();
		match set_timeout_with_handle(f, delay) {
			Ok(handle) => self.handle = Some(handle),
			Err(err) => warn!("contact: failed to schedule timer: {err:?}"),
		}
	}

	pub fn cancel(&mut self) {
		if let Some(handle) = self.handle.take() {
			handle.clear();
		}
	}
}

impl Drop for TimerSlot {
	fn drop(&mut self) {
		self.cancel();
	}
}
