//! Mount/teardown state machine for a backdrop.
//!
//! ```text
//! Unmounted --mount--> Sizing --> Running --teardown--> Unmounted
//!                         ^          |
//!                         +--resize--+
//! ```
//!
//! The controller talks to the outside world only through [`FrameHost`], so
//! the browser wiring lives in the component and tests can count exactly which
//! host calls were made.

use std::cell::Cell;
use std::rc::Rc;

use log::debug;

use super::scene::Scene;
use super::surface::SurfaceSize;

/// Handle returned by the host's frame scheduling primitive.
pub type FrameHandle = i32;

/// Shared flag that asks a [`Lifecycle`] to shut down at its next entry
/// point. Raising it never needs a borrow of the lifecycle itself.
pub type StopSignal = Rc<Cell<bool>>;

/// Where a backdrop is in its life.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
	Unmounted,
	Sizing,
	Running,
}

/// Host services a backdrop needs: sizing, frame scheduling, resize events.
pub trait FrameHost {
	/// Sizes the drawing surface and reports the result.
	fn measure(&mut self) -> SurfaceSize;

	/// Schedules the next frame callback.
	fn request_frame(&mut self) -> Option<FrameHandle>;

	/// Cancels a scheduled frame that has not run yet.
	fn cancel_frame(&mut self, handle: FrameHandle);

	/// Starts delivering resize events. Returns whether a listener was attached.
	fn attach_resize(&mut self) -> bool;

	/// Stops delivering resize events.
	fn detach_resize(&mut self);
}

/// Drives one scene through its host.
pub struct Lifecycle<H: FrameHost> {
	host: H,
	phase: Phase,
	pending_frame: Option<FrameHandle>,
	resize_attached: bool,
	stop: StopSignal,
}

impl<H: FrameHost> Lifecycle<H> {
	pub fn new(host: H) -> Self {
		Self::with_stop_signal(host, StopSignal::default())
	}

	/// Like [`Lifecycle::new`], watching a stop flag owned by the caller.
	pub fn with_stop_signal(host: H, stop: StopSignal) -> Self {
		Self {
			host,
			phase: Phase::Unmounted,
			pending_frame: None,
			resize_attached: false,
			stop,
		}
	}

	pub fn phase(&self) -> Phase {
		self.phase
	}

	pub fn host(&self) -> &H {
		&self.host
	}

	pub fn has_pending_frame(&self) -> bool {
		self.pending_frame.is_some()
	}

	/// A handle that requests teardown from outside a running callback.
	pub fn stop_signal(&self) -> StopSignal {
		self.stop.clone()
	}

	/// Tears down if a stop was requested. Returns whether the lifecycle is stopped.
	fn honour_stop(&mut self) -> bool {
		if self.stop.get() {
			self.teardown();
			return true;
		}
		false
	}

	/// Sizes and seeds the scene, attaches the resize listener and schedules
	/// the first frame. Does nothing unless unmounted.
	pub fn mount<S: Scene>(&mut self, scene: &mut S) {
		if self.phase != Phase::Unmounted {
			return;
		}
		self.phase = Phase::Sizing;
		scene.resize(self.host.measure());
		self.resize_attached = self.host.attach_resize();
		self.pending_frame = self.host.request_frame();
		self.phase = Phase::Running;
		debug!("backdrop: mounted at {:?}", scene.size());
	}

	/// Re-measures and reseeds while running.
	pub fn resize<S: Scene>(&mut self, scene: &mut S) {
		if self.honour_stop() || self.phase != Phase::Running {
			return;
		}
		self.phase = Phase::Sizing;
		scene.resize(self.host.measure());
		self.phase = Phase::Running;
	}

	/// Runs one frame: tick, paint, schedule the next. Frames delivered after
	/// teardown or a stop request are ignored and return `false`.
	pub fn frame<S: Scene>(&mut self, scene: &mut S, now: f64, paint: impl FnOnce(&S)) -> bool {
		if self.honour_stop() || self.phase != Phase::Running {
			return false;
		}
		self.pending_frame = None;
		scene.tick(now);
		paint(scene);
		self.pending_frame = self.host.request_frame();
		true
	}

	/// Cancels the pending frame and detaches the resize listener. Safe to
	/// call more than once.
	pub fn teardown(&mut self) {
		if self.phase == Phase::Unmounted {
			return;
		}
		if let Some(handle) = self.pending_frame.take() {
			self.host.cancel_frame(handle);
		}
		if self.resize_attached {
			self.host.detach_resize();
			self.resize_attached = false;
		}
		self.phase = Phase::Unmounted;
		debug!("backdrop: torn down");
	}
}

impl<H: FrameHost> Drop for Lifecycle<H> {
	fn drop(&mut self) {
		self.teardown();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::backdrop::scene::AngelScene;

	/// Records every host call.
	#[derive(Default)]
	struct FakeHost {
		size: SurfaceSize,
		next_handle: FrameHandle,
		requested: Vec<FrameHandle>,
		cancelled: Vec<FrameHandle>,
		listeners: usize,
	}

	impl FrameHost for FakeHost {
		fn measure(&mut self) -> SurfaceSize {
			self.size
		}

		fn request_frame(&mut self) -> Option<FrameHandle> {
			self.next_handle += 1;
			self.requested.push(self.next_handle);
			Some(self.next_handle)
		}

		fn cancel_frame(&mut self, handle: FrameHandle) {
			self.cancelled.push(handle);
		}

		fn attach_resize(&mut self) -> bool {
			self.listeners += 1;
			true
		}

		fn detach_resize(&mut self) {
			self.listeners -= 1;
		}
	}

	fn mounted() -> (Lifecycle<FakeHost>, AngelScene) {
		let host = FakeHost {
			size: SurfaceSize::new(800.0, 600.0),
			..FakeHost::default()
		};
		let mut lifecycle = Lifecycle::new(host);
		let mut scene = AngelScene::new(17);
		lifecycle.mount(&mut scene);
		(lifecycle, scene)
	}

	#[test]
	fn test_mount_sizes_seeds_and_schedules() {
		let (lifecycle, scene) = mounted();

		assert_eq!(lifecycle.phase(), Phase::Running);
		assert_eq!(scene.stars.len(), 32);
		assert_eq!(scene.feathers.len(), 8);
		assert_eq!(lifecycle.host().listeners, 1);
		assert_eq!(lifecycle.host().requested, vec![1]);
	}

	#[test]
	fn test_frames_chain() {
		let (mut lifecycle, mut scene) = mounted();
		let mut painted = 0;

		for frame in 1..=3 {
			assert!(lifecycle.frame(&mut scene, frame as f64 * 16.0, |_| painted += 1));
		}

		assert_eq!(painted, 3);
		assert_eq!(lifecycle.host().requested, vec![1, 2, 3, 4]);
		assert!(lifecycle.has_pending_frame());
	}

	#[test]
	fn test_teardown_cancels_once_and_detaches() {
		let (mut lifecycle, mut scene) = mounted();
		lifecycle.frame(&mut scene, 16.0, |_| {});

		lifecycle.teardown();
		lifecycle.teardown();

		assert_eq!(lifecycle.phase(), Phase::Unmounted);
		assert_eq!(lifecycle.host().cancelled, vec![2]);
		assert_eq!(lifecycle.host().listeners, 0);
	}

	#[test]
	fn test_late_frame_after_teardown_is_ignored() {
		let (mut lifecycle, mut scene) = mounted();
		lifecycle.teardown();
		let mut painted = false;

		let ran = lifecycle.frame(&mut scene, 16.0, |_| painted = true);

		assert!(!ran);
		assert!(!painted);
		assert_eq!(lifecycle.host().requested, vec![1]);
	}

	#[test]
	fn test_stop_signal_tears_down_at_next_frame() {
		let (mut lifecycle, mut scene) = mounted();
		lifecycle.frame(&mut scene, 16.0, |_| {});
		let stop = lifecycle.stop_signal();
		let mut painted = false;

		stop.set(true);
		let ran = lifecycle.frame(&mut scene, 32.0, |_| painted = true);

		assert!(!ran);
		assert!(!painted);
		assert_eq!(lifecycle.phase(), Phase::Unmounted);
		assert_eq!(lifecycle.host().requested, vec![1, 2]);
		assert_eq!(lifecycle.host().cancelled, vec![2]);
		assert_eq!(lifecycle.host().listeners, 0);
	}

	#[test]
	fn test_stop_signal_tears_down_on_resize() {
		let (mut lifecycle, mut scene) = mounted();
		lifecycle.stop_signal().set(true);

		lifecycle.host.size = SurfaceSize::new(400.0, 300.0);
		lifecycle.resize(&mut scene);

		assert_eq!(lifecycle.phase(), Phase::Unmounted);
		assert_eq!(scene.stars.len(), 32);
		assert_eq!(lifecycle.host().cancelled, vec![1]);
		assert_eq!(lifecycle.host().listeners, 0);
	}

	#[test]
	fn test_resize_reseeds_for_new_size() {
		let (mut lifecycle, mut scene) = mounted();

		lifecycle.host.size = SurfaceSize::new(400.0, 300.0);
		lifecycle.resize(&mut scene);

		assert_eq!(lifecycle.phase(), Phase::Running);
		assert_eq!(scene.stars.len(), 8);
		assert_eq!(scene.feathers.len(), 4);
	}

	#[test]
	fn test_resize_ignored_when_unmounted() {
		let mut lifecycle = Lifecycle::new(FakeHost {
			size: SurfaceSize::new(800.0, 600.0),
			..FakeHost::default()
		});
		let mut scene = AngelScene::new(1);

		lifecycle.resize(&mut scene);

		assert!(scene.stars.is_empty());
		assert_eq!(lifecycle.phase(), Phase::Unmounted);
	}

	#[test]
	fn test_zero_area_mount_runs_blank() {
		let mut lifecycle = Lifecycle::new(FakeHost::default());
		let mut scene = AngelScene::new(1);
		lifecycle.mount(&mut scene);

		assert!(lifecycle.frame(&mut scene, 16.0, |_| {}));
		assert!(scene.stars.is_empty());
	}
}
