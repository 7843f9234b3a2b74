//! Leptos components wrapping the backdrop canvases.
//!
//! Each component renders a pointer-transparent canvas and, once the canvas is
//! in the DOM, hands a scene to a [`Lifecycle`] backed by the browser: frames
//! come from `requestAnimationFrame`, resizes from the window `resize` event.
//! Unmounting the component tears everything down.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use log::debug;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::lifecycle::{FrameHandle, FrameHost, Lifecycle, StopSignal};
use super::render::Paint;
use super::scene::{AngelScene, CosmicScene, Scene, StarflowScene};
use super::surface::{self, SizingMode, SurfaceSize};
use crate::config::{BackdropKind, PageConfig};
use crate::error::BackdropError;

const CANVAS_STYLE: &str =
	"position: absolute; top: 0; left: 0; width: 100%; height: 100%; z-index: 0; pointer-events: none;";
const COSMIC_CANVAS_STYLE: &str =
	"position: absolute; top: 0; left: 0; width: 100%; height: 100%; z-index: 0; pointer-events: none; opacity: 0.3;";

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;
type ResizeCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Browser-side [`FrameHost`].
struct WebHost {
	window: Window,
	canvas: HtmlCanvasElement,
	mode: SizingMode,
	on_frame: FrameCallback,
	on_resize: ResizeCallback,
}

impl FrameHost for WebHost {
	fn measure(&mut self) -> SurfaceSize {
		surface::fit(&self.window, &self.canvas, self.mode)
	}

	fn request_frame(&mut self) -> Option<FrameHandle> {
		let cb = self.on_frame.borrow();
		let cb = cb.as_ref()?;
		self.window
			.request_animation_frame(cb.as_ref().unchecked_ref())
			.ok()
	}

	fn cancel_frame(&mut self, handle: FrameHandle) {
		let _ = self.window.cancel_animation_frame(handle);
	}

	fn attach_resize(&mut self) -> bool {
		match self.on_resize.borrow().as_ref() {
			Some(cb) => self
				.window
				.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())
				.is_ok(),
			None => false,
		}
	}

	fn detach_resize(&mut self) {
		if let Some(cb) = self.on_resize.borrow().as_ref() {
			let _ = self
				.window
				.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
	}
}

/// A mounted scene with its drawing context.
struct Backdrop<S> {
	lifecycle: Lifecycle<WebHost>,
	scene: S,
	ctx: CanvasRenderingContext2d,
}

type Slot<S> = Rc<RefCell<Option<Backdrop<S>>>>;

fn context_2d(
	canvas: &HtmlCanvasElement,
) -> Result<(Window, CanvasRenderingContext2d), BackdropError> {
	let window = web_sys::window().ok_or(BackdropError::NoWindow)?;
	let ctx = canvas
		.get_context("2d")
		.map_err(BackdropError::from_js)?
		.ok_or(BackdropError::NoContext)?
		.dyn_into::<CanvasRenderingContext2d>()
		.map_err(|_| BackdropError::NoContext)?;
	Ok((window, ctx))
}

/// Seed for one backdrop: the page seed when configured, otherwise entropy
/// from the browser.
fn seed_for(kind: BackdropKind, config: &PageConfig) -> u64 {
	match config.seed {
		Some(seed) => seed ^ kind.salt(),
		None => {
			let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
			(noise << 32) ^ (js_sys::Date::now() as u64) ^ kind.salt()
		}
	}
}

/// Tears down the mounted backdrop and drops its callbacks. Returns `false`
/// without touching anything while a callback holds the slot.
fn release<S>(slot: &Slot<S>, on_frame: &FrameCallback, on_resize: &ResizeCallback) -> bool {
	let Ok(mut guard) = slot.try_borrow_mut() else {
		return false;
	};
	if let Some(mut backdrop) = guard.take() {
		backdrop.lifecycle.teardown();
	}
	drop(guard);
	on_frame.borrow_mut().take();
	on_resize.borrow_mut().take();
	true
}

/// Wires a scene to `canvas_ref` for the lifetime of the calling component.
fn use_backdrop<S>(
	canvas_ref: NodeRef<leptos::html::Canvas>,
	kind: BackdropKind,
	mode: SizingMode,
	make_scene: fn(u64) -> S,
) where
	S: Scene + Paint + 'static,
{
	let config = use_context::<PageConfig>().unwrap_or_default();
	if !kind.enabled_in(&config) {
		debug!("{kind:?} backdrop disabled by page config");
		return;
	}
	let seed = seed_for(kind, &config);

	let slot: Slot<S> = Rc::new(RefCell::new(None));
	let stop = StopSignal::default();
	let on_frame: FrameCallback = Rc::new(RefCell::new(None));
	let on_resize: ResizeCallback = Rc::new(RefCell::new(None));
	let (slot_init, frame_init, resize_init) = (slot.clone(), on_frame.clone(), on_resize.clone());
	let stop_init = stop.clone();
	let mut pending_mount = true;

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if !pending_mount {
			return;
		}
		pending_mount = false;

		let canvas: HtmlCanvasElement = canvas.into();
		let (window, ctx) = match context_2d(&canvas) {
			Ok(parts) => parts,
			Err(err) => {
				debug!("{kind:?} backdrop not started: {err}");
				return;
			}
		};

		let slot_resize = slot_init.clone();
		*resize_init.borrow_mut() = Some(Closure::new(move || {
			if let Ok(mut guard) = slot_resize.try_borrow_mut() {
				if let Some(b) = guard.as_mut() {
					b.lifecycle.resize(&mut b.scene);
				}
			}
		}));

		let slot_frame = slot_init.clone();
		*frame_init.borrow_mut() = Some(Closure::new(move |now: f64| {
			if let Ok(mut guard) = slot_frame.try_borrow_mut() {
				if let Some(b) = guard.as_mut() {
					let ctx = &b.ctx;
					b.lifecycle.frame(&mut b.scene, now, |scene| scene.paint(ctx));
				}
			}
		}));

		let host = WebHost {
			window,
			canvas,
			mode,
			on_frame: frame_init.clone(),
			on_resize: resize_init.clone(),
		};
		let mut backdrop = Backdrop {
			lifecycle: Lifecycle::with_stop_signal(host, stop_init.clone()),
			scene: make_scene(seed),
			ctx,
		};
		backdrop.lifecycle.mount(&mut backdrop.scene);
		*slot_init.borrow_mut() = Some(backdrop);
	});

	let teardown = SendWrapper::new((stop, slot, on_frame, on_resize));
	on_cleanup(move || {
		let (stop, slot, on_frame, on_resize) = SendWrapper::take(teardown);
		stop.set(true);
		if release(&slot, &on_frame, &on_resize) {
			return;
		}
		// A callback is mid-flight: it sees the stop flag on its next entry.
		// Keep the closures alive until it has returned.
		debug!("{kind:?} backdrop busy at unmount, deferring release");
		set_timeout(
			move || {
				if !release(&slot, &on_frame, &on_resize) {
					debug!("{kind:?} backdrop release skipped");
				}
			},
			Duration::ZERO,
		);
	});
}

/// Full-viewport falling starfield with shooting stars and flowing trails.
#[component]
pub fn StarflowBackground() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	use_backdrop(
		canvas_ref,
		BackdropKind::Starflow,
		SizingMode::Viewport,
		StarflowScene::new,
	);

	view! { <canvas node_ref=canvas_ref class="backdrop backdrop-starflow" style=CANVAS_STYLE /> }
}

/// Container-sized drifting particles over soft wave bands.
#[component]
pub fn CosmicBackground() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	use_backdrop(
		canvas_ref,
		BackdropKind::Cosmic,
		SizingMode::Container,
		CosmicScene::new,
	);

	view! { <canvas node_ref=canvas_ref class="backdrop backdrop-cosmic" style=COSMIC_CANVAS_STYLE /> }
}

/// Container-sized pulsing stars and falling feathers around a soft glow.
#[component]
pub fn AngelCanvas() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	use_backdrop(
		canvas_ref,
		BackdropKind::Angel,
		SizingMode::Container,
		AngelScene::new,
	);

	view! { <canvas node_ref=canvas_ref class="backdrop backdrop-angel" style=CANVAS_STYLE /> }
}
