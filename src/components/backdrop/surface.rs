//! Canvas sizing.
//!
//! A backdrop either fills the viewport or matches its parent's layout box.
//! The measured size drives population counts, so it is sanitized here: a
//! detached or collapsed container simply produces an empty surface.

use log::debug;
use web_sys::{HtmlCanvasElement, Window};

use crate::error::BackdropError;

/// Pixel dimensions of a drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceSize {
	pub width: f64,
	pub height: f64,
}

impl SurfaceSize {
	/// Builds a size, clamping negative and non-finite dimensions to zero.
	pub fn new(width: f64, height: f64) -> Self {
		let clean = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
		Self {
			width: clean(width),
			height: clean(height),
		}
	}

	pub fn area(&self) -> f64 {
		self.width * self.height
	}

	pub fn is_empty(&self) -> bool {
		self.area() <= 0.0
	}
}

/// Where a canvas takes its dimensions from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizingMode {
	/// `window.innerWidth` x `window.innerHeight`
	Viewport,
	/// The parent element's client box
	Container,
}

/// Reads the current target size for `canvas`.
pub fn measure(
	window: &Window,
	canvas: &HtmlCanvasElement,
	mode: SizingMode,
) -> Result<SurfaceSize, BackdropError> {
	match mode {
		SizingMode::Viewport => {
			let width = window
				.inner_width()
				.map_err(BackdropError::from_js)?
				.as_f64()
				.unwrap_or(0.0);
			let height = window
				.inner_height()
				.map_err(BackdropError::from_js)?
				.as_f64()
				.unwrap_or(0.0);
			Ok(SurfaceSize::new(width, height))
		}
		SizingMode::Container => Ok(canvas
			.parent_element()
			.map(|p| SurfaceSize::new(p.client_width() as f64, p.client_height() as f64))
			.unwrap_or_default()),
	}
}

/// Measures and applies the size to the canvas backing store.
pub fn fit(window: &Window, canvas: &HtmlCanvasElement, mode: SizingMode) -> SurfaceSize {
	let size = measure(window, canvas, mode).unwrap_or_else(|err| {
		debug!("backdrop: sizing failed, using empty surface: {err}");
		SurfaceSize::default()
	});
	canvas.set_width(size.width as u32);
	canvas.set_height(size.height as u32);
	size
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(800.0, 600.0, 800.0, 600.0)]
	#[case(-5.0, 600.0, 0.0, 600.0)]
	#[case(f64::NAN, f64::INFINITY, 0.0, 0.0)]
	fn test_new_sanitizes(
		#[case] w: f64,
		#[case] h: f64,
		#[case] expected_w: f64,
		#[case] expected_h: f64,
	) {
		let size = SurfaceSize::new(w, h);
		assert_eq!(size.width, expected_w);
		assert_eq!(size.height, expected_h);
	}

	#[test]
	fn test_zero_area_is_empty() {
		assert!(SurfaceSize::new(0.0, 600.0).is_empty());
		assert!(!SurfaceSize::new(1.0, 1.0).is_empty());
	}
}
