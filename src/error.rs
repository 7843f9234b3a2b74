//! Setup errors for canvas-backed components.
//!
//! None of these reach the user: a backdrop that fails to set up logs the
//! reason and renders nothing.

use std::fmt;

use wasm_bindgen::JsValue;

/// Reasons a backdrop could not start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackdropError {
	/// No global `window` (not running in a browser).
	NoWindow,
	/// The canvas refused to hand out a 2D context.
	NoContext,
	/// A DOM call threw.
	Dom(String),
}

impl BackdropError {
	/// Wraps a thrown JS value.
	pub fn from_js(value: JsValue) -> Self {
		Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}

impl fmt::Display for BackdropError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			BackdropError::NoWindow => write!(f, "no window available"),
			BackdropError::NoContext => write!(f, "canvas has no 2d context"),
			BackdropError::Dom(msg) => write!(f, "DOM call failed: {msg}"),
		}
	}
}

impl std::error::Error for BackdropError {}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display() {
		assert_eq!(BackdropError::NoContext.to_string(), "canvas has no 2d context");
		assert_eq!(
			BackdropError::Dom("boom".into()).to_string(),
			"DOM call failed: boom"
		);
	}
}
