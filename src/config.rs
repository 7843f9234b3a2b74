//! Page-level configuration embedded in the host HTML.
//!
//! The page may carry a JSON script element:
//!
//! ```html
//! <script id="backdrop-config" type="application/json">
//!   { "seed": 42, "cosmic": false }
//! </script>
//! ```
//!
//! Every field is optional; absent fields keep their defaults.

use log::{debug, info, warn};
use serde::Deserialize;

/// Switches and seed shared by every backdrop on the page.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PageConfig {
	/// Fixed RNG seed. When set, every backdrop replays identically on reload.
	pub seed: Option<u64>,
	/// Render the full-viewport starflow backdrop.
	pub starflow: bool,
	/// Render the cosmic wave backdrop.
	pub cosmic: bool,
	/// Render the angel feather backdrop.
	pub angel: bool,
}

impl Default for PageConfig {
	fn default() -> Self {
		Self {
			seed: None,
			starflow: true,
			cosmic: true,
			angel: true,
		}
	}
}

impl PageConfig {
	/// Parses the embedded JSON.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}

	/// Config for a page whose `backdrop-config` element held `text`.
	/// A missing element means defaults; a malformed one is logged and
	/// also yields defaults.
	pub fn resolve(text: Option<&str>) -> Self {
		let Some(text) = text else {
			debug!("nebula-backdrops: no page config, using defaults");
			return Self::default();
		};

		match Self::from_json(text) {
			Ok(config) => {
				info!("nebula-backdrops: loaded page config {:?}", config);
				config
			}
			Err(e) => {
				warn!("nebula-backdrops: failed to parse page config: {}", e);
				Self::default()
			}
		}
	}
}

/// The three backdrop flavours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackdropKind {
	/// Full-viewport falling starfield.
	Starflow,
	/// Drifting particles over wave bands.
	Cosmic,
	/// Pulsing stars and feathers behind the contact section.
	Angel,
}

impl BackdropKind {
	/// Mixed into the page seed so backdrops sharing a seed still differ.
	pub fn salt(self) -> u64 {
		match self {
			BackdropKind::Starflow => 0x5354_4152,
			BackdropKind::Cosmic => 0x434f_534d,
			BackdropKind::Angel => 0x414e_4745,
		}
	}

	/// Whether `config` lets this backdrop run.
	pub fn enabled_in(self, config: &PageConfig) -> bool {
		match self {
			BackdropKind::Starflow => config.starflow,
			BackdropKind::Cosmic => config.cosmic,
			BackdropKind::Angel => config.angel,
		}
	}
}
