//! nebula-backdrops: animated canvas backdrops for a single-page portfolio.
//!
//! This crate provides WASM Leptos components that paint decorative particle
//! scenes (starfields, shooting stars, drifting feathers, wave bands) behind
//! page sections, plus the contact section that hosts one of them.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod config;
pub mod error;

pub use components::backdrop::{AngelCanvas, CosmicBackground, StarflowBackground};
pub use components::contact::ContactSection;
pub use config::PageConfig;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("nebula-backdrops: logging initialized");
}

/// Load page configuration from a script element with id="backdrop-config".
fn load_page_config() -> PageConfig {
	PageConfig::resolve(read_config_script().as_deref())
}

fn read_config_script() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("backdrop-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Main application component.
/// Lays out the hero, about and contact sections over their backdrops.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();
	provide_context(load_page_config());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Portfolio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<main class="page">
			<section id="home" class="hero-section" style="position: relative; min-height: 100vh; overflow: hidden;">
				<StarflowBackground />
				<div class="hero-content" style="position: relative; z-index: 10;">
					<h1>"Building intelligent experiences"</h1>
					<p class="subtitle">"Web and AI solutions, from idea to launch."</p>
				</div>
			</section>

			<section id="about" class="about-section" style="position: relative; overflow: hidden;">
				<CosmicBackground />
				<div class="about-content" style="position: relative; z-index: 10;">
					<h2>"About Me"</h2>
					<p>"Full-stack developer focused on fast, polished interfaces and practical AI."</p>
				</div>
			</section>

			<ContactSection />
		</main>
	}
}
