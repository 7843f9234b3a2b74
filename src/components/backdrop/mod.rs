//! Animated canvas backdrops.
//!
//! Three decorative layers share one particle engine:
//! - [`StarflowBackground`]: viewport-sized falling stars, shooting stars and
//!   flowing trails
//! - [`CosmicBackground`]: drifting dots that wrap around the container over
//!   filled wave bands
//! - [`AngelCanvas`]: pulsing rising stars and falling feathers over a centre
//!   glow
//!
//! Each instance owns its scene (populations, RNG, clocks) and is driven by a
//! [`lifecycle::Lifecycle`] that schedules frames and cleans up on unmount.
//! Scenes are plain Rust and can be stepped without a browser:
//!
//! ```ignore
//! use nebula_backdrops::components::backdrop::{AngelScene, Scene, SurfaceSize};
//!
//! let mut scene = AngelScene::new(42);
//! scene.resize(SurfaceSize::new(800.0, 600.0));
//! scene.tick(16.0);
//! assert_eq!(scene.stars.len(), 32);
//! ```

mod component;
pub mod entities;
pub mod lifecycle;
pub mod population;
mod render;
pub mod scene;
pub mod spawn;
pub mod surface;
pub mod theme;

pub use component::{AngelCanvas, CosmicBackground, StarflowBackground};
pub use render::Paint;
pub use scene::{AngelScene, CosmicScene, Scene, StarflowScene};
pub use surface::{SizingMode, SurfaceSize};
