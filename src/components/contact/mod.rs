//! Contact section with a simulated, cancellable form submission.

mod component;
pub mod form;
mod timer;

pub use component::ContactSection;
pub use form::{ContactMessage, SubmitFlow, SubmitPhase};
