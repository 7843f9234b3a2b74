//! Page components.

pub mod backdrop;
pub mod contact;
