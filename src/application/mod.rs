//! # Application Layer
//!
//! Use cases and session state coordinating domain and connector layers.

pub mod interfaces;
pub mod session;
pub mod use_cases;

pub use interfaces::*;
pub use session::*;
pub use use_cases::*;
