//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Groq chat-completions over HTTPS (reqwest)
//! - Scriptable mock service for tests

pub mod adapter;

pub use adapter::*;
