//! shopdesk — merchant customer-support chat backend.
//!
//! The binary entry point is src/main.rs; the library exposes the pipeline
//! pieces for integration tests.

pub mod bootstrap;
pub mod chat;
pub mod core;
pub mod llm;
pub mod profile;
pub mod prompt;
pub mod sanitize;
pub mod server;

pub use crate::core::{config, error};
