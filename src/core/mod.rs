//! Core infrastructure — shared foundation used across the whole crate.
//!
//! - **config** — runtime configuration loading and resolved types.
//! - **error** — startup error enum.

pub mod config;
pub mod error;
