//! Application-wide error types.
//!
//! Only startup can fail with an [`AppError`]. Request handling recovers
//! every failure locally and always answers the caller.

use thiserror::Error;

use crate::llm::BuildError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("logger error: {0}")]
    Logger(String),

    #[error("server error: {0}")]
    Server(String),

    #[error("llm error: {0}")]
    Llm(#[from] BuildError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
