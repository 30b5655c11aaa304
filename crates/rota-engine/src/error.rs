//! Error types for rota-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RotaError {
    /// A datetime string that matches none of the accepted layouts.
    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),

    /// An unrecognized IANA timezone identifier.
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// An interval whose finish precedes its start.
    #[error("Invalid interval: finish {finish} precedes start {start}")]
    InvalidInterval { start: String, finish: String },
}

pub type Result<T> = std::result::Result<T, RotaError>;
