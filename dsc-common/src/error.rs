//! Common error types for DSC

use thiserror::Error;

/// Common result type for DSC operations
pub type Result<T> = std::result::Result<T, Error>;

/// Ambient error types shared by the DSC crates
///
/// Engine outcomes (empty sequence, bad position, ...) are not errors at this
/// level; they live in `dsc_engine::EngineError`.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error (wraps toml::de::Error)
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
