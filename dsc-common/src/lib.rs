//! # DSC Common Library
//!
//! Shared code for the Data Structure Calculator crates:
//! - Error and Result types
//! - TOML configuration loading and path resolution
//! - Tracing subscriber initialisation

pub mod config;
pub mod error;
pub mod logging;

pub use config::{Config, ConfigResolver, ConfigSource, DisplayConfig, LoggingConfig};
pub use error::{Error, Result};
