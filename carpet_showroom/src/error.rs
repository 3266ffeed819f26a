//! Error types for the showroom viewer
//!
//! This module defines the error types used throughout the crate,
//! covering the scene graph, asset loading, resources and configuration.
//!
//! Missing carpet meshes, empty geometry and failed texture loads are NOT
//! errors: they degrade to "unavailable" results and are only logged.

use std::fmt;

/// Result type for showroom operations
pub type Result<T> = std::result::Result<T, Error>;

/// Showroom viewer errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Unknown or stale scene node key
    InvalidNode(String),

    /// An asset (scene graph, texture image) could not be produced by its loader
    AssetLoad(String),

    /// Invalid resource (material, texture, cached asset)
    InvalidResource(String),

    /// Rejected configuration value
    InvalidConfig(String),

    /// Initialization failed (viewer, subsystems)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidNode(msg) => write!(f, "Invalid node: {}", msg),
            Error::AssetLoad(msg) => write!(f, "Asset load failed: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Log an error and build an `Error::InvalidResource` from a format string
///
/// # Example
///
/// ```ignore
/// let err = engine_err!("showroom::AssetCache", "Asset '{}' not resident", key);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::viewer_error!($source, "{}", message);
        $crate::showroom::Error::InvalidResource(message)
    }};
}

/// Log an error and return early with `Error::InvalidResource`
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
