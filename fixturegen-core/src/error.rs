//! Error types for fixture configuration.

use thiserror::Error;

/// Error type for invalid fixture configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Fixture name is not usable as a namespace.
    #[error("invalid fixture name '{name}': {reason}")]
    InvalidName {
        /// Offending name.
        name: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// Output identifier is not a bare file name.
    #[error("invalid output identifier '{output_id}': must be a plain file name")]
    InvalidOutputId {
        /// Offending output identifier.
        output_id: String,
    },

    /// Type count of zero.
    #[error("type count must be positive")]
    ZeroTypeCount,

    /// No fixture registered under the requested name.
    #[error("unknown fixture '{name}' (expected small, medium or large)")]
    UnknownFixture {
        /// Requested name.
        name: String,
    },
}

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
