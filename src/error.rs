//! Error types for the selection engine.
//!
//! None of these ever reach the notification callbacks. A failed arm is logged
//! and the pointer-down is treated as if it never happened; configuration
//! errors surface only where the host loads its settings.

use thiserror::Error;

/// Reasons a pointer-down did not arm a drag
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArmError {
    /// The engine is disabled
    #[error("selection is disabled")]
    Disabled,

    /// Only the primary button starts a drag
    #[error("non-primary button {0}")]
    NonPrimaryButton(u16),

    /// A drag is already armed or selecting
    #[error("a drag is already in progress")]
    AlreadyActive,

    /// The container has no geometry (not mounted)
    #[error("container geometry unavailable")]
    MissingContainer,
}

/// Errors that can occur while parsing a selection configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Threshold must be a finite, non-negative distance
    #[error("invalid threshold: {0}")]
    InvalidThreshold(f64),
}

/// Result type alias for configuration parsing
pub type ConfigResult<T> = Result<T, ConfigError>;
