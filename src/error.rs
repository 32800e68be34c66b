//! Error types for gapscan operations.

use thiserror::Error;

/// Errors that can end a minimum-distance run.
///
/// Every variant is handled at the [`ScanJob`](crate::job::ScanJob) boundary;
/// none of them escape a submitted job.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScanError {
    /// No source object was supplied.
    #[error("there is no source object loaded")]
    NotFound,

    /// The source object does not expose aperture geometry.
    #[error("source `{0}` has no aperture geometry and cannot be evaluated")]
    InvalidInput(String),

    /// The self-union could not produce valid topology.
    #[error("geometry normalization failed: {0}")]
    Geometry(String),

    /// A pairwise distance could not be computed.
    #[error("distance computation failed for features {first} and {second}: {reason}")]
    Computation {
        /// Index of the first feature of the pair.
        first: usize,
        /// Index of the second feature of the pair.
        second: usize,
        /// What went wrong.
        reason: String,
    },

    /// The run was cancelled by the caller.
    #[error("scan cancelled")]
    Cancelled,

    /// The scan configuration is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ScanError {
    /// Returns `true` for a user-requested abort rather than a failure.
    #[inline]
    pub fn is_cancellation(&self) -> bool {
        matches!(self, ScanError::Cancelled)
    }
}

/// Errors raised while loading or validating a [`ScanConfig`](crate::config::ScanConfig).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(String),

    /// The configuration text is not valid YAML for this schema.
    #[error("failed to parse configuration: {0}")]
    Parse(String),

    /// Precision must lie in `2..=10` decimal digits.
    #[error("precision {0} is outside the supported range 2..=10")]
    PrecisionOutOfRange(u8),

    /// The validity tolerance must be finite and non-negative.
    #[error("validity tolerance {0} must be finite and non-negative")]
    InvalidTolerance(f64),
}
