//! Status messages and run outcomes.

use std::fmt;

use crate::error::ScanError;
use crate::scan::MinimumDistance;

/// Severity of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A human-readable lifecycle message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub level: StatusLevel,
    pub text: String,
}

impl Status {
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(StatusLevel::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(StatusLevel::Success, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(StatusLevel::Warning, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(StatusLevel::Error, text)
    }

    fn new(level: StatusLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            StatusLevel::Info => write!(f, "{}", self.text),
            StatusLevel::Success => write!(f, "[success] {}", self.text),
            StatusLevel::Warning => write!(f, "[WARNING] {}", self.text),
            StatusLevel::Error => write!(f, "[ERROR] {}", self.text),
        }
    }
}

/// What a caller is shown once a run produced an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanReport {
    Found(MinimumDistance),
    /// Fewer than two separate features, so there is no distance to show.
    NotAvailable,
}

/// Final outcome of a [`ScanJob`](super::ScanJob).
#[derive(Debug, Clone, PartialEq)]
pub enum ScanResult {
    Found(MinimumDistance),
    NoPairs,
    /// Stopped by the cancellation token. Not an error.
    Cancelled,
    Failed(ScanError),
}

impl ScanResult {
    /// The report published to the observer, if any.
    pub fn report(&self) -> Option<ScanReport> {
        match self {
            ScanResult::Found(min) => Some(ScanReport::Found(*min)),
            ScanResult::NoPairs => Some(ScanReport::NotAvailable),
            ScanResult::Cancelled | ScanResult::Failed(_) => None,
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, ScanResult::Found(_))
    }
}
