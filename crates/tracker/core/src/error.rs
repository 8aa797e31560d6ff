//! Common error infrastructure for tracker-core.
//!
//! The roster state machine itself never fails: invalid indices and empty
//! rosters are clamped or ignored. Errors only exist at the edges where raw
//! input enters the tracker, namely status selections coming from a form and
//! events decoded from the initiative feed. Those error enums live next to
//! the code that produces them and implement [`TrackerError`].

/// Severity level of an error, used by callers to decide how to surface it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The caller can retry with different input.
    ///
    /// Examples: no status chosen in the form
    Recoverable,

    /// The input is malformed and should be dropped.
    ///
    /// Examples: unknown status name, undecodable feed line
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common trait for all tracker-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait TrackerError: std::fmt::Display + std::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
