//! Common error infrastructure for raid-core.
//!
//! Domain-specific errors (`ActionError`, `StateError`) live next to the code
//! that raises them; this module holds the classification shared by all of them.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: the request is invalid for the current state and must be
///   corrected before resubmitting
/// - **Internal**: an invariant of the stored state does not hold
/// - **Fatal**: the state cannot make further progress (e.g. exhausted counters)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: unauthorized caller, duplicate character, claim not allowed
    Validation,

    /// Unexpected state inconsistency. These indicate bugs.
    Internal,

    /// State cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all raid-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for logging and for matching rejections without parsing messages.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
