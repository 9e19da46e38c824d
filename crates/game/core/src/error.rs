//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (`AttrError`, `EffectError`) are defined in their
//! respective modules alongside the operations they validate. This module
//! provides the shared severity classification used across all of them.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: Expected policy rejections that leave state untouched
///   (stacking a non-multi effect, a vetoed removal). Reported to the acting
///   character, never fatal.
/// - **Validation**: Invalid input that should be rejected without retry.
/// - **Internal**: Unexpected state inconsistencies that indicate a bug.
/// - **Fatal**: Contract violations by a calling component. These must abort
///   the operation with a diagnostic rather than silently degrade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Expected rejection - report to the user, no state change.
    Recoverable,

    /// Invalid input - should not retry without changes.
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Contract violation - bug in a calling component.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is an expected, user-reportable rejection.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a bug rather than a policy outcome.
    pub const fn is_contract_violation(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait CoreError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for error categorization, metrics, and testing.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
