//! Status effect machinery shared by conditions and traits.
//!
//! An effect goes through an explicit lifecycle:
//!
//! ```text
//! absent -> (apply hook) -> active -> (removal requested)
//!            -> veto? stays active
//!            -> (cleanup hook) -> absent
//! ```
//!
//! The apply hook runs before the instance enters the active set, so a
//! rejected add never leaves partial state. A vetoed removal leaves the
//! instance exactly as it was: the cleanup hook does not run and the apply
//! hook is never re-run.
//!
//! Conditions ([`ConditionKind`]) are transient; traits ([`TraitKind`]) are
//! long-lived and reuse the same state machine with a stricter policy (never
//! multi-stacking, never vetoing). Both kind spaces are closed enums and hook
//! behavior is resolved by pattern match, not runtime type inspection.

pub mod conditions;
pub mod set;
pub mod traits;

pub use conditions::ConditionKind;
pub use set::{Conditions, EffectSet, RemoveOutcome, Traits};
pub use traits::TraitKind;

use crate::error::{CoreError, ErrorSeverity};
use crate::stats::{AttrHandler, CharacteristicStore};

/// A kind space for effects: the stacking policy plus the three lifecycle
/// hooks, dispatched over a closed enum.
pub trait EffectKind: Copy + Eq + core::hash::Hash + core::fmt::Display {
    /// Default stacking policy for this kind.
    fn allow_multi(self) -> bool {
        false
    }

    /// Apply-time side effects (e.g. install a vital modifier). Runs exactly
    /// once, before the effect enters the active set.
    fn apply(_effect: &mut Effect<Self>, _attrs: &mut AttrHandler, _stats: &CharacteristicStore) {}

    /// Removal gate. Returning `false` vetoes the removal; the effect stays
    /// active and untouched.
    fn request_removal(
        _effect: &mut Effect<Self>,
        _attrs: &mut AttrHandler,
        _stats: &CharacteristicStore,
    ) -> bool {
        true
    }

    /// Cleanup of installed side effects. Runs exactly once, just before the
    /// effect leaves the active set.
    fn cleanup(_effect: &mut Effect<Self>, _attrs: &mut AttrHandler, _stats: &CharacteristicStore) {
    }
}

/// A single active (or about-to-be-active) effect instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Effect<K> {
    pub kind: K,
    /// Disabled effects skip the removal gate: they can always be removed,
    /// but their cleanup still runs so installed modifiers never leak.
    pub enabled: bool,
    /// Per-instance stacking policy, seeded from the kind's default.
    pub allow_multi: bool,
    /// Kind-specific strength (e.g. the health penalty of a poison).
    pub magnitude: i32,
    /// Veto latch for binding effects; cleared by an external collaborator
    /// when the effect may end.
    pub locked: bool,
}

impl<K: EffectKind> Effect<K> {
    pub fn new(kind: K) -> Self {
        Self {
            kind,
            enabled: true,
            allow_multi: kind.allow_multi(),
            magnitude: 0,
            locked: false,
        }
    }

    pub fn with_magnitude(mut self, magnitude: i32) -> Self {
        self.magnitude = magnitude;
        self
    }

    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Policy rejections surfaced by the effect set.
///
/// Both variants are expected outcomes reported to the acting character; the
/// active set is left exactly as it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectError<K: core::fmt::Display + core::fmt::Debug> {
    #[error("you are already affected by {kind}")]
    AlreadyAffected { kind: K },

    #[error("the {kind} effect resists being removed")]
    RemovalVetoed { kind: K },

    #[error("the {kind} effect cannot stack any further")]
    StackLimit { kind: K },
}

impl<K: core::fmt::Display + core::fmt::Debug> CoreError for EffectError<K> {
    fn severity(&self) -> ErrorSeverity {
        match self {
            EffectError::AlreadyAffected { .. }
            | EffectError::RemovalVetoed { .. }
            | EffectError::StackLimit { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            EffectError::AlreadyAffected { .. } => "already_affected",
            EffectError::RemovalVetoed { .. } => "removal_vetoed",
            EffectError::StackLimit { .. } => "stack_limit",
        }
    }
}
