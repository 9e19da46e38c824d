//! Transient condition kinds and their lifecycle behavior.

use crate::stats::{AttrHandler, CharacteristicStore, VitalKind};

use super::{Effect, EffectKind};

/// The closed set of transient conditions.
///
/// Visibility/interaction predicates read these through `has()`; only
/// `Poisoned` and `Bound` carry lifecycle behavior of their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConditionKind {
    /// Cannot be seen without DetectInvis.
    Invisible,
    /// Cannot be seen without DetectHidden.
    Hidden,
    /// Sees through Invisible.
    DetectInvis,
    /// Sees through Hidden.
    DetectHidden,
    /// Sees everything, regardless of other conditions.
    HolyLight,
    /// Asleep; interaction predicates treat the character as unaware.
    Sleeping,
    /// Reduces maximum health by the dose's magnitude. Doses stack.
    Poisoned,
    /// A binding effect with a minimum hold: removal is vetoed while the
    /// instance stays locked.
    Bound,
}

impl EffectKind for ConditionKind {
    fn allow_multi(self) -> bool {
        matches!(self, ConditionKind::Poisoned)
    }

    fn apply(effect: &mut Effect<Self>, attrs: &mut AttrHandler, stats: &CharacteristicStore) {
        if let ConditionKind::Poisoned = effect.kind {
            attrs.install_mod(stats, VitalKind::Health, -effect.magnitude);
        }
    }

    fn request_removal(
        effect: &mut Effect<Self>,
        _attrs: &mut AttrHandler,
        _stats: &CharacteristicStore,
    ) -> bool {
        match effect.kind {
            ConditionKind::Bound => !effect.locked,
            _ => true,
        }
    }

    fn cleanup(effect: &mut Effect<Self>, attrs: &mut AttrHandler, stats: &CharacteristicStore) {
        if let ConditionKind::Poisoned = effect.kind {
            attrs.install_mod(stats, VitalKind::Health, effect.magnitude);
        }
    }
}
