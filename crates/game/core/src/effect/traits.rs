//! Permanent trait kinds.
//!
//! Traits reuse the condition state machine but are long-lived: they never
//! stack and never veto removal (removal is simply rare in normal play).

use crate::stats::{AttrHandler, CharacteristicStore, VitalKind};

use super::{Effect, EffectKind};

/// The closed set of permanent traits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TraitKind {
    NightVision,
    WaterBreathing,
    DiseaseResistance,
    /// Adds the trait's magnitude to maximum health.
    ThickHide,
}

impl EffectKind for TraitKind {
    fn apply(effect: &mut Effect<Self>, attrs: &mut AttrHandler, stats: &CharacteristicStore) {
        if let TraitKind::ThickHide = effect.kind {
            attrs.install_mod(stats, VitalKind::Health, effect.magnitude);
        }
    }

    fn cleanup(effect: &mut Effect<Self>, attrs: &mut AttrHandler, stats: &CharacteristicStore) {
        if let TraitKind::ThickHide = effect.kind {
            attrs.install_mod(stats, VitalKind::Health, -effect.magnitude);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::set::{RemoveOutcome, Traits};

    #[test]
    fn traits_never_stack() {
        use strum::IntoEnumIterator;
        for kind in TraitKind::iter() {
            assert!(!kind.allow_multi());
        }
    }

    #[test]
    fn thick_hide_raises_and_lowers_health_max() {
        let stats = CharacteristicStore::new();
        let mut attrs = AttrHandler::new(&stats, 1);
        let base_max = attrs.vitals.health.max;

        let mut traits = Traits::new();
        traits
            .add(
                Effect::new(TraitKind::ThickHide).with_magnitude(2),
                &mut attrs,
                &stats,
            )
            .unwrap();
        assert_eq!(attrs.vitals.health.max, base_max + 2);

        let outcome = traits
            .remove(TraitKind::ThickHide, &mut attrs, &stats)
            .unwrap();
        assert_eq!(outcome, RemoveOutcome::Removed);
        assert_eq!(attrs.vitals.health.max, base_max);
    }
}
