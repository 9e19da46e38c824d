//! Attribute handler - recomputes vital maxima and owns controlled mutation.
//!
//! The handler is the only component that writes vital state. Maxima are a
//! pure function of the characteristic store plus the additive modifier
//! totals, recomputed on every query path and cached back into the vitals for
//! display:
//!
//! - `health.max  = endurance.base / 2 + 1 + health.mods`
//! - `stamina.max = endurance.bonus + stamina.mods`
//! - `magicka.max = intelligence.base + magicka.mods`
//! - `speed.max   = strength.bonus + 2*agility.bonus + speed.mods`
//! - `carry.max   = 4*strength.bonus + 2*endurance.bonus + carry.mods`
//!
//! Integer arithmetic with floor division throughout; computed maxima are
//! floored at zero and `cur` is re-clamped after every recompute.

use crate::error::{CoreError, ErrorSeverity};

use super::characteristics::CharacteristicStore;
use super::vitals::{AttributeKind, VitalKind, VitalMeter, VitalStore};

/// Errors surfaced by the attribute handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttrError {
    /// `change_vital` was invoked on an attribute that is not a vital.
    ///
    /// This is a bug in the calling component, not a user-facing failure.
    #[error("cannot apply a vital delta to {kind}: not a vital attribute")]
    UnsupportedAttributeKind { kind: AttributeKind },
}

impl CoreError for AttrError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            AttrError::UnsupportedAttributeKind { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AttrError::UnsupportedAttributeKind { .. } => "unsupported_attribute_kind",
        }
    }
}

/// Derived attributes plus the scalar state stored alongside the vitals.
///
/// `level`, `exp`, `action_points`, and `birthsign` live outside the vital
/// system but are persisted with it and read by permission/inventory
/// predicates. `initiative`, `linguistics`, and `luck_rating` are display
/// attributes recomputed in the same pass as the vital maxima.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttrHandler {
    pub vitals: VitalStore,

    pub level: i32,
    pub exp: i32,
    pub action_points: i32,
    pub birthsign: Option<String>,

    pub initiative: i32,
    pub linguistics: i32,
    pub luck_rating: i32,
}

impl AttrHandler {
    /// Create a handler for a fresh character: maxima computed from `stats`,
    /// every vital filled to its maximum.
    pub fn new(stats: &CharacteristicStore, level: i32) -> Self {
        let mut handler = Self {
            vitals: VitalStore::new(),
            level,
            exp: 0,
            action_points: 3,
            birthsign: None,
            initiative: 0,
            linguistics: 0,
            luck_rating: 0,
        };
        handler.full_restore(stats);
        handler
    }

    /// Recompute every vital maximum (and the derived display attributes)
    /// from the characteristic store.
    ///
    /// Pure with respect to its inputs: calling twice with no intervening
    /// characteristic or modifier change yields identical state.
    pub fn update(&mut self, stats: &CharacteristicStore) {
        let str_bonus = stats.strength.bonus();
        let end_bonus = stats.endurance.bonus();
        let agi_bonus = stats.agility.bonus();
        let int_bonus = stats.intelligence.bonus();

        let vitals = &mut self.vitals;
        vitals.health.max = (stats.endurance.base.div_euclid(2) + 1 + vitals.health.mods).max(0);
        vitals.stamina.max = (end_bonus + vitals.stamina.mods).max(0);
        vitals.magicka.max = (stats.intelligence.base + vitals.magicka.mods).max(0);
        vitals.speed.max = (str_bonus + 2 * agi_bonus + vitals.speed.mods).max(0);
        vitals.carry.max = (4 * str_bonus + 2 * end_bonus + vitals.carry.mods).max(0);

        for kind in VitalKind::ALL {
            vitals.get_mut(kind).clamp_cur();
        }

        self.initiative = agi_bonus + int_bonus + stats.personality.bonus();
        self.linguistics = int_bonus.div_euclid(2) + 1;
        self.luck_rating = stats.luck.bonus();
    }

    /// Apply a delta to a vital's current value.
    ///
    /// The maximum is refreshed from `stats` first, then the stored current
    /// value is clamped on both bounds: `cur := clamp(cur + delta, 0, max)`.
    /// Returns the post-clamp value.
    ///
    /// Addressing anything other than a vital is a contract violation and
    /// fails with [`AttrError::UnsupportedAttributeKind`].
    pub fn change_vital(
        &mut self,
        stats: &CharacteristicStore,
        kind: AttributeKind,
        delta: i32,
    ) -> Result<i32, AttrError> {
        let AttributeKind::Vital(vital_kind) = kind else {
            return Err(AttrError::UnsupportedAttributeKind { kind });
        };

        self.update(stats);
        let vital = self.vitals.get_mut(vital_kind);
        vital.cur = vital.cur.saturating_add(delta).clamp(0, vital.max);
        Ok(vital.cur)
    }

    /// Refill every vital to its freshly recomputed maximum. Idempotent.
    pub fn full_restore(&mut self, stats: &CharacteristicStore) {
        self.update(stats);
        for kind in VitalKind::ALL {
            let vital = self.vitals.get_mut(kind);
            vital.cur = vital.max;
        }
    }

    /// Adjust the additive modifier total of a vital and recompute.
    ///
    /// Effect hooks install a modifier with a positive or negative delta at
    /// apply time and reverse it at cleanup. Recomputing immediately keeps the
    /// cached maxima and the `cur <= max` invariant current.
    pub fn install_mod(&mut self, stats: &CharacteristicStore, kind: VitalKind, delta: i32) {
        self.vitals.get_mut(kind).mods += delta;
        self.update(stats);
    }

    /// Current/maximum pair for one vital, for prompt rendering.
    pub fn meter(&self, kind: VitalKind) -> VitalMeter {
        self.vitals.get(kind).meter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::characteristics::{CharacteristicKind, CharacteristicPatch};

    fn store_with(kind: CharacteristicKind, base: i32) -> CharacteristicStore {
        let mut stats = CharacteristicStore::new();
        stats.update(kind, CharacteristicPatch::base(base));
        stats
    }

    #[test]
    fn health_formula_matches_contract() {
        // endurance.base = 22 -> 22 / 2 + 1 = 12
        let stats = store_with(CharacteristicKind::Endurance, 22);
        let attrs = AttrHandler::new(&stats, 1);
        assert_eq!(attrs.vitals.health.max, 12);
        assert_eq!(attrs.vitals.health.cur, 12);
    }

    #[test]
    fn speed_formula_matches_contract() {
        // strength.bonus = 3, agility.bonus = 2 -> speed.max = 3 + 2*2 = 7
        let mut stats = CharacteristicStore::new();
        stats.update(CharacteristicKind::Strength, CharacteristicPatch::base(16));
        stats.update(CharacteristicKind::Agility, CharacteristicPatch::base(14));
        let attrs = AttrHandler::new(&stats, 1);
        assert_eq!(attrs.vitals.speed.max, 7);
    }

    #[test]
    fn carry_and_stamina_and_magicka_formulas() {
        let mut stats = CharacteristicStore::new();
        stats.update(CharacteristicKind::Strength, CharacteristicPatch::base(16)); // bonus 3
        stats.update(CharacteristicKind::Endurance, CharacteristicPatch::base(14)); // bonus 2
        stats.update(
            CharacteristicKind::Intelligence,
            CharacteristicPatch::base(13),
        );
        let attrs = AttrHandler::new(&stats, 1);
        assert_eq!(attrs.vitals.carry.max, 4 * 3 + 2 * 2);
        assert_eq!(attrs.vitals.stamina.max, 2);
        assert_eq!(attrs.vitals.magicka.max, 13);
    }

    #[test]
    fn change_vital_clamps_both_bounds() {
        let stats = store_with(CharacteristicKind::Endurance, 22);
        let mut attrs = AttrHandler::new(&stats, 1);

        // Large negative delta: floor-clamped AND stored.
        let cur = attrs
            .change_vital(&stats, AttributeKind::Vital(VitalKind::Health), -20)
            .unwrap();
        assert_eq!(cur, 0);
        assert_eq!(attrs.vitals.health.cur, 0);

        // Large positive delta: ceiling-clamped at the recomputed max.
        let cur = attrs
            .change_vital(&stats, AttributeKind::Vital(VitalKind::Health), 999)
            .unwrap();
        assert_eq!(cur, 12);
        assert_eq!(attrs.vitals.health.cur, 12);
    }

    #[test]
    fn change_vital_invariant_holds_for_any_delta() {
        let stats = store_with(CharacteristicKind::Endurance, 22);
        let mut attrs = AttrHandler::new(&stats, 1);
        for delta in [i32::MIN, -9999, -1, 0, 1, 9999, i32::MAX] {
            attrs
                .change_vital(&stats, AttributeKind::Vital(VitalKind::Health), delta)
                .unwrap();
            let health = attrs.vitals.health;
            assert!(health.cur >= 0 && health.cur <= health.max, "delta {delta}");
        }
    }

    #[test]
    fn change_vital_rejects_non_vital_kinds() {
        let stats = CharacteristicStore::new();
        let mut attrs = AttrHandler::new(&stats, 1);
        let err = attrs
            .change_vital(
                &stats,
                AttributeKind::Characteristic(CharacteristicKind::Strength),
                5,
            )
            .unwrap_err();
        assert!(matches!(err, AttrError::UnsupportedAttributeKind { .. }));
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
        // No vital was touched.
        assert_eq!(attrs.vitals.health.cur, attrs.vitals.health.max);
    }

    #[test]
    fn full_restore_is_idempotent() {
        let stats = store_with(CharacteristicKind::Endurance, 22);
        let mut attrs = AttrHandler::new(&stats, 1);
        attrs
            .change_vital(&stats, AttributeKind::Vital(VitalKind::Health), -5)
            .unwrap();

        attrs.full_restore(&stats);
        let once = attrs.clone();
        attrs.full_restore(&stats);
        assert_eq!(attrs, once);
        for kind in VitalKind::ALL {
            let vital = attrs.vitals.get(kind);
            assert_eq!(vital.cur, vital.max);
        }
    }

    #[test]
    fn update_is_deterministic() {
        let stats = store_with(CharacteristicKind::Endurance, 18);
        let mut attrs = AttrHandler::new(&stats, 1);
        attrs.update(&stats);
        let first = attrs.clone();
        attrs.update(&stats);
        assert_eq!(attrs, first);
    }

    #[test]
    fn mods_feed_into_maxima() {
        let stats = store_with(CharacteristicKind::Endurance, 22);
        let mut attrs = AttrHandler::new(&stats, 1);
        attrs.install_mod(&stats, VitalKind::Health, -4);
        assert_eq!(attrs.vitals.health.max, 8);
        // cur was at the old max of 12; the recompute re-clamped it.
        assert_eq!(attrs.vitals.health.cur, 8);

        attrs.install_mod(&stats, VitalKind::Health, 4);
        assert_eq!(attrs.vitals.health.max, 12);
        // cur does not bounce back when the penalty lifts.
        assert_eq!(attrs.vitals.health.cur, 8);
    }

    #[test]
    fn negative_maxima_floor_at_zero() {
        // endurance.base = 4 -> bonus -3 -> stamina.max would be negative.
        let stats = store_with(CharacteristicKind::Endurance, 4);
        let attrs = AttrHandler::new(&stats, 1);
        assert_eq!(attrs.vitals.stamina.max, 0);
        assert_eq!(attrs.vitals.stamina.cur, 0);
    }

    #[test]
    fn derived_display_attributes() {
        let mut stats = CharacteristicStore::new();
        stats.update(CharacteristicKind::Agility, CharacteristicPatch::base(14)); // +2
        stats.update(
            CharacteristicKind::Intelligence,
            CharacteristicPatch::base(16),
        ); // +3
        stats.update(
            CharacteristicKind::Personality,
            CharacteristicPatch::base(12),
        ); // +1
        let attrs = AttrHandler::new(&stats, 1);
        assert_eq!(attrs.initiative, 6);
        assert_eq!(attrs.linguistics, 3 / 2 + 1);
    }
}
