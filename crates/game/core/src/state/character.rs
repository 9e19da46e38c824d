//! The character entity: owner of every handler the engine defines.
//!
//! A character owns exactly one characteristic store, one attribute handler,
//! one skill set, one condition set, and one trait set. All mutation flows
//! through the orchestration methods here, which split the borrows so effect
//! hooks can call back into the attribute handler.

use bitflags::bitflags;

use crate::config::GameConfig;
use crate::effect::{
    ConditionKind, Conditions, Effect, EffectError, RemoveOutcome, TraitKind, Traits,
};
use crate::stats::{
    AttrError, AttrHandler, AttributeKind, CharacteristicKind, CharacteristicPatch,
    CharacteristicStore, SkillSet, VitalKind, VitalMeter,
};

use super::common::EntityId;

bitflags! {
    /// Classification flags a character carries for collaborator predicates.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CharacterFlags: u8 {
        /// Playable character (puppeted by an account).
        const PC = 1 << 0;
        /// Non-playable character (mob).
        const NPC = 1 << 1;
        /// Superuser account; grants an elevated starting level.
        const SUPERUSER = 1 << 2;
    }
}

/// A playable or non-playable character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Character {
    pub id: EntityId,
    pub name: String,
    pub flags: CharacterFlags,

    pub stats: CharacteristicStore,
    pub attrs: AttrHandler,
    pub skills: SkillSet,
    pub conditions: Conditions,
    pub traits: Traits,
}

impl Character {
    /// Create a character with default characteristics and full vitals.
    ///
    /// Level assignment: the first superuser gets `GOD_LVL`, any other
    /// superuser `WIZ_LVL`, everyone else starts at level 1.
    pub fn new(id: EntityId, name: impl Into<String>, flags: CharacterFlags) -> Self {
        let level = if flags.contains(CharacterFlags::SUPERUSER) {
            if id == EntityId::FIRST_SUPERUSER {
                GameConfig::GOD_LVL
            } else {
                GameConfig::WIZ_LVL
            }
        } else {
            GameConfig::MORTAL_START_LVL
        };

        let stats = CharacteristicStore::new();
        let attrs = AttrHandler::new(&stats, level);
        Self {
            id,
            name: name.into(),
            flags,
            stats,
            attrs,
            skills: SkillSet::new(),
            conditions: Conditions::new(),
            traits: Traits::new(),
        }
    }

    /// Recompute vital maxima and derived attributes from the characteristics.
    pub fn recompute(&mut self) {
        self.attrs.update(&self.stats);
    }

    /// Partial update of one characteristic. Derived values refresh on the
    /// next query; the update itself has no recomputation side effects.
    pub fn update_characteristic(&mut self, kind: CharacteristicKind, patch: CharacteristicPatch) {
        self.stats.update(kind, patch);
    }

    /// Apply a delta to a vital's current value. See
    /// [`AttrHandler::change_vital`] for the clamping contract.
    pub fn change_vital(&mut self, kind: AttributeKind, delta: i32) -> Result<i32, AttrError> {
        self.attrs.change_vital(&self.stats, kind, delta)
    }

    /// Refill every vital to its maximum.
    pub fn full_restore(&mut self) {
        self.attrs.full_restore(&self.stats);
    }

    /// Current/maximum pair for one vital.
    pub fn meter(&self, kind: VitalKind) -> VitalMeter {
        self.attrs.meter(kind)
    }

    /// Apply a condition, running its apply hook against this character's
    /// attribute handler.
    pub fn apply_condition(
        &mut self,
        effect: Effect<ConditionKind>,
    ) -> Result<(), EffectError<ConditionKind>> {
        self.conditions.add(effect, &mut self.attrs, &self.stats)
    }

    /// Request removal of a condition; may be vetoed by the effect.
    pub fn remove_condition(
        &mut self,
        kind: ConditionKind,
    ) -> Result<RemoveOutcome, EffectError<ConditionKind>> {
        self.conditions.remove(kind, &mut self.attrs, &self.stats)
    }

    /// Apply a permanent trait.
    pub fn apply_trait(
        &mut self,
        effect: Effect<TraitKind>,
    ) -> Result<(), EffectError<TraitKind>> {
        self.traits.add(effect, &mut self.attrs, &self.stats)
    }

    /// Remove a permanent trait (rare in normal play).
    pub fn remove_trait(
        &mut self,
        kind: TraitKind,
    ) -> Result<RemoveOutcome, EffectError<TraitKind>> {
        self.traits.remove(kind, &mut self.attrs, &self.stats)
    }
}
