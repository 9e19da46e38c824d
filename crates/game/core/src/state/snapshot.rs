//! Snapshot records for persistence checkpoints.
//!
//! A snapshot captures the five stores of a character (stats, attrs, skills,
//! conditions, traits) as plain serializable records - never live handler
//! objects. Restoring rebuilds the handlers, recomputes the cached maxima,
//! and re-establishes the `cur <= max` invariant; effect hooks are not re-run
//! because their installed side effects are already captured by the vital
//! modifier totals.

use crate::effect::{ConditionKind, Conditions, Effect, TraitKind, Traits};
use crate::stats::{AttrHandler, CharacteristicStore, Skill, SkillSet};

use super::character::{Character, CharacterFlags};
use super::common::EntityId;

/// Plain-record snapshot of one character.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterSnapshot {
    pub id: EntityId,
    pub name: String,
    pub flags: CharacterFlags,
    pub stats: CharacteristicStore,
    pub attrs: AttrHandler,
    pub skills: Vec<Skill>,
    pub conditions: Vec<Effect<ConditionKind>>,
    pub traits: Vec<Effect<TraitKind>>,
}

impl Character {
    /// Capture this character as plain records.
    pub fn snapshot(&self) -> CharacterSnapshot {
        CharacterSnapshot {
            id: self.id,
            name: self.name.clone(),
            flags: self.flags,
            stats: self.stats.clone(),
            attrs: self.attrs.clone(),
            skills: self.skills.records(),
            conditions: self.conditions.records(),
            traits: self.traits.records(),
        }
    }

    /// Rebuild a character from snapshot records.
    pub fn from_snapshot(snapshot: CharacterSnapshot) -> Self {
        let mut character = Self {
            id: snapshot.id,
            name: snapshot.name,
            flags: snapshot.flags,
            stats: snapshot.stats,
            attrs: snapshot.attrs,
            skills: SkillSet::from_records(snapshot.skills),
            conditions: Conditions::from_records(snapshot.conditions),
            traits: Traits::from_records(snapshot.traits),
        };
        // Cached maxima may be stale relative to the stored characteristics;
        // recompute and re-clamp before anything reads them.
        character.recompute();
        character
    }
}
