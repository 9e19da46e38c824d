//! Characteristic store - the base stats every other value derives from.
//!
//! Characteristics are the Single Source of Truth: only their base values are
//! permanently stored. The bonus is a pure function of the base, recomputed on
//! demand and never persisted, so it can never drift out of sync.

use crate::config::GameConfig;

/// The eight base characteristics that define a character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharacteristicKind {
    /// Physical power, melee damage, carrying capacity.
    Strength,
    /// Health, stamina, physical resilience.
    Endurance,
    /// Movement and reaction speed.
    Agility,
    /// Magicka pool, learning, languages.
    Intelligence,
    /// Mental fortitude, spell resistance.
    Willpower,
    /// Awareness of hidden things.
    Perception,
    /// Force of personality, social initiative.
    Personality,
    /// Fortune in everything.
    Luck,
}

/// A single base stat with a derived bonus.
///
/// The bonus is never stored; [`Characteristic::bonus`] recomputes it from the
/// base every time it is needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Characteristic {
    pub base: i32,
}

impl Characteristic {
    pub const fn new(base: i32) -> Self {
        Self { base }
    }

    /// Derived bonus: `floor((base - 10) / 2)`.
    ///
    /// Examples: 10-11 -> +0, 12-13 -> +1, 8-9 -> -1, 22 -> +6.
    pub fn bonus(&self) -> i32 {
        (self.base - 10).div_euclid(2)
    }
}

impl Default for Characteristic {
    /// Average human baseline.
    fn default() -> Self {
        Self { base: 10 }
    }
}

/// Partial update applied to a characteristic.
///
/// Only fields present in the patch are written; everything else is left
/// untouched. Applying a patch has no recomputation side effects - derived
/// values refresh the next time they are queried.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacteristicPatch {
    pub base: Option<i32>,
}

impl CharacteristicPatch {
    pub const fn base(value: i32) -> Self {
        Self { base: Some(value) }
    }
}

/// All eight characteristics of a character, stored by named field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacteristicStore {
    pub strength: Characteristic,
    pub endurance: Characteristic,
    pub agility: Characteristic,
    pub intelligence: Characteristic,
    pub willpower: Characteristic,
    pub perception: Characteristic,
    pub personality: Characteristic,
    pub luck: Characteristic,
}

impl CharacteristicStore {
    /// Create a store with every base at the average-human default.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: CharacteristicKind) -> &Characteristic {
        match kind {
            CharacteristicKind::Strength => &self.strength,
            CharacteristicKind::Endurance => &self.endurance,
            CharacteristicKind::Agility => &self.agility,
            CharacteristicKind::Intelligence => &self.intelligence,
            CharacteristicKind::Willpower => &self.willpower,
            CharacteristicKind::Perception => &self.perception,
            CharacteristicKind::Personality => &self.personality,
            CharacteristicKind::Luck => &self.luck,
        }
    }

    pub fn get_mut(&mut self, kind: CharacteristicKind) -> &mut Characteristic {
        match kind {
            CharacteristicKind::Strength => &mut self.strength,
            CharacteristicKind::Endurance => &mut self.endurance,
            CharacteristicKind::Agility => &mut self.agility,
            CharacteristicKind::Intelligence => &mut self.intelligence,
            CharacteristicKind::Willpower => &mut self.willpower,
            CharacteristicKind::Perception => &mut self.perception,
            CharacteristicKind::Personality => &mut self.personality,
            CharacteristicKind::Luck => &mut self.luck,
        }
    }

    /// Apply a partial update to one characteristic.
    ///
    /// Base values are clamped to the configured characteristic bounds.
    pub fn update(&mut self, kind: CharacteristicKind, patch: CharacteristicPatch) {
        let stat = self.get_mut(kind);
        if let Some(base) = patch.base {
            stat.base = base.clamp(
                GameConfig::CHARACTERISTIC_MIN,
                GameConfig::CHARACTERISTIC_MAX,
            );
        }
    }
}
