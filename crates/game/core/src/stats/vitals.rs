//! Vital attributes - depletable resources tracked per character.
//!
//! Each vital holds a current value, a cached maximum, and the additive
//! modifier total contributed by active conditions, traits, and equipment.
//! The maximum is never ground truth: it is recomputed from the
//! characteristic store (plus `mods`) by the attribute handler whenever it is
//! needed, and the computed value is written back here for display.

use super::characteristics::CharacteristicKind;

/// Enum identifying the vital resources.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VitalKind {
    Health,
    Magicka,
    Stamina,
    Speed,
    Carry,
}

impl VitalKind {
    pub const ALL: [VitalKind; 5] = [
        VitalKind::Health,
        VitalKind::Magicka,
        VitalKind::Stamina,
        VitalKind::Speed,
        VitalKind::Carry,
    ];
}

/// Typed key into the whole attribute surface of a character.
///
/// Replaces the stringly-keyed attribute bag of older engines: every caller
/// states up front which family of attribute it is addressing, and the
/// attribute handler can reject families that do not support an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeKind {
    Characteristic(CharacteristicKind),
    Vital(VitalKind),
    Level,
    Experience,
    ActionPoints,
}

impl core::fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AttributeKind::Characteristic(kind) => write!(f, "characteristic {kind}"),
            AttributeKind::Vital(kind) => write!(f, "vital {kind}"),
            AttributeKind::Level => write!(f, "level"),
            AttributeKind::Experience => write!(f, "experience"),
            AttributeKind::ActionPoints => write!(f, "action points"),
        }
    }
}

/// A single vital resource.
///
/// Invariant: `0 <= cur <= max` holds after every mutation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VitalAttribute {
    /// Current value. Game state, must be stored.
    pub cur: i32,
    /// Cached maximum, refreshed from the characteristic store on recompute.
    pub max: i32,
    /// Additive modifier total from conditions, traits, and equipment.
    pub mods: i32,
}

impl VitalAttribute {
    /// Re-establish the `0 <= cur <= max` invariant after a mutation.
    pub fn clamp_cur(&mut self) {
        self.cur = self.cur.clamp(0, self.max);
    }

    /// Current/maximum pair for prompt rendering.
    pub fn meter(&self) -> VitalMeter {
        VitalMeter {
            cur: self.cur,
            max: self.max,
        }
    }
}

/// Integer resource meter exposed to prompt/status-line collaborators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VitalMeter {
    pub cur: i32,
    pub max: i32,
}

impl core::fmt::Display for VitalMeter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.cur, self.max)
    }
}

/// All vital resources of a character, stored by named field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VitalStore {
    pub health: VitalAttribute,
    pub magicka: VitalAttribute,
    pub stamina: VitalAttribute,
    pub speed: VitalAttribute,
    pub carry: VitalAttribute,
}

impl VitalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: VitalKind) -> &VitalAttribute {
        match kind {
            VitalKind::Health => &self.health,
            VitalKind::Magicka => &self.magicka,
            VitalKind::Stamina => &self.stamina,
            VitalKind::Speed => &self.speed,
            VitalKind::Carry => &self.carry,
        }
    }

    pub fn get_mut(&mut self, kind: VitalKind) -> &mut VitalAttribute {
        match kind {
            VitalKind::Health => &mut self.health,
            VitalKind::Magicka => &mut self.magicka,
            VitalKind::Stamina => &mut self.stamina,
            VitalKind::Speed => &mut self.speed,
            VitalKind::Carry => &mut self.carry,
        }
    }
}
