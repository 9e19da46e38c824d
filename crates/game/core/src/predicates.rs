//! Classification, visibility, and permission predicates.
//!
//! These are the read-only checks collaborators (command parsers, room
//! renderers, inventory code) run against the state the engine exposes:
//! classification flags, the level attribute, and active conditions.

use crate::config::GameConfig;
use crate::effect::ConditionKind;
use crate::state::{Character, CharacterFlags};

/// True if the character is puppeted by an account.
pub fn is_pc(ch: &Character) -> bool {
    ch.flags.contains(CharacterFlags::PC)
}

/// True if the character is a mob.
pub fn is_npc(ch: &Character) -> bool {
    ch.flags.contains(CharacterFlags::NPC)
}

/// True for playable characters and mobs alike.
pub fn is_pc_npc(ch: &Character) -> bool {
    is_pc(ch) || is_npc(ch)
}

/// Permission gate: immortals sit above the builder level.
pub fn is_wiz(ch: &Character) -> bool {
    if !is_pc_npc(ch) {
        return false;
    }
    ch.attrs.level > GameConfig::BUILDER_LVL
}

pub fn is_invis(ch: &Character) -> bool {
    is_pc_npc(ch) && ch.conditions.has(ConditionKind::Invisible)
}

pub fn is_hidden(ch: &Character) -> bool {
    is_pc_npc(ch) && ch.conditions.has(ConditionKind::Hidden)
}

pub fn is_sleeping(ch: &Character) -> bool {
    is_pc_npc(ch) && ch.conditions.has(ConditionKind::Sleeping)
}

/// Can `viewer` see `target`?
///
/// HolyLight overrides everything; otherwise the viewer needs the matching
/// detect condition for each concealment the target carries.
pub fn can_see_character(viewer: &Character, target: &Character) -> bool {
    if !is_pc_npc(viewer) {
        return false;
    }
    if viewer.conditions.has(ConditionKind::HolyLight) {
        return true;
    }
    if !viewer.conditions.has(ConditionKind::DetectInvis) && is_invis(target) {
        return false;
    }
    if !viewer.conditions.has(ConditionKind::DetectHidden) && is_hidden(target) {
        return false;
    }
    true
}

/// Classification data an object collaborator supplies for pickup checks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ObjectProfile {
    /// Minimum level required to pick the object up.
    pub level: i32,
    /// Objects tagged no-pickup can never be taken.
    pub no_pickup: bool,
}

/// Level-gated pickup check.
pub fn can_pickup(ch: &Character, obj: &ObjectProfile) -> bool {
    !(obj.level > ch.attrs.level || obj.no_pickup)
}
