//! Deterministic character-state engine: derived attributes and status
//! effects.
//!
//! `game-core` defines the canonical rules for a character's stats, vitals,
//! conditions, and traits, and exposes pure APIs that can be reused by the
//! runtime and offline tools. All state mutation flows through the
//! orchestration methods on [`state::Character`], and supporting crates
//! depend on the types re-exported here.
pub mod config;
pub mod effect;
pub mod error;
pub mod predicates;
pub mod state;
pub mod stats;

pub use config::GameConfig;
pub use effect::{
    ConditionKind, Conditions, Effect, EffectError, EffectKind, EffectSet, RemoveOutcome,
    TraitKind, Traits,
};
pub use error::{CoreError, ErrorSeverity};
pub use predicates::ObjectProfile;
pub use state::{Character, CharacterFlags, CharacterSnapshot, EntityId};
pub use stats::{
    AttrError, AttrHandler, AttributeKind, Characteristic, CharacteristicKind,
    CharacteristicPatch, CharacteristicStore, Skill, SkillSet, VitalAttribute, VitalKind,
    VitalMeter, VitalStore,
};
