//! Stat system: characteristics, vitals, and the attribute handler.
//!
//! # Architecture
//!
//! ```text
//! [ Characteristics (stored base values) ]
//!      |
//! [ Bonuses (pure functions of base) ]
//!      |
//! [ Vital maxima (recomputed, cached for display) ]
//!      |
//! [ Current values + modifier totals (stored) ]
//! ```
//!
//! ## Principles
//!
//! 1. **SSOT**: base characteristics, current vitals, and modifier totals are
//!    the only stored stat state
//! 2. **Recompute, never drift**: bonuses and maxima are recomputed from the
//!    stored state every time they are needed
//! 3. **Deterministic**: pure integer arithmetic, no I/O or randomness

pub mod attrs;
pub mod characteristics;
pub mod skills;
pub mod vitals;

pub use attrs::{AttrError, AttrHandler};
pub use characteristics::{
    Characteristic, CharacteristicKind, CharacteristicPatch, CharacteristicStore,
};
pub use skills::{Skill, SkillSet};
pub use vitals::{AttributeKind, VitalAttribute, VitalKind, VitalMeter, VitalStore};
