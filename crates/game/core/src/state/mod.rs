//! Character state: the entity type, its identifiers, and snapshot records.
//!
//! Runtime layers clone or query this state but mutate it exclusively through
//! the orchestration methods on [`Character`].

pub mod character;
pub mod common;
pub mod snapshot;

pub use character::{Character, CharacterFlags};
pub use common::EntityId;
pub use snapshot::CharacterSnapshot;
