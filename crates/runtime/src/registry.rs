//! Per-entity exclusive access to character state.
//!
//! The core's mutating operations (`change_vital`, condition add/remove) must
//! each execute as an indivisible unit against a given character: intermediate
//! states, such as a condition whose apply hook has run but which is not yet
//! in the active set, are not safe to observe. The registry enforces this with
//! one `tokio::sync::Mutex` per character - the lock scope of a single entity,
//! never a global lock, so cross-entity operations proceed independently.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use game_core::{Character, EntityId};

use crate::error::{Result, RuntimeError};

/// Registry of live characters, each behind its own exclusive lock.
#[derive(Default)]
pub struct CharacterRegistry {
    characters: RwLock<HashMap<EntityId, Arc<Mutex<Character>>>>,
}

impl CharacterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a character, replacing any previous entry with the same id.
    pub async fn insert(&self, character: Character) -> Arc<Mutex<Character>> {
        let id = character.id;
        let entry = Arc::new(Mutex::new(character));
        self.characters.write().await.insert(id, entry.clone());
        tracing::debug!(%id, "character registered");
        entry
    }

    /// Drop a character from the registry (e.g. after unpuppet + checkpoint).
    pub async fn remove(&self, id: EntityId) -> bool {
        let removed = self.characters.write().await.remove(&id).is_some();
        if removed {
            tracing::debug!(%id, "character removed");
        }
        removed
    }

    pub async fn contains(&self, id: EntityId) -> bool {
        self.characters.read().await.contains_key(&id)
    }

    /// Ids of every registered character.
    pub async fn ids(&self) -> Vec<EntityId> {
        self.characters.read().await.keys().copied().collect()
    }

    /// Run `f` against a character under its exclusive lock.
    ///
    /// This is the only mutation path the runtime exposes: everything `f`
    /// does happens-before any other access to the same character.
    pub async fn with_character<R>(
        &self,
        id: EntityId,
        f: impl FnOnce(&mut Character) -> R,
    ) -> Result<R> {
        let entry = {
            let characters = self.characters.read().await;
            characters
                .get(&id)
                .cloned()
                .ok_or(RuntimeError::CharacterNotFound(id))?
        };
        let mut character = entry.lock().await;
        Ok(f(&mut character))
    }
}
