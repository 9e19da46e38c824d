//! Snapshot persistence backends.
//!
//! The checkpoint service talks to storage through [`SnapshotRepository`];
//! the file backend writes one bincode blob per character, the in-memory
//! backend backs tests and ephemeral tooling.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use async_trait::async_trait;

use game_core::{CharacterSnapshot, EntityId};

use crate::error::{Result, RuntimeError};

/// Storage backend for character snapshots.
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    async fn save(&self, snapshot: &CharacterSnapshot) -> Result<()>;
    async fn load(&self, id: EntityId) -> Result<CharacterSnapshot>;
    async fn exists(&self, id: EntityId) -> bool;
    async fn delete(&self, id: EntityId) -> Result<()>;
    /// Ids of every stored snapshot, in no particular order.
    async fn list_ids(&self) -> Result<Vec<EntityId>>;
}

/// File-per-character repository using bincode blobs.
pub struct FileSnapshotRepository {
    root: PathBuf,
}

impl FileSnapshotRepository {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, id: EntityId) -> PathBuf {
        self.root.join(format!("character_{}.bin", id.0))
    }
}

#[async_trait]
impl SnapshotRepository for FileSnapshotRepository {
    async fn save(&self, snapshot: &CharacterSnapshot) -> Result<()> {
        let bytes = bincode::serialize(snapshot)?;
        let path = self.path_for(snapshot.id);
        // Write-then-rename so a crash mid-write never corrupts the blob.
        let tmp = path.with_extension("bin.tmp");
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }

    async fn load(&self, id: EntityId) -> Result<CharacterSnapshot> {
        let path = self.path_for(id);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(RuntimeError::SnapshotNotFound(id));
            }
            Err(err) => return Err(err.into()),
        };
        Ok(bincode::deserialize(&bytes)?)
    }

    async fn exists(&self, id: EntityId) -> bool {
        self.path_for(id).exists()
    }

    async fn delete(&self, id: EntityId) -> Result<()> {
        match tokio::fs::remove_file(self.path_for(id)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(RuntimeError::SnapshotNotFound(id))
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn list_ids(&self) -> Result<Vec<EntityId>> {
        let mut ids = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.root).await?;
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            let Some(id) = name
                .strip_prefix("character_")
                .and_then(|rest| rest.strip_suffix(".bin"))
                .and_then(|digits| digits.parse::<u32>().ok())
            else {
                continue;
            };
            ids.push(EntityId(id));
        }
        Ok(ids)
    }
}

/// In-memory repository for tests and ephemeral tooling.
#[derive(Default)]
pub struct InMemorySnapshotRepository {
    snapshots: RwLock<HashMap<EntityId, CharacterSnapshot>>,
}

impl InMemorySnapshotRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SnapshotRepository for InMemorySnapshotRepository {
    async fn save(&self, snapshot: &CharacterSnapshot) -> Result<()> {
        self.snapshots
            .write()
            .expect("snapshot map poisoned")
            .insert(snapshot.id, snapshot.clone());
        Ok(())
    }

    async fn load(&self, id: EntityId) -> Result<CharacterSnapshot> {
        self.snapshots
            .read()
            .expect("snapshot map poisoned")
            .get(&id)
            .cloned()
            .ok_or(RuntimeError::SnapshotNotFound(id))
    }

    async fn exists(&self, id: EntityId) -> bool {
        self.snapshots
            .read()
            .expect("snapshot map poisoned")
            .contains_key(&id)
    }

    async fn delete(&self, id: EntityId) -> Result<()> {
        self.snapshots
            .write()
            .expect("snapshot map poisoned")
            .remove(&id)
            .map(|_| ())
            .ok_or(RuntimeError::SnapshotNotFound(id))
    }

    async fn list_ids(&self) -> Result<Vec<EntityId>> {
        Ok(self
            .snapshots
            .read()
            .expect("snapshot map poisoned")
            .keys()
            .copied()
            .collect())
    }
}
