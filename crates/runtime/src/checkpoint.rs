//! Checkpointing live characters to the snapshot repository.
//!
//! A checkpoint captures the plain-record snapshot of a character under its
//! registry lock and hands it to the repository. Restores rebuild the live
//! character from records and re-register it.

use std::sync::Arc;

use game_core::{Character, EntityId};

use crate::error::Result;
use crate::registry::CharacterRegistry;
use crate::repository::SnapshotRepository;

/// Why a checkpoint was taken; recorded in the log stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckpointReason {
    /// The puppeting account disconnected.
    Unpuppet,
    /// A live reload is about to replace the process image.
    Reload,
    /// Orderly shutdown.
    Shutdown,
}

impl CheckpointReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unpuppet => "unpuppet",
            Self::Reload => "reload",
            Self::Shutdown => "shutdown",
        }
    }
}

/// Persists live characters and restores them from storage.
pub struct CheckpointService {
    registry: Arc<CharacterRegistry>,
    repository: Arc<dyn SnapshotRepository>,
}

impl CheckpointService {
    pub fn new(registry: Arc<CharacterRegistry>, repository: Arc<dyn SnapshotRepository>) -> Self {
        Self {
            registry,
            repository,
        }
    }

    /// Snapshot one character and persist it.
    pub async fn checkpoint(&self, id: EntityId, reason: CheckpointReason) -> Result<()> {
        let snapshot = self.registry.with_character(id, |ch| ch.snapshot()).await?;
        self.repository.save(&snapshot).await?;
        tracing::info!(
            %id,
            reason = reason.as_str(),
            at = %chrono::Utc::now().to_rfc3339(),
            "character checkpointed"
        );
        Ok(())
    }

    /// Checkpoint every registered character. Returns how many were saved.
    ///
    /// Failures are logged and skipped so one broken character cannot block
    /// a shutdown sweep.
    pub async fn checkpoint_all(&self, reason: CheckpointReason) -> usize {
        let mut saved = 0;
        for id in self.registry.ids().await {
            match self.checkpoint(id, reason).await {
                Ok(()) => saved += 1,
                Err(err) => {
                    tracing::error!(%id, %err, "checkpoint failed");
                }
            }
        }
        saved
    }

    /// Load a character from storage and register it.
    pub async fn restore(&self, id: EntityId) -> Result<()> {
        let snapshot = self.repository.load(id).await?;
        let character = Character::from_snapshot(snapshot);
        self.registry.insert(character).await;
        tracing::info!(%id, "character restored");
        Ok(())
    }
}
