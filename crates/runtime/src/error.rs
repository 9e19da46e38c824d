//! Error types shared across the runtime crate.

use game_core::EntityId;

/// Result type for runtime operations.
pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Errors surfaced by the runtime orchestration layer.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("character {0} is not registered")]
    CharacterNotFound(EntityId),

    #[error("no snapshot stored for character {0}")]
    SnapshotNotFound(EntityId),

    #[error("snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
