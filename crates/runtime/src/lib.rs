//! Async orchestration around the deterministic `game-core` engine.
//!
//! The core stays single-threaded and clock-free; this crate supplies the
//! concurrency model (one lock per character), persistence (snapshot
//! repositories and checkpoints), timed condition expiry, and player-facing
//! output sinks.

pub mod checkpoint;
pub mod error;
pub mod output;
pub mod registry;
pub mod repository;
pub mod scheduler;

pub use checkpoint::{CheckpointReason, CheckpointService};
pub use error::{Result, RuntimeError};
pub use output::{ChannelSink, NullSink, OutputSink};
pub use registry::CharacterRegistry;
pub use repository::{FileSnapshotRepository, InMemorySnapshotRepository, SnapshotRepository};
pub use scheduler::ExpiryScheduler;
