//! Timed condition expiry.
//!
//! The core has no clock; durations live out here. For each timed condition
//! the scheduler spawns a task that sleeps, then requests removal under the
//! character's registry lock. A veto leaves the condition active and is
//! reported through the output sink.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use game_core::{ConditionKind, EffectError, EntityId, RemoveOutcome};

use crate::output::OutputSink;
use crate::registry::CharacterRegistry;

/// Drives condition lifetimes from wall-clock durations.
pub struct ExpiryScheduler {
    registry: Arc<CharacterRegistry>,
    sink: Arc<dyn OutputSink>,
}

impl ExpiryScheduler {
    pub fn new(registry: Arc<CharacterRegistry>, sink: Arc<dyn OutputSink>) -> Self {
        Self { registry, sink }
    }

    /// Schedule a condition to expire after `after`.
    ///
    /// The returned handle can be aborted to cancel the expiry (e.g. when
    /// the condition is dispelled early through another path).
    pub fn schedule_removal(
        &self,
        id: EntityId,
        kind: ConditionKind,
        after: Duration,
    ) -> JoinHandle<()> {
        let registry = self.registry.clone();
        let sink = self.sink.clone();
        tokio::spawn(async move {
            tokio::time::sleep(after).await;
            let outcome = registry
                .with_character(id, |ch| ch.remove_condition(kind))
                .await;
            match outcome {
                Ok(Ok(RemoveOutcome::Removed)) => {
                    tracing::debug!(%id, %kind, "condition expired");
                    sink.send_to(id, &format!("The {kind} effect wears off."))
                        .await;
                }
                Ok(Ok(RemoveOutcome::NotPresent)) => {
                    // Already removed through another path; nothing to say.
                    tracing::debug!(%id, %kind, "condition already gone at expiry");
                }
                Ok(Err(err @ EffectError::RemovalVetoed { .. })) => {
                    tracing::warn!(%id, %kind, "condition expiry vetoed");
                    sink.send_to(id, &err.to_string()).await;
                }
                Ok(Err(err)) => {
                    tracing::warn!(%id, %kind, %err, "condition expiry failed");
                }
                Err(err) => {
                    // Character left the registry before the timer fired.
                    tracing::debug!(%id, %kind, %err, "expiry target not registered");
                }
            }
        })
    }
}
