//! Narrative output sinks.
//!
//! Core hooks never talk to players directly; the runtime translates
//! lifecycle outcomes (a vetoed removal, an expired condition) into messages
//! and hands them to a sink. Sinks are trait objects so tests and headless
//! tools can swap in a channel or discard everything.

use async_trait::async_trait;

use game_core::EntityId;

/// Destination for player-facing narrative text.
#[async_trait]
pub trait OutputSink: Send + Sync {
    /// Deliver a line of text to the entity's session, if any.
    async fn send_to(&self, id: EntityId, message: &str);
}

/// Sink that forwards messages over an unbounded channel.
///
/// The session layer holds the receiving half; tests read it directly.
pub struct ChannelSink {
    tx: tokio::sync::mpsc::UnboundedSender<(EntityId, String)>,
}

impl ChannelSink {
    pub fn new() -> (
        Self,
        tokio::sync::mpsc::UnboundedReceiver<(EntityId, String)>,
    ) {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

#[async_trait]
impl OutputSink for ChannelSink {
    async fn send_to(&self, id: EntityId, message: &str) {
        // A dropped receiver means the session is gone; nothing to deliver.
        let _ = self.tx.send((id, message.to_owned()));
    }
}

/// Sink that discards everything. Useful for offline maintenance tasks.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

#[async_trait]
impl OutputSink for NullSink {
    async fn send_to(&self, _id: EntityId, _message: &str) {}
}
