//! Event Log Adapter
//!
//! Keeps every event a bridge emitted, in order, and fans them out to live
//! subscribers. Plays the role of the chain's transaction receipts.

use parking_lot::RwLock;
use shared_types::Address;
use tokio::sync::broadcast;
use tracing::debug;

use crate::domain::{BridgeEvent, TransferProof};
use crate::ports::outbound::EventPublisher;

/// Subscriber buffer before slow receivers start lagging.
const CHANNEL_CAPACITY: usize = 256;

/// In-memory, append-only event log.
pub struct InMemoryEventLog {
    events: RwLock<Vec<BridgeEvent>>,
    sender: broadcast::Sender<BridgeEvent>,
}

impl InMemoryEventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::with_events(Vec::new())
    }

    /// Create a log pre-filled with `events` (e.g. from a snapshot).
    pub fn with_events(events: Vec<BridgeEvent>) -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            events: RwLock::new(events),
            sender,
        }
    }

    /// Receive events published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<BridgeEvent> {
        self.sender.subscribe()
    }

    /// All events, oldest first.
    pub fn events(&self) -> Vec<BridgeEvent> {
        self.events.read().clone()
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    /// Whether nothing was recorded yet.
    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }

    /// Proofs issued to `sender`, oldest first.
    pub fn proofs_for(&self, sender: &Address) -> Vec<TransferProof> {
        self.events
            .read()
            .iter()
            .filter_map(BridgeEvent::as_proof)
            .filter(|proof| proof.sender == *sender)
            .collect()
    }

    /// Most recent proof issued to `sender`.
    pub fn last_proof_for(&self, sender: &Address) -> Option<TransferProof> {
        self.events
            .read()
            .iter()
            .rev()
            .filter_map(BridgeEvent::as_proof)
            .find(|proof| proof.sender == *sender)
    }
}

impl Default for InMemoryEventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventPublisher for InMemoryEventLog {
    fn publish(&self, event: BridgeEvent) {
        debug!("[bb-02] Event {}", event.name());
        self.events.write().push(event.clone());
        // No receivers is fine
        let _ = self.sender.send(event);
    }
}
