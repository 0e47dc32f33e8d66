//! Messaging seam
//!
//! Signals publish state changes through this trait. The transport behind it
//! (message queue, socket, nothing at all) is the collaborator's concern.

use log::debug;
use serde_json::Value;

/// An opaque publish-only messaging collaborator.
///
/// Handles are shared across every signal in a zone; implementations own
/// their thread-safety contract.
pub trait MessageSink {
    fn publish(&self, routing_key: &str, payload: Value);
}

/// Reference sink that writes every message to the debug log.
#[derive(Debug, Default)]
pub struct LogMessageSink;

impl MessageSink for LogMessageSink {
    fn publish(&self, routing_key: &str, payload: Value) {
        debug!("[{}] {}", routing_key, payload);
    }
}
