//! LoggingService that keeps every message in memory

use async_trait::async_trait;
use parking_lot::Mutex;

use onion_core::LoggingService;

/// In-memory logging sink
///
/// Messages are kept in arrival order until cleared.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    messages: Mutex<Vec<String>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded messages
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    /// Check whether `message` was recorded
    pub fn contains(&self, message: &str) -> bool {
        self.messages.lock().iter().any(|m| m == message)
    }

    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }

    /// Drop everything recorded so far
    pub fn clear(&self) {
        self.messages.lock().clear();
    }
}

#[async_trait]
impl LoggingService for RecordingLogger {
    async fn log(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}
