//! LoggingService that emits `tracing` events

use async_trait::async_trait;
use tracing::info;

use onion_core::LoggingService;

/// Structured logging sink
///
/// Each message becomes an `info` event with target `onion::lookup`, so it
/// follows whatever subscriber the composition root installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LoggingService for TracingLogger {
    async fn log(&self, message: &str) {
        info!(target: "onion::lookup", "{message}");
    }
}
