//! LoggingService that writes plain lines to a console-like writer

use async_trait::async_trait;
use tokio::io::{self, AsyncWrite, AsyncWriteExt, Stdout};
use tokio::sync::Mutex;
use tracing::warn;

use onion_core::LoggingService;

/// Line-oriented console sink
///
/// Writes each message followed by a newline. Write failures are reported as
/// `tracing` warnings and otherwise swallowed, since logging cannot fail.
#[derive(Debug)]
pub struct ConsoleLogger<W = Stdout> {
    writer: Mutex<W>,
}

impl ConsoleLogger<Stdout> {
    /// Sink writing to standard output
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for ConsoleLogger<Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W> ConsoleLogger<W>
where
    W: AsyncWrite + Unpin + Send,
{
    /// Sink writing to an arbitrary writer
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Take the writer back
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

#[async_trait]
impl<W> LoggingService for ConsoleLogger<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn log(&self, message: &str) {
        let mut writer = self.writer.lock().await;
        let written = async {
            writer.write_all(message.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await
        }
        .await;

        if let Err(e) = written {
            warn!(error = %e, "Console logger failed to write");
        }
    }
}
