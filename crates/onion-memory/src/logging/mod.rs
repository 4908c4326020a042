//! Logging sinks implementing `LoggingService`

mod console;
mod recording;
mod tracing_logger;

pub use console::ConsoleLogger;
pub use recording::RecordingLogger;
pub use tracing_logger::TracingLogger;
