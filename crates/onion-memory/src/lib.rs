//! # onion-memory
//!
//! In-memory providers for the service contracts defined in `onion-core`.
//!
//! ## Features
//!
//! - **Hardcoded lookups**: fixed user and account records keyed by email and owner id
//! - **Logging sinks**: `tracing` events, line-oriented console output, and an
//!   in-memory recorder for inspecting what was logged
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use onion_memory::{HardcodedAccountService, HardcodedUserService, TracingLogger};
//!
//! let logger = Arc::new(TracingLogger::new());
//! let users = HardcodedUserService::new(logger.clone());
//! let accounts = HardcodedAccountService::new(logger);
//!
//! let user = users.get_user_by_email(&"ekent@mercury.com".into()).await?;
//! ```

pub mod hardcoded;
pub mod logging;

// Re-export provider types
pub use hardcoded::{seed, HardcodedAccountService, HardcodedUserService};
pub use logging::{ConsoleLogger, RecordingLogger, TracingLogger};
