//! # onion-core
//!
//! Domain layer containing value objects, entities, the effect abstraction, and
//! the service contracts (ports) the outer layers implement.
//! This crate has zero dependencies on infrastructure (database, logging sinks, etc.).

pub mod effect;
pub mod entities;
pub mod error;
pub mod services;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use effect::Effect;
pub use entities::{Account, User};
pub use error::{render_failure, DomainError};
pub use services::{
    AccountService, AccountServiceError, HasAccountService, HasLoggingService, HasUserService,
    LoggingService, UserService, UserServiceError,
};
pub use value_objects::{AccountId, Email, IdParseError, UserId};
