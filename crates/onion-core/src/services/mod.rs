//! Service contracts (ports) - the capabilities the domain depends on
//!
//! Each service follows the same shape:
//! - an object-safe trait with a single operation, implemented by providers
//! - a `Has*` trait projecting the capability out of a larger environment
//! - a factory building the capability from a closure
//! - a free accessor returning an [`Effect`](crate::Effect) that works against
//!   any environment implementing the matching `Has*` trait
//!
//! Because every projection has its own method name, an environment can carry
//! all services at once without their operations colliding.

mod account;
mod error;
mod logging;
mod user;

pub use account::{
    account_service_fn, get_account_by_owner_id, AccountService, FnAccountService,
    HasAccountService,
};
pub use error::{AccountServiceError, UserServiceError};
pub use logging::{log, logging_service_fn, FnLoggingService, HasLoggingService, LoggingService};
pub use user::{get_user_by_email, user_service_fn, FnUserService, HasUserService, UserService};
