//! Application services
//!
//! The lookups here only describe work; they run once given an environment
//! such as [`ServiceContext`].

pub mod context;
pub mod error;
pub mod lookup;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{LookupError, ServiceError, ServiceResult};
pub use lookup::{
    get_account_by_user_email, get_account_by_user_email_logged, lookup_account_by_user_email,
    AccountLookup,
};
