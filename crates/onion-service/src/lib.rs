//! # onion-service
//!
//! Application layer: the account lookup orchestration and the environment it
//! runs against.

pub mod services;

pub use services::{
    get_account_by_user_email, get_account_by_user_email_logged, lookup_account_by_user_email,
    AccountLookup, LookupError, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
