//! Hardcoded providers backed by fixed in-memory maps

mod accounts;
pub mod seed;
mod users;

pub use accounts::HardcodedAccountService;
pub use users::HardcodedUserService;
