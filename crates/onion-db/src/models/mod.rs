//! Database models - SQLx-compatible structs for PostgreSQL tables

mod account;
mod user;

pub use account::AccountModel;
pub use user::UserModel;
