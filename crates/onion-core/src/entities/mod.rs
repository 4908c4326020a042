//! Domain entities - core business objects

mod account;
mod user;

pub use account::Account;
pub use user::User;
