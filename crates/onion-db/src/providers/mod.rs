//! PostgreSQL lookup providers

mod account;
mod user;

pub use account::PgAccountService;
pub use user::PgUserService;
