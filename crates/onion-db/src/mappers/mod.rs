//! Model to entity mappers
//!
//! Rows are converted with `TryFrom<Model> for Entity`. A row whose ids do not
//! parse is rejected with [`IdParseError`](onion_core::IdParseError).

mod account;
mod user;
