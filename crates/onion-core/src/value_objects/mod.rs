//! Value objects - immutable types that represent domain concepts

mod email;
mod ids;

pub use email::Email;
pub use ids::{AccountId, IdParseError, UserId};
