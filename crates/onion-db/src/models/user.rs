//! User database model

use sqlx::FromRow;

/// Database model for users table
///
/// Ids are stored as text and only validated when mapped to an entity.
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}
