//! Account database model

use sqlx::FromRow;

/// Database model for accounts table
#[derive(Debug, Clone, FromRow)]
pub struct AccountModel {
    pub account_id: String,
    pub owner_id: String,
}
