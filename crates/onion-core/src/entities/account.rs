//! Account entity

use serde::{Deserialize, Serialize};

use crate::value_objects::{AccountId, UserId};

/// Account owned by a single user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub account_id: AccountId,
    pub owner_id: UserId,
}

impl Account {
    pub fn new(account_id: AccountId, owner_id: UserId) -> Self {
        Self {
            account_id,
            owner_id,
        }
    }

    /// Check whether the given user owns this account
    #[inline]
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.owner_id == user_id
    }
}
