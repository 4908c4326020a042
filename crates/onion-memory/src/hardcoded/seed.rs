//! Fixed records served by the hardcoded providers
//!
//! - Ethan Kent owns one account.
//! - Naomi Nagata exists but owns no account.

use onion_core::{Account, AccountId, Email, User, UserId};
use uuid::Uuid;

pub const ETHAN_EMAIL: &str = "ekent@mercury.com";
pub const ETHAN_ID: Uuid = Uuid::from_u128(0xa2a9_a967_0e5f_4a5c_9d1e_3b6f_2c8d_7e41);
pub const ETHAN_ACCOUNT_ID: Uuid = Uuid::from_u128(0x6b0a_4f0e_3c2d_4e8f_9a1b_7c5d_2e3f_4a6b);

pub const NAOMI_EMAIL: &str = "naomi@mercury.com";
pub const NAOMI_ID: Uuid = Uuid::from_u128(0x0d7c_3b52_91e4_4f6a_8b2d_5e9f_1a3c_7b60);

/// Seeded users
pub fn users() -> Vec<User> {
    vec![
        User::new(
            UserId::from_uuid(ETHAN_ID),
            Email::from(ETHAN_EMAIL),
            "Ethan",
            "Kent",
        ),
        User::new(
            UserId::from_uuid(NAOMI_ID),
            Email::from(NAOMI_EMAIL),
            "Naomi",
            "Nagata",
        ),
    ]
}

/// Seeded accounts
pub fn accounts() -> Vec<Account> {
    vec![Account::new(
        AccountId::from_uuid(ETHAN_ACCOUNT_ID),
        UserId::from_uuid(ETHAN_ID),
    )]
}
