//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use onion_core::{Account, AccountId, Email, User, UserId};

/// Domain of every fixture email
///
/// Reserved for testing, so no generated or real address shares it.
pub const FIXTURE_DOMAIN: &str = "@fixtures.test";

/// An email no fixture user is registered under
///
/// Unique across runs, so it never clashes with rows left in a persistent
/// database.
pub fn unique_email() -> Email {
    Email::new(format!("missing-{}{FIXTURE_DOMAIN}", UserId::generate()))
}

/// A user with a fresh id and an email derived from it
pub fn test_user() -> User {
    let id = UserId::generate();
    let suffix = &id.as_str()[..8];
    User::new(
        id.clone(),
        Email::new(format!("user-{id}{FIXTURE_DOMAIN}")),
        format!("First{suffix}"),
        format!("Last{suffix}"),
    )
}

/// A user registered under `email`
pub fn test_user_with_email(email: Email) -> User {
    User {
        email,
        ..test_user()
    }
}

/// An account owned by `owner`
pub fn test_account(owner: &User) -> Account {
    Account::new(AccountId::generate(), owner.id.clone())
}

/// Users and accounts served by a spy environment
#[derive(Debug, Clone, Default)]
pub struct Directory {
    pub users: Vec<User>,
    pub accounts: Vec<Account>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user that owns no account
    pub fn with_user(mut self, user: User) -> Self {
        self.users.push(user);
        self
    }

    /// Add a user together with an account they own
    pub fn with_user_and_account(mut self, user: User) -> Self {
        self.accounts.push(test_account(&user));
        self.users.push(user);
        self
    }

    /// The account owned by `user`, if any
    pub fn account_of(&self, user: &User) -> Option<&Account> {
        self.accounts.iter().find(|a| a.is_owned_by(&user.id))
    }
}
