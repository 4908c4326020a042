//! Account lookup by user email
//!
//! Composes the user and account capabilities: find the user registered under
//! an email, then the account that user owns. Each function returns an
//! [`Effect`]; nothing runs until it is given an environment.

use serde::Serialize;

use onion_core::services::{get_account_by_owner_id, get_user_by_email, log};
use onion_core::{
    Account, Effect, Email, HasAccountService, HasLoggingService, HasUserService, User,
};

use super::error::LookupError;

/// Find the account owned by the user registered under `email`
///
/// The account service is only consulted when a user exists. Either step's
/// failure is returned unchanged, tagged with the step it came from. An
/// unknown email and a user without an account both succeed with `None`.
pub fn get_account_by_user_email<'a, E>(email: Email) -> Effect<'a, E, LookupError, Option<Account>>
where
    E: HasUserService + HasAccountService + Sync + ?Sized + 'a,
{
    get_user_by_email(email)
        .map_err(LookupError::from)
        .and_then(|user| {
            Effect::traverse_option(user, |user: User| {
                get_account_by_owner_id(user.id).map_err(LookupError::from)
            })
        })
        .map(Option::flatten)
}

/// Outcome of a lookup that tells the two kinds of absence apart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum AccountLookup {
    UserNotFound,
    AccountNotFound { user: User },
    Found { user: User, account: Account },
}

impl AccountLookup {
    /// Drop the distinction between a missing user and a missing account
    pub fn into_account(self) -> Option<Account> {
        match self {
            Self::Found { account, .. } => Some(account),
            Self::UserNotFound | Self::AccountNotFound { .. } => None,
        }
    }

    /// The user, when one was found
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::UserNotFound => None,
            Self::AccountNotFound { user } | Self::Found { user, .. } => Some(user),
        }
    }
}

/// Like [`get_account_by_user_email`], but reports which record was missing
pub fn lookup_account_by_user_email<'a, E>(email: Email) -> Effect<'a, E, LookupError, AccountLookup>
where
    E: HasUserService + HasAccountService + Sync + ?Sized + 'a,
{
    get_user_by_email(email)
        .map_err(LookupError::from)
        .and_then(|user| match user {
            None => Effect::succeed(AccountLookup::UserNotFound),
            Some(user) => get_account_by_owner_id(user.id.clone())
                .map_err(LookupError::from)
                .map(move |account| match account {
                    Some(account) => AccountLookup::Found { user, account },
                    None => AccountLookup::AccountNotFound { user },
                }),
        })
}

/// [`get_account_by_user_email`] with a log line before and after
///
/// The log lines go through the environment's logging capability and leave
/// the result untouched.
pub fn get_account_by_user_email_logged<'a, E>(
    email: Email,
) -> Effect<'a, E, LookupError, Option<Account>>
where
    E: HasUserService + HasAccountService + HasLoggingService + Sync + ?Sized + 'a,
{
    let subject = email.clone();

    log(format!("Resolving account for `{email}`"))
        .widen()
        .and_then(move |()| get_account_by_user_email(email))
        .tap(move |account| {
            let outcome = if account.is_some() { "found" } else { "absent" };
            log(format!("Account lookup for `{subject}` finished: {outcome}")).widen()
        })
}
