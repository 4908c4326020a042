//! Lookup orchestration tests
//!
//! Run against spy environments and the hardcoded providers; no external
//! services are needed.
//!
//! Run with: cargo test -p integration-tests --test lookup_tests

use std::sync::Arc;

use proptest::prelude::*;

use integration_tests::{block_on, failing_user_context, fixtures::*, spy_context};
use onion_core::{DomainError, Email, UserServiceError};
use onion_memory::{seed, RecordingLogger};
use onion_service::{
    get_account_by_user_email, lookup_account_by_user_email, AccountLookup, LookupError,
    ServiceContext,
};

/// Emails outside the `.test` domain the fixtures register users under
fn email_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9.]{0,15}@[a-z]{1,10}\\.(com|org|io)"
}

#[test]
fn test_generated_emails_never_collide_with_fixtures() {
    let fixture = test_user();
    assert!(fixture.email.as_str().ends_with(FIXTURE_DOMAIN));
    assert!(unique_email().as_str().ends_with(FIXTURE_DOMAIN));
}

#[test]
fn test_fixture_emails_are_fresh_per_call() {
    let first = test_user();
    let second = test_user();

    assert_ne!(first.email, second.email);
    assert!(first.email.as_str().contains(first.id.as_str()));
    assert!(second.email.as_str().contains(second.id.as_str()));
    assert_ne!(unique_email(), unique_email());
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_unknown_email_never_reaches_account_service(email in email_strategy()) {
        prop_assume!(!email.ends_with(FIXTURE_DOMAIN));
        let directory = Directory::new().with_user_and_account(test_user());
        let (ctx, spy) = spy_context(&directory);

        let result = block_on(get_account_by_user_email(Email::new(email)).run(&ctx));

        prop_assert!(matches!(result, Ok(None)));
        prop_assert_eq!(spy.user_calls(), 1);
        prop_assert_eq!(spy.account_calls(), 0);
    }

    #[test]
    fn prop_user_with_account_resolves_with_one_account_call(email in email_strategy()) {
        let user = test_user_with_email(Email::new(email.clone()));
        let directory = Directory::new().with_user_and_account(user.clone());
        let (ctx, spy) = spy_context(&directory);

        let result = block_on(get_account_by_user_email(Email::new(email)).run(&ctx));

        let account = result.unwrap();
        prop_assert_eq!(account.as_ref(), directory.account_of(&user));
        prop_assert_eq!(spy.account_owners(), vec![user.id]);
    }

    #[test]
    fn prop_user_failure_is_propagated_unchanged(
        email in email_strategy(),
        message in "[a-zA-Z ]{1,40}",
    ) {
        let error = UserServiceError::QueryFailed(DomainError::new(message.as_str()));
        let (ctx, spy) = failing_user_context(error.clone());

        let result = block_on(get_account_by_user_email(Email::new(email)).run(&ctx));

        match result {
            Err(LookupError::User(e)) => prop_assert_eq!(e.to_string(), error.to_string()),
            other => prop_assert!(false, "expected a user failure, got {:?}", other),
        }
        prop_assert_eq!(spy.account_calls(), 0);
    }

    #[test]
    fn prop_user_without_account_resolves_to_none(email in email_strategy()) {
        let user = test_user_with_email(Email::new(email.clone()));
        let directory = Directory::new().with_user(user.clone());
        let (ctx, spy) = spy_context(&directory);

        let result = block_on(get_account_by_user_email(Email::new(email)).run(&ctx));

        prop_assert!(matches!(result, Ok(None)));
        prop_assert_eq!(spy.account_owners(), vec![user.id]);
    }

    #[test]
    fn prop_lookup_is_idempotent(email in email_strategy(), registered in any::<bool>()) {
        let user = test_user_with_email(Email::new(email.clone()));
        let directory = if registered {
            Directory::new().with_user_and_account(user)
        } else {
            Directory::new().with_user_and_account(test_user())
        };
        let (ctx, _) = spy_context(&directory);

        let first = block_on(get_account_by_user_email(Email::new(email.clone())).run(&ctx));
        let second = block_on(get_account_by_user_email(Email::new(email)).run(&ctx));

        prop_assert_eq!(first.unwrap(), second.unwrap());
    }
}

// ============================================================================
// Laziness
// ============================================================================

#[tokio::test]
async fn test_building_the_lookup_performs_no_calls() {
    let directory = Directory::new().with_user_and_account(test_user());
    let (ctx, spy) = spy_context(&directory);
    let email = directory.users[0].email.clone();

    let effect = get_account_by_user_email(email);
    assert_eq!(spy.user_calls(), 0);

    let account = effect.run(&ctx).await.unwrap();
    assert_eq!(account.as_ref(), directory.accounts.first());
    assert_eq!(spy.user_calls(), 1);
}

// ============================================================================
// Hardcoded Scenarios
// ============================================================================

#[tokio::test]
async fn test_hardcoded_known_email() {
    let logger = Arc::new(RecordingLogger::new());
    let ctx = ServiceContext::hardcoded(logger.clone());

    let outcome = lookup_account_by_user_email(Email::from("ekent@mercury.com"))
        .run(&ctx)
        .await
        .unwrap();

    let AccountLookup::Found { user, account } = outcome else {
        panic!("expected Ethan's account");
    };
    assert_eq!(user.first_name, "Ethan");
    assert_eq!(user.last_name, "Kent");
    assert_eq!(user.id.as_str(), "a2a9a967-0e5f-4a5c-9d1e-3b6f2c8d7e41");
    assert_eq!(user.email.as_str(), "ekent@mercury.com");
    assert!(account.is_owned_by(&user.id));
    assert_eq!(logger.messages()[0], "Looking up email `ekent@mercury.com`");
}

#[tokio::test]
async fn test_hardcoded_unknown_email() {
    let logger = Arc::new(RecordingLogger::new());
    let ctx = ServiceContext::hardcoded(logger.clone());

    let account = get_account_by_user_email(Email::from("unknown@mercury.com"))
        .run(&ctx)
        .await
        .unwrap();

    assert!(account.is_none());
    assert_eq!(logger.messages(), vec!["Looking up email `unknown@mercury.com`"]);
}

#[tokio::test]
async fn test_hardcoded_user_without_account() {
    let ctx = ServiceContext::hardcoded(Arc::new(RecordingLogger::new()));

    let outcome = lookup_account_by_user_email(Email::from(seed::NAOMI_EMAIL))
        .run(&ctx)
        .await
        .unwrap();

    assert!(matches!(outcome, AccountLookup::AccountNotFound { .. }));
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["status"], "accountNotFound");
    assert_eq!(json["user"]["email"], seed::NAOMI_EMAIL);
}
