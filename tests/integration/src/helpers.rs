//! Test helpers for integration tests
//!
//! Provides spy environments built from the service factories, a runtime for
//! property tests, and PostgreSQL setup.

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Result;
use parking_lot::Mutex;
use sqlx::PgPool;

use onion_core::services::{account_service_fn, user_service_fn};
use onion_core::{Account, Email, User, UserId, UserServiceError};
use onion_db::apply_schema;
use onion_memory::RecordingLogger;
use onion_service::ServiceContext;

use crate::fixtures::Directory;

/// Calls observed by a spy environment
#[derive(Debug, Default)]
pub struct Spy {
    user_calls: AtomicUsize,
    account_owners: Mutex<Vec<UserId>>,
    pub logger: Arc<RecordingLogger>,
}

impl Spy {
    /// Number of user lookups performed
    pub fn user_calls(&self) -> usize {
        self.user_calls.load(Ordering::SeqCst)
    }

    /// Number of account lookups performed
    pub fn account_calls(&self) -> usize {
        self.account_owners.lock().len()
    }

    /// Owner ids the account service was asked about, in order
    pub fn account_owners(&self) -> Vec<UserId> {
        self.account_owners.lock().clone()
    }
}

/// Build a context whose providers serve `directory` and record every call
pub fn spy_context(directory: &Directory) -> (ServiceContext, Arc<Spy>) {
    let users: Arc<HashMap<Email, User>> = Arc::new(
        directory
            .users
            .iter()
            .map(|u| (u.email.clone(), u.clone()))
            .collect(),
    );
    spy_context_with(directory, move |email| Ok(users.get(&email).cloned()))
}

/// Build a spy context whose user provider always fails with `error`
pub fn failing_user_context(error: UserServiceError) -> (ServiceContext, Arc<Spy>) {
    spy_context_with(&Directory::new(), move |_| Err(error.clone()))
}

fn spy_context_with<L>(directory: &Directory, lookup_user: L) -> (ServiceContext, Arc<Spy>)
where
    L: Fn(Email) -> Result<Option<User>, UserServiceError> + Send + Sync + 'static,
{
    let spy = Arc::new(Spy::default());
    let accounts: Arc<HashMap<UserId, Account>> = Arc::new(
        directory
            .accounts
            .iter()
            .map(|a| (a.owner_id.clone(), a.clone()))
            .collect(),
    );

    let user_spy = spy.clone();
    let users = user_service_fn(move |email| {
        user_spy.user_calls.fetch_add(1, Ordering::SeqCst);
        std::future::ready(lookup_user(email))
    });

    let account_spy = spy.clone();
    let accounts = account_service_fn(move |owner_id: UserId| {
        account_spy.account_owners.lock().push(owner_id.clone());
        std::future::ready(Ok(accounts.get(&owner_id).cloned()))
    });

    let ctx = ServiceContext::new(Arc::new(users), Arc::new(accounts), spy.logger.clone());
    (ctx, spy)
}

/// Drive a future to completion on a fresh current-thread runtime
///
/// For use inside `proptest!` bodies, which are synchronous.
pub fn block_on<F: Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to build test runtime")
        .block_on(future)
}

/// Connect to the test database and create the lookup tables
///
/// Returns `None` when `DATABASE_URL` is unset.
pub async fn test_pool() -> Result<Option<PgPool>> {
    let _ = dotenvy::dotenv();
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return Ok(None);
    };

    let pool = PgPool::connect(&url).await?;
    apply_schema(&pool).await?;
    Ok(Some(pool))
}

/// Insert the users and accounts of `directory`
pub async fn seed_directory(pool: &PgPool, directory: &Directory) -> Result<()> {
    for user in &directory.users {
        sqlx::query("INSERT INTO users (id, email, first_name, last_name) VALUES ($1, $2, $3, $4)")
            .bind(user.id.as_str())
            .bind(user.email.as_str())
            .bind(&user.first_name)
            .bind(&user.last_name)
            .execute(pool)
            .await?;
    }
    for account in &directory.accounts {
        sqlx::query("INSERT INTO accounts (account_id, owner_id) VALUES ($1, $2)")
            .bind(account.account_id.as_str())
            .bind(account.owner_id.as_str())
            .execute(pool)
            .await?;
    }
    Ok(())
}
