//! PostgreSQL implementation of AccountService

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use onion_core::{Account, AccountService, AccountServiceError, Effect, UserId};

use crate::models::AccountModel;

/// PostgreSQL implementation of AccountService
///
/// Owner ids are matched case-insensitively, since stored ids may use either
/// case while a [`UserId`] is always lowercase. An owner with several rows
/// resolves to the one with the smallest account id.
#[derive(Clone)]
pub struct PgAccountService {
    pool: PgPool,
}

impl PgAccountService {
    /// Create a new PgAccountService
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountService for PgAccountService {
    #[instrument(skip(self))]
    async fn get_account_by_owner_id(
        &self,
        owner_id: &UserId,
    ) -> Result<Option<Account>, AccountServiceError> {
        let owner_id = owner_id.clone().into_inner();

        Effect::<Self, AccountServiceError, Option<AccountModel>>::from_async_result(
            move |this| async move {
                sqlx::query_as::<_, AccountModel>(
                    r"
                    SELECT account_id, owner_id
                    FROM accounts
                    WHERE lower(owner_id) = $1
                    ORDER BY lower(account_id)
                    LIMIT 1
                    ",
                )
                .bind(owner_id)
                .fetch_optional(&this.pool)
                .await
            },
            AccountServiceError::query_failed,
        )
        .and_then(|row| match row.map(Account::try_from).transpose() {
            Ok(account) => Effect::succeed(account),
            Err(e) => Effect::fail(AccountServiceError::invalid_data(e)),
        })
        .run(self)
        .await
    }
}

impl std::fmt::Debug for PgAccountService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgAccountService").finish_non_exhaustive()
    }
}
