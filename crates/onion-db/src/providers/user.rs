//! PostgreSQL implementation of UserService

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use onion_core::{Effect, Email, User, UserService, UserServiceError};

use crate::models::UserModel;

/// PostgreSQL implementation of UserService
#[derive(Clone)]
pub struct PgUserService {
    pool: PgPool,
}

impl PgUserService {
    /// Create a new PgUserService
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserService for PgUserService {
    #[instrument(skip(self))]
    async fn get_user_by_email(&self, email: &Email) -> Result<Option<User>, UserServiceError> {
        let email = email.clone().into_inner();

        Effect::<Self, UserServiceError, Option<UserModel>>::from_async_result(
            move |this| async move {
                sqlx::query_as::<_, UserModel>(
                    r"
                    SELECT id, email, first_name, last_name
                    FROM users
                    WHERE email = $1
                    ",
                )
                .bind(email)
                .fetch_optional(&this.pool)
                .await
            },
            UserServiceError::query_failed,
        )
        .and_then(|row| match row.map(User::try_from).transpose() {
            Ok(user) => Effect::succeed(user),
            Err(e) => Effect::fail(UserServiceError::invalid_data(e)),
        })
        .tap(|user| {
            debug!(found = user.is_some(), "PostgreSQL user lookup finished");
            Effect::succeed(())
        })
        .run(self)
        .await
    }
}

impl std::fmt::Debug for PgUserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgUserService").finish_non_exhaustive()
    }
}
