//! Hardcoded implementation of UserService

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use onion_core::services::log;
use onion_core::{
    Effect, Email, HasLoggingService, LoggingService, User, UserService, UserServiceError,
};

use super::seed;

/// User lookup over a fixed map keyed by email
///
/// Every lookup first logs ``Looking up email `<email>` `` through the
/// provider's own logging capability.
pub struct HardcodedUserService {
    users: HashMap<Email, User>,
    logger: Arc<dyn LoggingService>,
}

impl HardcodedUserService {
    /// Create a provider serving the seeded users
    pub fn new(logger: Arc<dyn LoggingService>) -> Self {
        Self::with_users(seed::users(), logger)
    }

    /// Create a provider serving the given users
    pub fn with_users(users: impl IntoIterator<Item = User>, logger: Arc<dyn LoggingService>) -> Self {
        Self {
            users: users
                .into_iter()
                .map(|user| (user.email.clone(), user))
                .collect(),
            logger,
        }
    }

    /// Number of users served
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl HasLoggingService for HardcodedUserService {
    fn logging_service(&self) -> &dyn LoggingService {
        self.logger.as_ref()
    }
}

#[async_trait]
impl UserService for HardcodedUserService {
    #[instrument(skip(self))]
    async fn get_user_by_email(&self, email: &Email) -> Result<Option<User>, UserServiceError> {
        Effect::<Self, UserServiceError, Email>::succeed(email.clone())
            .tap(|email| log(format!("Looking up email `{email}`")).widen())
            .map(|email| {
                let user = self.users.get(&email).cloned();
                debug!(found = user.is_some(), "Hardcoded user lookup finished");
                user
            })
            .run(self)
            .await
    }
}

impl std::fmt::Debug for HardcodedUserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HardcodedUserService")
            .field("users", &self.users.len())
            .field("logger", &"LoggingService")
            .finish()
    }
}
