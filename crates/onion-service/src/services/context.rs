//! Service context - the environment lookups run against
//!
//! Holds one provider per capability and projects each through its `Has*` trait.

use std::sync::Arc;

use tracing::info;

use onion_common::{AppConfig, AppResult, ProviderKind};
use onion_core::{
    AccountService, HasAccountService, HasLoggingService, HasUserService, LoggingService,
    UserService,
};
use onion_db::{create_pool, PgAccountService, PgPool, PgUserService};
use onion_memory::{HardcodedAccountService, HardcodedUserService};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all capabilities
#[derive(Clone)]
pub struct ServiceContext {
    users: Arc<dyn UserService>,
    accounts: Arc<dyn AccountService>,
    logger: Arc<dyn LoggingService>,
}

impl ServiceContext {
    /// Create a new service context from its providers
    pub fn new(
        users: Arc<dyn UserService>,
        accounts: Arc<dyn AccountService>,
        logger: Arc<dyn LoggingService>,
    ) -> Self {
        Self {
            users,
            accounts,
            logger,
        }
    }

    /// Context backed by the hardcoded in-memory records
    pub fn hardcoded(logger: Arc<dyn LoggingService>) -> Self {
        Self::new(
            Arc::new(HardcodedUserService::new(logger.clone())),
            Arc::new(HardcodedAccountService::new(logger.clone())),
            logger,
        )
    }

    /// Context backed by PostgreSQL
    pub fn postgres(pool: PgPool, logger: Arc<dyn LoggingService>) -> Self {
        Self::new(
            Arc::new(PgUserService::new(pool.clone())),
            Arc::new(PgAccountService::new(pool)),
            logger,
        )
    }

    /// Context for the configured provider
    ///
    /// Opens the database pool when PostgreSQL is selected.
    pub async fn from_config(
        config: &AppConfig,
        logger: Arc<dyn LoggingService>,
    ) -> AppResult<Self> {
        info!(provider = %config.provider, "Assembling service context");

        match config.provider {
            ProviderKind::Memory => Ok(Self::hardcoded(logger)),
            ProviderKind::Postgres => {
                let pool = create_pool(&config.database).await?;
                Ok(Self::postgres(pool, logger))
            }
        }
    }

    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }
}

impl HasUserService for ServiceContext {
    fn user_service(&self) -> &dyn UserService {
        self.users.as_ref()
    }
}

impl HasAccountService for ServiceContext {
    fn account_service(&self) -> &dyn AccountService {
        self.accounts.as_ref()
    }
}

impl HasLoggingService for ServiceContext {
    fn logging_service(&self) -> &dyn LoggingService {
        self.logger.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("users", &"UserService")
            .field("accounts", &"AccountService")
            .field("logger", &"LoggingService")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom providers
#[derive(Default)]
pub struct ServiceContextBuilder {
    users: Option<Arc<dyn UserService>>,
    accounts: Option<Arc<dyn AccountService>>,
    logger: Option<Arc<dyn LoggingService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(mut self, service: Arc<dyn UserService>) -> Self {
        self.users = Some(service);
        self
    }

    pub fn accounts(mut self, service: Arc<dyn AccountService>) -> Self {
        self.accounts = Some(service);
        self
    }

    pub fn logger(mut self, service: Arc<dyn LoggingService>) -> Self {
        self.logger = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::MissingDependency` if any capability is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.users
                .ok_or(ServiceError::MissingDependency("user service"))?,
            self.accounts
                .ok_or(ServiceError::MissingDependency("account service"))?,
            self.logger
                .ok_or(ServiceError::MissingDependency("logging service"))?,
        ))
    }
}
