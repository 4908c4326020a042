//! Hardcoded implementation of AccountService

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use onion_core::services::log;
use onion_core::{
    Account, AccountService, AccountServiceError, Effect, HasLoggingService, LoggingService,
    UserId,
};

use super::seed;

/// Account lookup over a fixed map keyed by owner id
pub struct HardcodedAccountService {
    accounts: HashMap<UserId, Account>,
    logger: Arc<dyn LoggingService>,
}

impl HardcodedAccountService {
    /// Create a provider serving the seeded accounts
    pub fn new(logger: Arc<dyn LoggingService>) -> Self {
        Self::with_accounts(seed::accounts(), logger)
    }

    /// Create a provider serving the given accounts
    ///
    /// When several accounts share an owner, the last one wins.
    pub fn with_accounts(
        accounts: impl IntoIterator<Item = Account>,
        logger: Arc<dyn LoggingService>,
    ) -> Self {
        Self {
            accounts: accounts
                .into_iter()
                .map(|account| (account.owner_id.clone(), account))
                .collect(),
            logger,
        }
    }

    /// Number of accounts served
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl HasLoggingService for HardcodedAccountService {
    fn logging_service(&self) -> &dyn LoggingService {
        self.logger.as_ref()
    }
}

#[async_trait]
impl AccountService for HardcodedAccountService {
    #[instrument(skip(self))]
    async fn get_account_by_owner_id(
        &self,
        owner_id: &UserId,
    ) -> Result<Option<Account>, AccountServiceError> {
        Effect::<Self, AccountServiceError, UserId>::succeed(owner_id.clone())
            .tap(|owner_id| log(format!("Looking up account for owner `{owner_id}`")).widen())
            .map(|owner_id| self.accounts.get(&owner_id).cloned())
            .run(self)
            .await
    }
}

impl std::fmt::Debug for HardcodedAccountService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HardcodedAccountService")
            .field("accounts", &self.accounts.len())
            .field("logger", &"LoggingService")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::RecordingLogger;
    use onion_core::AccountId;

    #[tokio::test]
    async fn test_seeded_owner_has_account() {
        let logger = Arc::new(RecordingLogger::new());
        let accounts = HardcodedAccountService::new(logger.clone());
        let owner = UserId::from_uuid(seed::ETHAN_ID);

        let account = accounts
            .get_account_by_owner_id(&owner)
            .await
            .unwrap()
            .expect("Ethan owns an account");

        assert_eq!(account.account_id, AccountId::from_uuid(seed::ETHAN_ACCOUNT_ID));
        assert!(account.is_owned_by(&owner));
        assert_eq!(
            logger.messages(),
            vec![format!("Looking up account for owner `{owner}`")]
        );
    }

    #[tokio::test]
    async fn test_owner_without_account_is_absent() {
        let accounts = HardcodedAccountService::new(Arc::new(RecordingLogger::new()));
        let naomi = UserId::from_uuid(seed::NAOMI_ID);

        assert!(accounts.get_account_by_owner_id(&naomi).await.unwrap().is_none());
    }

    #[test]
    fn test_last_account_per_owner_wins() {
        let owner = UserId::generate();
        let second = Account::new(AccountId::generate(), owner.clone());
        let accounts = HardcodedAccountService::with_accounts(
            vec![Account::new(AccountId::generate(), owner.clone()), second.clone()],
            Arc::new(RecordingLogger::new()),
        );

        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts.accounts.get(&owner), Some(&second));
    }
}
