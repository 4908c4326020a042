//! Account service contract

use std::future::Future;

use async_trait::async_trait;

use crate::effect::Effect;
use crate::entities::Account;
use crate::value_objects::UserId;

use super::error::AccountServiceError;

/// Account lookup capability
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Find the account owned by `owner_id`
    ///
    /// A missing account is `Ok(None)`, not an error.
    async fn get_account_by_owner_id(
        &self,
        owner_id: &UserId,
    ) -> Result<Option<Account>, AccountServiceError>;
}

/// Environment that carries an account capability
pub trait HasAccountService {
    fn account_service(&self) -> &dyn AccountService;
}

/// Look up an account through the environment's account capability
pub fn get_account_by_owner_id<'a, E>(
    owner_id: UserId,
) -> Effect<'a, E, AccountServiceError, Option<Account>>
where
    E: HasAccountService + Sync + ?Sized + 'a,
{
    Effect::new(move |env: &'a E| async move {
        env.account_service()
            .get_account_by_owner_id(&owner_id)
            .await
    })
}

/// Account capability backed by a closure
pub struct FnAccountService<G> {
    lookup: G,
}

/// Build an account capability from a closure
pub fn account_service_fn<G, Fut>(lookup: G) -> FnAccountService<G>
where
    G: Fn(UserId) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Option<Account>, AccountServiceError>> + Send,
{
    FnAccountService { lookup }
}

#[async_trait]
impl<G, Fut> AccountService for FnAccountService<G>
where
    G: Fn(UserId) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Option<Account>, AccountServiceError>> + Send,
{
    async fn get_account_by_owner_id(
        &self,
        owner_id: &UserId,
    ) -> Result<Option<Account>, AccountServiceError> {
        (self.lookup)(owner_id.clone()).await
    }
}
