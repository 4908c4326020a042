//! User service contract

use std::future::Future;

use async_trait::async_trait;

use crate::effect::Effect;
use crate::entities::User;
use crate::value_objects::Email;

use super::error::UserServiceError;

/// User lookup capability
#[async_trait]
pub trait UserService: Send + Sync {
    /// Find the user registered under `email`
    ///
    /// A missing user is `Ok(None)`, not an error.
    async fn get_user_by_email(&self, email: &Email) -> Result<Option<User>, UserServiceError>;
}

/// Environment that carries a user capability
pub trait HasUserService {
    fn user_service(&self) -> &dyn UserService;
}

/// Look up a user through the environment's user capability
pub fn get_user_by_email<'a, E>(email: Email) -> Effect<'a, E, UserServiceError, Option<User>>
where
    E: HasUserService + Sync + ?Sized + 'a,
{
    Effect::new(move |env: &'a E| async move { env.user_service().get_user_by_email(&email).await })
}

/// User capability backed by a closure
pub struct FnUserService<G> {
    lookup: G,
}

/// Build a user capability from a closure
pub fn user_service_fn<G, Fut>(lookup: G) -> FnUserService<G>
where
    G: Fn(Email) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Option<User>, UserServiceError>> + Send,
{
    FnUserService { lookup }
}

#[async_trait]
impl<G, Fut> UserService for FnUserService<G>
where
    G: Fn(Email) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Option<User>, UserServiceError>> + Send,
{
    async fn get_user_by_email(&self, email: &Email) -> Result<Option<User>, UserServiceError> {
        (self.lookup)(email.clone()).await
    }
}
