//! Logging service contract

use std::convert::Infallible;
use std::future::Future;

use async_trait::async_trait;

use crate::effect::Effect;

/// Sink for human-readable log lines
///
/// Logging cannot fail by contract; a sink that loses a line does so silently.
#[async_trait]
pub trait LoggingService: Send + Sync {
    /// Record a message
    async fn log(&self, message: &str);
}

/// Environment that carries a logging capability
pub trait HasLoggingService {
    fn logging_service(&self) -> &dyn LoggingService;
}

/// Log `message` through the environment's logging capability
pub fn log<'a, E>(message: impl Into<String>) -> Effect<'a, E, Infallible, ()>
where
    E: HasLoggingService + Sync + ?Sized + 'a,
{
    let message = message.into();
    Effect::new(move |env: &'a E| async move {
        env.logging_service().log(&message).await;
        Ok(())
    })
}

/// Logging capability backed by a closure
pub struct FnLoggingService<G> {
    log: G,
}

/// Build a logging capability from a closure
pub fn logging_service_fn<G, Fut>(log: G) -> FnLoggingService<G>
where
    G: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = ()> + Send,
{
    FnLoggingService { log }
}

#[async_trait]
impl<G, Fut> LoggingService for FnLoggingService<G>
where
    G: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = ()> + Send,
{
    async fn log(&self, message: &str) {
        (self.log)(message.to_string()).await;
    }
}
