//! Effect abstraction - deferred, environment-reading, failable async computations
//!
//! An [`Effect<'a, E, F, A>`] reads as "given an environment `E`, eventually
//! produce either an error `F` or a value `A`". Building an effect performs no
//! work; work starts only when [`Effect::run`] is handed an environment and the
//! returned future is polled.
//!
//! ```rust
//! use onion_core::Effect;
//!
//! struct Env {
//!     base: u32,
//! }
//!
//! # futures::executor::block_on(async {
//! let effect: Effect<'_, Env, String, u32> = Effect::new(|env: &Env| async move { Ok::<_, String>(env.base) })
//!     .map(|n| n + 1)
//!     .and_then(|n| Effect::succeed(n * 2));
//!
//! assert_eq!(effect.run(&Env { base: 20 }).await, Ok(42));
//! # });
//! ```

use std::convert::Infallible;
use std::fmt;
use std::future::Future;

use futures::future::{self, BoxFuture, FutureExt};

/// Deferred async computation requiring `&E`, failing with `F`, producing `A`
#[must_use = "effects are lazy and do nothing unless run"]
pub struct Effect<'a, E: ?Sized, F, A> {
    thunk: Box<dyn FnOnce(&'a E) -> BoxFuture<'a, Result<A, F>> + Send + 'a>,
}

impl<'a, E, F, A> Effect<'a, E, F, A>
where
    E: Sync + ?Sized + 'a,
    F: Send + 'a,
    A: Send + 'a,
{
    /// Build an effect from a function of the environment
    pub fn new<G, Fut>(f: G) -> Self
    where
        G: FnOnce(&'a E) -> Fut + Send + 'a,
        Fut: Future<Output = Result<A, F>> + Send + 'a,
    {
        Self {
            thunk: Box::new(move |env| f(env).boxed()),
        }
    }

    /// Effect that succeeds with `value` without touching the environment
    pub fn succeed(value: A) -> Self {
        Self::new(move |_| future::ready(Ok(value)))
    }

    /// Effect that fails with `error` without touching the environment
    pub fn fail(error: F) -> Self {
        Self::new(move |_| future::ready(Err(error)))
    }

    /// Lift a fallible async operation, converting its failure with `on_error`
    pub fn from_async_result<G, Fut, X, H>(op: G, on_error: H) -> Self
    where
        G: FnOnce(&'a E) -> Fut + Send + 'a,
        Fut: Future<Output = Result<A, X>> + Send + 'a,
        H: FnOnce(X) -> F + Send + 'a,
    {
        Self::new(move |env| op(env).map(move |result| result.map_err(on_error)))
    }

    /// Run `f` on the unwrapped option, or succeed with `None` when absent
    ///
    /// `f` is not invoked for `None`.
    pub fn traverse_option<T, G>(value: Option<T>, f: G) -> Effect<'a, E, F, Option<A>>
    where
        T: Send + 'a,
        G: FnOnce(T) -> Self + Send + 'a,
    {
        Effect::new(move |env| async move {
            match value {
                Some(inner) => f(inner).run(env).await.map(Some),
                None => Ok(None),
            }
        })
    }

    /// Transform the success value; failures pass through unchanged
    pub fn map<B, G>(self, f: G) -> Effect<'a, E, F, B>
    where
        B: Send + 'a,
        G: FnOnce(A) -> B + Send + 'a,
    {
        Effect::new(move |env| self.run(env).map(move |result| result.map(f)))
    }

    /// Transform the failure value; successes pass through unchanged
    pub fn map_err<F2, G>(self, f: G) -> Effect<'a, E, F2, A>
    where
        F2: Send + 'a,
        G: FnOnce(F) -> F2 + Send + 'a,
    {
        Effect::new(move |env| self.run(env).map(move |result| result.map_err(f)))
    }

    /// Sequence a dependent effect
    ///
    /// The first effect resolves completely before `f` is called. When it
    /// fails, `f` is never called and the failure is returned as is.
    pub fn and_then<B, G>(self, f: G) -> Effect<'a, E, F, B>
    where
        B: Send + 'a,
        G: FnOnce(A) -> Effect<'a, E, F, B> + Send + 'a,
    {
        Effect::new(move |env| async move {
            let value = self.run(env).await?;
            f(value).run(env).await
        })
    }

    /// Run a side effect on the success value, keeping the value
    ///
    /// The side effect's own result is discarded; its failure is not.
    pub fn tap<B, G>(self, f: G) -> Self
    where
        B: Send + 'a,
        G: FnOnce(&A) -> Effect<'a, E, F, B> + Send + 'a,
    {
        Effect::new(move |env| async move {
            let value = self.run(env).await?;
            f(&value).run(env).await?;
            Ok(value)
        })
    }

    /// Supply the environment and get the future that performs the work
    pub fn run(self, env: &'a E) -> BoxFuture<'a, Result<A, F>> {
        (self.thunk)(env)
    }
}

impl<'a, E, A> Effect<'a, E, Infallible, A>
where
    E: Sync + ?Sized + 'a,
    A: Send + 'a,
{
    /// Give an effect that cannot fail any error type
    pub fn widen<F>(self) -> Effect<'a, E, F, A>
    where
        F: Send + 'a,
    {
        self.map_err(|never| match never {})
    }
}

impl<E: ?Sized, F, A> fmt::Debug for Effect<'_, E, F, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Effect").finish_non_exhaustive()
    }
}
