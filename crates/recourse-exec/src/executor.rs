//! Fallback executor
//!
//! Provides [`FallbackExecutor`], the runtime component bound to one
//! [`FallbackPolicy`]. It runs a primary operation and, when the failure is
//! eligible under the policy, runs a supplied fallback operation instead.
//!
//! The executor owns no scheduling and no per-call state: blocking entry
//! points run on the calling thread, the async entry point runs inline in
//! the calling task, and the streaming entry point is a pull-based
//! transform stage. Primary and fallback never run concurrently for a
//! single invocation, and fallback never starts before primary has
//! definitively failed.

use crate::decision::{decide, Decision};
use crate::stream::FallbackStream;
use futures::Stream;
use recourse_policy::FallbackPolicy;
use std::error::Error;
use std::future::Future;
use std::sync::Arc;
use tracing::warn;

/// Executes a primary operation with policy-driven fallback
///
/// Bound to one immutable policy at construction; stateless otherwise and
/// safe to share across unlimited concurrent invocations. `Clone` is cheap
/// (one `Arc` bump).
#[derive(Debug, Clone)]
pub struct FallbackExecutor {
    policy: Arc<FallbackPolicy>,
}

impl FallbackExecutor {
    /// Create an executor bound to a shared policy
    #[inline]
    #[must_use]
    pub fn new(policy: Arc<FallbackPolicy>) -> Self {
        Self { policy }
    }

    /// Create an executor taking ownership of a policy
    #[inline]
    #[must_use]
    pub fn from_policy(policy: FallbackPolicy) -> Self {
        Self::new(Arc::new(policy))
    }

    /// The policy this executor is bound to
    #[inline]
    #[must_use]
    pub fn policy(&self) -> &FallbackPolicy {
        &self.policy
    }

    /// Policy name (registry key)
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        self.policy.name()
    }

    /// Blocking call with no result value
    ///
    /// # Errors
    /// Propagates primary's error when it is not eligible for fallback, or
    /// fallback's own error when fallback runs and fails.
    pub fn run<E>(
        &self,
        primary: impl FnOnce() -> Result<(), E>,
        fallback: impl FnOnce() -> Result<(), E>,
    ) -> Result<(), E>
    where
        E: Error + 'static,
    {
        self.call(primary, fallback)
    }

    /// Blocking call producing a value
    ///
    /// Runs `primary`; on an eligible failure runs `fallback` and returns
    /// its outcome, success or failure. There is no second-level fallback.
    ///
    /// # Errors
    /// Propagates primary's error when it is not eligible for fallback, or
    /// fallback's own error when fallback runs and fails.
    pub fn call<R, E>(
        &self,
        primary: impl FnOnce() -> Result<R, E>,
        fallback: impl FnOnce() -> Result<R, E>,
    ) -> Result<R, E>
    where
        E: Error + 'static,
    {
        match primary() {
            Ok(value) => Ok(value),
            Err(error) => match decide(&self.policy, &error) {
                Decision::Fallback => self.finish_fallback(fallback()),
                Decision::Propagate => Err(error),
            },
        }
    }

    /// Suspending call producing a value
    ///
    /// Both operations are supplied lazily and awaited inline in the
    /// caller's task: no task is spawned, and dropping the returned future
    /// cancels whichever operation is currently in flight. A cancelled
    /// primary never triggers fallback.
    ///
    /// # Errors
    /// Propagates primary's error when it is not eligible for fallback, or
    /// fallback's own error when fallback runs and fails.
    pub async fn call_async<R, E, P, F>(
        &self,
        primary: impl FnOnce() -> P,
        fallback: impl FnOnce() -> F,
    ) -> Result<R, E>
    where
        P: Future<Output = Result<R, E>>,
        F: Future<Output = Result<R, E>>,
        E: Error + 'static,
    {
        match primary().await {
            Ok(value) => Ok(value),
            Err(error) => match decide(&self.policy, &error) {
                Decision::Fallback => self.finish_fallback(fallback().await),
                Decision::Propagate => Err(error),
            },
        }
    }

    /// Streaming call
    ///
    /// Returns a pull-based stream that yields the primary's items until the
    /// primary yields an error. On an eligible error the fallback stream is
    /// constructed lazily and its items are yielded from that point: the
    /// consumer observes the primary's prefix followed by the fallback's
    /// full sequence, with no error in between. On an ineligible error the
    /// error item is yielded unchanged and the stream ends.
    ///
    /// Backpressure and cancellation propagate naturally: only the
    /// currently-active producer is polled, and dropping the stream drops it.
    pub fn stream<T, E, P, F, B>(&self, primary: P, fallback: F) -> FallbackStream<P, F, B>
    where
        P: Stream<Item = Result<T, E>>,
        F: FnOnce() -> B,
        B: Stream<Item = Result<T, E>>,
        E: Error + 'static,
    {
        FallbackStream::new(Arc::clone(&self.policy), primary, fallback)
    }

    fn finish_fallback<R, E: Error>(&self, outcome: Result<R, E>) -> Result<R, E> {
        if let Err(error) = &outcome {
            warn!(policy = self.policy.name(), error = %error, "fallback failed, propagating its error");
        }
        outcome
    }
}
