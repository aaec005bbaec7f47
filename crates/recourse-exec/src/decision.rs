//! The single fallback decision point
//!
//! Every entry point (blocking, async, streaming) routes a primary failure
//! through [`decide`] so the protocol is defined exactly once.

use recourse_policy::FallbackPolicy;
use std::error::Error;
use tracing::debug;

/// What to do with a failed primary operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Decision {
    /// Error is eligible: run the fallback operation
    Fallback,
    /// Error is not eligible: propagate it unchanged
    Propagate,
}

/// Classify a primary failure under a policy
pub(crate) fn decide(policy: &FallbackPolicy, error: &(dyn Error + 'static)) -> Decision {
    if policy.can_fallback(error) {
        debug!(policy = policy.name(), error = %error, "failure eligible, switching to fallback");
        Decision::Fallback
    } else {
        debug!(policy = policy.name(), error = %error, "failure not eligible, propagating");
        Decision::Propagate
    }
}
