//! Recourse Exec
//!
//! The runtime fallback executor: run a primary operation, classify its
//! failure against a named policy, and conditionally run a fallback
//! operation instead.
//!
//! # Core Concepts
//!
//! - [`FallbackExecutor`]: one policy, four calling conventions
//!   (blocking-unit, blocking-value, async, streaming)
//! - [`FallbackStream`]: splice-on-failure transform for the streaming case
//!
//! The decision protocol is defined once and shared by every entry point:
//! primary success is returned untouched, an eligible failure hands the
//! invocation to the fallback (whose outcome, success or failure, is final),
//! an ineligible failure propagates unchanged. The executor never wraps,
//! swallows, or fabricates errors.
//!
//! # Example
//!
//! ```rust,ignore
//! use recourse_exec::FallbackExecutor;
//! use recourse_policy::FallbackPolicy;
//!
//! let policy = FallbackPolicy::builder("catalog")
//!     .include_error::<FetchError>()
//!     .build()?;
//! let exec = FallbackExecutor::from_policy(policy);
//!
//! let items = exec
//!     .call_async(|| fetch_remote(), || fetch_cached())
//!     .await?;
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod decision;
mod executor;
mod stream;

// Re-exports
pub use executor::FallbackExecutor;
pub use stream::FallbackStream;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
