//! Recourse Policy
//!
//! Named fallback policies and structural failure classification.
//!
//! # Core Concepts
//!
//! - [`FailureMatcher`]: type-based predicate over a raised error
//! - [`FailureClassifier`]: include/exclude rule deciding fallback eligibility
//! - [`FallbackPolicy`]: named, immutable rule set shared by executors
//! - [`PolicyDescriptor`]: serializable policy description for diagnostics
//!
//! # Example
//!
//! ```rust,ignore
//! use recourse_policy::{FallbackPolicy, FailureMatcher};
//!
//! let policy = FallbackPolicy::builder("catalog")
//!     .include_error::<reqwest::Error>()
//!     .exclude(FailureMatcher::when("client error", is_client_error))
//!     .build()?;
//!
//! assert!(policy.can_fallback(&some_timeout));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod classifier;
mod error;
mod matcher;
mod policy;

// Re-exports
pub use classifier::FailureClassifier;
pub use error::PolicyError;
pub use matcher::FailureMatcher;
pub use policy::{FallbackPolicy, PolicyBuilder, PolicyDescriptor};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
