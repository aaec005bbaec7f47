//! Recourse Registry
//!
//! Build-once lookup from fallback policy name to executor.
//!
//! # Core Concepts
//!
//! - [`FallbackRegistry`]: process-wide, read-only name → executor mapping
//! - [`RegistryBuilder`]: validates the configuration (unique names,
//!   well-formed policies) before exposing any executor
//! - [`RegistryError`]: configuration errors, surfaced at startup
//!
//! # Example
//!
//! ```rust,ignore
//! use recourse_policy::FallbackPolicy;
//! use recourse_registry::FallbackRegistry;
//!
//! let registry = FallbackRegistry::builder()
//!     .with_policy(FallbackPolicy::builder("catalog").build()?)
//!     .build()?;
//!
//! // Resolved once per call site, then cached.
//! let catalog = registry.get("catalog")?;
//! let result = catalog.call(|| fetch_remote(), || fetch_cached());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod error;
mod registry;

// Re-exports
pub use error::RegistryError;
pub use registry::{FallbackRegistry, RegistryBuilder};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;
    use recourse_policy::FallbackPolicy;

    #[derive(Debug, thiserror::Error, PartialEq)]
    enum FetchError {
        #[error("upstream timed out")]
        Timeout,
        #[error("not found")]
        NotFound,
    }

    fn registry() -> FallbackRegistry {
        FallbackRegistry::builder()
            .with_policy(
                FallbackPolicy::builder("catalog")
                    .include_error::<FetchError>()
                    .exclude(recourse_policy::FailureMatcher::when("not found", |e| {
                        matches!(e.downcast_ref::<FetchError>(), Some(FetchError::NotFound))
                    }))
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn resolved_executor_applies_its_policy() {
        let catalog = registry().get("catalog").unwrap();

        let recovered: Result<&str, FetchError> =
            catalog.call(|| Err(FetchError::Timeout), || Ok("cached"));
        assert_eq!(recovered.unwrap(), "cached");

        let propagated: Result<&str, FetchError> =
            catalog.call(|| Err(FetchError::NotFound), || Ok("cached"));
        assert_eq!(propagated.unwrap_err(), FetchError::NotFound);
    }

    #[test]
    fn descriptors_serialize_for_diagnostics() {
        let json = serde_json::to_string(&registry().descriptors()).unwrap();
        assert!(json.contains("catalog"));
        assert!(json.contains("not found"));
    }

    #[test]
    fn invalid_policy_error_converts_at_startup() {
        fn startup() -> Result<FallbackRegistry, RegistryError> {
            let policy = FallbackPolicy::builder("").build()?;
            FallbackRegistry::builder().with_policy(policy).build()
        }
        assert!(matches!(startup(), Err(RegistryError::InvalidPolicy(_))));
    }
}
