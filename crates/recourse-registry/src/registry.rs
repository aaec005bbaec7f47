//! Process-wide fallback registry
//!
//! Provides [`FallbackRegistry`], the build-once mapping from policy name to
//! [`FallbackExecutor`], and [`RegistryBuilder`], which validates the
//! configured policies before exposing any executor.

use crate::error::RegistryError;
use recourse_exec::FallbackExecutor;
use recourse_policy::{FallbackPolicy, PolicyDescriptor};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// Build-once, read-only lookup from policy name to executor
///
/// Constructed at process start and never mutated afterwards, so concurrent
/// reads need no synchronization. Intended to be owned by the host
/// application and passed to call sites explicitly; call sites resolve their
/// executor once and cache the returned `Arc`.
#[derive(Debug, Default)]
pub struct FallbackRegistry {
    entries: HashMap<String, Arc<FallbackExecutor>>,
}

impl FallbackRegistry {
    /// Start building a registry
    #[inline]
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Resolve an executor by policy name
    ///
    /// # Errors
    /// Returns [`RegistryError::UnknownPolicy`] when no policy was
    /// registered under `name`. A miss is a configuration error; it is never
    /// reported as an absent value.
    pub fn get(&self, name: &str) -> Result<Arc<FallbackExecutor>, RegistryError> {
        self.entries
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownPolicy {
                name: name.to_string(),
            })
    }

    /// All registered policy names
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Number of registered policies
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no policies
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializable descriptions of every registered policy
    #[must_use]
    pub fn descriptors(&self) -> Vec<PolicyDescriptor> {
        let mut descriptors: Vec<_> = self
            .entries
            .values()
            .map(|executor| executor.policy().descriptor())
            .collect();
        descriptors.sort_by(|a, b| a.name.cmp(&b.name));
        descriptors
    }
}

/// Builder for [`FallbackRegistry`]
///
/// Collects policies, then validates the whole configuration in one step:
/// no executor is handed out before every name is known to be unique.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    policies: Vec<FallbackPolicy>,
}

impl RegistryBuilder {
    /// Create an empty builder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a policy
    #[must_use]
    pub fn with_policy(mut self, policy: FallbackPolicy) -> Self {
        self.policies.push(policy);
        self
    }

    /// Validate the configuration and build the registry
    ///
    /// # Errors
    /// Returns [`RegistryError::DuplicatePolicy`] when two policies share a
    /// name. Nothing is exposed on failure.
    pub fn build(self) -> Result<FallbackRegistry, RegistryError> {
        let mut entries = HashMap::with_capacity(self.policies.len());
        for policy in self.policies {
            let name = policy.name().to_string();
            if entries.contains_key(&name) {
                return Err(RegistryError::DuplicatePolicy { name });
            }
            entries.insert(name, Arc::new(FallbackExecutor::from_policy(policy)));
        }
        info!(policies = entries.len(), "fallback registry built");
        Ok(FallbackRegistry { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(name: &str) -> FallbackPolicy {
        FallbackPolicy::builder(name).build().unwrap()
    }

    #[test]
    fn build_empty_registry() {
        let registry = FallbackRegistry::builder().build().unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn get_resolves_registered_policy() {
        let registry = FallbackRegistry::builder()
            .with_policy(policy("catalog"))
            .build()
            .unwrap();

        let executor = registry.get("catalog").unwrap();
        assert_eq!(executor.name(), "catalog");
    }

    #[test]
    fn get_unknown_name_is_a_configuration_error() {
        let registry = FallbackRegistry::builder()
            .with_policy(policy("catalog"))
            .build()
            .unwrap();

        let err = registry.get("inventory").unwrap_err();
        assert!(matches!(err, RegistryError::UnknownPolicy { name } if name == "inventory"));
    }

    #[test]
    fn duplicate_names_fail_at_build_time() {
        let result = FallbackRegistry::builder()
            .with_policy(policy("catalog"))
            .with_policy(policy("catalog"))
            .build();

        assert!(matches!(
            result,
            Err(RegistryError::DuplicatePolicy { name }) if name == "catalog"
        ));
    }

    #[test]
    fn get_returns_same_executor_instance() {
        let registry = FallbackRegistry::builder()
            .with_policy(policy("catalog"))
            .build()
            .unwrap();

        let first = registry.get("catalog").unwrap();
        let second = registry.get("catalog").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn names_lists_all_policies() {
        let registry = FallbackRegistry::builder()
            .with_policy(policy("catalog"))
            .with_policy(policy("inventory"))
            .build()
            .unwrap();

        let names = registry.names();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"catalog"));
        assert!(names.contains(&"inventory"));
    }

    #[test]
    fn descriptors_are_sorted_by_name() {
        let registry = FallbackRegistry::builder()
            .with_policy(policy("inventory"))
            .with_policy(policy("catalog"))
            .build()
            .unwrap();

        let descriptors = registry.descriptors();
        assert_eq!(descriptors[0].name, "catalog");
        assert_eq!(descriptors[1].name, "inventory");
    }
}
