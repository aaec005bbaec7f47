//! Named fallback policies
//!
//! Provides [`FallbackPolicy`], the immutable rule set an executor is bound
//! to, plus the builder used at configuration-load time.

use crate::classifier::FailureClassifier;
use crate::error::PolicyError;
use crate::matcher::FailureMatcher;
use serde::{Deserialize, Serialize};
use std::error::Error;

/// Named, immutable fallback rule set
///
/// Created once when configuration is resolved, then shared read-only by
/// every executor bound to it. Classification behavior for a given policy
/// name never changes at runtime.
#[derive(Debug, Clone)]
pub struct FallbackPolicy {
    name: String,
    classifier: FailureClassifier,
}

impl FallbackPolicy {
    /// Start building a policy with the given name
    #[must_use]
    pub fn builder(name: impl Into<String>) -> PolicyBuilder {
        PolicyBuilder {
            name: name.into(),
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }

    /// Policy name, used as the registry key
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The include/exclude classifier for this policy
    #[inline]
    #[must_use]
    pub fn classifier(&self) -> &FailureClassifier {
        &self.classifier
    }

    /// Decide whether an error is eligible for fallback under this policy
    #[inline]
    #[must_use]
    pub fn can_fallback(&self, error: &(dyn Error + 'static)) -> bool {
        self.classifier.can_fallback(error)
    }

    /// Serializable description of this policy for diagnostics
    #[must_use]
    pub fn descriptor(&self) -> PolicyDescriptor {
        PolicyDescriptor {
            name: self.name.clone(),
            include: labels(self.classifier.include()),
            exclude: labels(self.classifier.exclude()),
        }
    }
}

fn labels(matchers: &[FailureMatcher]) -> Vec<String> {
    matchers.iter().map(|m| m.label().to_string()).collect()
}

/// Builder for [`FallbackPolicy`]
#[derive(Debug)]
pub struct PolicyBuilder {
    name: String,
    include: Vec<FailureMatcher>,
    exclude: Vec<FailureMatcher>,
}

impl PolicyBuilder {
    /// Add an include matcher
    #[must_use]
    pub fn include(mut self, matcher: FailureMatcher) -> Self {
        self.include.push(matcher);
        self
    }

    /// Add an exclude matcher (exclusion wins over inclusion)
    #[must_use]
    pub fn exclude(mut self, matcher: FailureMatcher) -> Self {
        self.exclude.push(matcher);
        self
    }

    /// Include a concrete error type (source-chain aware)
    #[must_use]
    pub fn include_error<T: Error + 'static>(self) -> Self {
        self.include(FailureMatcher::of::<T>())
    }

    /// Exclude a concrete error type (source-chain aware)
    #[must_use]
    pub fn exclude_error<T: Error + 'static>(self) -> Self {
        self.exclude(FailureMatcher::of::<T>())
    }

    /// Finalize the policy
    ///
    /// # Errors
    /// Returns [`PolicyError::InvalidName`] if the name is empty or carries
    /// leading/trailing whitespace.
    pub fn build(self) -> Result<FallbackPolicy, PolicyError> {
        if self.name.is_empty() || self.name.trim() != self.name {
            return Err(PolicyError::InvalidName(self.name));
        }
        Ok(FallbackPolicy {
            name: self.name,
            classifier: FailureClassifier::new(self.include, self.exclude),
        })
    }
}

/// Serializable policy description (name plus matcher labels)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyDescriptor {
    /// Policy name
    pub name: String,
    /// Labels of the include matchers
    pub include: Vec<String>,
    /// Labels of the exclude matchers
    pub exclude: Vec<String>,
}
