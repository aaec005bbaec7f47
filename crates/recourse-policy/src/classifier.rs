//! Failure eligibility classification
//!
//! Provides [`FailureClassifier`], the include/exclude rule that decides
//! whether a raised error is eligible for fallback.

use crate::matcher::FailureMatcher;
use std::error::Error;

/// Include/exclude rule over failure kinds
///
/// An error is eligible for fallback iff it matches at least one include
/// matcher and no exclude matcher. Exclusion always wins over inclusion.
///
/// An empty include set matches everything: every failure is eligible
/// unless explicitly excluded. Callers that want "nothing eligible" state
/// it explicitly with an empty-predicate include set.
#[derive(Debug, Clone, Default)]
pub struct FailureClassifier {
    include: Vec<FailureMatcher>,
    exclude: Vec<FailureMatcher>,
}

impl FailureClassifier {
    /// Create a classifier from include and exclude matcher sets
    #[inline]
    #[must_use]
    pub fn new(include: Vec<FailureMatcher>, exclude: Vec<FailureMatcher>) -> Self {
        Self { include, exclude }
    }

    /// Classifier that accepts every failure
    #[inline]
    #[must_use]
    pub fn accept_all() -> Self {
        Self::default()
    }

    /// Decide whether an error is eligible for fallback
    ///
    /// Pure predicate: no side effects, never panics.
    #[must_use]
    pub fn can_fallback(&self, error: &(dyn Error + 'static)) -> bool {
        if self.exclude.iter().any(|m| m.matches(error)) {
            return false;
        }
        self.include.is_empty() || self.include.iter().any(|m| m.matches(error))
    }

    /// Include matchers
    #[inline]
    #[must_use]
    pub fn include(&self) -> &[FailureMatcher] {
        &self.include
    }

    /// Exclude matchers
    #[inline]
    #[must_use]
    pub fn exclude(&self) -> &[FailureMatcher] {
        &self.exclude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("timed out")]
    struct Timeout;

    #[derive(Debug, thiserror::Error)]
    #[error("bad request")]
    struct BadRequest;

    #[derive(Debug, thiserror::Error)]
    #[error("unavailable")]
    struct Unavailable;

    #[test]
    fn empty_sets_accept_everything() {
        let classifier = FailureClassifier::accept_all();
        assert!(classifier.can_fallback(&Timeout));
        assert!(classifier.can_fallback(&BadRequest));
    }

    #[test]
    fn include_limits_eligibility() {
        let classifier = FailureClassifier::new(vec![FailureMatcher::of::<Timeout>()], vec![]);
        assert!(classifier.can_fallback(&Timeout));
        assert!(!classifier.can_fallback(&BadRequest));
    }

    #[test]
    fn exclude_wins_over_include() {
        let classifier = FailureClassifier::new(
            vec![FailureMatcher::any()],
            vec![FailureMatcher::of::<BadRequest>()],
        );
        assert!(classifier.can_fallback(&Timeout));
        assert!(!classifier.can_fallback(&BadRequest));
    }

    #[test]
    fn exclude_wins_even_on_exact_overlap() {
        let classifier = FailureClassifier::new(
            vec![FailureMatcher::of::<Timeout>()],
            vec![FailureMatcher::of::<Timeout>()],
        );
        assert!(!classifier.can_fallback(&Timeout));
    }

    #[test]
    fn empty_include_with_exclusions() {
        let classifier =
            FailureClassifier::new(vec![], vec![FailureMatcher::of::<Unavailable>()]);
        assert!(classifier.can_fallback(&Timeout));
        assert!(!classifier.can_fallback(&Unavailable));
    }

    #[test]
    fn accessors_expose_matcher_sets() {
        let classifier = FailureClassifier::new(
            vec![FailureMatcher::of::<Timeout>()],
            vec![FailureMatcher::any()],
        );
        assert_eq!(classifier.include().len(), 1);
        assert_eq!(classifier.exclude().len(), 1);
    }
}
