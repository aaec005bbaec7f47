//! Structural failure matchers
//!
//! Provides [`FailureMatcher`], a type-based predicate over raised errors.
//! Matching is structural (error type or source chain), never message-based.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

type MatchFn = Arc<dyn Fn(&(dyn Error + 'static)) -> bool + Send + Sync>;

/// Structural predicate over a raised error
///
/// A matcher decides whether an error belongs to a configured failure kind.
/// Type matchers built with [`FailureMatcher::of`] also inspect the error's
/// `source()` chain, so a wrapped cause still matches its configured kind.
#[derive(Clone)]
pub struct FailureMatcher {
    label: String,
    kind: MatcherKind,
}

#[derive(Clone)]
enum MatcherKind {
    /// Downcast check applied to the error and every source ancestor
    Type(MatchFn),
    /// User-supplied predicate applied to the error as raised
    Predicate(MatchFn),
    /// Matches every error
    Any,
}

impl FailureMatcher {
    /// Matcher for a concrete error type
    ///
    /// Matches if the error itself, or any error in its `source()` chain,
    /// is a `T`.
    #[must_use]
    pub fn of<T: Error + 'static>() -> Self {
        Self {
            label: std::any::type_name::<T>().to_string(),
            kind: MatcherKind::Type(Arc::new(|error: &(dyn Error + 'static)| error.is::<T>())),
        }
    }

    /// Matcher from a custom structural predicate
    ///
    /// The predicate sees the error exactly as raised; it is responsible for
    /// walking `source()` itself if it wants ancestor matching.
    pub fn when<F>(label: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&(dyn Error + 'static)) -> bool + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            kind: MatcherKind::Predicate(Arc::new(predicate)),
        }
    }

    /// Wildcard matcher, matches every error
    #[must_use]
    pub fn any() -> Self {
        Self {
            label: "*".to_string(),
            kind: MatcherKind::Any,
        }
    }

    /// Human-readable label (type name, custom label, or `*`)
    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Check whether an error matches this matcher
    ///
    /// Never panics; a matcher is a pure predicate.
    #[must_use]
    pub fn matches(&self, error: &(dyn Error + 'static)) -> bool {
        match &self.kind {
            MatcherKind::Type(check) => {
                let mut current: Option<&(dyn Error + 'static)> = Some(error);
                while let Some(candidate) = current {
                    if check(candidate) {
                        return true;
                    }
                    current = candidate.source();
                }
                false
            }
            MatcherKind::Predicate(predicate) => predicate(error),
            MatcherKind::Any => true,
        }
    }
}

impl fmt::Debug for FailureMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            MatcherKind::Type(_) => "type",
            MatcherKind::Predicate(_) => "predicate",
            MatcherKind::Any => "any",
        };
        f.debug_struct("FailureMatcher")
            .field("label", &self.label)
            .field("kind", &kind)
            .finish()
    }
}
