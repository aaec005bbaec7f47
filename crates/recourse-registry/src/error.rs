//! Error types for registry construction and lookup

use recourse_policy::PolicyError;

/// Registry configuration errors
///
/// All of these surface at startup: `DuplicatePolicy` and `InvalidPolicy`
/// when the registry is built, `UnknownPolicy` when a call site resolves its
/// executor, which happens once per call site before any invocation runs.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// No policy registered under the requested name
    #[error("unknown fallback policy: {name:?}")]
    UnknownPolicy {
        /// The name that failed to resolve
        name: String,
    },

    /// Two policies were registered under the same name
    #[error("duplicate fallback policy: {name:?}")]
    DuplicatePolicy {
        /// The duplicated name
        name: String,
    },

    /// A policy definition was malformed
    #[error("invalid fallback policy: {0}")]
    InvalidPolicy(#[from] PolicyError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_policy_display() {
        let err = RegistryError::UnknownPolicy {
            name: "missing".to_string(),
        };
        assert!(err.to_string().contains("unknown fallback policy"));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn invalid_policy_converts_from_policy_error() {
        let err: RegistryError = PolicyError::InvalidName(String::new()).into();
        assert!(matches!(err, RegistryError::InvalidPolicy(_)));
    }
}
