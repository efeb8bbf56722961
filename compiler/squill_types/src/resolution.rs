//! The two-state resolution result.

use std::fmt;

/// Result of type resolution: resolved, or unresolved with the
/// diagnostic message shown to the user. No partial states.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum TypeResolution {
    Resolved,
    Unresolved(String),
}

impl TypeResolution {
    /// An unresolved result carrying a diagnostic.
    pub fn unresolved(message: impl Into<String>) -> Self {
        TypeResolution::Unresolved(message.into())
    }

    pub const fn is_resolved(&self) -> bool {
        matches!(self, TypeResolution::Resolved)
    }

    /// The diagnostic message, absent when resolved.
    pub fn message(&self) -> Option<&str> {
        match self {
            TypeResolution::Resolved => None,
            TypeResolution::Unresolved(msg) => Some(msg),
        }
    }
}

impl fmt::Display for TypeResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeResolution::Resolved => f.write_str("resolved"),
            TypeResolution::Unresolved(msg) => write!(f, "unresolved: {msg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resolved_has_no_message() {
        assert!(TypeResolution::Resolved.is_resolved());
        assert_eq!(TypeResolution::Resolved.message(), None);
    }

    #[test]
    fn unresolved_carries_message() {
        let r = TypeResolution::unresolved("bad operand");
        assert!(!r.is_resolved());
        assert_eq!(r.message(), Some("bad operand"));
        assert_eq!(r.to_string(), "unresolved: bad operand");
    }
}
