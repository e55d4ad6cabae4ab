//! Error types for predicate construction.
//!
//! Only construction can fail. Evaluation never returns an error: a rule
//! that panics unwinds through every compound layer unchanged.

use thiserror::Error;

use crate::compound::{Arity, CompoundKind};

/// Errors raised while building predicates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredicateError {
    /// The supplied value is not a one-argument boolean function.
    #[error("invalid rule: expected a one-argument predicate over `{expected}`")]
    InvalidRule {
        /// Type name of the argument the rule was expected to accept.
        expected: &'static str,
    },

    /// A compound predicate was given the wrong number of children.
    #[error("{kind} requires {expected} children, got {got}")]
    Arity {
        kind: CompoundKind,
        expected: Arity,
        got: usize,
    },

    /// A factory's producer did not yield a valid rule.
    #[error("factory could not construct a rule: {reason}")]
    Construction { reason: String },
}

/// Result alias used by the construction APIs.
pub type Result<T> = std::result::Result<T, PredicateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_message() {
        let err = PredicateError::Arity {
            kind: CompoundKind::Difference,
            expected: Arity::Exactly(2),
            got: 1,
        };
        assert_eq!(err.to_string(), "Difference requires exactly 2 children, got 1");
    }

    #[test]
    fn test_invalid_rule_message() {
        let err = PredicateError::InvalidRule { expected: "i32" };
        assert!(err.to_string().contains("`i32`"));
    }
}
