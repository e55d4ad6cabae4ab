//! Parameterised predicate construction.
//!
//! A [`PredicateFactory`] turns a function returning a rule into a
//! generator of leaf predicates. Factories are a convenience for
//! building leaves; what they return is an ordinary
//! [`Predicate`](crate::Predicate) with the full composition API.

mod types;

pub use types::{predicate_factory, PredicateFactory};
