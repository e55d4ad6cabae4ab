//! Compound predicates.
//!
//! A compound predicate combines child predicates with one of five
//! boolean laws ([`CompoundKind`]). Compounds are ordinary
//! [`Predicate`](crate::Predicate) values and compose further with the
//! same operators, so trees of any depth can be built.
//!
//! Intersection, union and exclusive union are n-ary and flatten when a
//! child has the same kind. Difference takes exactly two children and
//! inversion exactly one; other counts are rejected when the compound is
//! built.

pub mod alias;
mod builder;
pub(crate) mod eval;
mod kind;

pub use builder::CompoundBuilder;
pub use kind::{Arity, CompoundKind};
