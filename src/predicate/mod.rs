//! The predicate abstraction.
//!
//! A [`Predicate`] wraps a [`Rule`] (a plain `Fn(&T) -> bool`) or combines
//! child predicates with a boolean law. Predicates are immutable once
//! built; every composition returns a new predicate that shares its
//! operands.
//!
//! # Composition
//!
//! | Method | Operator | Result |
//! |---|---|---|
//! | [`intersect`](Predicate::intersect) | `a & b` | both hold |
//! | [`union`](Predicate::union) | `a \| b` | either holds |
//! | [`difference`](Predicate::difference) | `a - b` | `a` holds, `b` does not |
//! | [`exclusive_union`](Predicate::exclusive_union) | `a ^ b` | exactly one holds |
//! | [`invert`](Predicate::invert) | `!a` | `a` does not hold |
//!
//! `Rule` in the descriptive naming scheme maps to [`Predicate`] here;
//! the rule itself is the function a leaf wraps.

mod display;
mod ops;
mod types;

pub use display::Shape;
pub use types::{always_false, always_true, predicate, Predicate, Rule};
