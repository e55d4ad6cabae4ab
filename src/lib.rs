//! Composable boolean predicates.
//!
//! Build small classification rules, combine them with set-like
//! operators and evaluate or filter with the result:
//!
//! - **Predicate**: wraps a plain `Fn(&T) -> bool` rule, or combines
//!   child predicates.
//! - **Compound predicates**: intersection (`&`), union (`|`),
//!   difference (`-`), exclusive union (`^`) and inversion (`!`), each a
//!   [`Predicate`] in its own right.
//! - **PredicateFactory**: builds parameterised leaf predicates, such as
//!   `divisible_by(3)`.
//! - **Filtering**: [`Predicate::filtered`] lazily keeps the items of any
//!   iterator that satisfy a predicate.
//!
//! ```
//! use u_predicate::{Predicate, PredicateFactory};
//!
//! let divisible_by = PredicateFactory::new(|d: u32| move |n: &u32| n % d == 0);
//! let fizz = divisible_by.call(3)?;
//! let buzz = divisible_by.call(5)?;
//!
//! let fizz_only = &fizz - &buzz;
//! let fizzbuzz = &fizz & &buzz;
//!
//! assert_eq!(fizz_only.filtered(1u32..16).collect::<Vec<_>>(), vec![3, 6, 9, 12]);
//! assert_eq!(fizzbuzz.filtered(1u32..20).collect::<Vec<_>>(), vec![15]);
//! # Ok::<(), u_predicate::PredicateError>(())
//! ```
//!
//! # Design
//!
//! Predicates are immutable and reference counted; composing never
//! modifies an operand, and subtrees may be shared freely. Evaluation
//! is pure apart from what the rules themselves do, visits children
//! left to right and stops as soon as the result is decided. Nothing is
//! cached between calls.

pub mod compound;
pub mod error;
pub mod factory;
pub mod filter;
pub mod predicate;

pub use compound::{Arity, CompoundBuilder, CompoundKind};
pub use error::{PredicateError, Result};
pub use factory::{predicate_factory, PredicateFactory};
pub use filter::{filter, Filtered};
pub use predicate::{always_false, always_true, predicate, Predicate, Rule, Shape};
