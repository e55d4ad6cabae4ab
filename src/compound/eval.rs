//! Combination laws, evaluated left to right.
//!
//! The evaluation order is observable through rules with side effects or
//! panics, so every law visits children strictly in order and stops as
//! soon as the outcome is fixed.

use crate::predicate::Predicate;

/// True iff every child is true. Stops at the first false child.
pub(crate) fn all<T: ?Sized>(children: &[Predicate<T>], value: &T) -> bool {
    children.iter().all(|child| child.evaluate(value))
}

/// True iff some child is true. Stops at the first true child.
pub(crate) fn any<T: ?Sized>(children: &[Predicate<T>], value: &T) -> bool {
    children.iter().any(|child| child.evaluate(value))
}

/// True iff exactly one child is true. Stops at the second true child.
pub(crate) fn exactly_one<T: ?Sized>(children: &[Predicate<T>], value: &T) -> bool {
    let mut seen = false;
    for child in children {
        if child.evaluate(value) {
            if seen {
                return false;
            }
            seen = true;
        }
    }
    seen
}

/// True iff `positive` is true and `negative` is false.
/// `negative` is skipped when `positive` already fails.
pub(crate) fn difference<T: ?Sized>(
    positive: &Predicate<T>,
    negative: &Predicate<T>,
    value: &T,
) -> bool {
    positive.evaluate(value) && !negative.evaluate(value)
}

pub(crate) fn inversion<T: ?Sized>(child: &Predicate<T>, value: &T) -> bool {
    !child.evaluate(value)
}
