//! Descriptive aliases for the compound constructors.
//!
//! | Alias | Kind |
//! |---|---|
//! | [`all`] | Intersection |
//! | [`any`] | Union |
//! | [`only_one`] | ExclusiveUnion |
//! | [`a_true_b_false`] | Difference |
//! | [`not`] | Inversion |
//!
//! These are naming sugar only and behave exactly like the
//! [`Predicate`] constructors they call.

use crate::error::Result;
use crate::predicate::Predicate;

/// All children must hold.
pub fn all<T: ?Sized>(children: impl IntoIterator<Item = Predicate<T>>) -> Result<Predicate<T>> {
    Predicate::intersection_of(children)
}

/// At least one child must hold.
pub fn any<T: ?Sized>(children: impl IntoIterator<Item = Predicate<T>>) -> Result<Predicate<T>> {
    Predicate::union_of(children)
}

/// Exactly one child must hold.
pub fn only_one<T: ?Sized>(
    children: impl IntoIterator<Item = Predicate<T>>,
) -> Result<Predicate<T>> {
    Predicate::exclusive_union_of(children)
}

/// `a` must hold and `b` must not.
pub fn a_true_b_false<T: ?Sized>(a: &Predicate<T>, b: &Predicate<T>) -> Predicate<T> {
    a.difference(b)
}

/// `p` must not hold.
pub fn not<T: ?Sized>(p: &Predicate<T>) -> Predicate<T> {
    p.invert()
}
