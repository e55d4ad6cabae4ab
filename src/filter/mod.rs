//! Lazy filtering of sequences by a predicate.

mod iter;

pub use iter::Filtered;

use std::borrow::Borrow;

use crate::predicate::Predicate;

/// Lazily yields the items of `items` that satisfy `predicate`.
///
/// Free-function form of [`Predicate::filtered`].
pub fn filter<I, T>(predicate: &Predicate<T>, items: I) -> Filtered<I::IntoIter, T>
where
    I: IntoIterator,
    I::Item: Borrow<T>,
    T: ?Sized,
{
    predicate.filtered(items)
}
