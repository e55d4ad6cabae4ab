//! The [`Filtered`] iterator adapter.

use std::borrow::Borrow;
use std::fmt;
use std::iter::FusedIterator;

use crate::predicate::Predicate;

/// Lazy view of the items of `I` that satisfy a predicate.
///
/// Created by [`Predicate::filtered`] or [`filter`](super::filter). The
/// source is pulled only as far as needed to yield the next match, so
/// infinite sources are fine. The view is cloneable (and so restartable)
/// exactly when the source iterator is.
pub struct Filtered<I, T: ?Sized> {
    iter: I,
    predicate: Predicate<T>,
}

impl<I, T: ?Sized> Filtered<I, T> {
    pub(crate) fn new(iter: I, predicate: Predicate<T>) -> Self {
        Self { iter, predicate }
    }

    /// The predicate items are tested against.
    pub fn predicate(&self) -> &Predicate<T> {
        &self.predicate
    }

    /// Returns the source iterator, positioned after the last item pulled.
    pub fn into_inner(self) -> I {
        self.iter
    }
}

impl<I, T> Iterator for Filtered<I, T>
where
    I: Iterator,
    I::Item: Borrow<T>,
    T: ?Sized,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let predicate = &self.predicate;
        self.iter
            .find(|item| predicate.evaluate(<I::Item as Borrow<T>>::borrow(item)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.iter.size_hint();
        (0, upper)
    }
}

impl<I, T> DoubleEndedIterator for Filtered<I, T>
where
    I: DoubleEndedIterator,
    I::Item: Borrow<T>,
    T: ?Sized,
{
    fn next_back(&mut self) -> Option<I::Item> {
        let predicate = &self.predicate;
        self.iter
            .rfind(|item| predicate.evaluate(<I::Item as Borrow<T>>::borrow(item)))
    }
}

impl<I, T> FusedIterator for Filtered<I, T>
where
    I: FusedIterator,
    I::Item: Borrow<T>,
    T: ?Sized,
{
}

impl<I: Clone, T: ?Sized> Clone for Filtered<I, T> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            predicate: self.predicate.clone(),
        }
    }
}

impl<I: fmt::Debug, T: ?Sized> fmt::Debug for Filtered<I, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filtered")
            .field("iter", &self.iter)
            .field("predicate", &self.predicate)
            .finish()
    }
}

impl<T: ?Sized> Predicate<T> {
    /// Lazily yields the items of `items` for which the predicate holds,
    /// in their original order.
    ///
    /// Items may be owned values or anything that borrows as `T`, such as
    /// references or `String`s for a `Predicate<str>`.
    ///
    /// ```
    /// use u_predicate::Predicate;
    ///
    /// let is_even = Predicate::new(|n: &u64| n % 2 == 0);
    /// let first: Vec<u64> = is_even.filtered(1..).take(3).collect();
    /// assert_eq!(first, vec![2, 4, 6]);
    ///
    /// let words = ["apple", "kiwi"];
    /// let short = Predicate::new(|w: &str| w.len() < 5);
    /// let kept: Vec<&str> = short.filtered(words).collect();
    /// assert_eq!(kept, vec!["kiwi"]);
    /// ```
    pub fn filtered<I>(&self, items: I) -> Filtered<I::IntoIter, T>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        Filtered::new(items.into_iter(), self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::Cell;

    fn is_even() -> Predicate<i32> {
        Predicate::new(|n: &i32| n % 2 == 0)
    }

    fn is_positive() -> Predicate<i32> {
        Predicate::new(|n: &i32| *n > 0)
    }

    #[test]
    fn test_filtered_range() {
        let p = is_even().intersect(&is_positive());
        let kept: Vec<i32> = p.filtered(-4..5).collect();
        assert_eq!(kept, vec![2, 4]);
    }

    #[test]
    fn test_filtered_by_reference_is_restartable() {
        let values = vec![5, 2, 8, 3, 6];
        let view = is_even().filtered(&values);
        let first: Vec<&i32> = view.clone().collect();
        let second: Vec<&i32> = view.collect();
        assert_eq!(first, vec![&2, &8, &6]);
        assert_eq!(first, second);
        // The source is still usable.
        assert_eq!(values.len(), 5);
    }

    #[test]
    fn test_filtered_infinite_source() {
        let p = is_even().invert();
        let odds: Vec<i32> = p.filtered(0..).take(4).collect();
        assert_eq!(odds, vec![1, 3, 5, 7]);
    }

    #[test]
    fn test_filtered_pulls_lazily() {
        let pulled = Cell::new(0);
        let source = (1..).inspect(|_| pulled.set(pulled.get() + 1));
        let mut view = is_even().filtered(source);
        assert_eq!(pulled.get(), 0);
        assert_eq!(view.next(), Some(2));
        assert_eq!(pulled.get(), 2);
        assert_eq!(view.next(), Some(4));
        assert_eq!(pulled.get(), 4);
    }

    #[test]
    fn test_filtered_single_use_source() {
        let (tx, rx) = std::sync::mpsc::channel();
        for v in [1, 2, 3, 4] {
            tx.send(v).unwrap();
        }
        drop(tx);
        let kept: Vec<i32> = is_even().filtered(rx).collect();
        assert_eq!(kept, vec![2, 4]);
    }

    #[test]
    fn test_filtered_reverse() {
        let kept: Vec<i32> = is_even().filtered(1..10).rev().collect();
        assert_eq!(kept, vec![8, 6, 4, 2]);
    }

    #[test]
    fn test_filtered_strings() {
        let words = vec!["Ant".to_string(), "bee".to_string(), "Cat".to_string()];
        let capital = Predicate::new(|w: &str| w.starts_with(|c: char| c.is_uppercase()));
        let kept: Vec<String> = capital.filtered(words).collect();
        assert_eq!(kept, vec!["Ant".to_string(), "Cat".to_string()]);
    }

    #[test]
    fn test_size_hint() {
        let view = is_even().filtered(vec![1, 2, 3]);
        assert_eq!(view.size_hint(), (0, Some(3)));
    }

    #[test]
    fn test_into_inner_resumes_source() {
        let mut view = is_even().filtered(1..10);
        assert_eq!(view.next(), Some(2));
        let mut rest = view.into_inner();
        assert_eq!(rest.next(), Some(3));
    }

    proptest! {
        #[test]
        fn prop_filtered_is_ordered_subset(values in proptest::collection::vec(-50i32..50, 0..40)) {
            let p = is_even().union(&is_positive().invert());
            let kept: Vec<i32> = p.filtered(values.iter().copied()).collect();
            let expected: Vec<i32> = values.iter().copied().filter(|v| p.evaluate(v)).collect();
            prop_assert_eq!(&kept, &expected);
            prop_assert!(kept.iter().all(|v| p.evaluate(v)));
        }
    }
}
