//! [`PredicateFactory`] and its constructors.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::error::{PredicateError, Result};
use crate::predicate::{Predicate, Rule};

type Producer<A, T> = dyn Fn(A) -> std::result::Result<Rule<T>, String> + Send + Sync;

/// Produces leaf predicates from arguments.
///
/// A factory wraps a function that, given arguments of type `A`, returns
/// a rule. [`call`](Self::call) runs it and wraps the rule as a fresh
/// [`Predicate`]. Several arguments are passed as a tuple.
///
/// The factory keeps no per-call state: every call builds an independent
/// predicate, and calls with equal arguments are not deduplicated.
///
/// # Examples
///
/// ```
/// use u_predicate::PredicateFactory;
///
/// let divisible_by = PredicateFactory::new(|d: u32| move |n: &u32| n % d == 0);
///
/// let fifteen = divisible_by.call(3).unwrap().intersect(&divisible_by.call(5).unwrap());
/// let hits: Vec<u32> = fifteen.filtered(1..20).collect();
/// assert_eq!(hits, vec![15]);
/// ```
pub struct PredicateFactory<A, T: ?Sized> {
    produce: Arc<Producer<A, T>>,
}

impl<A, T: ?Sized> Clone for PredicateFactory<A, T> {
    fn clone(&self) -> Self {
        Self {
            produce: Arc::clone(&self.produce),
        }
    }
}

impl<A, T: ?Sized> fmt::Debug for PredicateFactory<A, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateFactory").finish_non_exhaustive()
    }
}

impl<A: 'static, T: ?Sized + 'static> PredicateFactory<A, T> {
    /// Creates a factory from an infallible rule producer.
    pub fn new<F, R>(produce: F) -> Self
    where
        F: Fn(A) -> R + Send + Sync + 'static,
        R: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            produce: Arc::new(move |args: A| -> std::result::Result<Rule<T>, String> {
                Ok(Arc::new(produce(args)) as Rule<T>)
            }),
        }
    }

    /// Creates a factory whose producer may refuse some arguments.
    ///
    /// A refusal surfaces from [`call`](Self::call) as
    /// [`PredicateError::Construction`] carrying the producer's message.
    ///
    /// ```
    /// use u_predicate::{PredicateError, PredicateFactory};
    ///
    /// let divisible_by = PredicateFactory::try_new(|d: i64| {
    ///     if d == 0 {
    ///         Err("divisor must be non-zero")
    ///     } else {
    ///         Ok(move |n: &i64| n % d == 0)
    ///     }
    /// });
    ///
    /// assert!(divisible_by.call(4).unwrap().evaluate(&8));
    /// assert!(matches!(divisible_by.call(0), Err(PredicateError::Construction { .. })));
    /// ```
    pub fn try_new<F, R, E>(produce: F) -> Self
    where
        F: Fn(A) -> std::result::Result<R, E> + Send + Sync + 'static,
        R: Fn(&T) -> bool + Send + Sync + 'static,
        E: fmt::Display,
    {
        Self {
            produce: Arc::new(move |args: A| match produce(args) {
                Ok(rule) => Ok(Arc::new(rule) as Rule<T>),
                Err(err) => Err(err.to_string()),
            }),
        }
    }

    /// Creates a factory from a producer whose output is only known at
    /// run time.
    ///
    /// The produced value must be a [`Predicate<T>`], a [`Rule<T>`] or a
    /// `fn(&T) -> bool`; anything else makes [`call`](Self::call) fail
    /// with [`PredicateError::Construction`].
    pub fn dynamic<F>(produce: F) -> Self
    where
        F: Fn(A) -> Box<dyn Any> + Send + Sync + 'static,
    {
        Self {
            produce: Arc::new(move |args: A| {
                Predicate::<T>::from_any(produce(args))
                    .map(Predicate::into_rule)
                    .map_err(|err| err.to_string())
            }),
        }
    }

    /// Runs the producer with `args` and wraps the resulting rule.
    pub fn call(&self, args: A) -> Result<Predicate<T>> {
        (self.produce)(args)
            .map(Predicate::from_rule)
            .map_err(|reason| PredicateError::Construction { reason })
    }
}

/// Turns a rule-producing function into a [`PredicateFactory`].
pub fn predicate_factory<A, T, F, R>(produce: F) -> PredicateFactory<A, T>
where
    A: 'static,
    T: ?Sized + 'static,
    F: Fn(A) -> R + Send + Sync + 'static,
    R: Fn(&T) -> bool + Send + Sync + 'static,
{
    PredicateFactory::new(produce)
}
