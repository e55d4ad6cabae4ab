//! Validated construction of compound predicates.

use super::CompoundKind;
use crate::error::Result;
use crate::predicate::Predicate;

/// Builder for an n-child compound predicate.
///
/// Children are collected first and the arity is checked once, in
/// [`build`](Self::build). This is the checked counterpart of the
/// composition methods, which always produce a valid arity.
///
/// # Examples
///
/// ```
/// use u_predicate::{CompoundBuilder, CompoundKind, Predicate};
///
/// let p = CompoundBuilder::new(CompoundKind::ExclusiveUnion)
///     .with(Predicate::new(|n: &i32| *n > 0))
///     .with(Predicate::new(|n: &i32| n % 3 == 0))
///     .with_name("positive xor triple")
///     .build()
///     .unwrap();
///
/// assert!(p.evaluate(&-3));
/// assert!(!p.evaluate(&3));
/// assert_eq!(p.to_string(), "positive xor triple");
/// ```
pub struct CompoundBuilder<T: ?Sized> {
    kind: CompoundKind,
    children: Vec<Predicate<T>>,
    name: Option<String>,
}

impl<T: ?Sized> CompoundBuilder<T> {
    /// Creates an empty builder for `kind`.
    pub fn new(kind: CompoundKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
            name: None,
        }
    }

    /// Appends a child.
    pub fn with(mut self, child: Predicate<T>) -> Self {
        self.children.push(child);
        self
    }

    /// Appends several children, in order.
    pub fn with_all<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = Predicate<T>>,
    {
        self.children.extend(children);
        self
    }

    /// Names the resulting predicate.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The kind being built.
    pub fn kind(&self) -> CompoundKind {
        self.kind
    }

    /// Number of children collected so far.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Checks the child count without consuming the builder.
    pub fn validate(&self) -> Result<()> {
        self.kind.check_arity(self.children.len())
    }

    /// Builds the predicate.
    ///
    /// Returns [`PredicateError::Arity`](crate::PredicateError::Arity) if
    /// the child count does not fit the kind.
    pub fn build(self) -> Result<Predicate<T>> {
        let predicate = Predicate::compound(self.kind, self.children)?;
        Ok(match self.name {
            Some(name) => predicate.with_name(name),
            None => predicate,
        })
    }
}

impl<T: ?Sized> Predicate<T> {
    /// Intersection of `children`; at least one child is required.
    pub fn intersection_of<I>(children: I) -> Result<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        Self::compound(CompoundKind::Intersection, children.into_iter().collect())
    }

    /// Union of `children`; at least one child is required.
    pub fn union_of<I>(children: I) -> Result<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        Self::compound(CompoundKind::Union, children.into_iter().collect())
    }

    /// Exclusive union of `children`; at least one child is required.
    pub fn exclusive_union_of<I>(children: I) -> Result<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        Self::compound(CompoundKind::ExclusiveUnion, children.into_iter().collect())
    }

    /// Difference of exactly two children: `[positive, negative]`.
    pub fn difference_of<I>(children: I) -> Result<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        Self::compound(CompoundKind::Difference, children.into_iter().collect())
    }

    /// Inversion of exactly one child.
    pub fn inversion_of<I>(children: I) -> Result<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        Self::compound(CompoundKind::Inversion, children.into_iter().collect())
    }
}
