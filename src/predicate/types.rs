//! The [`Predicate`] type and its construction.

use std::any::{type_name, Any};
use std::sync::Arc;

use crate::compound::{eval, CompoundKind};
use crate::error::{PredicateError, Result};

/// A caller-supplied single-argument boolean function.
///
/// Rules must be `Send + Sync` so that a finished predicate tree can be
/// shared between threads. Whether concurrent calls are meaningful is up
/// to the rule itself.
pub type Rule<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

enum Node<T: ?Sized> {
    Leaf(Rule<T>),
    Intersection(Vec<Predicate<T>>),
    Union(Vec<Predicate<T>>),
    Difference([Predicate<T>; 2]),
    ExclusiveUnion(Vec<Predicate<T>>),
    Inversion([Predicate<T>; 1]),
}

/// A composable, immutable boolean classifier over values of type `T`.
///
/// A predicate is either a leaf wrapping a [`Rule`] or a compound node
/// combining child predicates with one of the [`CompoundKind`] laws.
/// Cloning is cheap: the tree is reference counted and children are
/// shared, never copied.
///
/// # Examples
///
/// ```
/// use u_predicate::Predicate;
///
/// let is_even = Predicate::new(|n: &i32| n % 2 == 0);
/// let is_positive = Predicate::new(|n: &i32| *n > 0);
///
/// let both = is_even.intersect(&is_positive);
/// assert!(both.evaluate(&4));
/// assert!(!both.evaluate(&-4));
///
/// let evens: Vec<i32> = both.filtered(-4..5).collect();
/// assert_eq!(evens, vec![2, 4]);
/// ```
pub struct Predicate<T: ?Sized> {
    node: Arc<Node<T>>,
    name: Option<Arc<str>>,
}

impl<T: ?Sized> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self {
            node: Arc::clone(&self.node),
            name: self.name.clone(),
        }
    }
}

impl<T: ?Sized> Predicate<T> {
    /// Wraps a function as a leaf predicate.
    pub fn new<F>(rule: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::from_rule(Arc::new(rule))
    }

    /// Wraps an already shared [`Rule`] as a leaf predicate.
    pub fn from_rule(rule: Rule<T>) -> Self {
        Self::from_node(Node::Leaf(rule))
    }

    /// Builds a predicate from a dynamically typed value.
    ///
    /// Accepts a boxed [`Predicate<T>`], [`Rule<T>`] or `fn(&T) -> bool`.
    /// Anything else fails with [`PredicateError::InvalidRule`].
    ///
    /// ```
    /// use std::any::Any;
    /// use u_predicate::{Predicate, PredicateError};
    ///
    /// let rule: fn(&i32) -> bool = |n| *n > 0;
    /// let ok = Predicate::<i32>::from_any(Box::new(rule) as Box<dyn Any>).unwrap();
    /// assert!(ok.evaluate(&1));
    ///
    /// let err = Predicate::<i32>::from_any(Box::new("not a function")).unwrap_err();
    /// assert!(matches!(err, PredicateError::InvalidRule { .. }));
    /// ```
    pub fn from_any(value: Box<dyn Any>) -> Result<Self>
    where
        T: 'static,
    {
        let value = match value.downcast::<Predicate<T>>() {
            Ok(predicate) => return Ok(*predicate),
            Err(value) => value,
        };
        let value = match value.downcast::<Rule<T>>() {
            Ok(rule) => return Ok(Self::from_rule(*rule)),
            Err(value) => value,
        };
        match value.downcast::<fn(&T) -> bool>() {
            Ok(rule) => Ok(Self::new(*rule)),
            Err(_) => Err(PredicateError::InvalidRule {
                expected: type_name::<T>(),
            }),
        }
    }

    /// Builds a compound predicate of `kind` from `children`.
    ///
    /// Fails with [`PredicateError::Arity`] when the child count does not
    /// match [`CompoundKind::arity`]. Children of the same associative
    /// kind are merged into the new node.
    pub fn compound(kind: CompoundKind, children: Vec<Self>) -> Result<Self> {
        kind.check_arity(children.len())?;
        let node = match kind {
            CompoundKind::Intersection => Node::Intersection(flatten(kind, children)),
            CompoundKind::Union => Node::Union(flatten(kind, children)),
            CompoundKind::ExclusiveUnion => Node::ExclusiveUnion(flatten(kind, children)),
            CompoundKind::Difference => Node::Difference(fixed(kind, children)?),
            CompoundKind::Inversion => Node::Inversion(fixed(kind, children)?),
        };
        Ok(Self::from_node(node))
    }

    fn from_node(node: Node<T>) -> Self {
        Self {
            node: Arc::new(node),
            name: None,
        }
    }

    /// Attaches a display name to this predicate.
    ///
    /// The name shows up in [`Display`](std::fmt::Display) output. It is
    /// dropped when the predicate is absorbed into a flattened parent.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(Arc::from(name.into()));
        self
    }

    /// Evaluates the predicate against `value`.
    ///
    /// Intersection and union stop at the first deciding child, left to
    /// right. A rule that panics unwinds through this call unchanged.
    pub fn evaluate(&self, value: &T) -> bool {
        match &*self.node {
            Node::Leaf(rule) => rule(value),
            Node::Intersection(children) => eval::all(children, value),
            Node::Union(children) => eval::any(children, value),
            Node::Difference([positive, negative]) => eval::difference(positive, negative, value),
            Node::ExclusiveUnion(children) => eval::exactly_one(children, value),
            Node::Inversion([child]) => eval::inversion(child, value),
        }
    }

    /// `self` and `other` must both hold.
    pub fn intersect(&self, other: &Self) -> Self {
        let kind = CompoundKind::Intersection;
        Self::from_node(Node::Intersection(flatten(kind, self.pair(other))))
    }

    /// `self` or `other` (or both) must hold.
    pub fn union(&self, other: &Self) -> Self {
        let kind = CompoundKind::Union;
        Self::from_node(Node::Union(flatten(kind, self.pair(other))))
    }

    /// `self` must hold and `other` must not.
    pub fn difference(&self, other: &Self) -> Self {
        Self::from_node(Node::Difference([self.clone(), other.clone()]))
    }

    /// Exactly one of the operands must hold.
    ///
    /// Chains flatten, so `a ^ b ^ c` is true when exactly one of the
    /// three holds, however the expression is parenthesised.
    pub fn exclusive_union(&self, other: &Self) -> Self {
        let kind = CompoundKind::ExclusiveUnion;
        Self::from_node(Node::ExclusiveUnion(flatten(kind, self.pair(other))))
    }

    /// `self` must not hold.
    pub fn invert(&self) -> Self {
        Self::from_node(Node::Inversion([self.clone()]))
    }

    fn pair(&self, other: &Self) -> Vec<Self> {
        vec![self.clone(), other.clone()]
    }

    /// The compound kind, or `None` for a leaf.
    pub fn kind(&self) -> Option<CompoundKind> {
        match &*self.node {
            Node::Leaf(_) => None,
            Node::Intersection(_) => Some(CompoundKind::Intersection),
            Node::Union(_) => Some(CompoundKind::Union),
            Node::Difference(_) => Some(CompoundKind::Difference),
            Node::ExclusiveUnion(_) => Some(CompoundKind::ExclusiveUnion),
            Node::Inversion(_) => Some(CompoundKind::Inversion),
        }
    }

    /// Returns `true` for a predicate wrapping a single rule.
    pub fn is_leaf(&self) -> bool {
        matches!(&*self.node, Node::Leaf(_))
    }

    /// Direct children in evaluation order; empty for a leaf.
    ///
    /// For a difference the positive child comes first.
    pub fn children(&self) -> &[Self] {
        match &*self.node {
            Node::Leaf(_) => &[],
            Node::Intersection(children)
            | Node::Union(children)
            | Node::ExclusiveUnion(children) => children,
            Node::Difference(children) => children,
            Node::Inversion(children) => children,
        }
    }

    /// The display name, if one was attached.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Height of the tree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(Self::depth).max().unwrap_or(0)
    }

    /// Number of leaf positions in the tree, counting shared leaves once
    /// per occurrence.
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children().iter().map(Self::leaf_count).sum()
        }
    }

    /// Returns `true` if both handles point at the same tree node.
    ///
    /// Structurally equal predicates built separately are never
    /// `ptr_eq`; there is no value equality on predicates.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }

    /// Borrows the predicate as a plain closure, e.g. for `Iterator::filter`.
    pub fn as_fn(&self) -> impl Fn(&T) -> bool + '_ {
        move |value: &T| self.evaluate(value)
    }

    /// Converts the predicate into a [`Rule`], so it can be wrapped again
    /// or handed to code that only knows about plain functions.
    pub fn into_rule(self) -> Rule<T>
    where
        T: 'static,
    {
        if let Node::Leaf(rule) = &*self.node {
            return Arc::clone(rule);
        }
        Arc::new(move |value: &T| self.evaluate(value))
    }
}

impl<T, F> From<F> for Predicate<T>
where
    T: ?Sized,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    /// Wraps a plain function, so it can be passed wherever a predicate
    /// operand is expected: `p.intersect(&rule.into())`.
    fn from(rule: F) -> Self {
        Predicate::new(rule)
    }
}

fn flatten<T: ?Sized>(kind: CompoundKind, children: Vec<Predicate<T>>) -> Vec<Predicate<T>> {
    let mut flat = Vec::with_capacity(children.len());
    for child in children {
        if child.kind() == Some(kind) {
            flat.extend_from_slice(child.children());
        } else {
            flat.push(child);
        }
    }
    flat
}

fn fixed<T: ?Sized, const N: usize>(
    kind: CompoundKind,
    children: Vec<Predicate<T>>,
) -> Result<[Predicate<T>; N]> {
    let got = children.len();
    children.try_into().map_err(|_| PredicateError::Arity {
        kind,
        expected: kind.arity(),
        got,
    })
}

/// Wraps a function as a [`Predicate`].
///
/// Equivalent to [`Predicate::new`]; reads well at definition sites:
///
/// ```
/// use u_predicate::predicate;
///
/// let is_even = predicate(|n: &u32| n % 2 == 0);
/// assert!(is_even.evaluate(&2));
/// ```
pub fn predicate<T, F>(rule: F) -> Predicate<T>
where
    T: ?Sized,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    Predicate::new(rule)
}

/// A predicate that holds for every value.
pub fn always_true<T: ?Sized + 'static>() -> Predicate<T> {
    Predicate::new(|_: &T| true).with_name("true")
}

/// A predicate that holds for no value.
pub fn always_false<T: ?Sized + 'static>() -> Predicate<T> {
    Predicate::new(|_: &T| false).with_name("false")
}
