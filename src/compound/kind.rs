//! Compound kinds and their arity requirements.

use std::fmt;

use crate::error::{PredicateError, Result};

/// The boolean law a compound predicate applies to its children.
///
/// | Kind | Arity | True iff |
/// |---|---|---|
/// | `Intersection` | ≥ 1 | all children are true |
/// | `Union` | ≥ 1 | at least one child is true |
/// | `Difference` | 2 | the first child is true and the second is false |
/// | `ExclusiveUnion` | ≥ 1 | exactly one child is true |
/// | `Inversion` | 1 | the child is false |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompoundKind {
    Intersection,
    Union,
    Difference,
    ExclusiveUnion,
    Inversion,
}

/// Number of children a compound kind accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many children.
    Exactly(usize),
    /// At least this many children.
    AtLeast(usize),
}

impl Arity {
    /// Returns `true` if `count` children satisfy this arity.
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "exactly {n}"),
            Arity::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

impl CompoundKind {
    /// All kinds, in declaration order.
    pub const ALL: [CompoundKind; 5] = [
        CompoundKind::Intersection,
        CompoundKind::Union,
        CompoundKind::Difference,
        CompoundKind::ExclusiveUnion,
        CompoundKind::Inversion,
    ];

    /// The child count this kind requires.
    pub fn arity(self) -> Arity {
        match self {
            CompoundKind::Difference => Arity::Exactly(2),
            CompoundKind::Inversion => Arity::Exactly(1),
            _ => Arity::AtLeast(1),
        }
    }

    /// Checks `got` against [`arity`](Self::arity).
    pub fn check_arity(self, got: usize) -> Result<()> {
        let expected = self.arity();
        if expected.accepts(got) {
            Ok(())
        } else {
            Err(PredicateError::Arity {
                kind: self,
                expected,
                got,
            })
        }
    }

    /// Whether nested nodes of this kind are merged into their parent.
    ///
    /// Intersection, union and exclusive union are n-ary and flatten;
    /// difference and inversion keep their fixed shape.
    pub fn is_associative(self) -> bool {
        matches!(
            self,
            CompoundKind::Intersection | CompoundKind::Union | CompoundKind::ExclusiveUnion
        )
    }

    /// Operator symbol used when rendering a predicate tree.
    pub fn symbol(self) -> &'static str {
        match self {
            CompoundKind::Intersection => "&",
            CompoundKind::Union => "|",
            CompoundKind::Difference => "-",
            CompoundKind::ExclusiveUnion => "^",
            CompoundKind::Inversion => "!",
        }
    }

    /// Descriptive alias of the kind (`All`, `Any`, `ATrueBFalse`, `OnlyOne`, `Not`).
    pub fn alias(self) -> &'static str {
        match self {
            CompoundKind::Intersection => "All",
            CompoundKind::Union => "Any",
            CompoundKind::Difference => "ATrueBFalse",
            CompoundKind::ExclusiveUnion => "OnlyOne",
            CompoundKind::Inversion => "Not",
        }
    }
}

impl fmt::Display for CompoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CompoundKind::Intersection => "Intersection",
            CompoundKind::Union => "Union",
            CompoundKind::Difference => "Difference",
            CompoundKind::ExclusiveUnion => "ExclusiveUnion",
            CompoundKind::Inversion => "Inversion",
        };
        f.write_str(name)
    }
}
