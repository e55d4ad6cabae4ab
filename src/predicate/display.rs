//! Rendering and structural snapshots of predicate trees.

use std::fmt;

use super::Predicate;
use crate::compound::CompoundKind;

/// Structure of a predicate tree without its rules.
///
/// Useful for logging, assertions and (with the `serde` feature)
/// exporting a description of a rule set. Rules themselves are opaque and
/// cannot be reconstructed from a shape.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    Leaf {
        name: Option<String>,
    },
    Compound {
        kind: CompoundKind,
        name: Option<String>,
        children: Vec<Shape>,
    },
}

impl<T: ?Sized> Predicate<T> {
    /// Captures the structure of this predicate.
    pub fn shape(&self) -> Shape {
        let name = self.name().map(str::to_owned);
        match self.kind() {
            None => Shape::Leaf { name },
            Some(kind) => Shape::Compound {
                kind,
                name,
                children: self.children().iter().map(Self::shape).collect(),
            },
        }
    }
}

impl<T: ?Sized> fmt::Display for Predicate<T> {
    /// Writes the tree in operator form, e.g. `((even & positive) | !small)`.
    ///
    /// Named predicates print their name instead of their structure;
    /// unnamed leaves print as `rule`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.name() {
            return f.write_str(name);
        }
        match (self.kind(), self.children()) {
            (None, _) => f.write_str("rule"),
            (Some(CompoundKind::Inversion), [child]) => write!(f, "!{child}"),
            (Some(kind), _) => {
                f.write_str("(")?;
                for (i, child) in self.children().iter().enumerate() {
                    if i > 0 {
                        write!(f, " {} ", kind.symbol())?;
                    }
                    write!(f, "{child}")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl<T: ?Sized> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            None => f
                .debug_struct("Predicate")
                .field("name", &self.name())
                .finish_non_exhaustive(),
            Some(kind) => f
                .debug_struct("Predicate")
                .field("kind", &kind)
                .field("name", &self.name())
                .field("children", &self.children())
                .finish(),
        }
    }
}
