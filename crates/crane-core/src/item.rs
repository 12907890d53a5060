//! Crate labels and stack positions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single crate, identified only by the character painted on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Crate(pub char);

impl Crate {
    /// The character painted on the crate.
    pub fn label(self) -> char {
        self.0
    }
}

impl From<char> for Crate {
    fn from(c: char) -> Self {
        Crate(c)
    }
}

impl fmt::Display for Crate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of a stack in a [`StackCollection`](crate::stack::StackCollection).
///
/// Stored 0-based; displayed 1-based to match the diagram header and the
/// command text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StackId(pub usize);

impl StackId {
    pub fn index(self) -> usize {
        self.0
    }

    /// The 1-based number used in diagrams and command lines.
    pub fn number(self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for StackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
