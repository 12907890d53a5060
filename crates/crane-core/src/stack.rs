//! LIFO crate stacks and the fixed-size collection the crane works on.
//!
//! A [`Stack`] only exposes its top crate for mutation. A
//! [`StackCollection`] is sized once, when the diagram is parsed, and keeps
//! that size for the rest of the run: stacks are emptied, never removed.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CraneError;
use crate::item::{Crate, StackId};

// ---------------------------------------------------------------------------
// Stack
// ---------------------------------------------------------------------------

/// An ordered pile of crates. Index 0 is the bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stack {
    crates: Vec<Crate>,
}

impl Stack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self { crates: Vec::new() }
    }

    /// Place a crate on top.
    pub fn push(&mut self, item: Crate) {
        self.crates.push(item);
    }

    /// Remove and return the top crate.
    pub fn pop(&mut self) -> Result<Crate, CraneError> {
        self.crates.pop().ok_or(CraneError::EmptyStack {
            requested: 1,
            available: 0,
        })
    }

    /// The top crate, or `None` for an empty stack.
    pub fn peek(&self) -> Option<Crate> {
        self.crates.last().copied()
    }

    /// Number of crates on the stack.
    pub fn size(&self) -> usize {
        self.crates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crates.is_empty()
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Crate> + ExactSizeIterator + '_ {
        self.crates.iter().copied()
    }

    /// Crate at `height` above the floor (0 = bottom).
    pub fn at_height(&self, height: usize) -> Option<Crate> {
        self.crates.get(height).copied()
    }
}

impl FromIterator<Crate> for Stack {
    /// Builds a stack bottom to top.
    fn from_iter<I: IntoIterator<Item = Crate>>(iter: I) -> Self {
        Self {
            crates: iter.into_iter().collect(),
        }
    }
}

impl From<&str> for Stack {
    /// `"ZN"` is a stack with `Z` at the bottom and `N` on top.
    fn from(labels: &str) -> Self {
        labels.chars().map(Crate).collect()
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.crates.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "]")
    }
}

// ---------------------------------------------------------------------------
// StackCollection
// ---------------------------------------------------------------------------

/// The stacks of one simulation, indexed from 0. The length is fixed at
/// construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StackCollection {
    stacks: Vec<Stack>,
}

impl StackCollection {
    /// Create `len` empty stacks.
    pub fn with_len(len: usize) -> Self {
        Self {
            stacks: vec![Stack::new(); len],
        }
    }

    /// Number of stacks.
    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    pub fn get(&self, id: StackId) -> Option<&Stack> {
        self.stacks.get(id.0)
    }

    /// Bounds-checked access.
    pub fn stack(&self, id: StackId) -> Result<&Stack, CraneError> {
        let len = self.len();
        self.stacks
            .get(id.0)
            .ok_or(CraneError::IndexOutOfRange { stack: id, len })
    }

    /// Bounds-checked mutable access.
    pub fn stack_mut(&mut self, id: StackId) -> Result<&mut Stack, CraneError> {
        let len = self.len();
        self.stacks
            .get_mut(id.0)
            .ok_or(CraneError::IndexOutOfRange { stack: id, len })
    }

    /// Mutable access to two distinct stacks at once.
    ///
    /// Returns `None` when `a == b`. Both ids must already be in range.
    pub(crate) fn pair_mut(&mut self, a: StackId, b: StackId) -> Option<(&mut Stack, &mut Stack)> {
        if a == b || a.0 >= self.len() || b.0 >= self.len() {
            return None;
        }
        if a.0 < b.0 {
            let (low, high) = self.stacks.split_at_mut(b.0);
            Some((&mut low[a.0], &mut high[0]))
        } else {
            let (low, high) = self.stacks.split_at_mut(a.0);
            Some((&mut high[0], &mut low[b.0]))
        }
    }

    /// Iterate stacks in index order together with their ids.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (StackId, &Stack)> + '_ {
        self.stacks.iter().enumerate().map(|(i, s)| (StackId(i), s))
    }

    /// The top crate of every stack, in index order. Empty stacks yield `None`.
    pub fn top_crates(&self) -> Vec<Option<Crate>> {
        self.stacks.iter().map(Stack::peek).collect()
    }

    /// The top crates as an answer string, with `empty_marker` standing in
    /// for empty stacks.
    pub fn top_string(&self, empty_marker: char) -> String {
        self.stacks
            .iter()
            .map(|s| s.peek().map_or(empty_marker, Crate::label))
            .collect()
    }

    /// Total number of crates across all stacks.
    pub fn total_crates(&self) -> usize {
        self.stacks.iter().map(Stack::size).sum()
    }

    /// Height of the tallest stack.
    pub fn max_height(&self) -> usize {
        self.stacks.iter().map(Stack::size).max().unwrap_or(0)
    }
}

impl FromIterator<Stack> for StackCollection {
    fn from_iter<I: IntoIterator<Item = Stack>>(iter: I) -> Self {
        Self {
            stacks: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for StackCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, stack) in self.iter() {
            writeln!(f, "{id}: {stack}")?;
        }
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
