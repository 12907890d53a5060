//! `move N from A to B` instructions.
//!
//! A command line is exactly six single-space separated tokens. Stack
//! numbers in the text are 1-based; [`MoveCommand`] stores 0-based
//! [`StackId`]s.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CraneError;
use crate::item::StackId;

/// One crane instruction: move `count` crates from `source` to `dest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveCommand {
    /// Number of crates to move. Always at least 1.
    pub count: usize,
    pub source: StackId,
    pub dest: StackId,
}

impl MoveCommand {
    pub fn new(count: usize, source: StackId, dest: StackId) -> Self {
        Self {
            count,
            source,
            dest,
        }
    }

    /// Parse a single line. `line_no` is only used for error reporting.
    pub fn parse_line(text: &str, line_no: usize) -> Result<Self, CraneError> {
        let malformed = |detail: &'static str| CraneError::MalformedCommand {
            line: line_no,
            text: text.to_string(),
            detail,
        };

        let tokens: Vec<&str> = text.split(' ').collect();
        let [verb, count, from, source, to, dest] = tokens.as_slice() else {
            return Err(malformed("expected 6 space-separated tokens"));
        };
        if *verb != "move" {
            return Err(malformed("expected 'move'"));
        }
        if *from != "from" {
            return Err(malformed("expected 'from'"));
        }
        if *to != "to" {
            return Err(malformed("expected 'to'"));
        }

        let count =
            parse_positive(count).ok_or_else(|| malformed("count is not a positive integer"))?;
        let source =
            parse_positive(source).ok_or_else(|| malformed("source is not a positive integer"))?;
        let dest = parse_positive(dest)
            .ok_or_else(|| malformed("destination is not a positive integer"))?;

        Ok(Self::new(count, StackId(source - 1), StackId(dest - 1)))
    }
}

fn parse_positive(token: &str) -> Option<usize> {
    token.parse::<usize>().ok().filter(|&n| n > 0)
}

impl FromStr for MoveCommand {
    type Err = CraneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_line(s, 1)
    }
}

impl fmt::Display for MoveCommand {
    /// The canonical line form, with 1-based stack numbers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "move {} from {} to {}", self.count, self.source, self.dest)
    }
}

/// Parse a block of command lines, failing on the first malformed one.
pub fn parse_commands<S: AsRef<str>>(lines: &[S]) -> Result<Vec<MoveCommand>, CraneError> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| MoveCommand::parse_line(line.as_ref(), i + 1))
        .collect()
}

// ===========================================================================
// Tests
// ===========================================================================
