//! Line-level entry points: from raw drawing and command lines to the
//! top-crate answer.
//!
//! Each run needs its own freshly parsed stacks; a simulated collection is
//! never reused for a second policy.

use crate::command::{self, MoveCommand};
use crate::crane::{self, RunFailure};
use crate::diagram;
use crate::error::CraneError;
use crate::item::Crate;
use crate::sim::ExecutionPolicy;
use crate::stack::StackCollection;

/// Parse the drawing (content lines plus header) into its initial stacks.
pub fn initial_stacks<S: AsRef<str>>(drawing_lines: &[S]) -> Result<StackCollection, CraneError> {
    diagram::parse_diagram(drawing_lines)
}

/// Parse every command line.
pub fn commands<S: AsRef<str>>(command_lines: &[S]) -> Result<Vec<MoveCommand>, CraneError> {
    command::parse_commands(command_lines)
}

/// Apply `commands` to `stacks` under `policy`.
pub fn simulate(
    stacks: StackCollection,
    commands: &[MoveCommand],
    policy: ExecutionPolicy,
) -> Result<StackCollection, RunFailure> {
    crane::simulate(stacks, commands, policy)
}

/// The top crate of every stack, `None` for empty stacks.
pub fn top_crates(stacks: &StackCollection) -> Vec<Option<Crate>> {
    stacks.top_crates()
}

/// Any failure between raw lines and an answer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    #[error(transparent)]
    Parse(#[from] CraneError),
    #[error(transparent)]
    Run(#[from] RunFailure),
}

impl SolveError {
    /// The underlying crane error, whichever stage raised it.
    pub fn crane_error(&self) -> &CraneError {
        match self {
            SolveError::Parse(err) => err,
            SolveError::Run(failure) => &failure.error,
        }
    }
}

/// Parse, simulate and report in one call. Empty stacks show as
/// `empty_marker`.
pub fn solve<S: AsRef<str>, T: AsRef<str>>(
    drawing_lines: &[S],
    command_lines: &[T],
    policy: ExecutionPolicy,
    empty_marker: char,
) -> Result<String, SolveError> {
    let stacks = initial_stacks(drawing_lines)?;
    let commands = commands(command_lines)?;
    let stacks = simulate(stacks, &commands, policy)?;
    Ok(stacks.top_string(empty_marker))
}
