//! Shared test helpers for integration tests and benchmarks.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]` so these helpers
//! are available in unit tests, integration tests, and benchmarks (via the
//! `test-utils` feature).

use crate::command::MoveCommand;
use crate::item::{Crate, StackId};
use crate::stack::{Stack, StackCollection};

// ===========================================================================
// Sample puzzle
// ===========================================================================

/// The three-stack sample drawing, header last.
pub fn sample_drawing() -> Vec<&'static str> {
    vec!["    [D]", "[N] [C]", "[Z] [M] [P]", " 1   2   3"]
}

/// The four sample command lines.
pub fn sample_commands() -> Vec<&'static str> {
    vec![
        "move 1 from 2 to 1",
        "move 3 from 1 to 3",
        "move 2 from 2 to 1",
        "move 1 from 1 to 2",
    ]
}

/// The full sample input, drawing and commands separated by a blank line.
pub fn sample_input() -> String {
    let mut text = sample_drawing().join("\n");
    text.push_str("\n\n");
    text.push_str(&sample_commands().join("\n"));
    text.push('\n');
    text
}

/// The sample drawing, already parsed.
pub fn sample_stacks() -> StackCollection {
    stacks_from_columns(&["ZN", "MCD", "P"])
}

/// The sample commands, already parsed.
pub fn sample_move_commands() -> Vec<MoveCommand> {
    vec![
        MoveCommand::new(1, StackId(1), StackId(0)),
        MoveCommand::new(3, StackId(0), StackId(2)),
        MoveCommand::new(2, StackId(1), StackId(0)),
        MoveCommand::new(1, StackId(0), StackId(1)),
    ]
}

// ===========================================================================
// Builders
// ===========================================================================

/// Build stacks from bottom-to-top label strings, one per stack.
pub fn stacks_from_columns(columns: &[&str]) -> StackCollection {
    columns.iter().map(|c| Stack::from(*c)).collect()
}

/// Bottom-to-top label strings of every stack.
pub fn columns(stacks: &StackCollection) -> Vec<String> {
    stacks
        .iter()
        .map(|(_, s)| s.iter().map(Crate::label).collect())
        .collect()
}

/// A tall synthetic puzzle: `stack_count` stacks of `height` crates each,
/// and `command_count` commands that shuffle crates round-robin without
/// ever emptying a source below what it needs.
pub fn build_shuffle_puzzle(
    stack_count: usize,
    height: usize,
    command_count: usize,
) -> (StackCollection, Vec<MoveCommand>) {
    let labels: Vec<char> = ('A'..='Z').collect();
    let stacks: StackCollection = (0..stack_count)
        .map(|s| {
            (0..height)
                .map(|h| Crate(labels[(s + h) % labels.len()]))
                .collect::<Stack>()
        })
        .collect();

    let mut sizes = vec![height; stack_count];
    let mut commands = Vec::with_capacity(command_count);
    for i in 0..command_count {
        let source = i % stack_count;
        let dest = (i + 1) % stack_count;
        let count = (i % 3 + 1).min(sizes[source]);
        if count == 0 || source == dest {
            continue;
        }
        sizes[source] -= count;
        sizes[dest] += count;
        commands.push(MoveCommand::new(count, StackId(source), StackId(dest)));
    }
    (stacks, commands)
}
