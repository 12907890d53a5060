//! Puzzle input and the per-policy solve driver.

use std::path::Path;

use crane_core::command::MoveCommand;
use crane_core::crane::{Crane, RunFailure};
use crane_core::event::CraneEvent;
use crane_core::item::Crate;
use crane_core::sim::ExecutionPolicy;
use crane_core::solve::{self, SolveError};

use crate::config::CraneConfig;
use crate::loader::{self, DataLoadError};

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Raw puzzle text, split into drawing lines (header last) and command
/// lines. Nothing is parsed yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleInput {
    pub drawing: Vec<String>,
    pub commands: Vec<String>,
}

impl PuzzleInput {
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self, DataLoadError> {
        let (drawing, commands) = loader::split_at_empty_line(lines)?;
        Ok(Self { drawing, commands })
    }

    pub fn parse(text: &str) -> Result<Self, DataLoadError> {
        let lines: Vec<&str> = text.lines().collect();
        Self::from_lines(&lines)
    }

    pub fn load(path: &Path) -> Result<Self, DataLoadError> {
        Self::from_lines(&loader::read_lines(path)?)
    }
}

// ---------------------------------------------------------------------------
// Answers
// ---------------------------------------------------------------------------

/// The outcome of one policy's run.
#[derive(Debug, Clone)]
pub struct PuzzleAnswer {
    pub policy: ExecutionPolicy,
    /// Top crate of every stack, empty stacks shown as the configured marker.
    pub answer: String,
    pub top_crates: Vec<Option<Crate>>,
    pub crates_moved: u64,
    /// Logged events, oldest first. Empty unless `event_capacity > 0`.
    pub events: Vec<CraneEvent>,
}

/// Solve `input` once per configured policy.
///
/// Every policy gets its own freshly parsed stacks. The first failure ends
/// the whole solve.
pub fn solve(
    input: &PuzzleInput,
    config: &CraneConfig,
) -> Result<Vec<PuzzleAnswer>, DataLoadError> {
    let commands = solve::commands(&input.commands).map_err(SolveError::from)?;
    config
        .policies
        .iter()
        .map(|&policy| solve_policy(input, &commands, policy, config))
        .collect()
}

fn solve_policy(
    input: &PuzzleInput,
    commands: &[MoveCommand],
    policy: ExecutionPolicy,
    config: &CraneConfig,
) -> Result<PuzzleAnswer, DataLoadError> {
    let stacks = solve::initial_stacks(&input.drawing).map_err(SolveError::from)?;
    let mut crane = Crane::with_event_capacity(stacks, policy, config.event_capacity);

    if let Err(error) = crane.run(commands) {
        let command_index = crane.commands_applied();
        return Err(SolveError::Run(RunFailure {
            command_index,
            command: commands[command_index],
            error,
            stacks: crane.into_stacks(),
        })
        .into());
    }

    let events = crane.events().iter().cloned().collect();

    Ok(PuzzleAnswer {
        policy,
        answer: crane.stacks().top_string(config.empty_marker),
        top_crates: crane.top_crates(),
        crates_moved: crane.crates_moved(),
        events,
    })
}

/// Load config from `config_dir` and the puzzle from `input_path`, then solve.
pub fn solve_file(
    input_path: &Path,
    config_dir: &Path,
) -> Result<Vec<PuzzleAnswer>, DataLoadError> {
    let config = crate::config::load_config(config_dir)?;
    let input = PuzzleInput::load(input_path)?;
    solve(&input, &config)
}
