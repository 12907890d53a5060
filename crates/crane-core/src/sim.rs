//! Execution policy and crane run state.

use crate::error::ErrorKind;

// ---------------------------------------------------------------------------
// Execution policy
// ---------------------------------------------------------------------------

/// How a crane transfers the crates of one command. Chosen at crane
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ExecutionPolicy {
    /// One crate per lift. The moved group lands in reverse order.
    SingleCrateAtATime,

    /// The whole group in one lift. The moved group keeps its order.
    MultiCrateAtomic,
}

impl ExecutionPolicy {
    /// Both policies, in the order puzzles report them.
    pub const ALL: [ExecutionPolicy; 2] = [
        ExecutionPolicy::SingleCrateAtATime,
        ExecutionPolicy::MultiCrateAtomic,
    ];
}

// ---------------------------------------------------------------------------
// Run state
// ---------------------------------------------------------------------------

/// Why a crane stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum HaltReason {
    /// Every command was applied.
    Completed,
    /// The command at `command_index` (0-based) was rejected.
    Failed {
        command_index: usize,
        kind: ErrorKind,
    },
}

/// A crane is either applying commands or halted for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CraneState {
    Running,
    Halted(HaltReason),
}

impl CraneState {
    pub fn is_running(self) -> bool {
        matches!(self, CraneState::Running)
    }

    pub fn is_completed(self) -> bool {
        matches!(self, CraneState::Halted(HaltReason::Completed))
    }

    pub fn is_failed(self) -> bool {
        matches!(self, CraneState::Halted(HaltReason::Failed { .. }))
    }
}
