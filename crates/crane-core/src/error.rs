//! Error types shared by the parsers and the simulator.

use crate::item::StackId;

/// Errors raised while parsing input or moving crates.
///
/// Every failure is reported at the point of detection and never repaired.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CraneError {
    /// The drawing is inconsistent with its header or unreadable.
    #[error("malformed diagram at line {line}: {detail}")]
    MalformedDiagram { line: usize, detail: String },

    /// A command line does not have the `move N from A to B` shape.
    #[error("malformed command at line {line} ('{text}'): {detail}")]
    MalformedCommand {
        line: usize,
        text: String,
        detail: &'static str,
    },

    /// A command references a stack that does not exist.
    #[error("stack {stack} out of range ({len} stacks)")]
    IndexOutOfRange { stack: StackId, len: usize },

    /// Fewer crates are available than a pop requires.
    #[error("cannot remove {requested} crate(s), only {available} available")]
    EmptyStack { requested: usize, available: usize },

    /// A command was applied to a crane that has already halted.
    #[error("crane has halted; no further commands are applied")]
    Halted,
}

/// Discriminant tag for [`CraneError`], used by callers that only care
/// about the category of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    MalformedDiagram,
    MalformedCommand,
    IndexOutOfRange,
    EmptyStack,
    Halted,
}

impl CraneError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CraneError::MalformedDiagram { .. } => ErrorKind::MalformedDiagram,
            CraneError::MalformedCommand { .. } => ErrorKind::MalformedCommand,
            CraneError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            CraneError::EmptyStack { .. } => ErrorKind::EmptyStack,
            CraneError::Halted => ErrorKind::Halted,
        }
    }
}
