//! Reading puzzle input and data files.
//!
//! Provides the blank-line split between drawing and commands for puzzle
//! text, and format lookup for the RON/TOML/JSON config file.

use crane_core::solve::SolveError;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that can occur during data loading.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// Puzzle input has no blank line between drawing and commands.
    #[error("no blank line separates the drawing from the commands")]
    MissingSeparator,

    /// The file has an extension we don't support.
    #[error("unsupported format for file: {file}")]
    UnsupportedFormat { file: PathBuf },

    /// Two files with the same base name but different formats exist.
    #[error("conflicting formats: {a} and {b}")]
    ConflictingFormats { a: PathBuf, b: PathBuf },

    /// A deserialization error occurred.
    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The puzzle parsed badly or its run failed.
    #[error(transparent)]
    Solve(#[from] SolveError),
}

// ===========================================================================
// Puzzle text
// ===========================================================================

/// Split raw lines at the first blank line into (drawing, commands).
///
/// The blank line itself belongs to neither part. Blank lines at the end
/// of the command part are dropped; anything else is passed through
/// untouched, leading spaces included.
pub fn split_at_empty_line<S: AsRef<str>>(
    lines: &[S],
) -> Result<(Vec<String>, Vec<String>), DataLoadError> {
    let split = lines
        .iter()
        .position(|line| line.as_ref().trim().is_empty())
        .ok_or(DataLoadError::MissingSeparator)?;

    let drawing = lines[..split]
        .iter()
        .map(|l| l.as_ref().to_string())
        .collect();

    let mut commands: Vec<String> = lines[split + 1..]
        .iter()
        .map(|l| l.as_ref().to_string())
        .collect();
    while commands.last().is_some_and(|l| l.trim().is_empty()) {
        commands.pop();
    }

    Ok((drawing, commands))
}

/// Read a text file into lines, line terminators removed.
pub fn read_lines(path: &Path) -> Result<Vec<String>, DataLoadError> {
    let content = std::fs::read_to_string(path)?;
    Ok(content.lines().map(str::to_string).collect())
}

// ===========================================================================
// Config formats
// ===========================================================================

/// Supported config formats, looked up by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ron,
    Toml,
    Json,
}

impl Format {
    /// Every format, in lookup order.
    pub const ALL: [Format; 3] = [Format::Ron, Format::Toml, Format::Json];

    pub fn extension(self) -> &'static str {
        match self {
            Format::Ron => "ron",
            Format::Toml => "toml",
            Format::Json => "json",
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, DataLoadError> {
        let ext = path.extension().and_then(|e| e.to_str());
        Self::ALL
            .into_iter()
            .find(|format| Some(format.extension()) == ext)
            .ok_or_else(|| DataLoadError::UnsupportedFormat {
                file: path.to_path_buf(),
            })
    }

    /// Deserialize `content`; the error is the parser's message.
    pub fn parse<T: DeserializeOwned>(self, content: &str) -> Result<T, String> {
        match self {
            Format::Ron => ron::from_str(content).map_err(|e| e.to_string()),
            Format::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            Format::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

/// The `{base_name}.{ron,toml,json}` file in `dir`, if exactly one exists.
///
/// Two or more formats for the same name are a `ConflictingFormats` error.
pub fn locate(dir: &Path, base_name: &str) -> Result<Option<PathBuf>, DataLoadError> {
    let mut present = Format::ALL
        .into_iter()
        .map(|format| dir.join(format!("{base_name}.{}", format.extension())))
        .filter(|path| path.is_file());

    let Some(first) = present.next() else {
        return Ok(None);
    };
    match present.next() {
        Some(second) => Err(DataLoadError::ConflictingFormats {
            a: first,
            b: second,
        }),
        None => Ok(Some(first)),
    }
}

/// Read and deserialize a file in the format its extension names.
pub fn read_file<T: DeserializeOwned>(path: &Path) -> Result<T, DataLoadError> {
    let format = Format::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    format.parse(&content).map_err(|detail| DataLoadError::Parse {
        file: path.to_path_buf(),
        detail,
    })
}

// ===========================================================================
// Tests
// ===========================================================================
