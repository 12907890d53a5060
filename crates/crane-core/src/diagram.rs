//! Fixed-width crate drawing parser and renderer.
//!
//! A drawing looks like this:
//!
//! ```text
//!     [D]
//! [N] [C]
//! [Z] [M] [P]
//!  1   2   3
//! ```
//!
//! Every stack occupies a four-character column. The crate label of stack
//! `k` sits at character offset `4 * k + 1`, right after its opening `[`.
//! The last line is the header; it is only used to count stacks.

use crate::error::CraneError;
use crate::item::{Crate, StackId};
use crate::stack::{Stack, StackCollection};

/// Width of one stack column in the drawing, separator included.
pub const COLUMN_WIDTH: usize = 4;

/// Parse a drawing (content lines followed by the header line) into stacks.
///
/// Content lines are applied bottom to top, so each stack ends up in the
/// order it is drawn. Lines shorter than the header are fine; their missing
/// slots are empty.
pub fn parse_diagram<S: AsRef<str>>(lines: &[S]) -> Result<StackCollection, CraneError> {
    let Some((header, content)) = lines.split_last() else {
        return Err(CraneError::MalformedDiagram {
            line: 0,
            detail: "drawing has no header line".to_string(),
        });
    };

    let header_line = lines.len();
    let count = count_stacks(header.as_ref());
    if count == 0 {
        return Err(CraneError::MalformedDiagram {
            line: header_line,
            detail: "header line has no stack markers".to_string(),
        });
    }

    let mut stacks = StackCollection::with_len(count);
    for (i, line) in content.iter().enumerate().rev() {
        parse_row(line.as_ref(), i + 1, &mut stacks)?;
    }
    Ok(stacks)
}

/// Number of stacks announced by a header line.
///
/// Markers are the whitespace-separated tokens, so ` 1   2  ...  10 ` counts
/// ten stacks.
pub fn count_stacks(header: &str) -> usize {
    header.split_whitespace().count()
}

fn parse_row(line: &str, line_no: usize, stacks: &mut StackCollection) -> Result<(), CraneError> {
    let mut chars = line.chars().enumerate().peekable();
    while let Some((pos, c)) = chars.next() {
        if c != '[' {
            continue;
        }
        let Some(&(label_pos, label)) = chars.peek() else {
            return Err(CraneError::MalformedDiagram {
                line: line_no,
                detail: format!("unterminated crate at column {}", pos + 1),
            });
        };
        if label.is_whitespace() || label == '[' || label == ']' {
            return Err(CraneError::MalformedDiagram {
                line: line_no,
                detail: format!("invalid crate label {label:?} at column {}", label_pos + 1),
            });
        }

        let column = label_pos / COLUMN_WIDTH;
        if column >= stacks.len() {
            return Err(CraneError::MalformedDiagram {
                line: line_no,
                detail: format!(
                    "crate '{label}' in column {} but header declares {} stacks",
                    column + 1,
                    stacks.len()
                ),
            });
        }
        stacks.stack_mut(StackId(column))?.push(Crate(label));
    }
    Ok(())
}

/// Render stacks back into a drawing that [`parse_diagram`] accepts.
///
/// Rows are emitted top to bottom with trailing whitespace trimmed, followed
/// by the 1-based header.
pub fn render_diagram(stacks: &StackCollection) -> Vec<String> {
    let height = stacks.max_height();
    let mut lines = Vec::with_capacity(height + 1);

    for level in (0..height).rev() {
        let row: Vec<String> = stacks
            .iter()
            .map(|(_, stack)| render_slot(stack, level))
            .collect();
        lines.push(row.join(" ").trim_end().to_string());
    }

    let header: Vec<String> = stacks
        .iter()
        .map(|(id, _)| format!("{:^3}", id.number()))
        .collect();
    lines.push(header.join(" ").trim_end().to_string());
    lines
}

fn render_slot(stack: &Stack, level: usize) -> String {
    match stack.at_height(level) {
        Some(c) => format!("[{c}]"),
        None => "   ".to_string(),
    }
}

// ===========================================================================
// Tests
// ===========================================================================
