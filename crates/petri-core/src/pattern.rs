//! Life 1.06 plain-text pattern reader.
//!
//! The format is one live cell per line as two whitespace-separated
//! integers, with `#` comment lines (including the `#Life 1.06` header)
//! and blank lines skipped.
//!
//! Malformed lines are a hard [`PatternError::Malformed`] rather than
//! being silently coerced to zero coordinates, so a bad file cannot
//! quietly seed a wrong cell.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::cell::Cell;

/// Errors produced while reading a Life 1.06 pattern.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// Reading the underlying file or stream failed.
    #[error("failed to read pattern: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// A non-comment line did not contain exactly two `i32` coordinates.
    #[error("line {line}: expected two integer coordinates, got {content:?}")]
    Malformed {
        /// 1-based line number of the offending line.
        line: usize,
        /// The offending line, trimmed.
        content: String,
    },
}

/// Parse a Life 1.06 stream into the list of live cells it describes.
///
/// Cells are returned in file order, duplicates included; deduplication
/// happens at seeding time ([`Colony::seed`]).
///
/// # Errors
///
/// Returns [`PatternError::Malformed`] for any non-blank, non-comment
/// line that is not exactly two `i32` values, and [`PatternError::Io`]
/// if the stream fails.
///
/// [`Colony::seed`]: crate::colony::Colony::seed
pub fn parse_life_106<R: BufRead>(reader: R) -> Result<Vec<Cell>, PatternError> {
    let mut cells = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let cell = parse_cell_line(trimmed).ok_or_else(|| PatternError::Malformed {
            line: index.saturating_add(1),
            content: trimmed.to_owned(),
        })?;
        cells.push(cell);
    }
    Ok(cells)
}

/// Read a Life 1.06 pattern file from disk.
///
/// # Errors
///
/// Returns [`PatternError::Io`] if the file cannot be opened or read,
/// or [`PatternError::Malformed`] for a bad line.
pub fn read_life_106(path: &Path) -> Result<Vec<Cell>, PatternError> {
    let file = File::open(path)?;
    let cells = parse_life_106(BufReader::new(file))?;
    debug!(path = %path.display(), cells = cells.len(), "pattern loaded");
    Ok(cells)
}

/// Parse exactly two whitespace-separated `i32` values.
fn parse_cell_line(line: &str) -> Option<Cell> {
    let mut fields = line.split_whitespace();
    let x = fields.next()?.parse().ok()?;
    let y = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(Cell::new(x, y))
}
