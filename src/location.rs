//! Position and location tracking for scanned source text
//!
//! This module defines the data structures for describing where a token came
//! from: a begin/end position pair, the file it was read from (if any), and
//! the chain of file inclusions that were active when that file was entered.
//!
//! ## How locations flow through the runtime
//!
//! The generated scanner produces one [`Location`] per token, either by hand
//! or through [`PositionStack::location`](crate::scanner::PositionStack::location).
//! Tokens store their location at construction time and hand it back verbatim
//! when rendered, so the location is a pure value: nothing in the runtime
//! mutates or re-derives it after the scanner emits it.
//!
//! ## Diagnostic format
//!
//! `Location` implements [`fmt::Display`] as the canonical diagnostic string:
//!
//! ```text
//! file 'grammar.hoc', line 3, col 1 - line 3 col 8
//!     from file 'main.hoc', line 12
//! ```
//!
//! The first line carries the file clause (omitted entirely for anonymous
//! input) and the begin/end positions. Each inclusion entry then contributes
//! one indented `from file` line, in exactly the order the producer supplied.
//! Inclusion entries carry a column as well, but the formatter deliberately
//! renders only the file and line; consumers of the historical format depend
//! on that shape.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A line/column pair in scanned source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// One entry of an inclusion trail: the enclosing file and the position in it
/// where the inclusion happened.
///
/// The column is carried in the data but not rendered by the formatter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Inclusion {
    pub file: String,
    pub line: usize,
    pub column: usize,
}

impl Inclusion {
    pub fn new(file: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

/// The source location of a token: begin and end positions, the file it was
/// scanned from (`None` for anonymous input such as an in-memory string), and
/// the inclusion trail active when that file was entered.
///
/// The trail is stored outermost-last as supplied by the scanner; the
/// formatter preserves the stored order and never sorts or deduplicates it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub start: Position,
    pub end: Position,
    pub file: Option<String>,
    pub included_from: Vec<Inclusion>,
}

impl Location {
    pub fn new(
        start: Position,
        end: Position,
        file: Option<String>,
        included_from: Vec<Inclusion>,
    ) -> Self {
        Self {
            start,
            end,
            file,
            included_from,
        }
    }

    /// A location in anonymous input, with no file and no inclusion trail.
    pub fn anonymous(start: Position, end: Position) -> Self {
        Self::new(start, end, None, Vec::new())
    }

    /// A location in a named file, with no inclusion trail.
    pub fn in_file(start: Position, end: Position, file: impl Into<String>) -> Self {
        Self::new(start, end, Some(file.into()), Vec::new())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(file) = &self.file {
            write!(f, "file '{}', ", file)?;
        }
        write!(
            f,
            "line {}, col {} - line {} col {}",
            self.start.line, self.start.column, self.end.line, self.end.column
        )?;
        for entry in &self.included_from {
            write!(f, "\n    from file '{}', line {}", entry.file, entry.line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_location_format() {
        let location = Location::in_file(Position::new(1, 0), Position::new(1, 3), "foo.hoc");
        assert_eq!(
            location.to_string(),
            "file 'foo.hoc', line 1, col 0 - line 1 col 3"
        );
    }

    #[test]
    fn test_anonymous_location_omits_file_clause() {
        let location = Location::anonymous(Position::new(2, 5), Position::new(2, 5));
        assert_eq!(location.to_string(), "line 2, col 5 - line 2 col 5");
    }

    #[test]
    fn test_inclusion_trail_renders_file_and_line_only() {
        let location = Location::new(
            Position::new(2, 5),
            Position::new(2, 5),
            None,
            vec![Inclusion::new("bar.hoc", 10, 2)],
        );
        // Column 2 of the inclusion entry is carried but not rendered.
        assert_eq!(
            location.to_string(),
            "line 2, col 5 - line 2 col 5\n    from file 'bar.hoc', line 10"
        );
    }

    #[test]
    fn test_inclusion_trail_preserves_stored_order() {
        let location = Location::new(
            Position::new(1, 1),
            Position::new(1, 4),
            Some("inner.hoc".to_string()),
            vec![
                Inclusion::new("middle.hoc", 7, 1),
                Inclusion::new("outer.hoc", 3, 9),
            ],
        );
        assert_eq!(
            location.to_string(),
            "file 'inner.hoc', line 1, col 1 - line 1 col 4\n    \
             from file 'middle.hoc', line 7\n    \
             from file 'outer.hoc', line 3"
        );
    }

    #[test]
    fn test_location_serde_round_trip() {
        let location = Location::new(
            Position::new(4, 2),
            Position::new(4, 9),
            Some("foo.hoc".to_string()),
            vec![Inclusion::new("bar.hoc", 1, 1)],
        );
        let json = serde_json::to_string(&location).unwrap();
        let back: Location = serde_json::from_str(&json).unwrap();
        assert_eq!(back, location);
    }
}
