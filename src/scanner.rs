//! Scanner-side position tracking across nested file inclusion
//!
//! A generated scanner needs to know, for every token it emits, where that
//! token began and ended, and which chain of `include`-style directives led
//! to the file being scanned. This module provides that bookkeeping so the
//! scanner only has to report the text it consumed and the files it enters
//! and leaves.
//!
//! [`ScanPosition`] tracks line and column (both 1-based) within a single
//! input, remembering the position before the most recent
//! [`advance`](ScanPosition::advance) so a token's begin position is always
//! at hand. [`PositionStack`] stacks one `ScanPosition` per open input: the
//! scanner pushes when it enters an included file, pops when the file ends,
//! and calls [`location`](PositionStack::location) to snapshot the current
//! token's [`Location`], inclusion trail included.
//!
//! Opening files and switching scan buffers stays with the generated
//! scanner; the stack tracks positions only.

use crate::error::ScanError;
use crate::location::{Inclusion, Location, Position};

/// Line/column tracking within one open input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanPosition {
    file: Option<String>,
    line: usize,
    column: usize,
    prev_line: usize,
    prev_column: usize,
}

impl ScanPosition {
    fn new(file: Option<String>) -> Self {
        Self {
            file,
            line: 1,
            column: 1,
            prev_line: 1,
            prev_column: 1,
        }
    }

    /// Start tracking anonymous input (an in-memory string).
    pub fn for_input() -> Self {
        Self::new(None)
    }

    /// Start tracking a named file.
    pub fn for_file(name: impl Into<String>) -> Self {
        Self::new(Some(name.into()))
    }

    /// Advance past `text`, recording the pre-advance position as the begin
    /// of the token being scanned. A newline moves to column 1 of the next
    /// line; every other character advances the column by one.
    pub fn advance(&mut self, text: &str) {
        self.prev_line = self.line;
        self.prev_column = self.column;
        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// The token location implied by the last `advance`: begin at the
    /// pre-advance position, end at the column just before the current one.
    fn token_span(&self) -> (Position, Position) {
        (
            Position::new(self.prev_line, self.prev_column),
            Position::new(self.line, self.column.saturating_sub(1)),
        )
    }
}

/// The stack of open inputs, innermost on top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionStack {
    stack: Vec<ScanPosition>,
}

impl PositionStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open anonymous input on top of the stack.
    pub fn push_input(&mut self) {
        self.stack.push(ScanPosition::for_input());
    }

    /// Open a named file on top of the stack.
    pub fn push_file(&mut self, name: impl Into<String>) {
        self.stack.push(ScanPosition::for_file(name));
    }

    /// Close the innermost input. Returns `false` once the stack is empty,
    /// which is the scanner's signal that the whole scan is over.
    pub fn pop(&mut self) -> bool {
        self.stack.pop();
        !self.stack.is_empty()
    }

    /// Number of open inputs.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn current(&self) -> Option<&ScanPosition> {
        self.stack.last()
    }

    /// Advance the innermost input past `text`.
    pub fn advance(&mut self, text: &str) -> Result<(), ScanError> {
        let top = self.stack.last_mut().ok_or(ScanError::NotScanning)?;
        top.advance(text);
        Ok(())
    }

    /// Snapshot the current token's location: the innermost input supplies
    /// begin/end and the file clause, and each enclosing input contributes
    /// one inclusion entry, innermost enclosing first.
    pub fn location(&self) -> Result<Location, ScanError> {
        let top = self.stack.last().ok_or(ScanError::NotScanning)?;
        let (start, end) = top.token_span();
        let included_from = self.stack[..self.stack.len() - 1]
            .iter()
            .rev()
            .map(|enclosing| {
                // Anonymous enclosing input keeps the historical "-" name in
                // the trail, where there is no way to omit the file clause.
                let file = enclosing.file.clone().unwrap_or_else(|| "-".to_string());
                Inclusion::new(file, enclosing.line, enclosing.column)
            })
            .collect();
        Ok(Location::new(start, end, top.file.clone(), included_from))
    }
}
