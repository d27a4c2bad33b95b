//! Span - Location of a token inside an IR dump
//!
//! Findings point at the register token that triggered them, so the
//! explain output can quote the offending line.

/// A position in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Line (1-indexed)
    pub line: u32,
    /// Column (1-indexed, counted in bytes)
    pub column: u32,
    /// Byte offset from the beginning of the text
    pub offset: usize,
}

impl Position {
    pub fn new(line: u32, column: u32, offset: usize) -> Self {
        Self { line, column, offset }
    }
}

/// A region of the source text (start to end, end exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
    /// Id of the file inside a `SourceCache`
    pub file_id: u32,
}

impl Span {
    pub fn new(start: Position, end: Position, file_id: u32) -> Self {
        Self { start, end, file_id }
    }

    /// Returns the length in bytes
    pub fn len(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of columns to underline when rendering. Never zero.
    pub fn width(&self) -> usize {
        if self.start.line == self.end.line {
            (self.end.column.saturating_sub(self.start.column)).max(1) as usize
        } else {
            1
        }
    }
}
