//! Diagnostic - compiler-style messages for lint findings
//!
//! A diagnostic carries:
//! - Severity and a structured code (ER001, EI001, ...)
//! - An optional label pointing into the IR text
//! - Notes and help lines

use crate::span::{Position, Span};
use std::fmt;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// A finding or failure that makes the run unsuccessful
    Error,
    /// Informational, does not change the outcome
    Warning,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
        }
    }

    /// ANSI escape used for the level prefix
    pub fn color_code(&self) -> &'static str {
        match self {
            Level::Error => "\x1b[1;31m",   // Bold Red
            Level::Warning => "\x1b[1;33m", // Bold Yellow
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured error code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorCode {
    /// Category (R = Register, I = Input, S = Scan)
    pub category: char,
    pub number: u16,
}

impl ErrorCode {
    pub const fn new(category: char, number: u16) -> Self {
        Self { category, number }
    }

    // Register findings
    pub const UNDECLARED_REGISTER: Self = Self::new('R', 1);

    // Input errors
    pub const READ_FILE: Self = Self::new('I', 1);
    pub const READ_STDIN: Self = Self::new('I', 2);

    // Scan progress
    pub const SEGMENTS_NOT_SCANNED: Self = Self::new('S', 1);
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}{:03}", self.category, self.number)
    }
}

/// A label pointing at a region of the IR text
#[derive(Debug, Clone)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

impl Label {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}

/// A complete diagnostic
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub level: Level,
    pub code: Option<ErrorCode>,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
    pub help: Vec<String>,
}

impl Diagnostic {
    fn with_level(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            code: None,
            message: message.into(),
            labels: Vec::new(),
            notes: Vec::new(),
            help: Vec::new(),
        }
    }

    /// Creates a new error
    pub fn error(message: impl Into<String>) -> Self {
        Self::with_level(Level::Error, message)
    }

    /// Creates a new warning
    pub fn warning(message: impl Into<String>) -> Self {
        Self::with_level(Level::Warning, message)
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::new(span, message));
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }
}

/// Keeps the loaded IR text around so diagnostics can quote it
#[derive(Debug, Default)]
pub struct SourceCache {
    files: Vec<SourceFile>,
}

#[derive(Debug)]
pub struct SourceFile {
    pub name: String,
    pub source: String,
    /// Byte offset where each line starts
    line_starts: Vec<usize>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        let source = source.into();
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();

        Self {
            name: name.into(),
            source,
            line_starts,
        }
    }

    /// Returns the text of a 1-indexed line, without its line terminator
    pub fn get_line(&self, line: u32) -> Option<&str> {
        let line_idx = line.checked_sub(1)? as usize;
        let start = *self.line_starts.get(line_idx)?;
        let end = self
            .line_starts
            .get(line_idx + 1)
            .map(|&e| e.saturating_sub(1))
            .unwrap_or(self.source.len());

        let text = self.source.get(start..end)?;
        Some(text.strip_suffix('\r').unwrap_or(text))
    }

    /// Converts a byte offset into a line/column position.
    /// Offsets past the end clamp to the end of the text.
    pub fn position_at(&self, offset: usize) -> Position {
        let offset = offset.min(self.source.len());
        let line_idx = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let line_start = self.line_starts[line_idx];

        Position::new(
            line_idx as u32 + 1,
            (offset - line_start) as u32 + 1,
            offset,
        )
    }
}

impl SourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file and returns its id
    pub fn add(&mut self, name: impl Into<String>, source: impl Into<String>) -> u32 {
        let id = self.files.len() as u32;
        self.files.push(SourceFile::new(name, source));
        id
    }

    pub fn get(&self, id: u32) -> Option<&SourceFile> {
        self.files.get(id as usize)
    }

    /// Builds the span covering `len` bytes starting at `offset` in file `id`
    pub fn span(&self, id: u32, offset: usize, len: usize) -> Option<Span> {
        let file = self.get(id)?;
        Some(Span::new(
            file.position_at(offset),
            file.position_at(offset + len),
            id,
        ))
    }
}

/// Renders diagnostics in a rustc-like layout
pub struct DiagnosticRenderer<'a> {
    cache: &'a SourceCache,
    use_colors: bool,
}

impl<'a> DiagnosticRenderer<'a> {
    pub fn new(cache: &'a SourceCache) -> Self {
        Self {
            cache,
            use_colors: true,
        }
    }

    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn render(&self, diagnostic: &Diagnostic) -> String {
        let mut output = String::new();

        let paint = |code: &'static str| if self.use_colors { code } else { "" };
        let reset = paint("\x1b[0m");
        let bold = paint("\x1b[1m");
        let blue = paint("\x1b[1;34m");
        let green = paint("\x1b[1;32m");
        let color = if self.use_colors {
            diagnostic.level.color_code()
        } else {
            ""
        };

        // error[ER001]: message
        output.push_str(color);
        output.push_str(diagnostic.level.as_str());
        if let Some(code) = &diagnostic.code {
            output.push('[');
            output.push_str(&code.to_string());
            output.push(']');
        }
        output.push_str(reset);
        output.push_str(bold);
        output.push_str(": ");
        output.push_str(&diagnostic.message);
        output.push_str(reset);
        output.push('\n');

        for label in &diagnostic.labels {
            let Some(file) = self.cache.get(label.span.file_id) else {
                continue;
            };

            output.push_str(&format!(
                " {}-->{} {}:{}:{}\n",
                blue, reset, file.name, label.span.start.line, label.span.start.column
            ));

            if let Some(line_content) = file.get_line(label.span.start.line) {
                let line_num = label.span.start.line;
                let padding = " ".repeat(line_num.to_string().len());

                output.push_str(&format!(" {} {}|{}\n", padding, blue, reset));
                output.push_str(&format!(
                    " {}{}{} | {}\n",
                    blue, line_num, reset, line_content
                ));

                let spaces = " ".repeat((label.span.start.column as usize).saturating_sub(1));
                let underline = "^".repeat(label.span.width());
                output.push_str(&format!(
                    " {} {}|{} {}{}{} {}{}\n",
                    padding, blue, reset, spaces, color, underline, label.message, reset
                ));
            }
        }

        for note in &diagnostic.notes {
            output.push_str(&format!("   = {}note{}: {}\n", bold, reset, note));
        }

        for help in &diagnostic.help {
            output.push_str(&format!("   = {}help{}: {}\n", green, reset, help));
        }

        output
    }
}
