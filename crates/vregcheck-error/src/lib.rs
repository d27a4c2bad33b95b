//! vregcheck-error - Diagnostics for the vregcheck IR linter
//!
//! This crate holds the pieces shared by the linter and its CLI:
//! locations inside an IR dump, compiler-style diagnostics and their
//! renderer, and the error type for input failures.
//!
//! # Example
//!
//! ```rust
//! use vregcheck_error::{Diagnostic, DiagnosticRenderer, ErrorCode, SourceCache};
//!
//! let mut cache = SourceCache::new();
//! let file_id = cache.add("dump.ir", "function f $0() : i32 {\n  return %0\n}\n");
//! let span = cache.span(file_id, 33, 2).unwrap();
//!
//! let diagnostic = Diagnostic::error("register `%0` is used without a declaration")
//!     .with_code(ErrorCode::UNDECLARED_REGISTER)
//!     .with_label(span, "used here");
//!
//! let renderer = DiagnosticRenderer::new(&cache).without_colors();
//! println!("{}", renderer.render(&diagnostic));
//! ```

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{
    Diagnostic, DiagnosticRenderer, ErrorCode, Label, Level, SourceCache, SourceFile,
};
pub use error::LintError;
pub use span::{Position, Span};

/// Result type for operations that can fail before the scan starts
pub type Result<T> = std::result::Result<T, LintError>;

/// Diagnostics accumulated for a single run
#[derive(Debug, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.items.iter().any(|d| d.level == Level::Error)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    /// Renders all diagnostics, separated by blank lines
    pub fn render(&self, renderer: &DiagnosticRenderer<'_>) -> String {
        self.items
            .iter()
            .map(|d| renderer.render(d))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
