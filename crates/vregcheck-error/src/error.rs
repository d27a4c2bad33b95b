//! Failures that stop a lint run before any scanning happens

use crate::diagnostic::{Diagnostic, ErrorCode};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while obtaining the IR text
#[derive(Debug, Error)]
pub enum LintError {
    #[error("failed to read '{}': {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read standard input: {0}")]
    ReadStdin(#[source] io::Error),
}

impl LintError {
    pub fn code(&self) -> ErrorCode {
        match self {
            LintError::ReadFile { .. } => ErrorCode::READ_FILE,
            LintError::ReadStdin(_) => ErrorCode::READ_STDIN,
        }
    }
}

impl From<LintError> for Diagnostic {
    fn from(e: LintError) -> Self {
        let code = e.code();
        Diagnostic::error(e.to_string()).with_code(code)
    }
}
