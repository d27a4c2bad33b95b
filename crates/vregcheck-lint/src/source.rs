//! Loader - obtains the IR text from a file or standard input

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use vregcheck_error::{LintError, Result};

/// Where the IR text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    File(PathBuf),
    Stdin,
}

impl Input {
    /// Exactly one path argument selects the file; none, or more than
    /// one, selects standard input
    pub fn from_args(mut paths: Vec<PathBuf>) -> Self {
        match paths.len() {
            1 => Input::File(paths.remove(0)),
            _ => Input::Stdin,
        }
    }

    /// Name used in diagnostics
    pub fn display_name(&self) -> String {
        match self {
            Input::File(path) => path.display().to_string(),
            Input::Stdin => "<stdin>".to_string(),
        }
    }

    /// Reads the whole input into memory
    pub fn load(&self) -> Result<String> {
        let source = match self {
            Input::File(path) => read_file(path)?,
            Input::Stdin => read_from(io::stdin().lock()).map_err(LintError::ReadStdin)?,
        };

        tracing::info!("loaded {} bytes from {}", source.len(), self.display_name());
        Ok(source)
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| LintError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a stream to its end and returns it as one string
pub fn read_from<R: Read>(mut reader: R) -> io::Result<String> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    Ok(source)
}
