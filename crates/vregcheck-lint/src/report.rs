//! Reporter - the text printed for the first offending function

use crate::scan::Finding;
use std::fmt;
use std::io::{self, Write};
use vregcheck_error::{Diagnostic, Diagnostics, ErrorCode, SourceCache};

/// Exit code for a dump with at least one flagged register
pub const VIOLATION_EXIT_CODE: i32 = 127;

/// Flagged registers of one function segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Index of the segment in the full split list
    pub segment_index: usize,
    pub findings: Vec<Finding>,
    /// Segments after this one, left unscanned
    pub unscanned: usize,
}

impl Report {
    pub fn registers(&self) -> impl Iterator<Item = &str> {
        self.findings.iter().map(|f| f.register.as_str())
    }

    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "{self}")?;
        out.flush()
    }

    /// One diagnostic per finding, plus a warning when scanning stopped
    /// with segments left over
    pub fn diagnostics(&self, cache: &SourceCache, file_id: u32) -> Diagnostics {
        let mut diags = Diagnostics::new();

        for finding in &self.findings {
            let mut diag = Diagnostic::error(format!(
                "register `{}` is used without a declaration",
                finding.register
            ))
            .with_code(ErrorCode::UNDECLARED_REGISTER)
            .with_note(format!("in function {}", self.segment_index))
            .with_help(format!("declare it as `{} : <type>`", finding.register));

            if let Some(span) = cache.span(file_id, finding.offset, finding.register.len()) {
                diag = diag.with_label(span, "used here");
            }
            diags.push(diag);
        }

        if self.unscanned > 0 {
            diags.push(
                Diagnostic::warning(format!(
                    "{} later segment(s) were not scanned",
                    self.unscanned
                ))
                .with_code(ErrorCode::SEGMENTS_NOT_SCANNED)
                .with_note("scanning stops at the first function with bad registers"),
            );
        }

        diags
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Function {} Bad IR Registers: ", self.segment_index)?;
        for register in self.registers() {
            writeln!(f, "{}", register)?;
        }
        Ok(())
    }
}

/// Result of checking a whole dump
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    Violation(Report),
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Clean => 0,
            Outcome::Violation(_) => VIOLATION_EXIT_CODE,
        }
    }

    pub fn report(&self) -> Option<&Report> {
        match self {
            Outcome::Clean => None,
            Outcome::Violation(report) => Some(report),
        }
    }

    pub fn is_clean(&self) -> bool {
        matches!(self, Outcome::Clean)
    }
}
