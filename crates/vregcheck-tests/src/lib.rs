//! End-to-end tests for the vregcheck linter
//!
//! Exercises the whole pipeline the binary runs:
//! Input → Splitter → Scanner → Reporter

use std::path::Path;
use vregcheck_error::LintError;
use vregcheck_lint::{check, Input, Outcome};

/// What a run of the linter produces
#[derive(Debug)]
pub struct LintResult {
    pub outcome: Outcome,
    /// Exactly what the binary would print on stdout
    pub stdout: String,
    pub exit_code: i32,
}

/// Lints IR text the way the binary does
pub fn lint(source: &str) -> LintResult {
    let outcome = check(source);
    let stdout = outcome
        .report()
        .map(|report| report.to_string())
        .unwrap_or_default();
    let exit_code = outcome.exit_code();

    LintResult {
        outcome,
        stdout,
        exit_code,
    }
}

/// Loads a dump from disk and lints it
pub fn lint_file(path: &Path) -> Result<LintResult, LintError> {
    let source = Input::File(path.to_path_buf()).load()?;
    Ok(lint(&source))
}

/// Asserts that no register is flagged
pub fn assert_clean(source: &str) {
    let result = lint(source);
    if !result.outcome.is_clean() {
        panic!(
            "Expected source to be clean, but got exit code {}:\n{}",
            result.exit_code, result.stdout
        );
    }
}

/// Asserts that the first offending segment and its registers match
pub fn assert_flags(source: &str, segment_index: usize, registers: &[&str]) {
    let result = lint(source);
    let Some(report) = result.outcome.report() else {
        panic!("Expected segment {} to be flagged, but source was clean", segment_index);
    };

    let flagged: Vec<_> = report.registers().collect();
    if report.segment_index != segment_index || flagged != registers {
        panic!(
            "Expected segment {} with {:?}, got segment {} with {:?}",
            segment_index, registers, report.segment_index, flagged
        );
    }
}

/// Asserts the exact stdout of a run
pub fn assert_report(source: &str, expected: &str) {
    let result = lint(source);
    if result.stdout != expected {
        panic!(
            "Expected report:\n{}\nbut got:\n{}",
            expected, result.stdout
        );
    }
}
