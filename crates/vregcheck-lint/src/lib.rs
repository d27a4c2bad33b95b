//! vregcheck-lint - Lexical virtual-register check for IR dumps
//!
//! The check is one linear pass over the text:
//!
//! ```text
//! IR text (file or stdin)
//!         ↓
//!    [Splitter]      top-level `function` / `global` segments
//!         ↓
//!    [Scanner]       `%N` used (`%N ` / `%N]`) but never `%N : `
//!         ↓
//!    [Reporter]      first offending function, exit code 127
//! ```
//!
//! # Example
//!
//! ```rust
//! use vregcheck_lint::{check, Outcome};
//!
//! let outcome = check("function\n%0 foo\n");
//! assert_eq!(outcome.exit_code(), 127);
//! assert_eq!(
//!     outcome.report().unwrap().to_string(),
//!     "Function 1 Bad IR Registers: \n%0\n"
//! );
//!
//! assert_eq!(check("function\n%0 : i32\n"), Outcome::Clean);
//! ```

pub mod report;
pub mod scan;
pub mod source;
pub mod split;

pub use report::{Outcome, Report, VIOLATION_EXIT_CODE};
pub use scan::{percent_count, scan_segment, Finding};
pub use source::{read_from, Input};
pub use split::{split_toplevel, Marker, Segment, Segments};

/// Checks a dump, stopping at the first function segment with findings.
/// Segments after it are split but never scanned.
pub fn check(source: &str) -> Outcome {
    let mut segments = split_toplevel(source);

    while let Some(segment) = segments.next() {
        if segment.is_global() {
            tracing::debug!(
                "skipping segment {} opened by `{}`",
                segment.index,
                segment.marker.unwrap_or(Marker::Global).as_str()
            );
            continue;
        }

        let findings = scan_segment(&segment);
        if !findings.is_empty() {
            let unscanned = segments.by_ref().count();
            tracing::info!(
                "function {} has {} bad register(s), {} segment(s) left unscanned",
                segment.index,
                findings.len(),
                unscanned
            );
            return Outcome::Violation(Report {
                segment_index: segment.index,
                findings,
                unscanned,
            });
        }
    }

    tracing::info!("no bad registers found");
    Outcome::Clean
}
