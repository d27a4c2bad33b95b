//! Register Scanner
//!
//! This is a lexical heuristic, not a tokenizer. Every `%` in a segment
//! counts as one candidate register, and candidate `%N` is flagged when
//! the segment contains `%N ` or `%N]` but never `%N : `. Stray sigils
//! such as `%%` raise the bound, and registers numbered at or past the
//! sigil count are never checked.

use crate::split::Segment;

/// A register judged used-but-undeclared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Register token, e.g. `%3`
    pub register: String,
    /// Byte offset of the first usage-like occurrence in the whole dump
    pub offset: usize,
}

/// Number of `%` sigils in the text, used as the register bound
pub fn percent_count(text: &str) -> usize {
    text.matches('%').count()
}

/// Offset of the first usage-like occurrence of `register` in `text`, if
/// the register is not also declared there
fn undeclared_use(text: &str, register: &str) -> Option<usize> {
    if text.contains(&format!("{register} : ")) {
        return None;
    }

    let spaced = text.find(&format!("{register} "));
    let indexed = text.find(&format!("{register}]"));
    match (spaced, indexed) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

/// Scans a function segment. Registers are tested in index order, so the
/// findings come back ordered by register number.
pub fn scan_segment(segment: &Segment<'_>) -> Vec<Finding> {
    let text = segment.text;
    let candidates = percent_count(text);
    tracing::debug!(
        "scanning segment {} ({} bytes, {} candidate registers)",
        segment.index,
        text.len(),
        candidates
    );

    let mut findings = Vec::new();
    for current in 0..candidates {
        let register = format!("%{current}");
        match undeclared_use(text, &register) {
            Some(at) => {
                tracing::trace!("segment {}: {} used without declaration", segment.index, register);
                findings.push(Finding {
                    register,
                    offset: segment.offset + at,
                });
            }
            None => tracing::trace!("segment {}: {} ok", segment.index, register),
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split::split_toplevel;

    fn scan(source: &str, index: usize) -> Vec<String> {
        let segment = split_toplevel(source).nth(index).unwrap();
        scan_segment(&segment).into_iter().map(|f| f.register).collect()
    }

    #[test]
    fn test_percent_count() {
        assert_eq!(percent_count(""), 0);
        assert_eq!(percent_count("%0 = add %1 %2"), 3);
        assert_eq!(percent_count("100% %%"), 3);
    }

    #[test]
    fn test_used_register_is_flagged() {
        assert_eq!(scan("function\n%0 foo\n", 1), vec!["%0"]);
    }

    #[test]
    fn test_declaration_takes_precedence() {
        assert!(scan("function\n%0 : i32\n", 1).is_empty());
    }

    #[test]
    fn test_bracket_use_is_flagged() {
        assert_eq!(scan("function\n[@1 %0]\n", 1), vec!["%0"]);
    }

    #[test]
    fn test_register_without_trailing_context_is_ignored() {
        // `%0` at end of line has neither a space nor `]` after it
        assert!(scan("function\nreturn %0\n", 1).is_empty());
    }

    #[test]
    fn test_bound_is_percent_count() {
        // two sigils, so only %0 and %1 are candidates
        assert_eq!(scan("function\n%5 x %5 y\n", 1), Vec::<String>::new());
        assert_eq!(scan("function\n%1 x %1 y\n", 1), vec!["%1"]);
    }

    #[test]
    fn test_declaration_after_use_still_counts() {
        assert!(scan("function\n%0 = add %0 1\n%0 : i32\n", 1).is_empty());
    }

    #[test]
    fn test_register_past_bound_is_missed() {
        assert!(scan("function\n%7 x\n", 1).is_empty());
    }

    #[test]
    fn test_sigils_outside_registers_raise_the_bound() {
        // the `%%` pair lifts the bound to 3, bringing %2 into range
        assert_eq!(scan("function\nrem %% %2 x\n", 1), vec!["%2"]);
    }

    #[test]
    fn test_two_digit_register_flags_only_itself() {
        // eleven sigils bring %10 into range; `%10 ` is not a use of %1
        let source = "function
%0 : i32
%1 : i32
%2 %3 %4 %5 %6 %7 %8 %9 %10 x
";
        assert_eq!(
            scan(source, 1),
            vec!["%2", "%3", "%4", "%5", "%6", "%7", "%8", "%9", "%10"]
        );
    }

    #[test]
    fn test_findings_are_ordered_and_offset() {
        let source = "function f {\n%1 = add %0 %0\n}\n";
        let segment = split_toplevel(source).nth(1).unwrap();
        let findings = scan_segment(&segment);

        let registers: Vec<_> = findings.iter().map(|f| f.register.as_str()).collect();
        assert_eq!(registers, vec!["%0", "%1"]);
        assert_eq!(&source[findings[0].offset..findings[0].offset + 3], "%0 ");
        assert_eq!(&source[findings[1].offset..findings[1].offset + 3], "%1 ");
    }

    #[test]
    fn test_earliest_occurrence_wins() {
        let source = "function\n[%0] then %0 x\n";
        let segment = split_toplevel(source).nth(1).unwrap();
        let findings = scan_segment(&segment);
        assert_eq!(findings[0].offset, source.find("%0]").unwrap());
    }
}
