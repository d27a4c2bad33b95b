//! Splitter - cuts an IR dump into top-level segments
//!
//! A new segment starts at every line that begins with `function` or
//! `global`. The marker word itself belongs to neither neighbour: it is
//! recorded on the segment it opens and dropped from the text.
//!
//! ```text
//! "x\nfunction a\nglobal b"
//!  ^^^        ^^^      ^^
//!   0          1        2      (marker: None, Function, Global)
//! ```

use regex::Regex;
use std::sync::OnceLock;

const TOPLEVEL_PATTERN: &str = r"(?m)^(?:function|global)";

fn toplevel_marker() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| Regex::new(TOPLEVEL_PATTERN).expect("top-level marker pattern is valid"))
}

/// The word that opened a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Function,
    Global,
}

impl Marker {
    pub fn as_str(&self) -> &'static str {
        match self {
            Marker::Function => "function",
            Marker::Global => "global",
        }
    }

    fn from_match(text: &str) -> Self {
        if text == "global" {
            Marker::Global
        } else {
            Marker::Function
        }
    }
}

/// One top-level span of the dump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'src> {
    /// Position in the full split list, leading and global segments included
    pub index: usize,
    /// `None` for the text before the first marker
    pub marker: Option<Marker>,
    pub text: &'src str,
    /// Byte offset of `text` inside the whole dump
    pub offset: usize,
}

impl<'src> Segment<'src> {
    /// Global segments are never scanned for registers.
    ///
    /// The literal prefix check is kept alongside the marker so text that
    /// still begins with `global` is treated the same way.
    pub fn is_global(&self) -> bool {
        self.marker == Some(Marker::Global) || self.text.starts_with("global")
    }
}

/// Lazy iterator over the segments of a dump
pub struct Segments<'src> {
    source: &'src str,
    matches: regex::Matches<'static, 'src>,
    cursor: usize,
    pending: Option<Marker>,
    index: usize,
    finished: bool,
}

impl<'src> Segments<'src> {
    fn emit(&mut self, end: usize) -> Segment<'src> {
        let segment = Segment {
            index: self.index,
            marker: self.pending,
            text: &self.source[self.cursor..end],
            offset: self.cursor,
        };
        self.index += 1;
        segment
    }
}

impl<'src> Iterator for Segments<'src> {
    type Item = Segment<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.matches.next() {
            Some(m) => {
                let segment = self.emit(m.start());
                self.pending = Some(Marker::from_match(m.as_str()));
                self.cursor = m.end();
                Some(segment)
            }
            None => {
                self.finished = true;
                Some(self.emit(self.source.len()))
            }
        }
    }
}

/// Splits `source` at every line-leading `function` or `global`.
///
/// Always yields at least one segment; an empty dump yields one empty
/// segment.
pub fn split_toplevel(source: &str) -> Segments<'_> {
    Segments {
        source,
        matches: toplevel_marker().find_iter(source),
        cursor: 0,
        pending: None,
        index: 0,
        finished: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(source: &str) -> Vec<&str> {
        split_toplevel(source).map(|s| s.text).collect()
    }

    #[test]
    fn test_empty_source() {
        let segments: Vec<_> = split_toplevel("").collect();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "");
        assert_eq!(segments[0].marker, None);
    }

    #[test]
    fn test_marker_is_dropped() {
        assert_eq!(texts("function\n%0 foo\n"), vec!["", "\n%0 foo\n"]);
    }

    #[test]
    fn test_leading_text_is_segment_zero() {
        let segments: Vec<_> = split_toplevel("; dump\nfunction f\n").collect();
        assert_eq!(segments[0].text, "; dump\n");
        assert_eq!(segments[0].marker, None);
        assert_eq!(segments[1].index, 1);
        assert_eq!(segments[1].marker, Some(Marker::Function));
        assert_eq!(segments[1].text, " f\n");
    }

    #[test]
    fn test_markers_only_at_line_start() {
        let source = "function f {\n  call function g\n  load global h\n}\nglobal x\n";
        let segments: Vec<_> = split_toplevel(source).collect();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[1].text, " f {\n  call function g\n  load global h\n}\n");
        assert_eq!(segments[2].marker, Some(Marker::Global));
        assert_eq!(segments[2].text, " x\n");
    }

    #[test]
    fn test_trailing_marker_yields_empty_segment() {
        let segments: Vec<_> = split_toplevel("function a\nglobal").collect();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[2].text, "");
        assert!(segments[2].is_global());
    }

    #[test]
    fn test_offsets_point_into_source() {
        let source = "global g $0 : i32 = 0\nfunction f $1() : i32 {\n}\n";
        for segment in split_toplevel(source) {
            assert_eq!(&source[segment.offset..segment.offset + segment.text.len()], segment.text);
        }
    }

    #[test]
    fn test_global_detection() {
        let segments: Vec<_> = split_toplevel("global\n%0 bar\n").collect();
        assert!(!segments[0].is_global());
        assert!(segments[1].is_global());

        let literal = Segment {
            index: 0,
            marker: None,
            text: "global leftover",
            offset: 0,
        };
        assert!(literal.is_global());
    }

    #[test]
    fn test_marker_names() {
        let markers: Vec<_> = split_toplevel("global g\nfunction f\n")
            .filter_map(|s| s.marker)
            .map(|m| m.as_str())
            .collect();
        assert_eq!(markers, vec!["global", "function"]);
    }

    #[test]
    fn test_marker_prefix_is_literal() {
        // `functional` still opens a segment: the marker is a prefix match
        let segments: Vec<_> = split_toplevel("functional\n").collect();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1].text, "al\n");
    }
}
