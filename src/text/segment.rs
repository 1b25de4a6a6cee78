//! Hard line-break segmentation.
//!
//! Lines are split only at mandatory breaks (UAX #14 classes BK, CR, LF and NL).
//! Wrap opportunities such as spaces or hyphens are reported by the classifier
//! as soft breaks and never end a line.

use std::ops::Range;

use unicode_linebreak::{BreakClass, BreakOpportunity, break_property, linebreaks};

/// Kind of a line-break opportunity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakKind {
    /// Mandatory break: a document line ends here
    Hard,
    /// Wrap opportunity that does not end a line
    Soft,
}

/// Capability to find line-break opportunities in text.
pub trait LineBreakClassifier {
    /// Break opportunities in ascending order, each reported as the byte offset
    /// just after the break.
    fn break_opportunities(&self, text: &str) -> impl Iterator<Item = (usize, BreakKind)>;

    /// Classify the break opportunity at `position`, or `None` when there is none.
    fn classify_break(&self, text: &str, position: usize) -> Option<BreakKind> {
        self.break_opportunities(text)
            .take_while(|(offset, _)| *offset <= position)
            .find(|(offset, _)| *offset == position)
            .map(|(_, kind)| kind)
    }
}

/// Classifier backed by the Unicode line breaking algorithm
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeLineBreaks;

impl LineBreakClassifier for UnicodeLineBreaks {
    fn break_opportunities(&self, text: &str) -> impl Iterator<Item = (usize, BreakKind)> {
        linebreaks(text).map(|(offset, opportunity)| {
            let kind = match opportunity {
                BreakOpportunity::Mandatory => BreakKind::Hard,
                BreakOpportunity::Allowed => BreakKind::Soft,
            };
            (offset, kind)
        })
    }
}

/// Whether `ch` forces a line break after it.
pub fn is_hard_break_char(ch: char) -> bool {
    matches!(
        break_property(ch as u32),
        BreakClass::Mandatory | BreakClass::CarriageReturn | BreakClass::LineFeed | BreakClass::NextLine
    )
}

/// Whether `text` ends with a hard line break
pub fn ends_with_hard_break(text: &str) -> bool {
    text.chars().next_back().is_some_and(is_hard_break_char)
}

/// Ensure `text` ends with a hard line break, appending `\n` when it does not.
///
/// Returns the normalized text and whether a break was appended.
pub fn normalize(mut text: String) -> (String, bool) {
    if ends_with_hard_break(&text) {
        (text, false)
    } else {
        text.push('\n');
        (text, true)
    }
}

/// Byte length of the hard-break sequence terminating `line`.
///
/// CRLF counts as a single two-byte delimiter. Returns 0 when the line does
/// not end with a hard break.
pub fn delimiter_len(line: &str) -> usize {
    match line.chars().next_back() {
        Some('\n') if line.ends_with("\r\n") => 2,
        Some(ch) if is_hard_break_char(ch) => ch.len_utf8(),
        _ => 0,
    }
}

/// Build the line table for `text`.
///
/// Ranges are half-open, contiguous, and cover the whole text. Each range
/// includes the delimiter that ends it. A classifier reporting no hard breaks
/// yields a single line spanning the text. Reported offsets that are not
/// char boundaries are ignored.
pub fn segment_lines<C: LineBreakClassifier>(text: &str, classifier: &C) -> Vec<Range<usize>> {
    let mut lines = Vec::new();
    let mut start = 0;

    for (offset, kind) in classifier.break_opportunities(text) {
        // Boundaries from custom classifiers must still split on chars
        if kind != BreakKind::Hard
            || offset <= start
            || offset > text.len()
            || !text.is_char_boundary(offset)
        {
            continue;
        }
        lines.push(start..offset);
        start = offset;
    }

    if start < text.len() || lines.is_empty() {
        lines.push(start..text.len());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(text: &str) -> Vec<Range<usize>> {
        segment_lines(text, &UnicodeLineBreaks)
    }

    /// Classifier that never reports a break
    struct NoBreaks;

    impl LineBreakClassifier for NoBreaks {
        fn break_opportunities(&self, _text: &str) -> impl Iterator<Item = (usize, BreakKind)> {
            std::iter::empty()
        }
    }

    #[test]
    fn test_segment_splits_on_line_feed() {
        assert_eq!(segment("ab\ncd\n"), vec![0..3, 3..6]);
    }

    #[test]
    fn test_segment_keeps_crlf_in_one_line() {
        assert_eq!(segment("ab\r\ncd\r\n"), vec![0..4, 4..8]);
    }

    #[test]
    fn test_segment_splits_on_lone_carriage_return() {
        assert_eq!(segment("ab\rcd\n"), vec![0..3, 3..6]);
    }

    #[test]
    fn test_segment_splits_on_unicode_mandatory_breaks() {
        // U+2028 LINE SEPARATOR is 3 bytes, U+0085 NEXT LINE is 2 bytes
        let text = "a\u{2028}b\u{85}c\u{c}d\n";
        assert_eq!(segment(text), vec![0..4, 4..7, 7..9, 9..11]);
    }

    #[test]
    fn test_segment_ignores_soft_breaks() {
        let text = "well-known words, separated by spaces\n";
        assert_eq!(segment(text), vec![0..text.len()]);
    }

    #[test]
    fn test_segment_blank_lines_are_separate() {
        assert_eq!(segment("\n\n\n"), vec![0..1, 1..2, 2..3]);
    }

    #[test]
    fn test_segment_without_breaks_is_single_line() {
        assert_eq!(segment_lines("abc", &NoBreaks), vec![0..3]);
        assert_eq!(segment_lines("", &NoBreaks), vec![0..0]);
    }

    /// Classifier reporting a hard break in the middle of every multi-byte char
    struct MidCharBreaks;

    impl LineBreakClassifier for MidCharBreaks {
        fn break_opportunities(&self, text: &str) -> impl Iterator<Item = (usize, BreakKind)> {
            text.char_indices()
                .filter(|(_, ch)| ch.len_utf8() > 1)
                .map(|(i, _)| (i + 1, BreakKind::Hard))
                .chain(std::iter::once((text.len(), BreakKind::Hard)))
        }
    }

    #[test]
    fn test_segment_skips_breaks_inside_characters() {
        let text = "é\n";
        let lines = segment_lines(text, &MidCharBreaks);
        assert_eq!(lines, vec![0..3]);
        for range in &lines {
            assert!(text.is_char_boundary(range.start));
            assert!(text.is_char_boundary(range.end));
        }
    }

    #[test]
    fn test_classify_break_reports_hard_soft_and_none() {
        let text = "a b\nc";
        assert_eq!(UnicodeLineBreaks.classify_break(text, 2), Some(BreakKind::Soft));
        assert_eq!(UnicodeLineBreaks.classify_break(text, 4), Some(BreakKind::Hard));
        assert_eq!(UnicodeLineBreaks.classify_break(text, 1), None);
    }

    #[test]
    fn test_normalize_appends_line_feed_only_when_missing() {
        assert_eq!(normalize("abc".to_string()), ("abc\n".to_string(), true));
        assert_eq!(normalize("abc\r\n".to_string()), ("abc\r\n".to_string(), false));
        assert_eq!(normalize("abc\r".to_string()), ("abc\r".to_string(), false));
        assert_eq!(normalize("abc\u{2029}".to_string()), ("abc\u{2029}".to_string(), false));
        assert_eq!(normalize(String::new()), ("\n".to_string(), true));
    }

    #[test]
    fn test_delimiter_len() {
        assert_eq!(delimiter_len("ab\r\n"), 2);
        assert_eq!(delimiter_len("ab\n"), 1);
        assert_eq!(delimiter_len("ab\r"), 1);
        assert_eq!(delimiter_len("ab\u{2028}"), 3);
        assert_eq!(delimiter_len("ab"), 0);
        assert_eq!(delimiter_len(""), 0);
    }
}
