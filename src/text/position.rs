use std::ops::Range;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::encoding::PositionEncoding;
use super::segment::{self, LineBreakClassifier, UnicodeLineBreaks};
use crate::error::{Error, PositionNotFound};

/// Zero-based line and character location in a document
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Position {
    pub line: usize,
    /// Offset from the line start, in units of the position encoding
    pub character: usize,
}

impl Position {
    pub const fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

/// Span between two positions. `start <= end` is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DocumentRange {
    pub start: Position,
    pub end: Position,
}

impl DocumentRange {
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// Trait for mapping between positions and byte offsets
pub trait PositionMapper {
    /// Convert a position to a byte offset in the document
    fn byte_offset(&self, position: Position) -> Result<usize, PositionNotFound>;

    /// Convert a byte offset to a position
    fn position(&self, offset: usize) -> Result<Position, PositionNotFound>;

    /// Convert `length` bytes starting at `start_offset` to a range
    fn selection(&self, start_offset: usize, length: usize) -> Result<DocumentRange, PositionNotFound> {
        let end_offset = start_offset
            .checked_add(length)
            .ok_or_else(PositionNotFound::offset_out_of_range)?;
        let start = self.position(start_offset)?;
        let end = self.position(end_offset)?;
        Ok(DocumentRange::new(start, end))
    }
}

/// A document split into lines at hard line breaks.
///
/// The text is normalized to end with a hard break and the line table is
/// built once. Nothing is mutated afterwards, so a collection can be shared
/// across threads and queried concurrently.
///
/// # Example
///
/// ```
/// use line_collection::{LineCollection, Position, PositionMapper};
///
/// let lines = LineCollection::new("ab\ncd");
/// assert_eq!(lines.text(), "ab\ncd\n");
/// assert_eq!(lines.line_count(), 2);
/// assert_eq!(lines.byte_offset(Position::new(1, 1)), Ok(4));
/// assert_eq!(lines.position(4), Ok(Position::new(1, 1)));
/// ```
#[derive(Debug, Clone)]
pub struct LineCollection {
    text: String,
    lines: Vec<Range<usize>>,
    encoding: PositionEncoding,
}

impl LineCollection {
    /// Build a collection measuring characters in UTF-16 code units
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_encoding(text, PositionEncoding::default())
    }

    pub fn with_encoding(text: impl Into<String>, encoding: PositionEncoding) -> Self {
        Self::with_classifier(text, encoding, &UnicodeLineBreaks)
    }

    /// Build a collection using a custom line-break classifier
    pub fn with_classifier<C: LineBreakClassifier>(
        text: impl Into<String>,
        encoding: PositionEncoding,
        classifier: &C,
    ) -> Self {
        let (text, appended) = segment::normalize(text.into());
        let lines = segment::segment_lines(&text, classifier);

        log::debug!(
            target: "line_collection::segment",
            "Segmented {} bytes into {} lines (encoding: {}, appended break: {})",
            text.len(),
            lines.len(),
            encoding,
            appended
        );

        Self {
            text,
            lines,
            encoding,
        }
    }

    /// Read a UTF-8 file and build a collection from its contents.
    ///
    /// # Errors
    /// Returns [`Error::Io`] if the file cannot be read or is not valid UTF-8.
    pub fn from_path(path: impl AsRef<Path>, encoding: PositionEncoding) -> crate::error::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Ok(Self::with_encoding(text, encoding))
    }

    /// The normalized document text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Line ranges, delimiters included
    pub fn lines(&self) -> &[Range<usize>] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn encoding(&self) -> PositionEncoding {
        self.encoding
    }

    pub fn line_range(&self, line: usize) -> Option<Range<usize>> {
        self.lines.get(line).cloned()
    }

    /// Text of a line including its delimiter
    pub fn line_text(&self, line: usize) -> Option<&str> {
        self.line_range(line).map(|range| &self.text[range])
    }

    /// Text of a line without its delimiter
    pub fn line_content(&self, line: usize) -> Option<&str> {
        self.line_text(line)
            .map(|text| &text[..text.len() - segment::delimiter_len(text)])
    }

    /// Index of the line containing `offset`
    fn line_index(&self, offset: usize) -> Option<usize> {
        // Ranges are sorted and contiguous
        let line = self.lines.partition_point(|range| range.end <= offset);
        (line < self.lines.len()).then_some(line)
    }
}

impl LineCollection {
    fn resolve_byte_offset(&self, position: Position) -> Result<usize, PositionNotFound> {
        let range = self
            .line_range(position.line)
            .ok_or_else(PositionNotFound::line_out_of_range)?;
        let line = &self.text[range.clone()];
        let content = &line[..line.len() - segment::delimiter_len(line)];

        // Landing on the delimiter is out of range, so the result always
        // addresses line content.
        let offset = self.encoding.units_to_byte(content, position.character)?;
        if offset >= content.len() {
            return Err(PositionNotFound::character_out_of_range());
        }

        Ok(range.start + offset)
    }

    fn resolve_position(&self, offset: usize) -> Result<Position, PositionNotFound> {
        let line = self
            .line_index(offset)
            .ok_or_else(PositionNotFound::offset_out_of_range)?;
        let range = &self.lines[line];
        let character = self
            .encoding
            .byte_to_units(&self.text[range.clone()], offset - range.start)?;

        Ok(Position::new(line, character))
    }
}

impl PositionMapper for LineCollection {
    fn byte_offset(&self, position: Position) -> Result<usize, PositionNotFound> {
        self.resolve_byte_offset(position).inspect_err(|err| {
            log::trace!(
                target: "line_collection::position",
                "Rejected {:?} ({} lines, {}): {}",
                position,
                self.lines.len(),
                self.encoding,
                err
            );
        })
    }

    fn position(&self, offset: usize) -> Result<Position, PositionNotFound> {
        self.resolve_position(offset).inspect_err(|err| {
            log::trace!(
                target: "line_collection::position",
                "Rejected offset {} ({} bytes, {}): {}",
                offset,
                self.text.len(),
                self.encoding,
                err
            );
        })
    }
}
