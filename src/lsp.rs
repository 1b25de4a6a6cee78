//! Conversions between mapping types and LSP wire types.
//!
//! LSP positions carry `u32` fields and name their unit with a
//! `PositionEncodingKind`. Values that do not fit in `u32` are reported as
//! [`PositionNotFound`].

use tower_lsp_server::ls_types::{self, PositionEncodingKind};

use crate::error::PositionNotFound;
use crate::text::{DocumentRange, Position, PositionEncoding, PositionMapper};

impl TryFrom<Position> for ls_types::Position {
    type Error = PositionNotFound;

    fn try_from(position: Position) -> Result<Self, Self::Error> {
        let line =
            u32::try_from(position.line).map_err(|_| PositionNotFound::line_out_of_range())?;
        let character = u32::try_from(position.character)
            .map_err(|_| PositionNotFound::character_out_of_range())?;
        Ok(ls_types::Position::new(line, character))
    }
}

impl From<ls_types::Position> for Position {
    fn from(position: ls_types::Position) -> Self {
        Position::new(position.line as usize, position.character as usize)
    }
}

impl TryFrom<DocumentRange> for ls_types::Range {
    type Error = PositionNotFound;

    fn try_from(range: DocumentRange) -> Result<Self, Self::Error> {
        Ok(ls_types::Range::new(
            range.start.try_into()?,
            range.end.try_into()?,
        ))
    }
}

impl From<ls_types::Range> for DocumentRange {
    fn from(range: ls_types::Range) -> Self {
        DocumentRange::new(range.start.into(), range.end.into())
    }
}

/// LSP kind for `encoding`, or `None` for encodings LSP does not define
pub fn encoding_kind(encoding: PositionEncoding) -> Option<PositionEncodingKind> {
    match encoding {
        PositionEncoding::Utf8 => Some(PositionEncodingKind::UTF8),
        PositionEncoding::Utf16 => Some(PositionEncodingKind::UTF16),
        PositionEncoding::Utf32 => Some(PositionEncodingKind::UTF32),
        PositionEncoding::Grapheme => None,
    }
}

/// Encoding named by an LSP kind, or `None` if it is not one LSP defines
pub fn encoding_from_kind(kind: &PositionEncodingKind) -> Option<PositionEncoding> {
    PositionEncoding::ALL
        .into_iter()
        .find(|encoding| encoding_kind(*encoding).is_some_and(|known| known == *kind))
}

/// Pick the position encoding for a session.
///
/// The first client-advertised encoding that is supported wins. Clients that
/// advertise nothing, or nothing supported, get UTF-16 as LSP mandates.
pub fn negotiate_encoding(client_encodings: Option<&[PositionEncodingKind]>) -> PositionEncoding {
    client_encodings
        .unwrap_or_default()
        .iter()
        .find_map(encoding_from_kind)
        .unwrap_or_default()
}

/// Resolve an LSP position to a byte offset
pub fn byte_offset_at<M: PositionMapper + ?Sized>(
    mapper: &M,
    position: ls_types::Position,
) -> Result<usize, PositionNotFound> {
    mapper.byte_offset(position.into())
}

/// Build an LSP range covering `length` bytes from `start_offset`
pub fn selection_range<M: PositionMapper + ?Sized>(
    mapper: &M,
    start_offset: usize,
    length: usize,
) -> Result<ls_types::Range, PositionNotFound> {
    mapper.selection(start_offset, length)?.try_into()
}
