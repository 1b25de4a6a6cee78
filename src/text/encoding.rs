//! Position encodings and unit arithmetic.
//!
//! A [`PositionEncoding`] decides what one "character" of a position counts:
//! UTF-8 bytes, UTF-16 code units, Unicode scalar values or grapheme clusters.
//! The conversions here work within a single line slice and never produce an
//! offset inside a UTF-8 sequence.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

use crate::error::PositionNotFound;

/// Unit in which the `character` field of a position is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PositionEncoding {
    /// UTF-8 code units (bytes)
    #[serde(rename = "utf-8", alias = "utf8")]
    Utf8,
    /// UTF-16 code units, the LSP default
    #[default]
    #[serde(rename = "utf-16", alias = "utf16")]
    Utf16,
    /// Unicode scalar values
    #[serde(rename = "utf-32", alias = "utf32")]
    Utf32,
    /// Extended grapheme clusters
    #[serde(rename = "grapheme")]
    Grapheme,
}

/// Encoding name that does not match any [`PositionEncoding`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown position encoding: {0} (expected utf-8, utf-16, utf-32 or grapheme)")]
pub struct UnknownEncoding(pub String);

impl PositionEncoding {
    pub const ALL: [PositionEncoding; 4] = [
        PositionEncoding::Utf8,
        PositionEncoding::Utf16,
        PositionEncoding::Utf32,
        PositionEncoding::Grapheme,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PositionEncoding::Utf8 => "utf-8",
            PositionEncoding::Utf16 => "utf-16",
            PositionEncoding::Utf32 => "utf-32",
            PositionEncoding::Grapheme => "grapheme",
        }
    }

    /// Iterate the units of `text` as `(byte_offset, unit_count)` pairs, one
    /// per indivisible segment.
    fn segments<'a>(self, text: &'a str) -> Box<dyn Iterator<Item = (usize, usize)> + 'a> {
        match self {
            PositionEncoding::Utf8 => Box::new(text.char_indices().map(|(i, ch)| (i, ch.len_utf8()))),
            PositionEncoding::Utf16 => {
                Box::new(text.char_indices().map(|(i, ch)| (i, ch.len_utf16())))
            }
            PositionEncoding::Utf32 => Box::new(text.char_indices().map(|(i, _)| (i, 1))),
            PositionEncoding::Grapheme => Box::new(text.grapheme_indices(true).map(|(i, _)| (i, 1))),
        }
    }

    /// Number of units in `text`
    pub fn unit_len(self, text: &str) -> usize {
        match self {
            PositionEncoding::Utf8 => text.len(),
            _ => self.segments(text).map(|(_, units)| units).sum(),
        }
    }

    /// Convert a unit offset within `text` to a byte offset.
    ///
    /// `units == unit_len(text)` resolves to `text.len()`.
    ///
    /// # Errors
    /// - `CharacterOutOfRange` when `units` is past the end of `text`
    /// - `NotUnitBoundary` when `units` falls inside a multi-unit segment
    pub fn units_to_byte(self, text: &str, units: usize) -> Result<usize, PositionNotFound> {
        let mut unit_offset = 0;

        for (byte_offset, width) in self.segments(text) {
            if unit_offset == units {
                return Ok(byte_offset);
            }
            if unit_offset > units {
                return Err(PositionNotFound::not_unit_boundary());
            }
            unit_offset += width;
        }

        match unit_offset.cmp(&units) {
            std::cmp::Ordering::Equal => Ok(text.len()),
            std::cmp::Ordering::Greater => Err(PositionNotFound::not_unit_boundary()),
            std::cmp::Ordering::Less => Err(PositionNotFound::character_out_of_range()),
        }
    }

    /// Convert a byte offset within `text` to a unit offset.
    ///
    /// # Errors
    /// - `OffsetOutOfRange` when `byte_offset > text.len()`
    /// - `NotUnitBoundary` when `byte_offset` falls inside a segment
    pub fn byte_to_units(self, text: &str, byte_offset: usize) -> Result<usize, PositionNotFound> {
        if byte_offset > text.len() {
            return Err(PositionNotFound::offset_out_of_range());
        }

        let mut unit_offset = 0;
        for (segment_start, width) in self.segments(text) {
            if segment_start == byte_offset {
                return Ok(unit_offset);
            }
            if segment_start > byte_offset {
                return Err(PositionNotFound::not_unit_boundary());
            }
            unit_offset += width;
        }

        if byte_offset == text.len() {
            Ok(unit_offset)
        } else {
            Err(PositionNotFound::not_unit_boundary())
        }
    }
}

impl fmt::Display for PositionEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PositionEncoding {
    type Err = UnknownEncoding;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        PositionEncoding::ALL
            .into_iter()
            .find(|encoding| {
                let name = encoding.as_str();
                name == normalized || name.replace('-', "") == normalized
            })
            .ok_or_else(|| UnknownEncoding(s.to_string()))
    }
}
