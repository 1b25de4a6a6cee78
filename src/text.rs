//! Text coordinate utilities.
//!
//! This module provides the pieces behind [`LineCollection`]:
//! - Hard line-break segmentation of a document into a line table
//! - Unit arithmetic for each supported position encoding
//! - Position mapping between (line, character) pairs and byte offsets

pub mod encoding;
pub mod position;
pub mod segment;

pub use encoding::{PositionEncoding, UnknownEncoding};
pub use position::{DocumentRange, LineCollection, Position, PositionMapper};
pub use segment::{BreakKind, LineBreakClassifier, UnicodeLineBreaks};
