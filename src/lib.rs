pub mod config;
pub mod error;
pub mod lsp;
pub mod text;

pub use error::{Error, NotFoundReason, PositionNotFound, Result};

// Re-export the main mapping types
pub use text::{
    BreakKind, DocumentRange, LineBreakClassifier, LineCollection, Position, PositionEncoding,
    PositionMapper, UnicodeLineBreaks,
};
