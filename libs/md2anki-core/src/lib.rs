//! Core library for converting question/answer markdown into flashcard records.
//!
//! Provides:
//! - Segmenter splitting a document into question/answer notes
//! - Inline renderer for simplified markdown and LaTeX
//! - Semicolon-delimited record export for flashcard import

pub mod error;
pub mod export;
pub mod renderer;
pub mod segmenter;
pub mod types;

pub use error::{ConvertError, Result};
pub use export::{convert_file, write_notes, DELIMITER};
pub use renderer::render;
pub use segmenter::{segment, segment_str, QUESTION_MARKER};
pub use types::{Mode, Note};
