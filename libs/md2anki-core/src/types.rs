//! Core types for the markdown to flashcard conversion.

use serde::Serialize;

use crate::renderer::render;

/// One question/answer pair, destined for one flashcard.
///
/// Field order is the column order of the exported record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub question: String,
    pub answer: String,
}

impl Note {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Render both fields to HTML.
    pub fn render(&self) -> Note {
        Note {
            question: render(&self.question),
            answer: render(&self.answer),
        }
    }
}

/// Which block the segmenter is currently accumulating into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Before the first question marker. Lines are dropped.
    #[default]
    None,
    Question,
    Answer,
}
