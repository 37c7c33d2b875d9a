//! Splits a question/answer markdown document into notes.
//!
//! # Format
//! ```markdown
//! # Question 1
//! What is Rust?
//! ???
//! A systems programming language.
//!
//! # Question 2
//! Explain borrowing
//! ???
//! Borrowing allows references without ownership.
//! Multiple lines are supported.
//! ```
//!
//! Here `???` is the separator, chosen by the caller. Lines before the first
//! marker are ignored, and a pair is only kept once both of its blocks have
//! content.

use crate::types::{Mode, Note};

/// Line prefix that starts a new question.
pub const QUESTION_MARKER: &str = "# Question";

/// Segment document lines into notes, in document order.
///
/// The separator is compared literally against each trimmed line.
pub fn segment<I, S>(lines: I, separator: &str) -> Vec<Note>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut segmenter = Segmenter::new(separator);
    for line in lines {
        segmenter.process_line(line.as_ref());
    }
    let notes = segmenter.finish();
    tracing::debug!("Segmented {} notes", notes.len());
    notes
}

/// Segment a whole document held in memory.
pub fn segment_str(content: &str, separator: &str) -> Vec<Note> {
    segment(content.lines(), separator)
}

enum LineType<'a> {
    Marker,
    Separator,
    Text(&'a str),
}

struct Segmenter<'s> {
    separator: &'s str,
    mode: Mode,
    question: Vec<String>,
    answer: Vec<String>,
    notes: Vec<Note>,
}

impl<'s> Segmenter<'s> {
    fn new(separator: &'s str) -> Self {
        Self {
            separator,
            mode: Mode::None,
            question: Vec::new(),
            answer: Vec::new(),
            notes: Vec::new(),
        }
    }

    fn parse_line<'a>(&self, line: &'a str) -> LineType<'a> {
        let trimmed = line.trim();

        if trimmed.starts_with(QUESTION_MARKER) {
            LineType::Marker
        } else if trimmed == self.separator {
            LineType::Separator
        } else {
            LineType::Text(line.trim_end())
        }
    }

    fn process_line(&mut self, line: &str) {
        match self.parse_line(line) {
            LineType::Marker => {
                self.flush();
                self.mode = Mode::Question;
            }
            // Also accepted in answer or none mode, where it just (re)enters answer mode.
            LineType::Separator => self.mode = Mode::Answer,
            LineType::Text(text) => match self.mode {
                Mode::Question => self.question.push(text.to_string()),
                Mode::Answer => self.answer.push(text.to_string()),
                Mode::None => {}
            },
        }
    }

    /// Emit the pending pair if both blocks have lines, then clear both.
    fn flush(&mut self) {
        if !self.question.is_empty() && !self.answer.is_empty() {
            let note = Note::new(join_block(&self.question), join_block(&self.answer));
            if note.question.is_empty() || note.answer.is_empty() {
                tracing::trace!("Dropping pair with a blank block");
            } else {
                tracing::trace!(question = %note.question, "Segmented note");
                self.notes.push(note);
            }
        }
        self.question.clear();
        self.answer.clear();
    }

    fn finish(mut self) -> Vec<Note> {
        self.flush();
        self.notes
    }
}

fn join_block(lines: &[String]) -> String {
    lines.join("\n").trim().to_string()
}
