//! Delimited-record export for flashcard import.
//!
//! One record per note, two fields (rendered question, rendered answer),
//! separated by `;`. Fields are quoted only when they contain the delimiter,
//! a quote or a line break.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{ConvertError, Result};
use crate::segmenter::segment_str;
use crate::types::Note;

/// Field delimiter of the exported records.
pub const DELIMITER: u8 = b';';

/// Render and write notes as records to any writer. Returns the record count.
pub fn write_notes<W: io::Write>(writer: W, notes: &[Note]) -> Result<usize> {
    let mut records = record_writer(writer);
    Ok(write_records(&mut records, notes)?)
}

/// Convert a markdown file into a record file. Returns the number of notes written.
///
/// The output file is created or truncated even when the document holds no notes.
pub fn convert_file(input: &Path, output: &Path, separator: &str) -> Result<usize> {
    let content = fs::read_to_string(input).map_err(|source| ConvertError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let notes = segment_str(&content, separator);
    if notes.is_empty() {
        tracing::warn!("No complete question/answer pairs found in {}", input.display());
    }

    let to_write_error = |source| ConvertError::Write {
        path: output.to_path_buf(),
        source,
    };
    let file = fs::File::create(output)
        .map_err(csv::Error::from)
        .map_err(to_write_error)?;
    let mut records = record_writer(file);
    let count = write_records(&mut records, &notes).map_err(to_write_error)?;

    tracing::info!(
        "Wrote {} notes from {} to {}",
        count,
        input.display(),
        output.display()
    );
    Ok(count)
}

fn record_writer<W: io::Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(writer)
}

fn write_records<W: io::Write>(records: &mut csv::Writer<W>, notes: &[Note]) -> csv::Result<usize> {
    for note in notes {
        records.serialize(note.render())?;
    }
    records.flush()?;
    Ok(notes.len())
}
