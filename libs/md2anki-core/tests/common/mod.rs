//! Shared fixtures for conversion integration tests.
//!
//! Each test gets its own scratch directory under the system temp dir so tests
//! can run in parallel.

use std::fs;
use std::path::{Path, PathBuf};

/// Scratch directory removed again on drop.
pub struct Scratch {
    dir: PathBuf,
}

impl Scratch {
    pub fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("md2anki-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("Failed to create scratch directory");
        Self { dir }
    }

    pub fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    /// Write a file into the scratch directory and return its path.
    pub fn write(&self, file: &str, content: &str) -> PathBuf {
        let path = self.path(file);
        fs::write(&path, content).expect("Failed to write fixture");
        path
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}

/// Generate a deck with `num_notes` complete question/answer pairs.
pub fn sample_deck(num_notes: usize, separator: &str) -> String {
    (0..num_notes)
        .map(|i| {
            format!(
                "# Question {}\nQuestion {}?\n{}\nAnswer {}.\n",
                i + 1,
                i + 1,
                separator,
                i + 1
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("Failed to read output")
}
