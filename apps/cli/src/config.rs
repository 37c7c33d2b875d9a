//! Run configuration.

use std::path::PathBuf;

use crate::cli::Cli;

/// Everything a conversion run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub separator: String,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.md_path,
            output: cli.csv_name,
            separator: cli.separator,
        }
    }
}
