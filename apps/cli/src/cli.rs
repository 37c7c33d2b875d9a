//! Argument parsing.

use std::path::PathBuf;

use clap::Parser;

/// Converts a Markdown file with flashcard-style content into a CSV file compatible with Anki.
#[derive(Parser, Debug)]
#[command(name = "md2anki", version, about)]
pub struct Cli {
    /// Path to the .md file you want to convert
    pub md_path: PathBuf,

    /// Name of the output csv file
    pub csv_name: PathBuf,

    /// Line separating questions from answers in your md file
    #[arg(allow_hyphen_values = true)]
    pub separator: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_three_positionals() {
        let cli = Cli::try_parse_from(["md2anki", "deck.md", "deck.csv", "???"]).unwrap();
        assert_eq!(cli.md_path, PathBuf::from("deck.md"));
        assert_eq!(cli.csv_name, PathBuf::from("deck.csv"));
        assert_eq!(cli.separator, "???");
    }

    #[test]
    fn missing_separator_is_rejected() {
        assert!(Cli::try_parse_from(["md2anki", "deck.md", "deck.csv"]).is_err());
    }

    #[test]
    fn extra_argument_is_rejected() {
        assert!(Cli::try_parse_from(["md2anki", "a.md", "a.csv", "???", "extra"]).is_err());
    }

    #[test]
    fn separator_may_look_like_a_pattern() {
        let cli = Cli::try_parse_from(["md2anki", "a.md", "a.csv", "[.*]"]).unwrap();
        assert_eq!(cli.separator, "[.*]");
    }

    #[test]
    fn separator_may_start_with_hyphens() {
        let cli = Cli::try_parse_from(["md2anki", "a.md", "a.csv", "---"]).unwrap();
        assert_eq!(cli.separator, "---");
    }

    #[test]
    fn verify_command() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
