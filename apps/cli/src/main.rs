use clap::Parser;

use md2anki::Cli;

fn main() -> anyhow::Result<()> {
    md2anki::run(Cli::parse())
}
