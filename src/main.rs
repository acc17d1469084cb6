use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use textcycle::{LineEnding, RoundTripConfig, TextEncoding};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Arguments {
    /// File written fragment-by-fragment, then read back with the report step
    #[arg(long)]
    first_file: Option<PathBuf>,

    /// File taken through the create/print/delete/recreate/append lifecycle
    #[arg(long)]
    second_file: Option<PathBuf>,

    /// Character encoding declared on every write and read
    #[arg(long)]
    encoding: Option<TextEncoding>,

    /// Line terminator written between lines
    #[arg(long)]
    newline: Option<LineEnding>,

    /// Number written as the final fragment of the first file
    #[arg(long)]
    magic: Option<i64>,

    /// JSON configuration file; explicit flags override its fields
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Arguments::parse();

    let mut config = match &args.config {
        Some(path) => RoundTripConfig::load(path)?,
        None => RoundTripConfig::default(),
    };

    if let Some(first_file) = args.first_file {
        config.first_file = first_file;
    }
    if let Some(second_file) = args.second_file {
        config.second_file = second_file;
    }
    if let Some(encoding) = args.encoding {
        config.encoding = encoding;
    }
    if let Some(newline) = args.newline {
        config.newline = newline;
    }
    if let Some(magic) = args.magic {
        config.magic_number = magic;
    }

    textcycle::run(&config)
}
