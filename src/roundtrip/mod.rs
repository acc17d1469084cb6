mod config;


pub use config::RoundTripConfig;

use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;

use crate::encoding::TextEncoding;
use crate::lifecycle;
use crate::reader::{TextReader, report_line};
use crate::writer::WriterOptions;

/// Lines seeded into the second file whenever it is created
pub const SECOND_FILE_LINES: [&str; 2] = ["File number 2", "A short story..."];

/// Line appended to the second file late in the sequence
pub const APPENDED_LINE: &str = "Appended some text here";

/// Run the full round-trip sequence, printing content lines to stdout
pub fn run(config: &RoundTripConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(config, &mut out)
}

/// Run the full round-trip sequence against an arbitrary output sink.
///
/// Stage order is significant: the first file is written and read back with
/// the report step, then the second file is created, printed, deleted,
/// recreated, appended to, and printed again. Content lines go to `out`;
/// stage narration goes to stderr.
pub fn run_with_output<W: Write>(config: &RoundTripConfig, out: &mut W) -> Result<()> {
    let options = WriterOptions::new()
        .encoding(config.encoding)
        .newline(config.newline);

    write_first_file(config, options)?;
    report_first_file(config, out)?;

    eprintln!("[roundtrip] ensuring {}", config.second_file.display());
    lifecycle::ensure_created(&config.second_file, &SECOND_FILE_LINES, options)?;
    print_file(&config.second_file, config.encoding, out)?;

    eprintln!("[roundtrip] recycling {}", config.second_file.display());
    lifecycle::delete(&config.second_file)?;
    lifecycle::ensure_created(&config.second_file, &SECOND_FILE_LINES, options)?;
    lifecycle::append_line(&config.second_file, APPENDED_LINE, options)?;
    print_file(&config.second_file, config.encoding, out)?;

    eprintln!("[roundtrip] ✓ round trip complete");
    Ok(())
}

/// Write the first file fragment-by-fragment under the declared encoding
fn write_first_file(config: &RoundTripConfig, options: WriterOptions) -> Result<()> {
    eprintln!("[roundtrip] writing {}", config.first_file.display());

    // The classic writer session: a raw character, bare strings, terminated
    // lines, and a stringified number with no trailing terminator
    let mut writer = options.write_bom(true).create(&config.first_file)?;
    writer.write_char('A')?;
    writer.write_line(" short story...")?;
    writer.write_str("Hello ")?;
    writer.write_line("World!")?;
    writer.write_str("The end")?;
    writer.write_newline()?;
    writer.write_str(&config.magic_number.to_string())?;
    writer.finish()?;
    Ok(())
}

/// Read the first file back line-by-line, reconstituting the numeric line
fn report_first_file<W: Write>(config: &RoundTripConfig, out: &mut W) -> Result<()> {
    eprintln!("[roundtrip] reading {}", config.first_file.display());

    let mut reader = TextReader::open(&config.first_file, config.encoding)?;
    while reader.peek()?.is_some() {
        if let Some(line) = reader.read_line()? {
            writeln!(out, "{}", report_line(&line))?;
        }
    }
    Ok(())
}

/// Print a file's lines verbatim
fn print_file<W: Write>(path: &Path, encoding: TextEncoding, out: &mut W) -> Result<()> {
    let reader = TextReader::open(path, encoding)?;
    for line in reader.lines() {
        writeln!(out, "{}", line?)?;
    }
    Ok(())
}
