//! hexflate CLI - command-line front-end for the decompression pipeline

use std::fs::OpenOptions;
use std::io::Write;

use chrono::Local;
use clap::Parser;

use crate::pipeline;

/// Failure log path, relative to the working directory. Append-only,
/// never read back by this tool.
const ERROR_LOG: &str = "error.log";

#[derive(Parser)]
#[command(name = "hexflate")]
#[command(about = "Decompress hex-encoded raw-deflate data", long_about = None)]
struct Cli {
    /// Hex-encoded compressed payload (spaces between byte pairs allowed)
    #[arg(long, value_name = "HEXSTRING")]
    input: Option<String>,
}

/// Run the hexflate CLI.
///
/// A handled pipeline failure is printed to stdout and appended to the
/// failure log, then the process still exits 0; programmatic callers that
/// need to distinguish outcomes should call
/// [`pipeline::decompress_hex`] directly and match on the typed error.
///
/// # Errors
/// Returns an error only if the failure log itself cannot be written.
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let Some(input) = cli.input else {
        println!("Usage: hexflate --input=<HEXSTRING>");
        return Ok(());
    };

    match pipeline::decompress_hex(&input) {
        Ok(result) => println!("{result}"),
        Err(e) => {
            println!("{e}");
            append_failure(&e.to_string())?;
        }
    }

    Ok(())
}

/// Append one failure line to the log, creating the file on demand.
fn append_failure(message: &str) -> std::io::Result<()> {
    let mut log = OpenOptions::new()
        .create(true)
        .append(true)
        .open(ERROR_LOG)?;
    log.write_all(failure_line(message).as_bytes())
}

/// Render a timestamped `"<timestamp> - <message>\n"` log line.
fn failure_line(message: &str) -> String {
    format!("{} - {message}\n", Local::now().format("%Y-%m-%d %H:%M:%S"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_line_is_timestamped() {
        let line = failure_line("no data was decompressed");
        assert!(line.ends_with(" - no data was decompressed\n"));
        assert!(line.chars().next().is_some_and(|c| c.is_ascii_digit()));
    }
}
