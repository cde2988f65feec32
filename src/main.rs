// markscan - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Running the scan and printing match lines to stdout

use clap::Parser;
use markscan::app;
use markscan::core::rules::BUILTIN_RULES;
use markscan::util;
use std::path::PathBuf;

/// markscan - Source file marker scanner.
///
/// Scans one source file line by line for a fixed set of UI marker
/// substrings and prints "<label> at line <N>" for every match.
#[derive(Parser, Debug)]
#[command(name = "markscan", version, about)]
struct Cli {
    /// File to scan (defaults to the built-in target path).
    path: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialise logging subsystem
    util::logging::init(cli.debug);

    let target = cli
        .path
        .unwrap_or_else(|| PathBuf::from(util::constants::DEFAULT_TARGET_PATH));

    tracing::info!(
        version = util::constants::APP_VERSION,
        file = %target.display(),
        debug = cli.debug,
        "markscan starting"
    );

    let outcome = match app::scan::scan_file(&target, BUILTIN_RULES) {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(error = %e, "Scan failed");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // Match lines are the program's only stdout output; logging stays on
    // stderr so the two streams never interleave.
    for hit in &outcome.hits {
        println!("{} at line {}", hit.label, hit.line_number);
    }
}
