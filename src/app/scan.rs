// markscan - app/scan.rs
//
// Scan orchestration: owns all filesystem access. Reads and decodes the
// target file, hands the loaded lines to the core scanner, and times the
// whole operation for the completion summary.
//
// The file is read fully and the handle released before matching starts;
// there is no streaming, retry, or partial-result mode. Either the whole
// file is scanned or an error propagates to the caller untouched.

use crate::core::model::{MarkerHit, MarkerRule, ScanSummary, SourceFile};
use crate::core::scanner;
use crate::util::constants;
use crate::util::error::{Result, ScanError};
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Result of a completed scan: the hits plus summary statistics.
#[derive(Debug)]
pub struct ScanOutcome {
    /// All marker hits, ordered by line number then rule order.
    pub hits: Vec<MarkerHit>,

    /// Summary statistics, logged by the caller.
    pub summary: ScanSummary,
}

/// Scan `path` against `rules`.
///
/// Reads the file as raw bytes and decodes explicitly so an invalid-UTF-8
/// failure surfaces as `ScanError::Encoding` rather than a generic I/O
/// error. Any failure aborts the scan; nothing is reported for a file
/// that could not be fully loaded.
pub fn scan_file(path: &Path, rules: &[MarkerRule]) -> Result<ScanOutcome> {
    let started = Instant::now();

    // Size probe is advisory only; if metadata fails, the read below
    // produces the authoritative error.
    if let Ok(metadata) = fs::metadata(path) {
        if metadata.len() > constants::LARGE_FILE_WARN_BYTES {
            tracing::warn!(
                file = %path.display(),
                size = metadata.len(),
                threshold = constants::LARGE_FILE_WARN_BYTES,
                "Target file is unusually large for a source file"
            );
        }
    }

    let bytes = fs::read(path).map_err(|e| ScanError::Io {
        path: path.to_path_buf(),
        operation: "read",
        source: e,
    })?;

    let content = String::from_utf8(bytes).map_err(|e| ScanError::Encoding {
        path: path.to_path_buf(),
        source: e,
    })?;

    let source = SourceFile::from_content(path.to_path_buf(), content.as_str());
    let hits = scanner::scan_source(&source, rules);

    let summary = ScanSummary {
        lines_scanned: source.lines.len() as u64,
        hits: hits.len(),
        duration: started.elapsed(),
    };

    tracing::info!(
        file = %path.display(),
        lines = summary.lines_scanned,
        hits = summary.hits,
        duration_ms = summary.duration.as_millis() as u64,
        "Scan finished"
    );

    Ok(ScanOutcome { hits, summary })
}
