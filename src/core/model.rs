// markscan - core/model.rs
//
// Core data model types. Pure data definitions with no I/O
// (Core layer rule: the app layer reads files, core never does).
//
// These types are the shared vocabulary across all layers.

use std::path::PathBuf;
use std::time::Duration;

// =============================================================================
// Source file (the scan target after loading)
// =============================================================================

/// A fully loaded scan target: the file path plus its ordered lines.
///
/// Built from already-decoded content by the app layer. Line endings
/// (`\n` and `\r\n`) are stripped during construction. Immutable for the
/// lifetime of the scan.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path to the source file.
    pub path: PathBuf,

    /// File content as an ordered sequence of lines, endings stripped.
    pub lines: Vec<String>,
}

impl SourceFile {
    /// Split decoded file content into an ordered line sequence.
    ///
    /// `str::lines` strips both `\n` and `\r\n`, so files edited on
    /// Windows report the same line numbers and matches.
    pub fn from_content(path: PathBuf, content: &str) -> Self {
        Self {
            path,
            lines: content.lines().map(String::from).collect(),
        }
    }
}

// =============================================================================
// Marker rule
// =============================================================================

/// A fixed substring rule checked against every line of the target file.
///
/// When `secondary` is set, both substrings must appear in the same line
/// for the rule to match. Rules are static data defined in source
/// (see `core::rules`), never loaded from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerRule {
    /// Label printed when the rule matches (e.g. "buildPostTile").
    pub label: &'static str,

    /// Literal substring the line must contain.
    pub pattern: &'static str,

    /// Optional second substring that must also be present.
    pub secondary: Option<&'static str>,
}

impl MarkerRule {
    /// Returns true when `line` contains `pattern` and, if set, `secondary`.
    pub fn matches(&self, line: &str) -> bool {
        line.contains(self.pattern) && self.secondary.map_or(true, |s| line.contains(s))
    }
}

// =============================================================================
// Marker hit (one reported match)
// =============================================================================

/// A single rule match: which marker was found and where.
///
/// The raw line text is kept for diagnostic logging; stdout output only
/// carries the label and line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerHit {
    /// Label of the matching rule.
    pub label: &'static str,

    /// 1-based line number in the source file.
    pub line_number: u64,

    /// Original unmodified text of the matching line.
    pub raw_text: String,
}

// =============================================================================
// Scan summary
// =============================================================================

/// Summary statistics for a completed scan, logged on completion.
#[derive(Debug, Clone, Default)]
pub struct ScanSummary {
    /// Total lines examined.
    pub lines_scanned: u64,

    /// Total marker hits across all rules.
    pub hits: usize,

    /// Wall-clock scan duration (read + decode + match).
    pub duration: Duration,
}
