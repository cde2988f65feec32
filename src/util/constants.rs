// markscan - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "markscan";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Scan target
// =============================================================================

/// Default target file scanned when no path is given on the command line.
/// Relative to the invocation directory.
pub const DEFAULT_TARGET_PATH: &str = "temp_mobile_app/lib/main.dart";

// =============================================================================
// Scan limits
// =============================================================================

/// File size in bytes above which a large-file warning is logged.
/// The scan still proceeds; source files this tool targets are normally
/// well under 1 MB, so anything larger is worth flagging.
pub const LARGE_FILE_WARN_BYTES: u64 = 16 * 1024 * 1024; // 16 MB

/// Maximum length of a matched line included in debug output.
/// Keeps debug logs readable when a source file has very long lines.
pub const DEBUG_MAX_LINE_PREVIEW: usize = 200;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
