// markscan - core/scanner.rs
//
// Single-pass line scanner applying marker rules to a loaded source file.
// Core layer: operates on in-memory lines, never touches the filesystem.

use crate::core::model::{MarkerHit, MarkerRule, SourceFile};
use crate::util::constants;

/// Scan a loaded source file against a rule set.
///
/// Lines are examined in order with a 1-based counter. Every rule is
/// tested against every line independently, so one line can produce
/// several hits; hits for the same line are reported in rule order.
///
/// Pure and deterministic: scanning the same content twice yields an
/// identical hit list.
pub fn scan_source(source: &SourceFile, rules: &[MarkerRule]) -> Vec<MarkerHit> {
    tracing::debug!(
        file = %source.path.display(),
        lines = source.lines.len(),
        rules = rules.len(),
        "Scan started"
    );

    let mut hits = Vec::new();

    for (line_idx, line) in source.lines.iter().enumerate() {
        let line_number = (line_idx as u64) + 1;

        for rule in rules {
            if rule.matches(line) {
                tracing::debug!(
                    label = rule.label,
                    line = line_number,
                    text = %line_preview(line),
                    "Marker matched"
                );
                hits.push(MarkerHit {
                    label: rule.label,
                    line_number,
                    raw_text: line.clone(),
                });
            }
        }
    }

    tracing::debug!(
        file = %source.path.display(),
        hits = hits.len(),
        "Scan complete"
    );

    hits
}

/// Truncate a line for debug output, respecting char boundaries.
fn line_preview(line: &str) -> String {
    line.chars().take(constants::DEBUG_MAX_LINE_PREVIEW).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rules::BUILTIN_RULES;
    use std::path::PathBuf;

    fn make_source(content: &str) -> SourceFile {
        SourceFile::from_content(PathBuf::from("test.dart"), content)
    }

    /// (label, line_number) pairs for compact assertions.
    fn hit_pairs(hits: &[MarkerHit]) -> Vec<(&'static str, u64)> {
        hits.iter().map(|h| (h.label, h.line_number)).collect()
    }

    #[test]
    fn test_line_numbers_are_one_based() {
        let source = make_source("bottomNavigationBar: bar,\n");
        let hits = scan_source(&source, BUILTIN_RULES);
        assert_eq!(hit_pairs(&hits), vec![("bottomNavigationBar", 1)]);
    }

    #[test]
    fn test_lines_examined_in_order() {
        let source = make_source(
            "Widget _buildPostTile(Post post) {\n\
             // body\n\
             bottomNavigationBar: _buildNavBar(),\n",
        );
        let hits = scan_source(&source, BUILTIN_RULES);
        assert_eq!(
            hit_pairs(&hits),
            vec![("buildPostTile", 1), ("bottomNavigationBar", 3)]
        );
    }

    #[test]
    fn test_one_line_can_match_multiple_rules_in_rule_order() {
        // A contrived line containing the nav-bar marker, the nav-item
        // marker and the favorites context all at once.
        let source =
            make_source("bottomNavigationBar: BottomNavigationBarItem(label: _t(\"favorites\"))");
        let hits = scan_source(&source, BUILTIN_RULES);
        assert_eq!(
            hit_pairs(&hits),
            vec![("bottomNavigationBar", 1), ("favorites nav item", 1)]
        );
    }

    #[test]
    fn test_non_matching_lines_produce_no_hits() {
        let source = make_source("import 'package:flutter/material.dart';\n\nvoid main() {}\n");
        let hits = scan_source(&source, BUILTIN_RULES);
        assert!(hits.is_empty(), "expected no hits, got {hits:?}");
    }

    #[test]
    fn test_empty_file_produces_no_hits() {
        let source = make_source("");
        let hits = scan_source(&source, BUILTIN_RULES);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_secondary_substring_required_on_same_line() {
        // Nav item without the favorites context: no hit for that rule.
        let source = make_source(
            "BottomNavigationBarItem(icon: Icon(Icons.home)),\n\
             // favorites mentioned on a different line\n",
        );
        let hits = scan_source(&source, BUILTIN_RULES);
        assert!(
            hits.is_empty(),
            "split substrings must not match, got {hits:?}"
        );

        // Both substrings on one line: exactly one hit.
        let source = make_source("BottomNavigationBarItem(label: Text(\"favorites\")),");
        let hits = scan_source(&source, BUILTIN_RULES);
        assert_eq!(hit_pairs(&hits), vec![("favorites nav item", 1)]);
    }

    #[test]
    fn test_search_label_requires_exact_substring() {
        // The rule pattern includes the translation-helper call; a bare
        // "search" string is not a marker.
        let source = make_source("Text(\"search\")\nTextField(hint: _t(\"search\"))\n");
        let hits = scan_source(&source, BUILTIN_RULES);
        assert!(hits.is_empty());

        let source = make_source("child: Text(_t(\"search\")),");
        let hits = scan_source(&source, BUILTIN_RULES);
        assert_eq!(hit_pairs(&hits), vec![("search card label", 1)]);
    }

    #[test]
    fn test_scan_is_deterministic() {
        let source = make_source(
            "Widget _buildPostTile(Post post) {\n\
             bottomNavigationBar: bar,\n\
             BottomNavigationBarItem(label: favorites),\n",
        );
        let first = scan_source(&source, BUILTIN_RULES);
        let second = scan_source(&source, BUILTIN_RULES);
        assert_eq!(first, second);
    }

    #[test]
    fn test_hit_keeps_raw_line_text() {
        let source = make_source("  bottomNavigationBar: _navBar,");
        let hits = scan_source(&source, BUILTIN_RULES);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].raw_text, "  bottomNavigationBar: _navBar,");
    }

    #[test]
    fn test_crlf_line_endings_do_not_shift_numbering() {
        let source = make_source("first\r\nWidget _buildPostTile() {\r\nthird\r\n");
        let hits = scan_source(&source, BUILTIN_RULES);
        assert_eq!(hit_pairs(&hits), vec![("buildPostTile", 2)]);
    }
}
