// markscan - core/rules.rs
//
// The built-in marker rule set. Rules are static data compiled into the
// binary; the check order below is the order hits are reported in when a
// single line matches more than one rule.

use crate::core::model::MarkerRule;

/// Built-in marker rules, in fixed check order.
pub const BUILTIN_RULES: &[MarkerRule] = &[
    // Labelled search string on the search card.
    MarkerRule {
        label: "search card label",
        pattern: "Text(_t(\"search\"))",
        secondary: None,
    },
    // Post tile widget builder definition.
    MarkerRule {
        label: "buildPostTile",
        pattern: "Widget _buildPostTile",
        secondary: None,
    },
    // Bottom navigation bar assignment.
    MarkerRule {
        label: "bottomNavigationBar",
        pattern: "bottomNavigationBar",
        secondary: None,
    },
    // Navigation item for the favorites tab. Both substrings must be on
    // the same line: a nav item line without "favorites" is a different tab.
    MarkerRule {
        label: "favorites nav item",
        pattern: "BottomNavigationBarItem",
        secondary: Some("favorites"),
    },
];
