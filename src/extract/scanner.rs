// SPDX-License-Identifier: PMPL-1.0-or-later

//! Line scanner for the isolang table
//!
//! One pattern applied line by line. This is a heuristic extractor for the
//! brace-initializer rows of `isolang.cxx`, not a C++ parser: the pattern is
//! unanchored and greedy, so a line holding nested braces or several records
//! matches from its first `{` to its last `}` with the rightmost quoted pair
//! winning the captures.

use crate::locales::LocaleMap;
use regex::Regex;
use serde::Serialize;

/// A table row is a four-field brace initializer whose second and third
/// fields are string literals:
///
/// ```text
/// { LANGUAGE_ENGLISH_US, "en", "US", k0 },
/// ```
///
/// Groups 1 and 4 (the MS-LANGID constant and the trailing flags field) pin
/// the row shape but their captures go unused.
const ROW_PATTERN: &str = r#"\{\s*(.*),\s*"(.*)",\s*"(.*)",\s*(.*)\s*\}"#;

/// Language and region captures from one table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowMatch<'a> {
    pub lang: &'a str,
    pub region: &'a str,
}

/// Counters accumulated over one scan. Library-surface only; the CLI's
/// stdout carries nothing but the JSON mapping.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ScanStatistics {
    pub total_lines: usize,
    pub matched_rows: usize,
    pub blank_language_rows: usize,
    pub regions_recorded: usize,
}

pub struct Scanner {
    row: Regex,
}

impl Scanner {
    pub fn new() -> Self {
        Self {
            row: Regex::new(ROW_PATTERN).unwrap(),
        }
    }

    /// Match one line against the row pattern.
    ///
    /// Returns `None` for lines without a brace-quad record; most lines of
    /// a real source file are not data rows.
    pub fn match_row<'a>(&self, line: &'a str) -> Option<RowMatch<'a>> {
        let caps = self.row.captures(line)?;
        Some(RowMatch {
            lang: caps.get(2).map_or("", |m| m.as_str()),
            region: caps.get(3).map_or("", |m| m.as_str()),
        })
    }

    /// Scan whole-file content and accumulate the locale mapping.
    ///
    /// Content splits on line feeds only; a carriage return stays attached
    /// to its line and can surface inside captures.
    pub fn scan(&self, content: &str) -> (LocaleMap, ScanStatistics) {
        let mut locales = LocaleMap::new();
        let mut stats = ScanStatistics::default();

        for line in content.split('\n') {
            stats.total_lines += 1;

            let row = match self.match_row(line) {
                Some(row) => row,
                None => continue,
            };

            // Placeholder rows carry an empty language code; they must not
            // create a key.
            if row.lang.is_empty() {
                stats.blank_language_rows += 1;
                continue;
            }

            stats.matched_rows += 1;
            if !row.region.is_empty() {
                stats.regions_recorded += 1;
            }
            locales.record(row.lang, row.region);
        }

        (locales, stats)
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}
