// SPDX-License-Identifier: PMPL-1.0-or-later

//! The derived locale mapping
//!
//! Language code -> ordered list of region codes, exactly as the table
//! yields them. Keys keep first-insertion order, region lists keep
//! encounter order, and duplicates are preserved. Codes are captured
//! verbatim; nothing is validated against ISO 639/3166.

use anyhow::Result;
use indexmap::IndexMap;
use serde::Serialize;

/// Insertion-ordered mapping from language code to region codes.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct LocaleMap {
    entries: IndexMap<String, Vec<String>>,
}

impl LocaleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one matched table row.
    ///
    /// An empty language code records nothing at all. Otherwise the
    /// language key is created on first sight, and the region is appended
    /// only when non-empty, so a language first seen with a blank region
    /// still appears with an empty list.
    pub fn record(&mut self, lang: &str, region: &str) {
        if lang.is_empty() {
            return;
        }
        let regions = self.entries.entry(lang.to_string()).or_default();
        if !region.is_empty() {
            regions.push(region.to_string());
        }
    }

    /// Region codes recorded for a language, in encounter order.
    pub fn regions(&self, lang: &str) -> Option<&[String]> {
        self.entries.get(lang).map(Vec::as_slice)
    }

    /// Language codes in first-seen order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(language, regions)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(lang, regions)| (lang.as_str(), regions.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize as an indented JSON object, keys in insertion order.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creates_key_on_first_sight() {
        let mut map = LocaleMap::new();
        map.record("en", "US");
        assert_eq!(map.regions("en"), Some(&["US".to_string()][..]));
    }

    #[test]
    fn test_record_blank_language_is_a_noop() {
        let mut map = LocaleMap::new();
        map.record("", "US");
        assert!(map.is_empty());
    }

    #[test]
    fn test_record_blank_region_still_creates_key() {
        let mut map = LocaleMap::new();
        map.record("fr", "");
        assert_eq!(map.regions("fr"), Some(&[][..]));
    }

    #[test]
    fn test_record_blank_region_leaves_existing_list_alone() {
        let mut map = LocaleMap::new();
        map.record("en", "US");
        map.record("en", "");
        assert_eq!(map.regions("en"), Some(&["US".to_string()][..]));
    }

    #[test]
    fn test_record_preserves_duplicates_and_order() {
        let mut map = LocaleMap::new();
        map.record("en", "US");
        map.record("en", "GB");
        map.record("en", "US");
        let regions = map.regions("en").unwrap();
        assert_eq!(regions, &["US", "GB", "US"]);
    }

    #[test]
    fn test_languages_keep_first_seen_order() {
        let mut map = LocaleMap::new();
        map.record("de", "DE");
        map.record("en", "US");
        map.record("de", "AT");
        map.record("fr", "FR");
        let langs: Vec<&str> = map.languages().collect();
        assert_eq!(langs, ["de", "en", "fr"]);
    }

    #[test]
    fn test_iter_walks_pairs_in_order() {
        let mut map = LocaleMap::new();
        map.record("en", "US");
        map.record("de", "DE");
        map.record("en", "GB");

        let pairs: Vec<(&str, &[String])> = map.iter().collect();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].0, "en");
        assert_eq!(pairs[0].1, &["US", "GB"]);
        assert_eq!(pairs[1].0, "de");
        assert_eq!(pairs[1].1, &["DE"]);
    }
}
