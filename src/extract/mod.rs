// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale extraction module
//!
//! Drives the scanner over one isolang source file and hands back the
//! derived mapping.

pub mod scanner;

use crate::locales::LocaleMap;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub use scanner::{RowMatch, ScanStatistics, Scanner};

/// Outcome of one derive run: the mapping plus the scan counters.
#[derive(Debug, Clone)]
pub struct DeriveOutcome {
    pub locales: LocaleMap,
    pub statistics: ScanStatistics,
}

pub struct Extractor {
    source: PathBuf,
    scanner: Scanner,
}

impl Extractor {
    pub fn new(source: &Path) -> Result<Self> {
        if !source.exists() {
            anyhow::bail!("Source does not exist: {}", source.display());
        }

        Ok(Self {
            source: source.to_path_buf(),
            scanner: Scanner::new(),
        })
    }

    /// Read the source file and scan it for table rows.
    ///
    /// The file is read in one piece as UTF-8; a file that fails to decode
    /// is a fatal error, not a skip.
    pub fn extract(&self) -> Result<DeriveOutcome> {
        let content = fs::read_to_string(&self.source)
            .with_context(|| format!("Failed to read {}", self.source.display()))?;

        let (locales, statistics) = self.scanner.scan(&content);

        Ok(DeriveOutcome {
            locales,
            statistics,
        })
    }
}

/// Derive the locale mapping from an isolang source file.
pub fn derive<P: AsRef<Path>>(source: P) -> Result<LocaleMap> {
    let extractor = Extractor::new(source.as_ref())?;
    Ok(extractor.extract()?.locales)
}
