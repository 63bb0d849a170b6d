// SPDX-License-Identifier: PMPL-1.0-or-later

//! Derive-Locales: ISO language/region table extraction.
//!
//! LibreOffice's i18nlangtag component hard-codes its MS-LANGID to ISO
//! 639/3166 associations as a C++ initializer table in `isolang.cxx`. This
//! crate scrapes that table line by line and derives a JSON object mapping
//! each language code to the region codes the table pairs with it, in the
//! order the table lists them.
//!
//! PIPELINE:
//! 1. **Extract**: read the source file, split on line feeds, match each
//!    line against the brace-quad row pattern.
//! 2. **Accumulate**: build an insertion-ordered [`locales::LocaleMap`],
//!    skipping placeholder rows with a blank language code.
//! 3. **Emit**: serialize with 2-space indentation; the binary prints the
//!    object to stdout and nothing else.
//!
//! The scanner is a line-oriented heuristic, deliberately not a C++ parser;
//! see [`extract::scanner`] for the fragility it inherits and keeps.

pub mod extract;
pub mod locales;
