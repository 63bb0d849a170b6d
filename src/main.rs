// SPDX-License-Identifier: PMPL-1.0-or-later

//! derive-locales: extract language/region locale tables from isolang.cxx
//!
//! Reads a LibreOffice i18nlangtag `isolang.cxx` source file and prints a
//! JSON object mapping each language code to the region codes the table
//! associates with it, keys and list entries in first-seen order.

mod extract;
mod locales;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "derive-locales")]
#[command(version = "1.0.0")]
#[command(about = "Derive language-to-region locale tables from isolang.cxx")]
#[command(long_about = None)]
struct Cli {
    /// Path to the isolang.cxx source file
    #[arg(value_name = "SOURCE")]
    source: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let locales = extract::derive(&cli.source)?;
    println!("{}", locales.to_json_pretty()?);

    Ok(())
}
