//! Command implementations for verse-cmd

use std::path::PathBuf;

use anyhow::{Context, Result};
use verse_search::{IndexLibrary, IndexLibraryParams, PayloadRadix};

pub mod search;
pub mod stats;
pub mod tokenize;
pub mod versions;

/// Location and format of the index files.
#[derive(clap::Args)]
pub struct DataArgs {
    /// Directory holding the `<table>.json` or `<table>.json.zst` index files
    #[arg(short, long)]
    pub data_dir: PathBuf,

    /// Radix of the location numbers in the index files ("base36" or "decimal")
    #[arg(long)]
    pub radix: Option<String>,
}

/// Opens the index library described by `args`, loading `preload` up front.
pub fn open_library(args: &DataArgs, preload: Vec<String>) -> Result<IndexLibrary> {
    let radix = args
        .radix
        .as_deref()
        .map(str::parse::<PayloadRadix>)
        .transpose()
        .context("Invalid --radix")?;
    let params = IndexLibraryParams {
        radix,
        preload,
        ..IndexLibraryParams::new(&args.data_dir)
    };
    IndexLibrary::open(params)
        .with_context(|| format!("Failed to open index directory {}", args.data_dir.display()))
}
