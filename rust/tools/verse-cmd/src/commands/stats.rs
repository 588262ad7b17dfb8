//! Stats command implementation

use anyhow::{Context, Result};
use serde::Serialize;
use verse_search::TableStats;

use super::{DataArgs, open_library};
use crate::utils::format_size;

#[derive(Serialize)]
struct StatsSummary {
    loaded_versions: Vec<&'static str>,
    index_size: usize,
    tables: Vec<TableInfo>,
}

#[derive(Serialize)]
struct TableInfo {
    name: &'static str,
    entries: usize,
    capacity: usize,
    postings: usize,
    bytes: usize,
}

impl From<TableStats> for TableInfo {
    fn from(stats: TableStats) -> Self {
        TableInfo {
            name: stats.name,
            entries: stats.entries,
            capacity: stats.capacity,
            postings: stats.postings,
            bytes: stats.bytes,
        }
    }
}

pub fn run(data: DataArgs, versions: Vec<String>, json: bool) -> Result<()> {
    let mut library = open_library(&data, versions.clone())?;
    if versions.is_empty() {
        library.load_all().context("Failed to load all versions")?;
    }

    let summary = StatsSummary {
        loaded_versions: library.loaded(),
        index_size: library.index_size(),
        tables: library
            .engine()
            .table_stats()
            .into_iter()
            .filter(|t| t.capacity > 0)
            .map(TableInfo::from)
            .collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Loaded versions: {}", summary.loaded_versions.join(", "));
    println!("Index size: {}", format_size(summary.index_size as u64));
    println!();
    println!(
        "{:<12} {:>10} {:>10} {:>12} {:>12}",
        "table", "terms", "slots", "postings", "size"
    );
    for table in &summary.tables {
        println!(
            "{:<12} {:>10} {:>10} {:>12} {:>12}",
            table.name,
            table.entries,
            table.capacity,
            table.postings,
            format_size(table.bytes as u64)
        );
    }
    Ok(())
}
