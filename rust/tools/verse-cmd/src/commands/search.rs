//! Search command implementation

use anyhow::{Context, Result};

use super::{DataArgs, open_library};

pub fn run(
    data: DataArgs,
    version: String,
    query: String,
    max_results: Option<usize>,
    json: bool,
) -> Result<()> {
    let mut library = open_library(&data, Vec::new())?;
    if !library.versions().iter().any(|v| *v == version) {
        anyhow::bail!(
            "Unknown version {version:?}; run `verse-cmd versions` for the list"
        );
    }

    let results = library
        .search(&query, &version, max_results)
        .with_context(|| format!("Failed to search {version}"))?;
    log::info!("{} results for {query:?} in {version}", results.len());

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else if results.is_empty() {
        println!("No results.");
    } else {
        for reference in &results {
            println!("{reference}");
        }
    }
    Ok(())
}
