//! Sample index files and temporary data directories for tests.
//!
//! The samples live under `test/samples` at the repository root, two levels above
//! this crate's manifest.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;

/// Directory holding the sample `<table>.json` files.
pub fn samples_dir() -> anyhow::Result<PathBuf> {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let dir = manifest_dir
        .ancestors()
        .nth(2)
        .with_context(|| format!("no repository root above {}", manifest_dir.display()))?
        .join("test/samples");
    anyhow::ensure!(dir.is_dir(), "{} not found", dir.display());
    Ok(dir)
}

/// Reads the sample index payload for a table.
pub fn read_sample_index(name: &str) -> anyhow::Result<String> {
    let path = samples_dir()?.join(format!("{name}.json"));
    fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))
}

/// Copies every sample index into a fresh temporary directory.
///
/// With `compress` set, files are written as zstd-compressed `<name>.json.zst`
/// instead of plain `<name>.json`.
pub fn create_sample_data_dir(compress: bool) -> anyhow::Result<tempfile::TempDir> {
    let dir = tempfile::TempDir::new()?;
    for entry in fs::read_dir(samples_dir()?)? {
        let path = entry?.path();
        if path.extension().is_none_or(|ext| ext != "json") {
            continue;
        }
        let file_name = path
            .file_name()
            .ok_or_else(|| anyhow::anyhow!("{} has no file name", path.display()))?;
        let payload = fs::read(&path)?;
        if compress {
            let dest = dir
                .path()
                .join(format!("{}.zst", file_name.to_string_lossy()));
            fs::write(dest, zstd::encode_all(payload.as_slice(), 3)?)?;
        } else {
            fs::write(dir.path().join(file_name), payload)?;
        }
    }
    Ok(dir)
}

/// Writes `payload` as `<name>.json` into `dir`.
pub fn write_index_file(dir: &Path, name: &str, payload: &str) -> anyhow::Result<PathBuf> {
    let path = dir.join(format!("{name}.json"));
    fs::write(&path, payload)?;
    Ok(path)
}
