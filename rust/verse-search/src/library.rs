//! Lazily loaded collection of index files backing a [`VerseSearch`].
//!
//! A data directory holds one payload per table, named after the table:
//! `KJV.json`, `KJV-like.json`, `AllEng.json.zst`, ... Compressed (`.json.zst`)
//! files take precedence over plain ones. Loading a version pulls in its language
//! and family umbrella tables the first time they are needed.

use std::{
    collections::BTreeSet,
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
};

use verse_common::{Result, error::Error, verify_arg};
use verse_text_index::PayloadRadix;

use crate::{
    VerseSearch, VerseSearchParams,
    registry::{self, Language, TableId},
};

/// Parameters for [`IndexLibrary`].
#[derive(Debug, Clone, Default)]
pub struct IndexLibraryParams {
    /// Directory containing the `<table>.json[.zst]` files.
    pub data_dir: PathBuf,
    /// Radix of the payload numbers. Defaults to base 36, the format of the
    /// published index files.
    pub radix: Option<PayloadRadix>,
    /// Versions loaded when the library is opened.
    pub preload: Vec<String>,
    /// Result cap applied when a search does not pass its own.
    pub default_max_results: Option<usize>,
}

impl IndexLibraryParams {
    pub fn new(data_dir: impl Into<PathBuf>) -> IndexLibraryParams {
        IndexLibraryParams {
            data_dir: data_dir.into(),
            ..Default::default()
        }
    }

    pub fn radix(&self) -> PayloadRadix {
        self.radix.unwrap_or(PayloadRadix::Base36)
    }

    pub fn preload(&self) -> &[String] {
        &self.preload
    }

    pub fn default_max_results(&self) -> Option<usize> {
        self.default_max_results
    }
}

pub struct IndexLibrary {
    search: VerseSearch,
    data_dir: PathBuf,
    default_max_results: Option<usize>,
    loaded_versions: BTreeSet<&'static str>,
    loaded_umbrellas: BTreeSet<TableId>,
}

impl IndexLibrary {
    /// Opens the library and loads the versions listed in `params.preload`.
    ///
    /// # Errors
    /// `InvalidArgument` if the data directory does not exist; any error from
    /// loading a preloaded version.
    pub fn open(params: IndexLibraryParams) -> Result<IndexLibrary> {
        verify_arg!(data_dir, params.data_dir.is_dir());
        let mut library = IndexLibrary {
            search: VerseSearch::with_params(VerseSearchParams {
                radix: Some(params.radix()),
            }),
            data_dir: params.data_dir.clone(),
            default_max_results: params.default_max_results(),
            loaded_versions: BTreeSet::new(),
            loaded_umbrellas: BTreeSet::new(),
        };
        for version in params.preload() {
            library.load(version)?;
        }
        Ok(library)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// The underlying search engine.
    pub fn engine(&self) -> &VerseSearch {
        &self.search
    }

    /// Loads `version` together with the umbrella tables it reads from.
    ///
    /// # Errors
    /// `InvalidVersion` for an unknown version; `Io` if a required index file is
    /// missing or unreadable.
    pub fn load(&mut self, version: &str) -> Result<()> {
        let info =
            registry::version_info(version).ok_or_else(|| Error::invalid_version(version))?;
        if self.loaded_versions.contains(info.name) {
            return Ok(());
        }
        let slots = info.slots();
        self.load_umbrella(slots.umbrella)?;
        if let Some(family) = slots.family {
            self.load_umbrella(family)?;
        }
        self.load_file(slots.version)?;
        self.loaded_versions.insert(info.name);
        Ok(())
    }

    /// Loads every known version.
    pub fn load_all(&mut self) -> Result<()> {
        for version in registry::versions() {
            self.load(version)?;
        }
        Ok(())
    }

    /// Unloads the table of `version`. Umbrella tables stay loaded.
    ///
    /// # Errors
    /// `InvalidVersion` if the version is unknown or not loaded.
    pub fn unload(&mut self, version: &str) -> Result<()> {
        let info = registry::version_info(version)
            .filter(|info| self.loaded_versions.contains(info.name))
            .ok_or_else(|| Error::invalid_version(version))?;
        self.search.unload(info.name)?;
        self.loaded_versions.remove(info.name);
        Ok(())
    }

    /// Searches `version`, loading it first if needed.
    ///
    /// An unknown version yields an empty result. Without `max_results` the
    /// library's default cap applies.
    pub fn search(
        &mut self,
        query: &str,
        version: &str,
        max_results: Option<usize>,
    ) -> Result<Vec<String>> {
        if registry::version_info(version).is_none() {
            return Ok(Vec::new());
        }
        self.load(version)?;
        Ok(self
            .search
            .search(query, version, max_results.or(self.default_max_results)))
    }

    /// Loaded versions in name order.
    pub fn loaded(&self) -> Vec<&'static str> {
        self.loaded_versions.iter().copied().collect()
    }

    pub fn is_loaded(&self, version: &str) -> bool {
        self.loaded_versions.contains(version)
    }

    pub fn versions(&self) -> &'static [&'static str] {
        registry::versions()
    }

    pub fn english_versions(&self) -> Vec<&'static str> {
        registry::versions_in(Language::English).collect()
    }

    pub fn spanish_versions(&self) -> Vec<&'static str> {
        registry::versions_in(Language::Spanish).collect()
    }

    pub fn index_size(&self) -> usize {
        self.search.index_size()
    }

    fn load_umbrella(&mut self, table: TableId) -> Result<()> {
        if self.loaded_umbrellas.contains(&table) {
            return Ok(());
        }
        self.load_file(table)?;
        self.loaded_umbrellas.insert(table);
        Ok(())
    }

    fn load_file(&mut self, table: TableId) -> Result<()> {
        let payload = self.read_index(table.name())?;
        let report = self.search.load_table(&payload, table.name())?;
        if let Some(e) = report.as_ref().and_then(|r| r.malformed.as_ref()) {
            log::warn!("{table}: index file is truncated or corrupt: {e}");
        }
        Ok(())
    }

    /// Reads `<name>.json.zst`, falling back to `<name>.json`.
    fn read_index(&self, name: &str) -> Result<String> {
        let compressed = self.data_dir.join(format!("{name}.json.zst"));
        let bytes = if compressed.is_file() {
            let context = || compressed.display().to_string();
            let file = File::open(&compressed).map_err(|e| Error::io(context(), e))?;
            zstd::decode_all(file).map_err(|e| Error::io(context(), e))?
        } else {
            let plain = self.data_dir.join(format!("{name}.json"));
            let mut bytes = Vec::new();
            File::open(&plain)
                .and_then(|mut file| file.read_to_end(&mut bytes))
                .map_err(|e| Error::io(plain.display().to_string(), e))?;
            bytes
        };
        String::from_utf8(bytes).map_err(|e| {
            Error::io(
                format!("index {name}"),
                io::Error::new(io::ErrorKind::InvalidData, e),
            )
        })
    }
}
