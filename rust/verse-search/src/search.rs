use std::mem::size_of;

use verse_common::{Location, Result, error::Error};
use verse_hash_index::TermKey;
use verse_text_index::{LoadReport, PayloadRadix, load_payload, tokenize_query};

use crate::{
    merge::FrequencyList,
    rank::rank,
    reference,
    registry::{self, TableId},
    table_set::{TableSet, TableStats},
};

/// Parameters for [`VerseSearch`].
#[derive(Debug, Clone, Default)]
pub struct VerseSearchParams {
    /// Radix of the location numbers in loaded payloads. Defaults to decimal.
    pub radix: Option<PayloadRadix>,
}

impl VerseSearchParams {
    pub fn radix(&self) -> PayloadRadix {
        self.radix.unwrap_or_default()
    }
}

/// In-memory search over per-version term tables.
///
/// Tables are filled with [`VerseSearch::load`] and emptied with
/// [`VerseSearch::unload`]. Both take `&mut self`, so a search can never observe
/// a table that is being rebuilt.
pub struct VerseSearch {
    tables: TableSet,
    radix: PayloadRadix,
}

impl VerseSearch {
    pub fn new() -> VerseSearch {
        VerseSearch::with_params(VerseSearchParams::default())
    }

    pub fn with_params(params: VerseSearchParams) -> VerseSearch {
        VerseSearch {
            tables: TableSet::new(),
            radix: params.radix(),
        }
    }

    pub fn radix(&self) -> PayloadRadix {
        self.radix
    }

    /// Fills the table of `version` (a version or umbrella name) from `payload`.
    ///
    /// Loading a table that already holds entries does nothing. Malformed input
    /// stops decoding without failing: whatever was decoded before it stays loaded.
    ///
    /// # Errors
    /// `InvalidVersion` for an unknown name, `AllocationFailure` if a table cannot
    /// grow.
    pub fn load(&mut self, payload: &str, version: &str) -> Result<()> {
        self.load_table(payload, version).map(|_| ())
    }

    /// Same as [`VerseSearch::load`], but returns the decoding report, or `None`
    /// when the table was already loaded.
    pub fn load_table(&mut self, payload: &str, version: &str) -> Result<Option<LoadReport>> {
        let table = resolve(version)?;
        if self.tables.is_loaded(table) {
            log::debug!("table {table} already loaded, skipping");
            return Ok(None);
        }
        let report = load_payload(payload, self.radix, self.tables.get_mut(table))?;
        log::debug!(
            "loaded table {table}: {} terms, {} postings",
            report.terms,
            report.postings
        );
        Ok(Some(report))
    }

    /// Releases every entry of the table of `version`.
    ///
    /// # Errors
    /// `InvalidVersion` for an unknown name.
    pub fn unload(&mut self, version: &str) -> Result<()> {
        let table = resolve(version)?;
        if self.tables.is_loaded(table) {
            self.tables.clear(table);
            log::debug!("unloaded table {table}");
        }
        Ok(())
    }

    pub fn is_loaded(&self, version: &str) -> bool {
        registry::resolve_table(version).is_some_and(|table| self.tables.is_loaded(table))
    }

    /// Searches `version` for `query` and renders the results as
    /// `"<Book> <chapter>:<verse>"` strings.
    ///
    /// An unknown version or a query without terms yields an empty result.
    pub fn search(&self, query: &str, version: &str, max_results: Option<usize>) -> Vec<String> {
        self.search_locations(query, version, max_results)
            .into_iter()
            .filter_map(reference::display)
            .collect()
    }

    /// Ranked locations for `query` in `version`, before rendering.
    ///
    /// Locations that do not decode to a valid reference are kept here; they are
    /// dropped by [`VerseSearch::search`].
    pub fn search_locations(
        &self,
        query: &str,
        version: &str,
        max_results: Option<usize>,
    ) -> Vec<Location> {
        let Some(slots) = registry::lookup(version) else {
            log::trace!("search in unknown version {version:?}");
            return Vec::new();
        };

        let mut terms = tokenize_query(query);
        dedup_preserving_order(&mut terms);
        if terms.is_empty() {
            return Vec::new();
        }

        let mut frequencies = FrequencyList::new();
        for term in &terms {
            // Terms too long to be stored cannot match.
            let Some(key) = TermKey::try_new(term) else {
                continue;
            };
            let lists = slots
                .tables()
                .filter_map(|table| self.tables.get(table).lookup(&key))
                .collect::<Vec<_>>();
            frequencies.reserve(lists.iter().map(|list| list.len()).sum());
            for list in lists {
                frequencies.merge(list);
            }
        }

        let ranked = rank(frequencies.entries(), terms.len(), max_results);
        log::trace!(
            "{version}: {} terms, {} candidates, {} results",
            terms.len(),
            frequencies.len(),
            ranked.len()
        );
        ranked
    }

    /// Approximate number of bytes held by all tables.
    pub fn index_size(&self) -> usize {
        self.tables.memory_usage() + size_of::<VerseSearch>() - size_of::<TableSet>()
    }

    pub fn versions(&self) -> &'static [&'static str] {
        registry::versions()
    }

    pub fn table_stats(&self) -> Vec<TableStats> {
        self.tables.stats()
    }
}

impl Default for VerseSearch {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve(version: &str) -> Result<TableId> {
    registry::resolve_table(version).ok_or_else(|| Error::invalid_version(version))
}

fn dedup_preserving_order(terms: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::with_capacity(terms.len());
    terms.retain(|term| seen.insert(term.clone()));
}
