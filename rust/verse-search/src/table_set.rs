//! The fixed set of term tables, one per registry slot.

use std::mem::size_of;

use verse_hash_index::HashIndex;

use crate::registry::{TABLE_COUNT, TableId};

/// Per-table occupancy figures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStats {
    pub name: &'static str,
    pub entries: usize,
    pub capacity: usize,
    pub postings: usize,
    /// Bytes attributed to the table by [`HashIndex::memory_usage`].
    pub bytes: usize,
}

pub struct TableSet {
    tables: [HashIndex; TABLE_COUNT],
}

impl TableSet {
    pub fn new() -> TableSet {
        TableSet {
            tables: std::array::from_fn(|_| HashIndex::new()),
        }
    }

    pub fn get(&self, id: TableId) -> &HashIndex {
        &self.tables[id.index()]
    }

    pub fn get_mut(&mut self, id: TableId) -> &mut HashIndex {
        &mut self.tables[id.index()]
    }

    /// A table counts as loaded once it holds at least one entry.
    pub fn is_loaded(&self, id: TableId) -> bool {
        !self.get(id).is_empty()
    }

    pub fn clear(&mut self, id: TableId) {
        self.get_mut(id).clear();
    }

    /// Footprint of all tables plus the fixed size of the set itself.
    pub fn memory_usage(&self) -> usize {
        size_of::<TableSet>()
            + self
                .tables
                .iter()
                .map(HashIndex::memory_usage)
                .sum::<usize>()
    }

    pub fn stats(&self) -> Vec<TableStats> {
        TableId::all()
            .map(|id| {
                let table = self.get(id);
                TableStats {
                    name: id.name(),
                    entries: table.len(),
                    capacity: table.capacity(),
                    postings: table.postings_count(),
                    bytes: table.memory_usage(),
                }
            })
            .collect()
    }
}

impl Default for TableSet {
    fn default() -> Self {
        Self::new()
    }
}
