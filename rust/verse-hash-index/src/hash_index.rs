use std::mem;

use verse_common::{Location, Result, error::Error};

use crate::{hashing::bucket_of, term_key::TermKey};

/// Number of slots added every time a table grows.
pub const GROWTH_INCREMENT: usize = 100;

/// Upper bound of `len / capacity` once an insert completes.
pub const MAX_LOAD_FACTOR: f64 = 0.75;

/// A term together with the sorted list of locations where it occurs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermEntry {
    key: TermKey,
    postings: Vec<Location>,
}

impl TermEntry {
    pub fn key(&self) -> &TermKey {
        &self.key
    }

    pub fn postings(&self) -> &[Location] {
        &self.postings
    }

    /// Bytes attributed to this entry by [`HashIndex::memory_usage`].
    pub fn memory_usage(&self) -> usize {
        mem::size_of::<TermEntry>() + self.postings.len() * mem::size_of::<Location>()
    }
}

/// An open-addressed hash table from [`TermKey`] to a posting list.
///
/// Slots hold boxed entries, so growing the table only moves pointers. Collisions
/// are resolved with linear probing that wraps at the end of the slot array.
///
/// # Invariants
///
/// - Every key is stored in at most one slot.
/// - After any insert completes, `len() / capacity()` does not exceed
///   [`MAX_LOAD_FACTOR`], so probing always meets an empty slot within
///   `capacity()` steps.
/// - An empty index owns no slots at all (`capacity() == 0`), including after
///   [`HashIndex::clear`].
#[derive(Debug, Default)]
pub struct HashIndex {
    slots: Vec<Option<Box<TermEntry>>>,
    len: usize,
}

impl HashIndex {
    /// Creates an empty index without allocating.
    pub fn new() -> HashIndex {
        HashIndex {
            slots: Vec::new(),
            len: 0,
        }
    }

    /// Number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots currently allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn load_factor(&self) -> f64 {
        if self.slots.is_empty() {
            0.0
        } else {
            self.len as f64 / self.slots.len() as f64
        }
    }

    /// Inserts `postings` under `key`.
    ///
    /// An existing key has its postings replaced in place; the previous list is
    /// returned and the live count is unchanged. A new key may first grow the table
    /// (see [`GROWTH_INCREMENT`]), after which it claims the first empty slot probing
    /// from its home bucket.
    ///
    /// # Errors
    /// Returns an allocation error if the table had to grow and the new slot array
    /// could not be allocated. The index is left exactly as it was.
    pub fn insert(
        &mut self,
        key: TermKey,
        postings: Vec<Location>,
    ) -> Result<Option<Vec<Location>>> {
        if let Some(slot) = self.find_slot(&key) {
            if let Some(entry) = self.slots[slot].as_deref_mut() {
                return Ok(Some(mem::replace(&mut entry.postings, postings)));
            }
        }

        if exceeds_max_load(self.len + 1, self.capacity()) {
            self.grow()?;
        }

        let capacity = self.capacity();
        let mut slot = bucket_of(key.as_bytes(), capacity);
        for _ in 0..capacity {
            if self.slots[slot].is_none() {
                self.slots[slot] = Some(Box::new(TermEntry { key, postings }));
                self.len += 1;
                debug_assert!(!exceeds_max_load(self.len, capacity));
                return Ok(None);
            }
            slot = next_slot(slot, capacity);
        }
        Err(Error::allocation(format!(
            "no free slot for '{key}' in a table of {capacity} slots"
        )))
    }

    /// Returns the postings stored for `key`, if any.
    pub fn lookup(&self, key: &TermKey) -> Option<&[Location]> {
        self.find_slot(key)
            .and_then(|slot| self.slots[slot].as_deref())
            .map(TermEntry::postings)
    }

    /// Convenience lookup by string. Terms that cannot form a [`TermKey`] (too long,
    /// empty or non-ASCII) are reported as absent.
    pub fn get(&self, term: &str) -> Option<&[Location]> {
        TermKey::try_new(term).and_then(|key| self.lookup(&key))
    }

    pub fn contains(&self, term: &str) -> bool {
        self.get(term).is_some()
    }

    /// Releases every entry and the slot array itself.
    pub fn clear(&mut self) {
        self.slots = Vec::new();
        self.len = 0;
    }

    /// Iterates over live entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &TermEntry> {
        self.slots.iter().filter_map(|slot| slot.as_deref())
    }

    /// Approximate number of bytes owned by this index: one pointer per slot plus,
    /// for every entry, the entry itself and its postings.
    pub fn memory_usage(&self) -> usize {
        self.capacity() * mem::size_of::<Option<Box<TermEntry>>>()
            + self.iter().map(TermEntry::memory_usage).sum::<usize>()
    }

    /// Total number of postings across all entries.
    pub fn postings_count(&self) -> usize {
        self.iter().map(|entry| entry.postings.len()).sum()
    }

    fn find_slot(&self, key: &TermKey) -> Option<usize> {
        let capacity = self.capacity();
        if capacity == 0 {
            return None;
        }
        let mut slot = bucket_of(key.as_bytes(), capacity);
        for _ in 0..capacity {
            match &self.slots[slot] {
                None => return None,
                Some(entry) if entry.key == *key => return Some(slot),
                Some(_) => slot = next_slot(slot, capacity),
            }
        }
        None
    }

    /// Grows the slot array until one more entry fits under the load bound.
    fn grow(&mut self) -> Result<()> {
        let mut new_capacity = self.capacity() + GROWTH_INCREMENT;
        while exceeds_max_load(self.len + 1, new_capacity) {
            new_capacity += GROWTH_INCREMENT;
        }
        self.grow_to(new_capacity)
    }

    /// Rehashes every entry into a fresh array of `new_capacity` slots. Nothing is
    /// touched unless the new array was allocated.
    fn grow_to(&mut self, new_capacity: usize) -> Result<()> {
        debug_assert!(new_capacity > self.len);
        let mut new_slots: Vec<Option<Box<TermEntry>>> = Vec::new();
        new_slots.try_reserve_exact(new_capacity).map_err(|e| {
            Error::allocation(format!("growing term table to {new_capacity} slots: {e}"))
        })?;
        new_slots.resize_with(new_capacity, || None);

        for entry in mem::take(&mut self.slots).into_iter().flatten() {
            let mut slot = bucket_of(entry.key.as_bytes(), new_capacity);
            while new_slots[slot].is_some() {
                slot = next_slot(slot, new_capacity);
            }
            new_slots[slot] = Some(entry);
        }

        log::trace!(
            "term table grown to {new_capacity} slots ({} entries)",
            self.len
        );
        self.slots = new_slots;
        Ok(())
    }
}

#[inline]
fn next_slot(slot: usize, capacity: usize) -> usize {
    if slot + 1 == capacity { 0 } else { slot + 1 }
}

/// `entries / capacity > 0.75`, in integer arithmetic.
#[inline]
fn exceeds_max_load(entries: usize, capacity: usize) -> bool {
    entries * 4 > capacity * 3
}
