//! Accumulation of per-location hit counts across posting lists.

use std::mem;

use verse_common::Location;

/// Number of posting list hits recorded for one location during a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frequency {
    pub location: Location,
    pub count: u32,
}

/// Sorted, duplicate-free list of [`Frequency`] entries built by merging posting
/// lists one at a time.
///
/// Merging is a linear two-way merge into a scratch buffer which is then swapped
/// with the live list, so both buffers are reused across merges.
#[derive(Debug, Default)]
pub struct FrequencyList {
    entries: Vec<Frequency>,
    scratch: Vec<Frequency>,
}

impl FrequencyList {
    pub fn new() -> FrequencyList {
        FrequencyList::default()
    }

    /// Pre-sizes both buffers for `additional` more locations.
    pub fn reserve(&mut self, additional: usize) {
        let target = self.entries.len() + additional;
        self.entries.reserve(target.saturating_sub(self.entries.len()));
        self.scratch.reserve(target.saturating_sub(self.scratch.len()));
    }

    /// Merges an ascending posting list into the running counts.
    ///
    /// Every occurrence of a location in `postings` adds one to its count; locations
    /// seen for the first time are inserted in order.
    pub fn merge(&mut self, postings: &[Location]) {
        if postings.is_empty() {
            return;
        }
        debug_assert!(postings.is_sorted());

        let mut out = mem::take(&mut self.scratch);
        out.clear();
        out.reserve(self.entries.len() + postings.len());

        let current = &self.entries;
        let (mut i, mut j) = (0, 0);
        while j < postings.len() {
            let location = postings[j];
            while i < current.len() && current[i].location < location {
                out.push(current[i]);
                i += 1;
            }
            let run = run_length(&postings[j..]);
            j += run;
            let mut count = run as u32;
            if i < current.len() && current[i].location == location {
                count += current[i].count;
                i += 1;
            }
            out.push(Frequency { location, count });
        }
        out.extend_from_slice(&current[i..]);

        self.scratch = mem::replace(&mut self.entries, out);
    }

    pub fn entries(&self) -> &[Frequency] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.scratch.clear();
    }
}

/// Length of the run of equal values at the start of `sorted` (non-empty).
fn run_length(sorted: &[Location]) -> usize {
    let first = sorted[0];
    sorted.iter().take_while(|&&loc| loc == first).count()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn locs(values: &[u32]) -> Vec<Location> {
        values.iter().copied().map(Location::new).collect()
    }

    fn counts(list: &FrequencyList) -> Vec<(u32, u32)> {
        list.entries()
            .iter()
            .map(|f| (f.location.get(), f.count))
            .collect()
    }

    #[test]
    fn test_merge_into_empty() {
        let mut list = FrequencyList::new();
        list.merge(&locs(&[1, 3, 3, 7]));
        assert_eq!(counts(&list), [(1, 1), (3, 2), (7, 1)]);
    }

    #[test]
    fn test_merge_empty_is_noop() {
        let mut list = FrequencyList::new();
        list.merge(&locs(&[2, 4]));
        let before = counts(&list);
        list.merge(&[]);
        assert_eq!(counts(&list), before);
    }

    #[test]
    fn test_merge_interleaved() {
        let mut list = FrequencyList::new();
        list.merge(&locs(&[2, 4, 6]));
        list.merge(&locs(&[1, 2, 2, 5, 6, 9]));
        assert_eq!(
            counts(&list),
            [(1, 1), (2, 3), (4, 1), (5, 1), (6, 2), (9, 1)]
        );
    }

    #[test]
    fn test_merge_matches_counting_model() {
        fastrand::seed(5541);
        let mut list = FrequencyList::new();
        let mut model = BTreeMap::<u32, u32>::new();
        for _ in 0..50 {
            let mut postings = (0..fastrand::usize(0..40))
                .map(|_| fastrand::u32(0..200))
                .collect::<Vec<_>>();
            postings.sort_unstable();
            for &p in &postings {
                *model.entry(p).or_default() += 1;
            }
            list.reserve(postings.len());
            list.merge(&locs(&postings));
            assert!(list.entries().windows(2).all(|w| w[0].location < w[1].location));
        }
        assert_eq!(counts(&list), model.into_iter().collect::<Vec<_>>());
    }
}
