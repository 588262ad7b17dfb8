//! Ordering of merged hit counts into a result list.
//!
//! Locations hit by every query term come first, in location order. The remaining
//! locations follow by descending count; a counting sort keeps equal counts in
//! location order.

use verse_common::Location;

use crate::merge::Frequency;

/// Ranks `entries` for a query of `terms` distinct terms, keeping at most
/// `max_results` locations (all of them when `None`).
pub fn rank(entries: &[Frequency], terms: usize, max_results: Option<usize>) -> Vec<Location> {
    let cap = max_results.unwrap_or(usize::MAX);
    if terms == 0 || entries.is_empty() || cap == 0 {
        return Vec::new();
    }

    let mut ranked = Vec::with_capacity(entries.len().min(cap));
    let mut max_count = 0;
    for entry in entries {
        if entry.count as usize == terms {
            ranked.push(entry.location);
        } else {
            max_count = max_count.max(entry.count);
        }
    }
    if ranked.len() >= cap {
        ranked.truncate(cap);
        return ranked;
    }

    // Bucket the partial matches by count, highest first.
    let mut starts = vec![0usize; max_count as usize + 2];
    let mut partial = 0;
    for entry in entries.iter().filter(|e| e.count as usize != terms) {
        starts[(max_count - entry.count) as usize + 1] += 1;
        partial += 1;
    }
    for i in 1..starts.len() {
        starts[i] += starts[i - 1];
    }
    let mut sorted = vec![Location::default(); partial];
    for entry in entries.iter().filter(|e| e.count as usize != terms) {
        let bucket = &mut starts[(max_count - entry.count) as usize];
        sorted[*bucket] = entry.location;
        *bucket += 1;
    }

    let remaining = cap - ranked.len();
    ranked.extend(sorted.into_iter().take(remaining));
    ranked
}
