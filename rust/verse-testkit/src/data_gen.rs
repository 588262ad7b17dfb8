//! Data generation utilities for testing.
//!
//! Produces synthetic term→postings maps and encodes them in the payload format
//! consumed by the index loader: `{"term":[n1,n2,...],...}` with the numbers
//! written in a chosen radix.

use std::collections::BTreeMap;

use verse_common::Location;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Returns a random location that passes the reference codec's range checks.
pub fn random_location() -> Location {
    Location::pack(
        fastrand::u32(1..=66),
        fastrand::u32(1..=150),
        fastrand::u32(1..=176),
    )
}

/// Returns a random lowercase ASCII term of `1..=max_len` letters.
pub fn random_term(max_len: usize) -> String {
    assert_ne!(max_len, 0);
    (0..fastrand::usize(1..=max_len))
        .map(|_| fastrand::lowercase())
        .collect()
}

/// Generates `term_count` distinct terms, each with up to `max_postings` sorted,
/// distinct locations. The generator is seeded, so equal arguments give equal maps.
pub fn generate_postings_map(
    seed: u64,
    term_count: usize,
    max_postings: usize,
) -> BTreeMap<String, Vec<Location>> {
    fastrand::seed(seed);
    let mut map = BTreeMap::new();
    while map.len() < term_count {
        let mut postings = (0..fastrand::usize(0..=max_postings))
            .map(|_| random_location())
            .collect::<Vec<_>>();
        postings.sort_unstable();
        postings.dedup();
        map.insert(random_term(12), postings);
    }
    map
}

/// Writes `value` in the given radix (2..=36), lowercase.
pub fn format_radix(mut value: u32, radix: u32) -> String {
    assert!((2..=36).contains(&radix));
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(DIGITS[(value % radix) as usize]);
        value /= radix;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

/// Encodes a postings map as a payload, terms in key order.
pub fn encode_payload<'a>(
    entries: impl IntoIterator<Item = (&'a String, &'a Vec<Location>)>,
    radix: u32,
) -> String {
    let fragments = entries
        .into_iter()
        .map(|(term, postings)| {
            let numbers = postings
                .iter()
                .map(|loc| format_radix(loc.get(), radix))
                .collect::<Vec<_>>()
                .join(",");
            format!("\"{term}\":[{numbers}]")
        })
        .collect::<Vec<_>>();
    format!("{{{}}}", fragments.join(","))
}
