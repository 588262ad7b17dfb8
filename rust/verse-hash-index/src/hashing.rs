/// Multiplier folded into the hash for every key byte.
const HASH_MULTIPLIER: u64 = 10_000_003;

/// Computes the 64-bit hash of a term.
///
/// The state is seeded with the first byte shifted left by seven, then every byte
/// (the first one included) is folded in with `state = state * 10000003 ^ byte`.
/// A final mixing step adds the upper half back in and xors with the bitwise
/// complement of the 32-bit length. All arithmetic wraps.
///
/// The hash does not depend on the table capacity, so growing a table only changes
/// the modulus applied by [`bucket_of`].
pub fn term_hash(key: &[u8]) -> u64 {
    let Some(&first) = key.first() else {
        return !0u32 as u64;
    };
    let mut hash = (first as u64) << 7;
    for &b in key {
        hash = HASH_MULTIPLIER.wrapping_mul(hash) ^ b as u64;
    }
    hash = hash.wrapping_add(hash >> 1);
    hash ^ (!(key.len() as u32)) as u64
}

/// Maps a term to its home slot in a table of `capacity` slots.
#[inline]
pub fn bucket_of(key: &[u8], capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    (term_hash(key) % capacity as u64) as usize
}
