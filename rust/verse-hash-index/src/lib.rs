//! Open-addressed term index mapping a bounded-length term to its posting list.
//!
//! Each [`HashIndex`] owns its entries. Slots are located with a polynomial rolling
//! hash ([`term_hash`]) and linear probing, and the table grows by a fixed increment
//! whenever another entry would push the load factor past [`MAX_LOAD_FACTOR`].

mod hash_index;
mod hashing;
mod term_key;

pub use hash_index::{GROWTH_INCREMENT, HashIndex, MAX_LOAD_FACTOR, TermEntry};
pub use hashing::{bucket_of, term_hash};
pub use term_key::{MAX_TERM_LENGTH, TermKey};
