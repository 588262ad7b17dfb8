//! Term extraction and index ingestion.
//!
//! This crate covers both sides of the term boundary of the verse index:
//!
//! 1. **Query Processing**: the [`Tokenizer`] breaks free text into the lowercase
//!    terms that are looked up in the term tables.
//! 2. **Index Loading**: [`load_payload`] decodes a serialized term→postings payload
//!    (`"term":[n1,n2,...]` fragments) into a [`verse_hash_index::HashIndex`].
//!
//! # Quick Start
//!
//! ```rust
//! use verse_hash_index::HashIndex;
//! use verse_text_index::{AsciiWordTokenizer, PayloadRadix, Tokenizer, load_payload};
//!
//! let mut table = HashIndex::new();
//! let report = load_payload(r#"{"love":[1001001,1001002]}"#, PayloadRadix::Decimal, &mut table)
//!     .unwrap();
//! assert_eq!(report.terms, 1);
//!
//! let tokenizer = AsciiWordTokenizer::new();
//! let terms: Vec<_> = tokenizer.tokenize("Love, LOVE!").collect();
//! assert_eq!(terms, ["love", "love"]);
//! ```

mod payload;
mod tokenizers;

pub use payload::{Fragment, LoadReport, PayloadRadix, PayloadScanner, load_payload};
pub use tokenizers::{AsciiWordTokenizer, Tokenizer, tokenize_query};
