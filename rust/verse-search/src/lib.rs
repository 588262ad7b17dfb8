//! Multi-version verse search.
//!
//! Term tables are loaded per Bible version (plus shared umbrella tables) from
//! serialized payloads. A query is tokenized into terms, the posting lists of every
//! term are merged across the version's tables, and the resulting locations are
//! ranked by how many of the query's terms they contain.
//!
//! ```rust
//! use verse_search::VerseSearch;
//!
//! let mut search = VerseSearch::new();
//! search.load(r#"{"love":[1001001,1001002]}"#, "KJV").unwrap();
//! assert_eq!(search.search("love", "KJV", None), ["Genesis 1:1", "Genesis 1:2"]);
//! assert!(search.search("love", "NotAVersion", None).is_empty());
//! ```

pub mod library;
pub mod merge;
pub mod rank;
pub mod reference;
pub mod registry;
pub mod search;
pub mod table_set;

pub use library::{IndexLibrary, IndexLibraryParams};
pub use reference::Reference;
pub use search::{VerseSearch, VerseSearchParams};
pub use table_set::TableStats;
pub use verse_text_index::PayloadRadix;
