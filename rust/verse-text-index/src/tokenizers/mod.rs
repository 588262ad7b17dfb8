//! Tokenizers for extracting terms from query text.
//!
//! The term tables are built from lowercase ASCII words, so queries must be broken
//! into terms by the same rule before lookup. Tokenizers return iterators of
//! `Cow<str>`: a term that is already lowercase is borrowed from the input, and only
//! terms that need case folding are copied.

pub mod ascii_word;

use std::borrow::Cow;

pub use ascii_word::AsciiWordTokenizer;

/// A tokenizer extracts terms from raw query strings.
pub trait Tokenizer: Send + Sync {
    /// The iterator type returned by tokenize.
    type TokenIter<'a>: Iterator<Item = Cow<'a, str>>
    where
        Self: 'a;

    /// Extract terms from the input string, left to right.
    fn tokenize<'a>(&'a self, input: &'a str) -> Self::TokenIter<'a>;

    /// Name of the tokenizer, used in diagnostics.
    fn name(&self) -> &'static str;
}

/// Tokenizes `text` with the [`AsciiWordTokenizer`] and materializes the terms.
///
/// The search pipeline needs the full term count before ranking, so the query is
/// collected up front rather than consumed lazily.
pub fn tokenize_query(text: &str) -> Vec<String> {
    AsciiWordTokenizer::new()
        .tokenize(text)
        .map(Cow::into_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_query() {
        assert_eq!(
            tokenize_query("In the beginning..."),
            vec!["in", "the", "beginning"]
        );
        assert!(tokenize_query("").is_empty());
        assert!(tokenize_query("3:16 -- 1,2; (42)!").is_empty());
    }

    #[test]
    fn test_tokenize_query_keeps_duplicates() {
        assert_eq!(tokenize_query("Holy, holy, HOLY"), vec!["holy", "holy", "holy"]);
    }
}
