//! ASCII Word Tokenizer - extracts runs of ASCII letters, lowercased.

use std::borrow::Cow;

use super::Tokenizer;

/// Word Tokenizer - extracts alphabetic words from text.
///
/// A word is a maximal run of ASCII letters (`A-Z`, `a-z`). Every other byte,
/// including digits, punctuation and any non-ASCII character, separates words.
/// Words are lowercased with the fixed ASCII mapping, independent of locale.
///
/// Word length is not limited here. The term tables reject over-long keys at load
/// time, so an over-long query word simply matches nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct AsciiWordTokenizer;

impl AsciiWordTokenizer {
    pub fn new() -> Self {
        AsciiWordTokenizer
    }
}

/// Iterator that yields word tokens from a string input.
pub struct AsciiWordIterator<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> AsciiWordIterator<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }
}

impl<'a> Iterator for AsciiWordIterator<'a> {
    type Item = Cow<'a, str>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.input.as_bytes();

        let start = self.pos + bytes[self.pos..]
            .iter()
            .position(u8::is_ascii_alphabetic)?;
        let end = bytes[start..]
            .iter()
            .position(|b| !b.is_ascii_alphabetic())
            .map_or(bytes.len(), |len| start + len);
        self.pos = end;

        // Both ends sit next to ASCII bytes, so they are char boundaries.
        let word = &self.input[start..end];
        if word.bytes().any(|b| b.is_ascii_uppercase()) {
            Some(Cow::Owned(word.to_ascii_lowercase()))
        } else {
            Some(Cow::Borrowed(word))
        }
    }
}

impl Tokenizer for AsciiWordTokenizer {
    type TokenIter<'a> = AsciiWordIterator<'a>;

    fn tokenize<'a>(&'a self, input: &'a str) -> Self::TokenIter<'a> {
        AsciiWordIterator::new(input)
    }

    fn name(&self) -> &'static str {
        "ascii-word"
    }
}
