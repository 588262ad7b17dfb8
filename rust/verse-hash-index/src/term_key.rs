use std::fmt;

use verse_common::{Result, error::Error};

/// Maximum length of a term key in bytes.
pub const MAX_TERM_LENGTH: usize = 24;

/// A bounded-length, owned term stored inline.
///
/// Keys are non-empty ASCII strings of at most [`MAX_TERM_LENGTH`] bytes. Longer
/// input is rejected rather than truncated, so two distinct terms can never collapse
/// into the same key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TermKey {
    len: u8,
    bytes: [u8; MAX_TERM_LENGTH],
}

impl TermKey {
    /// Validates `term` and copies it into a new key.
    ///
    /// # Errors
    /// Returns [`Error::invalid_arg`] if the term is empty, longer than
    /// [`MAX_TERM_LENGTH`] bytes, or contains non-ASCII characters.
    pub fn new(term: &str) -> Result<TermKey> {
        TermKey::try_new(term).ok_or_else(|| {
            Error::invalid_arg(
                "term",
                format!("expected 1..={MAX_TERM_LENGTH} ASCII bytes, got {term:?}"),
            )
        })
    }

    /// Same as [`TermKey::new`], but reports an invalid term as `None`.
    ///
    /// Lookups use this form: a term that cannot be a key cannot be in the index.
    pub fn try_new(term: &str) -> Option<TermKey> {
        let src = term.as_bytes();
        if src.is_empty() || src.len() > MAX_TERM_LENGTH || !src.is_ascii() {
            return None;
        }
        let mut bytes = [0u8; MAX_TERM_LENGTH];
        bytes[..src.len()].copy_from_slice(src);
        Some(TermKey {
            len: src.len() as u8,
            bytes,
        })
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    pub fn as_str(&self) -> &str {
        // Construction only admits ASCII.
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl TryFrom<&str> for TermKey {
    type Error = Error;

    fn try_from(term: &str) -> Result<Self> {
        TermKey::new(term)
    }
}

impl fmt::Debug for TermKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TermKey").field(&self.as_str()).finish()
    }
}

impl fmt::Display for TermKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
