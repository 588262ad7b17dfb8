//! Packed verse location.

use std::fmt;

/// Multiplier applied to the book number when packing a location.
pub const BOOK_FACTOR: u32 = 1_000_000;

/// Multiplier applied to the chapter number when packing a location.
pub const CHAPTER_FACTOR: u32 = 1_000;

/// Largest chapter or verse number a valid location may carry.
pub const MAX_CHAPTER_OR_VERSE: u32 = 176;

/// A (book, chapter, verse) position packed into a single ordered integer:
/// `book * 1_000_000 + chapter * 1_000 + verse`.
///
/// The packing keeps the natural reading order, so sorting locations sorts them
/// by book, then chapter, then verse. A `Location` is only a container for the
/// packed value; it is not guaranteed to name a real verse. Range checks and book
/// names belong to the reference codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Location(u32);

impl Location {
    /// Wraps an already packed value.
    pub const fn new(packed: u32) -> Location {
        Location(packed)
    }

    /// Packs the components without validating them.
    pub const fn pack(book: u32, chapter: u32, verse: u32) -> Location {
        Location(book * BOOK_FACTOR + chapter * CHAPTER_FACTOR + verse)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn book(self) -> u32 {
        self.0 / BOOK_FACTOR
    }

    #[inline]
    pub const fn chapter(self) -> u32 {
        (self.0 % BOOK_FACTOR) / CHAPTER_FACTOR
    }

    #[inline]
    pub const fn verse(self) -> u32 {
        self.0 % CHAPTER_FACTOR
    }
}

impl From<u32> for Location {
    fn from(packed: u32) -> Self {
        Location(packed)
    }
}

impl From<Location> for u32 {
    fn from(location: Location) -> Self {
        location.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
