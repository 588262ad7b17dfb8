//! Conversion between packed [`Location`]s and human readable references.
//!
//! A reference is displayed as `"<Book> <chapter>:<verse>"`, e.g. `"John 11:35"`.
//! Only books `1..=66` and chapter/verse numbers `1..=176` are valid; anything else
//! is rejected by [`encode`] and reported as `None` by [`decode`].

use std::{fmt, str::FromStr};

use verse_common::{
    Location, Result,
    error::Error,
    location::MAX_CHAPTER_OR_VERSE,
};

/// Book names in canonical order. Book number `n` is `BOOK_NAMES[n - 1]`.
pub static BOOK_NAMES: [&str; 66] = [
    "Genesis",
    "Exodus",
    "Leviticus",
    "Numbers",
    "Deuteronomy",
    "Joshua",
    "Judges",
    "Ruth",
    "1 Samuel",
    "2 Samuel",
    "1 Kings",
    "2 Kings",
    "1 Chronicles",
    "2 Chronicles",
    "Ezra",
    "Nehemiah",
    "Esther",
    "Job",
    "Psalms",
    "Proverbs",
    "Ecclesiastes",
    "Song of Solomon",
    "Isaiah",
    "Jeremiah",
    "Lamentations",
    "Ezekiel",
    "Daniel",
    "Hosea",
    "Joel",
    "Amos",
    "Obadiah",
    "Jonah",
    "Micah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
    "Matthew",
    "Mark",
    "Luke",
    "John",
    "Acts",
    "Romans",
    "1 Corinthians",
    "2 Corinthians",
    "Galatians",
    "Ephesians",
    "Philippians",
    "Colossians",
    "1 Thessalonians",
    "2 Thessalonians",
    "1 Timothy",
    "2 Timothy",
    "Titus",
    "Philemon",
    "Hebrews",
    "James",
    "1 Peter",
    "2 Peter",
    "1 John",
    "2 John",
    "3 John",
    "Jude",
    "Revelation",
];

/// Name of book `book` (1-based), if it exists.
pub fn book_name(book: u32) -> Option<&'static str> {
    let index = (book as usize).checked_sub(1)?;
    BOOK_NAMES.get(index).copied()
}

/// Number of the book called `name` (exact match), if it exists.
pub fn book_number(name: &str) -> Option<u32> {
    BOOK_NAMES
        .iter()
        .position(|&candidate| candidate == name)
        .map(|index| index as u32 + 1)
}

/// A validated (book, chapter, verse) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Reference {
    book: u32,
    chapter: u32,
    verse: u32,
}

impl Reference {
    /// Validates the components.
    ///
    /// # Errors
    /// Returns an out-of-range error if the book is not in `1..=66` or the chapter
    /// or verse is not in `1..=176`.
    pub fn new(book: u32, chapter: u32, verse: u32) -> Result<Reference> {
        if book_name(book).is_none() || !in_range(chapter) || !in_range(verse) {
            return Err(Error::out_of_range(format!("{book}/{chapter}/{verse}")));
        }
        Ok(Reference {
            book,
            chapter,
            verse,
        })
    }

    pub fn book(&self) -> u32 {
        self.book
    }

    pub fn book_name(&self) -> &'static str {
        BOOK_NAMES[self.book as usize - 1]
    }

    pub fn chapter(&self) -> u32 {
        self.chapter
    }

    pub fn verse(&self) -> u32 {
        self.verse
    }

    pub fn location(&self) -> Location {
        Location::pack(self.book, self.chapter, self.verse)
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book_name(), self.chapter, self.verse)
    }
}

impl FromStr for Reference {
    type Err = Error;

    /// Parses the display form, e.g. `"Song of Solomon 2:1"`.
    fn from_str(s: &str) -> Result<Self> {
        let malformed = || {
            Error::invalid_arg(
                "reference",
                format!("expected '<Book> <chapter>:<verse>', got {s:?}"),
            )
        };
        let (name, numbers) = s.trim().rsplit_once(' ').ok_or_else(malformed)?;
        let (chapter, verse) = numbers.split_once(':').ok_or_else(malformed)?;
        let chapter = chapter.parse::<u32>().map_err(|_| malformed())?;
        let verse = verse.parse::<u32>().map_err(|_| malformed())?;
        let book = book_number(name.trim())
            .ok_or_else(|| Error::out_of_range(format!("unknown book {name:?}")))?;
        Reference::new(book, chapter, verse)
    }
}

impl From<Reference> for Location {
    fn from(reference: Reference) -> Self {
        reference.location()
    }
}

#[inline]
fn in_range(n: u32) -> bool {
    (1..=MAX_CHAPTER_OR_VERSE).contains(&n)
}

/// Packs a reference into a [`Location`], validating every component.
pub fn encode(book: u32, chapter: u32, verse: u32) -> Result<Location> {
    Reference::new(book, chapter, verse).map(|r| r.location())
}

/// Unpacks a [`Location`]. Returns `None` for an unknown book or a chapter/verse
/// outside `1..=176`.
pub fn decode(location: Location) -> Option<Reference> {
    Reference::new(location.book(), location.chapter(), location.verse()).ok()
}

/// Renders a location as `"<Book> <chapter>:<verse>"`, or `None` when it does not
/// decode.
pub fn display(location: Location) -> Option<String> {
    decode(location).map(|r| r.to_string())
}
