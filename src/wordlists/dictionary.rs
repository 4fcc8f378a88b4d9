//! The legal ladder vocabulary

use super::loader::{load_from_file, words_from_slice};
use super::WORDS;
use crate::core::Word;
use rustc_hash::FxHashSet;
use std::io;
use std::path::Path;

/// Immutable set of valid 4-letter words
///
/// Words are kept sorted and unique so that anything iterating the
/// vocabulary (like the puzzle generator) sees a stable order.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    lookup: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from already-validated words
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut words: Vec<Word> = words.into_iter().collect();
        words.sort_unstable();
        words.dedup();
        let lookup = words.iter().cloned().collect();
        Self { words, lookup }
    }

    /// Build a dictionary from raw strings, skipping anything invalid
    ///
    /// # Examples
    /// ```
    /// use word_rung::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_strs(&["warm", "cold", "COLD", "nope!"]);
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains("cold"));
    /// ```
    #[must_use]
    pub fn from_strs(words: &[&str]) -> Self {
        Self::new(words_from_slice(words))
    }

    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_strs(WORDS)
    }

    /// Load a dictionary from a word-per-line file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        load_from_file(path).map(Self::new)
    }

    /// Whether `word` is a dictionary member (exact match)
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }

    /// All words in sorted order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
