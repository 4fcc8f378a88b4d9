//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Words never admitted into a dictionary, even if a custom list contains them
pub const OFFENSIVE_WORDS: &[&str] = &[
    "anal", "arse", "cunt", "dick", "fuck", "nazi", "piss", "porn", "shit", "slut",
];

/// Load words from a file
///
/// Returns valid Word instances, skipping blank lines, `#` comments, invalid
/// entries and offensive words.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_rung::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                admit(trimmed)
            }
        })
        .collect();

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use word_rung::wordlists::loader::words_from_slice;
/// use word_rung::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| admit(s)).collect()
}

fn admit(raw: &str) -> Option<Word> {
    Word::new(raw)
        .ok()
        .filter(|word| !OFFENSIVE_WORDS.contains(&word.text()))
}
