//! Word lists for ladder puzzles
//!
//! Provides the embedded dictionary compiled into the binary for zero-cost
//! access, plus loading of custom lists.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid() {
        // All words should be 4 letters, lowercase
        for &word in WORDS {
            assert_eq!(word.len(), 4, "Word '{word}' is not 4 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_are_sorted_and_unique() {
        assert!(WORDS.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn words_exclude_offensive_terms() {
        for &word in loader::OFFENSIVE_WORDS {
            assert!(!WORDS.contains(&word), "'{word}' should not be embedded");
        }
    }

    #[test]
    fn embedded_list_is_large_enough_to_generate() {
        assert!(WORDS_COUNT > 1000, "Expected a full dictionary, got {WORDS_COUNT}");
    }
}
