//! Formatting utilities for terminal output

use crate::core::Word;
use crate::game::EvaluationStatus;

/// Placeholder shown for a hidden rung
const HIDDEN_RUNG: &str = "____";

/// Render a ladder as a single line of rungs
///
/// With a solution the intermediate words are shown, otherwise one blank per
/// intermediate step of par.
#[must_use]
pub fn ladder_rungs(start: &Word, end: &Word, par: usize, solution: Option<&[Word]>) -> String {
    let middle: Vec<String> = match solution {
        Some(words) if words.len() >= 2 => words[1..words.len() - 1]
            .iter()
            .map(|word| word.text().to_uppercase())
            .collect(),
        _ => vec![HIDDEN_RUNG.to_string(); par.saturating_sub(1)],
    };

    std::iter::once(start.text().to_uppercase())
        .chain(middle)
        .chain(std::iter::once(end.text().to_uppercase()))
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Emoji for an evaluation status
#[must_use]
pub const fn status_symbol(status: EvaluationStatus) -> &'static str {
    match status {
        EvaluationStatus::Solved => "✅",
        EvaluationStatus::Invalid => "❌",
        EvaluationStatus::Incomplete => "⏳",
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn hidden_ladder_shows_blanks() {
        let rungs = ladder_rungs(&word("cold"), &word("warm"), 4, None);
        assert_eq!(rungs, "COLD → ____ → ____ → ____ → WARM");
    }

    #[test]
    fn revealed_ladder_shows_words() {
        let solution: Vec<Word> = ["cold", "cord", "card", "ward", "warm"]
            .into_iter()
            .map(word)
            .collect();
        let rungs = ladder_rungs(&word("cold"), &word("warm"), 4, Some(&solution));
        assert_eq!(rungs, "COLD → CORD → CARD → WARD → WARM");
    }

    #[test]
    fn status_symbols() {
        assert_eq!(status_symbol(EvaluationStatus::Solved), "✅");
        assert_eq!(status_symbol(EvaluationStatus::Invalid), "❌");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
