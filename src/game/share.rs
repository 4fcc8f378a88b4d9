//! Spoiler-free result text for sharing

use super::scoring::PuzzleScoreSummary;
use crate::core::DateKey;

/// Square for one ladder's points
#[must_use]
pub const fn ladder_square(points: u32) -> &'static str {
    match points {
        280.. => "🟩",
        220..=279 => "🟨",
        1..=219 => "🟧",
        0 => "🟥",
    }
}

/// Three-line share text: title, total score and one square per ladder
///
/// # Examples
/// ```
/// use word_rung::core::DateKey;
/// use word_rung::game::{LadderRunSummary, build_share_text, score_run};
///
/// let runs = [LadderRunSummary {
///     ladder_id: "L1".to_string(),
///     solved: true,
///     moves_used: 3,
///     par: 3,
///     hints_used: 0,
///     seconds: 0,
/// }];
/// let summary = score_run(&runs, 0);
/// let date = DateKey::parse("2026-02-06").unwrap();
///
/// assert_eq!(build_share_text(date, &summary), "Word Rung 2026-02-06\nScore 420\n🟩");
/// ```
#[must_use]
pub fn build_share_text(date: DateKey, summary: &PuzzleScoreSummary) -> String {
    let row: String = summary
        .ladders
        .iter()
        .map(|ladder| ladder_square(ladder.final_points))
        .collect();
    format!("Word Rung {date}\nScore {}\n{row}", summary.total_score)
}
