//! Point scoring for a finished puzzle run

use serde::{Deserialize, Serialize};

/// Points for a solved ladder before penalties
pub const BASE_POINTS_PER_LADDER: u32 = 300;
/// Penalty per move over par
pub const MOVE_PENALTY: u32 = 40;
/// Penalty per hint taken
pub const HINT_PENALTY: u32 = 35;
/// Cap on the time penalty
pub const MAX_TIME_PENALTY: u32 = 80;
/// Seconds per point of time penalty
pub const SECONDS_PER_TIME_POINT: u32 = 12;
/// Floor for a solved ladder, however slow or hint-heavy
pub const MIN_POINTS_ON_SOLVE: u32 = 50;
/// Bonus when every ladder is solved at par without hints
pub const PERFECT_BONUS: u32 = 120;
/// Bonus when every ladder is solved without hints
pub const CLEAN_BONUS: u32 = 60;

/// How the player did on one ladder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LadderRunSummary {
    pub ladder_id: String,
    pub solved: bool,
    pub moves_used: usize,
    pub par: usize,
    pub hints_used: u32,
    pub seconds: u32,
}

impl LadderRunSummary {
    #[inline]
    #[must_use]
    pub fn moves_over_par(&self) -> usize {
        self.moves_used.saturating_sub(self.par)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LadderScoreBreakdown {
    pub ladder_id: String,
    pub solved: bool,
    pub base_points: u32,
    pub move_penalty: u32,
    pub hint_penalty: u32,
    pub time_penalty: u32,
    pub final_points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleScoreSummary {
    pub total_score: u32,
    pub total_seconds: u32,
    pub used_hints: u32,
    pub moves_over_par: usize,
    pub ladders_solved: usize,
    pub flawless_bonus: u32,
    pub ladders: Vec<LadderScoreBreakdown>,
}

/// Score a single ladder; unsolved ladders earn nothing
#[must_use]
pub fn score_ladder(run: &LadderRunSummary) -> LadderScoreBreakdown {
    if !run.solved {
        return LadderScoreBreakdown {
            ladder_id: run.ladder_id.clone(),
            solved: false,
            base_points: BASE_POINTS_PER_LADDER,
            move_penalty: 0,
            hint_penalty: 0,
            time_penalty: 0,
            final_points: 0,
        };
    }

    let moves_over_par = u32::try_from(run.moves_over_par()).unwrap_or(u32::MAX);
    let move_penalty = moves_over_par.saturating_mul(MOVE_PENALTY);
    let hint_penalty = run.hints_used.saturating_mul(HINT_PENALTY);
    let time_penalty = (run.seconds / SECONDS_PER_TIME_POINT).min(MAX_TIME_PENALTY);

    let final_points = BASE_POINTS_PER_LADDER
        .saturating_sub(move_penalty)
        .saturating_sub(hint_penalty)
        .saturating_sub(time_penalty)
        .max(MIN_POINTS_ON_SOLVE);

    LadderScoreBreakdown {
        ladder_id: run.ladder_id.clone(),
        solved: true,
        base_points: BASE_POINTS_PER_LADDER,
        move_penalty,
        hint_penalty,
        time_penalty,
        final_points,
    }
}

/// Score a whole puzzle run
///
/// # Examples
/// ```
/// use word_rung::game::{LadderRunSummary, score_run};
///
/// let run = |id: &str, par| LadderRunSummary {
///     ladder_id: id.to_string(),
///     solved: true,
///     moves_used: par,
///     par,
///     hints_used: 0,
///     seconds: 24,
/// };
///
/// let summary = score_run(&[run("L1", 3), run("L2", 4), run("L3", 5)], 72);
/// assert_eq!(summary.flawless_bonus, 120);
/// assert_eq!(summary.total_score, 3 * 298 + 120);
/// ```
#[must_use]
pub fn score_run(runs: &[LadderRunSummary], total_seconds: u32) -> PuzzleScoreSummary {
    let ladders: Vec<LadderScoreBreakdown> = runs.iter().map(score_ladder).collect();
    let used_hints = runs
        .iter()
        .map(|run| run.hints_used)
        .fold(0, u32::saturating_add);
    let moves_over_par = runs
        .iter()
        .map(LadderRunSummary::moves_over_par)
        .fold(0, usize::saturating_add);
    let ladders_solved = runs.iter().filter(|run| run.solved).count();

    let all_solved = !runs.is_empty() && ladders_solved == runs.len();
    let all_at_par = runs
        .iter()
        .all(|run| run.solved && run.moves_used == run.par);
    let flawless_bonus = match (all_solved && used_hints == 0, all_at_par) {
        (true, true) => PERFECT_BONUS,
        (true, false) => CLEAN_BONUS,
        (false, _) => 0,
    };

    let total_score = ladders
        .iter()
        .map(|ladder| ladder.final_points)
        .fold(flawless_bonus, u32::saturating_add);

    PuzzleScoreSummary {
        total_score,
        total_seconds,
        used_hints,
        moves_over_par,
        ladders_solved,
        flawless_bonus,
        ladders,
    }
}
