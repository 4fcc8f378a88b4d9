//! Play-time rules: attempt validation, hints, scoring and sharing
//!
//! Everything here is a pure function of an immutable ladder, dictionary or
//! graph, so one engine can serve any number of concurrent sessions.

mod hint;
mod scoring;
mod share;
mod validator;

pub use hint::{Hint, find_hint, solve_ladder};
pub use scoring::{
    BASE_POINTS_PER_LADDER, CLEAN_BONUS, HINT_PENALTY, LadderRunSummary, LadderScoreBreakdown,
    MAX_TIME_PENALTY, MIN_POINTS_ON_SOLVE, MOVE_PENALTY, PERFECT_BONUS, PuzzleScoreSummary,
    SECONDS_PER_TIME_POINT, score_ladder, score_run,
};
pub use share::{build_share_text, ladder_square};
pub use validator::{EvaluationStatus, LadderEvaluation, evaluate_attempt, is_valid_solution_path};
