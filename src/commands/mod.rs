//! Command implementations

pub mod analyze;
pub mod evaluate;
pub mod generate;
pub mod play;
pub mod survey;

pub use analyze::{GraphReport, PathReport, analyze_graph, find_path};
pub use evaluate::{EvaluateResult, evaluate_entries};
pub use generate::{GenerateResult, generate_batch, generate_puzzle};
pub use play::{PlayOutcome, run_play};
pub use survey::{DayReport, SurveyStatistics, run_survey};
