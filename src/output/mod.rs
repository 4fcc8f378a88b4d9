//! Terminal output formatting
//!
//! Display utilities for CLI results, plus the stderr logger.

pub mod display;
pub mod formatters;
pub mod logger;

pub use display::{
    print_evaluation, print_generate_result, print_graph_report, print_path_report, print_puzzle,
    print_survey_statistics,
};
