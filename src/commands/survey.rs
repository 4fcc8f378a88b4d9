//! Survey command - generation health over a range of dates
//!
//! Generates the puzzle for every day in a range (in parallel) and checks each
//! one against the puzzle invariants. Useful before shipping a new word list
//! or generator settings.

use crate::core::{DateKey, Word};
use crate::engine::PuzzleEngine;
use crate::error::GenerationError;
use crate::game::{EvaluationStatus, evaluate_attempt, is_valid_solution_path};
use crate::puzzle::{DailyPuzzle, LADDERS_PER_PUZZLE};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, warn};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Outcome for a single surveyed date
#[derive(Debug, Clone)]
pub struct DayReport {
    pub date: DateKey,
    /// Ladder pars in order, or the generation error
    pub pars: Result<Vec<usize>, GenerationError>,
    pub violations: Vec<String>,
}

/// Aggregate statistics over all surveyed dates
#[derive(Debug, Clone)]
pub struct SurveyStatistics {
    pub start: DateKey,
    pub total_days: usize,
    pub generated: usize,
    pub failures: Vec<(DateKey, GenerationError)>,
    pub violations: Vec<(DateKey, String)>,
    /// How many ladders of each par were generated
    pub par_distribution: BTreeMap<usize, usize>,
    /// Average par per ladder position over generated puzzles
    pub average_par: [f64; LADDERS_PER_PUZZLE],
    pub total_time: Duration,
}

impl SurveyStatistics {
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.failures.is_empty() && self.violations.is_empty()
    }
}

/// Generate and check the puzzles for `days` consecutive dates from `start`
///
/// # Errors
///
/// Returns a `DateError` (wrapped) if the range runs past the supported years.
pub fn run_survey(
    engine: &PuzzleEngine,
    start: DateKey,
    days: usize,
    show_progress: bool,
) -> Result<SurveyStatistics, GenerationError> {
    let dates = (0..days)
        .map(|offset| start.add_days(offset as i64))
        .collect::<Result<Vec<_>, _>>()?;

    let pb = if show_progress {
        let pb = ProgressBar::new(days as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let total_start = Instant::now();

    let reports: Vec<DayReport> = dates
        .into_par_iter()
        .map(|date| {
            let report = survey_day(engine, date);
            pb.inc(1);
            report
        })
        .collect();

    pb.finish_with_message("Complete!");

    Ok(summarize(start, &reports, total_start.elapsed()))
}

fn survey_day(engine: &PuzzleEngine, date: DateKey) -> DayReport {
    match engine.generate_daily_puzzle(date) {
        Ok(puzzle) => {
            let violations = check_puzzle(engine, &puzzle);
            for violation in &violations {
                warn!("{date}: {violation}");
            }
            DayReport {
                date,
                pars: Ok(puzzle.ladders.iter().map(|ladder| ladder.par).collect()),
                violations,
            }
        }
        Err(error) => {
            debug!("{date}: {error}");
            DayReport {
                date,
                pars: Err(error),
                violations: Vec::new(),
            }
        }
    }
}

/// Every invariant a generated puzzle should satisfy, as readable violations
fn check_puzzle(engine: &PuzzleEngine, puzzle: &DailyPuzzle) -> Vec<String> {
    let mut violations = Vec::new();
    let mut seen: FxHashSet<&Word> = FxHashSet::default();

    for ladder in &puzzle.ladders {
        if !is_valid_solution_path(ladder, engine.dictionary()) {
            violations.push(format!("{} has an invalid solution path", ladder.id));
        }

        let result = evaluate_attempt(ladder, engine.dictionary(), ladder.intermediates());
        if result.status != EvaluationStatus::Solved || result.moves_used != ladder.par {
            violations.push(format!(
                "{} solution is rejected by the validator: {}",
                ladder.id, result.message
            ));
        }

        for word in &ladder.solution {
            if !seen.insert(word) {
                violations.push(format!("{} reuses \"{word}\" from another ladder", ladder.id));
            }
        }
    }

    violations
}

fn summarize(start: DateKey, reports: &[DayReport], total_time: Duration) -> SurveyStatistics {
    let mut failures = Vec::new();
    let mut violations = Vec::new();
    let mut par_distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut par_sums = [0usize; LADDERS_PER_PUZZLE];
    let mut generated = 0;

    for report in reports {
        match &report.pars {
            Ok(pars) => {
                generated += 1;
                for (position, &par) in pars.iter().enumerate() {
                    *par_distribution.entry(par).or_insert(0) += 1;
                    if let Some(sum) = par_sums.get_mut(position) {
                        *sum += par;
                    }
                }
            }
            Err(error) => failures.push((report.date, error.clone())),
        }

        violations.extend(
            report
                .violations
                .iter()
                .map(|violation| (report.date, violation.clone())),
        );
    }

    let average_par = par_sums.map(|sum| {
        if generated > 0 {
            sum as f64 / generated as f64
        } else {
            0.0
        }
    });

    SurveyStatistics {
        start,
        total_days: reports.len(),
        generated,
        failures,
        violations,
        par_distribution,
        average_par,
        total_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Dictionary;

    fn date(text: &str) -> DateKey {
        DateKey::parse(text).unwrap()
    }

    #[test]
    fn survey_of_embedded_dictionary_is_healthy() {
        let engine = PuzzleEngine::embedded();
        let stats = run_survey(&engine, date("2026-01-01"), 30, false).unwrap();

        assert_eq!(stats.total_days, 30);
        assert_eq!(stats.generated, 30);
        assert!(stats.is_healthy(), "{:?} {:?}", stats.failures, stats.violations);

        let ladders: usize = stats.par_distribution.values().sum();
        assert_eq!(ladders, 30 * LADDERS_PER_PUZZLE);
        assert!(stats.par_distribution.keys().all(|par| (3..=6).contains(par)));

        assert!((3.0..=4.0).contains(&stats.average_par[0]));
        assert!((4.0..=5.0).contains(&stats.average_par[1]));
        assert!((5.0..=6.0).contains(&stats.average_par[2]));
    }

    #[test]
    fn survey_reports_failures() {
        let engine = PuzzleEngine::new(Dictionary::from_strs(&["cold", "cord", "card"]));
        let stats = run_survey(&engine, date("2026-01-01"), 3, false).unwrap();

        assert_eq!(stats.generated, 0);
        assert_eq!(stats.failures.len(), 3);
        assert!(!stats.is_healthy());
        assert_eq!(stats.average_par, [0.0; LADDERS_PER_PUZZLE]);
        assert!(matches!(
            stats.failures[0],
            (_, GenerationError::Exhausted { ladder: 1, .. })
        ));
    }

    #[test]
    fn failures_are_in_date_order() {
        let engine = PuzzleEngine::new(Dictionary::default());
        let stats = run_survey(&engine, date("2026-02-27"), 4, false).unwrap();
        let dates: Vec<String> = stats.failures.iter().map(|(d, _)| d.to_string()).collect();
        assert_eq!(
            dates,
            vec!["2026-02-27", "2026-02-28", "2026-03-01", "2026-03-02"]
        );
    }

    #[test]
    fn empty_range_is_trivially_healthy() {
        let engine = PuzzleEngine::embedded();
        let stats = run_survey(&engine, date("2026-01-01"), 0, false).unwrap();
        assert_eq!(stats.total_days, 0);
        assert!(stats.is_healthy());
    }
}
