//! Play command
//!
//! Line-oriented play loop over any reader and writer. Each ladder is played in
//! turn: type one or more bridge words per line, or one of `hint`, `undo`,
//! `skip` and `quit`.

use crate::core::{Word, normalize};
use crate::engine::PuzzleEngine;
use crate::game::{
    EvaluationStatus, LadderRunSummary, PuzzleScoreSummary, build_share_text, score_run,
};
use crate::puzzle::{DailyPuzzle, PublicLadder};
use std::io::{self, BufRead, Write};
use std::time::Instant;

/// Everything a finished run produced
#[derive(Debug, Clone)]
pub struct PlayOutcome {
    pub runs: Vec<LadderRunSummary>,
    pub summary: PuzzleScoreSummary,
    pub share_text: String,
}

enum LadderEnd {
    Solved { moves_used: usize },
    Skipped,
    Quit,
}

/// Play `puzzle` reading commands from `input` and writing to `output`
///
/// End of input ends the run; unfinished ladders score zero.
///
/// # Errors
///
/// Returns an I/O error if reading input or writing output fails.
pub fn run_play<R: BufRead, W: Write>(
    engine: &PuzzleEngine,
    puzzle: &DailyPuzzle,
    mut input: R,
    mut output: W,
) -> io::Result<PlayOutcome> {
    let started = Instant::now();
    let public = puzzle.to_public();

    writeln!(
        output,
        "{} | {}",
        public.name,
        public.puzzle_date.format_long()
    )?;
    writeln!(
        output,
        "Commands: hint, undo, skip, quit. Enter bridge words separated by spaces."
    )?;

    let mut runs = Vec::with_capacity(public.ladders.len());
    let mut quit = false;

    for (position, ladder) in public.ladders.iter().enumerate() {
        writeln!(
            output,
            "\nLadder {} of {}: {} -> {} (par {}, at most {} moves)",
            position + 1,
            public.ladders.len(),
            ladder.start.text().to_uppercase(),
            ladder.end.text().to_uppercase(),
            ladder.par,
            ladder.max_moves
        )?;

        let mut hints_used = 0;
        let end = if quit {
            LadderEnd::Quit
        } else {
            play_ladder(engine, ladder, &mut input, &mut output, &mut hints_used)?
        };

        let seconds = elapsed_seconds(started);
        let run = match end {
            LadderEnd::Solved { moves_used } => LadderRunSummary {
                ladder_id: ladder.id.clone(),
                solved: true,
                moves_used,
                par: ladder.par,
                hints_used,
                seconds,
            },
            LadderEnd::Skipped | LadderEnd::Quit => {
                quit |= matches!(end, LadderEnd::Quit);
                writeln!(output, "Run ended before this ladder was solved.")?;
                LadderRunSummary {
                    ladder_id: ladder.id.clone(),
                    solved: false,
                    moves_used: ladder.max_moves,
                    par: ladder.par,
                    hints_used,
                    seconds,
                }
            }
        };
        runs.push(run);
    }

    let summary = score_run(&runs, elapsed_seconds(started));
    let share_text = build_share_text(public.puzzle_date, &summary);

    writeln!(output)?;
    write_summary(&mut output, &summary, public.ladders.len())?;
    writeln!(output, "\n{share_text}")?;

    Ok(PlayOutcome {
        runs,
        summary,
        share_text,
    })
}

fn play_ladder<R: BufRead, W: Write>(
    engine: &PuzzleEngine,
    ladder: &PublicLadder,
    input: &mut R,
    output: &mut W,
    hints_used: &mut u32,
) -> io::Result<LadderEnd> {
    let mut entries: Vec<String> = Vec::new();
    let mut line = String::new();

    loop {
        write!(output, "{}> ", chain(ladder, &entries))?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(LadderEnd::Quit);
        }

        let before = entries.len();
        let command = normalize(&line);
        match command.as_str() {
            "" => continue,
            "quit" | "q" | "exit" => return Ok(LadderEnd::Quit),
            "skip" => return Ok(LadderEnd::Skipped),
            "undo" | "u" => {
                if entries.pop().is_none() {
                    writeln!(output, "Nothing to undo.")?;
                }
                continue;
            }
            "hint" | "?" => {
                let Some(hint) = engine.find_hint(ladder, &entries) else {
                    writeln!(output, "No hint available. Keep building your chain.")?;
                    continue;
                };
                *hints_used += 1;
                let word = hint.word.to_string();
                if hint.index < entries.len() {
                    entries[hint.index] = word;
                } else {
                    entries.push(word);
                }
                writeln!(
                    output,
                    "Hint revealed step {}: {}.",
                    hint.index + 1,
                    hint.word.text().to_uppercase()
                )?;
            }
            words => {
                entries.extend(words.split_whitespace().map(str::to_string));
            }
        }

        let result = engine.evaluate_attempt(ladder, &entries);
        match result.status {
            EvaluationStatus::Solved => {
                let message = if result.moves_used == ladder.par {
                    format!("Solved at par ({})!", ladder.par)
                } else {
                    format!("Solved in {} moves.", result.moves_used)
                };
                writeln!(output, "{}", chain_with_end(ladder, &result.words))?;
                writeln!(output, "{message}")?;
                return Ok(LadderEnd::Solved {
                    moves_used: result.moves_used,
                });
            }
            EvaluationStatus::Incomplete => {
                writeln!(output, "{}", result.message)?;
            }
            EvaluationStatus::Invalid => {
                writeln!(output, "{}", result.message)?;
                entries.truncate(before);
            }
        }
    }
}

fn chain(ladder: &PublicLadder, entries: &[String]) -> String {
    std::iter::once(ladder.start.text())
        .chain(entries.iter().map(String::as_str))
        .map(str::to_uppercase)
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn chain_with_end(ladder: &PublicLadder, words: &[Word]) -> String {
    std::iter::once(&ladder.start)
        .chain(words)
        .chain(std::iter::once(&ladder.end))
        .map(|word| word.text().to_uppercase())
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn write_summary<W: Write>(
    output: &mut W,
    summary: &PuzzleScoreSummary,
    ladder_count: usize,
) -> io::Result<()> {
    if summary.ladders_solved == ladder_count {
        writeln!(output, "All ladders solved.")?;
    } else {
        writeln!(
            output,
            "Run ended with {}/{ladder_count} ladders solved.",
            summary.ladders_solved
        )?;
    }

    for ladder in &summary.ladders {
        writeln!(
            output,
            "  {}: {} points (moves -{}, hints -{}, time -{})",
            ladder.ladder_id,
            ladder.final_points,
            ladder.move_penalty,
            ladder.hint_penalty,
            ladder.time_penalty
        )?;
    }
    if summary.flawless_bonus > 0 {
        writeln!(output, "  Flawless bonus: +{}", summary.flawless_bonus)?;
    }
    writeln!(
        output,
        "Score {} | Hints {} | Moves over par {}",
        summary.total_score, summary.used_hints, summary.moves_over_par
    )
}

fn elapsed_seconds(started: Instant) -> u32 {
    u32::try_from(started.elapsed().as_secs()).unwrap_or(u32::MAX)
}
