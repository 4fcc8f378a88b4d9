//! Display functions for command results

use super::formatters::{create_progress_bar, ladder_rungs, status_symbol};
use crate::commands::{EvaluateResult, GenerateResult, GraphReport, PathReport, SurveyStatistics};
use crate::game::EvaluationStatus;
use crate::puzzle::DailyPuzzle;
use colored::Colorize;

/// Print a daily puzzle; solutions only when `reveal` is set
pub fn print_puzzle(puzzle: &DailyPuzzle, reveal: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {}",
        puzzle.name.bright_yellow().bold(),
        format!("({})", puzzle.puzzle_date.format_long()).bright_black()
    );
    println!("{}", "═".repeat(60).cyan());

    for ladder in &puzzle.ladders {
        let solution = reveal.then_some(ladder.solution.as_slice());
        println!(
            "\n{} {}",
            format!("{}:", ladder.id).bright_cyan().bold(),
            ladder_rungs(&ladder.start, &ladder.end, ladder.par, solution)
        );
        println!(
            "    par {}  |  up to {} moves",
            ladder.par.to_string().bright_yellow(),
            ladder.max_moves
        );
    }

    println!(
        "\n{}",
        format!("id {}  |  seed {}", puzzle.id, puzzle.seed).bright_black()
    );
}

/// Print every puzzle of a generate or batch run
pub fn print_generate_result(result: &GenerateResult, reveal: bool) {
    for puzzle in &result.puzzles {
        print_puzzle(puzzle, reveal);
    }
    println!(
        "\n{}",
        format!(
            "Generated {} puzzle{} in {:.2}s",
            result.puzzles.len(),
            if result.puzzles.len() == 1 { "" } else { "s" },
            result.duration.as_secs_f64()
        )
        .green()
    );
}

/// Print the evaluation of an ad-hoc ladder
pub fn print_evaluation(result: &EvaluateResult) {
    let ladder = &result.ladder;
    let evaluation = &result.evaluation;

    println!(
        "\n{} {}",
        "Ladder:".bright_cyan().bold(),
        ladder_rungs(&ladder.start, &ladder.end, ladder.par, None)
    );
    println!("   Par:        {}", ladder.par);
    println!("   Max moves:  {}", ladder.max_moves);

    let message = match evaluation.status {
        EvaluationStatus::Solved => evaluation.message.green().bold(),
        EvaluationStatus::Invalid => evaluation.message.red(),
        EvaluationStatus::Incomplete => evaluation.message.yellow(),
    };
    println!(
        "\n{} {} {}",
        status_symbol(evaluation.status),
        evaluation.status.to_string().to_uppercase().bold(),
        message
    );
    println!("   Moves used: {}", evaluation.moves_used);

    if let Some(hint) = &result.hint {
        println!(
            "\n💡 Hint: step {} is {}",
            hint.index + 1,
            hint.word.text().to_uppercase().bright_yellow().bold()
        );
    }
}

/// Print a shortest-path query result
pub fn print_path_report(report: &PathReport) {
    let from = report.from.text().to_uppercase();
    let to = report.to.text().to_uppercase();

    match &report.path {
        Some(path) => {
            let rungs = path
                .iter()
                .map(|word| word.text().to_uppercase())
                .collect::<Vec<_>>()
                .join(" → ");
            println!("\n{rungs}");
            println!(
                "{}",
                format!("{} move(s) from {from} to {to}", path.len() - 1).green()
            );
        }
        None => {
            println!(
                "\n{}",
                format!(
                    "❌ No path from {from} to {to} within {} moves",
                    report.max_depth
                )
                .red()
            );
        }
    }
}

/// Print word graph statistics
pub fn print_graph_report(report: &GraphReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD GRAPH".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Shape:".bright_cyan().bold());
    println!("   Words:              {}", report.words);
    println!("   Edges:              {}", report.edges);
    println!("   Average degree:     {:.2}", report.average_degree);
    if let Some((word, degree)) = &report.max_degree {
        println!(
            "   Best connected:     {} ({degree} neighbors)",
            word.text().to_uppercase().bright_yellow()
        );
    }

    println!("\n🔗 {}", "Connectivity:".bright_cyan().bold());
    println!("   Components:         {}", report.components);
    println!(
        "   Largest component:  {} words",
        report.largest_component.to_string().green()
    );
    let isolated = report.isolated.to_string();
    println!(
        "   Isolated words:     {}",
        if report.isolated == 0 {
            isolated.green()
        } else {
            isolated.yellow()
        }
    );
}

/// Print survey statistics
pub fn print_survey_statistics(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Generation Survey from {} ", stats.start);
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall".bright_cyan().bold());
    println!("  Days surveyed:       {}", stats.total_days);
    if stats.total_days > 0 {
        println!(
            "  Generated:           {} {}",
            stats.generated,
            format!(
                "({:.1}%)",
                stats.generated as f64 / stats.total_days as f64 * 100.0
            )
            .green()
        );
    }
    if !stats.failures.is_empty() {
        println!(
            "  Failed:              {}",
            stats.failures.len().to_string().red()
        );
    }
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    if stats.generated > 0 {
        println!("\n📈 {}", "Par Distribution".bright_cyan().bold());
        let max_count = stats.par_distribution.values().copied().max().unwrap_or(1);
        for (par, &count) in &stats.par_distribution {
            let bar = create_progress_bar(count as f64, max_count as f64, 40);
            println!("  par {par}: {} {count:5}", bar.green());
        }

        println!("\n🪜 {}", "Average Par by Ladder".bright_cyan().bold());
        for (position, average) in stats.average_par.iter().enumerate() {
            println!("  L{}: {average:.2}", position + 1);
        }
    }

    if !stats.failures.is_empty() {
        println!("\n😰 {}", "Failures".yellow().bold());
        for (date, error) in stats.failures.iter().take(10) {
            println!("  {} {error}", date.to_string().yellow());
        }
    }

    if !stats.violations.is_empty() {
        println!("\n❌ {}", "Invariant Violations".red().bold());
        for (date, violation) in stats.violations.iter().take(10) {
            println!("  {} {violation}", date.to_string().red());
        }
    }

    println!();
    if stats.is_healthy() {
        println!("{}", "✅ Every puzzle generated and validated".green().bold());
    } else {
        println!("{}", "⚠️  Survey found problems".yellow().bold());
    }
}
