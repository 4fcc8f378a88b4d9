//! Word Rung - CLI
//!
//! Generate, inspect and play daily word-ladder puzzles.

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use log::info;
use std::io;
use word_rung::{
    commands::{
        analyze_graph, evaluate_entries, find_path, generate_batch, generate_puzzle, run_play,
        run_survey,
    },
    core::DateKey,
    engine::PuzzleEngine,
    output::{
        logger, print_evaluation, print_generate_result, print_graph_report, print_path_report,
        print_survey_statistics,
    },
    puzzle::{ClientPuzzle, GeneratorConfig},
    wordlists::Dictionary,
};

#[derive(Parser)]
#[command(
    name = "word_rung",
    about = "Daily word-ladder puzzles: deterministic generation, validation, hints and scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a word-per-line file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Start words tried per ladder before generation gives up
    #[arg(long, global = true)]
    attempt_limit: Option<usize>,

    /// End-word candidates tried per start word
    #[arg(long, global = true)]
    candidate_sample: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a daily puzzle in the terminal (default)
    Play {
        /// Puzzle date as YYYY-MM-DD (default: today, UTC)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Generate the puzzle for one date
    Generate {
        /// Puzzle date as YYYY-MM-DD (default: today, UTC)
        #[arg(short, long)]
        date: Option<String>,

        /// Seed offset; 0 is the canonical puzzle for the date
        #[arg(short, long, default_value = "0")]
        offset: u64,

        /// Show solutions
        #[arg(short, long)]
        reveal: bool,

        /// Print JSON instead of the formatted view
        #[arg(long)]
        json: bool,
    },

    /// Generate puzzles for consecutive dates
    Batch {
        /// First date as YYYY-MM-DD (default: today, UTC)
        #[arg(short, long)]
        start: Option<String>,

        /// Number of puzzles (1-10)
        #[arg(short = 'n', long, default_value = "3")]
        count: usize,

        /// Show solutions
        #[arg(short, long)]
        reveal: bool,

        /// Print JSON instead of the formatted view
        #[arg(long)]
        json: bool,
    },

    /// Generate and check every puzzle over a range of dates
    Survey {
        /// First date as YYYY-MM-DD (default: today, UTC)
        #[arg(short, long)]
        start: Option<String>,

        /// Number of days to survey
        #[arg(short = 'n', long, default_value = "365")]
        days: usize,
    },

    /// Evaluate entries for a ladder and suggest the next step
    Evaluate {
        /// Start word
        #[arg(long)]
        start: String,

        /// End word
        #[arg(long)]
        end: String,

        /// Move allowance
        #[arg(short, long, default_value = "8")]
        max_moves: usize,

        /// Bridge words, top to bottom
        entries: Vec<String>,
    },

    /// Find the shortest ladder between two words
    Path {
        from: String,
        to: String,

        /// Maximum number of moves to search
        #[arg(long, default_value = "12")]
        max_depth: usize,
    },

    /// Show word graph statistics for the wordlist
    Graph,
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    let dictionary = match wordlist {
        "embedded" => Dictionary::embedded(),
        path => Dictionary::from_file(path)
            .with_context(|| format!("failed to read wordlist {path}"))?,
    };

    if dictionary.is_empty() {
        bail!("wordlist '{wordlist}' has no valid 4-letter words");
    }
    info!("loaded {} words from {wordlist}", dictionary.len());
    Ok(dictionary)
}

fn build_engine(cli: &Cli) -> Result<PuzzleEngine> {
    let dictionary = load_dictionary(&cli.wordlist)?;

    let mut config = GeneratorConfig::default();
    if let Some(limit) = cli.attempt_limit {
        config.attempt_limit = limit;
    }
    if let Some(sample) = cli.candidate_sample {
        config.candidate_sample = sample;
    }

    let engine = PuzzleEngine::with_config(dictionary, config);
    info!(
        "word graph: {} words, {} edges",
        engine.graph().len(),
        engine.graph().edge_count()
    );
    Ok(engine)
}

fn parse_date(date: Option<&str>) -> Result<DateKey> {
    date.map_or_else(|| Ok(DateKey::today()), |text| Ok(DateKey::parse(text)?))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose)?;

    let engine = build_engine(&cli)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { date: None });

    match command {
        Commands::Play { date } => run_play_command(&engine, date.as_deref()),
        Commands::Generate {
            date,
            offset,
            reveal,
            json,
        } => run_generate_command(&engine, date.as_deref(), offset, reveal, json),
        Commands::Batch {
            start,
            count,
            reveal,
            json,
        } => run_batch_command(&engine, start.as_deref(), count, reveal, json),
        Commands::Survey { start, days } => run_survey_command(&engine, start.as_deref(), days),
        Commands::Evaluate {
            start,
            end,
            max_moves,
            entries,
        } => {
            let result = evaluate_entries(&engine, &start, &end, max_moves, &entries)?;
            print_evaluation(&result);
            Ok(())
        }
        Commands::Path {
            from,
            to,
            max_depth,
        } => {
            let report = find_path(engine.graph(), &from, &to, max_depth)?;
            print_path_report(&report);
            Ok(())
        }
        Commands::Graph => {
            print_graph_report(&analyze_graph(engine.graph()));
            Ok(())
        }
    }
}

fn run_play_command(engine: &PuzzleEngine, date: Option<&str>) -> Result<()> {
    let puzzle = engine.generate_daily_puzzle(parse_date(date)?)?;
    run_play(engine, &puzzle, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}

fn run_generate_command(
    engine: &PuzzleEngine,
    date: Option<&str>,
    offset: u64,
    reveal: bool,
    json: bool,
) -> Result<()> {
    let result = generate_puzzle(engine, parse_date(date)?, offset)?;

    if json {
        let client = engine.sanitize_for_client(&result.puzzles[0], reveal);
        println!("{}", serde_json::to_string_pretty(&client)?);
    } else {
        print_generate_result(&result, reveal);
    }
    Ok(())
}

fn run_batch_command(
    engine: &PuzzleEngine,
    start: Option<&str>,
    count: usize,
    reveal: bool,
    json: bool,
) -> Result<()> {
    let result = generate_batch(engine, parse_date(start)?, count)?;

    if json {
        let clients: Vec<ClientPuzzle> = result
            .puzzles
            .iter()
            .map(|puzzle| engine.sanitize_for_client(puzzle, reveal))
            .collect();
        println!("{}", serde_json::to_string_pretty(&clients)?);
    } else {
        print_generate_result(&result, reveal);
    }
    Ok(())
}

fn run_survey_command(engine: &PuzzleEngine, start: Option<&str>, days: usize) -> Result<()> {
    let start = parse_date(start)?;
    println!("🎯 Surveying {days} days from {start}...");

    let stats = run_survey(engine, start, days, true)?;
    print_survey_statistics(&stats);

    if !stats.is_healthy() {
        bail!(
            "survey found {} failure(s) and {} invariant violation(s)",
            stats.failures.len(),
            stats.violations.len()
        );
    }
    Ok(())
}
