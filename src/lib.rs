//! Word Rung
//!
//! A daily word-ladder puzzle engine: every day gets three ladders of rising
//! difficulty, generated deterministically from the date over a word graph.
//! Players chain 4-letter words changing one letter at a time; the engine
//! validates attempts, hands out hints and scores runs.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use word_rung::core::DateKey;
//! use word_rung::engine::PuzzleEngine;
//!
//! let engine = PuzzleEngine::embedded();
//! let puzzle = engine.generate_daily_puzzle(DateKey::today()).unwrap();
//!
//! let ladder = &puzzle.ladders[0];
//! let result = engine.evaluate_attempt(ladder, ladder.intermediates());
//! println!("{}: {}", ladder.id, result.message);
//! ```

// Core domain types
pub mod core;

// Engine error types
pub mod error;

// Word lists
pub mod wordlists;

// Word graph and path finding
pub mod graph;

// Ladder and puzzle model, generation
pub mod puzzle;

// Validation, hints, scoring
pub mod game;

// Shared engine handle
pub mod engine;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
