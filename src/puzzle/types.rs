//! Ladder and daily puzzle types
//!
//! `Ladder` and `DailyPuzzle` carry the answer. `PublicLadder` and
//! `PublicPuzzle` are the same shapes with the solution withheld, for handing
//! a puzzle to a player. Deserialization goes through the `*Record` types so
//! that data coming back from storage is checked before the engine sees it.

use crate::core::{DateKey, Word};
use crate::error::RecordError;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// Ladders in every daily puzzle
pub const LADDERS_PER_PUZZLE: usize = 3;

/// Accepted par range for a stored ladder
pub const PAR_RANGE: (usize, usize) = (2, 12);

/// Accepted `max_moves` range for a stored ladder
pub const MAX_MOVES_RANGE: (usize, usize) = (2, 16);

/// What the validator and hint engine need to know about a ladder
///
/// Implemented by both the full and the public ladder, so play-time checks
/// never depend on the hidden solution.
pub trait LadderShape {
    fn id(&self) -> &str;
    fn start(&self) -> &Word;
    fn end(&self) -> &Word;
    fn par(&self) -> usize;
    fn max_moves(&self) -> usize;
}

/// A single start-to-end word ladder with its canonical solution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "LadderRecord")]
pub struct Ladder {
    pub id: String,
    pub start: Word,
    pub end: Word,
    pub par: usize,
    pub max_moves: usize,
    /// Canonical shortest path, `start` and `end` included
    pub solution: Vec<Word>,
}

impl Ladder {
    /// Solution words strictly between `start` and `end`
    #[must_use]
    pub fn intermediates(&self) -> &[Word] {
        match self.solution.len() {
            0..=2 => &[],
            len => &self.solution[1..len - 1],
        }
    }

    /// The same ladder without its solution
    #[must_use]
    pub fn to_public(&self) -> PublicLadder {
        PublicLadder {
            id: self.id.clone(),
            start: self.start.clone(),
            end: self.end.clone(),
            par: self.par,
            max_moves: self.max_moves,
        }
    }
}

impl LadderShape for Ladder {
    fn id(&self) -> &str {
        &self.id
    }
    fn start(&self) -> &Word {
        &self.start
    }
    fn end(&self) -> &Word {
        &self.end
    }
    fn par(&self) -> usize {
        self.par
    }
    fn max_moves(&self) -> usize {
        self.max_moves
    }
}

/// A ladder as shown to players
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicLadder {
    pub id: String,
    pub start: Word,
    pub end: Word,
    pub par: usize,
    pub max_moves: usize,
}

impl LadderShape for PublicLadder {
    fn id(&self) -> &str {
        &self.id
    }
    fn start(&self) -> &Word {
        &self.start
    }
    fn end(&self) -> &Word {
        &self.end
    }
    fn par(&self) -> usize {
        self.par
    }
    fn max_moves(&self) -> usize {
        self.max_moves
    }
}

/// One day's puzzle: three ladders with pairwise disjoint solutions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "PuzzleRecord")]
pub struct DailyPuzzle {
    pub id: String,
    pub puzzle_date: DateKey,
    pub name: String,
    pub seed: u64,
    /// RFC 3339 timestamp of midnight UTC on `puzzle_date`
    pub created_at: String,
    pub ladders: Vec<Ladder>,
}

impl DailyPuzzle {
    /// The same puzzle with every solution withheld
    #[must_use]
    pub fn to_public(&self) -> PublicPuzzle {
        PublicPuzzle {
            id: self.id.clone(),
            puzzle_date: self.puzzle_date,
            name: self.name.clone(),
            seed: self.seed,
            created_at: self.created_at.clone(),
            ladders: self.ladders.iter().map(Ladder::to_public).collect(),
        }
    }

    /// Look up a ladder by id
    #[must_use]
    pub fn ladder(&self, id: &str) -> Option<&Ladder> {
        self.ladders.iter().find(|ladder| ladder.id == id)
    }
}

/// A puzzle as shown to players
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicPuzzle {
    pub id: String,
    pub puzzle_date: DateKey,
    pub name: String,
    pub seed: u64,
    pub created_at: String,
    pub ladders: Vec<PublicLadder>,
}

/// What a consumer receives: the public projection, or the full puzzle in
/// trusted contexts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ClientPuzzle {
    Full(DailyPuzzle),
    Public(PublicPuzzle),
}

/// Prepare a puzzle for an external consumer
///
/// Solutions are stripped unless `include_solution` is set, which is meant
/// for trusted debugging only.
#[must_use]
pub fn sanitize_for_client(puzzle: &DailyPuzzle, include_solution: bool) -> ClientPuzzle {
    if include_solution {
        ClientPuzzle::Full(puzzle.clone())
    } else {
        ClientPuzzle::Public(puzzle.to_public())
    }
}

/// Unchecked ladder as read from storage
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LadderRecord {
    pub id: String,
    pub start: String,
    pub end: String,
    pub par: usize,
    pub max_moves: usize,
    pub solution: Vec<String>,
}

/// Unchecked puzzle as read from storage
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleRecord {
    pub id: String,
    pub puzzle_date: String,
    pub name: String,
    pub seed: u64,
    pub created_at: String,
    pub ladders: Vec<LadderRecord>,
}

fn non_empty(field: &'static str, value: &str) -> Result<(), RecordError> {
    if value.trim().is_empty() {
        return Err(RecordError::Empty { field });
    }
    Ok(())
}

fn within(field: &'static str, value: usize, (min, max): (usize, usize)) -> Result<(), RecordError> {
    if !(min..=max).contains(&value) {
        return Err(RecordError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

impl TryFrom<LadderRecord> for Ladder {
    type Error = RecordError;

    fn try_from(record: LadderRecord) -> Result<Self, Self::Error> {
        non_empty("id", &record.id)?;
        within("par", record.par, PAR_RANGE)?;
        within("maxMoves", record.max_moves, MAX_MOVES_RANGE)?;
        if record.max_moves < record.par {
            return Err(RecordError::MovesBelowPar {
                par: record.par,
                max_moves: record.max_moves,
            });
        }
        within(
            "solution length",
            record.solution.len(),
            (2, PAR_RANGE.1 + 1),
        )?;

        let solution = record
            .solution
            .iter()
            .map(Word::new)
            .collect::<Result<Vec<_>, _>>()?;

        let ladder = Self {
            id: record.id,
            start: Word::new(&record.start)?,
            end: Word::new(&record.end)?,
            par: record.par,
            max_moves: record.max_moves,
            solution,
        };
        ladder.check_solution()?;
        Ok(ladder)
    }
}

impl Ladder {
    /// Check that the solution is a par-length chain of distinct, adjacent
    /// words from `start` to `end`
    fn check_solution(&self) -> Result<(), RecordError> {
        // try_from has already required at least two words
        let (Some(first), Some(last)) = (self.solution.first(), self.solution.last()) else {
            return Err(RecordError::OutOfRange {
                field: "solution length",
                value: 0,
                min: 2,
                max: PAR_RANGE.1 + 1,
            });
        };

        if *first != self.start {
            return Err(RecordError::SolutionStart {
                ladder: self.id.clone(),
                expected: self.start.clone(),
                found: first.clone(),
            });
        }
        if *last != self.end {
            return Err(RecordError::SolutionEnd {
                ladder: self.id.clone(),
                expected: self.end.clone(),
                found: last.clone(),
            });
        }

        let moves = self.solution.len() - 1;
        if moves != self.par {
            return Err(RecordError::ParMismatch {
                ladder: self.id.clone(),
                par: self.par,
                moves,
            });
        }

        if let Some(pair) = self
            .solution
            .windows(2)
            .find(|pair| !pair[0].is_adjacent(&pair[1]))
        {
            return Err(RecordError::NotAdjacent {
                ladder: self.id.clone(),
                from: pair[0].clone(),
                to: pair[1].clone(),
            });
        }

        let mut seen = FxHashSet::default();
        if let Some(word) = self.solution.iter().find(|&word| !seen.insert(word)) {
            return Err(RecordError::RepeatedWord {
                ladder: self.id.clone(),
                word: word.clone(),
            });
        }

        Ok(())
    }
}

/// No solution word may belong to more than one ladder
fn check_disjoint(ladders: &[Ladder]) -> Result<(), RecordError> {
    let mut owners: FxHashMap<&Word, &str> = FxHashMap::default();
    for ladder in ladders {
        for word in &ladder.solution {
            if let Some(first) = owners.insert(word, &ladder.id) {
                return Err(RecordError::SharedWord {
                    word: word.clone(),
                    first: first.to_string(),
                    second: ladder.id.clone(),
                });
            }
        }
    }
    Ok(())
}

impl TryFrom<PuzzleRecord> for DailyPuzzle {
    type Error = RecordError;

    fn try_from(record: PuzzleRecord) -> Result<Self, Self::Error> {
        non_empty("id", &record.id)?;
        non_empty("name", &record.name)?;
        non_empty("createdAt", &record.created_at)?;
        let puzzle_date = DateKey::parse(&record.puzzle_date)?;

        if record.ladders.len() != LADDERS_PER_PUZZLE {
            return Err(RecordError::LadderCount {
                expected: LADDERS_PER_PUZZLE,
                actual: record.ladders.len(),
            });
        }

        let ladders = record
            .ladders
            .into_iter()
            .map(Ladder::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        check_disjoint(&ladders)?;

        Ok(Self {
            id: record.id,
            puzzle_date,
            name: record.name,
            seed: record.seed,
            created_at: record.created_at,
            ladders,
        })
    }
}
