//! Puzzle generation settings

use super::types::LADDERS_PER_PUZZLE;

/// Tunable constants for puzzle generation
///
/// The defaults were picked empirically for the embedded dictionary. None of
/// them guarantees success for every seed; a much sparser dictionary may need
/// a larger `attempt_limit` or `candidate_sample`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Lowest acceptable par for each ladder, in order
    pub par_targets: [usize; LADDERS_PER_PUZZLE],
    /// Each ladder accepts par in `target..=target + par_band`
    pub par_band: usize,
    /// Start words drawn per ladder before giving up
    pub attempt_limit: usize,
    /// End-word candidates tried per start word
    pub candidate_sample: usize,
    /// Search depth beyond the band's maximum par
    pub depth_slack: usize,
    /// Moves allowed beyond par (`max_moves = par + extra_move_allowance`)
    pub extra_move_allowance: usize,
    /// Seed distance between consecutive ladders of one puzzle
    pub ladder_seed_stride: u64,
    /// Seed distance between consecutive seed offsets of one date
    pub offset_seed_stride: u64,
    /// Largest accepted batch size (the smallest is 1)
    pub max_batch_size: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            par_targets: [3, 4, 5],
            par_band: 1,
            attempt_limit: 360,
            candidate_sample: 16,
            depth_slack: 2,
            extra_move_allowance: 4,
            ladder_seed_stride: 7919,
            offset_seed_stride: 97,
            max_batch_size: 10,
        }
    }
}

impl GeneratorConfig {
    /// Par band `(min, max)` for the ladder at `index`
    #[must_use]
    pub const fn par_band_for(&self, index: usize) -> (usize, usize) {
        let min = self.par_targets[index];
        (min, min + self.par_band)
    }

    /// BFS depth bound used while generating a ladder with the given max par
    #[must_use]
    pub const fn search_depth(&self, max_par: usize) -> usize {
        max_par + self.depth_slack
    }
}
