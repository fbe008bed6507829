//! Core experiment types: run configuration, strategy identities, result rows.

use std::path::PathBuf;

use serde::Serialize;

/// Configuration for one experiment run.
///
/// The output directory is explicit (not a process-wide constant) so tests
/// can run against isolated directories.
#[derive(Clone, Debug)]
pub struct ExperimentConfig {
    /// Population size N: one challenger plus N-1 residents.
    pub population_size: usize,
    /// Independent trials per ordered strategy pair.
    pub repetitions: usize,
    /// Turns per match, both inside the evolutionary process and in the
    /// deterministic head-to-head estimator.
    pub turns: usize,
    /// Probability that an emitted action is flipped.
    pub noise: f64,
    /// Master RNG seed.
    pub seed: u64,
    /// Directory that receives `players.csv`, `sims_<N>.csv`,
    /// `deterministic.csv`. Created if absent, never deleted.
    pub output_dir: PathBuf,
}

impl ExperimentConfig {
    /// Config with the standard defaults: 1000 repetitions, 100 turns,
    /// no noise, seed 42, output under `results/`.
    pub fn new(population_size: usize) -> Self {
        Self {
            population_size,
            repetitions: 1000,
            turns: 100,
            noise: 0.0,
            seed: 42,
            output_dir: PathBuf::from("results"),
        }
    }
}

/// Immutable identity of one catalog entry.
///
/// Ids are assigned by catalog enumeration order and act as the join key
/// between the identity manifest and all result rows, so they must not
/// change for the duration of a run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StrategyIdentity {
    pub id: usize,
    pub name: String,
    pub stochastic: bool,
}

/// Outcome of one completed stochastic trial.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TrialRow {
    pub challenger: usize,
    pub resident: usize,
    pub winner: usize,
}

/// Per-turn-normalized fitness for one ordered deterministic pair.
///
/// One row per pair, not per repetition: the match is fully reproducible,
/// so a single exact computation replaces the stochastic estimate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FitnessRow {
    pub row: usize,
    pub col: usize,
    pub fitness_row: f64,
    pub fitness_col: f64,
}
