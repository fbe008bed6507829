//! # Fixation — pairwise fixation-probability experiments
//!
//! Empirically estimates fixation probabilities for pairs of strategies
//! competing under a Moran evolutionary process, and computes an analytic
//! relative-fitness proxy for purely deterministic pairs.
//!
//! For every ordered pair (i, j) with population size N, the harness seeds
//! one challenger of type i into N-1 residents of type j and plays many
//! independent trials to fixation, recording the winner's id per trial.
//! Pairs where both strategies are stochastic are excluded (their trials
//! mix strategy-internal randomness into the population-dynamics estimate).
//! Purely deterministic pairs additionally get a single exact head-to-head
//! fitness computation instead of repeated sampling.
//!
//! | Concern | Module |
//! |---------|--------|
//! | Collaborator capability traits | [`process`] |
//! | Catalog ids, partition, reverse lookup | [`simulation::catalog`] |
//! | Weighted population construction | [`simulation::population`] |
//! | Stochastic pair sweep | [`simulation::trials`] |
//! | Deterministic fitness sweep | [`simulation::fitness`] |
//! | CSV result sink | [`output`] |
//! | Reference IPD match engine | [`game`] |
//! | Reference strategy set | [`strategies`] |
//! | Reference Moran process | [`moran`] |
//!
//! Outputs land under the configured directory as `players.csv` (identity
//! manifest, overwritten), `sims_<N>.csv` (one row per trial, appended
//! across runs), and `deterministic.csv` (one row per deterministic pair,
//! overwritten).

pub mod error;
pub mod game;
pub mod moran;
pub mod output;
pub mod process;
pub mod simulation;
pub mod strategies;
pub mod types;

pub use error::{Error, Result};
pub use types::{ExperimentConfig, FitnessRow, StrategyIdentity, TrialRow};
