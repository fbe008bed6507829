//! Stochastic pairwise trial runner.
//!
//! For every ordered pair of strategies (i, j), i != j, builds a population
//! of one challenger i plus N-1 residents j and plays `repetitions`
//! independent trials of the evolutionary process to fixation, recording the
//! winner's id per trial.
//!
//! Pairs where BOTH strategies are stochastic are skipped: a trial of such a
//! pair conflates strategy-internal randomness with population-dynamics
//! randomness in the same trial count, inflating variance per trial. All
//! other pairs run the full repetition count.

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::output::TrialSink;
use crate::process::{FixationProcess, ProcessFactory};
use crate::types::{ExperimentConfig, TrialRow};

use super::catalog::Catalog;
use super::population::build_population;

/// Run the full pair sweep, appending one batch per pair to `sink`.
///
/// Each trial resets the process to its initial population state before
/// playing, so repeated trials are i.i.d. rather than cumulative. Winner
/// names are resolved through the catalog's identity table; an unknown name
/// means the catalog snapshot that assigned ids is not the one that ran the
/// trials, and aborts the sweep. Returns the total number of rows emitted.
pub fn run_pairwise_trials<F, S>(
    catalog: &Catalog,
    factory: &mut F,
    config: &ExperimentConfig,
    sink: &mut S,
) -> Result<u64>
where
    F: ProcessFactory,
    S: TrialSink,
{
    if config.population_size < 2 {
        return Err(Error::PopulationTooSmall {
            size: config.population_size,
        });
    }

    let identities = catalog.identities();
    let n = catalog.len();
    let mut total_rows: u64 = 0;

    for i in 0..n {
        info!(challenger = i, of = n, "pair sweep progress");
        for j in 0..n {
            if i == j {
                continue;
            }
            if identities[i].stochastic && identities[j].stochastic {
                debug!(challenger = i, resident = j, "skipping both-stochastic pair");
                continue;
            }

            let population = build_population(&[
                (catalog.strategy(i), 1),
                (catalog.strategy(j), config.population_size - 1),
            ]);
            let mut process = factory.build(population);

            let mut rows = Vec::with_capacity(config.repetitions);
            for _ in 0..config.repetitions {
                process.reset();
                process.play();
                let winner = process.winning_strategy_name();
                let winner_id = catalog.resolve(winner).ok_or_else(|| Error::UnknownWinner {
                    name: winner.to_string(),
                })?;
                rows.push(TrialRow {
                    challenger: i,
                    resident: j,
                    winner: winner_id,
                });
            }

            // One append per pair: amortizes I/O and gives pair-level
            // atomicity on crash.
            sink.append_batch(&rows)?;
            total_rows += rows.len() as u64;
        }
    }

    Ok(total_rows)
}
