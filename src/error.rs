//! Error taxonomy for the experiment harness.
//!
//! Configuration problems (bad CLI arguments) are handled at the binary
//! boundary; everything the library itself can detect is enumerated here.
//! No variant is ever swallowed: any error aborts the run, leaving rows
//! already flushed to the append-mode output as valid partial data.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The trial runner needs one challenger plus at least one resident.
    #[error("population size {size} is too small (need a challenger plus at least one resident)")]
    PopulationTooSmall { size: usize },

    /// Two catalog entries stringify identically. Display names are the
    /// reverse-join key from winner back to id, so a collision would
    /// silently corrupt the result rows.
    #[error("duplicate strategy display name '{name}' in catalog")]
    DuplicateStrategyName { name: String },

    /// The evolutionary process reported a winner that is not in the
    /// identity manifest. Signals a desynchronized catalog snapshot.
    #[error("winner '{name}' not found in the identity manifest")]
    UnknownWinner { name: String },

    /// Nothing to enumerate.
    #[error("strategy catalog is empty")]
    EmptyCatalog,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
