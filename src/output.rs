//! CSV result sink.
//!
//! Two output modes with different durability needs:
//!
//! - Overwrite mode for the identity manifest (`players.csv`) and the
//!   deterministic fitness table (`deterministic.csv`): the whole table is
//!   in memory, the file is truncated and rewritten in one shot.
//! - Append mode for stochastic trial outcomes (`sims_<N>.csv`): the writer
//!   is opened once and held across the full pair sweep, with one flush per
//!   pair batch. A crash mid-sweep loses at most the current pair's rows;
//!   everything flushed earlier stays valid, so a long O(n²) sweep can be
//!   resumed or inspected mid-run.
//!
//! Rows are headerless: downstream consumers join by column position.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::{FitnessRow, StrategyIdentity, TrialRow};

/// Destination for trial outcome rows. The trial runner writes through this
/// seam so harness tests can capture batches in memory.
pub trait TrialSink {
    /// Append one pair's worth of rows and make them durable.
    fn append_batch(&mut self, rows: &[TrialRow]) -> Result<()>;
}

/// Writers rooted at one output directory.
pub struct ResultSink {
    dir: PathBuf,
}

impl ResultSink {
    /// Root the sink at `dir`, creating the directory if absent.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the append-mode trial file for population size `n`.
    pub fn trials_path(&self, n: usize) -> PathBuf {
        self.dir.join(format!("sims_{n}.csv"))
    }

    /// Overwrite `players.csv` with the identity manifest.
    pub fn write_players(&self, identities: &[StrategyIdentity]) -> Result<()> {
        let file = File::create(self.dir.join("players.csv"))?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        for identity in identities {
            writer.serialize(identity)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Overwrite `deterministic.csv` with the fitness table.
    pub fn write_deterministic(&self, rows: &[FitnessRow]) -> Result<()> {
        let file = File::create(self.dir.join("deterministic.csv"))?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Open the append-mode trial writer for population size `n`.
    pub fn open_trials(&self, n: usize) -> Result<TrialWriter> {
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(self.trials_path(n))?;
        Ok(TrialWriter {
            writer: csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(file),
        })
    }
}

/// Append-mode writer on `sims_<N>.csv`, held open across the pair sweep.
pub struct TrialWriter {
    writer: csv::Writer<File>,
}

impl TrialSink for TrialWriter {
    fn append_batch(&mut self, rows: &[TrialRow]) -> Result<()> {
        for row in rows {
            self.writer.serialize(row)?;
        }
        // Flush per batch: completed pairs are durable even if a later
        // pair fails.
        self.writer.flush()?;
        Ok(())
    }
}
