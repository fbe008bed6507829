//! Reference Moran process over iterated prisoner's dilemma populations.
//!
//! Each generation, every pair of population members plays a fixed-length
//! match and each member's fitness is its total payoff. One member is then
//! chosen to reproduce with probability proportional to fitness, its clone
//! (with fresh memory) replaces a uniformly chosen member, and the process
//! repeats until the population is homogeneous (fixation).
//!
//! The reset-and-replay contract derives a fresh RNG per reset from the
//! process seed, so repeated trials on the same initial population are
//! independent.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::game::play_turns;
use crate::process::{FixationProcess, ProcessFactory, Strategy};
use crate::simulation::population::Population;

pub struct MoranProcess {
    initial: Vec<Box<dyn Strategy>>,
    current: Vec<Box<dyn Strategy>>,
    turns: usize,
    noise: f64,
    base_seed: u64,
    resets: u64,
    rng: SmallRng,
    winner: Option<String>,
}

impl MoranProcess {
    /// Build a process over `population`, remembering it as the state that
    /// every [`reset`](FixationProcess::reset) restores.
    ///
    /// Panics if the population is empty.
    pub fn new(population: Population, turns: usize, noise: f64, seed: u64) -> Self {
        let initial = population.into_members();
        assert!(!initial.is_empty(), "Moran process needs a non-empty population");
        let current = initial.clone();
        Self {
            initial,
            current,
            turns,
            noise,
            base_seed: seed,
            resets: 0,
            rng: SmallRng::seed_from_u64(seed),
            winner: None,
        }
    }

    /// The homogeneous strategy name, if the population has fixated.
    fn fixated(&self) -> Option<&str> {
        let first = self.current[0].name();
        self.current[1..]
            .iter()
            .all(|m| m.name() == first)
            .then_some(first)
    }

    /// Total match payoff for each member over one round-robin generation.
    fn round_robin_scores(&mut self) -> Vec<f64> {
        let n = self.current.len();
        let mut totals = vec![0.0; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let (left, right) = self.current.split_at_mut(j);
                let scores = play_turns(
                    left[i].as_mut(),
                    right[0].as_mut(),
                    self.turns,
                    self.noise,
                    &mut self.rng,
                );
                for (si, sj) in scores {
                    totals[i] += si;
                    totals[j] += sj;
                }
            }
        }
        totals
    }

    /// Fitness-proportional parent selection (uniform when all fitness is
    /// zero, e.g. a single-member population with no matches).
    fn select_parent(&mut self, scores: &[f64]) -> usize {
        let total: f64 = scores.iter().sum();
        if total <= 0.0 {
            return self.rng.random_range(0..scores.len());
        }
        let mut target = self.rng.random::<f64>() * total;
        for (i, score) in scores.iter().enumerate() {
            target -= score;
            if target <= 0.0 {
                return i;
            }
        }
        scores.len() - 1
    }
}

impl FixationProcess for MoranProcess {
    fn reset(&mut self) {
        self.resets += 1;
        self.rng = SmallRng::seed_from_u64(self.base_seed.wrapping_add(self.resets));
        self.current = self.initial.iter().map(|m| m.clone_box()).collect();
        self.winner = None;
    }

    fn play(&mut self) {
        loop {
            if let Some(name) = self.fixated().map(str::to_string) {
                self.winner = Some(name);
                return;
            }
            let scores = self.round_robin_scores();
            let parent = self.select_parent(&scores);
            let dead = self.rng.random_range(0..self.current.len());
            let mut child = self.current[parent].clone_box();
            child.reset();
            self.current[dead] = child;
        }
    }

    fn winning_strategy_name(&self) -> &str {
        self.winner
            .as_deref()
            .expect("winning_strategy_name() called before fixation")
    }
}

/// Builds [`MoranProcess`]es with a distinct seed stream per population.
pub struct MoranFactory {
    turns: usize,
    noise: f64,
    rng: SmallRng,
}

impl MoranFactory {
    pub fn new(turns: usize, noise: f64, seed: u64) -> Self {
        Self {
            turns,
            noise,
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl ProcessFactory for MoranFactory {
    type Process = MoranProcess;

    fn build(&mut self, population: Population) -> MoranProcess {
        MoranProcess::new(population, self.turns, self.noise, self.rng.random())
    }
}
