//! Iterated prisoner's dilemma: payoff matrix and the head-to-head match
//! engine that backs the deterministic fitness estimator.
//!
//! Standard payoffs per turn: mutual cooperation R=3, mutual defection P=1,
//! temptation T=5 for defecting against a cooperator, sucker's payoff S=0
//! for cooperating against a defector.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::process::{Action, MatchFactory, PairMatch, Strategy};

pub const PAYOFF_R: f64 = 3.0;
pub const PAYOFF_S: f64 = 0.0;
pub const PAYOFF_T: f64 = 5.0;
pub const PAYOFF_P: f64 = 1.0;

/// Per-turn payoff for `own` played against `opponent`.
#[inline]
pub fn payoff(own: Action, opponent: Action) -> f64 {
    match (own, opponent) {
        (Action::Cooperate, Action::Cooperate) => PAYOFF_R,
        (Action::Cooperate, Action::Defect) => PAYOFF_S,
        (Action::Defect, Action::Cooperate) => PAYOFF_T,
        (Action::Defect, Action::Defect) => PAYOFF_P,
    }
}

/// Play `turns` turns between two strategies, returning per-turn payoff
/// pairs `(a, b)`.
///
/// Both strategies are reset first, so a call is a self-contained match.
/// With `noise > 0`, each emitted action is independently flipped with that
/// probability; strategies observe the actions as actually played.
pub fn play_turns(
    a: &mut dyn Strategy,
    b: &mut dyn Strategy,
    turns: usize,
    noise: f64,
    rng: &mut SmallRng,
) -> Vec<(f64, f64)> {
    a.reset();
    b.reset();

    let mut scores = Vec::with_capacity(turns);
    for _ in 0..turns {
        let mut action_a = a.next_action(rng);
        let mut action_b = b.next_action(rng);
        if noise > 0.0 {
            if rng.random::<f64>() < noise {
                action_a = action_a.flipped();
            }
            if rng.random::<f64>() < noise {
                action_b = action_b.flipped();
            }
        }

        scores.push((payoff(action_a, action_b), payoff(action_b, action_a)));
        a.update(action_a, action_b);
        b.update(action_b, action_a);
    }
    scores
}

/// One fixed-length noiseless match between two strategies.
pub struct IpdMatch {
    players: (Box<dyn Strategy>, Box<dyn Strategy>),
    turns: usize,
    rng: SmallRng,
    scores: Vec<(f64, f64)>,
}

impl PairMatch for IpdMatch {
    fn play(&mut self) {
        self.scores = play_turns(
            self.players.0.as_mut(),
            self.players.1.as_mut(),
            self.turns,
            0.0,
            &mut self.rng,
        );
    }

    fn scores(&self) -> &[(f64, f64)] {
        &self.scores
    }
}

/// Builds [`IpdMatch`]es, deriving an independent RNG per match.
pub struct IpdMatchFactory {
    rng: SmallRng,
}

impl IpdMatchFactory {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl MatchFactory for IpdMatchFactory {
    type Match = IpdMatch;

    fn build(&mut self, a: Box<dyn Strategy>, b: Box<dyn Strategy>, turns: usize) -> IpdMatch {
        IpdMatch {
            players: (a, b),
            turns,
            rng: SmallRng::seed_from_u64(self.rng.random()),
            scores: Vec::new(),
        }
    }
}
