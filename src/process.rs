//! Capability interfaces for the external collaborators.
//!
//! The harness treats the strategy catalog, the evolutionary process, and
//! the head-to-head match engine as black boxes behind these traits. The
//! harness core reads only identity metadata (`name`, `is_stochastic`) and
//! clones; the play surface (`next_action`/`update`/`reset`) is driven by
//! engine implementations such as [`crate::moran::MoranProcess`] and
//! [`crate::game::IpdMatch`]. Tests exercise the harness against scripted
//! stubs of these traits.

use rand::rngs::SmallRng;

use crate::simulation::population::Population;

/// One move in a repeated two-player game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Cooperate,
    Defect,
}

impl Action {
    /// The opposite action, used for noise flips.
    #[inline]
    pub fn flipped(self) -> Action {
        match self {
            Action::Cooperate => Action::Defect,
            Action::Defect => Action::Cooperate,
        }
    }
}

/// A competing agent.
///
/// Implementations own whatever per-match memory they need (opponent
/// history, grudge flags). `clone_box` must return a fully independent
/// copy: mutating one clone's memory must never be observable through
/// another, since populations are built from clones of a single prototype.
pub trait Strategy: Send {
    /// Display name. Unique within a catalog snapshot; used as the
    /// reverse-lookup key from a reported winner back to its id.
    fn name(&self) -> &str;

    /// Whether this strategy's behavior depends on internal randomness.
    fn is_stochastic(&self) -> bool;

    /// Choose the next action from internal memory.
    fn next_action(&mut self, rng: &mut SmallRng) -> Action;

    /// Record the outcome of a turn (own action as actually played, after
    /// any noise flip, plus the opponent's).
    fn update(&mut self, own: Action, opponent: Action);

    /// Clear internal memory back to the initial state.
    fn reset(&mut self);

    /// Independent copy sharing no mutable state with `self`.
    fn clone_box(&self) -> Box<dyn Strategy>;
}

impl Clone for Box<dyn Strategy> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// An evolutionary process played to fixation.
///
/// The reset-and-replay contract: `reset` restores the initial population
/// with fresh, independent randomness, so repeated `reset`/`play` cycles
/// yield i.i.d. trials rather than cumulative ones.
pub trait FixationProcess {
    /// Restore the initial population state with independent randomness.
    fn reset(&mut self);

    /// Run to fixation. May run unboundedly for pathological pairs; no
    /// step cap is imposed here.
    fn play(&mut self);

    /// Display name of the fixated strategy.
    ///
    /// Panics if called before [`play`](FixationProcess::play) has reached
    /// fixation.
    fn winning_strategy_name(&self) -> &str;
}

/// Builds a [`FixationProcess`] from an initial population. Turn count and
/// noise are fixed at factory construction.
pub trait ProcessFactory {
    type Process: FixationProcess;

    fn build(&mut self, population: Population) -> Self::Process;
}

/// A single fixed-length head-to-head match.
pub trait PairMatch {
    /// Play all turns.
    fn play(&mut self);

    /// Per-turn payoff pairs `(row player, column player)`.
    /// Empty before [`play`](PairMatch::play).
    fn scores(&self) -> &[(f64, f64)];
}

/// Builds a [`PairMatch`] from a pair of strategies plus a turn count.
pub trait MatchFactory {
    type Match: PairMatch;

    fn build(&mut self, a: Box<dyn Strategy>, b: Box<dyn Strategy>, turns: usize) -> Self::Match;
}
