//! Reference strategy catalog for the iterated prisoner's dilemma.
//!
//! Classic memory-one (and memory-zero) strategies sufficient to exercise
//! the full pairwise harness. Only `Random` carries the stochastic flag;
//! everything else is fully reproducible.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::process::{Action, Strategy};

/// The reference catalog, in the enumeration order that fixes ids.
pub fn all() -> Vec<Box<dyn Strategy>> {
    vec![
        Box::new(Cooperator),
        Box::new(Defector),
        Box::new(TitForTat::default()),
        Box::new(Grudger::default()),
        Box::new(Alternator::default()),
        Box::new(WinStayLoseShift::default()),
        Box::new(Random),
    ]
}

/// Always cooperates.
#[derive(Clone, Copy, Default)]
pub struct Cooperator;

impl Strategy for Cooperator {
    fn name(&self) -> &str {
        "Cooperator"
    }
    fn is_stochastic(&self) -> bool {
        false
    }
    fn next_action(&mut self, _rng: &mut SmallRng) -> Action {
        Action::Cooperate
    }
    fn update(&mut self, _own: Action, _opponent: Action) {}
    fn reset(&mut self) {}
    fn clone_box(&self) -> Box<dyn Strategy> {
        Box::new(*self)
    }
}

/// Always defects.
#[derive(Clone, Copy, Default)]
pub struct Defector;

impl Strategy for Defector {
    fn name(&self) -> &str {
        "Defector"
    }
    fn is_stochastic(&self) -> bool {
        false
    }
    fn next_action(&mut self, _rng: &mut SmallRng) -> Action {
        Action::Defect
    }
    fn update(&mut self, _own: Action, _opponent: Action) {}
    fn reset(&mut self) {}
    fn clone_box(&self) -> Box<dyn Strategy> {
        Box::new(*self)
    }
}

/// Cooperates first, then echoes the opponent's previous action.
#[derive(Clone, Default)]
pub struct TitForTat {
    last_opponent: Option<Action>,
}

impl Strategy for TitForTat {
    fn name(&self) -> &str {
        "Tit For Tat"
    }
    fn is_stochastic(&self) -> bool {
        false
    }
    fn next_action(&mut self, _rng: &mut SmallRng) -> Action {
        self.last_opponent.unwrap_or(Action::Cooperate)
    }
    fn update(&mut self, _own: Action, opponent: Action) {
        self.last_opponent = Some(opponent);
    }
    fn reset(&mut self) {
        self.last_opponent = None;
    }
    fn clone_box(&self) -> Box<dyn Strategy> {
        Box::new(self.clone())
    }
}

/// Cooperates until the opponent defects once, then defects forever.
#[derive(Clone, Default)]
pub struct Grudger {
    grudge: bool,
}

impl Strategy for Grudger {
    fn name(&self) -> &str {
        "Grudger"
    }
    fn is_stochastic(&self) -> bool {
        false
    }
    fn next_action(&mut self, _rng: &mut SmallRng) -> Action {
        if self.grudge {
            Action::Defect
        } else {
            Action::Cooperate
        }
    }
    fn update(&mut self, _own: Action, opponent: Action) {
        if opponent == Action::Defect {
            self.grudge = true;
        }
    }
    fn reset(&mut self) {
        self.grudge = false;
    }
    fn clone_box(&self) -> Box<dyn Strategy> {
        Box::new(self.clone())
    }
}

/// Cooperates first, then plays the opposite of its own previous action.
#[derive(Clone, Default)]
pub struct Alternator {
    last_own: Option<Action>,
}

impl Strategy for Alternator {
    fn name(&self) -> &str {
        "Alternator"
    }
    fn is_stochastic(&self) -> bool {
        false
    }
    fn next_action(&mut self, _rng: &mut SmallRng) -> Action {
        match self.last_own {
            None => Action::Cooperate,
            Some(action) => action.flipped(),
        }
    }
    fn update(&mut self, own: Action, _opponent: Action) {
        self.last_own = Some(own);
    }
    fn reset(&mut self) {
        self.last_own = None;
    }
    fn clone_box(&self) -> Box<dyn Strategy> {
        Box::new(self.clone())
    }
}

/// Pavlov: cooperates first, repeats its previous action after a good
/// outcome (opponent cooperated), switches after a bad one.
#[derive(Clone, Default)]
pub struct WinStayLoseShift {
    last_own: Option<Action>,
    last_opponent: Option<Action>,
}

impl Strategy for WinStayLoseShift {
    fn name(&self) -> &str {
        "Win-Stay Lose-Shift"
    }
    fn is_stochastic(&self) -> bool {
        false
    }
    fn next_action(&mut self, _rng: &mut SmallRng) -> Action {
        match (self.last_own, self.last_opponent) {
            (Some(own), Some(Action::Cooperate)) => own,
            (Some(own), Some(Action::Defect)) => own.flipped(),
            _ => Action::Cooperate,
        }
    }
    fn update(&mut self, own: Action, opponent: Action) {
        self.last_own = Some(own);
        self.last_opponent = Some(opponent);
    }
    fn reset(&mut self) {
        self.last_own = None;
        self.last_opponent = None;
    }
    fn clone_box(&self) -> Box<dyn Strategy> {
        Box::new(self.clone())
    }
}

/// Fair coin flip each turn. The only stochastic entry in the catalog.
#[derive(Clone, Copy, Default)]
pub struct Random;

impl Strategy for Random {
    fn name(&self) -> &str {
        "Random"
    }
    fn is_stochastic(&self) -> bool {
        true
    }
    fn next_action(&mut self, rng: &mut SmallRng) -> Action {
        if rng.random_bool(0.5) {
            Action::Cooperate
        } else {
            Action::Defect
        }
    }
    fn update(&mut self, _own: Action, _opponent: Action) {}
    fn reset(&mut self) {}
    fn clone_box(&self) -> Box<dyn Strategy> {
        Box::new(*self)
    }
}
