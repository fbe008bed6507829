//! Population construction for the evolutionary process.
//!
//! A population is an ordered multiset of independently cloned strategy
//! instances. Order matters: the trial runner places exactly one challenger
//! instance at the front, followed by N-1 residents.

use crate::process::Strategy;

/// An ordered multiset of strategy instances.
///
/// Invariant: every member is an independent clone, so one trial's internal
/// strategy state can never leak into another member.
pub struct Population {
    members: Vec<Box<dyn Strategy>>,
}

impl Population {
    pub fn new(members: Vec<Box<dyn Strategy>>) -> Self {
        Self { members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[Box<dyn Strategy>] {
        &self.members
    }

    pub fn members_mut(&mut self) -> &mut [Box<dyn Strategy>] {
        &mut self.members
    }

    pub fn into_members(self) -> Vec<Box<dyn Strategy>> {
        self.members
    }
}

/// Expand `(strategy, weight)` pairs into a flat population.
///
/// For each pair, appends `weight` independent clones, preserving input
/// order. A composition of (1, N-1) therefore always places one instance of
/// the first strategy at position 0. All-zero weights yield a legal empty
/// population; callers that need a minimum size check it themselves.
pub fn build_population(weighted: &[(&dyn Strategy, usize)]) -> Population {
    let total: usize = weighted.iter().map(|(_, w)| w).sum();
    let mut members = Vec::with_capacity(total);
    for (strategy, weight) in weighted {
        for _ in 0..*weight {
            members.push(strategy.clone_box());
        }
    }
    Population::new(members)
}
