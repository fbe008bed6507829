//! Strategy catalog adapter.
//!
//! Assigns each strategy a stable integer id by enumeration order, tags it
//! with its stochastic capability flag, and builds the name-to-id reverse
//! index used to resolve reported winners. Ids are the persisted join key
//! between `players.csv` and the result rows, so enumeration order must be
//! deterministic across runs on the same catalog snapshot.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::process::Strategy;
use crate::types::StrategyIdentity;

/// An enumerated catalog snapshot: strategies plus their frozen identities.
pub struct Catalog {
    strategies: Vec<Box<dyn Strategy>>,
    identities: Vec<StrategyIdentity>,
    name_to_id: HashMap<String, usize>,
}

impl Catalog {
    /// Enumerate a catalog, assigning ids 0.. in input order.
    ///
    /// Fails on an empty input and on duplicate display names. The name is
    /// the only way to map a reported winner back to an id, so a collision
    /// must fail here, before any trial runs, rather than corrupt the join
    /// later.
    pub fn new(strategies: Vec<Box<dyn Strategy>>) -> Result<Self> {
        if strategies.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        let mut identities = Vec::with_capacity(strategies.len());
        let mut name_to_id = HashMap::with_capacity(strategies.len());
        for (id, strategy) in strategies.iter().enumerate() {
            let name = strategy.name().to_string();
            if name_to_id.insert(name.clone(), id).is_some() {
                return Err(Error::DuplicateStrategyName { name });
            }
            identities.push(StrategyIdentity {
                id,
                name,
                stochastic: strategy.is_stochastic(),
            });
        }

        Ok(Self {
            strategies,
            identities,
            name_to_id,
        })
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Frozen identities in id order.
    pub fn identities(&self) -> &[StrategyIdentity] {
        &self.identities
    }

    /// The strategy with the given id.
    pub fn strategy(&self, id: usize) -> &dyn Strategy {
        self.strategies[id].as_ref()
    }

    /// Resolve a display name back to its id.
    pub fn resolve(&self, name: &str) -> Option<usize> {
        self.name_to_id.get(name).copied()
    }

    /// Partition ids by the stochastic capability flag, preserving
    /// enumeration order within each subset.
    ///
    /// Returns `(stochastic, deterministic)`.
    pub fn classify(&self) -> (Vec<usize>, Vec<usize>) {
        let mut stochastic = Vec::new();
        let mut deterministic = Vec::new();
        for identity in &self.identities {
            if identity.stochastic {
                stochastic.push(identity.id);
            } else {
                deterministic.push(identity.id);
            }
        }
        (stochastic, deterministic)
    }
}
