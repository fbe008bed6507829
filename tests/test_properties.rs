//! Property-based tests for population construction.

use proptest::prelude::*;

use fixation::process::{Action, Strategy};
use fixation::simulation::build_population;
use rand::rngs::SmallRng;

#[derive(Clone)]
struct Tagged {
    name: String,
}

impl Tagged {
    fn new(index: usize) -> Self {
        Self {
            name: format!("strategy-{index}"),
        }
    }
}

impl Strategy for Tagged {
    fn name(&self) -> &str {
        &self.name
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
        Box::new(self.clone())
    }
}

/// Strategy: a weight vector of up to 6 entries, each weight 0..=12.
fn weights_strategy() -> impl proptest::strategy::Strategy<Value = Vec<usize>> {
    prop::collection::vec(0..=12usize, 0..=6)
}

proptest! {
    // 1. Population size equals the sum of weights
    #[test]
    fn population_size_is_weight_sum(weights in weights_strategy()) {
        let prototypes: Vec<Tagged> = (0..weights.len()).map(Tagged::new).collect();
        let weighted: Vec<(&dyn Strategy, usize)> = prototypes
            .iter()
            .zip(weights.iter())
            .map(|(p, &w)| (p as &dyn Strategy, w))
            .collect();

        let population = build_population(&weighted);
        prop_assert_eq!(population.len(), weights.iter().sum::<usize>());
    }

    // 2. Members appear in input order, in weight-sized runs
    #[test]
    fn population_preserves_input_order(weights in weights_strategy()) {
        let prototypes: Vec<Tagged> = (0..weights.len()).map(Tagged::new).collect();
        let weighted: Vec<(&dyn Strategy, usize)> = prototypes
            .iter()
            .zip(weights.iter())
            .map(|(p, &w)| (p as &dyn Strategy, w))
            .collect();

        let population = build_population(&weighted);
        let expected: Vec<String> = weights
            .iter()
            .enumerate()
            .flat_map(|(i, &w)| std::iter::repeat(format!("strategy-{i}")).take(w))
            .collect();
        let actual: Vec<String> = population
            .members()
            .iter()
            .map(|m| m.name().to_string())
            .collect();
        prop_assert_eq!(actual, expected);
    }

    // 3. A (1, N-1) composition always puts the challenger first
    #[test]
    fn challenger_leads_biased_population(n in 2..40usize) {
        let challenger = Tagged::new(0);
        let resident = Tagged::new(1);
        let population = build_population(&[
            (&challenger as &dyn Strategy, 1),
            (&resident as &dyn Strategy, n - 1),
        ]);

        prop_assert_eq!(population.len(), n);
        prop_assert_eq!(population.members()[0].name(), "strategy-0");
    }
}
