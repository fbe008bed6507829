//! Deterministic pairwise relative-fitness estimator.
//!
//! When both competitors are deterministic, a single fixed-length match is
//! exactly reproducible, so one exact computation substitutes for the whole
//! stochastic fixation estimate. Each strategy's fitness is its total match
//! payoff divided by the turn count (exact division, never rounded).

use tracing::info;

use crate::error::Result;
use crate::process::{MatchFactory, PairMatch};
use crate::types::FitnessRow;

use super::catalog::Catalog;

/// Play one match per ordered pair over `deterministic` (ids into the
/// catalog, including each id paired with itself) and return one fitness
/// row per pair.
pub fn relative_fitness_deterministic<F>(
    catalog: &Catalog,
    deterministic: &[usize],
    factory: &mut F,
    turns: usize,
) -> Result<Vec<FitnessRow>>
where
    F: MatchFactory,
{
    let mut rows = Vec::with_capacity(deterministic.len() * deterministic.len());
    for &i in deterministic {
        info!(row = i, pairs = deterministic.len(), "fitness sweep progress");
        for &j in deterministic {
            let mut game = factory.build(
                catalog.strategy(i).clone_box(),
                catalog.strategy(j).clone_box(),
                turns,
            );
            game.play();

            let (total_i, total_j) = game
                .scores()
                .iter()
                .fold((0.0, 0.0), |(a, b), (si, sj)| (a + si, b + sj));
            rows.push(FitnessRow {
                row: i,
                col: j,
                fitness_row: total_i / turns as f64,
                fitness_col: total_j / turns as f64,
            });
        }
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::{Action, Strategy};
    use rand::rngs::SmallRng;

    #[derive(Clone)]
    struct Inert(String);

    impl Strategy for Inert {
        fn name(&self) -> &str {
            &self.0
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

    /// Match whose per-turn payoffs are a constant pair.
    struct ConstantMatch {
        turns: usize,
        payoff: (f64, f64),
        scores: Vec<(f64, f64)>,
    }

    impl PairMatch for ConstantMatch {
        fn play(&mut self) {
            self.scores = vec![self.payoff; self.turns];
        }
        fn scores(&self) -> &[(f64, f64)] {
            &self.scores
        }
    }

    struct ConstantFactory {
        payoff: (f64, f64),
    }

    impl MatchFactory for ConstantFactory {
        type Match = ConstantMatch;

        fn build(
            &mut self,
            _a: Box<dyn Strategy>,
            _b: Box<dyn Strategy>,
            turns: usize,
        ) -> ConstantMatch {
            ConstantMatch {
                turns,
                payoff: self.payoff,
                scores: Vec::new(),
            }
        }
    }

    fn catalog(k: usize) -> Catalog {
        let strategies = (0..k)
            .map(|i| Box::new(Inert(format!("s{i}"))) as Box<dyn Strategy>)
            .collect();
        Catalog::new(strategies).unwrap()
    }

    #[test]
    fn test_emits_k_squared_rows_including_diagonal() {
        let catalog = catalog(3);
        let ids = [0, 1, 2];
        let mut factory = ConstantFactory { payoff: (1.0, 1.0) };

        let rows = relative_fitness_deterministic(&catalog, &ids, &mut factory, 10).unwrap();

        assert_eq!(rows.len(), 9);
        let pairs: Vec<(usize, usize)> = rows.iter().map(|r| (r.row, r.col)).collect();
        assert!(pairs.contains(&(0, 0)));
        assert!(pairs.contains(&(2, 1)));
    }

    #[test]
    fn test_normalization_is_exact() {
        // Constant per-turn payoff p must come back as fitness == p exactly.
        let catalog = catalog(2);
        let ids = [0, 1];
        let mut factory = ConstantFactory {
            payoff: (3.0, 0.25),
        };

        let rows = relative_fitness_deterministic(&catalog, &ids, &mut factory, 7).unwrap();

        for row in &rows {
            assert_eq!(row.fitness_row, 3.0);
            assert_eq!(row.fitness_col, 0.25);
        }
    }

    #[test]
    fn test_subset_ids_are_preserved() {
        // Ids refer to catalog positions, not subset positions.
        let catalog = catalog(4);
        let ids = [1, 3];
        let mut factory = ConstantFactory { payoff: (1.0, 1.0) };

        let rows = relative_fitness_deterministic(&catalog, &ids, &mut factory, 5).unwrap();

        let pairs: Vec<(usize, usize)> = rows.iter().map(|r| (r.row, r.col)).collect();
        assert_eq!(pairs, vec![(1, 1), (1, 3), (3, 1), (3, 3)]);
    }
}
