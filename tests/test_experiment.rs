//! End-to-end experiment round trip against a temporary output directory.

use std::fs;

use fixation::game::IpdMatchFactory;
use fixation::moran::MoranFactory;
use fixation::output::ResultSink;
use fixation::process::Strategy;
use fixation::simulation::{relative_fitness_deterministic, run_pairwise_trials, Catalog};
use fixation::strategies::{Cooperator, Defector, Random};
use fixation::ExperimentConfig;

fn catalog() -> Catalog {
    Catalog::new(vec![
        Box::new(Cooperator) as Box<dyn Strategy>,
        Box::new(Defector),
        Box::new(Random),
    ])
    .unwrap()
}

fn config(output_dir: &std::path::Path) -> ExperimentConfig {
    ExperimentConfig {
        population_size: 5,
        repetitions: 10,
        turns: 10,
        noise: 0.0,
        seed: 42,
        output_dir: output_dir.to_path_buf(),
    }
}

#[test]
fn test_round_trip_row_counts() {
    let tmp = tempfile::tempdir().unwrap();
    let catalog = catalog();
    let config = config(tmp.path());

    let sink = ResultSink::new(&config.output_dir).unwrap();
    sink.write_players(catalog.identities()).unwrap();

    let (stochastic, deterministic) = catalog.classify();
    assert_eq!(stochastic, vec![2]);
    assert_eq!(deterministic, vec![0, 1]);

    let mut matches = IpdMatchFactory::new(config.seed);
    let fitness =
        relative_fitness_deterministic(&catalog, &deterministic, &mut matches, config.turns)
            .unwrap();
    sink.write_deterministic(&fitness).unwrap();

    let mut trials = sink.open_trials(config.population_size).unwrap();
    let mut factory = MoranFactory::new(config.turns, config.noise, config.seed);
    let rows = run_pairwise_trials(&catalog, &mut factory, &config, &mut trials).unwrap();

    // 3 strategies, only one stochastic: all 6 ordered pairs run.
    assert_eq!(rows, 60);

    let players = fs::read_to_string(tmp.path().join("players.csv")).unwrap();
    assert_eq!(players.lines().count(), 3);
    assert_eq!(players.lines().next().unwrap(), "0,Cooperator,false");

    let sims = fs::read_to_string(tmp.path().join("sims_5.csv")).unwrap();
    assert_eq!(sims.lines().count(), 60);
    for line in sims.lines() {
        let fields: Vec<usize> = line.split(',').map(|f| f.parse().unwrap()).collect();
        assert_eq!(fields.len(), 3);
        // Challenger and resident differ; every id is in the manifest.
        assert_ne!(fields[0], fields[1]);
        assert!(fields.iter().all(|&id| id < 3));
    }

    let det = fs::read_to_string(tmp.path().join("deterministic.csv")).unwrap();
    assert_eq!(det.lines().count(), 4);
}

#[test]
fn test_deterministic_table_exact_values() {
    let tmp = tempfile::tempdir().unwrap();
    let catalog = catalog();

    let mut matches = IpdMatchFactory::new(1);
    let fitness = relative_fitness_deterministic(&catalog, &[0, 1], &mut matches, 10).unwrap();

    let sink = ResultSink::new(tmp.path()).unwrap();
    sink.write_deterministic(&fitness).unwrap();

    let det = fs::read_to_string(tmp.path().join("deterministic.csv")).unwrap();
    let lines: Vec<&str> = det.lines().collect();
    // Cooperator earns R=3 per turn against itself; a defector takes T=5
    // per turn from a cooperator, who gets the sucker's payoff.
    assert_eq!(
        lines,
        vec!["0,0,3.0,3.0", "0,1,0.0,5.0", "1,0,5.0,0.0", "1,1,1.0,1.0"]
    );
}

#[test]
fn test_trials_accumulate_across_runs() {
    let tmp = tempfile::tempdir().unwrap();
    let catalog = catalog();
    let config = config(tmp.path());
    let sink = ResultSink::new(&config.output_dir).unwrap();

    for run in 0..2 {
        let mut trials = sink.open_trials(config.population_size).unwrap();
        let mut factory = MoranFactory::new(config.turns, config.noise, config.seed + run);
        run_pairwise_trials(&catalog, &mut factory, &config, &mut trials).unwrap();
    }

    let sims = fs::read_to_string(tmp.path().join("sims_5.csv")).unwrap();
    assert_eq!(sims.lines().count(), 120);
}

#[test]
fn test_manifest_is_overwritten_not_appended() {
    let tmp = tempfile::tempdir().unwrap();
    let catalog = catalog();
    let sink = ResultSink::new(tmp.path()).unwrap();

    sink.write_players(catalog.identities()).unwrap();
    sink.write_players(catalog.identities()).unwrap();

    let players = fs::read_to_string(tmp.path().join("players.csv")).unwrap();
    assert_eq!(players.lines().count(), 3);
}
