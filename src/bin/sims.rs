//! fixation-sims: estimate pairwise fixation probabilities.
//!
//! Sweeps every ordered strategy pair, playing repeated Moran trials with a
//! single challenger against N-1 residents, and appends one row per trial
//! to `sims_<N>.csv`. With `--deterministic`, also writes the exact
//! relative-fitness table for the deterministic subset.

use std::time::Instant;

use anyhow::{bail, Context};

use fixation::game::IpdMatchFactory;
use fixation::moran::MoranFactory;
use fixation::output::ResultSink;
use fixation::simulation::{relative_fitness_deterministic, run_pairwise_trials, Catalog};
use fixation::strategies;
use fixation::ExperimentConfig;

struct Args {
    config: ExperimentConfig,
    deterministic: bool,
}

fn parse_args() -> anyhow::Result<Args> {
    let args: Vec<String> = std::env::args().collect();

    let mut positional: Vec<String> = Vec::new();
    let mut turns = 100usize;
    let mut noise = 0.0f64;
    let mut seed = 42u64;
    let mut output = "results".to_string();
    let mut deterministic = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--turns" => {
                i += 1;
                turns = args
                    .get(i)
                    .context("--turns needs a value")?
                    .parse()
                    .context("invalid --turns value")?;
            }
            "--noise" => {
                i += 1;
                noise = args
                    .get(i)
                    .context("--noise needs a value")?
                    .parse()
                    .context("invalid --noise value")?;
            }
            "--seed" => {
                i += 1;
                seed = args
                    .get(i)
                    .context("--seed needs a value")?
                    .parse()
                    .context("invalid --seed value")?;
            }
            "--output" => {
                i += 1;
                output = args.get(i).context("--output needs a value")?.clone();
            }
            "--deterministic" => {
                deterministic = true;
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other if other.starts_with('-') => {
                print_usage();
                bail!("unknown argument: {other}");
            }
            other => positional.push(other.to_string()),
        }
        i += 1;
    }

    let population_size: usize = positional
        .first()
        .context("missing required <population_size> argument")?
        .parse()
        .context("invalid <population_size>")?;
    let repetitions: usize = match positional.get(1) {
        Some(raw) => raw.parse().context("invalid [repetitions]")?,
        None => 1000,
    };
    if positional.len() > 2 {
        bail!("unexpected extra arguments: {:?}", &positional[2..]);
    }

    Ok(Args {
        config: ExperimentConfig {
            population_size,
            repetitions,
            turns,
            noise,
            seed,
            output_dir: output.into(),
        },
        deterministic,
    })
}

fn print_usage() {
    println!(
        "fixation-sims: estimate pairwise fixation probabilities via Moran trials.

USAGE:
    fixation-sims <population_size> [repetitions] [OPTIONS]

ARGS:
    <population_size>     N: one challenger plus N-1 residents
    [repetitions]         Trials per ordered pair [default: 1000]

OPTIONS:
    --turns <N>           Turns per match [default: 100]
    --noise <P>           Action flip probability [default: 0]
    --seed <S>            Master RNG seed [default: 42]
    --output <DIR>        Output directory [default: results]
    --deterministic       Also write the deterministic fitness table
    -h, --help            Print this help

EXAMPLES:
    fixation-sims 4                  # N=4, 1000 trials per pair
    fixation-sims 6 200 --seed 7     # N=6, 200 trials per pair"
    );
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let Args {
        config,
        deterministic,
    } = parse_args()?;

    let catalog = Catalog::new(strategies::all())?;
    let (stochastic, deterministic_ids) = catalog.classify();

    println!(
        "Fixation experiment (N={}, {} repetitions, {} turns)",
        config.population_size, config.repetitions, config.turns
    );
    println!(
        "  Catalog:     {} strategies ({} stochastic, {} deterministic)",
        catalog.len(),
        stochastic.len(),
        deterministic_ids.len()
    );

    let sink = ResultSink::new(&config.output_dir)?;
    sink.write_players(catalog.identities())?;
    println!("  Manifest:    {}", sink.dir().join("players.csv").display());

    if deterministic {
        let t0 = Instant::now();
        let mut matches = IpdMatchFactory::new(config.seed);
        let rows =
            relative_fitness_deterministic(&catalog, &deterministic_ids, &mut matches, config.turns)?;
        sink.write_deterministic(&rows)?;
        println!(
            "  Fitness:     {} rows in {:.1} ms",
            rows.len(),
            t0.elapsed().as_secs_f64() * 1000.0
        );
    }

    let mut trials = sink.open_trials(config.population_size)?;
    let mut factory = MoranFactory::new(config.turns, config.noise, config.seed);

    let t0 = Instant::now();
    let rows = run_pairwise_trials(&catalog, &mut factory, &config, &mut trials)?;
    let elapsed = t0.elapsed().as_secs_f64();

    println!(
        "  Trials:      {} rows appended to {} in {:.1}s",
        rows,
        sink.trials_path(config.population_size).display(),
        elapsed
    );

    Ok(())
}
