use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::io::{BufWriter, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use u_pairbal::clock::{Clock, TimeKeeper};
use u_pairbal::local::{LocalSearchConfig, ScoringMode};
use u_pairbal::problem::{parse_input, simulate, write_pairing};
use u_pairbal::solver::{Solver, SolverConfig};
use u_pairbal::warm::WarmStartConfig;

/// Reads `N L` and `N` task weights, prints one `a b` pair per task.
#[derive(Debug, Parser)]
#[command(name = "u-pairbal", version, about)]
struct Args {
    /// Read the instance from this file instead of stdin.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Random seed. Defaults to one derived from the wall clock.
    #[arg(long)]
    seed: Option<u64>,

    /// Deadline in milliseconds, counted from process start.
    #[arg(long, default_value_t = 1950.0)]
    time_limit_ms: f64,

    /// Number of rotated warm-start candidates.
    #[arg(long, default_value_t = 80)]
    rotations: usize,

    /// Warm-start iterations per candidate.
    #[arg(long, default_value_t = 1000)]
    iterations_per_rotation: usize,

    /// Score local-search moves incrementally instead of from scratch.
    #[arg(long)]
    incremental: bool,
}

impl Args {
    fn solver_config(&self) -> SolverConfig {
        let scoring = if self.incremental {
            ScoringMode::Incremental
        } else {
            ScoringMode::Full
        };
        let config = SolverConfig::default()
            .with_warm_start(
                WarmStartConfig::default()
                    .with_rotations(self.rotations)
                    .with_iterations_per_rotation(self.iterations_per_rotation),
            )
            .with_local_search(
                LocalSearchConfig::default()
                    .with_time_limit_ms(self.time_limit_ms)
                    .with_scoring(scoring),
            );
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    fn read_input(&self) -> Result<String> {
        match &self.input {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display())),
            None => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("reading stdin")?;
                Ok(text)
            }
        }
    }
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let mut clock = TimeKeeper::start();
    let args = Args::parse();
    enable_tracing();

    let config = args.solver_config();
    config.validate().map_err(|e| anyhow!(e))?;

    let text = args.read_input()?;
    let instance = match parse_input(&text) {
        Ok(instance) => instance,
        Err(err) => {
            // Malformed input produces no output at all.
            tracing::warn!(%err, "could not parse instance");
            return Ok(());
        }
    };

    let result = Solver::solve(&instance, &config, &mut clock);

    tracing::info!(
        score = result.score,
        seed = ?result.seed,
        elapsed_ms = clock.elapsed_ms(),
        "solved"
    );
    if tracing::enabled!(tracing::Level::DEBUG) {
        let evaluation = simulate(&instance, &result.pairing);
        tracing::debug!(official_score = evaluation.score, "simulated");
    }

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_pairing(&mut out, &result.pairing).context("writing output")?;
    out.flush().context("flushing output")?;
    Ok(())
}
