//! Simulate command - Play random episodes against the environment

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    app::App,
    cli::{
        config::SimulateConfig,
        output::{format_percent, print_kv, print_section, print_stats_table},
    },
    pipeline::{EpisodeRunner, ProgressObserver, SimulationSummary},
};

#[derive(Parser, Debug)]
#[command(about = "Play uniform-random agent episodes against the random env")]
pub struct SimulateArgs {
    /// Number of episodes (overrides the config file)
    #[arg(long, short = 'n')]
    pub episodes: Option<usize>,

    /// Random seed for reproducibility (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON config file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

impl SimulateArgs {
    /// Merge the config file (if any) with command-line overrides
    pub fn resolve_config(&self) -> Result<SimulateConfig> {
        let mut config = match &self.config {
            Some(path) => SimulateConfig::load(path)
                .with_context(|| format!("loading simulate config {}", path.display()))?,
            None => SimulateConfig::default(),
        };

        if let Some(episodes) = self.episodes {
            config.episodes = episodes;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if self.no_progress || self.json {
            config.progress = false;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Run the simulation without printing anything
pub fn run(args: &SimulateArgs) -> Result<SimulationSummary> {
    let config = args.resolve_config()?;

    let app = match config.seed {
        Some(seed) => App::new().with_default_seed(seed),
        None => App::new(),
    };
    let mut env = app.create_environment(&config.env);
    let mut agent = app.create_random_agent("agent");

    let mut runner = EpisodeRunner::new(config.episode_config());
    if config.progress {
        runner = runner.with_observer(Box::new(ProgressObserver::new()));
    }

    let summary = runner
        .run(&mut env, &mut agent)
        .context("simulation failed")?;
    Ok(summary)
}

pub fn execute(args: SimulateArgs) -> Result<()> {
    let summary = run(&args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    print_section("Simulation Summary");
    print_kv("Episodes", &summary.episodes.to_string());
    if let Some(seed) = args.seed {
        print_kv("Seed", &seed.to_string());
    }
    print_stats_table(&[
        (
            "Wins",
            format!("{} ({})", summary.wins, format_percent(summary.win_rate)),
        ),
        (
            "Losses",
            format!("{} ({})", summary.losses, format_percent(summary.loss_rate)),
        ),
        (
            "Ties",
            format!("{} ({})", summary.ties, format_percent(summary.tie_rate)),
        ),
        ("Mean return", format!("{:.2}", summary.mean_return)),
        ("Mean agent moves", format!("{:.2}", summary.mean_agent_moves)),
    ]);

    Ok(())
}
