use anyhow::Result;
use clap::Parser;
use gridworld_ac::modes::{TrainConfig, TrainMode};
use gridworld_ac::rl::{TrainingBackend, default_device};

#[derive(Parser)]
#[command(name = "gridworld_ac")]
#[command(version, about = "Train an actor-critic agent to navigate a gridworld")]
struct Cli {
    /// Number of training episodes
    #[arg(long, default_value = "100")]
    episodes: usize,

    /// Maximum steps per episode
    #[arg(long, default_value = "1000")]
    max_steps: usize,

    /// Seed for parameter initialization and action sampling
    #[arg(long, default_value = "42")]
    seed: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = TrainConfig::new(cli.episodes, cli.max_steps);
    config.seed = cli.seed;

    let device = default_device();
    let mut train_mode = TrainMode::<TrainingBackend>::new(config, device)?;
    train_mode.run()?;

    Ok(())
}
