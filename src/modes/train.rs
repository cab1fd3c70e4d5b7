//! Training mode for the actor-critic agent
//!
//! Drives the nested episode/step loops: each episode runs until the agent
//! reaches the goal or exhausts the step budget, with one parameter update
//! per environment step. Episode metrics are recorded into a
//! [`TrainingHistory`] for external reporting.

use anyhow::{Context, Result};
use burn::tensor::backend::AutodiffBackend;

use crate::grid::{GridConfig, GridEnvironment};
use crate::metrics::TrainingHistory;
use crate::rl::{ActorCriticAgent, AgentConfig, PolicyValueConfig};

/// Configuration for training mode
#[derive(Debug, Clone)]
pub struct TrainConfig {
    /// Number of episodes to train
    pub num_episodes: usize,

    /// Maximum steps per episode before the episode is cut off
    pub max_steps: usize,

    /// Log training progress every N episodes
    pub log_frequency: usize,

    /// Seed for parameter initialization and action sampling
    pub seed: u64,

    /// Gridworld configuration
    pub grid_config: GridConfig,

    /// Agent hyperparameters
    pub agent_config: AgentConfig,

    /// Network architecture
    pub network_config: PolicyValueConfig,
}

impl TrainConfig {
    /// Create a training configuration with defaults
    pub fn new(num_episodes: usize, max_steps: usize) -> Self {
        Self {
            num_episodes,
            max_steps,
            log_frequency: 10,
            seed: 42,
            grid_config: GridConfig::default(),
            agent_config: AgentConfig::default(),
            network_config: PolicyValueConfig::default(),
        }
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), String> {
        if self.num_episodes == 0 {
            return Err("num_episodes must be at least 1".to_string());
        }
        if self.max_steps == 0 {
            return Err("max_steps must be at least 1".to_string());
        }
        if self.log_frequency == 0 {
            return Err("log_frequency must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Training mode for the online actor-critic agent
pub struct TrainMode<B: AutodiffBackend> {
    /// Agent being trained
    agent: ActorCriticAgent<B>,

    /// Gridworld environment
    env: GridEnvironment,

    /// Per-episode metrics
    history: TrainingHistory,

    /// Training configuration
    config: TrainConfig,
}

impl<B: AutodiffBackend> TrainMode<B> {
    /// Create a new training mode
    ///
    /// Seeds the backend before parameter initialization, so runs with the
    /// same seed are reproducible end to end.
    pub fn new(config: TrainConfig, device: B::Device) -> Result<Self> {
        config
            .validate()
            .map_err(anyhow::Error::msg)
            .context("invalid training configuration")?;

        B::seed(config.seed);
        let network = config.network_config.init::<B>(&device);
        let agent = ActorCriticAgent::new(network, config.agent_config.clone(), config.seed, device);

        let env = GridEnvironment::new(config.grid_config.clone())
            .context("invalid grid configuration")?;

        let history = TrainingHistory::with_capacity(config.num_episodes);

        Ok(Self {
            agent,
            env,
            history,
            config,
        })
    }

    /// Run the training loop
    pub fn run(&mut self) -> Result<()> {
        self.print_header();

        for episode in 0..self.config.num_episodes {
            self.run_episode(episode)?;

            if (episode + 1) % self.config.log_frequency == 0 {
                self.print_progress(episode + 1);
            }
        }

        println!("\nTraining complete!");
        println!("{}", self.history.format_summary(self.config.log_frequency));

        Ok(())
    }

    /// Run a single training episode
    ///
    /// Steps the agent until the goal is reached or the step budget is
    /// exhausted, then records the terminal metrics: the squared error
    /// between the critic's estimate and the reward, the step index
    /// reached, and the terminal action probabilities. Any step failure
    /// aborts the run; a failed step invalidates the trajectory.
    fn run_episode(&mut self, episode: usize) -> Result<()> {
        for step in 0..self.config.max_steps {
            let transition = self
                .agent
                .step(&mut self.env)
                .with_context(|| format!("episode {} failed at step {}", episode, step))?;

            if transition.done || step + 1 == self.config.max_steps {
                let residual = transition.value - transition.reward;
                self.history
                    .record_episode(residual * residual, step as u32, transition.policy);

                self.env.reset();
                break;
            }
        }

        Ok(())
    }

    /// Recorded per-episode metrics
    pub fn history(&self) -> &TrainingHistory {
        &self.history
    }

    /// Consume the mode, keeping only the metrics
    pub fn into_history(self) -> TrainingHistory {
        self.history
    }

    fn print_header(&self) {
        println!("{}", "=".repeat(70));
        println!("Actor-Critic Training - Gridworld");
        println!("{}", "=".repeat(70));
        println!("Episodes: {}", self.config.num_episodes);
        println!("Max steps per episode: {}", self.config.max_steps);
        println!(
            "Grid: {}x{}, start {}, goal {}, {} obstacles",
            self.config.grid_config.rows,
            self.config.grid_config.columns,
            self.config.grid_config.start,
            self.config.grid_config.goal,
            self.config.grid_config.obstacles.len()
        );
        println!("Learning rate: {}", self.config.agent_config.learning_rate);
        println!("Seed: {}", self.config.seed);
        println!("{}", "=".repeat(70));
        println!();
    }

    fn print_progress(&self, episode: usize) {
        println!(
            "[Episode {}/{}] {}",
            episode,
            self.config.num_episodes,
            self.history.format_summary(self.config.log_frequency)
        );
    }
}
