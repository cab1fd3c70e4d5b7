use super::action::{Action, InvalidActionError};
use super::config::{ConfigError, GridConfig};
use super::reward::RewardGrid;
use super::state::Cell;

/// Result of an environment step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Position of the agent after the transition
    pub position: Cell,
    /// Reward for this step
    pub reward: f32,
    /// Whether the agent reached the goal
    pub done: bool,
}

/// The gridworld environment
///
/// Wraps the reward surface with the mutable agent position and enforces
/// movement, boundary, and obstacle rules. The reward grid and configuration
/// are read-only after construction; the agent position is owned exclusively
/// by the environment and mutated only by [`step`](Self::step) and
/// [`reset`](Self::reset).
///
/// Axis convention: positions are (row, col). Up/Down move along the row
/// axis and clamp against the row count; Left/Right move along the column
/// axis and clamp against the column count.
pub struct GridEnvironment {
    config: GridConfig,
    rewards: RewardGrid,
    position: Cell,
}

impl GridEnvironment {
    /// Create an environment with the agent placed at the start cell
    pub fn new(config: GridConfig) -> Result<Self, ConfigError> {
        let rewards = RewardGrid::build(&config)?;
        let position = config.start;
        Ok(Self {
            config,
            rewards,
            position,
        })
    }

    /// Reset the agent to the start cell and return it
    pub fn reset(&mut self) -> Cell {
        self.position = self.config.start;
        self.position
    }

    /// Current agent position
    pub fn position(&self) -> Cell {
        self.position
    }

    /// Perform one transition
    ///
    /// `action` is the integer encoding 0=Up, 1=Down, 2=Left, 3=Right; any
    /// other index fails with [`InvalidActionError`]. Movement off an edge
    /// leaves the agent in place on that axis (clamping, no wraparound). A
    /// move into an obstacle cell is rejected entirely: the agent stays at
    /// its pre-move position.
    ///
    /// The reward is the surface value of the resulting position. Obstacle
    /// cells keep their reward value in the surface even though the
    /// rejection rule means they are never entered.
    pub fn step(&mut self, action: usize) -> Result<Step, InvalidActionError> {
        let action = Action::from_index(action)?;

        let mut next = self.candidate(action);

        // Rejected moves keep the agent where it is, not just on the blocked axis.
        if self.config.obstacles.contains(&next) {
            next = self.position;
        }

        let reward = self.rewards.value_at(next);
        let done = next == self.config.goal;

        self.position = next;

        Ok(Step {
            position: next,
            reward,
            done,
        })
    }

    /// Candidate position after moving one cell, clamped to the grid
    fn candidate(&self, action: Action) -> Cell {
        let Cell { row, col } = self.position;
        match action {
            Action::Up => Cell::new(row.saturating_sub(1), col),
            Action::Down => Cell::new((row + 1).min(self.config.rows - 1), col),
            Action::Left => Cell::new(row, col.saturating_sub(1)),
            Action::Right => Cell::new(row, (col + 1).min(self.config.columns - 1)),
        }
    }

    /// Plain-text snapshot of the current position
    pub fn render(&self) -> String {
        format!(
            "agent at {} on a {}x{} grid, goal at {}",
            self.position, self.config.rows, self.config.columns, self.config.goal
        )
    }

    /// The environment's configuration
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// The read-only reward surface
    pub fn reward_grid(&self) -> &RewardGrid {
        &self.rewards
    }
}
