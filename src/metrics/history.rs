//! Per-episode training metrics
//!
//! Records the three metric sequences the training loop produces, one entry
//! per completed episode. Entries are append-only and exposed as read-only
//! slices for external reporting/visualization, which is responsible for all
//! plotting.

use crate::grid::NUM_ACTIONS;

/// Append-only record of per-episode training metrics
///
/// # Example
///
/// ```rust
/// use gridworld_ac::metrics::TrainingHistory;
///
/// let mut history = TrainingHistory::new();
/// history.record_episode(0.25, 17, [0.1, 0.2, 0.3, 0.4]);
///
/// assert_eq!(history.total_episodes(), 1);
/// assert_eq!(history.steps_to_goal(), &[17]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TrainingHistory {
    /// Squared error between the critic's estimate and the reward at the
    /// terminal step of each episode
    value_errors: Vec<f32>,

    /// Step index at which each episode terminated
    steps_to_goal: Vec<u32>,

    /// Action-probability vector at the terminal step of each episode
    terminal_policies: Vec<[f32; NUM_ACTIONS]>,
}

impl TrainingHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for a known number of episodes
    pub fn with_capacity(episodes: usize) -> Self {
        Self {
            value_errors: Vec::with_capacity(episodes),
            steps_to_goal: Vec::with_capacity(episodes),
            terminal_policies: Vec::with_capacity(episodes),
        }
    }

    /// Record the completion of an episode
    pub fn record_episode(&mut self, value_error: f32, steps: u32, policy: [f32; NUM_ACTIONS]) {
        self.value_errors.push(value_error);
        self.steps_to_goal.push(steps);
        self.terminal_policies.push(policy);
    }

    /// Terminal value-prediction squared error, one per episode
    pub fn value_errors(&self) -> &[f32] {
        &self.value_errors
    }

    /// Step index at termination, one per episode
    pub fn steps_to_goal(&self) -> &[u32] {
        &self.steps_to_goal
    }

    /// Terminal action probabilities, one row per episode
    pub fn terminal_policies(&self) -> &[[f32; NUM_ACTIONS]] {
        &self.terminal_policies
    }

    /// Probability trajectory of a single action across episodes
    ///
    /// Returns `None` for an action index outside the encoding.
    pub fn action_trajectory(&self, action: usize) -> Option<Vec<f32>> {
        if action >= NUM_ACTIONS {
            return None;
        }
        Some(self.terminal_policies.iter().map(|row| row[action]).collect())
    }

    /// Total number of episodes recorded
    pub fn total_episodes(&self) -> usize {
        self.steps_to_goal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps_to_goal.is_empty()
    }

    /// Mean steps-to-goal over the most recent `window` episodes
    pub fn mean_recent_steps(&self, window: usize) -> f32 {
        mean_u32(tail(&self.steps_to_goal, window))
    }

    /// Mean value error over the most recent `window` episodes
    pub fn mean_recent_value_error(&self, window: usize) -> f32 {
        mean_f32(tail(&self.value_errors, window))
    }

    /// Format a summary of the recent metrics
    pub fn format_summary(&self, window: usize) -> String {
        format!(
            "Episodes: {} | Steps-to-goal (last {}): {:.1} | Value error (last {}): {:.4}",
            self.total_episodes(),
            window,
            self.mean_recent_steps(window),
            window,
            self.mean_recent_value_error(window),
        )
    }
}

fn tail<T>(values: &[T], window: usize) -> &[T] {
    &values[values.len().saturating_sub(window)..]
}

fn mean_f32(values: &[f32]) -> f32 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f32>() / values.len() as f32
    }
}

fn mean_u32(values: &[u32]) -> f32 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<u32>() as f32 / values.len() as f32
    }
}
