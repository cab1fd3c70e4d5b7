use super::config::{ConfigError, GridConfig};
use super::state::Cell;

/// The reward surface of the grid
///
/// A rows x columns array built once from a [`GridConfig`] and read-only
/// thereafter. Cell values are assigned with precedence goal > obstacle >
/// step, most specific first, so the goal reward wins even if a reward
/// magnitude coincides with another.
#[derive(Debug, Clone, PartialEq)]
pub struct RewardGrid {
    rows: usize,
    columns: usize,
    values: Vec<f32>,
}

impl RewardGrid {
    /// Build the reward surface for a validated configuration
    ///
    /// Pure function of the configuration: no side effects, no randomness.
    pub fn build(config: &GridConfig) -> Result<RewardGrid, ConfigError> {
        config.validate()?;

        let mut values = Vec::with_capacity(config.rows * config.columns);

        for row in 0..config.rows {
            for col in 0..config.columns {
                let cell = Cell::new(row, col);
                let value = if cell == config.goal {
                    config.rewards.goal
                } else if config.obstacles.contains(&cell) {
                    config.rewards.obstacle
                } else {
                    config.rewards.step
                };
                values.push(value);
            }
        }

        Ok(RewardGrid {
            rows: config.rows,
            columns: config.columns,
            values,
        })
    }

    /// Reward value of a cell
    ///
    /// Panics if the cell lies outside the grid; callers only pass positions
    /// the environment has already clamped into bounds.
    pub fn value_at(&self, cell: Cell) -> f32 {
        assert!(
            cell.row < self.rows && cell.col < self.columns,
            "cell {} outside {}x{} reward grid",
            cell,
            self.rows,
            self.columns
        );
        self.values[cell.row * self.columns + cell.col]
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Row-major view of the full surface
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }
}
