use super::state::Cell;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Invalid grid/obstacle/goal configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid must have at least one row and one column, got {rows}x{columns}")]
    EmptyGrid { rows: usize, columns: usize },

    #[error("start cell {start} lies outside the {rows}x{columns} grid")]
    StartOutOfBounds {
        start: Cell,
        rows: usize,
        columns: usize,
    },

    #[error("goal cell {goal} lies outside the {rows}x{columns} grid")]
    GoalOutOfBounds {
        goal: Cell,
        rows: usize,
        columns: usize,
    },

    #[error("obstacle cell {obstacle} lies outside the {rows}x{columns} grid")]
    ObstacleOutOfBounds {
        obstacle: Cell,
        rows: usize,
        columns: usize,
    },

    #[error("goal cell {0} is also listed as an obstacle")]
    ObstacleOnGoal(Cell),

    #[error("start cell {0} is also listed as an obstacle")]
    ObstacleOnStart(Cell),
}

/// Reward magnitudes for the three kinds of cells
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RewardConfig {
    /// Reward for an ordinary step
    pub step: f32,
    /// Reward attached to obstacle cells
    pub obstacle: f32,
    /// Reward for reaching the goal
    pub goal: f32,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            step: -1.0,
            obstacle: -10.0,
            goal: 10.0,
        }
    }
}

/// Configuration for the gridworld
///
/// Immutable after construction; the environment receives it by value and
/// never reads configuration from ambient scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of rows in the grid
    pub rows: usize,
    /// Number of columns in the grid
    pub columns: usize,
    /// Starting cell of the agent
    pub start: Cell,
    /// Goal cell the agent is moving towards
    pub goal: Cell,
    /// Cells the agent has to learn to go around
    pub obstacles: HashSet<Cell>,
    /// Reward magnitudes
    pub rewards: RewardConfig,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            columns: 5,
            start: Cell::new(0, 4),
            goal: Cell::new(4, 0),
            obstacles: [(1, 1), (1, 2), (1, 3), (3, 3), (3, 4)]
                .into_iter()
                .map(Cell::from)
                .collect(),
            rewards: RewardConfig::default(),
        }
    }
}

impl GridConfig {
    /// Create a configuration with custom grid size and no obstacles
    pub fn new(rows: usize, columns: usize, start: Cell, goal: Cell) -> Self {
        Self {
            rows,
            columns,
            start,
            goal,
            obstacles: HashSet::new(),
            rewards: RewardConfig::default(),
        }
    }

    fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.columns
    }

    /// Validate the configuration
    ///
    /// Checks grid extents, that start and goal lie inside the grid, and that
    /// the obstacle set overlaps neither start nor goal (an obstacle on the
    /// goal would make the reward precedence ambiguous).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.rows,
                columns: self.columns,
            });
        }

        if !self.in_bounds(self.start) {
            return Err(ConfigError::StartOutOfBounds {
                start: self.start,
                rows: self.rows,
                columns: self.columns,
            });
        }

        if !self.in_bounds(self.goal) {
            return Err(ConfigError::GoalOutOfBounds {
                goal: self.goal,
                rows: self.rows,
                columns: self.columns,
            });
        }

        if self.obstacles.contains(&self.goal) {
            return Err(ConfigError::ObstacleOnGoal(self.goal));
        }

        if self.obstacles.contains(&self.start) {
            return Err(ConfigError::ObstacleOnStart(self.start));
        }

        for &obstacle in &self.obstacles {
            if !self.in_bounds(obstacle) {
                return Err(ConfigError::ObstacleOutOfBounds {
                    obstacle,
                    rows: self.rows,
                    columns: self.columns,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GridConfig::default();
        assert_eq!(config.rows, 5);
        assert_eq!(config.columns, 5);
        assert_eq!(config.start, Cell::new(0, 4));
        assert_eq!(config.goal, Cell::new(4, 0));
        assert_eq!(config.obstacles.len(), 5);
        assert!(config.obstacles.contains(&Cell::new(1, 1)));
    }

    #[test]
    fn test_default_rewards() {
        let rewards = RewardConfig::default();
        assert_eq!(rewards.step, -1.0);
        assert_eq!(rewards.obstacle, -10.0);
        assert_eq!(rewards.goal, 10.0);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(GridConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validation_empty_grid() {
        let mut config = GridConfig::default();
        config.rows = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyGrid { .. })
        ));
    }

    #[test]
    fn test_validation_start_out_of_bounds() {
        let mut config = GridConfig::default();
        config.start = Cell::new(5, 0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::StartOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_validation_goal_out_of_bounds() {
        let mut config = GridConfig::default();
        config.goal = Cell::new(0, 17);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GoalOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_validation_obstacle_on_goal() {
        let mut config = GridConfig::default();
        config.obstacles.insert(config.goal);
        assert_eq!(
            config.validate(),
            Err(ConfigError::ObstacleOnGoal(Cell::new(4, 0)))
        );
    }

    #[test]
    fn test_validation_obstacle_on_start() {
        let mut config = GridConfig::default();
        config.obstacles.insert(config.start);
        assert_eq!(
            config.validate(),
            Err(ConfigError::ObstacleOnStart(Cell::new(0, 4)))
        );
    }

    #[test]
    fn test_validation_obstacle_out_of_bounds() {
        let mut config = GridConfig::default();
        config.obstacles.insert(Cell::new(9, 9));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ObstacleOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_custom_config() {
        let config = GridConfig::new(3, 7, Cell::new(0, 0), Cell::new(2, 6));
        assert_eq!(config.rows, 3);
        assert_eq!(config.columns, 7);
        assert!(config.obstacles.is_empty());
        assert!(config.validate().is_ok());
    }
}
