use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell on the grid, addressed as (row, col)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_creation() {
        let cell = Cell::new(2, 3);
        assert_eq!(cell.row, 2);
        assert_eq!(cell.col, 3);
    }

    #[test]
    fn test_cell_from_tuple() {
        let cell: Cell = (1, 4).into();
        assert_eq!(cell, Cell::new(1, 4));
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::new(0, 4).to_string(), "(0, 4)");
    }
}
