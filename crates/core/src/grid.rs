//! Grid module - the fixed 10x20 playfield
//!
//! Coordinates: (x, y) where x ranges 0..9 (left to right) and y ranges 0..19
//! (top to bottom). Storage is a row-major array of rows so the row-clear
//! engine can move whole rows around by value.

use crate::types::{Cell, COLS, ROWS};

/// One row of the grid
pub type Row = [Cell; COLS as usize];

const EMPTY_ROW: Row = [None; COLS as usize];

/// The playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: [Row; ROWS as usize],
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self {
            rows: [EMPTY_ROW; ROWS as usize],
        }
    }

    /// Build a grid from explicit rows (top row first)
    pub fn from_rows(rows: [Row; ROWS as usize]) -> Self {
        Self { rows }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<(usize, usize)> {
        if x < 0 || x >= COLS as i8 || y < 0 || y >= ROWS as i8 {
            return None;
        }
        Some((x as usize, y as usize))
    }

    pub fn width(&self) -> u8 {
        COLS
    }

    pub fn height(&self) -> u8 {
        ROWS
    }

    /// Get cell at (x, y); `None` when out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|(x, y)| self.rows[y][x])
    }

    /// Set cell at (x, y); returns false when out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some((x, y)) => {
                self.rows[y][x] = cell;
                true
            }
            None => false,
        }
    }

    /// True iff (x, y) is inside the grid and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// True iff row `y` exists and has no empty cell
    pub fn is_row_full(&self, y: usize) -> bool {
        self.rows
            .get(y)
            .is_some_and(|row| row.iter().all(|cell| cell.is_some()))
    }

    pub fn rows(&self) -> &[Row; ROWS as usize] {
        &self.rows
    }

    /// Number of filled cells
    pub fn occupied_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.is_some())
            .count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BlockColor;

    #[test]
    fn test_index_bounds() {
        assert_eq!(Grid::index(0, 0), Some((0, 0)));
        assert_eq!(Grid::index(9, 19), Some((9, 19)));
        assert_eq!(Grid::index(-1, 0), None);
        assert_eq!(Grid::index(10, 0), None);
        assert_eq!(Grid::index(0, 20), None);
        assert_eq!(Grid::index(0, -1), None);
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new();
        assert_eq!(grid.occupied_count(), 0);
        assert!(!grid.is_row_full(19));
    }

    #[test]
    fn test_row_full_detection() {
        let mut grid = Grid::new();
        for x in 0..COLS as i8 {
            grid.set(x, 19, Some(BlockColor::Blue));
        }
        assert!(grid.is_row_full(19));
        assert!(!grid.is_row_full(18));
        assert!(!grid.is_row_full(ROWS as usize));

        grid.set(4, 19, None);
        assert!(!grid.is_row_full(19));
    }
}
