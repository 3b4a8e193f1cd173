//! Row-clear engine
//!
//! All full rows are removed in one pass and the survivors collapse to the
//! bottom, so everything above a cleared row drops by the number of cleared
//! rows beneath it.

use crate::grid::{Grid, Row};
use crate::types::{COLS, ROWS};

/// Remove every full row and refill the top with empty rows.
///
/// Pure: the input is left untouched. Returns the new grid and the number of
/// rows removed.
pub fn clear_full_rows(grid: &Grid) -> (Grid, u32) {
    let mut rows: [Row; ROWS as usize] = [[None; COLS as usize]; ROWS as usize];
    let mut write_y = ROWS as usize;

    // Walk bottom-up so retained rows keep their relative order.
    for (y, row) in grid.rows().iter().enumerate().rev() {
        if grid.is_row_full(y) {
            continue;
        }
        write_y -= 1;
        rows[write_y] = *row;
    }

    (Grid::from_rows(rows), write_y as u32)
}
