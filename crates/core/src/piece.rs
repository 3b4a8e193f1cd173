//! Piece module - the active falling piece
//!
//! A piece is a shape plus a color, anchored by the top-left corner of the
//! shape's bounding box. Collision rules:
//!
//! - x must stay inside `[0, COLS)`
//! - y must stay below `ROWS`
//! - cells with `y >= 0` must not overlap a filled grid cell
//!
//! Sub-cells above the grid (`y < 0`) are allowed, which lets a rotated piece
//! poke above the top edge.

use crate::grid::Grid;
use crate::shape::{Shape, ShapeCells};
use crate::types::{BlockColor, ShapeKind, COLS, ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub shape: Shape,
    pub color: BlockColor,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece at the spawn anchor: horizontally centered, top row
    pub fn spawn(kind: ShapeKind, color: BlockColor) -> Self {
        let shape = Shape::template(kind);
        Self {
            kind,
            shape,
            color,
            x: (COLS / 2) as i8 - (shape.width() / 2) as i8,
            y: 0,
        }
    }

    /// Absolute grid coordinates of every occupied sub-cell
    pub fn cells(&self) -> ShapeCells {
        self.shape
            .cells()
            .into_iter()
            .map(|(lx, ly)| (self.x + lx, self.y + ly))
            .collect()
    }

    /// Check whether the piece, shifted by (dx, dy), fits the grid
    pub fn valid_position(&self, grid: &Grid, dx: i8, dy: i8) -> bool {
        self.shape.cells().iter().all(|&(lx, ly)| {
            let x = self.x + dx + lx;
            let y = self.y + dy + ly;
            if x < 0 || x >= COLS as i8 || y >= ROWS as i8 {
                return false;
            }
            y < 0 || !grid.is_occupied(x, y)
        })
    }

    /// Turn the shape 90° clockwise in place. No validation.
    pub fn rotate(&mut self) {
        self.shape = self.shape.rotated();
    }

    /// Shift by (dx, dy) if the target is valid
    pub fn try_move(&mut self, grid: &Grid, dx: i8, dy: i8) -> bool {
        if !self.valid_position(grid, dx, dy) {
            return false;
        }
        self.x += dx;
        self.y += dy;
        true
    }

    /// Rotate clockwise, restoring the previous orientation if it does not fit.
    ///
    /// There is no kick: the anchor never moves.
    pub fn try_rotate(&mut self, grid: &Grid) -> bool {
        let previous = self.shape;
        self.rotate();
        if self.valid_position(grid, 0, 0) {
            return true;
        }
        self.shape = previous;
        false
    }

    /// Write the piece color into the grid.
    ///
    /// Callers must have checked that this is the resting position; sub-cells
    /// above the grid are dropped.
    pub fn commit(&self, grid: &mut Grid) {
        for (x, y) in self.cells() {
            grid.set(x, y, Some(self.color));
        }
    }
}
