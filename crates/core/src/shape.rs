//! Shape module - binary cell matrices and clockwise rotation
//!
//! A shape is a matrix of at most 4x4 sub-cells, stored in a fixed array with
//! explicit width/height so it stays `Copy`. Sub-cells outside the live
//! `width x height` window are always empty, which keeps derived equality
//! equal to matrix equality.

use arrayvec::ArrayVec;

use crate::types::ShapeKind;

/// Largest side of any shape matrix
pub const MAX_SIDE: usize = 4;

/// Occupied offsets of a shape, `(x, y)` relative to the anchor
pub type ShapeCells = ArrayVec<(i8, i8), { MAX_SIDE * MAX_SIDE }>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    cells: [[bool; MAX_SIDE]; MAX_SIDE],
    width: u8,
    height: u8,
}

impl Shape {
    /// Spawn orientation of a template
    pub fn template(kind: ShapeKind) -> Self {
        let rows: &[&[u8]] = match kind {
            ShapeKind::I => &[&[1, 1, 1, 1]],
            ShapeKind::O => &[&[1, 1], &[1, 1]],
            ShapeKind::T => &[&[0, 1, 0], &[1, 1, 1]],
            ShapeKind::J => &[&[1, 0, 0], &[1, 1, 1]],
            ShapeKind::L => &[&[0, 0, 1], &[1, 1, 1]],
            ShapeKind::S => &[&[1, 1, 0], &[0, 1, 1]],
            ShapeKind::Z => &[&[0, 1, 1], &[1, 1, 0]],
        };
        Self::build(rows)
    }

    /// Build a shape from 0/1 rows.
    ///
    /// Returns `None` for an empty matrix, ragged rows, or a side longer
    /// than [`MAX_SIDE`].
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if height > MAX_SIDE || width == 0 || width > MAX_SIDE {
            return None;
        }
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }
        Some(Self::build(rows))
    }

    fn build(rows: &[&[u8]]) -> Self {
        debug_assert!(rows.len() <= MAX_SIDE);
        let mut cells = [[false; MAX_SIDE]; MAX_SIDE];
        let mut width = 0;
        for (y, row) in rows.iter().take(MAX_SIDE).enumerate() {
            for (x, &v) in row.iter().take(MAX_SIDE).enumerate() {
                cells[y][x] = v != 0;
            }
            width = width.max(row.len().min(MAX_SIDE));
        }
        Self {
            cells,
            width: width as u8,
            height: rows.len().min(MAX_SIDE) as u8,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether sub-cell (x, y) is occupied; false outside the matrix
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.width as usize && y < self.height as usize && self.cells[y][x]
    }

    /// Iterate rows of the live matrix, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells[..self.height as usize]
            .iter()
            .map(move |row| &row[..self.width as usize])
    }

    /// Occupied sub-cells, row by row
    pub fn cells(&self) -> ShapeCells {
        let mut out = ShapeCells::new();
        for y in 0..self.height as usize {
            for x in 0..self.width as usize {
                if self.cells[y][x] {
                    out.push((x as i8, y as i8));
                }
            }
        }
        out
    }

    /// The shape turned 90° clockwise.
    ///
    /// Row order is reversed and the result transposed, so the new matrix is
    /// `height x width` and `new[r][c] = old[h - 1 - c][r]`.
    pub fn rotated(&self) -> Self {
        let h = self.height as usize;
        let w = self.width as usize;
        let mut cells = [[false; MAX_SIDE]; MAX_SIDE];
        for (r, row) in cells.iter_mut().enumerate().take(w) {
            for (c, cell) in row.iter_mut().enumerate().take(h) {
                *cell = self.cells[h - 1 - c][r];
            }
        }
        Self {
            cells,
            width: self.height,
            height: self.width,
        }
    }
}
