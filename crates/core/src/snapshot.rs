//! Render-facing copy of the game state.

use crate::grid::Grid;
use crate::piece::Piece;
use crate::types::{Cell, GameStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: Grid,
    pub active: Piece,
    pub score: u32,
    pub lines: u32,
    pub status: GameStatus,
}

impl GameSnapshot {
    /// Color of a visible cell with the active piece drawn on top.
    ///
    /// Returns `None` for empty or out-of-range cells.
    pub fn cell_with_active(&self, x: i8, y: i8) -> Cell {
        if self.active.cells().contains(&(x, y)) {
            return Some(self.active.color);
        }
        self.grid.get(x, y).flatten()
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::GameState;
    use crate::rng::ScriptedSource;
    use crate::types::{BlockColor, ShapeKind};

    #[test]
    fn test_active_cells_overlay_grid() {
        let game = GameState::with_source(ScriptedSource::repeat(ShapeKind::I, BlockColor::Green));
        let snap = game.snapshot();

        assert_eq!(snap.cell_with_active(3, 0), Some(BlockColor::Green));
        assert_eq!(snap.cell_with_active(2, 0), None);
        assert_eq!(snap.cell_with_active(-1, 0), None);
        assert!(!snap.game_over());
    }
}
