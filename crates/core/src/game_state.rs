//! Game state module - the whole gameplay loop as an explicit value
//!
//! `GameState` owns the grid, the active piece, the score and the gravity
//! timer. The runner drives it once per frame:
//!
//! 1. [`GameState::tick`] applies gravity (and locking, clearing, respawn)
//! 2. [`GameState::apply_action`] replays that frame's input in order
//! 3. [`GameState::snapshot`] hands a read-only view to the renderer
//!
//! [`GameState::advance`] bundles steps 1 and 2.

use crate::clear::clear_full_rows;
use crate::grid::Grid;
use crate::piece::Piece;
use crate::rng::{PieceSource, RandomSource};
use crate::scoring::line_clear_score;
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, GameStatus, GRAVITY_MS};

/// What gravity did during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer still running, or the game is not running
    Idle,
    /// The piece moved down one row
    Fell,
    /// The piece locked; `cleared` rows were removed
    Locked { cleared: u32 },
}

#[derive(Debug, Clone)]
pub struct GameState<S = RandomSource> {
    grid: Grid,
    active: Piece,
    source: S,
    score: u32,
    lines: u32,
    gravity_timer_ms: u32,
    status: GameStatus,
}

impl GameState<RandomSource> {
    /// New game on an empty grid with a seeded random source
    pub fn new(seed: u32) -> Self {
        Self::with_source(RandomSource::new(seed))
    }
}

impl<S: PieceSource> GameState<S> {
    pub fn with_source(source: S) -> Self {
        Self::with_grid(Grid::new(), source)
    }

    /// New game on a prepared grid.
    ///
    /// If the first piece does not fit, the game starts in `GameOver`.
    pub fn with_grid(grid: Grid, mut source: S) -> Self {
        let (kind, color) = source.next_piece();
        let active = Piece::spawn(kind, color);
        let status = if active.valid_position(&grid, 0, 0) {
            GameStatus::Running
        } else {
            log::info!("spawn blocked on initial grid");
            GameStatus::GameOver
        };

        Self {
            grid,
            active,
            source,
            score: 0,
            lines: 0,
            gravity_timer_ms: 0,
            status,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn gravity_timer_ms(&self) -> u32 {
        self.gravity_timer_ms
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status.is_running()
    }

    /// Score reported when the session ends
    pub fn final_score(&self) -> u32 {
        self.score
    }

    /// Advance the gravity timer by `elapsed_ms`.
    ///
    /// Gravity fires once the timer exceeds `GRAVITY_MS`. A blocked piece is
    /// committed, full rows are cleared and scored, and the next piece is
    /// spawned. If the new piece does not fit the status becomes `GameOver`.
    pub fn tick(&mut self, elapsed_ms: u32) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Idle;
        }

        self.gravity_timer_ms = self.gravity_timer_ms.saturating_add(elapsed_ms);
        if self.gravity_timer_ms <= GRAVITY_MS {
            return TickOutcome::Idle;
        }
        self.gravity_timer_ms = 0;

        if self.active.try_move(&self.grid, 0, 1) {
            return TickOutcome::Fell;
        }

        let cleared = self.lock_piece();
        self.spawn_piece();
        TickOutcome::Locked { cleared }
    }

    /// Apply one input action; returns whether anything changed.
    ///
    /// Moves and rotations that do not fit are ignored.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if !self.is_running() {
            return false;
        }

        match action {
            GameAction::MoveLeft => self.active.try_move(&self.grid, -1, 0),
            GameAction::MoveRight => self.active.try_move(&self.grid, 1, 0),
            GameAction::SoftDrop => self.active.try_move(&self.grid, 0, 1),
            GameAction::Rotate => self.active.try_rotate(&self.grid),
            GameAction::Quit => {
                log::info!("quit requested, score {}", self.score);
                self.status = GameStatus::Quit;
                true
            }
        }
    }

    /// One frame: gravity first, then the frame's input in arrival order.
    ///
    /// Input that arrives after the game stopped running is dropped.
    pub fn advance<I>(&mut self, elapsed_ms: u32, actions: I) -> TickOutcome
    where
        I: IntoIterator<Item = GameAction>,
    {
        let outcome = self.tick(elapsed_ms);
        for action in actions {
            if !self.is_running() {
                break;
            }
            self.apply_action(action);
        }
        outcome
    }

    /// Read-only view for rendering
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            grid: self.grid,
            active: self.active,
            score: self.score,
            lines: self.lines,
            status: self.status,
        }
    }

    fn lock_piece(&mut self) -> u32 {
        self.active.commit(&mut self.grid);

        let (grid, cleared) = clear_full_rows(&self.grid);
        self.grid = grid;
        self.lines += cleared;
        self.score += line_clear_score(cleared);

        log::debug!(
            "locked {:?} at ({}, {}), cleared {}, score {}",
            self.active.kind,
            self.active.x,
            self.active.y,
            cleared,
            self.score
        );
        cleared
    }

    fn spawn_piece(&mut self) {
        let (kind, color) = self.source.next_piece();
        self.active = Piece::spawn(kind, color);

        if !self.active.valid_position(&self.grid, 0, 0) {
            log::info!("game over, final score {}", self.score);
            self.status = GameStatus::GameOver;
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
