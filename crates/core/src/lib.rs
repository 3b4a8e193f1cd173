//! Core game logic - pure, deterministic, and testable
//!
//! No terminal, input or clock code lives here. The runner feeds elapsed time
//! and input actions into [`GameState`] and renders from [`GameSnapshot`].
//!
//! # Module Structure
//!
//! - [`grid`]: 10x20 playfield of colored cells
//! - [`shape`]: binary shape matrices and clockwise rotation
//! - [`piece`]: the falling piece, collision checks and commit
//! - [`clear`]: the row-clear engine
//! - [`scoring`]: points per clear event
//! - [`rng`]: injectable piece source and the seeded default
//! - [`game_state`]: the tick/input state machine
//! - [`snapshot`]: render-facing view
//!
//! # Example
//!
//! ```
//! use block_puzzle_core::{GameState, ScriptedSource, TickOutcome};
//! use block_puzzle_core::types::{BlockColor, GameAction, ShapeKind, GRAVITY_MS};
//!
//! let mut game = GameState::with_source(ScriptedSource::repeat(ShapeKind::I, BlockColor::Red));
//! assert_eq!(game.active().x, 3);
//!
//! let outcome = game.advance(GRAVITY_MS + 1, [GameAction::MoveLeft]);
//! assert_eq!(outcome, TickOutcome::Fell);
//! assert_eq!((game.active().x, game.active().y), (2, 1));
//! ```

pub mod clear;
pub mod game_state;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod snapshot;

pub use block_puzzle_types as types;

pub use clear::clear_full_rows;
pub use game_state::{GameState, TickOutcome};
pub use grid::{Grid, Row};
pub use piece::Piece;
pub use rng::{PieceSource, RandomSource, ScriptedSource, SimpleRng};
pub use scoring::line_clear_score;
pub use shape::Shape;
pub use snapshot::GameSnapshot;
