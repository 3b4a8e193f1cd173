//! Terminal rendering for the puzzle game.
//!
//! Rendering is split in two steps: [`GameView`] paints a snapshot into a
//! [`FrameBuffer`] (pure, testable), and [`TerminalRenderer`] flushes the
//! framebuffer to the terminal through crossterm.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use block_puzzle_core as core;
pub use block_puzzle_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{BoardRect, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
