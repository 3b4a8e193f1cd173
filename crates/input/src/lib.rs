//! Terminal input module.
//!
//! Maps `crossterm` key presses into [`crate::types::GameAction`] and drains
//! them once per frame. There is no auto-repeat handling: one press, one
//! action.

pub mod map;
pub mod queue;

pub use block_puzzle_types as types;

pub use map::handle_key_event;
pub use queue::{InputQueue, MAX_ACTIONS_PER_FRAME};
