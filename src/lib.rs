//! Falling-block puzzle game (workspace facade crate).
//!
//! Game rules live in `block-puzzle-core`; input and terminal rendering live
//! in their own crates. This crate re-exports them under short names and owns
//! the runtime configuration of the binary.

pub mod config;

pub use block_puzzle_core as core;
pub use block_puzzle_input as input;
pub use block_puzzle_term as term;
pub use block_puzzle_types as types;

pub use config::Config;
