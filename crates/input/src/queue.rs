//! Per-frame input draining.
//!
//! Each frame the runner waits for input until the next frame boundary and
//! collects every mapped key press in arrival order. The buffer is fixed
//! size; once it is full, remaining terminal events stay queued for the next
//! frame.

use std::time::Instant;

use anyhow::{Context, Result};
use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::map::handle_key_event;
use crate::types::GameAction;

/// Maximum actions collected per frame
pub const MAX_ACTIONS_PER_FRAME: usize = 64;

#[derive(Debug, Default)]
pub struct InputQueue {
    actions: ArrayVec<GameAction, MAX_ACTIONS_PER_FRAME>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect key presses until `deadline`, returning them in arrival order.
    ///
    /// A quit action ends collection early so the runner can react at once.
    pub fn collect_until(&mut self, deadline: Instant) -> Result<&[GameAction]> {
        self.actions.clear();

        while !self.actions.is_full() {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout).context("polling terminal events")? {
                break;
            }
            let ev = event::read().context("reading terminal event")?;
            if self.push_event(ev) == Some(GameAction::Quit) {
                break;
            }
        }

        Ok(self.actions.as_slice())
    }

    /// Map one terminal event and enqueue it.
    ///
    /// Only key presses count; repeats and releases are ignored.
    pub fn push_event(&mut self, ev: Event) -> Option<GameAction> {
        let Event::Key(key) = ev else {
            return None;
        };
        self.push_key(key)
    }

    fn push_key(&mut self, key: KeyEvent) -> Option<GameAction> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        let action = handle_key_event(key)?;
        self.actions.try_push(action).ok()?;
        Some(action)
    }

    pub fn actions(&self) -> &[GameAction] {
        &self.actions
    }
}
