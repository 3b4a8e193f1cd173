//! Scoring module
//!
//! Each clear event is worth `POINTS_PER_ROW` per row, with no bonus for
//! clearing several rows at once.

use crate::types::POINTS_PER_ROW;

/// Points for a single clear event
pub fn line_clear_score(cleared: u32) -> u32 {
    cleared * POINTS_PER_ROW
}
