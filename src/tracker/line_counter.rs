//! Reference-line crossing detection and directional counters.

use serde::{Deserialize, Serialize};

use crate::tracker::track::Track;

/// Direction of a crossing event relative to the horizontal reference line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Toward decreasing row coordinates
    Up,
    /// Toward increasing row coordinates
    Down,
}

/// Crossing counters for a tracking session.
///
/// Monotonically non-decreasing; zeroed at session start and reset only by
/// starting a new session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossingCounts {
    /// Crossings in either direction
    pub total: u64,
    /// Upward crossings
    pub up: u64,
    /// Downward crossings
    pub down: u64,
}

/// One-shot-per-track crossing detector against a fixed horizontal line.
#[derive(Debug, Clone)]
pub struct LineCounter {
    line_row: f32,
    counts: CrossingCounts,
}

impl LineCounter {
    pub fn new(line_row: f32) -> Self {
        Self {
            line_row,
            counts: CrossingCounts::default(),
        }
    }

    /// Row coordinate of the reference line.
    #[inline]
    pub fn line_row(&self) -> f32 {
        self.line_row
    }

    /// Current counter snapshot.
    #[inline]
    pub fn counts(&self) -> CrossingCounts {
        self.counts
    }

    /// Evaluate one track for a crossing since its oldest retained position.
    ///
    /// Tracks with fewer than two history entries cannot have crossed yet
    /// and are skipped. A track is attributed at most one crossing in its
    /// lifetime: once checked, later re-crossings are never re-detected.
    /// Comparing only the oldest and newest retained positions means motion
    /// that crosses and re-crosses between retained samples can be missed
    /// on fast targets.
    pub fn observe(&mut self, track: &mut Track) -> Option<Direction> {
        if track.crossing_checked || track.history.len() < 2 {
            return None;
        }

        let direction =
            crossing_direction(track.oldest_position().y, track.latest_position().y, self.line_row)?;

        self.counts.total += 1;
        match direction {
            Direction::Up => self.counts.up += 1,
            Direction::Down => self.counts.down += 1,
        }
        track.mark_counted();
        log::debug!(
            "track {} crossed line {} going {:?}",
            track.track_id,
            self.line_row,
            direction
        );
        Some(direction)
    }
}

/// Crossing predicate over an oldest/newest position pair.
///
/// Down: `y0 < line && y1 >= line`. Up: `y0 > line && y1 <= line`. A pair
/// resting exactly on the line satisfies neither. The two predicates are
/// mutually exclusive for any single pair.
fn crossing_direction(y0: f32, y1: f32, line: f32) -> Option<Direction> {
    if y0 < line && y1 >= line {
        Some(Direction::Down)
    } else if y0 > line && y1 <= line {
        Some(Direction::Up)
    } else {
        None
    }
}
