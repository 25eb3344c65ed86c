//! Persistent track state for detected moving blobs.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use nalgebra::Point2;

/// Global track ID counter for unique ID generation.
static TRACK_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Reset the global track ID counter (useful for testing).
pub fn reset_track_id_counter() {
    TRACK_ID_COUNTER.store(0, Ordering::SeqCst);
}

/// Get the next unique track ID.
fn next_track_id() -> u64 {
    TRACK_ID_COUNTER.fetch_add(1, Ordering::SeqCst) + 1
}

/// Fixed-capacity ring of the most recent track positions.
///
/// Chronological order, oldest evicted first on overflow. Never empty once
/// the owning track exists. With the default capacity of 2 the crossing
/// check compares exactly the previous and current position; larger
/// capacities widen the displacement window, they do not change the
/// oldest-vs-newest comparison.
#[derive(Debug, Clone)]
pub struct PositionHistory {
    points: VecDeque<Point2<f32>>,
    capacity: usize,
}

impl PositionHistory {
    /// Create a history seeded with one position.
    pub fn new(first: Point2<f32>, capacity: usize) -> Self {
        let mut points = VecDeque::with_capacity(capacity);
        points.push_back(first);
        Self { points, capacity }
    }

    /// Append a position, evicting the oldest entry when full.
    pub fn push(&mut self, point: Point2<f32>) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    /// Oldest retained position.
    #[inline]
    pub fn oldest(&self) -> Point2<f32> {
        *self.points.front().expect("history is never empty")
    }

    /// Most recent position.
    #[inline]
    pub fn latest(&self) -> Point2<f32> {
        *self.points.back().expect("history is never empty")
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Positions in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &Point2<f32>> {
        self.points.iter()
    }
}

/// A persistent identity for a detected moving blob.
#[derive(Debug, Clone)]
pub struct Track {
    /// Unique track identifier
    pub track_id: u64,
    /// Bounded recent-position buffer
    pub history: PositionHistory,
    /// Frames elapsed since this track was last matched to a candidate
    pub inactive_frames: u32,
    /// Whether a crossing has already been attributed to this track
    pub crossing_checked: bool,
    /// Frame ID when the track was started
    pub start_frame: u32,
}

impl Track {
    /// Create a new track from an unmatched candidate centroid.
    pub fn new(position: Point2<f32>, history_capacity: usize, frame_id: u32) -> Self {
        Self {
            track_id: next_track_id(),
            history: PositionHistory::new(position, history_capacity),
            inactive_frames: 0,
            crossing_checked: false,
            start_frame: frame_id,
        }
    }

    /// Most recent position (marker position for annotators).
    #[inline]
    pub fn latest_position(&self) -> Point2<f32> {
        self.history.latest()
    }

    /// Oldest retained position.
    #[inline]
    pub fn oldest_position(&self) -> Point2<f32> {
        self.history.oldest()
    }

    /// Record a matched candidate position and reset the inactivity counter.
    pub fn record(&mut self, position: Point2<f32>) {
        self.history.push(position);
        self.inactive_frames = 0;
    }

    /// Note a frame without a match.
    pub fn mark_missed(&mut self) {
        self.inactive_frames += 1;
    }

    /// Whether the track has gone unmatched for `max_inactive_frames` frames.
    #[inline]
    pub fn is_stale(&self, max_inactive_frames: u32) -> bool {
        self.inactive_frames >= max_inactive_frames
    }

    /// Mark the track as already counted for a crossing.
    pub fn mark_counted(&mut self) {
        self.crossing_checked = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point2<f32> {
        Point2::new(x, y)
    }

    #[test]
    fn test_history_evicts_oldest() {
        let mut history = PositionHistory::new(p(0.0, 0.0), 2);
        history.push(p(1.0, 1.0));
        assert_eq!(history.len(), 2);
        assert_eq!(history.oldest(), p(0.0, 0.0));

        history.push(p(2.0, 2.0));
        assert_eq!(history.len(), 2);
        assert_eq!(history.oldest(), p(1.0, 1.0));
        assert_eq!(history.latest(), p(2.0, 2.0));
    }

    #[test]
    fn test_history_never_exceeds_capacity() {
        let mut history = PositionHistory::new(p(0.0, 0.0), 3);
        for i in 1..10 {
            history.push(p(i as f32, 0.0));
            assert!(history.len() <= 3);
        }
        assert_eq!(history.oldest(), p(7.0, 0.0));
        assert_eq!(history.latest(), p(9.0, 0.0));
    }

    #[test]
    fn test_record_resets_inactivity() {
        let mut track = Track::new(p(10.0, 10.0), 2, 1);
        track.mark_missed();
        track.mark_missed();
        assert_eq!(track.inactive_frames, 2);

        track.record(p(12.0, 12.0));
        assert_eq!(track.inactive_frames, 0);
        assert_eq!(track.latest_position(), p(12.0, 12.0));
        assert_eq!(track.oldest_position(), p(10.0, 10.0));
    }

    #[test]
    fn test_staleness() {
        let mut track = Track::new(p(0.0, 0.0), 2, 1);
        for _ in 0..7 {
            track.mark_missed();
            assert!(!track.is_stale(8));
        }
        track.mark_missed();
        assert!(track.is_stale(8));
    }

    #[test]
    fn test_unique_ids() {
        reset_track_id_counter();
        let a = Track::new(p(0.0, 0.0), 2, 1);
        let b = Track::new(p(1.0, 1.0), 2, 1);
        assert_ne!(a.track_id, b.track_id);
    }
}
