//! Main centroid tracker: association, track lifecycle, crossing counters.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tracker::line_counter::{CrossingCounts, LineCounter};
use crate::tracker::matching::{self, Candidate};
use crate::tracker::track::Track;

/// Strategy for assigning candidates to tracks.
///
/// `Greedy` reproduces the classic per-track nearest-neighbor scan,
/// including its shared-candidate steal behavior. `MinCost` is the explicit
/// globally-optimal alternative; switching changes counting behavior on
/// ambiguous frames, so it is never the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AssignmentStrategy {
    #[default]
    Greedy,
    MinCost,
}

/// Configuration for the centroid tracker. Immutable for the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Minimum accepted region width; smaller regions never become candidates
    pub min_region_width: f32,
    /// Minimum accepted region height
    pub min_region_height: f32,
    /// Hard gate on candidate-to-track association distance
    pub max_match_distance: f32,
    /// Consecutive unmatched frames before a track is evicted
    pub max_inactive_frames: u32,
    /// Capacity of the per-track position ring (at least 2)
    pub history_capacity: usize,
    /// Row coordinate of the horizontal reference line
    pub line_row: f32,
    /// Candidate assignment strategy
    pub assignment: AssignmentStrategy,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            min_region_width: 25.0,
            min_region_height: 25.0,
            max_match_distance: 35.0,
            max_inactive_frames: 8,
            history_capacity: 2,
            line_row: 0.0,
            assignment: AssignmentStrategy::Greedy,
        }
    }
}

impl TrackerConfig {
    /// Place the reference line at an absolute row.
    pub fn with_line_at(mut self, row: f32) -> Self {
        self.line_row = row;
        self
    }

    /// Derive the reference line from the frame geometry: mid-height.
    pub fn with_line_at_mid_height(self, frame_height: u32) -> Self {
        self.with_line_at(frame_height as f32 / 2.0)
    }

    /// Select the assignment strategy.
    pub fn with_assignment(mut self, assignment: AssignmentStrategy) -> Self {
        self.assignment = assignment;
        self
    }

    /// Check all fields; invalid values are a caller contract violation and
    /// are rejected here rather than producing silently wrong counts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_region_width.is_finite()
            || !self.min_region_height.is_finite()
            || self.min_region_width < 0.0
            || self.min_region_height < 0.0
        {
            return Err(ConfigError::InvalidMinRegionSize(
                self.min_region_width,
                self.min_region_height,
            ));
        }
        if !self.max_match_distance.is_finite() || self.max_match_distance <= 0.0 {
            return Err(ConfigError::InvalidMatchDistance(self.max_match_distance));
        }
        if self.max_inactive_frames == 0 {
            return Err(ConfigError::InvalidMaxInactiveFrames);
        }
        if self.history_capacity < 2 {
            return Err(ConfigError::InvalidHistoryCapacity(self.history_capacity));
        }
        if !self.line_row.is_finite() || self.line_row < 0.0 {
            return Err(ConfigError::InvalidLineRow(self.line_row));
        }
        Ok(())
    }
}

/// Configuration rejected at tracker construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("minimum region size must be finite and non-negative, got {0}x{1}")]
    InvalidMinRegionSize(f32, f32),
    #[error("maximum match distance must be finite and positive, got {0}")]
    InvalidMatchDistance(f32),
    #[error("maximum inactive frames must be at least 1")]
    InvalidMaxInactiveFrames,
    #[error("history capacity must be at least 2, got {0}")]
    InvalidHistoryCapacity(usize),
    #[error("reference line row must be finite and non-negative, got {0}")]
    InvalidLineRow(f32),
}

/// The track store: owns all track state and the crossing counters.
///
/// Single-threaded and frame-sequential; `update` must be called once per
/// ingested frame, in order. Hosts with multiple streams run one tracker
/// per stream; instances share no state.
pub struct CentroidTracker {
    tracks: Vec<Track>,
    counter: LineCounter,
    frame_id: u32,
    config: TrackerConfig,
}

impl CentroidTracker {
    /// Create a tracker, rejecting invalid configuration up front.
    pub fn new(config: TrackerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let counter = LineCounter::new(config.line_row);
        Ok(Self {
            tracks: Vec::new(),
            counter,
            frame_id: 0,
            config,
        })
    }

    /// Process one frame's worth of candidates.
    ///
    /// Associates candidates with live tracks, ages and evicts unmatched
    /// tracks, promotes leftover candidates to new tracks, then evaluates
    /// every live track for a line crossing. An empty candidate list is a
    /// legal round: tracks age and may be evicted, counters never move.
    /// Returns clones of the live tracks after the round.
    pub fn update(&mut self, candidates: Vec<Candidate>) -> Vec<Track> {
        self.frame_id += 1;

        let track_positions: Vec<Point2<f32>> =
            self.tracks.iter().map(|t| t.latest_position()).collect();
        let dists = matching::distance_matrix(&track_positions, &candidates);
        let assignment = match self.config.assignment {
            AssignmentStrategy::Greedy => {
                matching::greedy_assignment(&dists, self.config.max_match_distance)
            }
            AssignmentStrategy::MinCost => {
                matching::min_cost_assignment(&dists, self.config.max_match_distance)
            }
        };

        for &(itrack, icand) in &assignment.matches {
            self.tracks[itrack].record(candidates[icand].centroid);
        }
        for &itrack in &assignment.unmatched_tracks {
            self.tracks[itrack].mark_missed();
        }

        let max_inactive = self.config.max_inactive_frames;
        self.tracks.retain(|t| {
            if t.is_stale(max_inactive) {
                log::debug!(
                    "evicting track {} after {} unmatched frames",
                    t.track_id,
                    t.inactive_frames
                );
                false
            } else {
                true
            }
        });

        for &icand in &assignment.unmatched_candidates {
            let track = Track::new(
                candidates[icand].centroid,
                self.config.history_capacity,
                self.frame_id,
            );
            log::debug!(
                "new track {} at ({}, {})",
                track.track_id,
                track.latest_position().x,
                track.latest_position().y
            );
            self.tracks.push(track);
        }

        for track in &mut self.tracks {
            self.counter.observe(track);
        }

        log::trace!(
            "frame {}: {} matched, {} new, {} live, counts {:?}",
            self.frame_id,
            assignment.matches.len(),
            assignment.unmatched_candidates.len(),
            self.tracks.len(),
            self.counter.counts()
        );

        self.tracks.clone()
    }

    /// Live tracks after the most recent round.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Snapshot of the crossing counters.
    pub fn counts(&self) -> CrossingCounts {
        self.counter.counts()
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn frame_id(&self) -> u32 {
        self.frame_id
    }
}
