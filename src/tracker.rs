mod centroid_tracker;
mod line_counter;
mod matching;
mod rect;
mod track;

pub use centroid_tracker::{AssignmentStrategy, CentroidTracker, ConfigError, TrackerConfig};
pub use line_counter::{CrossingCounts, Direction, LineCounter};
pub use matching::Candidate;
pub use rect::Rect;
pub use track::{PositionHistory, Track, reset_track_id_counter};
