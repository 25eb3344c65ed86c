//! Centroid-based multi-object tracking with directional line-crossing counters.
//!
//! The `tracker` module holds the core: candidate-to-track association,
//! bounded position history, track lifecycle, and the crossing counters.
//! The `integration` module connects host-side blob extraction and rendering
//! to the tracker through traits.

pub mod integration;
pub mod tracker;

pub use integration::{
    Annotator, BlobSource, CounterPipeline, FrameProcessor, FrameReport, Overlay, RegionBuilder,
};
pub use tracker::{
    AssignmentStrategy, Candidate, CentroidTracker, ConfigError, CrossingCounts, Direction, Rect,
    Track, TrackerConfig,
};
