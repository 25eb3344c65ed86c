//! CounterPipeline for combining blob extraction with tracking and counting.

use crate::integration::annotator::{Annotator, Overlay};
use crate::integration::extractor::BlobSource;
use crate::tracker::{
    Candidate, CentroidTracker, ConfigError, CrossingCounts, Track, TrackerConfig,
};

/// Per-frame pipeline output: live tracks, counter snapshot, overlay data.
#[derive(Debug, Clone)]
pub struct FrameReport {
    pub tracks: Vec<Track>,
    pub counts: CrossingCounts,
    pub overlay: Overlay,
}

/// The frame-processing contract: anything that consumes one frame's
/// foreground mask plus a debug flag and yields a report.
///
/// Playback and acquisition loops should depend on this trait rather than
/// on a concrete pipeline.
pub trait FrameProcessor {
    /// Error type for processing failures.
    type Error;

    /// Process a single frame in ingestion order.
    fn process_frame(
        &mut self,
        mask: &[u8],
        width: u32,
        height: u32,
        debug: bool,
    ) -> Result<FrameReport, Self::Error>;
}

/// A combined counter that bundles blob extraction with centroid tracking.
///
/// Regions below the configured minimum width/height are dropped here, at
/// the extraction boundary, so the associator never sees them.
pub struct CounterPipeline<S: BlobSource> {
    extractor: S,
    tracker: CentroidTracker,
}

impl<S: BlobSource> CounterPipeline<S> {
    /// Create a new counting pipeline with the given extractor and tracker config.
    pub fn new(extractor: S, config: TrackerConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            extractor,
            tracker: CentroidTracker::new(config)?,
        })
    }

    /// Create a pipeline with default configuration and the reference line
    /// at mid-height of the given frame geometry.
    pub fn with_mid_height_line(extractor: S, frame_height: u32) -> Result<Self, ConfigError> {
        Self::new(
            extractor,
            TrackerConfig::default().with_line_at_mid_height(frame_height),
        )
    }

    /// Process a single frame and return the report.
    ///
    /// Runs extraction on the mask, filters undersized regions, feeds the
    /// surviving centroids to the tracker, and snapshots the counters.
    pub fn process_frame(
        &mut self,
        mask: &[u8],
        width: u32,
        height: u32,
        debug: bool,
    ) -> Result<FrameReport, S::Error> {
        let regions = self.extractor.extract(mask, width, height)?;

        let min_width = self.tracker.config().min_region_width;
        let min_height = self.tracker.config().min_region_height;
        let candidates: Vec<Candidate> = regions
            .into_iter()
            .filter(|r| r.meets_min_size(min_width, min_height))
            .map(Candidate::from_region)
            .collect();

        let tracks = self.tracker.update(candidates);
        Ok(FrameReport {
            tracks,
            counts: self.tracker.counts(),
            overlay: self.overlay(debug),
        })
    }

    /// Build the overlay snapshot for the current state. Track markers are
    /// included only when `debug` is set.
    pub fn overlay(&self, debug: bool) -> Overlay {
        let markers = if debug {
            self.tracker
                .tracks()
                .iter()
                .map(|t| t.latest_position())
                .collect()
        } else {
            Vec::new()
        };
        Overlay {
            counts: self.tracker.counts(),
            line_row: self.tracker.config().line_row,
            markers,
        }
    }

    /// Hand the current overlay to a host renderer. Read-only: the tracker
    /// state is untouched.
    pub fn annotate<A: Annotator>(&self, annotator: &mut A, debug: bool) {
        annotator.annotate(&self.overlay(debug));
    }

    /// Get a reference to the underlying extractor.
    pub fn extractor(&self) -> &S {
        &self.extractor
    }

    /// Get a mutable reference to the underlying extractor.
    pub fn extractor_mut(&mut self) -> &mut S {
        &mut self.extractor
    }

    /// Get a reference to the underlying tracker.
    pub fn tracker(&self) -> &CentroidTracker {
        &self.tracker
    }

    /// Get a mutable reference to the underlying tracker.
    pub fn tracker_mut(&mut self) -> &mut CentroidTracker {
        &mut self.tracker
    }

    /// Snapshot of the crossing counters.
    pub fn counts(&self) -> CrossingCounts {
        self.tracker.counts()
    }
}

impl<S: BlobSource> FrameProcessor for CounterPipeline<S> {
    type Error = S::Error;

    fn process_frame(
        &mut self,
        mask: &[u8],
        width: u32,
        height: u32,
        debug: bool,
    ) -> Result<FrameReport, Self::Error> {
        CounterPipeline::process_frame(self, mask, width, height, debug)
    }
}
