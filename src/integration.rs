//! Integration module for connecting host collaborators with the tracker.
//!
//! This module provides the traits and utilities that sit at the crate's
//! boundaries: blob extraction in, overlay rendering out. The tracker core
//! never learns how masks are computed or how overlays are drawn.

mod annotator;
mod builder;
mod extractor;
mod pipeline;

pub use annotator::{Annotator, Overlay};
pub use builder::RegionBuilder;
pub use extractor::{BlobSource, IntoRegions};
pub use pipeline::{CounterPipeline, FrameProcessor, FrameReport};
