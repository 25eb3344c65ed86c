//! Read-only overlay data and the host-side rendering hook.

use nalgebra::Point2;

use crate::tracker::CrossingCounts;

/// Everything an on-frame overlay needs for one frame.
///
/// `markers` holds the latest position of every live track and is only
/// populated for debug frames; the counter snapshot and line row are always
/// present. Rendering an overlay has no effect on tracking state.
#[derive(Debug, Clone)]
pub struct Overlay {
    /// Counter snapshot for the text overlay
    pub counts: CrossingCounts,
    /// Row of the reference line
    pub line_row: f32,
    /// Latest position per live track, debug frames only
    pub markers: Vec<Point2<f32>>,
}

/// Trait for host-side overlay renderers.
///
/// The pipeline hands every implementor a read-only [`Overlay`]; how (or
/// whether) it is drawn is entirely up to the host.
pub trait Annotator {
    fn annotate(&mut self, overlay: &Overlay);
}
