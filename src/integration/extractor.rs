//! Trait for host-side blob extraction backends.

use crate::tracker::Rect;

/// Trait for blob extraction backends.
///
/// Implement this to connect whatever produces foreground regions (frame
/// differencing, a segmentation model, a file of annotations) to the
/// counting pipeline. The pipeline only ever sees the returned regions.
///
/// # Example
///
/// ```ignore
/// use crosscount_rs::{BlobSource, Rect};
///
/// struct MaskScanner {
///     // Your connected-component logic here
/// }
///
/// impl BlobSource for MaskScanner {
///     type Error = std::io::Error;
///
///     fn extract(&mut self, mask: &[u8], width: u32, height: u32) -> Result<Vec<Rect>, Self::Error> {
///         // Label the mask and return region bounding boxes
///         Ok(vec![])
///     }
/// }
/// ```
pub trait BlobSource {
    /// Error type for extraction failures.
    type Error;

    /// Extract candidate regions from a binary foreground mask.
    ///
    /// # Arguments
    /// * `mask` - Foreground mask bytes (layout depends on implementation)
    /// * `width` - Mask width in pixels
    /// * `height` - Mask height in pixels
    ///
    /// # Returns
    /// Axis-aligned bounding boxes of the detected regions, or an error.
    fn extract(
        &mut self,
        mask: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<Rect>, Self::Error>;
}

/// Helper trait for converting extractor-specific outputs to regions.
pub trait IntoRegions {
    /// Convert the output into a vector of regions.
    fn into_regions(self) -> Vec<Rect>;
}

impl IntoRegions for Vec<Rect> {
    fn into_regions(self) -> Vec<Rect> {
        self
    }
}
