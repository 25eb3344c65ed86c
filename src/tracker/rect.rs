use nalgebra::Point2;

/// Axis-aligned detected region in TLWH format
/// (Top-Left X, Top-Left Y, Width, Height).
///
/// Regions arrive from the blob-extraction boundary; the tracker itself only
/// ever consumes their centroids.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rect {
    /// Top-left x coordinate
    pub x: f32,
    /// Top-left y coordinate
    pub y: f32,
    /// Width of the region
    pub width: f32,
    /// Height of the region
    pub height: f32,
}

impl Rect {
    /// Create a new Rect from top-left coordinates and dimensions (TLWH format).
    #[inline]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a Rect from TLBR format (top-left x, top-left y, bottom-right x, bottom-right y).
    #[inline]
    pub fn from_tlbr(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x: x1,
            y: y1,
            width: x2 - x1,
            height: y2 - y1,
        }
    }

    /// Get the center point of the region: `(x + width/2, y + height/2)`.
    #[inline]
    pub fn center(&self) -> Point2<f32> {
        Point2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Get the area of the region.
    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Whether the region is at least `min_width` x `min_height`.
    #[inline]
    pub fn meets_min_size(&self, min_width: f32, min_height: f32) -> bool {
        self.width >= min_width && self.height >= min_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        let c = rect.center();
        assert_eq!(c.x, 25.0);
        assert_eq!(c.y, 40.0);
    }

    #[test]
    fn test_from_tlbr() {
        let rect = Rect::from_tlbr(10.0, 20.0, 40.0, 60.0);
        assert_eq!(rect.width, 30.0);
        assert_eq!(rect.height, 40.0);
        assert_eq!(rect.area(), 1200.0);
    }

    #[test]
    fn test_min_size() {
        let rect = Rect::new(0.0, 0.0, 25.0, 24.0);
        assert!(rect.meets_min_size(25.0, 24.0));
        assert!(!rect.meets_min_size(25.0, 25.0));
        assert!(!rect.meets_min_size(26.0, 10.0));
    }
}
