//! Builder for creating regions from various host bounding-box formats.

use crate::tracker::Rect;

/// Builder for creating `Rect` regions from various input formats.
#[derive(Debug, Clone, Default)]
pub struct RegionBuilder {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl RegionBuilder {
    /// Create a new region builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set bounding box in TLBR format (x1, y1, x2, y2).
    pub fn tlbr(mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        self.x1 = x1;
        self.y1 = y1;
        self.x2 = x2;
        self.y2 = y2;
        self
    }

    /// Set bounding box in XYWH format (center_x, center_y, width, height).
    pub fn xywh(mut self, cx: f32, cy: f32, w: f32, h: f32) -> Self {
        self.x1 = cx - w / 2.0;
        self.y1 = cy - h / 2.0;
        self.x2 = cx + w / 2.0;
        self.y2 = cy + h / 2.0;
        self
    }

    /// Set bounding box in TLWH format (top-left x, top-left y, width, height).
    pub fn tlwh(mut self, x: f32, y: f32, w: f32, h: f32) -> Self {
        self.x1 = x;
        self.y1 = y;
        self.x2 = x + w;
        self.y2 = y + h;
        self
    }

    /// Build the final `Rect`.
    pub fn build(self) -> Rect {
        Rect::from_tlbr(self.x1, self.y1, self.x2, self.y2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_builder() {
        let region = RegionBuilder::new().tlbr(10.0, 20.0, 50.0, 80.0).build();
        assert_eq!(region.width, 40.0);
        assert_eq!(region.height, 60.0);

        let centered = RegionBuilder::new().xywh(30.0, 50.0, 40.0, 60.0).build();
        assert_eq!(centered.x, 10.0);
        assert_eq!(centered.y, 20.0);
        assert_eq!(centered.center(), region.center());
    }
}
