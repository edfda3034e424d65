use serde::{Deserialize, Serialize};

/// One detected face: an axis-aligned rectangle in image pixel
/// coordinates, origin at the top-left.
///
/// The serialized field names are the plugin wire contract; callers on the
/// other side of the channel receive exactly `x`, `y`, `width`, `height`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceRegion {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl FaceRegion {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// True when every coordinate of `other` lies within `tolerance`
    /// pixels of this rectangle's.
    pub fn within_tolerance(&self, other: &FaceRegion, tolerance: i32) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.width - other.width).abs() <= tolerance
            && (self.height - other.height).abs() <= tolerance
    }
}
