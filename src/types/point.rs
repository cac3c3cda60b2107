use serde::{Deserialize, Serialize};

/// Coordinate value meaning "no descriptor bound on this axis".
///
/// Any negative value already fails the data-column test, so this only
/// needs to be distinct from the real handle-column indices.
pub const UNBOUND: i32 = i32::MIN;

/// Mutable integer coordinate pair.
///
/// Used both as a grid cell (viewport position) and as a data cell (index
/// into the subgrid). No validation: negative values are legal and act as
/// "not applicable" markers for handle columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// A point with both axes unbound.
    pub const fn unbound() -> Self {
        Self {
            x: UNBOUND,
            y: UNBOUND,
        }
    }

    /// Overwrite both fields in place.
    pub fn set(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }
}

/// Pixel rectangle of a rendered cell.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Whether the pixel position lies inside the rectangle (right/bottom edges exclusive).
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}
