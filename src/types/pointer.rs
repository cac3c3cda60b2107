use super::Point;

/// Raw browser event data the handlers care about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrimitiveEvent {
    /// Repetition count (`UIEvent.detail`): 1 for a single click, 2 for a double.
    pub count: u32,
}

/// A pointer event resolved to a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// Viewport cell under the pointer. Handlers may replace it with a
    /// scroll-adjusted coordinate before activating an editor.
    pub grid_cell: Point,
    pub primitive: PrimitiveEvent,
}

impl PointerEvent {
    pub fn new(grid_cell: Point, count: u32) -> Self {
        Self {
            grid_cell,
            primitive: PrimitiveEvent { count },
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl From<&web_sys::MouseEvent> for PrimitiveEvent {
    fn from(event: &web_sys::MouseEvent) -> Self {
        Self {
            count: u32::try_from(event.detail()).unwrap_or(0),
        }
    }
}
