//! Layout engine for the visible part of the grid.
//!
//! This module handles:
//! - Viewport state (cell-granular scroll offsets, canvas size)
//! - Computing the visible column/row descriptors for the current scroll
//! - Pixel hit testing against those descriptors

mod viewport;
mod visible;

pub use viewport::Viewport;
pub use visible::{LayoutColumn, VisibleLayout, HANDLE_COLUMN_INDEX};
