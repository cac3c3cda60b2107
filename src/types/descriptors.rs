//! Visible column/row descriptors produced by the layout pass.
//!
//! Cloning a descriptor only bumps reference counts, so cell contexts can own
//! their descriptors without touching the allocator.

use std::rc::Rc;

use crate::model::{ColumnRef, SubgridRef};

/// A column currently scrolled into view.
#[derive(Clone)]
pub struct VisibleColumn {
    /// Viewport position. Negative for handle columns.
    pub column_index: i32,
    /// Backing column, absent for handle columns.
    pub column: Option<ColumnRef>,
    /// Left edge in pixels
    pub left: f32,
    /// Width in pixels
    pub width: f32,
}

/// A row currently scrolled into view.
#[derive(Clone)]
pub struct VisibleRow {
    /// Viewport position, counted across all subgrids.
    pub index: i32,
    /// Logical row index within the owning subgrid.
    pub row_index: i32,
    /// Owning subgrid
    pub subgrid: SubgridRef,
    /// Top edge in pixels
    pub top: f32,
    /// Height in pixels
    pub height: f32,
}

impl VisibleColumn {
    /// Right edge in pixels.
    pub fn right(&self) -> f32 {
        self.left + self.width
    }
}

impl VisibleRow {
    /// Bottom edge in pixels.
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Whether both descriptors point at the same subgrid instance.
    pub fn same_subgrid(&self, other: &SubgridRef) -> bool {
        Rc::ptr_eq(&self.subgrid, other)
    }
}

impl std::fmt::Debug for VisibleColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisibleColumn")
            .field("column_index", &self.column_index)
            .field("column", &self.column.as_ref().map(|c| c.index()))
            .field("left", &self.left)
            .field("width", &self.width)
            .finish()
    }
}

impl std::fmt::Debug for VisibleRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisibleRow")
            .field("index", &self.index)
            .field("row_index", &self.row_index)
            .field("subgrid", &self.subgrid.name())
            .field("top", &self.top)
            .field("height", &self.height)
            .finish()
    }
}
