//! Collaborator contracts consumed by the cell core.
//!
//! The cell context only talks to the grid through these traits. Reference
//! in-memory implementations live in the submodules and back both the wasm
//! viewer and the tests.

mod behavior;
mod column;
mod subgrid;

pub use behavior::{BasicBehavior, StaticDataModel, BOTTOM_TOTALS, TOP_TOTALS};
pub use column::BasicColumn;
pub use subgrid::MemorySubgrid;

use std::rc::Rc;

use serde_json::Value;

use crate::config::GridProperties;
use crate::types::{ColumnProperties, Point, PointerEvent, Properties, VisibleColumn, VisibleRow};

/// Role flag carried by every subgrid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubgridRole {
    Data,
    Header,
    Filter,
    Info,
    Summary,
}

/// A horizontal band of rows: the data body, a header, a filter row, totals...
pub trait Subgrid {
    /// Stable name, also used to key per-cell properties.
    fn name(&self) -> &str;

    fn role(&self) -> SubgridRole;

    /// Read a cell. The subgrid decides what out-of-range means.
    fn get_value(&self, x: i32, y: i32) -> Value;

    fn set_value(&self, x: i32, y: i32, value: Value);

    /// Whole row object, if the row exists.
    fn get_row(&self, y: i32) -> Option<Value>;

    fn row_count(&self) -> usize;

    fn is_data(&self) -> bool {
        self.role() == SubgridRole::Data
    }

    fn is_header(&self) -> bool {
        self.role() == SubgridRole::Header
    }

    fn is_filter(&self) -> bool {
        self.role() == SubgridRole::Filter
    }

    fn is_info(&self) -> bool {
        self.role() == SubgridRole::Info
    }

    fn is_summary(&self) -> bool {
        self.role() == SubgridRole::Summary
    }
}

pub type SubgridRef = Rc<dyn Subgrid>;

/// A data column and the per-cell property overrides attached to it.
pub trait Column {
    /// Index into the data model's field list.
    fn index(&self) -> i32;

    fn properties(&self) -> &ColumnProperties;

    /// Per-cell overrides, `None` when the cell has none.
    fn cell_own_properties(&self, row_index: i32, subgrid: &SubgridRef) -> Option<Rc<Properties>>;

    /// Write one per-cell property, creating the override bag when missing.
    /// A new bag starts from the base column properties.
    /// Returns the bag as it now stands.
    fn set_cell_property(
        &self,
        row_index: i32,
        key: &str,
        value: Value,
        subgrid: &SubgridRef,
    ) -> Rc<Properties>;
}

pub type ColumnRef = Rc<dyn Column>;

pub trait SelectionModel {
    fn is_row_selected(&self, y: i32) -> bool;
    fn is_column_selected(&self, x: i32) -> bool;
    fn is_cell_selected(&self, x: i32, y: i32) -> bool;
}

pub trait DataModel {
    /// Whether the given data column holds drill-down (tree) nodes.
    fn is_drill_down(&self, column_index: i32) -> bool;
}

pub trait Behavior {
    fn data_model(&self) -> Rc<dyn DataModel>;

    /// The subgrid designated as top totals, if any.
    fn top_totals(&self) -> Option<SubgridRef>;

    /// The subgrid designated as bottom totals, if any.
    fn bottom_totals(&self) -> Option<SubgridRef>;
}

/// Source of the descriptors for everything currently scrolled into view.
pub trait Renderer {
    /// Visible columns, left to right.
    fn visible_columns(&self) -> Rc<[VisibleColumn]>;

    /// Visible rows, top to bottom, across all subgrids.
    fn visible_rows(&self) -> Rc<[VisibleRow]>;
}

/// The grid as seen from the cell core.
pub trait Grid {
    fn properties(&self) -> GridProperties;

    fn h_scroll_value(&self) -> i32;

    fn v_scroll_value(&self) -> i32;

    /// Currently hovered grid cell, if the pointer is over one.
    fn hover_cell(&self) -> Option<Point>;

    fn renderer(&self) -> Rc<dyn Renderer>;

    fn selection_model(&self) -> Rc<dyn SelectionModel>;

    fn behavior(&self) -> Rc<dyn Behavior>;

    /// Render a raw value with the named format.
    fn format_value(&self, format: Option<&str>, value: &Value) -> String;

    /// Open the cell editor for the event's cell.
    fn activate_editor(&self, event: &PointerEvent);

    /// Rows shown above the data subgrid: header, filter, info and
    /// top-totals bands.
    fn header_row_count(&self) -> i32;

    /// Frozen data rows. Compared against data-row indices.
    fn fixed_row_count(&self) -> i32 {
        self.properties().fixed_row_count
    }

    /// Every visible row position above the scrolling region: the header
    /// bands followed by the frozen data rows. Compared against visible row
    /// positions.
    fn frozen_row_count(&self) -> i32 {
        self.header_row_count().saturating_add(self.fixed_row_count())
    }

    fn fixed_column_count(&self) -> i32 {
        self.properties().fixed_column_count
    }
}
