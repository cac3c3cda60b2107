//! Row/column classification of a bound cell.
//!
//! Every predicate is a pure function of the bound descriptors and the grid
//! handle; nothing here is stored. Unbound rows and columns classify as
//! "not data", never as an error.

use std::rc::Rc;

use super::CellEvent;
use crate::deprecated::deprecated;
use crate::model::SubgridRole;
use crate::types::{ColumnProperties, Properties};

/// Role a cell plays, driving which column property bag styles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellRole {
    /// Handle column or tree (hierarchy) column cell
    RowHeader,
    Data,
    Header,
    Filter,
    Info,
    Summary,
    TopTotals,
    BottomTotals,
}

/// Pick the column property bag for a role.
///
/// Header, summary and totals rows all share the column-header look.
pub fn column_properties_for(role: CellRole, props: &ColumnProperties) -> &Rc<Properties> {
    match role {
        CellRole::RowHeader => &props.row_header,
        CellRole::Data => &props.base,
        CellRole::Filter => &props.filter,
        CellRole::Info => &props.info,
        CellRole::Header | CellRole::Summary | CellRole::TopTotals | CellRole::BottomTotals => {
            &props.column_header
        }
    }
}

impl CellEvent {
    /// Role of the bound cell.
    pub fn role(&self) -> CellRole {
        if self.is_handle_column() || self.is_hierarchy_column() {
            return CellRole::RowHeader;
        }
        let Some(subgrid) = self.subgrid() else {
            // unbound rows style like headers
            return CellRole::Header;
        };
        match subgrid.role() {
            SubgridRole::Data => CellRole::Data,
            _ if self.is_top_totals_row() => CellRole::TopTotals,
            _ if self.is_bottom_totals_row() => CellRole::BottomTotals,
            SubgridRole::Header => CellRole::Header,
            SubgridRole::Filter => CellRole::Filter,
            SubgridRole::Info => CellRole::Info,
            SubgridRole::Summary => CellRole::Summary,
        }
    }

    // "Visible" means scrolled into view.

    pub fn is_row_visible(&self) -> bool {
        self.visible_row.is_some()
    }

    pub fn is_column_visible(&self) -> bool {
        self.visible_column.is_some()
    }

    pub fn is_cell_visible(&self) -> bool {
        self.is_row_visible() && self.is_column_visible()
    }

    fn has_subgrid_role(&self, role: SubgridRole) -> bool {
        self.subgrid().is_some_and(|sg| sg.role() == role)
    }

    pub fn is_data_row(&self) -> bool {
        self.has_subgrid_role(SubgridRole::Data)
    }

    pub fn is_data_column(&self) -> bool {
        self.grid_cell.x >= 0
    }

    pub fn is_data_cell(&self) -> bool {
        self.is_data_row() && self.is_data_column()
    }

    pub fn is_handle_column(&self) -> bool {
        !self.is_data_column()
    }

    pub fn is_handle_cell(&self) -> bool {
        self.is_handle_column() && self.is_data_row()
    }

    pub fn is_row_selected(&self) -> bool {
        self.is_data_row() && self.context.selection_model.is_row_selected(self.data_cell.y)
    }

    pub fn is_column_selected(&self) -> bool {
        self.is_data_column() && self.context.selection_model.is_column_selected(self.grid_cell.x)
    }

    pub fn is_cell_selected(&self) -> bool {
        self.is_data_cell()
            && self
                .context
                .selection_model
                .is_cell_selected(self.grid_cell.x, self.data_cell.y)
    }

    pub fn is_row_hovered(&self) -> bool {
        self.is_data_row()
            && self
                .context
                .grid
                .hover_cell()
                .is_some_and(|h| h.y == self.grid_cell.y)
    }

    pub fn is_column_hovered(&self) -> bool {
        self.is_data_column()
            && self
                .context
                .grid
                .hover_cell()
                .is_some_and(|h| h.x == self.grid_cell.x)
    }

    pub fn is_cell_hovered(&self) -> bool {
        self.is_row_hovered() && self.is_column_hovered()
    }

    pub fn is_row_fixed(&self) -> bool {
        self.is_data_row() && self.data_cell.y < self.context.grid.fixed_row_count()
    }

    pub fn is_column_fixed(&self) -> bool {
        self.is_data_column() && self.grid_cell.x < self.context.grid.fixed_column_count()
    }

    pub fn is_cell_fixed(&self) -> bool {
        self.is_row_fixed() && self.is_column_fixed()
    }

    /// Column 0 of a tree grid whose data column holds drill-down nodes.
    pub fn is_hierarchy_column(&self) -> bool {
        self.grid_cell.x == 0
            && self.context.grid.properties().show_tree_column
            && self.context.data_model.is_drill_down(self.data_cell.x)
    }

    pub fn is_info_row(&self) -> bool {
        self.has_subgrid_role(SubgridRole::Info)
    }

    pub fn is_header_row(&self) -> bool {
        self.has_subgrid_role(SubgridRole::Header)
    }

    pub fn is_header_handle(&self) -> bool {
        self.is_header_row() && self.is_handle_column()
    }

    pub fn is_header_cell(&self) -> bool {
        self.is_header_row() && self.is_data_column()
    }

    pub fn is_filter_row(&self) -> bool {
        self.has_subgrid_role(SubgridRole::Filter)
    }

    pub fn is_filter_handle(&self) -> bool {
        self.is_filter_row() && self.is_handle_column()
    }

    pub fn is_filter_cell(&self) -> bool {
        self.is_filter_row() && self.is_data_column()
    }

    pub fn is_summary_row(&self) -> bool {
        self.has_subgrid_role(SubgridRole::Summary)
    }

    pub fn is_summary_handle(&self) -> bool {
        self.is_summary_row() && self.is_handle_column()
    }

    pub fn is_summary_cell(&self) -> bool {
        self.is_summary_row() && self.is_data_column()
    }

    /// Bound to the very subgrid the behavior designates as top totals.
    pub fn is_top_totals_row(&self) -> bool {
        match (&self.visible_row, self.context.behavior.top_totals()) {
            (Some(vr), Some(totals)) => vr.same_subgrid(&totals),
            _ => false,
        }
    }

    pub fn is_top_totals_handle(&self) -> bool {
        self.is_top_totals_row() && self.is_handle_column()
    }

    pub fn is_top_totals_cell(&self) -> bool {
        self.is_top_totals_row() && self.is_data_column()
    }

    /// Bound to the very subgrid the behavior designates as bottom totals.
    pub fn is_bottom_totals_row(&self) -> bool {
        match (&self.visible_row, self.context.behavior.bottom_totals()) {
            (Some(vr), Some(totals)) => vr.same_subgrid(&totals),
            _ => false,
        }
    }

    pub fn is_bottom_totals_handle(&self) -> bool {
        self.is_bottom_totals_row() && self.is_handle_column()
    }

    pub fn is_bottom_totals_cell(&self) -> bool {
        self.is_bottom_totals_row() && self.is_data_column()
    }

    #[deprecated(since = "0.3.0", note = "use `is_data_row`")]
    pub fn is_grid_row(&self) -> bool {
        deprecated(
            "isGridRow",
            ".is_grid_row() is deprecated as of v0.3.0 in favor of .is_data_row(). (Will be removed in a future release.)",
        );
        self.is_data_row()
    }

    #[deprecated(since = "0.3.0", note = "use `is_data_column`")]
    pub fn is_grid_column(&self) -> bool {
        deprecated(
            "isGridColumn",
            ".is_grid_column() is deprecated as of v0.3.0 in favor of .is_data_column(). (Will be removed in a future release.)",
        );
        self.is_data_column()
    }

    #[deprecated(since = "0.3.0", note = "use `is_data_cell`")]
    pub fn is_grid_cell(&self) -> bool {
        deprecated(
            "isGridCell",
            ".is_grid_cell() is deprecated as of v0.3.0 in favor of .is_data_cell(). (Will be removed in a future release.)",
        );
        self.is_data_cell()
    }
}
