use super::{Feature, Propagation};
use crate::model::Grid;
use crate::types::{Point, PointerEvent};

/// Minimum press repetition count before a hold pulse opens the editor.
const HOLD_PULSE_MIN_COUNT: u32 = 2;

/// Opens the cell editor on double-click or on a held repeated press.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellEditing;

/// `scroll + cell - fixed`, or `None` when it leaves `i32`.
fn remap_axis(scroll: i32, cell: i32, fixed: i32) -> Option<i32> {
    scroll.checked_add(cell)?.checked_sub(fixed)
}

impl Feature for CellEditing {
    /// Double-clicks in the scrollable region open the editor at the
    /// scroll-adjusted coordinate. Clicks on header bands, frozen rows or
    /// fixed columns fall through to the next feature.
    fn handle_double_click(&self, grid: &dyn Grid, event: &mut PointerEvent) -> Propagation {
        let fixed_col_count = grid.fixed_column_count();
        let fixed_row_count = grid.frozen_row_count();
        let cell = event.grid_cell;

        if cell.x < fixed_col_count || cell.y < fixed_row_count {
            tracing::debug!(cell = ?cell, "double-click on fixed region passed on");
            return Propagation::Continue;
        }

        let remapped = remap_axis(grid.h_scroll_value(), cell.x, fixed_col_count)
            .zip(remap_axis(grid.v_scroll_value(), cell.y, fixed_row_count));
        let Some((x, y)) = remapped else {
            tracing::debug!(cell = ?cell, "double-click coordinate out of range, ignored");
            return Propagation::Stop;
        };

        event.grid_cell = Point::new(x, y);
        tracing::debug!(from = ?cell, to = ?event.grid_cell, "double-click activates editor");
        grid.activate_editor(event);
        Propagation::Stop
    }

    /// A held press only escalates to editing when it follows at least one
    /// earlier click. It never falls through, activated or not.
    fn handle_hold_pulse(&self, grid: &dyn Grid, event: &mut PointerEvent) -> Propagation {
        if event.primitive.count < HOLD_PULSE_MIN_COUNT {
            return Propagation::Stop;
        }
        tracing::debug!(cell = ?event.grid_cell, count = event.primitive.count, "hold pulse activates editor");
        grid.activate_editor(event);
        Propagation::Stop
    }
}
