use std::rc::Rc;

use super::CellEvent;
use crate::model::{Behavior, DataModel, Grid, Renderer, SelectionModel};
use crate::types::Properties;

/// Grid collaborators resolved once per grid and shared by all its cell contexts.
pub struct GridContext {
    pub grid: Rc<dyn Grid>,
    pub renderer: Rc<dyn Renderer>,
    pub selection_model: Rc<dyn SelectionModel>,
    pub behavior: Rc<dyn Behavior>,
    pub data_model: Rc<dyn DataModel>,
    /// Returned as column properties when no column is bound
    pub(crate) empty_properties: Rc<Properties>,
}

impl GridContext {
    /// Resolve the collaborators of `grid`. They never change for the grid's lifetime.
    pub fn new(grid: Rc<dyn Grid>) -> Self {
        let behavior = grid.behavior();
        Self {
            renderer: grid.renderer(),
            selection_model: grid.selection_model(),
            data_model: behavior.data_model(),
            behavior,
            grid,
            empty_properties: Rc::new(Properties::new()),
        }
    }
}

/// Creates cell contexts bound to one grid.
#[derive(Clone)]
pub struct CellEventFactory {
    context: Rc<GridContext>,
}

impl CellEventFactory {
    pub fn new(grid: Rc<dyn Grid>) -> Self {
        Self {
            context: Rc::new(GridContext::new(grid)),
        }
    }

    pub fn context(&self) -> &Rc<GridContext> {
        &self.context
    }

    /// An unbound context; `reset` it before use.
    pub fn create(&self) -> CellEvent {
        CellEvent::new(Rc::clone(&self.context))
    }

    /// A context bound to the visible cell at viewport column `x`.
    ///
    /// With `is_data_row`, `y` is a logical row index searched among visible
    /// data rows; otherwise `y` is a position in the visible row list. When
    /// nothing visible matches, the corresponding descriptor stays unbound.
    pub fn create_at(&self, x: i32, y: i32, is_data_row: bool) -> CellEvent {
        let mut event = self.create();
        let columns = self.context.renderer.visible_columns();
        let rows = self.context.renderer.visible_rows();

        let visible_column = columns.iter().find(|vc| vc.column_index == x).cloned();
        let visible_row = if is_data_row {
            rows.iter()
                .find(|vr| vr.row_index == y && vr.subgrid.is_data())
                .cloned()
        } else {
            usize::try_from(y).ok().and_then(|i| rows.get(i)).cloned()
        };

        if visible_column.is_none() || visible_row.is_none() {
            tracing::trace!(x, y, is_data_row, "cell lookup missed the visible range");
        }
        event.reset(visible_column, visible_row);
        event
    }
}
