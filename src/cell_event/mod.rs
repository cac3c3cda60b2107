//! Cell context: one viewport cell bound to its backing data.
//!
//! A `CellEvent` is built once per usage slot (a renderer pool entry, a
//! pointer event) and re-bound with [`CellEvent::reset`] for every cell it
//! visits. The renderer calls `reset` for each visible cell on every paint,
//! so a reset must not allocate: the owned points are overwritten in place
//! and descriptor clones only bump reference counts.
//!
//! Derived values (`bounds`, column properties, cell own properties) are
//! computed on first read after a reset and dropped by the next one. Holding
//! anything borrowed from a context across a `reset` is a bug; the borrow
//! checker rejects it for references, and [`Checkout`] stamps catch it for
//! pool slots.

mod classify;
mod factory;
mod pool;

pub use classify::{column_properties_for, CellRole};
pub use factory::{CellEventFactory, GridContext};
pub use pool::{CellEventPool, Checkout};

use std::cell::OnceCell;
use std::rc::Rc;

use serde_json::Value;

use crate::model::{ColumnRef, SubgridRef};
use crate::types::{format_of, Point, Properties, Rect, VisibleColumn, VisibleRow, UNBOUND};

/// Scratch fields owned by the cell renderer. Cleared on every reset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderScratch {
    /// Last painted value, for partial repaints
    pub snapshot: Option<Value>,
    /// Minimum width the painted content asked for
    pub min_width: Option<f32>,
    pub disabled: Option<bool>,
}

/// Which derived caches are currently populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheState {
    pub bounds: bool,
    pub column_properties: bool,
    pub cell_own_properties: bool,
}

/// A viewport cell bound to its column, row, subgrid and grid.
pub struct CellEvent {
    context: Rc<GridContext>,
    visible_column: Option<VisibleColumn>,
    visible_row: Option<VisibleRow>,
    grid_cell: Point,
    data_cell: Point,
    column: Option<ColumnRef>,

    // Derived caches, filled on first read after a reset.
    column_properties: OnceCell<Rc<Properties>>,
    cell_own_properties: OnceCell<Option<Rc<Properties>>>,
    bounds: OnceCell<Rect>,

    pub scratch: RenderScratch,
    generation: u64,
}

impl CellEvent {
    /// Create an unbound context. Call [`reset`](Self::reset) before reading it.
    pub fn new(context: Rc<GridContext>) -> Self {
        Self {
            context,
            visible_column: None,
            visible_row: None,
            grid_cell: Point::unbound(),
            data_cell: Point::unbound(),
            column: None,
            column_properties: OnceCell::new(),
            cell_own_properties: OnceCell::new(),
            bounds: OnceCell::new(),
            scratch: RenderScratch::default(),
            generation: 0,
        }
    }

    /// Re-bind this context to another cell and drop every derived cache.
    ///
    /// `visible_column` is `None` for cells outside any visible column;
    /// handle columns carry a descriptor with a negative index and no column.
    pub fn reset(&mut self, visible_column: Option<VisibleColumn>, visible_row: Option<VisibleRow>) {
        self.column_properties.take();
        self.cell_own_properties.take();
        self.bounds.take();
        self.scratch = RenderScratch::default();
        self.generation = self.generation.wrapping_add(1);

        self.column = visible_column
            .as_ref()
            .and_then(|vc| vc.column.as_ref().map(Rc::clone));

        self.grid_cell.x = visible_column.as_ref().map_or(UNBOUND, |vc| vc.column_index);
        self.grid_cell.y = visible_row.as_ref().map_or(UNBOUND, |vr| vr.index);

        self.data_cell.x = self.column.as_ref().map_or(UNBOUND, |c| c.index());
        self.data_cell.y = visible_row.as_ref().map_or(UNBOUND, |vr| vr.row_index);

        self.visible_column = visible_column;
        self.visible_row = visible_row;
    }

    pub fn context(&self) -> &Rc<GridContext> {
        &self.context
    }

    /// Viewport coordinate of the bound cell.
    pub fn grid_cell(&self) -> &Point {
        &self.grid_cell
    }

    /// Data coordinate of the bound cell. Only meaningful on data-bearing subgrids.
    pub fn data_cell(&self) -> &Point {
        &self.data_cell
    }

    pub fn visible_column(&self) -> Option<&VisibleColumn> {
        self.visible_column.as_ref()
    }

    pub fn visible_row(&self) -> Option<&VisibleRow> {
        self.visible_row.as_ref()
    }

    pub fn column(&self) -> Option<&ColumnRef> {
        self.column.as_ref()
    }

    pub fn subgrid(&self) -> Option<&SubgridRef> {
        self.visible_row.as_ref().map(|vr| &vr.subgrid)
    }

    /// Number of resets this context has seen.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cache_state(&self) -> CacheState {
        CacheState {
            bounds: self.bounds.get().is_some(),
            column_properties: self.column_properties.get().is_some(),
            cell_own_properties: self.cell_own_properties.get().is_some(),
        }
    }

    /// Raw cell value from the owning subgrid. `Null` when no row is bound.
    pub fn value(&self) -> Value {
        match self.subgrid() {
            Some(sg) => sg.get_value(self.data_cell.x, self.data_cell.y),
            None => Value::Null,
        }
    }

    pub fn set_value(&self, value: Value) {
        if let Some(sg) = self.subgrid() {
            sg.set_value(self.data_cell.x, self.data_cell.y, value);
        }
    }

    /// The whole row object at `data_cell.y`.
    pub fn row(&self) -> Option<Value> {
        self.subgrid().and_then(|sg| sg.get_row(self.data_cell.y))
    }

    /// Value rendered through the grid's formatter.
    ///
    /// Not cached: formatters may depend on state that changes between reads.
    pub fn formatted_value(&self) -> String {
        let format = format_of(self.properties());
        self.context.grid.format_value(format, &self.value())
    }

    /// Pixel rectangle of the cell. Missing axes collapse to zero.
    pub fn bounds(&self) -> &Rect {
        self.bounds.get_or_init(|| {
            let (x, width) = self
                .visible_column
                .as_ref()
                .map_or((0.0, 0.0), |vc| (vc.left, vc.width));
            let (y, height) = self
                .visible_row
                .as_ref()
                .map_or((0.0, 0.0), |vr| (vr.top, vr.height));
            Rect {
                x,
                y,
                width,
                height,
            }
        })
    }

    /// Column properties adjusted for this cell's role.
    pub fn column_properties(&self) -> &Rc<Properties> {
        self.column_properties.get_or_init(|| match &self.column {
            Some(column) => Rc::clone(column_properties_for(self.role(), column.properties())),
            None => Rc::clone(&self.context.empty_properties),
        })
    }

    /// Per-cell overrides, `None` when the cell has none.
    ///
    /// Do not write through this; use [`set_cell_property`](Self::set_cell_property).
    pub fn cell_own_properties(&self) -> Option<&Rc<Properties>> {
        self.cell_own_properties
            .get_or_init(|| match (&self.column, self.subgrid()) {
                (Some(column), Some(subgrid)) => {
                    column.cell_own_properties(self.data_cell.y, subgrid)
                }
                _ => None,
            })
            .as_ref()
    }

    /// Effective properties: own overrides if any, else column properties.
    pub fn properties(&self) -> &Rc<Properties> {
        match self.cell_own_properties() {
            Some(own) => own,
            None => self.column_properties(),
        }
    }

    pub fn get_cell_property(&self, key: &str) -> Option<&Value> {
        self.properties().get(key)
    }

    /// Set one per-cell property, creating the override bag if needed.
    pub fn set_cell_property(&mut self, key: &str, value: Value) {
        let (Some(column), Some(visible_row)) = (&self.column, &self.visible_row) else {
            tracing::debug!(key, "set_cell_property on unbound cell ignored");
            return;
        };
        let own = column.set_cell_property(self.data_cell.y, key, value, &visible_row.subgrid);
        self.cell_own_properties = OnceCell::from(Some(own));
    }
}

impl std::fmt::Debug for CellEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CellEvent")
            .field("grid_cell", &self.grid_cell)
            .field("data_cell", &self.data_cell)
            .field("visible_column", &self.visible_column)
            .field("visible_row", &self.visible_row)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}
