//! Test fixtures: a configurable stub grid and instrumented collaborators.
//!
//! `GridBuilder` assembles a grid from the library's own layout, selection
//! and behavior types, with columns wrapped in `CountingColumn` so tests can
//! observe how often the cell core reaches for column storage.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde_json::{json, Value};

use gridcell::cell_event::CellEventFactory;
use gridcell::config::GridProperties;
use gridcell::layout::{LayoutColumn, Viewport, VisibleLayout};
use gridcell::model::{
    BasicBehavior, BasicColumn, Behavior, Column, Grid, MemorySubgrid, Renderer, SelectionModel,
    StaticDataModel, SubgridRef, SubgridRole, BOTTOM_TOTALS, TOP_TOTALS,
};
use gridcell::types::{ColumnProperties, Point, PointerEvent, Properties, SelectionSet};

/// Build a property bag from a JSON object literal.
pub fn props(value: Value) -> Properties {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

/// Column that counts lookups into its storage.
pub struct CountingColumn {
    inner: BasicColumn,
    pub properties_reads: Cell<u32>,
    pub own_reads: Cell<u32>,
}

impl CountingColumn {
    pub fn new(index: i32, properties: ColumnProperties) -> Self {
        Self {
            inner: BasicColumn::new(index, format!("col{index}"), properties),
            properties_reads: Cell::new(0),
            own_reads: Cell::new(0),
        }
    }
}

impl Column for CountingColumn {
    fn index(&self) -> i32 {
        self.inner.index()
    }

    fn properties(&self) -> &ColumnProperties {
        self.properties_reads.set(self.properties_reads.get() + 1);
        self.inner.properties()
    }

    fn cell_own_properties(&self, row_index: i32, subgrid: &SubgridRef) -> Option<Rc<Properties>> {
        self.own_reads.set(self.own_reads.get() + 1);
        self.inner.cell_own_properties(row_index, subgrid)
    }

    fn set_cell_property(
        &self,
        row_index: i32,
        key: &str,
        value: Value,
        subgrid: &SubgridRef,
    ) -> Rc<Properties> {
        self.inner.set_cell_property(row_index, key, value, subgrid)
    }
}

/// Grid whose scroll offsets are set directly (no clamping).
pub struct StubGrid {
    pub props: Cell<GridProperties>,
    pub h_scroll: Cell<i32>,
    pub v_scroll: Cell<i32>,
    pub hover: Cell<Option<Point>>,
    pub layout: Rc<VisibleLayout>,
    pub selection: Rc<SelectionSet>,
    pub behavior: Rc<BasicBehavior>,
    pub activations: RefCell<Vec<Point>>,
    pub format_calls: Cell<u32>,
}

impl StubGrid {
    /// Scroll and recompute the visible descriptors.
    pub fn scroll(&self, h: i32, v: i32) {
        self.h_scroll.set(h);
        self.v_scroll.set(v);
        self.relayout();
    }

    pub fn relayout(&self) {
        let viewport = Viewport {
            h_scroll: self.h_scroll.get(),
            v_scroll: self.v_scroll.get(),
            ..Viewport::new()
        };
        self.layout.compute(&self.props.get(), &viewport);
    }

    pub fn set_properties(&self, f: impl FnOnce(&mut GridProperties)) {
        let mut p = self.props.get();
        f(&mut p);
        self.props.set(p);
        self.relayout();
    }
}

impl Grid for StubGrid {
    fn properties(&self) -> GridProperties {
        self.props.get()
    }

    fn h_scroll_value(&self) -> i32 {
        self.h_scroll.get()
    }

    fn v_scroll_value(&self) -> i32 {
        self.v_scroll.get()
    }

    fn hover_cell(&self) -> Option<Point> {
        self.hover.get()
    }

    fn header_row_count(&self) -> i32 {
        self.layout.header_row_count()
    }

    fn renderer(&self) -> Rc<dyn Renderer> {
        Rc::clone(&self.layout) as Rc<dyn Renderer>
    }

    fn selection_model(&self) -> Rc<dyn SelectionModel> {
        Rc::clone(&self.selection) as Rc<dyn SelectionModel>
    }

    fn behavior(&self) -> Rc<dyn Behavior> {
        Rc::clone(&self.behavior) as Rc<dyn Behavior>
    }

    fn format_value(&self, format: Option<&str>, value: &Value) -> String {
        self.format_calls.set(self.format_calls.get() + 1);
        match format {
            Some(f) => format!("{f}({value})"),
            None => value.to_string(),
        }
    }

    fn activate_editor(&self, event: &PointerEvent) {
        self.activations.borrow_mut().push(event.grid_cell);
    }
}

/// A built grid with handles to everything tests poke at.
pub struct Fixture {
    pub grid: Rc<StubGrid>,
    pub factory: CellEventFactory,
    pub columns: Vec<Rc<CountingColumn>>,
    pub subgrids: Vec<SubgridRef>,
}

impl Fixture {
    pub fn subgrid(&self, name: &str) -> SubgridRef {
        self.subgrids
            .iter()
            .find(|s| s.name() == name)
            .cloned()
            .unwrap_or_else(|| panic!("no subgrid named {name}"))
    }
}

/// Builder for [`Fixture`].
pub struct GridBuilder {
    props: GridProperties,
    column_count: i32,
    subgrids: Vec<(String, SubgridRole, Vec<Vec<Value>>)>,
    drill_down: Vec<i32>,
}

impl Default for GridBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GridBuilder {
    pub fn new() -> Self {
        Self {
            props: GridProperties::default(),
            column_count: 4,
            subgrids: Vec::new(),
            drill_down: Vec::new(),
        }
    }

    pub fn fixed(mut self, rows: i32, cols: i32) -> Self {
        self.props.fixed_row_count = rows;
        self.props.fixed_column_count = cols;
        self
    }

    pub fn columns(mut self, n: i32) -> Self {
        self.column_count = n;
        self
    }

    pub fn tree(mut self, drill_down: Vec<i32>) -> Self {
        self.props.show_tree_column = true;
        self.drill_down = drill_down;
        self
    }

    pub fn subgrid(mut self, name: &str, role: SubgridRole, rows: Vec<Vec<Value>>) -> Self {
        self.subgrids.push((name.to_string(), role, rows));
        self
    }

    pub fn build(self) -> Fixture {
        let columns: Vec<Rc<CountingColumn>> = (0..self.column_count)
            .map(|i| Rc::new(CountingColumn::new(i, role_tagged_properties())))
            .collect();
        let layout_columns = columns
            .iter()
            .map(|c| LayoutColumn {
                column: Rc::clone(c) as Rc<dyn Column>,
                width: 100.0,
            })
            .collect();

        let subgrids: Vec<SubgridRef> = self
            .subgrids
            .into_iter()
            .map(|(name, role, rows)| Rc::new(MemorySubgrid::new(name, role, rows)) as SubgridRef)
            .collect();

        let data_model = Rc::new(StaticDataModel::new(self.drill_down));
        let behavior = Rc::new(BasicBehavior::new(subgrids.clone(), data_model));
        let layout = Rc::new(VisibleLayout::new(layout_columns, subgrids.clone()));

        let grid = Rc::new(StubGrid {
            props: Cell::new(self.props),
            h_scroll: Cell::new(0),
            v_scroll: Cell::new(0),
            hover: Cell::new(None),
            layout,
            selection: Rc::new(SelectionSet::new()),
            behavior,
            activations: RefCell::new(Vec::new()),
            format_calls: Cell::new(0),
        });
        grid.relayout();
        let factory = CellEventFactory::new(Rc::clone(&grid) as Rc<dyn Grid>);

        Fixture {
            grid,
            factory,
            columns,
            subgrids,
        }
    }
}

/// Column properties whose `role` key names the bag it came from.
pub fn role_tagged_properties() -> ColumnProperties {
    ColumnProperties::layered(
        props(json!({"role": "data", "format": "plain"})),
        &props(json!({"role": "rowHeader"})),
        &props(json!({"role": "filter"})),
        &props(json!({"role": "info"})),
        &props(json!({"role": "columnHeader", "format": "header"})),
    )
}

/// `rows` data rows of `cols` cells, valued `"r{row}c{col}"`.
pub fn data_rows(rows: usize, cols: usize) -> Vec<Vec<Value>> {
    (0..rows)
        .map(|r| (0..cols).map(|c| json!(format!("r{r}c{c}"))).collect())
        .collect()
}

/// Visible row positions in [`standard_grid`].
pub mod pos {
    pub const HEADER: i32 = 0;
    pub const FILTER: i32 = 1;
    pub const INFO: i32 = 2;
    pub const TOP_TOTALS: i32 = 3;
    /// First data row (data row 0, the fixed row)
    pub const DATA: i32 = 4;
    pub const SUMMARY: i32 = 14;
    pub const BOTTOM_TOTALS: i32 = 15;
}

/// One fixed row and column, four columns, ten data rows and one row in each
/// other band:
///
/// | position | subgrid |
/// |---|---|
/// | 0 | header |
/// | 1 | filter |
/// | 2 | info |
/// | 3 | topTotals |
/// | 4..=13 | data rows 0..=9 |
/// | 14 | summary |
/// | 15 | bottomTotals |
///
/// Visible columns: handle at -1, then 0..=3.
pub fn standard_grid() -> Fixture {
    GridBuilder::new()
        .fixed(1, 1)
        .columns(4)
        .subgrid("header", SubgridRole::Header, vec![vec![json!("A"), json!("B"), json!("C"), json!("D")]])
        .subgrid("filter", SubgridRole::Filter, vec![vec![json!("")]])
        .subgrid("info", SubgridRole::Info, vec![vec![json!("i")]])
        .subgrid(TOP_TOTALS, SubgridRole::Summary, vec![vec![json!(1)]])
        .subgrid("data", SubgridRole::Data, data_rows(10, 4))
        .subgrid("summary", SubgridRole::Summary, vec![vec![json!(2)]])
        .subgrid(BOTTOM_TOTALS, SubgridRole::Summary, vec![vec![json!(3)]])
        .build()
}
