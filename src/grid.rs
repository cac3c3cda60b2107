//! In-memory grid state backing the cell core.
//!
//! `GridState` owns the viewport, hover tracking, formatters and the
//! collaborators built from a [`GridConfig`], and implements [`Grid`] for
//! the cell contexts and interaction features.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use serde_json::Value;

use crate::config::{GridConfig, GridProperties};
use crate::error::Result;
use crate::layout::{LayoutColumn, Viewport, VisibleLayout};
use crate::model::{
    BasicBehavior, BasicColumn, Behavior, ColumnRef, Grid, MemorySubgrid, Renderer,
    SelectionModel, StaticDataModel, SubgridRef, SubgridRole, BOTTOM_TOTALS, TOP_TOTALS,
};
use crate::types::{ColumnProperties, Point, PointerEvent, SelectionSet};

/// A named value formatter.
pub type Formatter = Box<dyn Fn(&Value) -> String>;

/// Concrete grid: configuration, scroll, hover, formatting and editor requests.
pub struct GridState {
    properties: Cell<GridProperties>,
    viewport: RefCell<Viewport>,
    hover: Cell<Option<Point>>,
    layout: Rc<VisibleLayout>,
    selection: Rc<SelectionSet>,
    behavior: Rc<BasicBehavior>,
    formatters: RefCell<HashMap<String, Formatter>>,
    editor_cell: Cell<Option<Point>>,
    activations: Cell<u32>,
}

impl GridState {
    /// Build a grid from a validated config.
    pub fn from_config(config: &GridConfig) -> Result<Self> {
        config.validate()?;
        let props = config.properties;

        let mut columns = Vec::with_capacity(config.columns.len());
        for (i, cc) in config.columns.iter().enumerate() {
            let index = i32::try_from(i).map_err(|_| "too many columns")?;
            let properties = ColumnProperties::layered(
                cc.properties.clone(),
                &cc.row_header,
                &cc.filter_properties,
                &cc.info_properties,
                &cc.column_header,
            );
            let column: ColumnRef = Rc::new(BasicColumn::new(index, cc.name.clone(), properties));
            columns.push(LayoutColumn {
                column,
                width: cc.width.unwrap_or(props.default_column_width),
            });
        }

        let header = config.header.clone().unwrap_or_else(|| {
            config
                .columns
                .iter()
                .map(|c| Value::String(c.name.clone()))
                .collect()
        });

        let mut subgrids: Vec<SubgridRef> = vec![Rc::new(MemorySubgrid::new(
            "header",
            SubgridRole::Header,
            vec![header],
        ))];
        if let Some(rows) = &config.top_totals {
            subgrids.push(Rc::new(MemorySubgrid::new(
                TOP_TOTALS,
                SubgridRole::Summary,
                rows.clone(),
            )));
        }
        subgrids.push(Rc::new(MemorySubgrid::new(
            "data",
            SubgridRole::Data,
            config.data.clone(),
        )));
        if let Some(rows) = &config.bottom_totals {
            subgrids.push(Rc::new(MemorySubgrid::new(
                BOTTOM_TOTALS,
                SubgridRole::Summary,
                rows.clone(),
            )));
        }

        let data_model = Rc::new(StaticDataModel::new(config.drill_down_columns.iter().copied()));
        let behavior = Rc::new(BasicBehavior::new(subgrids.clone(), data_model));
        let layout = Rc::new(VisibleLayout::new(columns, subgrids));

        let state = Self {
            properties: Cell::new(props),
            viewport: RefCell::new(Viewport::new()),
            hover: Cell::new(None),
            layout,
            selection: Rc::new(SelectionSet::new()),
            behavior,
            formatters: RefCell::new(HashMap::new()),
            editor_cell: Cell::new(None),
            activations: Cell::new(0),
        };
        state.relayout();
        Ok(state)
    }

    fn relayout(&self) {
        let props = self.properties.get();
        let (max_h, max_v) = self.layout.max_scroll(&props);
        let mut viewport = self.viewport.borrow_mut();
        viewport.clamp_scroll(max_h, max_v);
        self.layout.compute(&props, &viewport);
    }

    pub fn layout(&self) -> &Rc<VisibleLayout> {
        &self.layout
    }

    pub fn selection(&self) -> &Rc<SelectionSet> {
        &self.selection
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport.borrow().clone()
    }

    /// Replace the grid properties and recompute the layout.
    pub fn set_properties(&self, properties: GridProperties) {
        self.properties.set(properties);
        self.relayout();
    }

    /// Scroll to an absolute position (clamped) and recompute the layout.
    pub fn scroll_to(&self, h: i32, v: i32) {
        let props = self.properties.get();
        let (max_h, max_v) = self.layout.max_scroll(&props);
        self.viewport.borrow_mut().set_scroll(h, v, max_h, max_v);
        self.relayout();
    }

    /// Scroll by a cell delta (clamped) and recompute the layout.
    pub fn scroll_by(&self, delta_h: i32, delta_v: i32) {
        let props = self.properties.get();
        let (max_h, max_v) = self.layout.max_scroll(&props);
        self.viewport
            .borrow_mut()
            .scroll_by(delta_h, delta_v, max_h, max_v);
        self.relayout();
    }

    pub fn resize(&self, width: f32, height: f32) {
        self.viewport.borrow_mut().resize(width, height);
        self.relayout();
    }

    pub fn set_hover(&self, cell: Option<Point>) {
        self.hover.set(cell);
    }

    /// Register a formatter under a format name.
    pub fn register_formatter(&self, name: impl Into<String>, formatter: Formatter) {
        self.formatters.borrow_mut().insert(name.into(), formatter);
    }

    /// Where the last editor activation landed.
    pub fn editor_cell(&self) -> Option<Point> {
        self.editor_cell.get()
    }

    /// Editor activations since construction.
    pub fn activation_count(&self) -> u32 {
        self.activations.get()
    }

    pub fn cancel_edit(&self) {
        self.editor_cell.set(None);
    }
}

/// Plain display for values without a registered formatter.
fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl Grid for GridState {
    fn properties(&self) -> GridProperties {
        self.properties.get()
    }

    fn h_scroll_value(&self) -> i32 {
        self.viewport.borrow().h_scroll
    }

    fn v_scroll_value(&self) -> i32 {
        self.viewport.borrow().v_scroll
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
        let formatters = self.formatters.borrow();
        match format.and_then(|name| formatters.get(name)) {
            Some(formatter) => formatter(value),
            None => display_value(value),
        }
    }

    fn activate_editor(&self, event: &PointerEvent) {
        tracing::debug!(cell = ?event.grid_cell, "editor activated");
        self.editor_cell.set(Some(event.grid_cell));
        self.activations.set(self.activations.get().saturating_add(1));
    }
}
