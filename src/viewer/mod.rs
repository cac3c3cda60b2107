//! `GridView` - the WASM-exported entry point.
//!
//! Wires a [`GridState`] to a cell-context factory and the interaction
//! feature chain, and exposes the pointer-event entry points the JS dispatch
//! layer calls. Viewport coordinates are `(column index, visible row
//! position)`, as returned by [`GridView::cell_at_point`].

use std::rc::Rc;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use web_sys::MouseEvent;

use crate::cell_event::{CellEvent, CellEventFactory};
use crate::config::GridConfig;
use crate::error::Result;
use crate::features::{CellEditing, FeatureChain};
use crate::grid::GridState;
use crate::model::Grid;
#[cfg(target_arch = "wasm32")]
use crate::types::PrimitiveEvent;
use crate::types::{Point, PointerEvent};

/// The grid view exported to JavaScript.
#[wasm_bindgen]
pub struct GridView {
    grid: Rc<GridState>,
    factory: CellEventFactory,
    features: FeatureChain,
}

impl GridView {
    /// Build a view from a parsed config.
    pub fn from_config(config: &GridConfig) -> Result<Self> {
        let grid = Rc::new(GridState::from_config(config)?);
        let factory = CellEventFactory::new(Rc::clone(&grid) as Rc<dyn Grid>);
        Ok(Self {
            grid,
            factory,
            features: FeatureChain::new().with(CellEditing),
        })
    }

    /// Build a view from a JSON config document.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_config(&GridConfig::from_json(json)?)
    }

    pub fn grid(&self) -> &Rc<GridState> {
        &self.grid
    }

    pub fn factory(&self) -> &CellEventFactory {
        &self.factory
    }

    /// Cell context for a viewport cell, addressed positionally.
    pub fn cell_event_at(&self, x: i32, y: i32) -> CellEvent {
        self.factory.create_at(x, y, false)
    }

    fn double_click(&self, mut event: PointerEvent) -> bool {
        let before = self.grid.activation_count();
        self.features.handle_double_click(&*self.grid, &mut event);
        self.grid.activation_count() > before
    }

    fn hold_pulse(&self, mut event: PointerEvent) -> bool {
        let before = self.grid.activation_count();
        self.features.handle_hold_pulse(&*self.grid, &mut event);
        self.grid.activation_count() > before
    }
}

// ============================================================================
// Shared exports (WASM and native)
// ============================================================================

#[wasm_bindgen]
impl GridView {
    /// Double-click on viewport cell `(x, y)`. Returns whether an editor opened.
    #[wasm_bindgen]
    pub fn handle_double_click(&self, x: i32, y: i32) -> bool {
        self.double_click(PointerEvent::new(Point::new(x, y), 2))
    }

    /// Hold pulse on viewport cell `(x, y)` after `count` presses.
    /// Returns whether an editor opened.
    #[wasm_bindgen]
    pub fn handle_hold_pulse(&self, x: i32, y: i32, count: u32) -> bool {
        self.hold_pulse(PointerEvent::new(Point::new(x, y), count))
    }

    /// Track the hovered viewport cell.
    #[wasm_bindgen]
    pub fn set_hover(&self, x: i32, y: i32) {
        self.grid.set_hover(Some(Point::new(x, y)));
    }

    #[wasm_bindgen]
    pub fn clear_hover(&self) {
        self.grid.set_hover(None);
    }

    /// Scroll to an absolute cell offset (clamped).
    #[wasm_bindgen]
    pub fn scroll_to(&self, h: i32, v: i32) {
        self.grid.scroll_to(h, v);
    }

    /// Scroll by a cell delta, e.g. one wheel notch (clamped).
    #[wasm_bindgen]
    pub fn scroll_by(&self, delta_h: i32, delta_v: i32) {
        self.grid.scroll_by(delta_h, delta_v);
    }

    /// Resize the viewport (logical pixels).
    #[wasm_bindgen]
    pub fn resize(&self, width: f32, height: f32) {
        self.grid.resize(width, height);
    }

    /// Coordinate of the open editor as `[x, y]`, if any.
    #[wasm_bindgen]
    pub fn editing_cell(&self) -> Option<Vec<i32>> {
        self.grid.editor_cell().map(|p| vec![p.x, p.y])
    }

    #[wasm_bindgen]
    pub fn cancel_edit(&self) {
        self.grid.cancel_edit();
    }

    /// Hit-test: which viewport cell is at the given pixel position, as `[x, y]`?
    #[wasm_bindgen]
    pub fn cell_at_point(&self, px: f32, py: f32) -> Option<Vec<i32>> {
        self.grid.layout().cell_at(px, py).map(|p| vec![p.x, p.y])
    }

    /// Raw value of a viewport cell as JSON text.
    #[wasm_bindgen]
    pub fn value_at(&self, x: i32, y: i32) -> String {
        self.cell_event_at(x, y).value().to_string()
    }

    /// Formatted value of a viewport cell.
    #[wasm_bindgen]
    pub fn formatted_value_at(&self, x: i32, y: i32) -> String {
        self.cell_event_at(x, y).formatted_value()
    }
}

// ============================================================================
// WASM32-only exports
// ============================================================================

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl GridView {
    /// Create a view from a JSON config.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> std::result::Result<GridView, JsValue> {
        console_error_panic_hook::set_once();
        Ok(Self::from_json(config_json)?)
    }

    /// `dblclick` listener body. `px`/`py` are canvas-relative logical pixels.
    #[wasm_bindgen]
    pub fn on_dblclick(&self, event: &MouseEvent, px: f32, py: f32) -> bool {
        let Some(cell) = self.grid.layout().cell_at(px, py) else {
            return false;
        };
        self.double_click(PointerEvent {
            grid_cell: cell,
            primitive: PrimitiveEvent::from(event),
        })
    }

    /// Hold-pulse listener body; the press count comes from `event.detail`.
    #[wasm_bindgen]
    pub fn on_hold_pulse(&self, event: &MouseEvent, px: f32, py: f32) -> bool {
        let Some(cell) = self.grid.layout().cell_at(px, py) else {
            return false;
        };
        self.hold_pulse(PointerEvent {
            grid_cell: cell,
            primitive: PrimitiveEvent::from(event),
        })
    }

    /// The open editor's coordinate as `{x, y}`, or `null`.
    #[wasm_bindgen]
    pub fn editing_point(&self) -> std::result::Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.grid.editor_cell())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }
}
