//! gridcell - cell addressing and pointer events for canvas data grids
//!
//! The core of a canvas-rendered, spreadsheet-style grid:
//! - Cell contexts binding a viewport cell to its column, row and subgrid
//! - Lazily cached bounds and role-adjusted property resolution
//! - Row/column classification (data, header, filter, totals, handles...)
//! - A reusable context pool for the paint loop
//! - Double-click / hold-pulse editor activation with frozen-region fallback
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { GridView } from 'gridcell';
//! await init();
//! const view = new GridView(JSON.stringify(config));
//! canvas.addEventListener('dblclick', (e) => view.on_dblclick(e, e.offsetX, e.offsetY));
//! ```

pub mod cell_event;
pub mod config;
pub mod deprecated;
pub mod error;
pub mod features;
pub mod grid;
pub mod layout;
pub mod model;
pub mod types;
pub mod viewer;

use wasm_bindgen::prelude::*;

pub use cell_event::{CellEvent, CellEventFactory, CellEventPool, CellRole};
pub use viewer::GridView;

pub use types::*;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
