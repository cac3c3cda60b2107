//! Common test utilities and assertion helpers.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use gridcell::cell_event::CellEvent;
use gridcell::types::Point;

// Re-export fixtures for convenience
pub use super::fixtures::*;

/// Cell at viewport column `x`, visible row position `y`.
pub fn cell_at(fixture: &Fixture, x: i32, y: i32) -> CellEvent {
    fixture.factory.create_at(x, y, false)
}

/// Cell at viewport column `x`, logical data row `row`.
pub fn data_cell_at(fixture: &Fixture, x: i32, row: i32) -> CellEvent {
    fixture.factory.create_at(x, row, true)
}

/// Assert both coordinates of a cell.
pub fn assert_coords(event: &CellEvent, grid: (i32, i32), data: (i32, i32)) {
    assert_eq!(
        *event.grid_cell(),
        Point::new(grid.0, grid.1),
        "grid cell of {event:?}"
    );
    assert_eq!(
        *event.data_cell(),
        Point::new(data.0, data.1),
        "data cell of {event:?}"
    );
}

/// Read the `role` tag from the cell's effective properties.
pub fn role_tag(event: &CellEvent) -> Option<String> {
    event
        .properties()
        .get("role")
        .and_then(|v| v.as_str())
        .map(str::to_string)
}
