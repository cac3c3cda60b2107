//! Cell classification tests
//!
//! Roles, row/column kinds, selection, hover, fixed regions and the tree
//! column, checked across every band of the standard grid.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;
mod fixtures;

use serde_json::json;
use test_case::test_case;

use common::*;
use gridcell::cell_event::CellRole;
use gridcell::model::SubgridRole;
use gridcell::types::{Point, Selection};

// ============================================================================
// Roles
// ============================================================================

#[test_case(1, pos::HEADER, CellRole::Header, Some("columnHeader") ; "header row")]
#[test_case(1, pos::FILTER, CellRole::Filter, Some("filter") ; "filter row")]
#[test_case(1, pos::INFO, CellRole::Info, Some("info") ; "info row")]
#[test_case(1, pos::TOP_TOTALS, CellRole::TopTotals, Some("columnHeader") ; "top totals row")]
#[test_case(1, pos::DATA, CellRole::Data, Some("data") ; "fixed data row")]
#[test_case(3, pos::DATA + 9, CellRole::Data, Some("data") ; "last data row")]
#[test_case(1, pos::SUMMARY, CellRole::Summary, Some("columnHeader") ; "summary row")]
#[test_case(1, pos::BOTTOM_TOTALS, CellRole::BottomTotals, Some("columnHeader") ; "bottom totals row")]
#[test_case(-1, pos::DATA, CellRole::RowHeader, None ; "handle column on data")]
#[test_case(-1, pos::HEADER, CellRole::RowHeader, None ; "handle column on header")]
fn test_role_and_property_bag(x: i32, y: i32, role: CellRole, tag: Option<&str>) {
    let f = standard_grid();
    let event = cell_at(&f, x, y);
    assert_eq!(event.role(), role);
    assert_eq!(role_tag(&event).as_deref(), tag);
}

// ============================================================================
// Row kinds
// ============================================================================

/// Flags in order: data, header, filter, info, summary, top totals, bottom totals.
#[test_case(pos::HEADER, [false, true, false, false, false, false, false] ; "header")]
#[test_case(pos::FILTER, [false, false, true, false, false, false, false] ; "filter")]
#[test_case(pos::INFO, [false, false, false, true, false, false, false] ; "info")]
#[test_case(pos::TOP_TOTALS, [false, false, false, false, true, true, false] ; "top totals")]
#[test_case(pos::DATA + 5, [true, false, false, false, false, false, false] ; "data")]
#[test_case(pos::SUMMARY, [false, false, false, false, true, false, false] ; "summary")]
#[test_case(pos::BOTTOM_TOTALS, [false, false, false, false, true, false, true] ; "bottom totals")]
fn test_row_kind_predicates(y: i32, expected: [bool; 7]) {
    let f = standard_grid();
    let event = cell_at(&f, 2, y);
    let actual = [
        event.is_data_row(),
        event.is_header_row(),
        event.is_filter_row(),
        event.is_info_row(),
        event.is_summary_row(),
        event.is_top_totals_row(),
        event.is_bottom_totals_row(),
    ];
    assert_eq!(actual, expected);
}

#[test]
fn test_handle_and_cell_composites() {
    let f = standard_grid();

    let handle = cell_at(&f, -1, pos::HEADER);
    assert!(handle.is_header_handle());
    assert!(!handle.is_header_cell());

    let cell = cell_at(&f, 0, pos::HEADER);
    assert!(cell.is_header_cell());
    assert!(!cell.is_header_handle());

    assert!(cell_at(&f, -1, pos::FILTER).is_filter_handle());
    assert!(cell_at(&f, 3, pos::FILTER).is_filter_cell());
    assert!(cell_at(&f, -1, pos::SUMMARY).is_summary_handle());
    assert!(cell_at(&f, 2, pos::SUMMARY).is_summary_cell());
    assert!(cell_at(&f, -1, pos::TOP_TOTALS).is_top_totals_handle());
    assert!(cell_at(&f, 1, pos::TOP_TOTALS).is_top_totals_cell());
    assert!(cell_at(&f, -1, pos::BOTTOM_TOTALS).is_bottom_totals_handle());
    assert!(cell_at(&f, 1, pos::BOTTOM_TOTALS).is_bottom_totals_cell());

    let data_handle = cell_at(&f, -1, pos::DATA);
    assert!(data_handle.is_handle_cell());
    assert!(!data_handle.is_data_cell());
    assert!(!cell_at(&f, -1, pos::HEADER).is_handle_cell());
}

#[test]
fn test_totals_require_the_designated_subgrid() {
    // Summary-role subgrid, but not named as a totals band.
    let f = GridBuilder::new()
        .subgrid("data", SubgridRole::Data, data_rows(2, 4))
        .subgrid("footer", SubgridRole::Summary, vec![vec![json!(0)]])
        .build();
    let event = cell_at(&f, 0, 2);
    assert!(event.is_summary_row());
    assert!(!event.is_top_totals_row());
    assert!(!event.is_bottom_totals_row());
    assert_eq!(event.role(), CellRole::Summary);
}

// ============================================================================
// Visibility and data/handle columns
// ============================================================================

#[test]
fn test_visibility_predicates() {
    let f = standard_grid();
    assert!(cell_at(&f, 3, pos::DATA).is_cell_visible());

    let no_row = cell_at(&f, 3, 500);
    assert!(no_row.is_column_visible());
    assert!(!no_row.is_row_visible());
    assert!(!no_row.is_cell_visible());

    let no_column = cell_at(&f, 40, pos::DATA);
    assert!(no_column.is_row_visible());
    assert!(!no_column.is_column_visible());
    assert!(!no_column.is_data_column());
}

#[test_case(-1, false ; "handle")]
#[test_case(0, true ; "first")]
#[test_case(3, true ; "last")]
fn test_data_column_excludes_handle(x: i32, data: bool) {
    let f = standard_grid();
    let event = cell_at(&f, x, pos::DATA);
    assert_eq!(event.is_data_column(), data);
    assert_eq!(event.is_handle_column(), !data);
    assert_eq!(event.is_data_cell(), data);
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_row_selection_uses_data_row_index() {
    let f = standard_grid();
    f.grid.selection.select(Selection::row_range(2, 2));

    assert!(cell_at(&f, 1, pos::DATA + 2).is_row_selected());
    assert!(cell_at(&f, -1, pos::DATA + 2).is_row_selected());
    assert!(!cell_at(&f, 1, pos::DATA + 3).is_row_selected());

    // once scrolled, data row 2 moves up a position
    f.grid.scroll(0, 1);
    assert!(!cell_at(&f, 1, pos::DATA + 2).is_row_selected());
    assert!(cell_at(&f, 1, pos::DATA + 1).is_row_selected());
}

#[test]
fn test_selection_ignores_non_data_rows() {
    let f = standard_grid();
    f.grid.selection.select(Selection::all());

    // header row 0 shares data row 0's index
    let header = cell_at(&f, 1, pos::HEADER);
    assert!(!header.is_row_selected());
    assert!(!header.is_cell_selected());
    assert!(header.is_column_selected());

    assert!(cell_at(&f, 1, pos::DATA).is_cell_selected());
}

#[test]
fn test_column_selection_uses_grid_column() {
    let f = standard_grid();
    f.grid.selection.select(Selection::column_range(2, 2));
    assert!(cell_at(&f, 2, pos::DATA).is_column_selected());
    assert!(!cell_at(&f, -1, pos::DATA).is_column_selected());

    f.grid.scroll(1, 0);
    let event = cell_at(&f, 2, pos::DATA);
    assert_eq!(event.data_cell().x, 3);
    assert!(event.is_column_selected());
}

#[test]
fn test_cell_selection_gated_on_data_cell() {
    let f = standard_grid();
    f.grid.selection.select(Selection::cell_range(3, 2, 3, 2));

    assert!(cell_at(&f, 2, pos::DATA + 3).is_cell_selected());
    assert!(!cell_at(&f, 1, pos::DATA + 3).is_cell_selected());
    // a single-cell range selects neither its row nor its column
    assert!(!cell_at(&f, 2, pos::DATA + 3).is_row_selected());
    assert!(!cell_at(&f, 2, pos::DATA + 3).is_column_selected());

    f.grid.selection.clear();
    assert!(!cell_at(&f, 2, pos::DATA + 3).is_cell_selected());
}

// ============================================================================
// Hover
// ============================================================================

#[test]
fn test_hover_predicates() {
    let f = standard_grid();
    f.grid.hover.set(Some(Point::new(2, pos::DATA + 3)));

    let hovered = cell_at(&f, 2, pos::DATA + 3);
    assert!(hovered.is_cell_hovered());

    let same_row = cell_at(&f, 0, pos::DATA + 3);
    assert!(same_row.is_row_hovered());
    assert!(!same_row.is_column_hovered());
    assert!(!same_row.is_cell_hovered());

    let header = cell_at(&f, 2, pos::HEADER);
    assert!(header.is_column_hovered());
    assert!(!header.is_row_hovered());

    let handle = cell_at(&f, -1, pos::DATA + 3);
    assert!(handle.is_row_hovered());
    assert!(!handle.is_column_hovered());
}

#[test]
fn test_no_hover() {
    let f = standard_grid();
    let event = cell_at(&f, 2, pos::DATA + 3);
    assert!(!event.is_row_hovered());
    assert!(!event.is_column_hovered());
}

// ============================================================================
// Fixed regions
// ============================================================================

#[test_case(0, pos::DATA, true, true ; "fixed corner")]
#[test_case(1, pos::DATA, true, false ; "fixed row")]
#[test_case(0, pos::DATA + 1, false, true ; "fixed column")]
#[test_case(2, pos::DATA + 4, false, false ; "scrollable")]
#[test_case(0, pos::HEADER, false, true ; "header is not a fixed row")]
#[test_case(-1, pos::DATA, true, false ; "handle is not a fixed column")]
fn test_fixed_predicates(x: i32, y: i32, row: bool, column: bool) {
    let f = standard_grid();
    let event = cell_at(&f, x, y);
    assert_eq!(event.is_row_fixed(), row);
    assert_eq!(event.is_column_fixed(), column);
    assert_eq!(event.is_cell_fixed(), row && column);
}

#[test]
fn test_fixed_row_follows_data_index_when_scrolled() {
    let f = standard_grid();
    f.grid.scroll(0, 3);
    assert!(cell_at(&f, 1, pos::DATA).is_row_fixed());
    let scrolled = cell_at(&f, 1, pos::DATA + 1);
    assert_eq!(scrolled.data_cell().y, 4);
    assert!(!scrolled.is_row_fixed());
}

// ============================================================================
// Tree column
// ============================================================================

fn tree_grid(drill_down: Vec<i32>) -> Fixture {
    GridBuilder::new()
        .tree(drill_down)
        .subgrid("data", SubgridRole::Data, data_rows(3, 4))
        .build()
}

#[test]
fn test_hierarchy_column_styles_as_row_header() {
    let f = tree_grid(vec![0]);
    let event = cell_at(&f, 0, 1);
    assert!(event.is_hierarchy_column());
    assert_eq!(event.role(), CellRole::RowHeader);
    assert_eq!(role_tag(&event).as_deref(), Some("rowHeader"));

    let other = cell_at(&f, 1, 1);
    assert!(!other.is_hierarchy_column());
    assert_eq!(other.role(), CellRole::Data);
}

#[test]
fn test_hierarchy_column_requires_drill_down_data() {
    let f = tree_grid(vec![2]);
    assert!(!cell_at(&f, 0, 0).is_hierarchy_column());
}

#[test]
fn test_hierarchy_column_requires_tree_column_shown() {
    let f = tree_grid(vec![0]);
    f.grid.set_properties(|p| p.show_tree_column = false);
    let event = cell_at(&f, 0, 0);
    assert!(!event.is_hierarchy_column());
    assert_eq!(role_tag(&event).as_deref(), Some("data"));
}

// ============================================================================
// Deprecated aliases
// ============================================================================

#[test]
#[allow(deprecated)]
fn test_deprecated_aliases_match_data_predicates() {
    let f = standard_grid();
    for (x, y) in [
        (-1, pos::HEADER),
        (-1, pos::DATA),
        (1, pos::HEADER),
        (1, pos::DATA + 2),
        (3, pos::BOTTOM_TOTALS),
        (99, 99),
    ] {
        let event = cell_at(&f, x, y);
        assert_eq!(event.is_grid_row(), event.is_data_row());
        assert_eq!(event.is_grid_column(), event.is_data_column());
        assert_eq!(event.is_grid_cell(), event.is_data_cell());
    }
}
