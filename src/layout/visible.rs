//! Visible column/row descriptors for the current scroll position.
//!
//! Recomputed whenever the scroll position, viewport size or properties
//! change; between recomputes the descriptor lists are shared by `Rc`, so
//! handing them to cell contexts and the paint pool is free.

use std::cell::RefCell;
use std::rc::Rc;

use super::Viewport;
use crate::config::GridProperties;
use crate::model::{ColumnRef, Renderer, SubgridRef};
use crate::types::{Point, VisibleColumn, VisibleRow};

/// Viewport index of the row-number handle column.
pub const HANDLE_COLUMN_INDEX: i32 = -1;

/// A column as the layout sees it: backing column plus pixel width.
#[derive(Clone)]
pub struct LayoutColumn {
    pub column: ColumnRef,
    pub width: f32,
}

/// Layout of everything currently scrolled into view.
pub struct VisibleLayout {
    columns: Vec<LayoutColumn>,
    subgrids: Vec<SubgridRef>,
    visible_columns: RefCell<Rc<[VisibleColumn]>>,
    visible_rows: RefCell<Rc<[VisibleRow]>>,
}

impl VisibleLayout {
    /// Build an empty layout; call [`compute`](Self::compute) before use.
    pub fn new(columns: Vec<LayoutColumn>, subgrids: Vec<SubgridRef>) -> Self {
        Self {
            columns,
            subgrids,
            visible_columns: RefCell::new(Rc::from(Vec::new())),
            visible_rows: RefCell::new(Rc::from(Vec::new())),
        }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn subgrids(&self) -> &[SubgridRef] {
        &self.subgrids
    }

    /// Rows of the bands ahead of the data subgrid. Those bands always
    /// show, so this is also the visible position of the first data row.
    pub fn header_row_count(&self) -> i32 {
        let rows: usize = self
            .subgrids
            .iter()
            .take_while(|s| !s.is_data())
            .map(|s| s.row_count())
            .sum();
        i32::try_from(rows).unwrap_or(i32::MAX)
    }

    fn data_row_count(&self) -> usize {
        self.subgrids
            .iter()
            .filter(|s| s.is_data())
            .map(|s| s.row_count())
            .sum()
    }

    /// Largest useful `(h_scroll, v_scroll)`: the last scrollable column or
    /// row can be scrolled up to the fixed boundary.
    pub fn max_scroll(&self, props: &GridProperties) -> (i32, i32) {
        let cols = i32::try_from(self.columns.len()).unwrap_or(i32::MAX);
        let rows = i32::try_from(self.data_row_count()).unwrap_or(i32::MAX);
        (
            (cols - props.fixed_column_count - 1).max(0),
            (rows - props.fixed_row_count - 1).max(0),
        )
    }

    /// Recompute the visible descriptors.
    pub fn compute(&self, props: &GridProperties, viewport: &Viewport) {
        let columns = self.compute_columns(props, viewport);
        let rows = self.compute_rows(props, viewport);
        tracing::trace!(
            columns = columns.len(),
            rows = rows.len(),
            h_scroll = viewport.h_scroll,
            v_scroll = viewport.v_scroll,
            "layout computed"
        );
        *self.visible_columns.borrow_mut() = Rc::from(columns);
        *self.visible_rows.borrow_mut() = Rc::from(rows);
    }

    fn compute_columns(&self, props: &GridProperties, viewport: &Viewport) -> Vec<VisibleColumn> {
        let mut out = Vec::new();
        let mut x = 0.0;

        if props.show_row_numbers {
            out.push(VisibleColumn {
                column_index: HANDLE_COLUMN_INDEX,
                column: None,
                left: 0.0,
                width: props.row_header_width,
            });
            x += props.row_header_width;
        }

        let fixed = usize::try_from(props.fixed_column_count).unwrap_or(0);
        let first_scrolled = fixed.saturating_add(usize::try_from(viewport.h_scroll).unwrap_or(0));
        let fixed_cols = self.columns.iter().take(fixed);
        let scrolled_cols = self.columns.iter().skip(first_scrolled);

        let mut position = 0;
        for (i, lc) in fixed_cols.chain(scrolled_cols).enumerate() {
            // Fixed columns always show; scrolled ones only while they fit.
            if i >= fixed && x >= viewport.width {
                break;
            }
            out.push(VisibleColumn {
                column_index: position,
                column: Some(Rc::clone(&lc.column)),
                left: x,
                width: lc.width,
            });
            x += lc.width;
            position += 1;
        }
        out
    }

    fn compute_rows(&self, props: &GridProperties, viewport: &Viewport) -> Vec<VisibleRow> {
        let row_height = props.default_row_height;
        let fixed = usize::try_from(props.fixed_row_count).unwrap_or(0);
        let v_scroll = usize::try_from(viewport.v_scroll).unwrap_or(0);

        // Non-data bands always show; data rows fill what is left.
        let band_rows: usize = self
            .subgrids
            .iter()
            .filter(|s| !s.is_data())
            .map(|s| s.row_count())
            .sum();
        let band_height = row_height * band_rows as f32;
        let data_budget = (viewport.height - band_height).max(0.0);

        let mut out = Vec::new();
        let mut y = 0.0;
        let mut index: i32 = 0;

        for subgrid in &self.subgrids {
            let count = subgrid.row_count();
            let row_indices: Vec<usize> = if subgrid.is_data() {
                let first_scrolled = fixed.saturating_add(v_scroll);
                (0..count.min(fixed)).chain(first_scrolled..count).collect()
            } else {
                (0..count).collect()
            };

            let mut data_height = 0.0;
            for (i, row) in row_indices.into_iter().enumerate() {
                if subgrid.is_data() && i >= fixed && data_height >= data_budget {
                    break;
                }
                let Ok(row_index) = i32::try_from(row) else {
                    break;
                };
                out.push(VisibleRow {
                    index,
                    row_index,
                    subgrid: Rc::clone(subgrid),
                    top: y,
                    height: row_height,
                });
                y += row_height;
                if subgrid.is_data() {
                    data_height += row_height;
                }
                index += 1;
            }
        }
        out
    }

    /// Hit test: the grid cell (viewport column index, visible row position)
    /// under a pixel position.
    pub fn cell_at(&self, px: f32, py: f32) -> Option<Point> {
        let columns = self.visible_columns.borrow();
        let rows = self.visible_rows.borrow();
        let vc = columns.iter().find(|vc| px >= vc.left && px < vc.right())?;
        let vr = rows.iter().find(|vr| py >= vr.top && py < vr.bottom())?;
        Some(Point::new(vc.column_index, vr.index))
    }
}

impl Renderer for VisibleLayout {
    fn visible_columns(&self) -> Rc<[VisibleColumn]> {
        Rc::clone(&*self.visible_columns.borrow())
    }

    fn visible_rows(&self) -> Rc<[VisibleRow]> {
        Rc::clone(&*self.visible_rows.borrow())
    }
}
