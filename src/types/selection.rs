use std::cell::RefCell;

use crate::model::SelectionModel;

/// Type of selection range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionType {
    /// Standard cell selection (default)
    #[default]
    CellRange,
    /// Entire row(s) selected
    RowRange,
    /// Entire column(s) selected
    ColumnRange,
    /// All cells selected (corner click)
    All,
}

/// One selected range. Rows are data-row indices, columns are grid columns.
#[derive(Debug, Clone)]
pub struct Selection {
    pub selection_type: SelectionType,
    pub start_row: i32,
    pub start_col: i32,
    pub end_row: i32,
    pub end_col: i32,
}

impl Selection {
    /// Create a new cell range selection
    pub fn cell_range(start_row: i32, start_col: i32, end_row: i32, end_col: i32) -> Self {
        Self {
            selection_type: SelectionType::CellRange,
            start_row,
            start_col,
            end_row,
            end_col,
        }
    }

    /// Create a row range selection
    pub fn row_range(start_row: i32, end_row: i32) -> Self {
        Self {
            selection_type: SelectionType::RowRange,
            start_row,
            start_col: 0,
            end_row,
            end_col: i32::MAX,
        }
    }

    /// Create a column range selection
    pub fn column_range(start_col: i32, end_col: i32) -> Self {
        Self {
            selection_type: SelectionType::ColumnRange,
            start_row: 0,
            start_col,
            end_row: i32::MAX,
            end_col,
        }
    }

    /// Create a select-all selection
    pub fn all() -> Self {
        Self {
            selection_type: SelectionType::All,
            start_row: 0,
            start_col: 0,
            end_row: i32::MAX,
            end_col: i32::MAX,
        }
    }

    /// Get normalized bounds (min_row, min_col, max_row, max_col)
    pub fn bounds(&self) -> (i32, i32, i32, i32) {
        (
            self.start_row.min(self.end_row),
            self.start_col.min(self.end_col),
            self.start_row.max(self.end_row),
            self.start_col.max(self.end_col),
        )
    }

    fn contains_row(&self, y: i32) -> bool {
        let (r0, _, r1, _) = self.bounds();
        (r0..=r1).contains(&y)
    }

    fn contains_col(&self, x: i32) -> bool {
        let (_, c0, _, c1) = self.bounds();
        (c0..=c1).contains(&x)
    }
}

/// Selection model backed by a list of ranges.
///
/// A row counts as selected only through a row (or all) selection, a column
/// only through a column (or all) selection. A cell is selected by any range
/// covering it.
#[derive(Debug, Default)]
pub struct SelectionSet {
    ranges: RefCell<Vec<Selection>>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a range to the selection.
    pub fn select(&self, selection: Selection) {
        self.ranges.borrow_mut().push(selection);
    }

    /// Drop every range.
    pub fn clear(&self) {
        self.ranges.borrow_mut().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.borrow().is_empty()
    }
}

impl SelectionModel for SelectionSet {
    fn is_row_selected(&self, y: i32) -> bool {
        self.ranges.borrow().iter().any(|s| {
            matches!(s.selection_type, SelectionType::RowRange | SelectionType::All)
                && s.contains_row(y)
        })
    }

    fn is_column_selected(&self, x: i32) -> bool {
        self.ranges.borrow().iter().any(|s| {
            matches!(
                s.selection_type,
                SelectionType::ColumnRange | SelectionType::All
            ) && s.contains_col(x)
        })
    }

    fn is_cell_selected(&self, x: i32, y: i32) -> bool {
        self.ranges
            .borrow()
            .iter()
            .any(|s| s.contains_row(y) && s.contains_col(x))
    }
}
