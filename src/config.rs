//! Grid configuration loaded from JSON.
//!
//! `GridProperties` is the small, copyable set of knobs the cell core reads
//! on every classification. `GridConfig` describes a whole grid (columns,
//! rows, totals) for the wasm viewer.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{GridError, Result};
use crate::types::Properties;

/// Default column width in pixels
pub const DEFAULT_COLUMN_WIDTH: f32 = 100.0;

/// Default row height in pixels
pub const DEFAULT_ROW_HEIGHT: f32 = 20.0;

/// Default width of the row-number handle column in pixels
pub const DEFAULT_ROW_HEADER_WIDTH: f32 = 40.0;

/// Grid-wide properties consulted by cell classification and layout.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridProperties {
    /// Leading data rows pinned above the scrolling region
    pub fixed_row_count: i32,
    /// Leading data columns pinned left of the scrolling region
    pub fixed_column_count: i32,
    /// Whether column 0 renders as a tree column for drill-down data
    pub show_tree_column: bool,
    /// Whether the row-number handle column is shown
    pub show_row_numbers: bool,
    pub default_row_height: f32,
    pub default_column_width: f32,
    /// Width of the handle column in pixels
    pub row_header_width: f32,
}

impl Default for GridProperties {
    fn default() -> Self {
        Self {
            fixed_row_count: 0,
            fixed_column_count: 0,
            show_tree_column: false,
            show_row_numbers: true,
            default_row_height: DEFAULT_ROW_HEIGHT,
            default_column_width: DEFAULT_COLUMN_WIDTH,
            row_header_width: DEFAULT_ROW_HEADER_WIDTH,
        }
    }
}

/// One column of a [`GridConfig`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColumnConfig {
    pub name: String,
    /// Width in pixels; falls back to `defaultColumnWidth`
    pub width: Option<f32>,
    /// Base properties used by plain data cells
    pub properties: Properties,
    /// Overrides for row-header and tree cells
    pub row_header: Properties,
    /// Overrides for filter-row cells
    pub filter_properties: Properties,
    /// Overrides for info-row cells
    pub info_properties: Properties,
    /// Overrides for header, summary and totals cells
    pub column_header: Properties,
}

/// Complete description of a grid.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    pub properties: GridProperties,
    pub columns: Vec<ColumnConfig>,
    /// Header row values; column names are used when absent
    pub header: Option<Vec<Value>>,
    pub data: Vec<Vec<Value>>,
    pub top_totals: Option<Vec<Vec<Value>>>,
    pub bottom_totals: Option<Vec<Vec<Value>>>,
    /// Data column indices holding drill-down nodes
    pub drill_down_columns: Vec<i32>,
}

impl GridConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs no grid could display.
    pub fn validate(&self) -> Result<()> {
        let p = &self.properties;
        if p.fixed_row_count < 0 {
            return Err(GridError::InvalidConfig(format!(
                "fixedRowCount must not be negative (got {})",
                p.fixed_row_count
            )));
        }
        if p.fixed_column_count < 0 {
            return Err(GridError::InvalidConfig(format!(
                "fixedColumnCount must not be negative (got {})",
                p.fixed_column_count
            )));
        }
        let column_count = i32::try_from(self.columns.len()).unwrap_or(i32::MAX);
        if p.fixed_column_count > column_count {
            return Err(GridError::InvalidConfig(format!(
                "fixedColumnCount {} exceeds column count {column_count}",
                p.fixed_column_count
            )));
        }
        if let Some(bad) = self
            .columns
            .iter()
            .filter_map(|c| c.width)
            .find(|w| !w.is_finite() || *w < 0.0)
        {
            return Err(GridError::InvalidConfig(format!(
                "column width must be a non-negative number (got {bad})"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::indexing_slicing
)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = GridConfig::from_json(r#"{"properties": {"fixedRowCount": 2}}"#).unwrap();
        assert_eq!(config.properties.fixed_row_count, 2);
        assert_eq!(config.properties.fixed_column_count, 0);
        assert!(config.properties.show_row_numbers);
        assert!(config.columns.is_empty());
    }

    #[test]
    fn test_rejects_negative_fixed_counts() {
        let err = GridConfig::from_json(r#"{"properties": {"fixedColumnCount": -1}}"#);
        assert!(matches!(err, Err(GridError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_fixed_columns_past_end() {
        let err = GridConfig::from_json(
            r#"{"properties": {"fixedColumnCount": 2}, "columns": [{"name": "a"}]}"#,
        );
        assert!(matches!(err, Err(GridError::InvalidConfig(_))));
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let err = GridConfig::from_json("{not json");
        assert!(matches!(err, Err(GridError::Json(_))));
    }

    #[test]
    fn test_column_role_overrides_parse() {
        let config = GridConfig::from_json(
            r#"{"columns": [{"name": "qty", "width": 80,
                 "properties": {"format": "number"},
                 "columnHeader": {"format": "header"}}]}"#,
        )
        .unwrap();
        let col = &config.columns[0];
        assert_eq!(col.width, Some(80.0));
        assert!(col.column_header.contains_key("format"));
        assert!(col.filter_properties.is_empty());
    }
}
