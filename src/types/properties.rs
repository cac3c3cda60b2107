//! Property bags for columns and cells.
//!
//! A column carries one resolved bag per row role. Per-cell overrides live
//! with the column and, when present, replace the column bag wholesale.

use std::rc::Rc;

use serde_json::{Map, Value};

/// A flat key/value property bag.
pub type Properties = Map<String, Value>;

/// Key under which a cell's format specifier is stored.
pub const FORMAT_KEY: &str = "format";

/// Column-level properties, one resolved bag per row role.
///
/// Each role bag is the base bag with that role's overrides layered on top,
/// so reads never have to walk a chain.
#[derive(Debug, Clone, Default)]
pub struct ColumnProperties {
    pub base: Rc<Properties>,
    pub row_header: Rc<Properties>,
    pub filter: Rc<Properties>,
    pub info: Rc<Properties>,
    pub column_header: Rc<Properties>,
}

impl ColumnProperties {
    /// Build role bags from a base bag and per-role overrides.
    pub fn layered(
        base: Properties,
        row_header: &Properties,
        filter: &Properties,
        info: &Properties,
        column_header: &Properties,
    ) -> Self {
        let layer = |overrides: &Properties| {
            let mut merged = base.clone();
            for (k, v) in overrides {
                merged.insert(k.clone(), v.clone());
            }
            Rc::new(merged)
        };
        Self {
            row_header: layer(row_header),
            filter: layer(filter),
            info: layer(info),
            column_header: layer(column_header),
            base: Rc::new(base),
        }
    }
}

/// Read the format specifier from a bag.
pub fn format_of(props: &Properties) -> Option<&str> {
    props.get(FORMAT_KEY).and_then(Value::as_str)
}
