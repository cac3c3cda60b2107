use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde_json::Value;

use super::{Column, SubgridRef};
use crate::types::{ColumnProperties, Properties};

/// Column with in-memory per-cell property storage.
///
/// Overrides are keyed by subgrid name, then row index, so the same row index
/// in the header and in the data body never collide. Reads borrow the name
/// and never allocate; only writes do. A new override bag
/// starts as a copy of the base column bag, so setting one key keeps the
/// column's other properties in effect for that cell.
#[derive(Debug)]
pub struct BasicColumn {
    index: i32,
    name: String,
    properties: ColumnProperties,
    cell_properties: RefCell<HashMap<String, HashMap<i32, Rc<Properties>>>>,
}

impl BasicColumn {
    pub fn new(index: i32, name: impl Into<String>, properties: ColumnProperties) -> Self {
        Self {
            index,
            name: name.into(),
            properties,
            cell_properties: RefCell::new(HashMap::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Column for BasicColumn {
    fn index(&self) -> i32 {
        self.index
    }

    fn properties(&self) -> &ColumnProperties {
        &self.properties
    }

    fn cell_own_properties(&self, row_index: i32, subgrid: &SubgridRef) -> Option<Rc<Properties>> {
        self.cell_properties
            .borrow()
            .get(subgrid.name())?
            .get(&row_index)
            .map(Rc::clone)
    }

    fn set_cell_property(
        &self,
        row_index: i32,
        key: &str,
        value: Value,
        subgrid: &SubgridRef,
    ) -> Rc<Properties> {
        let mut store = self.cell_properties.borrow_mut();
        let entry = store
            .entry(subgrid.name().to_string())
            .or_default()
            .entry(row_index)
            .or_insert_with(|| Rc::clone(&self.properties.base));
        Rc::make_mut(entry).insert(key.to_string(), value);
        Rc::clone(entry)
    }
}
