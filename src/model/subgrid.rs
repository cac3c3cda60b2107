use std::cell::RefCell;

use serde_json::Value;

use super::{Subgrid, SubgridRole};

/// Subgrid holding its rows in memory.
///
/// Out-of-range reads yield `Null`; out-of-range writes are dropped.
#[derive(Debug)]
pub struct MemorySubgrid {
    name: String,
    role: SubgridRole,
    rows: RefCell<Vec<Vec<Value>>>,
}

impl MemorySubgrid {
    pub fn new(name: impl Into<String>, role: SubgridRole, rows: Vec<Vec<Value>>) -> Self {
        Self {
            name: name.into(),
            role,
            rows: RefCell::new(rows),
        }
    }

    fn slot(x: i32, y: i32) -> Option<(usize, usize)> {
        Some((usize::try_from(x).ok()?, usize::try_from(y).ok()?))
    }
}

impl Subgrid for MemorySubgrid {
    fn name(&self) -> &str {
        &self.name
    }

    fn role(&self) -> SubgridRole {
        self.role
    }

    fn get_value(&self, x: i32, y: i32) -> Value {
        let Some((col, row)) = Self::slot(x, y) else {
            return Value::Null;
        };
        self.rows
            .borrow()
            .get(row)
            .and_then(|r| r.get(col))
            .cloned()
            .unwrap_or(Value::Null)
    }

    fn set_value(&self, x: i32, y: i32, value: Value) {
        let Some((col, row)) = Self::slot(x, y) else {
            return;
        };
        if let Some(cell) = self
            .rows
            .borrow_mut()
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
        {
            *cell = value;
        }
    }

    fn get_row(&self, y: i32) -> Option<Value> {
        let row = usize::try_from(y).ok()?;
        self.rows
            .borrow()
            .get(row)
            .map(|r| Value::Array(r.clone()))
    }

    fn row_count(&self) -> usize {
        self.rows.borrow().len()
    }
}
