use std::collections::HashSet;
use std::rc::Rc;

use super::{Behavior, DataModel, SubgridRef};

/// Subgrid name designating the top totals band.
pub const TOP_TOTALS: &str = "topTotals";
/// Subgrid name designating the bottom totals band.
pub const BOTTOM_TOTALS: &str = "bottomTotals";

/// Data model that only knows which columns hold drill-down nodes.
#[derive(Debug, Default)]
pub struct StaticDataModel {
    drill_down_columns: HashSet<i32>,
}

impl StaticDataModel {
    pub fn new(drill_down_columns: impl IntoIterator<Item = i32>) -> Self {
        Self {
            drill_down_columns: drill_down_columns.into_iter().collect(),
        }
    }
}

impl DataModel for StaticDataModel {
    fn is_drill_down(&self, column_index: i32) -> bool {
        self.drill_down_columns.contains(&column_index)
    }
}

/// Behavior holding the ordered subgrid list.
pub struct BasicBehavior {
    subgrids: Vec<SubgridRef>,
    data_model: Rc<dyn DataModel>,
}

impl BasicBehavior {
    pub fn new(subgrids: Vec<SubgridRef>, data_model: Rc<dyn DataModel>) -> Self {
        Self {
            subgrids,
            data_model,
        }
    }

    /// Subgrids in display order.
    pub fn subgrids(&self) -> &[SubgridRef] {
        &self.subgrids
    }

    /// Find a subgrid by name.
    pub fn lookup(&self, name: &str) -> Option<SubgridRef> {
        self.subgrids
            .iter()
            .find(|s| s.name() == name)
            .map(Rc::clone)
    }
}

impl Behavior for BasicBehavior {
    fn data_model(&self) -> Rc<dyn DataModel> {
        Rc::clone(&self.data_model)
    }

    fn top_totals(&self) -> Option<SubgridRef> {
        self.lookup(TOP_TOTALS)
    }

    fn bottom_totals(&self) -> Option<SubgridRef> {
        self.lookup(BOTTOM_TOTALS)
    }
}
