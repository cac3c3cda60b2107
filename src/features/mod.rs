//! Pointer interaction features.
//!
//! A feature looks at an event and either consumes it or lets it fall
//! through. The chain tries features in order; the first one that stops the
//! event wins, and an event nobody stops is silently dropped.

mod cell_editing;

pub use cell_editing::CellEditing;

use crate::model::Grid;
use crate::types::PointerEvent;

/// Outcome of offering an event to a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// The event was consumed
    Stop,
    /// Offer the event to the next feature
    Continue,
}

/// One link of the interaction chain. Features hold no per-event state.
pub trait Feature {
    fn handle_double_click(&self, _grid: &dyn Grid, _event: &mut PointerEvent) -> Propagation {
        Propagation::Continue
    }

    fn handle_hold_pulse(&self, _grid: &dyn Grid, _event: &mut PointerEvent) -> Propagation {
        Propagation::Continue
    }
}

/// Ordered list of features, first `Stop` wins.
#[derive(Default)]
pub struct FeatureChain {
    features: Vec<Box<dyn Feature>>,
}

impl FeatureChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a feature behind the existing ones.
    #[must_use]
    pub fn with(mut self, feature: impl Feature + 'static) -> Self {
        self.features.push(Box::new(feature));
        self
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn handle_double_click(&self, grid: &dyn Grid, event: &mut PointerEvent) -> Propagation {
        self.dispatch(|f| f.handle_double_click(grid, event))
    }

    pub fn handle_hold_pulse(&self, grid: &dyn Grid, event: &mut PointerEvent) -> Propagation {
        self.dispatch(|f| f.handle_hold_pulse(grid, event))
    }

    fn dispatch(&self, mut offer: impl FnMut(&dyn Feature) -> Propagation) -> Propagation {
        for feature in &self.features {
            if offer(feature.as_ref()) == Propagation::Stop {
                return Propagation::Stop;
            }
        }
        Propagation::Continue
    }
}
