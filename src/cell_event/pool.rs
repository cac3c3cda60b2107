//! Reusable cell contexts for the paint loop.
//!
//! One context per visible cell slot, grown on demand and never shrunk, so a
//! steady-state repaint allocates nothing. `paint` hands out one `&mut` at a
//! time, which keeps the pool non-reentrant. Anything that wants to refer
//! to a slot after the callback returns takes a [`Checkout`] stamp, which
//! stops resolving as soon as the slot is reset for another cell.

use std::rc::Rc;

use super::{CellEvent, CellEventFactory, GridContext};

/// Stamp naming a pool slot as bound at one particular reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkout {
    slot: usize,
    generation: u64,
}

impl Checkout {
    pub fn slot(&self) -> usize {
        self.slot
    }
}

/// Pool of cell contexts owned by a renderer.
pub struct CellEventPool {
    context: Rc<GridContext>,
    slots: Vec<CellEvent>,
}

impl CellEventPool {
    pub fn new(factory: &CellEventFactory) -> Self {
        Self {
            context: Rc::clone(factory.context()),
            slots: Vec::new(),
        }
    }

    /// Number of contexts allocated so far.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Bind a pooled context to every visible cell in turn, rows outer and
    /// columns inner, and hand it to `paint_cell`. Returns the cells visited.
    pub fn paint<F>(&mut self, mut paint_cell: F) -> usize
    where
        F: FnMut(usize, &mut CellEvent),
    {
        let columns = self.context.renderer.visible_columns();
        let rows = self.context.renderer.visible_rows();

        let mut slot = 0;
        for vr in rows.iter() {
            for vc in columns.iter() {
                if slot == self.slots.len() {
                    self.slots.push(CellEvent::new(Rc::clone(&self.context)));
                }
                if let Some(event) = self.slots.get_mut(slot) {
                    event.reset(Some(vc.clone()), Some(vr.clone()));
                    paint_cell(slot, event);
                }
                slot += 1;
            }
        }
        tracing::trace!(cells = slot, pooled = self.slots.len(), "paint pass");
        slot
    }

    /// Stamp the slot's current binding.
    pub fn checkout(&self, slot: usize) -> Option<Checkout> {
        self.slots.get(slot).map(|event| Checkout {
            slot,
            generation: event.generation(),
        })
    }

    /// The slot's context, only if it has not been reset since `checkout`.
    pub fn get(&self, checkout: Checkout) -> Option<&CellEvent> {
        let event = self.slots.get(checkout.slot)?;
        if event.generation() != checkout.generation {
            tracing::trace!(slot = checkout.slot, "stale checkout rejected");
            return None;
        }
        Some(event)
    }
}
