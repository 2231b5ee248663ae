//! Airports: a fixed cell with a set of runways.

use at_core::{AgentId, Cell};
use tracing::debug;

use crate::{AgentError, AgentResult, Runway};

/// An airport.  Never moves and is never removed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Airport {
    pub id:     AgentId,
    pub cell:   Cell,
    pub runway: Runway,
}

impl Airport {
    pub fn new(id: AgentId, cell: Cell, capacity: u32) -> Self {
        Self { id, cell, runway: Runway::new(capacity) }
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.runway.capacity()
    }

    /// Step phase.  Airports only collect requests during step; the queue
    /// is filled by planes, so there is nothing to compute here.
    #[inline]
    pub fn step(&mut self) {}

    /// Advance phase: admit this tick's requests and check the capacity
    /// invariant.  Returns the planes admitted.
    pub fn advance(&mut self) -> AgentResult<Vec<AgentId>> {
        debug!(
            airport  = %self.id,
            pending  = ?self.runway.pending(),
            active   = ?self.runway.active(),
            capacity = self.capacity(),
            "runway admission",
        );
        let admitted = self.runway.admit();
        self.check_capacity()?;
        Ok(admitted)
    }

    /// `Err(CapacityViolation)` if more planes hold a slot than there are
    /// runways.
    pub fn check_capacity(&self) -> AgentResult<()> {
        if self.runway.within_capacity() {
            Ok(())
        } else {
            Err(AgentError::CapacityViolation {
                airport:  self.id,
                active:   self.runway.active().len(),
                capacity: self.capacity(),
            })
        }
    }
}
