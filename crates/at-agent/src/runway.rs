//! Per-airport runway admission control.
//!
//! Planes append their id to the pending queue; once per tick the owning
//! airport calls [`Runway::admit`], which moves queue entries into the active
//! set in arrival order until every runway is taken and then throws the rest
//! of the queue away.  A plane that lost out has to ask again next tick and
//! gets no credit for having waited.
//!
//! Active entries stay until the plane that holds the slot calls
//! [`Runway::release`]; admission never evicts.

use at_core::AgentId;

/// Runway slots of one airport plus this tick's requests.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Runway {
    capacity: u32,
    pending:  Vec<AgentId>,
    active:   Vec<AgentId>,
}

impl Runway {
    /// A runway set with `capacity` slots, all free.
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            pending: Vec::new(),
            active:  Vec::with_capacity(capacity as usize),
        }
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Requests queued since the last admission, in arrival order.
    #[inline]
    pub fn pending(&self) -> &[AgentId] {
        &self.pending
    }

    /// Planes currently holding a slot, in admission order.
    #[inline]
    pub fn active(&self) -> &[AgentId] {
        &self.active
    }

    /// Slots not held by anyone.
    #[inline]
    pub fn free_slots(&self) -> usize {
        (self.capacity as usize).saturating_sub(self.active.len())
    }

    /// Append a request.  Duplicates are allowed; admission is bounded by
    /// capacity, not by identity.
    #[inline]
    pub fn request(&mut self, plane: AgentId) {
        self.pending.push(plane);
    }

    /// Append a request unless `plane` is already queued.
    pub fn request_once(&mut self, plane: AgentId) {
        if !self.pending.contains(&plane) {
            self.pending.push(plane);
        }
    }

    /// Whether `plane` currently holds a slot.
    #[inline]
    pub fn is_cleared(&self, plane: AgentId) -> bool {
        self.active.contains(&plane)
    }

    /// Admit queued planes into free slots, in queue order, then clear the
    /// queue.  Returns the planes admitted by this call.
    pub fn admit(&mut self) -> Vec<AgentId> {
        let free = self.free_slots();
        let admitted: Vec<AgentId> = self.pending.iter().copied().take(free).collect();
        self.active.extend_from_slice(&admitted);
        self.pending.clear();
        debug_assert!(self.active.len() <= self.capacity as usize);
        admitted
    }

    /// Drop `plane` from the active set and the queue.
    ///
    /// Returns `true` if it held a slot.
    pub fn release(&mut self, plane: AgentId) -> bool {
        let before = self.active.len();
        self.active.retain(|&p| p != plane);
        self.pending.retain(|&p| p != plane);
        self.active.len() != before
    }

    /// `|active| <= capacity`.
    #[inline]
    pub fn within_capacity(&self) -> bool {
        self.active.len() <= self.capacity as usize
    }

    /// Put `plane` straight into the active set, bypassing admission.
    #[cfg(test)]
    pub(crate) fn force_active(&mut self, plane: AgentId) {
        self.active.push(plane);
    }
}
