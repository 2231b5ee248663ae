//! What a plane did during one phase of a tick.

use at_core::Cell;
use at_mobility::MoveOutcome;

/// Result of [`Plane::step`][crate::Plane::step] or
/// [`Plane::advance`][crate::Plane::advance].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaneEvent {
    /// On the ground, countdown decremented to `remaining`.
    CountingDown { remaining: u32 },
    /// On the ground, asked the airport for a runway.
    Requested,
    /// On the ground, no runway slot yet.
    Waiting,
    /// Left the airport at `from`; `first_move` is the first flight step.
    TookOff { from: Cell, first_move: MoveOutcome },
    /// Touched down at `at` and swapped origin and destination.
    Landed { at: Cell },
    /// Over the destination, waiting for a runway.
    Holding { at: Cell },
    /// En route, one random-walk step.
    Cruising(MoveOutcome),
    /// Nothing to do in this phase.
    Idle,
}

impl PlaneEvent {
    #[inline]
    pub fn is_takeoff(self) -> bool {
        matches!(self, PlaneEvent::TookOff { .. })
    }

    #[inline]
    pub fn is_landing(self) -> bool {
        matches!(self, PlaneEvent::Landed { .. })
    }
}
