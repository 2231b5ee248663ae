//! Result of one movement attempt.

use at_core::Cell;

/// What a movement attempt did to the agent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The agent left `from` and now occupies `to`.
    Moved { from: Cell, to: Cell },
    /// No acceptable neighbor was drawn within the retry budget.
    Stuck { at: Cell },
}

impl MoveOutcome {
    /// Cell the agent occupies after the attempt.
    #[inline]
    pub fn cell(self) -> Cell {
        match self {
            MoveOutcome::Moved { to, .. } => to,
            MoveOutcome::Stuck { at }     => at,
        }
    }

    #[inline]
    pub fn moved(self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}
