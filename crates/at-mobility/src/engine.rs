//! Apply a movement policy to one agent on the grid.

use at_core::{AgentId, AgentRng, Neighborhood};
use at_grid::MultiGrid;

use crate::{MobilityError, MobilityResult, MoveOutcome, MovementPolicy};

/// Ask `policy` for a next cell for `agent` and move it there.
///
/// # Errors
///
/// [`MobilityError::NotPlaced`] if `agent` is not on the grid.  A policy that
/// returns an out-of-bounds cell surfaces as [`MobilityError::Grid`].
pub fn step_agent<P: MovementPolicy>(
    grid:   &mut MultiGrid,
    agent:  AgentId,
    policy: &P,
    mode:   Neighborhood,
    rng:    &mut AgentRng,
) -> MobilityResult<MoveOutcome> {
    let from = grid.position(agent).ok_or(MobilityError::NotPlaced(agent))?;
    match policy.choose(grid, from, mode, rng) {
        Some(to) => {
            grid.move_agent(agent, to)?;
            Ok(MoveOutcome::Moved { from, to })
        }
        None => Ok(MoveOutcome::Stuck { at: from }),
    }
}
