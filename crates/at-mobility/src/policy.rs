//! The `MovementPolicy` trait and the default bounded-retry random walk.

use at_core::{AgentKind, AgentRng, Cell, Neighborhood};
use at_grid::MultiGrid;

/// Pluggable next-cell selection.
///
/// Implementations only read the grid; the caller applies the move.  All
/// randomness must come from the supplied per-agent `rng` so runs stay
/// reproducible.
pub trait MovementPolicy {
    /// Pick the cell to move into from `from`, or `None` to stay put.
    fn choose(
        &self,
        grid: &MultiGrid,
        from: Cell,
        mode: Neighborhood,
        rng:  &mut AgentRng,
    ) -> Option<Cell>;
}

impl<P: MovementPolicy + ?Sized> MovementPolicy for &P {
    fn choose(
        &self,
        grid: &MultiGrid,
        from: Cell,
        mode: Neighborhood,
        rng:  &mut AgentRng,
    ) -> Option<Cell> {
        (**self).choose(grid, from, mode, rng)
    }
}

/// Whether a plane may enter `cell`: not when it holds a plane and no
/// airport.
pub fn accepts(grid: &MultiGrid, cell: Cell) -> bool {
    let mut has_plane = false;
    for occupant in grid.occupants(cell) {
        match occupant.kind {
            AgentKind::Airport => return true,
            AgentKind::Plane   => has_plane = true,
        }
    }
    !has_plane
}

/// Undirected random walk with a retry budget equal to the neighbor count.
///
/// Draws are made with replacement: the same neighbor can be drawn twice and
/// another never, so a plane can stay stuck next to a free cell.  That
/// stuck behavior is observable; do not switch this to a shuffle.
#[derive(Copy, Clone, Debug, Default)]
pub struct RandomWalk;

impl MovementPolicy for RandomWalk {
    fn choose(
        &self,
        grid: &MultiGrid,
        from: Cell,
        mode: Neighborhood,
        rng:  &mut AgentRng,
    ) -> Option<Cell> {
        let candidates = grid.neighbors(from, mode, false);
        for _ in 0..candidates.len() {
            let &next = rng.choose(&candidates)?;
            if accepts(grid, next) {
                return Some(next);
            }
        }
        None
    }
}
