//! `MultiGrid`: a bounded, non-toroidal grid whose cells hold any number of
//! agents.
//!
//! # Storage
//!
//! Cells are stored densely in row-major order (`y * width + x`), each as a
//! small `Vec<Occupant>`.  A second array indexed by `AgentId` records where
//! every placed agent sits, so moves and removals never scan the grid:
//!
//! ```text
//! cells[y * width + x] = [Occupant { id, kind }, …]
//! positions[id]        = Some(cell)   // None while off-grid
//! ```
//!
//! The two arrays are kept in lock-step: an agent appears in exactly one
//! cell's list iff its `positions` entry is `Some`.

use at_core::{AgentId, AgentKind, Cell, Neighborhood};

use crate::{GridError, GridResult};

/// A reference to an agent on the grid plus its capability tag.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Occupant {
    pub id:   AgentId,
    pub kind: AgentKind,
}

impl Occupant {
    #[inline]
    pub fn plane(id: AgentId) -> Self {
        Self { id, kind: AgentKind::Plane }
    }

    #[inline]
    pub fn airport(id: AgentId) -> Self {
        Self { id, kind: AgentKind::Airport }
    }
}

/// Bounded multi-occupancy grid.
#[derive(Clone, Debug)]
pub struct MultiGrid {
    width:     u32,
    height:    u32,
    cells:     Vec<Vec<Occupant>>,
    positions: Vec<Option<(Cell, AgentKind)>>,
}

impl MultiGrid {
    /// Create an empty `width` × `height` grid.
    pub fn new(width: u32, height: u32) -> Self {
        let n = width as usize * height as usize;
        Self {
            width,
            height,
            cells:     vec![Vec::new(); n],
            positions: Vec::new(),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether `cell` lies inside `[0, width) × [0, height)`.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    #[inline]
    fn slot(&self, cell: Cell) -> usize {
        cell.y as usize * self.width as usize + cell.x as usize
    }

    fn check(&self, cell: Cell) -> GridResult<usize> {
        if self.contains(cell) {
            Ok(self.slot(cell))
        } else {
            Err(GridError::InvalidCoordinate(cell))
        }
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Put `occupant` on `cell`.
    ///
    /// # Errors
    ///
    /// - [`GridError::InvalidCoordinate`] if `cell` is out of bounds.
    /// - [`GridError::DuplicatePlacement`] if `occupant` is an airport and
    ///   `cell` already holds one.
    /// - [`GridError::AlreadyPlaced`] if the agent is already on the grid.
    pub fn place(&mut self, occupant: Occupant, cell: Cell) -> GridResult<()> {
        let slot = self.check(cell)?;
        if self.position(occupant.id).is_some() {
            return Err(GridError::AlreadyPlaced(occupant.id));
        }
        if occupant.kind == AgentKind::Airport && self.has_kind(cell, AgentKind::Airport) {
            return Err(GridError::DuplicatePlacement(cell));
        }

        let idx = occupant.id.index();
        if idx >= self.positions.len() {
            self.positions.resize(idx + 1, None);
        }
        self.positions[idx] = Some((cell, occupant.kind));
        self.cells[slot].push(occupant);
        Ok(())
    }

    /// Move a placed agent to `to`.  Occupancy is not limited.
    ///
    /// Returns the cell the agent left.
    pub fn move_agent(&mut self, id: AgentId, to: Cell) -> GridResult<Cell> {
        let dest = self.check(to)?;
        let (from, kind) = self
            .positions
            .get(id.index())
            .copied()
            .flatten()
            .ok_or(GridError::NotPlaced(id))?;

        let src = self.slot(from);
        self.detach(src, id);
        self.cells[dest].push(Occupant { id, kind });
        self.positions[id.index()] = Some((to, kind));
        Ok(from)
    }

    /// Take an agent off the grid.  Returns the cell it occupied.
    pub fn remove(&mut self, id: AgentId) -> GridResult<Cell> {
        let (cell, _) = self
            .positions
            .get_mut(id.index())
            .and_then(Option::take)
            .ok_or(GridError::NotPlaced(id))?;
        let slot = self.slot(cell);
        self.detach(slot, id);
        Ok(cell)
    }

    fn detach(&mut self, slot: usize, id: AgentId) {
        let list = &mut self.cells[slot];
        if let Some(i) = list.iter().position(|o| o.id == id) {
            list.swap_remove(i);
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Current cell of `id`, or `None` if it is not on the grid.
    #[inline]
    pub fn position(&self, id: AgentId) -> Option<Cell> {
        self.positions.get(id.index()).copied().flatten().map(|(c, _)| c)
    }

    /// Everyone on `cell`.  Empty for out-of-bounds cells.
    pub fn occupants(&self, cell: Cell) -> &[Occupant] {
        if self.contains(cell) {
            &self.cells[self.slot(cell)]
        } else {
            &[]
        }
    }

    /// Whether `cell` holds at least one agent of `kind`.
    #[inline]
    pub fn has_kind(&self, cell: Cell, kind: AgentKind) -> bool {
        self.occupants(cell).iter().any(|o| o.kind == kind)
    }

    /// Number of agents of `kind` on `cell`.
    pub fn count_kind(&self, cell: Cell, kind: AgentKind) -> usize {
        self.occupants(cell).iter().filter(|o| o.kind == kind).count()
    }

    #[inline]
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.occupants(cell).is_empty()
    }

    /// In-bounds cells adjacent to `center`, optionally including `center`
    /// itself.
    ///
    /// Offsets are visited with `dx` in the outer loop and `dy` in the inner
    /// loop, both from -1 to +1, so the order is stable for a given cell and
    /// mode.  Cells past the edge are omitted (no wraparound).
    pub fn neighbors(&self, center: Cell, mode: Neighborhood, include_center: bool) -> Vec<Cell> {
        let mut out = Vec::with_capacity(mode.max_neighbors() + 1);
        for dx in -1..=1 {
            for dy in -1..=1 {
                if dx == 0 && dy == 0 {
                    if include_center && self.contains(center) {
                        out.push(center);
                    }
                    continue;
                }
                if !mode.includes_offset(dx, dy) {
                    continue;
                }
                if let Some(cell) = center.offset(dx, dy).filter(|&c| self.contains(c)) {
                    out.push(cell);
                }
            }
        }
        out
    }

    /// Every placed agent with its cell, in ascending `AgentId` order.
    pub fn iter(&self) -> impl Iterator<Item = (Occupant, Cell)> + '_ {
        self.positions.iter().enumerate().filter_map(|(i, p)| {
            p.map(|(cell, kind)| (Occupant { id: AgentId(i as u32), kind }, cell))
        })
    }

    /// Number of agents currently on the grid.
    pub fn placed_count(&self) -> usize {
        self.positions.iter().filter(|p| p.is_some()).count()
    }
}
