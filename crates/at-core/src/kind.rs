//! Occupant tags and movement neighborhoods shared by every crate.

/// What kind of agent an occupant reference points at.
///
/// Stored next to every id in the grid so co-located occupants can be told
/// apart by pattern matching instead of looking the agent up.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentKind {
    Plane,
    Airport,
}

impl AgentKind {
    /// Human-readable label, useful for CSV/Parquet column values.
    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::Plane   => "plane",
            AgentKind::Airport => "airport",
        }
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which adjacent cells count as neighbors.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Neighborhood {
    /// 4-connected: up, down, left, right.
    #[default]
    VonNeumann,
    /// 8-connected: includes the diagonals.
    Moore,
}

impl Neighborhood {
    /// Maximum number of neighbors away from the grid edge.
    #[inline]
    pub fn max_neighbors(self) -> usize {
        match self {
            Neighborhood::VonNeumann => 4,
            Neighborhood::Moore      => 8,
        }
    }

    /// Whether the offset `(dx, dy)` (each in `-1..=1`) is part of this
    /// neighborhood.  The center offset is handled by the caller.
    #[inline]
    pub fn includes_offset(self, dx: i32, dy: i32) -> bool {
        match self {
            Neighborhood::VonNeumann => dx.abs() + dy.abs() <= 1,
            Neighborhood::Moore      => true,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Neighborhood::VonNeumann => "von_neumann",
            Neighborhood::Moore      => "moore",
        }
    }
}

impl std::fmt::Display for Neighborhood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
