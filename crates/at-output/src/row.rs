//! Plain data row types written by output backends.

use at_agent::FlightState;
use at_core::AgentKind;
use at_sim::{Portrayal, TickSummary};

/// One agent's position and state at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentSnapshotRow {
    pub agent_id: u32,
    pub tick:     u64,
    pub kind:     AgentKind,
    pub x:        u32,
    pub y:        u32,
    /// `None` for airports.
    pub state:    Option<FlightState>,
}

impl AgentSnapshotRow {
    pub fn new(tick: u64, p: &Portrayal) -> Self {
        Self {
            agent_id: p.id.0,
            tick,
            kind:     p.kind,
            x:        p.cell.x,
            y:        p.cell.y,
            state:    p.state,
        }
    }

    /// State column text; empty for airports.
    pub fn state_str(&self) -> &'static str {
        self.state.map_or("", FlightState::as_str)
    }
}

/// Aggregate counters for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:           u64,
    pub day:            u32,
    pub time:           u32,
    pub agent_count:    u64,
    pub flying:         u64,
    pub at_airport:     u64,
    pub runways_in_use: u64,
    pub takeoffs:       u64,
    pub landings:       u64,
    pub stuck:          u64,
}

impl From<&TickSummary> for TickSummaryRow {
    fn from(s: &TickSummary) -> Self {
        Self {
            tick:           s.tick.0,
            day:            s.day,
            time:           s.time,
            agent_count:    s.agent_count as u64,
            flying:         s.flying as u64,
            at_airport:     s.at_airport as u64,
            runways_in_use: s.runways_in_use as u64,
            takeoffs:       s.takeoffs as u64,
            landings:       s.landings as u64,
            stuck:          s.stuck as u64,
        }
    }
}

/// Column names shared by every backend, in write order.
pub(crate) const SNAPSHOT_COLUMNS: [&str; 6] = ["agent_id", "tick", "kind", "x", "y", "state"];

pub(crate) const SUMMARY_COLUMNS: [&str; 10] = [
    "tick",
    "day",
    "time",
    "agent_count",
    "flying",
    "at_airport",
    "runways_in_use",
    "takeoffs",
    "landings",
    "stuck",
];
