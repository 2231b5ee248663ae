//! Per-tick aggregate numbers handed to observers.

use at_core::Tick;

/// Aggregate state after one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickSummary {
    /// Index of the tick that just ran (0-based).
    pub tick:           Tick,
    /// Day counter after the rollover check.
    pub day:            u32,
    /// Tick-of-day after the rollover check.
    pub time:           u32,
    /// Registered agents, planes and airports together.
    pub agent_count:    usize,
    pub flying:         usize,
    pub at_airport:     usize,
    /// Runway slots held across all airports.
    pub runways_in_use: usize,
    pub takeoffs:       usize,
    pub landings:       usize,
    /// Planes that drew no acceptable cell this tick.
    pub stuck:          usize,
}
