//! Simulation observer trait for progress reporting and data collection.

use at_core::Tick;

use crate::{TickSummary, WorldView};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: agent-count sampler
///
/// ```rust,ignore
/// struct AgentCount(Vec<usize>);
///
/// impl SimObserver for AgentCount {
///     fn on_tick_end(&mut self, summary: &TickSummary) {
///         self.0.push(summary.agent_count);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any agent is activated.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the tick, including the day rollover check.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called at snapshot intervals (every `params.output_interval_ticks`
    /// ticks) with read-only access to every agent's position and state.
    fn on_snapshot(&mut self, _tick: Tick, _world: &WorldView<'_>) {}

    /// Called once after the final tick of [`Sim::run`][crate::Sim::run].
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
