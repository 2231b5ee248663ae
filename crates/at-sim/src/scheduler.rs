//! Simultaneous-activation scheduler.

use at_core::SimClock;
use tracing::trace;

/// Handle to one registered agent: which list it lives in and where.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AgentRef {
    Airport(usize),
    Plane(usize),
}

/// The per-agent hooks the scheduler drives.
///
/// `step_agent` must not mutate anything another agent's `step_agent` reads;
/// all state changes that others can observe belong in `advance_agent`.
pub trait Activation {
    type Error;

    fn step_agent(&mut self, agent: AgentRef) -> Result<(), Self::Error>;

    fn advance_agent(&mut self, agent: AgentRef) -> Result<(), Self::Error>;
}

/// Owns the registration order and the clock.
///
/// Agents are activated in the order they were added, every tick, and that
/// order never changes.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    agents:    Vec<AgentRef>,
    pub clock: SimClock,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an agent at the end of the activation order.
    pub fn add(&mut self, agent: AgentRef) {
        self.agents.push(agent);
    }

    /// Registration order.
    #[inline]
    pub fn agents(&self) -> &[AgentRef] {
        &self.agents
    }

    #[inline]
    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    /// Run one tick: `step` everyone, then `advance` everyone, then tick the
    /// clock.
    ///
    /// An error aborts the tick where it happened; the clock is not advanced.
    pub fn step<A: Activation>(&mut self, target: &mut A) -> Result<(), A::Error> {
        trace!(time = self.clock.time, steps = %self.clock.steps, "tick");

        for &agent in &self.agents {
            target.step_agent(agent)?;
        }
        for &agent in &self.agents {
            target.advance_agent(agent)?;
        }

        self.clock.advance();
        Ok(())
    }
}
