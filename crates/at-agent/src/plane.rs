//! The plane state machine.
//!
//! ```text
//!            countdown hits 0, request runway
//!   AtAirport ─────────────────────────────────┐
//!      ▲          slot granted → take off      │
//!      │                                       ▼
//!      │  slot granted at destination       Flying ──┐ random walk until
//!      └────────────────────────────────────────┘ ◄──┘ destination reached
//! ```
//!
//! A plane lands only when it holds a runway slot at its destination; until
//! then it hovers over the destination cell and keeps its request queued.
//! There is no timeout on that wait.

use at_core::{AgentId, AgentRng, Cell, Neighborhood};
use at_grid::MultiGrid;
use at_mobility::{MoveOutcome, MovementPolicy, step_agent};
use tracing::debug;

use crate::{AgentError, AgentResult, Airport, PlaneEvent};

/// Ground or air.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlightState {
    #[default]
    AtAirport,
    Flying,
}

impl FlightState {
    pub fn as_str(self) -> &'static str {
        match self {
            FlightState::AtAirport => "at_airport",
            FlightState::Flying    => "flying",
        }
    }
}

impl std::fmt::Display for FlightState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a plane touches in its advance phase besides its own fields
/// and its airport.
pub struct FlightContext<'a, P: MovementPolicy> {
    pub grid:             &'a mut MultiGrid,
    pub policy:           &'a P,
    pub rng:              &'a mut AgentRng,
    /// Ground time reset on every landing.
    pub permission_delay: u32,
}

/// One plane shuttling between two airports.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane {
    pub id:           AgentId,
    /// Mirror of the grid position, updated on every move.
    pub cell:         Cell,
    pub origin:       Cell,
    pub destination:  Cell,
    /// Ticks left before the plane starts asking for a runway.
    pub countdown:    u32,
    pub neighborhood: Neighborhood,
    pub state:        FlightState,
    /// Completed landings.
    pub trips:        u32,
}

impl Plane {
    /// A plane on the ground at `origin`, bound for `destination`.
    pub fn new(
        id:           AgentId,
        origin:       Cell,
        destination:  Cell,
        countdown:    u32,
        neighborhood: Neighborhood,
    ) -> Self {
        Self {
            id,
            cell: origin,
            origin,
            destination,
            countdown,
            neighborhood,
            state: FlightState::AtAirport,
            trips: 0,
        }
    }

    #[inline]
    pub fn is_flying(&self) -> bool {
        self.state == FlightState::Flying
    }

    #[inline]
    pub fn at_destination(&self) -> bool {
        self.cell == self.destination
    }

    fn require<'a>(&self, airport: Option<&'a mut Airport>) -> AgentResult<&'a mut Airport> {
        airport.ok_or(AgentError::NoAirport { plane: self.id, cell: self.cell })
    }

    /// Step phase.  `airport` is the airport on the plane's cell, if any.
    ///
    /// On the ground: count down, or once the countdown is spent, queue a
    /// runway request (again every tick until granted).  In the air: nothing.
    pub fn step(&mut self, airport: Option<&mut Airport>) -> AgentResult<PlaneEvent> {
        match self.state {
            FlightState::Flying => Ok(PlaneEvent::Idle),
            FlightState::AtAirport if self.countdown == 0 => {
                self.require(airport)?.runway.request(self.id);
                Ok(PlaneEvent::Requested)
            }
            FlightState::AtAirport => {
                self.countdown -= 1;
                Ok(PlaneEvent::CountingDown { remaining: self.countdown })
            }
        }
    }

    /// Advance phase.  `airport` is the airport on the plane's cell, if any.
    pub fn advance<P: MovementPolicy>(
        &mut self,
        airport: Option<&mut Airport>,
        ctx:     &mut FlightContext<'_, P>,
    ) -> AgentResult<PlaneEvent> {
        match self.state {
            FlightState::AtAirport => {
                let airport = self.require(airport)?;
                if !airport.runway.is_cleared(self.id) {
                    return Ok(PlaneEvent::Waiting);
                }
                airport.runway.release(self.id);
                self.state = FlightState::Flying;

                let from = self.cell;
                let first_move = self.walk(ctx)?;
                debug!(plane = %self.id, %from, to = %self.cell, dest = %self.destination, "takeoff");
                Ok(PlaneEvent::TookOff { from, first_move })
            }

            FlightState::Flying if self.at_destination() => {
                let airport = self.require(airport)?;
                // Arrivals ask from advance, once per plane per queue.
                airport.runway.request_once(self.id);
                if !airport.runway.is_cleared(self.id) {
                    return Ok(PlaneEvent::Holding { at: self.cell });
                }
                airport.runway.release(self.id);
                self.land(ctx.permission_delay);
                debug!(plane = %self.id, at = %self.cell, next = %self.destination, "landed");
                Ok(PlaneEvent::Landed { at: self.cell })
            }

            FlightState::Flying => Ok(PlaneEvent::Cruising(self.walk(ctx)?)),
        }
    }

    fn walk<P: MovementPolicy>(&mut self, ctx: &mut FlightContext<'_, P>) -> AgentResult<MoveOutcome> {
        let outcome = step_agent(&mut *ctx.grid, self.id, ctx.policy, self.neighborhood, &mut *ctx.rng)?;
        self.cell = outcome.cell();
        Ok(outcome)
    }

    /// Ground the plane at its current cell and turn it around.
    fn land(&mut self, permission_delay: u32) {
        self.state = FlightState::AtAirport;
        self.countdown = permission_delay;
        self.destination = self.origin;
        self.origin = self.cell;
        self.trips += 1;
    }
}
