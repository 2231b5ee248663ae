//! Everything the agents act on: grid, airports, planes, and their RNGs.

use at_agent::{Airport, FlightContext, FlightState, Plane, PlaneEvent};
use at_core::{AgentId, AgentKind, AgentRng, Cell, SimClock, Tick};
use at_grid::MultiGrid;
use at_mobility::{MoveOutcome, MovementPolicy};

use crate::{Activation, AgentRef, SimError, SimResult, TickSummary};

#[cfg(not(feature = "fx-hash"))]
pub(crate) type CellMap<V> = std::collections::HashMap<Cell, V>;
#[cfg(feature = "fx-hash")]
pub(crate) type CellMap<V> = rustc_hash::FxHashMap<Cell, V>;

/// Per-tick event counters, reset at the start of every tick.
#[derive(Copy, Clone, Debug, Default)]
struct Tally {
    takeoffs: usize,
    landings: usize,
    stuck:    usize,
}

impl Tally {
    fn record(&mut self, event: PlaneEvent) {
        match event {
            PlaneEvent::TookOff { first_move, .. } => {
                self.takeoffs += 1;
                if !first_move.moved() {
                    self.stuck += 1;
                }
            }
            PlaneEvent::Landed { .. }                      => self.landings += 1,
            PlaneEvent::Cruising(MoveOutcome::Stuck { .. }) => self.stuck += 1,
            _ => {}
        }
    }
}

/// The simulation state the scheduler activates.
///
/// `airports[i]` and `planes[j]` are addressed by [`AgentRef`]; `rngs[j]`
/// belongs to `planes[j]`.
pub struct World<P: MovementPolicy> {
    pub grid:             MultiGrid,
    pub airports:         Vec<Airport>,
    pub planes:           Vec<Plane>,
    pub rngs:             Vec<AgentRng>,
    pub policy:           P,
    pub permission_delay: u32,
    airport_at:           CellMap<usize>,
    tally:                Tally,
}

impl<P: MovementPolicy> World<P> {
    pub(crate) fn new(grid: MultiGrid, policy: P, permission_delay: u32) -> Self {
        Self {
            grid,
            airports: Vec::new(),
            planes: Vec::new(),
            rngs: Vec::new(),
            policy,
            permission_delay,
            airport_at: CellMap::default(),
            tally: Tally::default(),
        }
    }

    /// Register an already-placed airport.  Returns its index.
    pub(crate) fn push_airport(&mut self, airport: Airport) -> usize {
        let idx = self.airports.len();
        self.airport_at.insert(airport.cell, idx);
        self.airports.push(airport);
        idx
    }

    /// Register an already-placed plane with its RNG.  Returns its index.
    pub(crate) fn push_plane(&mut self, plane: Plane, rng: AgentRng) -> usize {
        let idx = self.planes.len();
        self.planes.push(plane);
        self.rngs.push(rng);
        idx
    }

    /// Airport on `cell`, if any.
    pub fn airport_at(&self, cell: Cell) -> Option<&Airport> {
        self.airport_at.get(&cell).map(|&i| &self.airports[i])
    }

    pub fn plane(&self, id: AgentId) -> Option<&Plane> {
        self.planes.iter().find(|p| p.id == id)
    }

    pub(crate) fn begin_tick(&mut self) {
        self.tally = Tally::default();
    }

    /// Borrowed read-only view for observers.
    pub fn view(&self) -> WorldView<'_> {
        WorldView {
            grid:     &self.grid,
            airports: &self.airports,
            planes:   &self.planes,
        }
    }

    pub(crate) fn summary(&self, clock: &SimClock, tick: Tick) -> TickSummary {
        let flying = self.planes.iter().filter(|p| p.is_flying()).count();
        TickSummary {
            tick,
            day:            clock.day,
            time:           clock.time,
            agent_count:    self.airports.len() + self.planes.len(),
            flying,
            at_airport:     self.planes.len() - flying,
            runways_in_use: self.airports.iter().map(|a| a.runway.active().len()).sum(),
            takeoffs:       self.tally.takeoffs,
            landings:       self.tally.landings,
            stuck:          self.tally.stuck,
        }
    }
}

impl<P: MovementPolicy> Activation for World<P> {
    type Error = SimError;

    fn step_agent(&mut self, agent: AgentRef) -> SimResult<()> {
        match agent {
            AgentRef::Airport(i) => self.airports[i].step(),
            AgentRef::Plane(i) => {
                let plane = &mut self.planes[i];
                let airport = self.airport_at.get(&plane.cell).map(|&j| &mut self.airports[j]);
                plane.step(airport)?;
            }
        }
        Ok(())
    }

    fn advance_agent(&mut self, agent: AgentRef) -> SimResult<()> {
        match agent {
            AgentRef::Airport(i) => {
                self.airports[i].advance()?;
            }
            AgentRef::Plane(i) => {
                let plane = &mut self.planes[i];
                let airport = self.airport_at.get(&plane.cell).map(|&j| &mut self.airports[j]);
                let mut ctx = FlightContext {
                    grid:             &mut self.grid,
                    policy:           &self.policy,
                    rng:              &mut self.rngs[i],
                    permission_delay: self.permission_delay,
                };
                let event = plane.advance(airport, &mut ctx)?;
                self.tally.record(event);
            }
        }
        Ok(())
    }
}

// ── Rendering view ────────────────────────────────────────────────────────────

/// One drawable agent: what it is and where.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Portrayal {
    pub id:    AgentId,
    pub kind:  AgentKind,
    pub cell:  Cell,
    /// `None` for airports.
    pub state: Option<FlightState>,
}

/// Read-only borrow of the world handed to [`SimObserver::on_snapshot`].
///
/// [`SimObserver::on_snapshot`]: crate::SimObserver::on_snapshot
#[derive(Copy, Clone)]
pub struct WorldView<'a> {
    pub grid:     &'a MultiGrid,
    pub airports: &'a [Airport],
    pub planes:   &'a [Plane],
}

impl<'a> WorldView<'a> {
    /// Total registered agents.
    #[inline]
    pub fn agent_count(&self) -> usize {
        self.airports.len() + self.planes.len()
    }

    /// Every agent, airports first, in registration order.
    pub fn portrayal(&self) -> impl Iterator<Item = Portrayal> + 'a {
        let airports = self.airports.iter().map(|a| Portrayal {
            id:    a.id,
            kind:  AgentKind::Airport,
            cell:  a.cell,
            state: None,
        });
        let planes = self.planes.iter().map(|p| Portrayal {
            id:    p.id,
            kind:  AgentKind::Plane,
            cell:  p.cell,
            state: Some(p.state),
        });
        airports.chain(planes)
    }
}
