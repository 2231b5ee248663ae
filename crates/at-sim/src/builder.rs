//! Fluent builder for constructing a [`Sim`].

use at_agent::{Airport, Plane};
use at_core::{AgentId, AgentRng, Cell, ModelParams, Neighborhood, SimRng};
use at_grid::{GridError, MultiGrid, Occupant};
use at_mobility::{MovementPolicy, RandomWalk};
use tracing::debug;

use crate::{AgentRef, Scheduler, Sim, SimError, SimResult, World};

/// An airport to place at a fixed cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AirportSpec {
    pub cell:     Cell,
    pub capacity: u32,
}

/// A plane to create on the ground at `origin`, bound for `destination`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PlaneSpec {
    pub origin:       Cell,
    pub destination:  Cell,
    /// `None` uses `params.neighborhood`.
    pub neighborhood: Option<Neighborhood>,
}

impl PlaneSpec {
    pub fn new(origin: Cell, destination: Cell) -> Self {
        Self { origin, destination, neighborhood: None }
    }
}

/// Fluent builder for [`Sim<P>`].
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                              |
/// |-------------------|------------------------------------------------------|
/// | `.policy(p)`      | [`RandomWalk`]                                       |
/// | `.airports(v)`    | `initial_airports` at random distinct cells, runways uniform in `[min_runways, max_runways]` |
/// | `.planes(v)`      | `initial_planes` between random distinct airports    |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(params)
///     .airports(vec![AirportSpec { cell: Cell::new(0, 0), capacity: 1 }, …])
///     .planes(vec![PlaneSpec::new(Cell::new(0, 0), Cell::new(4, 4))])
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<P: MovementPolicy = RandomWalk> {
    params:   ModelParams,
    policy:   P,
    airports: Option<Vec<AirportSpec>>,
    planes:   Option<Vec<PlaneSpec>>,
}

impl SimBuilder<RandomWalk> {
    /// Create a builder with the default random-walk policy.
    pub fn new(params: ModelParams) -> Self {
        Self {
            params,
            policy:   RandomWalk,
            airports: None,
            planes:   None,
        }
    }
}

impl<P: MovementPolicy> SimBuilder<P> {
    /// Swap the movement policy.
    pub fn policy<Q: MovementPolicy>(self, policy: Q) -> SimBuilder<Q> {
        SimBuilder {
            params:   self.params,
            policy,
            airports: self.airports,
            planes:   self.planes,
        }
    }

    /// Place exactly these airports instead of random ones.
    pub fn airports(mut self, airports: Vec<AirportSpec>) -> Self {
        self.airports = Some(airports);
        self
    }

    /// Create exactly these planes instead of random ones.
    pub fn planes(mut self, planes: Vec<PlaneSpec>) -> Self {
        self.planes = Some(planes);
        self
    }

    /// Validate inputs, place every agent, and return a ready-to-run [`Sim`].
    ///
    /// Airports get ids `0..A` and planes `A..A+P`; the scheduler registers
    /// them in that order.
    pub fn build(self) -> SimResult<Sim<P>> {
        let mut params = self.params;
        if let Some(a) = &self.airports {
            params.initial_airports = a.len();
        }
        if let Some(p) = &self.planes {
            params.initial_planes = p.len();
        }
        params.validate()?;

        let mut rng = SimRng::new(params.seed);
        let mut world = World::new(
            MultiGrid::new(params.width, params.height),
            self.policy,
            params.permission_delay,
        );
        let mut scheduler = Scheduler::new();
        let mut next_id = 0u32;

        // ── Airports ──────────────────────────────────────────────────────
        match self.airports {
            Some(specs) => {
                for spec in specs {
                    if spec.capacity == 0 {
                        return Err(SimError::Config(format!(
                            "airport at {} has no runways",
                            spec.cell
                        )));
                    }
                    let id = AgentId(next_id);
                    world.grid.place(Occupant::airport(id), spec.cell)?;
                    let idx = world.push_airport(Airport::new(id, spec.cell, spec.capacity));
                    scheduler.add(AgentRef::Airport(idx));
                    next_id += 1;
                }
            }
            None => {
                for _ in 0..params.initial_airports {
                    let id = AgentId(next_id);
                    let cell = place_random_airport(&mut world.grid, id, &params, &mut rng)?;
                    let capacity = rng.gen_range(params.min_runways..=params.max_runways);
                    let idx = world.push_airport(Airport::new(id, cell, capacity));
                    scheduler.add(AgentRef::Airport(idx));
                    debug!(airport = %id, %cell, capacity, "airport created");
                    next_id += 1;
                }
            }
        }

        // ── Planes ────────────────────────────────────────────────────────
        let routes: Vec<PlaneSpec> = match self.planes {
            Some(specs) => specs,
            None => {
                let cells: Vec<Cell> = world.airports.iter().map(|a| a.cell).collect();
                (0..params.initial_planes)
                    .map(|_| random_route(&cells, &mut rng))
                    .collect::<SimResult<_>>()?
            }
        };

        for spec in routes {
            if world.airport_at(spec.origin).is_none() {
                return Err(SimError::UnknownAirport(spec.origin));
            }
            if world.airport_at(spec.destination).is_none() {
                return Err(SimError::UnknownAirport(spec.destination));
            }
            if spec.origin == spec.destination {
                return Err(SimError::Config(format!(
                    "plane route starts and ends at {}",
                    spec.origin
                )));
            }

            let id = AgentId(next_id);
            world.grid.place(Occupant::plane(id), spec.origin)?;
            let plane = Plane::new(
                id,
                spec.origin,
                spec.destination,
                params.permission_delay,
                spec.neighborhood.unwrap_or(params.neighborhood),
            );
            let idx = world.push_plane(plane, AgentRng::new(params.seed, id));
            scheduler.add(AgentRef::Plane(idx));
            next_id += 1;
        }

        Ok(Sim {
            params,
            scheduler,
            world,
            running: true,
        })
    }
}

/// Place airport `id` on a random cell, re-drawing while the cell already
/// has an airport.
///
/// Terminates because `validate` guarantees there are at least as many cells
/// as airports.
fn place_random_airport(
    grid:   &mut MultiGrid,
    id:     AgentId,
    params: &ModelParams,
    rng:    &mut SimRng,
) -> SimResult<Cell> {
    loop {
        let cell = Cell::new(rng.gen_range(0..params.width), rng.gen_range(0..params.height));
        match grid.place(Occupant::airport(id), cell) {
            Ok(())                                  => return Ok(cell),
            Err(GridError::DuplicatePlacement(_)) => continue,
            Err(e)                                  => return Err(e.into()),
        }
    }
}

/// Random origin airport, and a different random airport as destination.
fn random_route(cells: &[Cell], rng: &mut SimRng) -> SimResult<PlaneSpec> {
    let &origin = rng
        .choose(cells)
        .ok_or_else(|| SimError::Config("planes need airports".into()))?;
    let others: Vec<Cell> = cells.iter().copied().filter(|&c| c != origin).collect();
    let &destination = rng
        .choose(&others)
        .ok_or_else(|| SimError::Config("planes need a second airport".into()))?;
    Ok(PlaneSpec::new(origin, destination))
}
