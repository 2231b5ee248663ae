//! Integration tests for at-sim.

use at_core::{Cell, ModelParams};

use crate::{AirportSpec, PlaneSpec, Sim, SimBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

const HOME: Cell = Cell::new(0, 0);
const AWAY: Cell = Cell::new(4, 4);

fn params(delay: u32) -> ModelParams {
    ModelParams {
        width:            5,
        height:           5,
        permission_delay: delay,
        ..ModelParams::default()
    }
}

fn airport(cell: Cell, capacity: u32) -> AirportSpec {
    AirportSpec { cell, capacity }
}

/// Two single-runway airports at opposite corners of a 5×5 grid and `n`
/// planes on the ground at HOME bound for AWAY.
fn corner_sim(n: usize, delay: u32) -> Sim {
    SimBuilder::new(params(delay))
        .airports(vec![airport(HOME, 1), airport(AWAY, 1)])
        .planes(vec![PlaneSpec::new(HOME, AWAY); n])
        .build()
        .unwrap()
}

// ── SimBuilder ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use at_core::{AgentId, AgentKind, ModelParams};
    use at_grid::GridError;

    use super::*;
    use crate::{AgentRef, SimError};

    #[test]
    fn builds_with_defaults() {
        let sim = SimBuilder::new(ModelParams::default()).build().unwrap();
        assert_eq!(sim.world.airports.len(), 5);
        assert_eq!(sim.world.planes.len(), 10);
        assert_eq!(sim.agent_count(), 15);
        assert!(sim.running);
    }

    #[test]
    fn airports_registered_first_with_low_ids() {
        let sim = SimBuilder::new(ModelParams::default()).build().unwrap();
        let order = sim.scheduler.agents();
        assert!(order[..5].iter().all(|a| matches!(a, AgentRef::Airport(_))));
        assert!(order[5..].iter().all(|a| matches!(a, AgentRef::Plane(_))));
        for (i, a) in sim.world.airports.iter().enumerate() {
            assert_eq!(a.id, AgentId(i as u32));
        }
        for (j, p) in sim.world.planes.iter().enumerate() {
            assert_eq!(p.id, AgentId(5 + j as u32));
        }
    }

    #[test]
    fn random_airports_and_routes_are_valid() {
        let p = ModelParams { min_runways: 2, max_runways: 3, ..ModelParams::default() };
        let sim = SimBuilder::new(p).build().unwrap();
        for a in &sim.world.airports {
            assert!((2..=3).contains(&a.capacity()));
            assert_eq!(sim.world.grid.count_kind(a.cell, AgentKind::Airport), 1);
        }
        for plane in &sim.world.planes {
            assert!(sim.world.airport_at(plane.origin).is_some());
            assert!(sim.world.airport_at(plane.destination).is_some());
            assert_ne!(plane.origin, plane.destination);
            assert_eq!(plane.cell, plane.origin);
            assert_eq!(sim.world.grid.position(plane.id), Some(plane.cell));
            assert_eq!(plane.countdown, 10);
        }
    }

    #[test]
    fn airports_can_fill_the_grid() {
        let p = ModelParams {
            width: 2,
            height: 2,
            initial_airports: 4,
            initial_planes: 3,
            ..ModelParams::default()
        };
        let sim = SimBuilder::new(p).build().unwrap();
        let mut cells: Vec<Cell> = sim.world.airports.iter().map(|a| a.cell).collect();
        cells.sort_by_key(|c| (c.x, c.y));
        cells.dedup();
        assert_eq!(cells.len(), 4);
    }

    #[test]
    fn same_seed_same_model() {
        let a = SimBuilder::new(ModelParams::default()).build().unwrap();
        let b = SimBuilder::new(ModelParams::default()).build().unwrap();
        assert_eq!(a.world.airports, b.world.airports);
        assert_eq!(a.world.planes, b.world.planes);
    }

    #[test]
    fn explicit_specs_override_counts() {
        let sim = corner_sim(3, 0);
        assert_eq!(sim.params.initial_airports, 2);
        assert_eq!(sim.params.initial_planes, 3);
        assert_eq!(sim.world.grid.count_kind(HOME, AgentKind::Plane), 3);
    }

    #[test]
    fn unknown_airport_errors() {
        let err = SimBuilder::new(params(0))
            .airports(vec![airport(HOME, 1), airport(AWAY, 1)])
            .planes(vec![PlaneSpec::new(Cell::new(2, 2), AWAY)])
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SimError::UnknownAirport(c) if c == Cell::new(2, 2)));
    }

    #[test]
    fn route_to_self_errors() {
        let err = SimBuilder::new(params(0))
            .airports(vec![airport(HOME, 1), airport(AWAY, 1)])
            .planes(vec![PlaneSpec::new(HOME, HOME)])
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn zero_capacity_errors() {
        let err = SimBuilder::new(params(0))
            .airports(vec![airport(HOME, 0), airport(AWAY, 1)])
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn duplicate_airport_cell_errors() {
        let err = SimBuilder::new(params(0))
            .airports(vec![airport(HOME, 1), airport(HOME, 2)])
            .planes(vec![])
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SimError::Grid(GridError::DuplicatePlacement(c)) if c == HOME));
    }

    #[test]
    fn invalid_params_error() {
        let p = ModelParams { width: 2, height: 2, initial_airports: 5, ..ModelParams::default() };
        assert!(matches!(SimBuilder::new(p).build(), Err(SimError::Core(_))));
    }
}

// ── Tick scenarios ────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use at_agent::FlightState;
    use at_core::AgentId;

    use super::*;
    use crate::NoopObserver;

    #[test]
    fn isolated_plane_takes_off_after_delay() {
        let mut sim = corner_sim(1, 3);
        for remaining in [2, 1, 0] {
            let s = sim.step(&mut NoopObserver).unwrap();
            let plane = &sim.world.planes[0];
            assert_eq!(plane.state, FlightState::AtAirport);
            assert_eq!(plane.countdown, remaining);
            assert_eq!(s.takeoffs, 0);
        }
        assert!(sim.world.airports[0].runway.pending().is_empty());

        // Fourth tick: request in step, admission and takeoff in advance.
        let s = sim.step(&mut NoopObserver).unwrap();
        let plane = &sim.world.planes[0];
        assert_eq!(plane.state, FlightState::Flying);
        assert_eq!(s.takeoffs, 1);
        assert_eq!(HOME.manhattan(plane.cell), 1, "first move is one VonNeumann step");
        assert!(sim.world.airports[0].runway.active().is_empty());
    }

    #[test]
    fn single_runway_admits_one_per_tick() {
        let mut sim = corner_sim(3, 0);

        let s = sim.step(&mut NoopObserver).unwrap();
        assert_eq!(s.takeoffs, 1);
        assert_eq!(s.at_airport, 2);
        let states: Vec<_> = sim.world.planes.iter().map(|p| p.state).collect();
        assert_eq!(states, [FlightState::Flying, FlightState::AtAirport, FlightState::AtAirport]);

        // Losers re-request; registration order decides again.
        let s = sim.step(&mut NoopObserver).unwrap();
        assert_eq!(s.takeoffs, 1);
        assert!(sim.world.planes[1].is_flying());
        assert!(!sim.world.planes[2].is_flying());

        sim.step(&mut NoopObserver).unwrap();
        assert!(sim.world.planes.iter().all(|p| p.is_flying()));
    }

    #[test]
    fn round_trip_swaps_route() {
        let p = ModelParams { width: 2, height: 1, ..params(0) };
        let (a, b) = (Cell::new(0, 0), Cell::new(1, 0));
        let mut sim = SimBuilder::new(p)
            .airports(vec![airport(a, 1), airport(b, 1)])
            .planes(vec![PlaneSpec::new(a, b)])
            .build()
            .unwrap();

        // Tick 0: take off straight onto the only neighbor, the destination.
        sim.step(&mut NoopObserver).unwrap();
        assert_eq!(sim.world.planes[0].cell, b);
        assert!(sim.world.planes[0].is_flying());

        // Tick 1: arrival request queued from advance, so it holds.
        sim.step(&mut NoopObserver).unwrap();
        assert!(sim.world.planes[0].is_flying());
        assert_eq!(sim.world.airports[1].runway.pending(), &[sim.world.planes[0].id]);

        // Tick 2: admitted and landed.
        let s = sim.step(&mut NoopObserver).unwrap();
        let plane = sim.world.plane(AgentId(2)).unwrap();
        assert_eq!(s.landings, 1);
        assert_eq!(plane.state, FlightState::AtAirport);
        assert_eq!((plane.origin, plane.destination), (b, a));
        assert_eq!(plane.trips, 1);
        assert!(sim.world.airports[1].runway.active().is_empty());
    }

    #[test]
    fn day_rolls_over_after_1440_ticks() {
        let mut sim = corner_sim(2, 5);
        sim.run_ticks(1439, &mut NoopObserver).unwrap();
        assert_eq!((sim.clock().day, sim.clock().time), (0, 1439));

        let s = sim.step(&mut NoopObserver).unwrap();
        assert_eq!((s.day, s.time), (1, 0));
        assert!(sim.running, "two-day run keeps going after day one");
    }

    #[test]
    fn run_stops_after_configured_days() {
        let mut sim = corner_sim(2, 5);
        sim.run(&mut NoopObserver).unwrap();
        assert!(!sim.running);
        assert_eq!(sim.clock().day, 2);
        assert_eq!(sim.clock().steps.0, 2 * 1440);
    }

    #[test]
    fn identical_seeds_identical_runs() {
        let run = || {
            let mut sim = SimBuilder::new(ModelParams::default()).build().unwrap();
            sim.run_ticks(200, &mut NoopObserver).unwrap();
            sim.world.planes.clone()
        };
        assert_eq!(run(), run());
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use at_core::{AgentKind, Tick};

    use super::*;
    use crate::{SimObserver, TickSummary, WorldView};

    #[derive(Default)]
    struct Recorder {
        starts:    usize,
        summaries: Vec<TickSummary>,
        snapshots: Vec<(Tick, usize, usize)>,
        ended:     Option<Tick>,
    }

    impl SimObserver for Recorder {
        fn on_tick_start(&mut self, _tick: Tick) {
            self.starts += 1;
        }
        fn on_tick_end(&mut self, summary: &TickSummary) {
            self.summaries.push(*summary);
        }
        fn on_snapshot(&mut self, tick: Tick, world: &WorldView<'_>) {
            let airports = world.portrayal().filter(|p| p.kind == AgentKind::Airport).count();
            self.snapshots.push((tick, world.agent_count(), airports));
        }
        fn on_sim_end(&mut self, final_tick: Tick) {
            self.ended = Some(final_tick);
        }
    }

    #[test]
    fn callbacks_fire_per_tick_and_interval() {
        let p = ModelParams { output_interval_ticks: 10, ..params(0) };
        let mut sim = SimBuilder::new(p)
            .airports(vec![airport(HOME, 1), airport(AWAY, 1)])
            .planes(vec![PlaneSpec::new(HOME, AWAY); 2])
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.run_ticks(25, &mut rec).unwrap();

        assert_eq!(rec.starts, 25);
        assert_eq!(rec.summaries.len(), 25);
        assert!(rec.summaries.iter().all(|s| s.agent_count == 4));
        assert_eq!(rec.summaries[24].tick, Tick(24));
        assert_eq!(
            rec.snapshots,
            vec![(Tick(0), 4, 2), (Tick(10), 4, 2), (Tick(20), 4, 2)]
        );
        assert_eq!(rec.ended, None, "run_ticks does not end the run");
    }

    #[test]
    fn zero_interval_disables_snapshots() {
        let p = ModelParams { output_interval_ticks: 0, days: 1, ..params(0) };
        let mut sim = SimBuilder::new(p)
            .airports(vec![airport(HOME, 1), airport(AWAY, 1)])
            .planes(vec![])
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        assert!(rec.snapshots.is_empty());
        assert_eq!(rec.summaries.len(), 1440);
        assert_eq!(rec.ended, Some(Tick(1440)));
    }
}

// ── Invariants ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod property_tests {
    use at_core::{AgentKind, ModelParams, Neighborhood};
    use proptest::prelude::*;

    use crate::{NoopObserver, SimBuilder};

    fn arb_params() -> impl Strategy<Value = ModelParams> {
        (2u32..7, 2u32..7, 0usize..16, 0u32..4, 1u32..3, any::<bool>(), any::<u64>()).prop_flat_map(
            |(width, height, planes, delay, max_runways, moore, seed)| {
                let cells = (width * height) as usize;
                (2usize..=cells.min(6)).prop_map(move |airports| ModelParams {
                    width,
                    height,
                    initial_airports: airports,
                    initial_planes: planes,
                    permission_delay: delay,
                    min_runways: 1,
                    max_runways,
                    neighborhood: if moore { Neighborhood::Moore } else { Neighborhood::VonNeumann },
                    seed,
                    ..ModelParams::default()
                })
            },
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn invariants_hold_every_tick(params in arb_params()) {
            let mut sim = SimBuilder::new(params).build().unwrap();
            for _ in 0..80 {
                sim.step(&mut NoopObserver).unwrap();
                let w = &sim.world;

                for a in &w.airports {
                    prop_assert!(a.runway.within_capacity());
                }
                for p in &w.planes {
                    prop_assert!(w.grid.contains(p.cell));
                    prop_assert_eq!(w.grid.position(p.id), Some(p.cell));
                    if !p.is_flying() {
                        prop_assert!(w.airport_at(p.cell).is_some());
                    }
                    if w.airport_at(p.cell).is_none() {
                        prop_assert_eq!(w.grid.count_kind(p.cell, AgentKind::Plane), 1);
                    }
                }
            }
        }
    }
}
