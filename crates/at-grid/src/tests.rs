//! Unit tests for at-grid.
//!
//! All tests use small hand-built grids so every neighbor list can be
//! written out in full.

#[cfg(test)]
mod placement {
    use at_core::{AgentId, AgentKind, Cell};

    use crate::{GridError, MultiGrid, Occupant};

    #[test]
    fn place_and_query() {
        let mut g = MultiGrid::new(5, 4);
        g.place(Occupant::airport(AgentId(0)), Cell::new(2, 3)).unwrap();
        g.place(Occupant::plane(AgentId(1)), Cell::new(2, 3)).unwrap();

        assert_eq!(g.position(AgentId(0)), Some(Cell::new(2, 3)));
        assert_eq!(g.occupants(Cell::new(2, 3)).len(), 2);
        assert!(g.has_kind(Cell::new(2, 3), AgentKind::Airport));
        assert_eq!(g.count_kind(Cell::new(2, 3), AgentKind::Plane), 1);
        assert_eq!(g.placed_count(), 2);
    }

    #[test]
    fn out_of_bounds_is_rejected() {
        let mut g = MultiGrid::new(5, 4);
        let err = g.place(Occupant::plane(AgentId(0)), Cell::new(5, 0)).unwrap_err();
        assert_eq!(err, GridError::InvalidCoordinate(Cell::new(5, 0)));
        let err = g.place(Occupant::plane(AgentId(0)), Cell::new(0, 4)).unwrap_err();
        assert_eq!(err, GridError::InvalidCoordinate(Cell::new(0, 4)));
        assert_eq!(g.position(AgentId(0)), None);
    }

    #[test]
    fn second_airport_on_cell_is_duplicate() {
        let mut g = MultiGrid::new(3, 3);
        g.place(Occupant::airport(AgentId(0)), Cell::new(1, 1)).unwrap();
        let err = g.place(Occupant::airport(AgentId(1)), Cell::new(1, 1)).unwrap_err();
        assert_eq!(err, GridError::DuplicatePlacement(Cell::new(1, 1)));
        // The failed airport must not be left half-placed.
        assert_eq!(g.position(AgentId(1)), None);
        assert_eq!(g.occupants(Cell::new(1, 1)).len(), 1);
    }

    #[test]
    fn planes_may_share_a_cell() {
        let mut g = MultiGrid::new(3, 3);
        for i in 0..4 {
            g.place(Occupant::plane(AgentId(i)), Cell::new(0, 0)).unwrap();
        }
        assert_eq!(g.count_kind(Cell::new(0, 0), AgentKind::Plane), 4);
    }

    #[test]
    fn double_place_is_rejected() {
        let mut g = MultiGrid::new(3, 3);
        g.place(Occupant::plane(AgentId(3)), Cell::new(0, 0)).unwrap();
        let err = g.place(Occupant::plane(AgentId(3)), Cell::new(1, 1)).unwrap_err();
        assert_eq!(err, GridError::AlreadyPlaced(AgentId(3)));
    }

    #[test]
    fn out_of_bounds_occupants_is_empty() {
        let g = MultiGrid::new(2, 2);
        assert!(g.occupants(Cell::new(9, 9)).is_empty());
        assert!(g.is_empty(Cell::new(1, 1)));
    }
}

#[cfg(test)]
mod movement {
    use at_core::{AgentId, Cell};

    use crate::{GridError, MultiGrid, Occupant};

    #[test]
    fn move_updates_exactly_two_cells() {
        let mut g = MultiGrid::new(4, 4);
        g.place(Occupant::plane(AgentId(0)), Cell::new(1, 1)).unwrap();
        g.place(Occupant::plane(AgentId(1)), Cell::new(1, 1)).unwrap();
        g.place(Occupant::plane(AgentId(2)), Cell::new(3, 3)).unwrap();

        let from = g.move_agent(AgentId(0), Cell::new(1, 2)).unwrap();
        assert_eq!(from, Cell::new(1, 1));
        assert_eq!(g.position(AgentId(0)), Some(Cell::new(1, 2)));
        assert_eq!(g.occupants(Cell::new(1, 1)), &[Occupant::plane(AgentId(1))]);
        assert_eq!(g.occupants(Cell::new(1, 2)), &[Occupant::plane(AgentId(0))]);
        assert_eq!(g.occupants(Cell::new(3, 3)).len(), 1);
    }

    #[test]
    fn move_out_of_bounds_leaves_agent_in_place() {
        let mut g = MultiGrid::new(4, 4);
        g.place(Occupant::plane(AgentId(0)), Cell::new(3, 3)).unwrap();
        let err = g.move_agent(AgentId(0), Cell::new(4, 3)).unwrap_err();
        assert_eq!(err, GridError::InvalidCoordinate(Cell::new(4, 3)));
        assert_eq!(g.position(AgentId(0)), Some(Cell::new(3, 3)));
    }

    #[test]
    fn move_unplaced_errors() {
        let mut g = MultiGrid::new(4, 4);
        let err = g.move_agent(AgentId(9), Cell::new(0, 0)).unwrap_err();
        assert_eq!(err, GridError::NotPlaced(AgentId(9)));
    }

    #[test]
    fn remove_clears_cell_and_position() {
        let mut g = MultiGrid::new(4, 4);
        g.place(Occupant::plane(AgentId(0)), Cell::new(2, 2)).unwrap();
        assert_eq!(g.remove(AgentId(0)).unwrap(), Cell::new(2, 2));
        assert!(g.is_empty(Cell::new(2, 2)));
        assert_eq!(g.position(AgentId(0)), None);
        assert_eq!(g.remove(AgentId(0)).unwrap_err(), GridError::NotPlaced(AgentId(0)));
    }

    #[test]
    fn iter_lists_every_placement() {
        let mut g = MultiGrid::new(4, 4);
        g.place(Occupant::airport(AgentId(0)), Cell::new(0, 0)).unwrap();
        g.place(Occupant::plane(AgentId(2)), Cell::new(3, 1)).unwrap();
        let all: Vec<_> = g.iter().collect();
        assert_eq!(
            all,
            vec![
                (Occupant::airport(AgentId(0)), Cell::new(0, 0)),
                (Occupant::plane(AgentId(2)), Cell::new(3, 1)),
            ]
        );
    }
}

#[cfg(test)]
mod neighbors {
    use at_core::{Cell, Neighborhood};

    use crate::MultiGrid;

    #[test]
    fn interior_von_neumann() {
        let g = MultiGrid::new(5, 5);
        let n = g.neighbors(Cell::new(2, 2), Neighborhood::VonNeumann, false);
        assert_eq!(
            n,
            vec![Cell::new(1, 2), Cell::new(2, 1), Cell::new(2, 3), Cell::new(3, 2)]
        );
    }

    #[test]
    fn interior_moore() {
        let g = MultiGrid::new(5, 5);
        let n = g.neighbors(Cell::new(2, 2), Neighborhood::Moore, false);
        assert_eq!(n.len(), 8);
        assert!(!n.contains(&Cell::new(2, 2)));
    }

    #[test]
    fn include_center() {
        let g = MultiGrid::new(5, 5);
        let n = g.neighbors(Cell::new(2, 2), Neighborhood::Moore, true);
        assert_eq!(n.len(), 9);
        assert!(n.contains(&Cell::new(2, 2)));
    }

    #[test]
    fn corner_has_no_wraparound() {
        let g = MultiGrid::new(5, 5);
        let n = g.neighbors(Cell::new(0, 0), Neighborhood::VonNeumann, false);
        assert_eq!(n, vec![Cell::new(0, 1), Cell::new(1, 0)]);

        let n = g.neighbors(Cell::new(4, 4), Neighborhood::Moore, false);
        assert_eq!(n, vec![Cell::new(3, 3), Cell::new(3, 4), Cell::new(4, 3)]);
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        let g = MultiGrid::new(1, 1);
        assert!(g.neighbors(Cell::new(0, 0), Neighborhood::Moore, false).is_empty());
    }
}
