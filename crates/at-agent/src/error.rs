use at_core::{AgentId, Cell};
use at_grid::GridError;
use at_mobility::MobilityError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    /// The admission controller let more planes onto the runways than the
    /// airport has.  Never expected at runtime.
    #[error("airport {airport} has {active} planes on {capacity} runways")]
    CapacityViolation {
        airport:  AgentId,
        active:   usize,
        capacity: u32,
    },

    #[error("plane {plane} needs an airport at {cell} but there is none")]
    NoAirport { plane: AgentId, cell: Cell },

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("movement failed: {0}")]
    Mobility(#[from] MobilityError),
}

pub type AgentResult<T> = Result<T, AgentError>;
