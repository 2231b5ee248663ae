use at_core::AgentId;
use at_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("agent {0:?} has not been placed on the grid")]
    NotPlaced(AgentId),

    #[error("grid update failed: {0}")]
    Grid(#[from] GridError),
}

pub type MobilityResult<T> = Result<T, MobilityError>;
