//! Grid error type.

use thiserror::Error;

use at_core::{AgentId, Cell};

/// Errors produced by `at-grid`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("cell {0} lies outside the grid")]
    InvalidCoordinate(Cell),

    #[error("cell {0} already holds an airport")]
    DuplicatePlacement(Cell),

    #[error("agent {0} is already on the grid")]
    AlreadyPlaced(AgentId),

    #[error("agent {0} is not on the grid")]
    NotPlaced(AgentId),
}

pub type GridResult<T> = Result<T, GridError>;
