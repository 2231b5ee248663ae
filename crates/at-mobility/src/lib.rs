//! `at-mobility`: how a plane picks its next cell.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`policy`]  | `MovementPolicy` trait, `RandomWalk` default policy               |
//! | [`engine`]  | `step_agent`: apply a policy's choice to the grid                |
//! | [`outcome`] | `MoveOutcome`: what happened to the agent this tick              |
//! | [`error`]   | `MobilityError`, `MobilityResult<T>`                              |
//!
//! # Movement model (one cell per tick)
//!
//! Planes do not path-find.  Every tick a flying plane that is not on its
//! destination asks the policy for one adjacent cell:
//!
//! 1. The candidate set is the in-bounds neighborhood of the current cell
//!    (4- or 8-connected, center excluded).
//! 2. The policy draws from it **with replacement**, at most as many times
//!    as there are candidates.  A draw is rejected when the cell holds a
//!    plane and no airport; the first accepted draw wins.
//! 3. If every draw is rejected the plane stays put for the tick, even if
//!    some free neighbor was never drawn.
//!
//! Airports may host any number of planes, so a cell with an airport is
//! always acceptable.

pub mod engine;
pub mod error;
pub mod outcome;
pub mod policy;


pub use engine::step_agent;
pub use error::{MobilityError, MobilityResult};
pub use outcome::MoveOutcome;
pub use policy::{MovementPolicy, RandomWalk, accepts};
