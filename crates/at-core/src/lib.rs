//! `at-core`: foundational types for the air-traffic grid simulation.
//!
//! This crate is a dependency of every other `at-*` crate.  It intentionally
//! has no `at-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module           | Contents                                              |
//! |------------------|-------------------------------------------------------|
//! | [`ids`]          | `AgentId`                                             |
//! | [`cell`]         | `Cell` grid coordinate                                |
//! | [`kind`]         | `AgentKind` occupant tag, `Neighborhood` mode         |
//! | [`time`]         | `Tick`, `SimClock` (tick-of-day + day counter)        |
//! | [`params`]       | `ModelParams` and validation                          |
//! | [`rng`]          | `AgentRng` (per-agent), `SimRng` (global)             |
//! | [`error`]        | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required to load `ModelParams` from a JSON file.           |

pub mod cell;
pub mod error;
pub mod ids;
pub mod kind;
pub mod params;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use error::{CoreError, CoreResult};
pub use ids::AgentId;
pub use kind::{AgentKind, Neighborhood};
pub use params::ModelParams;
pub use rng::{AgentRng, SimRng};
pub use time::{SimClock, TICKS_PER_DAY, Tick};
