//! `at-agent`: the two kinds of agent and their per-tick rules.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`runway`]    | `Runway`: capacity-bounded admission controller          |
//! | [`airport`]   | `Airport`: fixed cell + one `Runway`                     |
//! | [`plane`]     | `Plane`, `FlightState`, `FlightContext`                   |
//! | [`event`]     | `PlaneEvent`: what a plane did in one phase              |
//! | [`error`]     | `AgentError`, `AgentResult<T>`                            |
//!
//! # Phase contract
//!
//! Every agent exposes `step` and `advance`.  The scheduler (in `at-sim`)
//! calls `step` on everyone, then `advance` on everyone:
//!
//! - `Plane::step` only decrements its countdown or appends a runway request.
//!   It never touches the grid.
//! - `Airport::advance` runs admission for the requests collected so far.
//!   Airports are registered before planes, so this happens before any
//!   plane's `advance` in the same tick.
//! - `Plane::advance` reads its runway slot, transitions state, and moves on
//!   the grid.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public data types.   |

pub mod airport;
pub mod error;
pub mod event;
pub mod plane;
pub mod runway;


pub use airport::Airport;
pub use error::{AgentError, AgentResult};
pub use event::PlaneEvent;
pub use plane::{FlightContext, FlightState, Plane};
pub use runway::Runway;
