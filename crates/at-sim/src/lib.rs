//! `at-sim`: tick loop orchestrator for the air-traffic grid simulation.
//!
//! # Two-phase tick loop
//!
//! ```text
//! while running:
//!   1. Step     for every agent in registration order:
//!                 airport: nothing
//!                 plane:   count down, or queue a runway request
//!   2. Advance  for every agent in the same order:
//!                 airport: admit queued requests up to free runways
//!                 plane:   take off / land / hold / random-walk one cell
//!   3. Clock    time += 1, steps += 1
//!   4. Day      time == 1440 → day += 1, time = 0
//!               day == days  → running = false
//! ```
//!
//! Every `step` sees the world exactly as the previous tick's `advance`
//! phase left it: steps never move anything on the grid and only append to
//! runway queues.  Airports are registered before planes, so admission for
//! a tick is settled before the first plane checks its slot.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `fx-hash`  | FxHash for the cell → airport lookup.                  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use at_core::ModelParams;
//! use at_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(ModelParams::default()).build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod scheduler;
pub mod sim;
pub mod summary;
pub mod world;

#[cfg(test)]
mod tests;

pub use builder::{AirportSpec, PlaneSpec, SimBuilder};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use scheduler::{Activation, AgentRef, Scheduler};
pub use sim::Sim;
pub use summary::TickSummary;
pub use world::{Portrayal, World, WorldView};
