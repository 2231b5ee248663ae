//! `at-grid`: bounded multi-occupancy spatial index.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`grid`]    | `MultiGrid`, `Occupant`                                     |
//! | [`error`]   | `GridError`, `GridResult<T>`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod grid;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult};
pub use grid::{MultiGrid, Occupant};
