//! Model construction parameters.
//!
//! Typically filled from CLI flags or a JSON file by the application crate
//! and handed to `at_sim::SimBuilder`.

use crate::{CoreError, CoreResult, Neighborhood};

/// Everything needed to build one simulation run.
///
/// `speed` and `distance` are carried for instrumentation only; the plane
/// state machine moves exactly one cell per tick regardless.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ModelParams {
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
    /// Simulated days before the run stops.
    pub days: u32,
    pub initial_planes: usize,
    pub initial_airports: usize,
    /// Ticks a plane waits on the ground before it starts asking for a runway.
    pub permission_delay: u32,
    /// Average plane speed in km per minute.
    pub speed: f64,
    /// Side length of one grid cell in km.
    pub distance: f64,
    /// Inclusive lower bound for a random airport's runway count.
    pub min_runways: u32,
    /// Inclusive upper bound for a random airport's runway count.
    pub max_runways: u32,
    /// Movement neighborhood given to every plane.
    pub neighborhood: Neighborhood,
    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,
    /// Emit an agent snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            width:                 10,
            height:                10,
            days:                  2,
            initial_planes:        10,
            initial_airports:      5,
            permission_delay:      10,
            speed:                 100.0,
            distance:              100.0,
            min_runways:           1,
            max_runways:           4,
            neighborhood:          Neighborhood::VonNeumann,
            seed:                  42,
            output_interval_ticks: 1,
        }
    }
}

impl ModelParams {
    /// Number of cells on the grid.
    #[inline]
    pub fn cell_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Minutes (ticks) a plane at `speed` needs to cross one cell.
    pub fn ticks_per_cell(&self) -> f64 {
        if self.speed > 0.0 {
            self.distance / self.speed
        } else {
            f64::INFINITY
        }
    }

    /// Reject parameter sets no model can be built from.
    pub fn validate(&self) -> CoreResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CoreError::Config(format!(
                "grid must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if self.days == 0 {
            return Err(CoreError::Config("days must be positive".into()));
        }
        if self.initial_airports as u64 > self.cell_count() {
            return Err(CoreError::Config(format!(
                "{} airports do not fit on a {}x{} grid",
                self.initial_airports, self.width, self.height
            )));
        }
        if self.initial_planes > 0 && self.initial_airports < 2 {
            return Err(CoreError::Config(
                "planes need at least two airports to fly between".into(),
            ));
        }
        if self.min_runways == 0 {
            return Err(CoreError::Config("min_runways must be positive".into()));
        }
        if self.min_runways > self.max_runways {
            return Err(CoreError::Config(format!(
                "min_runways ({}) exceeds max_runways ({})",
                self.min_runways, self.max_runways
            )));
        }
        Ok(())
    }
}
