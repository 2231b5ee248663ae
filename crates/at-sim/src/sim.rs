//! The `Sim` struct: scheduler + world + day/run control.

use at_core::{ModelParams, SimClock};
use at_mobility::{MovementPolicy, RandomWalk};
use tracing::info;

use crate::{Scheduler, SimObserver, SimResult, TickSummary, World};

/// One simulation run.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: MovementPolicy = RandomWalk> {
    /// Parameters the run was built from.
    pub params: ModelParams,

    /// Registration order and clock.
    pub scheduler: Scheduler,

    /// Grid, airports, planes.
    pub world: World<P>,

    /// Cleared once the configured number of days has elapsed.
    pub running: bool,
}

impl<P: MovementPolicy> Sim<P> {
    #[inline]
    pub fn clock(&self) -> &SimClock {
        &self.scheduler.clock
    }

    /// Total registered agents: the per-tick scalar metric.
    #[inline]
    pub fn agent_count(&self) -> usize {
        self.scheduler.agent_count()
    }

    /// Run until the day limit clears `running`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.running {
            self.step(observer)?;
        }
        info!(steps = %self.clock().steps, days = self.clock().day, "run complete");
        observer.on_sim_end(self.clock().steps);
        Ok(())
    }

    /// Run exactly `n` ticks, ignoring `running`.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Run one tick, then the day rollover and stop checks.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<TickSummary> {
        let now = self.scheduler.clock.steps;
        observer.on_tick_start(now);

        self.world.begin_tick();
        self.scheduler.step(&mut self.world)?;

        let clock = &mut self.scheduler.clock;
        if clock.rollover() {
            info!(day = clock.day, "day complete");
        }
        if clock.day >= self.params.days {
            self.running = false;
        }

        let summary = self.world.summary(&self.scheduler.clock, now);
        observer.on_tick_end(&summary);
        let interval = self.params.output_interval_ticks;
        if interval > 0 && now.0 % interval == 0 {
            observer.on_snapshot(now, &self.world.view());
        }
        Ok(summary)
    }
}
