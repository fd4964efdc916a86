//! Simulation runner and result recording.

use crate::error::SimResult;
use crate::step::{StepStatus, update_tank};
use hs_components::{Pipe, Pump, Tank};
use hs_core::numeric::{ensure_non_negative, ensure_positive};
use hs_core::units::{Length, Power, Time, Velocity, VolumeRate, s};

/// Options for simulation runs.
#[derive(Clone, Debug)]
pub struct SimOptions {
    /// Fixed time step (seconds)
    pub dt: f64,
    /// Ticks are emitted while `t < duration` (seconds)
    pub duration: f64,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            dt: 1.0,
            duration: 60.0,
        }
    }
}

impl SimOptions {
    pub fn validate(&self) -> SimResult<()> {
        ensure_positive(self.dt, "dt must be positive")?;
        ensure_non_negative(self.duration, "duration must be non-negative")?;
        Ok(())
    }
}

/// One simulated tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepRecord {
    /// Start time of the tick
    pub time: Time,
    pub water_level: Length,
    pub flow_rate: VolumeRate,
    pub pump_power: Power,
    pub pipe_velocity: Velocity,
    pub head_loss: Length,
    pub status: StepStatus,
}

/// Record of simulation results.
#[derive(Clone, Debug, Default)]
pub struct SimRecord {
    pub records: Vec<StepRecord>,
}

/// Lazy fixed-step run over an owned pump, pipe and tank.
///
/// Yields one record per tick at `t = k · dt` for every `k` with `t < duration`.
/// The entities are mutated in place, so a run cannot be restarted; recover
/// them with [`SimRun::into_parts`]. After an error the iterator is exhausted.
#[derive(Debug)]
pub struct SimRun {
    pump: Pump,
    pipe: Pipe,
    tank: Tank,
    opts: SimOptions,
    step: usize,
    last_status: Option<StepStatus>,
    failed: bool,
}

/// Start a fixed-step simulation.
///
/// # Errors
/// `InvalidArg` if `dt` is not positive or `duration` is negative.
pub fn run_sim(pump: Pump, pipe: Pipe, tank: Tank, opts: &SimOptions) -> SimResult<SimRun> {
    opts.validate()?;

    tracing::debug!(
        dt = opts.dt,
        duration = opts.duration,
        flow_rate = pump.flow_rate().value,
        head = pump.head().value,
        "starting simulation"
    );

    Ok(SimRun {
        pump,
        pipe,
        tank,
        opts: opts.clone(),
        step: 0,
        last_status: None,
        failed: false,
    })
}

impl SimRun {
    pub fn pump(&self) -> &Pump {
        &self.pump
    }

    pub fn pipe(&self) -> &Pipe {
        &self.pipe
    }

    pub fn tank(&self) -> &Tank {
        &self.tank
    }

    /// Number of ticks emitted so far.
    pub fn steps_taken(&self) -> usize {
        self.step
    }

    /// Drain the remaining ticks into a record.
    pub fn run_to_end(&mut self) -> SimResult<SimRecord> {
        let records = self.by_ref().collect::<SimResult<Vec<_>>>()?;
        Ok(SimRecord { records })
    }

    /// Give back the entities in their current state.
    pub fn into_parts(self) -> (Pump, Pipe, Tank) {
        (self.pump, self.pipe, self.tank)
    }

    fn note_status(&mut self, t: f64, status: StepStatus) {
        if self.last_status == Some(status) {
            return;
        }
        match status {
            StepStatus::Overflow => tracing::info!(t, "tank full, overflow"),
            StepStatus::PumpInsufficient => {
                tracing::debug!(t, "pump head below pipe loss, no flow")
            }
            StepStatus::Nominal => tracing::debug!(t, "filling"),
        }
        self.last_status = Some(status);
    }
}

impl Iterator for SimRun {
    type Item = SimResult<StepRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let t = self.step as f64 * self.opts.dt;
        if t >= self.opts.duration {
            return None;
        }

        let dt = s(self.opts.dt);
        let outcome = match update_tank(&mut self.tank, &mut self.pump, &self.pipe, dt) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(t, error = %e, "simulation step failed");
                self.failed = true;
                return Some(Err(e));
            }
        };
        self.step += 1;

        tracing::trace!(
            t,
            water_level = outcome.water_level.value,
            pump_power = outcome.pump_power.value,
            status = %outcome.status,
            "tick"
        );
        self.note_status(t, outcome.status);

        Some(Ok(StepRecord {
            time: s(t),
            water_level: outcome.water_level,
            flow_rate: outcome.flow_rate,
            pump_power: outcome.pump_power,
            pipe_velocity: outcome.pipe_velocity,
            head_loss: outcome.head_loss,
            status: outcome.status,
        }))
    }
}
