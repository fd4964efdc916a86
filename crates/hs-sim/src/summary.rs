//! Aggregate figures over a run, built up one record at a time.

use crate::sim::StepRecord;
use crate::step::StepStatus;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunSummary {
    pub steps: usize,
    /// Time of the last tick (s)
    pub final_time_s: f64,
    /// Water level after the last tick (m)
    pub final_water_level_m: f64,
    /// Time of the first tick that reported overflow (s)
    pub first_overflow_s: Option<f64>,
    pub stalled_steps: usize,
    pub peak_power_w: f64,
}

impl RunSummary {
    /// Folds one more tick into the summary.
    pub fn record(&mut self, r: &StepRecord) {
        self.steps += 1;
        self.final_time_s = r.time.value;
        self.final_water_level_m = r.water_level.value;
        match r.status {
            StepStatus::Overflow if self.first_overflow_s.is_none() => {
                self.first_overflow_s = Some(r.time.value);
            }
            StepStatus::PumpInsufficient => self.stalled_steps += 1,
            _ => {}
        }
        self.peak_power_w = self.peak_power_w.max(r.pump_power.value);
    }

    pub fn from_records(records: &[StepRecord]) -> Self {
        let mut summary = Self::default();
        for r in records {
            summary.record(r);
        }
        summary
    }
}
