//! Console table and CSV output for simulation records.

use hs_sim::{RunSummary, StepRecord};
use std::io::{self, Write};

pub const HEADER: &str = "Time(s)   Water Level(m)   Flow Rate(m³/s)   Pump Power(W)";
pub const RULE: &str = "---------------------------------------------------------";

/// Fixed-width table, one row per tick.
pub struct TableReporter<W: Write> {
    out: W,
}

impl<W: Write> TableReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn header(&mut self) -> io::Result<()> {
        writeln!(self.out, "{HEADER}")?;
        writeln!(self.out, "{RULE}")
    }

    /// Status message (if any) followed by the row.
    pub fn record(&mut self, r: &StepRecord) -> io::Result<()> {
        if let Some(msg) = r.status.message() {
            writeln!(self.out, "{msg}")?;
        }
        writeln!(
            self.out,
            "{:.2}       {:.4}          {:.4}          {:.2}",
            r.time.value, r.water_level.value, r.flow_rate.value, r.pump_power.value
        )?;
        self.out.flush()
    }

    pub fn summary(&mut self, s: &RunSummary) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Summary:")?;
        writeln!(self.out, "  Steps:          {}", s.steps)?;
        writeln!(self.out, "  Final level:    {:.4} m", s.final_water_level_m)?;
        match s.first_overflow_s {
            Some(t) => writeln!(self.out, "  First overflow: {t:.2} s")?,
            None => writeln!(self.out, "  First overflow: none")?,
        }
        writeln!(self.out, "  Stalled steps:  {}", s.stalled_steps)?;
        writeln!(self.out, "  Peak power:     {:.2} W", s.peak_power_w)
    }
}

pub const CSV_HEADER: &str =
    "time_s,water_level_m,flow_rate_m3s,pump_power_w,pipe_velocity_mps,head_loss_m,status";

/// Streams records as CSV rows; the header is written on creation.
pub struct CsvWriter<W: Write> {
    out: W,
    rows: usize,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(mut out: W) -> io::Result<Self> {
        writeln!(out, "{CSV_HEADER}")?;
        Ok(Self { out, rows: 0 })
    }

    pub fn record(&mut self, r: &StepRecord) -> io::Result<()> {
        writeln!(
            self.out,
            "{},{},{},{},{},{},{}",
            r.time.value,
            r.water_level.value,
            r.flow_rate.value,
            r.pump_power.value,
            r.pipe_velocity.value,
            r.head_loss.value,
            r.status
        )?;
        self.rows += 1;
        Ok(())
    }

    /// Flushes and returns the number of rows written.
    pub fn finish(mut self) -> io::Result<usize> {
        self.out.flush()?;
        Ok(self.rows)
    }
}
