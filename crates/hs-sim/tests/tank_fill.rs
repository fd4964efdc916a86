//! Integration test: filling the reference tank.
//!
//! Network: Pump --[Pipe]--> Tank
//!
//! Covers:
//! - One record per tick, strict `t < duration` boundary
//! - Nominal filling against the closed-form level rise
//! - Stalled pump (head below pipe loss) never fills the tank
//! - Overflow clamps exactly at the rim and persists

use hs_components::{Pipe, Pump, Tank};
use hs_core::numeric::{Tolerances, nearly_equal};
use hs_core::units::{kgpm3, m, m3ps};
use hs_sim::{RunSummary, SimOptions, StepStatus, run_sim};

fn reference_network(head: f64) -> (Pump, Pipe, Tank) {
    (
        Pump::new(m3ps(0.01), m(head)).unwrap(),
        Pipe::new(m(50.0), m(0.1), 0.015, kgpm3(1000.0)).unwrap(),
        Tank::new(m(5.0), m(1.0)).unwrap(),
    )
}

fn opts(duration: f64) -> SimOptions {
    SimOptions { dt: 1.0, duration }
}

#[test]
fn sixty_second_run_has_sixty_records() {
    let (pump, pipe, tank) = reference_network(10.0);
    let record = run_sim(pump, pipe, tank, &opts(60.0))
        .unwrap()
        .run_to_end()
        .unwrap();

    assert_eq!(record.records.len(), 60);
    for (i, r) in record.records.iter().enumerate() {
        assert_eq!(r.time.value, i as f64);
    }
    assert_eq!(record.records.last().unwrap().time.value, 59.0);
}

#[test]
fn nominal_fill_matches_closed_form() {
    let (pump, pipe, tank) = reference_network(10.0);
    let record = run_sim(pump, pipe, tank, &opts(60.0))
        .unwrap()
        .run_to_end()
        .unwrap();

    let rise = 0.01 / std::f64::consts::PI;
    let first = record.records[0];
    assert_eq!(first.status, StepStatus::Nominal);
    assert!((first.water_level.value - rise).abs() < 1e-12);
    assert!((first.water_level.value - 0.00318).abs() < 1e-5);

    for (i, r) in record.records.iter().enumerate() {
        assert_eq!(r.status, StepStatus::Nominal);
        assert!(nearly_equal(
            r.water_level.value,
            rise * (i + 1) as f64,
            Tolerances::default()
        ));
        assert!(nearly_equal(r.pump_power.value, 981.0, Tolerances::default()));
        assert_eq!(r.flow_rate.value, 0.01);
    }
}

#[test]
fn zero_head_pump_never_fills() {
    let (pump, pipe, tank) = reference_network(0.0);
    let record = run_sim(pump, pipe, tank, &opts(60.0))
        .unwrap()
        .run_to_end()
        .unwrap();

    assert_eq!(record.records.len(), 60);
    for r in &record.records {
        assert_eq!(r.status, StepStatus::PumpInsufficient);
        assert_eq!(r.water_level.value, 0.0);
        assert!(r.head_loss.value > 0.0);
    }

    let summary = RunSummary::from_records(&record.records);
    assert_eq!(summary.stalled_steps, 60);
    assert_eq!(summary.first_overflow_s, None);
}

#[test]
fn long_run_overflows_and_stays_full() {
    let (pump, pipe, tank) = reference_network(10.0);
    let mut run = run_sim(pump, pipe, tank, &opts(6000.0)).unwrap();
    let record = run.run_to_end().unwrap();
    assert_eq!(record.records.len(), 6000);

    let first_full = record
        .records
        .iter()
        .position(|r| r.status == StepStatus::Overflow)
        .expect("tank should overflow");

    // ceil(5 / (0.01/π)) = 1571 ticks, the last of which starts at t = 1570
    assert_eq!(first_full, 1570);
    for r in &record.records[..first_full] {
        assert_eq!(r.status, StepStatus::Nominal);
        assert!(r.water_level.value < 5.0);
    }
    for r in &record.records[first_full..] {
        assert_eq!(r.status, StepStatus::Overflow);
        assert_eq!(r.water_level.value, 5.0);
    }

    let summary = RunSummary::from_records(&record.records);
    assert_eq!(summary.first_overflow_s, Some(1570.0));
    assert_eq!(summary.final_water_level_m, 5.0);

    let (_, _, tank) = run.into_parts();
    assert!(tank.is_full());
}

#[test]
fn caller_can_stop_early() {
    let (pump, pipe, tank) = reference_network(10.0);
    let mut run = run_sim(pump, pipe, tank, &opts(60.0)).unwrap();

    let first_five: Vec<_> = run.by_ref().take(5).collect();
    assert_eq!(first_five.len(), 5);
    assert_eq!(run.steps_taken(), 5);

    let rise = 0.01 / std::f64::consts::PI;
    assert!((run.tank().water_level().value - 5.0 * rise).abs() < 1e-12);
}
