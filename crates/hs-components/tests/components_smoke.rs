//! Integration tests for hs-components with the reference network parameters.

use hs_components::{FillOutcome, FlowRegime, Pipe, Pump, Tank, flow_regime};
use hs_core::units::{kgpm3, m, m3ps, s};

fn reference_network() -> (Pump, Pipe, Tank) {
    let pump = Pump::new(m3ps(0.01), m(10.0)).unwrap();
    let pipe = Pipe::new(m(50.0), m(0.1), 0.015, kgpm3(1000.0)).unwrap();
    let tank = Tank::new(m(5.0), m(1.0)).unwrap();
    (pump, pipe, tank)
}

#[test]
fn reference_pump_overcomes_pipe_loss() {
    let (pump, pipe, _tank) = reference_network();

    let loss = pipe.head_loss(pump.flow_rate()).unwrap();

    assert_eq!(flow_regime(loss.reynolds), FlowRegime::Turbulent);
    assert!(loss.head.value > 0.0, "Loss should be positive");
    assert!(loss.head < pump.head(), "10 m pump should beat the pipe");
}

#[test]
fn zero_head_pump_cannot_overcome_loss() {
    let (_, pipe, _) = reference_network();
    let pump = Pump::new(m3ps(0.01), m(0.0)).unwrap();

    let loss = pipe.head_loss(pump.flow_rate()).unwrap();
    assert!(pump.head() < loss.head);
}

#[test]
fn idle_pump_draws_no_power_and_has_no_loss() {
    let (_, pipe, _) = reference_network();
    let mut pump = Pump::new(m3ps(0.0), m(10.0)).unwrap();

    assert_eq!(pipe.head_loss(pump.flow_rate()).unwrap().head.value, 0.0);
    assert_eq!(pump.refresh_power(&pipe).value, 0.0);
}

#[test]
fn tank_fills_to_rim_in_expected_steps() {
    let (pump, _, mut tank) = reference_network();

    // 5 m at 0.01/π m per second needs ceil(500π) = 1571 steps
    let mut steps = 0;
    loop {
        steps += 1;
        if tank.fill(pump.flow_rate(), s(1.0)).unwrap() == FillOutcome::Overflowed {
            break;
        }
        assert!(steps < 10_000, "Tank never filled");
    }

    assert_eq!(steps, 1571);
    assert_eq!(tank.water_level().value, 5.0);
}
