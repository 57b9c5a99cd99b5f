//! Determinism tests - same inputs produce bit-identical outputs

use orbitsim_core::integrator::step;
use orbitsim_core::presets::preset;
use orbitsim_core::runtime::{run_steps, SimulationContext};
use orbitsim_core::tests::test_helpers::state_bits;

#[test]
fn test_preset_runs_are_identical() {
    for name in ["sun-planet", "sun-planet-moon", "inner-solar"] {
        let preset = preset(name).unwrap();
        let mut first = SimulationContext::from_preset(preset).unwrap();
        let mut second = SimulationContext::from_preset(preset).unwrap();

        run_steps(&mut first, 500);
        run_steps(&mut second, 500);

        assert_eq!(
            state_bits(&first.world),
            state_bits(&second.world),
            "preset {} diverged between runs",
            name
        );
    }
}

#[test]
fn test_cloned_world_evolves_identically() {
    let mut world = preset("sun-planet").unwrap().world().unwrap();
    for _ in 0..100 {
        step(&mut world, 0.1);
    }

    let mut copy = world.clone();
    for _ in 0..100 {
        step(&mut world, 0.1);
        step(&mut copy, 0.1);
    }

    assert_eq!(state_bits(&world), state_bits(&copy));
}
