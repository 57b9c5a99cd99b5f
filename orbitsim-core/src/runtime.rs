use crate::body::{Body, Tag};
use crate::config::SimConfig;
use crate::engine::World;
use crate::error::ConfigError;
use crate::integrator::step;
use crate::presets::Preset;
use glam::DVec2;
use log::debug;

/// Read-only view of a body for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct BodyState {
    pub name: String,
    pub tag: Tag,
    pub pos: DVec2,
    pub vel: DVec2,
    pub accel: DVec2,
    pub mass: f64,
    pub radius: f64,
}

/// The live simulation: a world, its time step and a clock
#[derive(Debug, Clone)]
pub struct SimulationContext {
    pub world: World,
    pub dt: f64,
    pub current_step: u64,
    pub time: f64,
}

impl SimulationContext {
    pub fn new(world: World, dt: f64) -> Result<Self, ConfigError> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(ConfigError::NonPositiveTimeStep(dt));
        }
        Ok(Self {
            world,
            dt,
            current_step: 0,
            time: 0.0,
        })
    }

    pub fn from_config(bodies: Vec<Body>, config: &SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let world = World::with_bodies(config.gravity()?, bodies);
        Self::new(world, config.dt)
    }

    pub fn from_preset(preset: &Preset) -> Result<Self, ConfigError> {
        Self::new(preset.world()?, preset.dt)
    }
}

/// Advance the live world by one tick
pub fn step_simulation(ctx: &mut SimulationContext) {
    step(&mut ctx.world, ctx.dt);
    ctx.current_step += 1;
    ctx.time += ctx.dt;
}

pub fn run_steps(ctx: &mut SimulationContext, steps: u64) {
    for _ in 0..steps {
        step_simulation(ctx);
    }
}

pub fn body_states(ctx: &SimulationContext) -> Vec<BodyState> {
    ctx.world
        .bodies
        .iter()
        .map(|b| BodyState {
            name: b.name.clone(),
            tag: b.tag,
            pos: b.pos,
            vel: b.vel,
            accel: b.accel(),
            mass: b.mass(),
            radius: b.radius,
        })
        .collect()
}

pub fn add_body(ctx: &mut SimulationContext, body: Body) {
    ctx.world.push(body);
}

/// Remove every body; the clock keeps running
pub fn clear(ctx: &mut SimulationContext) {
    debug!("clearing world at step {}", ctx.current_step);
    ctx.world.clear();
}
