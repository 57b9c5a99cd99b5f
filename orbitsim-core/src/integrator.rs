use crate::engine::World;
use glam::DVec2;
use log::trace;

/// Accelerations for every body, computed from the current positions only
pub fn accelerations(world: &World) -> Vec<DVec2> {
    (0..world.bodies.len())
        .map(|i| world.compute_acceleration(i))
        .collect()
}

/// Step the simulation forward by dt using semi-implicit Euler integration
pub fn step(world: &mut World, dt: f64) {
    if world.bodies.is_empty() {
        return;
    }

    // Every acceleration is computed before any body moves
    let accelerations = accelerations(world);

    // Update velocities and positions (semi-implicit Euler: v += a*dt, then x += v*dt)
    for (body, accel) in world.bodies.iter_mut().zip(accelerations) {
        body.set_accel(accel);
        body.vel += accel * dt;
        body.pos += body.vel * dt;
    }

    trace!("stepped {} bodies by dt = {}", world.bodies.len(), dt);
}
