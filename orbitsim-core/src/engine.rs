use crate::body::Body;
use crate::error::ConfigError;
use glam::DVec2;
use log::debug;

/// Gravitational constant with every mass and distance set to convenient units
pub const G_SIMPLIFIED: f64 = 1.0;

/// Gravitational constant in SI units (m³ kg⁻¹ s⁻²)
pub const G_PHYSICAL: f64 = 6.67430e-11;

/// Newtonian force model
///
/// `softening` is a length whose square is added to the squared distance in
/// the denominator. Zero gives the plain inverse-square law.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gravity {
    pub g: f64,
    pub softening: f64,
}

impl Gravity {
    pub fn new(g: f64, softening: f64) -> Result<Self, ConfigError> {
        if !g.is_finite() {
            return Err(ConfigError::InvalidGravity(format!(
                "gravitational constant must be finite, got {}",
                g
            )));
        }
        if !(softening.is_finite() && softening >= 0.0) {
            return Err(ConfigError::InvalidGravity(format!(
                "softening must be a non-negative length, got {}",
                softening
            )));
        }
        Ok(Self { g, softening })
    }

    pub fn simplified() -> Self {
        Self {
            g: G_SIMPLIFIED,
            softening: 0.0,
        }
    }

    pub fn physical() -> Self {
        Self {
            g: G_PHYSICAL,
            softening: 0.0,
        }
    }

    /// Force exerted on `a` by `b`
    ///
    /// Coincident bodies exert no force on each other, softened or not.
    pub fn force(&self, a: &Body, b: &Body) -> DVec2 {
        let r = b.pos - a.pos;
        let dist_sq = r.length_squared();
        if dist_sq == 0.0 {
            return DVec2::ZERO;
        }

        let dist = dist_sq.sqrt();
        let force_mag = self.g * a.mass() * b.mass() / (dist_sq + self.softening * self.softening);
        r / dist * force_mag
    }
}

impl Default for Gravity {
    fn default() -> Self {
        Self::simplified()
    }
}

/// The live body set and the force law acting on it
#[derive(Debug, Clone)]
pub struct World {
    pub bodies: Vec<Body>,
    pub gravity: Gravity,
}

impl World {
    pub fn new(gravity: Gravity) -> Self {
        Self {
            bodies: Vec::new(),
            gravity,
        }
    }

    pub fn with_bodies(gravity: Gravity, bodies: Vec<Body>) -> Self {
        debug!("world created with {} bodies, G = {}", bodies.len(), gravity.g);
        Self { bodies, gravity }
    }

    pub fn push(&mut self, body: Body) {
        debug!(
            "adding body '{}' (mass {}, pos {:?}, vel {:?})",
            body.name, body.mass(), body.pos, body.vel
        );
        self.bodies.push(body);
    }

    pub fn clear(&mut self) {
        debug!("clearing {} bodies", self.bodies.len());
        self.bodies.clear();
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Net acceleration on the body at `body_idx` from every other body
    pub fn compute_acceleration(&self, body_idx: usize) -> DVec2 {
        let body = &self.bodies[body_idx];
        let mut total = DVec2::ZERO;

        for (other_idx, other) in self.bodies.iter().enumerate() {
            if other_idx == body_idx {
                continue;
            }
            total += self.gravity.force(body, other);
        }

        total / body.mass()
    }

    pub fn total_momentum(&self) -> DVec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// Pairwise gravitational potential energy, coincident pairs skipped
    pub fn potential_energy(&self) -> f64 {
        let mut energy = 0.0;
        for (i, a) in self.bodies.iter().enumerate() {
            for b in &self.bodies[i + 1..] {
                let dist_sq = a.pos.distance_squared(b.pos);
                if dist_sq == 0.0 {
                    continue;
                }
                let soft_sq = self.gravity.softening * self.gravity.softening;
                energy -= self.gravity.g * a.mass() * b.mass() / (dist_sq + soft_sq).sqrt();
            }
        }
        energy
    }

    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy() + self.potential_energy()
    }

    pub fn center_of_mass(&self) -> Option<DVec2> {
        if self.bodies.is_empty() {
            return None;
        }
        let total_mass: f64 = self.bodies.iter().map(Body::mass).sum();
        let weighted: DVec2 = self.bodies.iter().map(|b| b.pos * b.mass()).sum();
        Some(weighted / total_mass)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(Gravity::default())
    }
}
