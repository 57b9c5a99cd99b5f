use crate::error::ConfigError;
use glam::DVec2;

/// Opaque rendering tag carried alongside a body
///
/// The core never interprets it; drivers map it to a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tag(pub u8);

/// A point mass in the simulation
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub name: String,
    mass: f64,
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
    pub tag: Tag,
    accel: DVec2,
}

impl Body {
    /// Build a body, rejecting anything the integrator must never see
    pub fn new(
        name: impl Into<String>,
        mass: f64,
        pos: DVec2,
        vel: DVec2,
        radius: f64,
        tag: Tag,
    ) -> Result<Self, ConfigError> {
        let name = name.into();

        if !(mass.is_finite() && mass > 0.0) {
            return Err(ConfigError::NonPositiveMass { name, mass });
        }
        if !(radius.is_finite() && radius >= 0.0) {
            return Err(ConfigError::InvalidRadius { name, radius });
        }
        if !(pos.is_finite() && vel.is_finite()) {
            return Err(ConfigError::NonFiniteState { name });
        }

        Ok(Self {
            name,
            mass,
            pos,
            vel,
            radius,
            tag,
            accel: DVec2::ZERO,
        })
    }

    /// Mass as validated by `Body::new`
    ///
    /// There is no setter, so a body can never reach the integrator with a
    /// zero or negative mass:
    ///
    /// ```compile_fail
    /// use orbitsim_core::{Body, DVec2, Tag};
    ///
    /// let mut body = Body::new("Moon", 1.0, DVec2::ZERO, DVec2::ZERO, 1.0, Tag(0)).unwrap();
    /// body.mass = 0.0;
    /// ```
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Acceleration computed by the most recent integration step
    pub fn accel(&self) -> DVec2 {
        self.accel
    }

    pub(crate) fn set_accel(&mut self, accel: DVec2) {
        self.accel = accel;
    }

    pub fn momentum(&self) -> DVec2 {
        self.vel * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.vel.length_squared()
    }
}

/// A prospective body as typed into a form, fields still raw text
#[derive(Debug, Clone, PartialEq)]
pub struct BodyDraft {
    pub name: String,
    pub mass: String,
    pub x: String,
    pub y: String,
    pub vx: String,
    pub vy: String,
    pub radius: String,
    pub tag: Tag,
}

impl Default for BodyDraft {
    fn default() -> Self {
        Self {
            name: "NewPlanet".to_string(),
            mass: "1".to_string(),
            x: "200".to_string(),
            y: "0".to_string(),
            vx: "0".to_string(),
            vy: "2".to_string(),
            radius: "2".to_string(),
            tag: Tag::default(),
        }
    }
}

impl BodyDraft {
    /// Parse every field and validate the result as a `Body`
    pub fn parse(&self) -> Result<Body, ConfigError> {
        let mass = parse_field("mass", &self.mass)?;
        let x = parse_field("x", &self.x)?;
        let y = parse_field("y", &self.y)?;
        let vx = parse_field("vx", &self.vx)?;
        let vy = parse_field("vy", &self.vy)?;
        let radius = parse_field("radius", &self.radius)?;

        Body::new(
            self.name.trim(),
            mass,
            DVec2::new(x, y),
            DVec2::new(vx, vy),
            radius,
            self.tag,
        )
    }
}

fn parse_field(field: &'static str, value: &str) -> Result<f64, ConfigError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::InvalidField {
            field,
            value: value.to_string(),
        })
}
