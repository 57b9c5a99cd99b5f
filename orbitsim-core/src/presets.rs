//! Named starting configurations
//!
//! Presets are literal data. Each one carries the constants it was tuned for
//! so a driver can start it without extra flags.

use crate::body::{Body, Tag};
use crate::engine::{Gravity, World, G_PHYSICAL, G_SIMPLIFIED};
use crate::error::ConfigError;
use glam::DVec2;
use log::debug;

/// Astronomical unit in metres
pub const AU: f64 = 1.496e11;

/// One day in seconds
pub const DAY: f64 = 86_400.0;

pub const TAG_STAR: Tag = Tag(1);
pub const TAG_BLUE: Tag = Tag(2);
pub const TAG_GREEN: Tag = Tag(3);
pub const TAG_NEW: Tag = Tag(4);
pub const TAG_RED: Tag = Tag(5);
pub const TAG_GREY: Tag = Tag(6);

#[derive(Debug, Clone, Copy)]
pub struct BodySpec {
    pub name: &'static str,
    pub mass: f64,
    pub pos: (f64, f64),
    pub vel: (f64, f64),
    pub radius: f64,
    pub tag: Tag,
}

impl BodySpec {
    pub fn build(&self) -> Result<Body, ConfigError> {
        Body::new(
            self.name,
            self.mass,
            DVec2::new(self.pos.0, self.pos.1),
            DVec2::new(self.vel.0, self.vel.1),
            self.radius,
            self.tag,
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub g: f64,
    pub dt: f64,
    pub zoom: f64,
    pub bodies: &'static [BodySpec],
}

impl Preset {
    pub fn gravity(&self) -> Gravity {
        Gravity {
            g: self.g,
            softening: 0.0,
        }
    }

    pub fn bodies(&self) -> Result<Vec<Body>, ConfigError> {
        self.bodies.iter().map(BodySpec::build).collect()
    }

    pub fn world(&self) -> Result<World, ConfigError> {
        debug!("loading preset '{}'", self.name);
        Ok(World::with_bodies(self.gravity(), self.bodies()?))
    }
}

const SUN_PLANETS: &[BodySpec] = &[
    BodySpec {
        name: "Sun",
        mass: 1000.0,
        pos: (0.0, 0.0),
        vel: (0.0, 0.0),
        radius: 5.0,
        tag: TAG_STAR,
    },
    BodySpec {
        name: "Planet1",
        mass: 1.0,
        pos: (50.0, 0.0),
        vel: (0.0, 3.5),
        radius: 3.0,
        tag: TAG_BLUE,
    },
    BodySpec {
        name: "Planet2",
        mass: 2.0,
        pos: (100.0, 0.0),
        vel: (0.0, 2.5),
        radius: 4.0,
        tag: TAG_GREEN,
    },
];

const SUN_PLANET_MOON: &[BodySpec] = &[
    BodySpec {
        name: "Sun",
        mass: 1000.0,
        pos: (0.0, 0.0),
        vel: (0.0, 0.0),
        radius: 3.0,
        tag: TAG_STAR,
    },
    BodySpec {
        name: "Planet",
        mass: 1.0,
        pos: (10.0, 0.0),
        vel: (0.0, 3.5),
        radius: 1.0,
        tag: TAG_BLUE,
    },
    BodySpec {
        name: "Moon",
        mass: 0.1,
        pos: (11.0, 0.0),
        vel: (0.0, 4.2),
        radius: 1.0,
        tag: TAG_GREY,
    },
];

// Masses, mean distances and orbital speeds from NASA planetary fact sheets
const INNER_SOLAR: &[BodySpec] = &[
    BodySpec {
        name: "Sun",
        mass: 1.989e30,
        pos: (0.0, 0.0),
        vel: (0.0, 0.0),
        radius: 0.1 * AU,
        tag: TAG_STAR,
    },
    BodySpec {
        name: "Mercury",
        mass: 3.30e23,
        pos: (0.387 * AU, 0.0),
        vel: (0.0, -47.4e3),
        radius: 0.0,
        tag: TAG_GREY,
    },
    BodySpec {
        name: "Venus",
        mass: 4.87e24,
        pos: (0.723 * AU, 0.0),
        vel: (0.0, -35.0e3),
        radius: 0.0,
        tag: TAG_RED,
    },
    BodySpec {
        name: "Earth",
        mass: 5.972e24,
        pos: (-AU, 0.0),
        vel: (0.0, 29.8e3),
        radius: 0.0,
        tag: TAG_BLUE,
    },
    BodySpec {
        name: "Mars",
        mass: 6.42e23,
        pos: (-1.524 * AU, 0.0),
        vel: (0.0, 24.1e3),
        radius: 0.0,
        tag: TAG_RED,
    },
];

static PRESETS: &[Preset] = &[
    Preset {
        name: "empty",
        description: "No bodies; add them with the form",
        g: G_SIMPLIFIED,
        dt: 0.1,
        zoom: 1.0,
        bodies: &[],
    },
    Preset {
        name: "sun-planet",
        description: "A heavy sun with two light planets",
        g: G_SIMPLIFIED,
        dt: 0.1,
        zoom: 1.0,
        bodies: SUN_PLANETS,
    },
    Preset {
        name: "sun-planet-moon",
        description: "Sun, planet and a moon on a tight orbit",
        g: G_SIMPLIFIED,
        dt: 0.02,
        zoom: 2.0,
        bodies: SUN_PLANET_MOON,
    },
    Preset {
        name: "inner-solar",
        description: "Sun to Mars in SI units, one day per step",
        g: G_PHYSICAL,
        dt: DAY,
        zoom: 10.0 / AU,
        bodies: INNER_SOLAR,
    },
];

pub fn presets() -> &'static [Preset] {
    PRESETS
}

pub fn preset(name: &str) -> Result<&'static Preset, ConfigError> {
    PRESETS
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))
}
