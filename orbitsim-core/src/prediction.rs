//! Trajectory preview for a body that has not been added yet
//!
//! Prediction runs on a value copy of the live world. The live world is only
//! ever borrowed immutably, so nothing done here can reach it.

use crate::body::{Body, BodyDraft, Tag};
use crate::engine::World;
use crate::integrator::step;
use glam::DVec2;
use log::trace;

/// How far ahead to look and how densely to record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionSettings {
    pub steps: usize,
    pub dt: f64,
    /// Keep every `stride`-th step; 0 behaves like 1
    pub stride: usize,
}

impl Default for PredictionSettings {
    fn default() -> Self {
        Self {
            steps: 1000,
            dt: 0.1,
            stride: 5,
        }
    }
}

/// One recorded position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryPoint {
    pub step: usize,
    pub time: f64,
    pub pos: DVec2,
}

/// Future path of a single body
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub name: String,
    pub tag: Tag,
    pub points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    pub fn positions(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.points.iter().map(|p| p.pos)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Prediction {
    pub trajectories: Vec<Trajectory>,
    has_candidate: bool,
}

impl Prediction {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.trajectories.is_empty()
    }

    /// Path of the candidate body, if one was predicted
    pub fn candidate(&self) -> Option<&Trajectory> {
        if self.has_candidate {
            self.trajectories.last()
        } else {
            None
        }
    }
}

/// Simulate `live` plus an optional candidate forward without touching `live`
pub fn predict(live: &World, candidate: Option<Body>, settings: PredictionSettings) -> Prediction {
    let mut sim = live.clone();
    let has_candidate = candidate.is_some();
    if let Some(body) = candidate {
        sim.bodies.push(body);
    }

    let stride = settings.stride.max(1);
    let mut trajectories: Vec<Trajectory> = sim
        .bodies
        .iter()
        .map(|b| Trajectory {
            name: b.name.clone(),
            tag: b.tag,
            points: Vec::with_capacity(settings.steps.div_ceil(stride)),
        })
        .collect();

    for i in 0..settings.steps {
        step(&mut sim, settings.dt);

        if i % stride != 0 {
            continue;
        }
        let time = (i + 1) as f64 * settings.dt;
        for (trajectory, body) in trajectories.iter_mut().zip(&sim.bodies) {
            trajectory.points.push(TrajectoryPoint {
                step: i + 1,
                time,
                pos: body.pos,
            });
        }
    }

    trace!(
        "predicted {} bodies over {} steps (stride {})",
        trajectories.len(),
        settings.steps,
        stride
    );

    Prediction {
        trajectories,
        has_candidate,
    }
}

/// Like [`predict`], but starting from form text
///
/// A draft that does not parse into a valid body yields an empty prediction.
pub fn predict_draft(live: &World, draft: &BodyDraft, settings: PredictionSettings) -> Prediction {
    match draft.parse() {
        Ok(body) => predict(live, Some(body), settings),
        Err(e) => {
            trace!("no preview for draft: {}", e);
            Prediction::empty()
        }
    }
}
