pub mod body;
pub mod config;
pub mod engine;
pub mod error;
pub mod integrator;
pub mod prediction;
pub mod presets;
pub mod projector;
pub mod runtime;

pub use body::{Body, BodyDraft, Tag};
pub use config::SimConfig;
pub use engine::{Gravity, World, G_PHYSICAL, G_SIMPLIFIED};
pub use error::ConfigError;
pub use integrator::{accelerations, step};
pub use prediction::{
    predict, predict_draft, Prediction, PredictionSettings, Trajectory, TrajectoryPoint,
};
pub use presets::{preset, presets, Preset};
pub use projector::{
    rasterize_disc, rasterize_disc_within, to_screen, Camera, Cell, Pan, Viewport,
};
pub use runtime::{
    add_body, body_states, clear, run_steps, step_simulation, BodyState, SimulationContext,
};

pub use glam::DVec2;
