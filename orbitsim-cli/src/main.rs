mod form;
mod render;
mod view_app;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use orbitsim_core::presets::{preset, presets, Preset};
use orbitsim_core::runtime::{body_states, step_simulation, SimulationContext};
use orbitsim_core::SimConfig;
use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;
use view_app::ViewApp;

#[derive(Parser)]
#[command(name = "orbitsim")]
#[command(about = "orbitsim - gravitational N-body simulator for the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Step a preset without a display and print body states
    Run {
        /// Preset to start from
        #[arg(short, long, default_value = "sun-planet")]
        preset: String,

        /// Number of steps to simulate
        #[arg(short, long, default_value_t = 1000)]
        steps: u64,

        /// Also print states every N steps
        #[arg(long)]
        every: Option<u64>,

        #[command(flatten)]
        sim: SimArgs,
    },
    /// Open the interactive terminal viewer
    View {
        /// Preset to start from
        #[arg(short, long, default_value = "empty")]
        preset: String,

        /// Write logs here; the terminal belongs to the viewer
        #[arg(long)]
        log_file: Option<PathBuf>,

        /// Input poll timeout per tick, in milliseconds
        #[arg(long, default_value_t = 10)]
        tick_ms: u64,

        #[command(flatten)]
        sim: SimArgs,
    },
    /// List the available presets
    Presets,
}

/// Overrides for the preset's own constants
#[derive(Args)]
struct SimArgs {
    /// Gravitational constant
    #[arg(long)]
    g: Option<f64>,

    /// Time step per tick
    #[arg(long)]
    dt: Option<f64>,

    /// Softening length added to close encounters
    #[arg(long, default_value_t = 0.0)]
    softening: f64,

    /// Initial zoom
    #[arg(long)]
    zoom: Option<f64>,

    /// Steps simulated for the add-body preview
    #[arg(long, default_value_t = 1000)]
    preview_steps: usize,

    /// Keep every Nth preview point
    #[arg(long, default_value_t = 5)]
    preview_stride: usize,
}

impl SimArgs {
    fn to_config(&self, preset: &Preset) -> Result<SimConfig> {
        let config = SimConfig {
            g: self.g.unwrap_or(preset.g),
            softening: self.softening,
            dt: self.dt.unwrap_or(preset.dt),
            preview_steps: self.preview_steps,
            preview_stride: self.preview_stride,
            initial_zoom: self.zoom.unwrap_or(preset.zoom),
            ..SimConfig::default()
        };
        config.validate()?;
        Ok(config)
    }
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            preset,
            steps,
            every,
            sim,
        } => run_headless(&preset, steps, every, &sim),
        Commands::View {
            preset,
            log_file,
            tick_ms,
            sim,
        } => run_view(&preset, log_file, tick_ms, &sim),
        Commands::Presets => {
            list_presets();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn build_context(preset_name: &str, sim: &SimArgs) -> Result<(SimulationContext, SimConfig)> {
    let preset = preset(preset_name)?;
    let config = sim.to_config(preset)?;
    let ctx = SimulationContext::from_config(preset.bodies()?, &config)?;
    Ok((ctx, config))
}

fn run_headless(preset_name: &str, steps: u64, every: Option<u64>, sim: &SimArgs) -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (mut ctx, _config) = build_context(preset_name, sim)?;
    info!(
        "running preset '{}' for {} steps (dt = {})",
        preset_name, steps, ctx.dt
    );

    print_states(&ctx);
    for _ in 0..steps {
        step_simulation(&mut ctx);
        if let Some(n) = every.filter(|n| *n > 0) {
            if ctx.current_step % n == 0 && ctx.current_step != steps {
                print_states(&ctx);
            }
        }
    }
    if steps > 0 {
        print_states(&ctx);
    }

    let momentum = ctx.world.total_momentum();
    println!("momentum = ({:.6e}, {:.6e})", momentum.x, momentum.y);
    println!("energy = {:.6e}", ctx.world.total_energy());
    Ok(())
}

fn print_states(ctx: &SimulationContext) {
    println!("step {} t = {}", ctx.current_step, ctx.time);
    for state in body_states(ctx) {
        println!(
            "  {} {:.6e} {:.6e} {:.6e} {:.6e}",
            state.name, state.pos.x, state.pos.y, state.vel.x, state.vel.y
        );
    }
}

fn run_view(
    preset_name: &str,
    log_file: Option<PathBuf>,
    tick_ms: u64,
    sim: &SimArgs,
) -> Result<()> {
    if let Some(path) = log_file {
        let file = File::create(&path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();
    }

    let (ctx, config) = build_context(preset_name, sim)?;
    info!("opening viewer on preset '{}'", preset_name);

    let mut app = ViewApp::new(ctx, config)?;
    app.run(Duration::from_millis(tick_ms))
}

fn list_presets() {
    for preset in presets() {
        println!(
            "{:<16} {} ({} bodies)",
            preset.name,
            preset.description,
            preset.bodies.len()
        );
    }
}
