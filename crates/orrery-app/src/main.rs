//! Headless orrery runner.
//!
//! Steps the simulation at a fixed delta, applies an optional RON input
//! script, and prints one JSON frame snapshot per report interval to stdout.
//!
//! Run with: `cargo run -p orrery-app -- --frames 300 --focus Earth`

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use orrery_app::{AppError, Orrery, Script};
use orrery_config::{CliArgs, Config, default_config_dir};
use orrery_input::InputEvent;
use tracing::{debug, info, warn};

/// CLI arguments for the headless runner.
#[derive(Parser, Debug)]
#[command(name = "orrery", about = "Inner solar system orrery, headless")]
struct RunArgs {
    /// Frames to simulate.
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Seconds per frame.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Body to focus.
    #[arg(long)]
    focus: Option<String>,

    /// Frame at which `--focus` is applied.
    #[arg(long, default_value_t = 0)]
    focus_at: u64,

    /// RON input script of `(frame, event)` steps.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Print a snapshot every N frames (0 prints only the last).
    #[arg(long, default_value_t = 60)]
    report_every: u64,

    /// Re-read `config.ron` every N frames and apply changed camera, focus
    /// and display settings (0 disables).
    #[arg(long, default_value_t = 120)]
    reload_every: u64,

    #[command(flatten)]
    config: CliArgs,
}

fn main() -> Result<(), AppError> {
    let args = RunArgs::parse();

    let config_dir = args
        .config
        .config
        .clone()
        .unwrap_or_else(default_config_dir);
    let mut on_disk = Config::load_or_create(&config_dir)?;
    let mut config = on_disk.clone();
    config.apply_cli_overrides(&args.config);
    config.validate()?;

    orrery_log::init_logging(
        Some(&config_dir.join("logs")),
        cfg!(debug_assertions),
        Some(&config),
    );

    info!("Orrery - headless");
    info!("Config: {}", config_dir.display());
    info!(
        "Speed: {} | Transition: {:.2}s | Rings: {}",
        config.simulation.default_speed,
        config.focus.transition_seconds,
        config.display.show_orbit_rings,
    );

    let mut script = match &args.script {
        Some(path) => Script::load(path)?,
        None => Script::default(),
    };
    if let Some(name) = &args.focus {
        script.push(args.focus_at, InputEvent::Focus(name.clone()));
    }
    info!("Script: {} steps over {} frames", script.len(), args.frames);

    let mut orrery = Orrery::new(&config)?;
    orrery.attach_default_camera();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for frame in 0..args.frames {
        if args.reload_every > 0 && frame > 0 && frame % args.reload_every == 0 {
            match on_disk.reload(&config_dir) {
                Ok(Some(fresh)) => {
                    let mut effective = fresh.clone();
                    effective.apply_cli_overrides(&args.config);
                    match orrery.apply_config(&effective) {
                        Ok(()) => on_disk = fresh,
                        Err(err) => warn!(frame, "reloaded config rejected: {err}"),
                    }
                }
                Ok(None) => {}
                Err(err) => warn!(frame, "config reload failed: {err}"),
            }
        }

        for event in script.events_at(frame) {
            if let Err(err) = orrery.dispatch(event.clone()) {
                debug!(frame, "script event rejected: {err}");
            }
        }

        orrery.step(args.dt);

        let last = frame + 1 == args.frames;
        let due = args.report_every > 0 && (frame + 1) % args.report_every == 0;
        if due || last {
            serde_json::to_writer(&mut out, &orrery.snapshot())?;
            writeln!(out)?;
        }
    }

    let snapshot = orrery.snapshot();
    info!(
        "Done: {} frames, {:.2}s, speed {}, focused {:?}",
        snapshot.frame, snapshot.elapsed, snapshot.speed, snapshot.focused
    );
    Ok(())
}
