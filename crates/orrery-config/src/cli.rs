//! Command-line argument parsing for the orrery.

use std::path::PathBuf;

use clap::Args;

use crate::Config;

/// Configuration overrides accepted on the command line.
///
/// CLI values override settings loaded from `config.ron`. Binaries flatten
/// this into their own argument struct.
#[derive(Args, Debug, Default)]
pub struct CliArgs {
    /// Starting speed multiplier (must be one of the presets).
    #[arg(long, allow_hyphen_values = true)]
    pub speed: Option<f64>,

    /// Scene units per catalog unit.
    #[arg(long)]
    pub base_scale: Option<f32>,

    /// Camera transition duration in seconds.
    #[arg(long)]
    pub transition_seconds: Option<f32>,

    /// Show orbital guide rings at startup.
    #[arg(long)]
    pub rings: Option<bool>,

    /// Tracing filter, e.g. `debug` or `info,orrery_camera=trace`.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Directory holding `config.ron`.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Overwrite every field the command line named.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(speed) = args.speed {
            self.simulation.default_speed = speed;
        }
        if let Some(scale) = args.base_scale {
            self.simulation.base_scale = scale;
        }
        if let Some(secs) = args.transition_seconds {
            self.focus.transition_seconds = secs;
        }
        if let Some(rings) = args.rings {
            self.display.show_orbit_rings = rings;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
