//! Orrery settings: camera framing, focus transitions, the speed slider, and
//! display toggles.
//!
//! Settings live in `config.ron` under the platform config directory. Missing
//! sections and fields fall back to defaults, unknown fields are ignored, and
//! command-line flags override whatever was loaded.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CONFIG_FILE_NAME, CameraConfig, Config, DEFAULT_SPEED_PRESETS, DebugConfig, DisplayConfig,
    Easing, FocusConfig, SimulationConfig, default_config_dir,
};
pub use error::ConfigError;
