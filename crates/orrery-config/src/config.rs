//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Speed multipliers offered by the time-speed slider, in slider order.
pub const DEFAULT_SPEED_PRESETS: [f64; 19] = [
    -500.0, -200.0, -100.0, -50.0, -20.0, -10.0, -5.0, -2.0, -1.0, 0.0, 1.0, 2.0, 5.0, 10.0,
    20.0, 50.0, 100.0, 200.0, 500.0,
];

/// Top-level orrery configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Free camera framing.
    pub camera: CameraConfig,
    /// Focus transition and per-body framing.
    pub focus: FocusConfig,
    /// Clock and body scale.
    pub simulation: SimulationConfig,
    /// Presentation toggles.
    pub display: DisplayConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Default (unfocused) camera pose.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Camera position when nothing is focused.
    pub default_position: [f32; 3],
    /// Look-at point when nothing is focused.
    pub default_target: [f32; 3],
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
}

/// Easing curve names accepted in `config.ron`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Quadratic slow start.
    EaseIn,
    /// Quadratic slow end.
    EaseOut,
    /// Quadratic slow start and end.
    #[default]
    EaseInOut,
}

/// Focus transition timing and the camera offsets used to frame a body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FocusConfig {
    /// Duration of every camera transition in seconds.
    pub transition_seconds: f32,
    /// Easing applied to transition progress.
    pub easing: Easing,
    /// Fixed camera offset from the sun's position.
    pub sun_offset: [f32; 3],
    /// Base outward distance from a focused planet.
    pub planet_distance_multiplier: f32,
    /// Extra outward distance per unit of planet size.
    pub planet_size_distance_factor: f32,
    /// Camera height above a focused planet per unit of planet size.
    pub planet_height_multiplier: f32,
}

/// Clock presets and catalog scaling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Ordered speed multipliers selectable by the user.
    pub speed_presets: Vec<f64>,
    /// Speed at startup. Must be one of `speed_presets`.
    pub default_speed: f64,
    /// Scene units per catalog multiplier unit (sizes and orbital radii).
    pub base_scale: f32,
}

/// Presentation toggles owned by the core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show orbital guide rings at startup.
    pub show_orbit_rings: bool,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            default_position: [0.0, 15.0, 30.0],
            default_target: [0.0, 0.0, 0.0],
            fov_degrees: 60.0,
        }
    }
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            transition_seconds: 1.5,
            easing: Easing::EaseInOut,
            sun_offset: [0.0, 2.5, 7.5],
            planet_distance_multiplier: 1.5,
            planet_size_distance_factor: 4.0,
            planet_height_multiplier: 0.5,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            speed_presets: DEFAULT_SPEED_PRESETS.to_vec(),
            default_speed: 1.0,
            base_scale: 0.15,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_orbit_rings: true,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Persistence ---

/// File name of the persisted config inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

fn read_validated(path: &Path) -> Result<Config, ConfigError> {
    let source = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
    let config: Config = ron::from_str(&source).map_err(ConfigError::ParseError)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Read `config.ron` from `config_dir`, writing the defaults there first
    /// if the file does not exist yet.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let path = config_dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            let fresh = Self::default();
            fresh.save(config_dir)?;
            log::info!("Wrote default orrery config to {}", path.display());
            return Ok(fresh);
        }
        let config = read_validated(&path)?;
        log::info!("Orrery config read from {}", path.display());
        Ok(config)
    }

    /// Write as pretty RON, creating `config_dir` if needed.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .enumerate_arrays(false);
        let text = ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;
        std::fs::write(config_dir.join(CONFIG_FILE_NAME), text).map_err(ConfigError::WriteError)
    }

    /// Re-read the file. `Ok(None)` when it still matches `self`.
    ///
    /// An edit that fails validation is an error and leaves the caller on
    /// its current config.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let fresh = read_validated(&config_dir.join(CONFIG_FILE_NAME))?;
        if fresh == *self {
            return Ok(None);
        }
        log::info!(
            "Orrery config changed on disk (speed {}, transition {}s)",
            fresh.simulation.default_speed,
            fresh.focus.transition_seconds
        );
        Ok(Some(fresh))
    }

    /// Reject values that parse but would leave the session unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sim = &self.simulation;
        if sim.speed_presets.is_empty() {
            return Err(ConfigError::Invalid {
                field: "simulation.speed_presets",
                reason: "at least one preset is required".to_string(),
            });
        }
        if !sim.speed_presets.contains(&sim.default_speed) {
            return Err(ConfigError::Invalid {
                field: "simulation.default_speed",
                reason: format!("{} is not one of the speed presets", sim.default_speed),
            });
        }
        if !(sim.base_scale > 0.0) {
            return Err(ConfigError::Invalid {
                field: "simulation.base_scale",
                reason: format!("must be positive, got {}", sim.base_scale),
            });
        }
        if !(self.focus.transition_seconds > 0.0) {
            return Err(ConfigError::Invalid {
                field: "focus.transition_seconds",
                reason: format!("must be positive, got {}", self.focus.transition_seconds),
            });
        }
        Ok(())
    }
}

/// Default config directory: `<platform config dir>/orrery`, or `./orrery`
/// when the platform has none.
pub fn default_config_dir() -> std::path::PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("orrery")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_raw(dir: &Path, text: &str) {
        std::fs::write(dir.join(CONFIG_FILE_NAME), text).unwrap();
    }

    #[test]
    fn test_saved_file_is_readable_ron() {
        let dir = tempfile::tempdir().unwrap();
        Config::default().save(dir.path()).unwrap();
        let text = std::fs::read_to_string(dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert!(text.contains("transition_seconds: 1.5"));
        assert!(text.contains("show_orbit_rings: true"));
        assert!(text.contains("easing: EaseInOut"));
    }

    #[test]
    fn test_missing_section_uses_default() {
        let ron_str = "(camera: (), focus: (), debug: ())";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.simulation, SimulationConfig::default());
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: Config = ron::from_str("(simulation: (default_speed: 0.0))").unwrap();
        assert_eq!(config.simulation.default_speed, 0.0);
        assert_eq!(config.simulation.base_scale, 0.15);
        assert_eq!(config.simulation.speed_presets.len(), 19);
    }

    #[test]
    fn test_unknown_setting_tolerated() {
        let config: Config = ron::from_str("(display: (show_labels: true))").unwrap();
        assert!(config.display.show_orbit_rings);
    }

    #[test]
    fn test_default_presets_match_slider() {
        let sim = SimulationConfig::default();
        assert_eq!(sim.speed_presets.len(), 19);
        assert_eq!(sim.speed_presets[0], -500.0);
        assert_eq!(sim.speed_presets[9], 0.0);
        assert_eq!(sim.speed_presets[10], 1.0);
        assert_eq!(sim.speed_presets[18], 500.0);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_speed_outside_presets_rejected() {
        let mut config = Config::default();
        config.simulation.default_speed = 3.0;
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "simulation.default_speed",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_transition_rejected() {
        let mut config = Config::default();
        config.focus.transition_seconds = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_modified_config_survives_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.simulation.default_speed = 10.0;
        config.display.show_orbit_rings = false;
        config.focus.easing = Easing::EaseOut;

        config.save(dir.path()).unwrap();
        assert_eq!(Config::load_or_create(dir.path()).unwrap(), config);
    }

    #[test]
    fn test_load_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(loaded, Config::default());
        assert!(dir.path().join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        write_raw(dir.path(), "(simulation: (base_scale: -1.0))");
        assert!(matches!(
            Config::load_or_create(dir.path()),
            Err(ConfigError::Invalid { field: "simulation.base_scale", .. })
        ));
    }

    #[test]
    fn test_load_reports_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        write_raw(dir.path(), "(simulation: [");
        assert!(matches!(
            Config::load_or_create(dir.path()),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_reload_picks_up_edit() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();
        write_raw(dir.path(), "(focus: (transition_seconds: 3.0))");

        let fresh = config.reload(dir.path()).unwrap().unwrap();
        assert_eq!(fresh.focus.transition_seconds, 3.0);
    }

    #[test]
    fn test_reload_unchanged_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert!(config.reload(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_reload_rejects_invalid_edit() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        write_raw(dir.path(), "(simulation: (speed_presets: []))");
        assert!(config.reload(dir.path()).is_err());
    }

    #[test]
    fn test_easing_parses_by_name() {
        let config: Config = ron::from_str("(focus: (easing: Linear))").unwrap();
        assert_eq!(config.focus.easing, Easing::Linear);
    }

    #[test]
    fn test_default_config_dir_ends_with_orrery() {
        assert!(default_config_dir().ends_with("orrery"));
    }
}
