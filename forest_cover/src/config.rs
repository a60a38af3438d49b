//! Environment configuration and constants.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::forest::ViewMode;

const DEFAULT_DATA_PATH: &str = "assets/forest_cover.json";
const DEFAULT_AXIS_THRESHOLD: f32 = 0.5;
const DEFAULT_COOLDOWN_MS: u64 = 500;

/// Which hand holds the controller that steers the year.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Handedness {
    Left,
    #[default]
    Right,
}

impl FromStr for Handedness {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Self::Left),
            "right" | "r" => Ok(Self::Right),
            other => Err(format!("expected left or right, got {other:?}")),
        }
    }
}

/// Controller polling thresholds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputTuning {
    pub handedness: Handedness,
    /// Stick deflection (0..1) that counts as a year step.
    pub axis_threshold: f32,
    /// Minimum time between two triggers from the same control.
    pub cooldown: Duration,
}

impl Default for InputTuning {
    fn default() -> Self {
        Self {
            handedness: Handedness::Right,
            axis_threshold: DEFAULT_AXIS_THRESHOLD,
            cooldown: Duration::from_millis(DEFAULT_COOLDOWN_MS),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    pub data_path: PathBuf,
    /// Seed for tree placement; `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub mode: ViewMode,
    pub input: InputTuning,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            seed: None,
            mode: ViewMode::Desktop,
            input: InputTuning::default(),
        }
    }
}

/// Reads `.env` (if any) and then the `FOREST_*` variables.
pub fn viewer_config() -> ViewerConfig {
    let _ = dotenvy::dotenv();
    viewer_config_from_env()
}

/// Builds the config from `FOREST_*` variables. Invalid values fall back to the
/// default with a message on stderr; logging is not up yet at this point.
pub fn viewer_config_from_env() -> ViewerConfig {
    let defaults = ViewerConfig::default();

    let data_path = std::env::var("FOREST_DATA_PATH")
        .ok()
        .filter(|raw| !raw.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or(defaults.data_path);

    let seed = parsed_env::<u64>("FOREST_SEED");

    let mode = match std::env::var("FOREST_IMMERSIVE") {
        Ok(raw) if is_truthy(&raw) => ViewMode::Immersive,
        _ => ViewMode::Desktop,
    };

    let handedness = parsed_env::<Handedness>("FOREST_HANDEDNESS")
        .unwrap_or(defaults.input.handedness);

    let axis_threshold = match parsed_env::<f32>("FOREST_AXIS_THRESHOLD") {
        Some(t) if t > 0.0 && t < 1.0 => t,
        Some(t) => {
            eprintln!("canopy: FOREST_AXIS_THRESHOLD must be in (0, 1), got {t}");
            defaults.input.axis_threshold
        }
        None => defaults.input.axis_threshold,
    };

    let cooldown = parsed_env::<u64>("FOREST_INPUT_COOLDOWN_MS")
        .map(Duration::from_millis)
        .unwrap_or(defaults.input.cooldown);

    ViewerConfig {
        data_path,
        seed,
        mode,
        input: InputTuning {
            handedness,
            axis_threshold,
            cooldown,
        },
    }
}

fn parsed_env<T>(key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(err) => {
            eprintln!("canopy: invalid {key} {raw:?}: {err}");
            None
        }
    }
}

fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
