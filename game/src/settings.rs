use std::fs;
use std::io;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::time::Duration;

use engine::graphics::Color;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;
pub const WINDOW_TITLE: &str = "Aim Trainer";
pub const TARGET_FPS: u32 = 60;

pub const TOP_BAR_HEIGHT: u32 = 50;
pub const TARGET_PADDING: u32 = 30;

pub const TARGET_MAX_SIZE: f64 = 30.0;
pub const TARGET_GROWTH_RATE: f64 = 0.2;
pub const SPAWN_INTERVAL_MS: u64 = 400;

pub const LIVES: u32 = 3;

pub const COLOR_BACKGROUND: Color = [0, 25, 40, 255];
pub const COLOR_TARGET_PRIMARY: Color = [255, 0, 0, 255];
pub const COLOR_TARGET_SECONDARY: Color = [255, 255, 255, 255];
pub const COLOR_TOP_BAR: Color = [190, 190, 190, 255];
pub const COLOR_TOP_BAR_TEXT: Color = [0, 0, 0, 255];
pub const COLOR_END_SCREEN_TEXT: Color = [255, 255, 255, 255];

/// Environment variable naming an optional JSON settings file.
pub const SETTINGS_PATH_ENV: &str = "AIM_TRAINER_SETTINGS";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub fps: u32,
    pub vsync: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            title: WINDOW_TITLE.to_string(),
            fps: TARGET_FPS,
            vsync: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LayoutSettings {
    pub top_bar_height: u32,
    pub target_padding: u32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            top_bar_height: TOP_BAR_HEIGHT,
            target_padding: TARGET_PADDING,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TargetSettings {
    pub max_size: f64,
    /// Radius change per frame, both while growing and while shrinking.
    pub growth_rate: f64,
    pub spawn_interval_ms: u64,
}

impl Default for TargetSettings {
    fn default() -> Self {
        Self {
            max_size: TARGET_MAX_SIZE,
            growth_rate: TARGET_GROWTH_RATE,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
        }
    }
}

impl TargetSettings {
    pub fn spawn_interval(&self) -> Duration {
        Duration::from_millis(self.spawn_interval_ms)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RuleSettings {
    pub lives: u32,
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self { lives: LIVES }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ColorSettings {
    pub background: Color,
    pub target_primary: Color,
    pub target_secondary: Color,
    pub top_bar: Color,
    pub top_bar_text: Color,
    pub end_screen_text: Color,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            background: COLOR_BACKGROUND,
            target_primary: COLOR_TARGET_PRIMARY,
            target_secondary: COLOR_TARGET_SECONDARY,
            top_bar: COLOR_TOP_BAR,
            top_bar_text: COLOR_TOP_BAR_TEXT,
            end_screen_text: COLOR_END_SCREEN_TEXT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameSettings {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub window: WindowSettings,
    #[serde(default)]
    pub layout: LayoutSettings,
    #[serde(default)]
    pub targets: TargetSettings,
    #[serde(default)]
    pub rules: RuleSettings,
    #[serde(default)]
    pub colors: ColorSettings,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            version: default_version(),
            window: WindowSettings::default(),
            layout: LayoutSettings::default(),
            targets: TargetSettings::default(),
            rules: RuleSettings::default(),
            colors: ColorSettings::default(),
        }
    }
}

fn default_version() -> u32 {
    1
}

fn positive_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

impl GameSettings {
    /// Replaces values the game loop can't run with.
    pub fn sanitized(mut self) -> Self {
        self.version = default_version();
        self.window.width = self.window.width.max(1);
        self.window.height = self.window.height.max(1);
        self.window.fps = self.window.fps.max(1);
        self.layout.top_bar_height = self.layout.top_bar_height.min(self.window.height);
        self.layout.target_padding = self
            .layout
            .target_padding
            .min(self.window.width.min(self.window.height) / 2);
        self.targets.max_size = positive_or(self.targets.max_size, TARGET_MAX_SIZE);
        self.targets.growth_rate = positive_or(self.targets.growth_rate, TARGET_GROWTH_RATE);
        self.targets.spawn_interval_ms = self.targets.spawn_interval_ms.max(1);
        self.rules.lives = self.rules.lives.max(1);
        self
    }

    /// Inclusive ranges a new target's centre is drawn from: inside the padding on
    /// every edge and below the top bar. Collapses to a single point when the padding
    /// doesn't fit.
    pub fn spawn_bounds(&self) -> (RangeInclusive<i32>, RangeInclusive<i32>) {
        let pad = to_coord(self.layout.target_padding);
        let width = to_coord(self.window.width);
        let height = to_coord(self.window.height);

        let x_min = pad;
        let x_max = width.saturating_sub(pad).max(x_min);
        let y_min = pad.saturating_add(to_coord(self.layout.top_bar_height));
        let y_max = height.saturating_sub(pad).max(y_min);
        (x_min..=x_max, y_min..=y_max)
    }
}

fn to_coord(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Where settings come from. Without an explicit path the compiled-in defaults apply.
#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    path: Option<PathBuf>,
}

impl SettingsStore {
    pub fn from_env() -> Self {
        Self {
            path: std::env::var_os(SETTINGS_PATH_ENV).map(PathBuf::from),
        }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn load(&self) -> Result<GameSettings, SettingsError> {
        let Some(path) = &self.path else {
            return Ok(GameSettings::default());
        };
        let bytes = fs::read(path).map_err(|source| SettingsError::Io {
            path: path.clone(),
            source,
        })?;
        let settings = serde_json::from_slice::<GameSettings>(&bytes).map_err(|source| {
            SettingsError::Parse {
                path: path.clone(),
                source,
            }
        })?;
        info!("loaded settings from {}", path.display());
        Ok(settings.sanitized())
    }

    pub fn load_or_default(&self) -> GameSettings {
        self.load().unwrap_or_else(|err| {
            warn!("{err}; using default settings");
            GameSettings::default()
        })
    }
}
