use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::ConfigError;
use crate::text::{Fragment, PivotCalculationMethod};

/// Slowest supported reading speed
pub const MIN_READING_SPEED_WPM: u32 = 100;

/// Fastest supported reading speed
pub const MAX_READING_SPEED_WPM: u32 = 800;

/// Reader settings, loaded from and saved to a JSON file
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// How the highlighted letter of each word is chosen
    #[serde(default)]
    pub pivot_method: PivotCalculationMethod,

    /// Reading speed in words per minute
    #[serde(default = "default_reading_speed_wpm")]
    pub reading_speed_wpm: u32,

    /// How much longer a sentence-ending fragment stays on screen
    #[serde(default = "default_sentence_pause_factor")]
    pub sentence_pause_factor: f32,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Matching filter for the `log` facade
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(ConfigError::UnknownLogLevel(s.to_string())),
        }
    }
}

fn default_reading_speed_wpm() -> u32 {
    300
}

fn default_sentence_pause_factor() -> f32 {
    2.0
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_READING_SPEED_WPM..=MAX_READING_SPEED_WPM).contains(&self.reading_speed_wpm) {
            return Err(ConfigError::ReadingSpeedOutOfRange(self.reading_speed_wpm));
        }

        if !(1.0..=5.0).contains(&self.sentence_pause_factor) {
            return Err(ConfigError::PauseFactorOutOfRange(self.sentence_pause_factor));
        }

        Ok(())
    }

    /// Load a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load a configuration file, writing the defaults first if it is missing
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }

        warn!("Config file not found at '{}', creating default config.", path.display());
        let config = Config::default();
        config.save(path)?;
        Ok(config)
    }

    /// Write the configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write config to file: {}", path.display()))?;

        Ok(())
    }

    /// Display interval of a single word at the configured speed
    pub fn word_interval(&self) -> Duration {
        Duration::from_secs_f64(60.0 / f64::from(self.reading_speed_wpm.max(1)))
    }

    /// Display interval of `fragment`, stretched at the end of a sentence
    pub fn fragment_duration(&self, fragment: &Fragment) -> Duration {
        let interval = self.word_interval();
        if fragment.is_end_of_sentence() {
            interval.mul_f64(f64::from(self.sentence_pause_factor.max(1.0)))
        } else {
            interval
        }
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            pivot_method: PivotCalculationMethod::default(),
            reading_speed_wpm: default_reading_speed_wpm(),
            sentence_pause_factor: default_sentence_pause_factor(),
            log_level: LogLevel::default(),
        }
    }
}
