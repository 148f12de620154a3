//! Configuration for the fervor event screen.
//!
//! Settings live in `config.toml` under the platform config directory. A
//! missing file means defaults; a malformed or out-of-range one is an error.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use chrono::{DateTime, FixedOffset};
use directories::ProjectDirs;
use fervor_core::{AnimationSpeed, ColorTheme};
use serde::{Deserialize, Serialize};

/// Start of Fervor 2025.
pub const DEFAULT_EVENT_START: &str = "2025-10-19T15:00:00-05:00";

/// Upper bound for `max_blobs`, the background arena size.
pub const MAX_BLOBS_LIMIT: usize = 64;

/// Longest allowed carousel auto-advance period, in seconds.
pub const MAX_AUTO_ADVANCE_SECS: u64 = 3600;

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid event_start {value:?}: {source}")]
    EventStart {
        value: String,
        source: chrono::ParseError,
    },

    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Photo gallery settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Photo folders to draw from.
    pub folders: Vec<String>,
    /// Most photos shown in the carousel.
    pub max_images: usize,
    /// Directory holding `images/<folder>/<file>`. When set, photos whose
    /// file is missing are left out.
    pub assets_root: Option<PathBuf>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            folders: vec!["Fervor-1".to_string(), "Fervor-2".to_string()],
            max_images: 18,
            assets_root: None,
        }
    }
}

/// Carousel timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    /// Seconds between automatic steps.
    pub auto_advance_secs: u64,
    /// Card shown first.
    pub start_index: usize,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            auto_advance_secs: 5,
            start_index: 0,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Countdown target, RFC 3339.
    pub event_start: String,
    pub color_theme: ColorTheme,
    pub animation_speed: AnimationSpeed,
    /// Draw the ambient background.
    pub background: bool,
    /// Most blobs alive at once.
    pub max_blobs: usize,
    pub gallery: GalleryConfig,
    pub carousel: CarouselSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            event_start: DEFAULT_EVENT_START.to_string(),
            color_theme: ColorTheme::default(),
            animation_speed: AnimationSpeed::default(),
            background: true,
            max_blobs: 8,
            gallery: GalleryConfig::default(),
            carousel: CarouselSettings::default(),
        }
    }
}

impl Config {
    /// Platform config directory for fervor.
    pub fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("org", "fervor", "fervor")
    }

    /// Default config file location.
    pub fn default_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) => p,
                None => {
                    tracing::debug!("no config directory, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };

        let config = Self::from_toml(&contents).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.clone(),
                source,
            },
            other => other,
        })?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges and the event timestamp.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.event_start()?;

        if self.max_blobs > MAX_BLOBS_LIMIT {
            return Err(ConfigError::Invalid {
                field: "max_blobs",
                reason: format!("must be at most {MAX_BLOBS_LIMIT}, got {}", self.max_blobs),
            });
        }
        if !(1..=MAX_AUTO_ADVANCE_SECS).contains(&self.carousel.auto_advance_secs) {
            return Err(ConfigError::Invalid {
                field: "carousel.auto_advance_secs",
                reason: format!(
                    "must be between 1 and {MAX_AUTO_ADVANCE_SECS}, got {}",
                    self.carousel.auto_advance_secs
                ),
            });
        }
        if self.gallery.max_images == 0 {
            return Err(ConfigError::Invalid {
                field: "gallery.max_images",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Parsed countdown target.
    pub fn event_start(&self) -> Result<DateTime<FixedOffset>, ConfigError> {
        DateTime::parse_from_rfc3339(&self.event_start).map_err(|source| ConfigError::EventStart {
            value: self.event_start.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_blobs, 8);
        assert_eq!(config.gallery.max_images, 18);
        assert_eq!(config.carousel.auto_advance_secs, 5);
        assert_eq!(
            config.event_start().unwrap().timestamp(),
            DateTime::parse_from_rfc3339("2025-10-19T20:00:00Z")
                .unwrap()
                .timestamp()
        );
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config = Config::from_toml(
            r#"
            color_theme = "magenta"
            animation_speed = "fast"

            [carousel]
            start_index = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.color_theme, ColorTheme::Magenta);
        assert_eq!(config.animation_speed, AnimationSpeed::Fast);
        assert_eq!(config.carousel.start_index, 3);
        assert_eq!(config.carousel.auto_advance_secs, 5);
        assert!(config.background);
    }

    #[test]
    fn test_gallery_section() {
        let config = Config::from_toml(
            r#"
            [gallery]
            folders = ["Fervor-2"]
            max_images = 6
            assets_root = "/srv/fervor/public"
            "#,
        )
        .unwrap();
        assert_eq!(config.gallery.folders, vec!["Fervor-2".to_string()]);
        assert_eq!(config.gallery.max_images, 6);
        assert_eq!(
            config.gallery.assets_root,
            Some(PathBuf::from("/srv/fervor/public"))
        );
    }

    #[test]
    fn test_bad_event_start() {
        let err = Config::from_toml(r#"event_start = "next sunday""#).unwrap_err();
        assert!(matches!(err, ConfigError::EventStart { .. }));
    }

    #[test]
    fn test_out_of_range_values() {
        let err = Config::from_toml("max_blobs = 65").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "max_blobs", .. }));

        let err = Config::from_toml("[carousel]\nauto_advance_secs = 0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "carousel.auto_advance_secs",
                ..
            }
        ));
    }

    #[test]
    fn test_auto_advance_upper_bound() {
        let config = Config::from_toml("[carousel]\nauto_advance_secs = 3600").unwrap();
        assert_eq!(config.carousel.auto_advance_secs, MAX_AUTO_ADVANCE_SECS);

        let err = Config::from_toml("[carousel]\nauto_advance_secs = 18446744073709551").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "carousel.auto_advance_secs",
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_theme_is_parse_error() {
        let err = Config::from_toml(r#"color_theme = "plaid""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_means_defaults() {
        let path = std::env::temp_dir().join("fervor-config-test-does-not-exist.toml");
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("fervor-config-{}.toml", std::process::id()));
        fs::write(&path, "max_blobs = 12\nbackground = false\n").unwrap();
        let config = Config::load(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.max_blobs, 12);
        assert!(!config.background);
    }
}
