//! Playground configuration.
//!
//! Loaded from TOML; every field is optional and falls back to the playground defaults.
//!
//! ```toml
//! analysis_delay_ms = 1500
//! auto_expand = 3
//! initial_language = "python"
//! include_uncategorized = false
//!
//! [geometry]
//! line_height_px = 28.0
//! char_width_px = 8.4
//! gutter_width_px = 64.0
//! ```

use kodr_editor::ClickGeometry;
use kodr_explain::ClassifierOptions;
use kodr_lang::Language;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML for [`PlaygroundConfig`].
    #[error("invalid playground config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Pixel metrics of the code view, see [`ClickGeometry`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeometryConfig {
    /// Row height in pixels.
    pub line_height_px: f32,
    /// Monospace cell width in pixels.
    pub char_width_px: f32,
    /// Width of the line-number gutter in pixels.
    pub gutter_width_px: f32,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        let geometry = ClickGeometry::default();
        Self {
            line_height_px: geometry.line_height_px,
            char_width_px: geometry.char_width_px,
            gutter_width_px: geometry.gutter_width_px,
        }
    }
}

impl From<GeometryConfig> for ClickGeometry {
    fn from(config: GeometryConfig) -> Self {
        ClickGeometry::new(
            config.line_height_px,
            config.char_width_px,
            config.gutter_width_px,
        )
    }
}

/// Playground settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaygroundConfig {
    /// Quiet period after the last edit before the explanation pass runs.
    pub analysis_delay_ms: u64,
    /// How many explanation rows start expanded after each pass.
    pub auto_expand: usize,
    /// Language loaded when the session starts.
    pub initial_language: Language,
    /// Annotate lines that match no rule.
    pub include_uncategorized: bool,
    /// Code view metrics.
    pub geometry: GeometryConfig,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            analysis_delay_ms: 1500,
            auto_expand: 3,
            initial_language: Language::default(),
            include_uncategorized: false,
            geometry: GeometryConfig::default(),
        }
    }
}

impl PlaygroundConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse the TOML file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Debounce delay as a [`Duration`].
    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }

    /// Classifier options derived from this config.
    pub fn classifier_options(&self) -> ClassifierOptions {
        ClassifierOptions {
            include_uncategorized: self.include_uncategorized,
        }
    }

    /// Click geometry derived from this config.
    pub fn click_geometry(&self) -> ClickGeometry {
        self.geometry.into()
    }
}
