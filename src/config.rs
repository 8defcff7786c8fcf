//! Rasterizer configuration.
//!
//! With the `config` feature the configuration can be loaded from YAML:
//!
//! ```yaml
//! max_height: 2160
//! grow: false
//! ```

#[cfg(feature = "config")]
use crate::error::{Error, Result};
#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "config")]
use std::path::Path;

/// Default maximum polygon height in scanlines.
///
/// Sized for 1080p targets: a polygon spanning rows 0..=1080 has height 1080,
/// and the cache holds `max_height + 1` rows.
pub const DEFAULT_MAX_HEIGHT: usize = 1081;

/// Largest `max_height` accepted from a configuration file.
///
/// Each rasterizer allocates two caches of `max_height + 1` rows up front.
pub const MAX_CONFIGURED_HEIGHT: usize = 1 << 16;

/// Settings for a [`Rasterizer`](crate::render::Rasterizer).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
pub struct RasterizerConfig {
    /// Tallest polygon (max_y - min_y) the scanline caches accept.
    #[cfg_attr(feature = "config", serde(default = "default_max_height"))]
    pub max_height: usize,

    /// Grow the caches for taller polygons instead of failing.
    #[cfg_attr(feature = "config", serde(default))]
    pub grow: bool,
}

#[cfg(feature = "config")]
fn default_max_height() -> usize {
    DEFAULT_MAX_HEIGHT
}

impl Default for RasterizerConfig {
    fn default() -> Self {
        Self {
            max_height: DEFAULT_MAX_HEIGHT,
            grow: false,
        }
    }
}

impl RasterizerConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum polygon height.
    #[must_use]
    pub const fn with_max_height(mut self, max_height: usize) -> Self {
        self.max_height = max_height;
        self
    }

    /// Allow the caches to grow past `max_height`.
    #[must_use]
    pub const fn with_grow(mut self, grow: bool) -> Self {
        self.grow = grow;
        self
    }

    /// Number of cache rows needed for `max_height`.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.max_height.saturating_add(1)
    }
}

#[cfg(feature = "config")]
impl RasterizerConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails or `max_height`
    /// exceeds [`MAX_CONFIGURED_HEIGHT`].
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })?;

        if config.max_height > MAX_CONFIGURED_HEIGHT {
            let line = yaml
                .lines()
                .position(|l| l.trim_start().starts_with("max_height"))
                .map_or(0, |i| i + 1);
            return Err(Error::ConfigParse {
                line,
                message: format!(
                    "max_height {} exceeds the limit of {MAX_CONFIGURED_HEIGHT}",
                    config.max_height
                ),
            });
        }
        Ok(config)
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("using default rasterizer config: {err}");
                Self::default()
            }
        }
    }
}


#[cfg(all(test, feature = "config"))]
mod yaml_tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_parse_minimal() {
        let config = RasterizerConfig::parse("grow: true").unwrap();

        assert!(config.grow);
        assert_eq!(config.max_height, DEFAULT_MAX_HEIGHT);
    }

    #[test]
    fn test_config_parse_full() {
        let yaml = r#"
max_height: 2160
grow: false
"#;
        let config = RasterizerConfig::parse(yaml).unwrap();

        assert_eq!(config.max_height, 2160);
        assert!(!config.grow);
    }

    #[test]
    fn test_config_parse_error_includes_line() {
        let yaml = r#"
grow: false
max_height: not_a_number
"#;
        let err = RasterizerConfig::parse(yaml).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { line: 3, .. }), "{err}");
    }

    #[test]
    fn test_config_parse_rejects_huge_max_height() {
        let yaml = "grow: false\nmax_height: 18446744073709551615\n";
        let err = RasterizerConfig::parse(yaml).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { line: 2, .. }), "{err}");
        assert!(err.to_string().contains("exceeds"));
    }

    #[test]
    fn test_config_parse_accepts_limit() {
        let yaml = format!("max_height: {MAX_CONFIGURED_HEIGHT}");
        let config = RasterizerConfig::parse(&yaml).unwrap();
        assert_eq!(config.max_height, MAX_CONFIGURED_HEIGHT);
    }

    #[test]
    fn test_config_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_height: 64").unwrap();

        let config = RasterizerConfig::load(file.path()).unwrap();
        assert_eq!(config.max_height, 64);
    }

    #[test]
    fn test_config_load_missing_file() {
        let err = RasterizerConfig::load("/nonexistent/raster.yaml").unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound(_)));
        assert_eq!(
            RasterizerConfig::load_or_default("/nonexistent/raster.yaml"),
            RasterizerConfig::default()
        );
    }
}
