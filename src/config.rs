use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Main configuration for the ranking video pipeline
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Filesystem layout
    pub paths: PathsConfig,

    /// Web server settings
    pub server: ServerConfig,

    /// Ranking formatter settings
    pub formatter: FormatterConfig,

    /// Composition stub settings
    pub composition: CompositionConfig,

    /// Audio pairing settings
    pub audio: AudioConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound { path: path.display().to_string() })?;

        let config: Config = toml::from_str(&content)
            .map_err(|_| ConfigError::ParseFailed { path: path.display().to_string() })?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::InvalidValue {
                key: "config".to_string(),
                value: e.to_string()
            })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Create a configuration rooted at the given directory
    pub fn with_root<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            paths: PathsConfig { root: root.into(), ..PathsConfig::default() },
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.server.validate()?;
        self.formatter.validate()?;
        self.composition.validate()?;
        self.audio.validate()?;
        Ok(())
    }
}

/// Directory layout under a single root
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Root directory holding every pipeline directory
    pub root: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self { root: PathBuf::from("data") }
    }
}

impl PathsConfig {
    pub fn raw_data_dir(&self) -> PathBuf {
        self.root.join("college_data")
    }

    pub fn images_dir(&self) -> PathBuf {
        self.root.join("campus_images")
    }

    pub fn audio_dir(&self) -> PathBuf {
        self.root.join("trending_audio")
    }

    pub fn formatted_dir(&self) -> PathBuf {
        self.root.join("formatted_rankings")
    }

    pub fn generated_dir(&self) -> PathBuf {
        self.root.join("generated_videos")
    }

    pub fn final_dir(&self) -> PathBuf {
        self.root.join("final_videos")
    }

    /// Web static root; served under `/static`
    pub fn static_dir(&self) -> PathBuf {
        self.root.join("web_interface").join("static")
    }

    pub fn categories_file(&self) -> PathBuf {
        self.root.join("college_ranking_categories.md")
    }

    pub fn audio_catalogue_file(&self) -> PathBuf {
        self.root.join("trending_audio_tracks.md")
    }

    /// Create every pipeline output directory
    pub fn ensure_dirs(&self) -> Result<()> {
        for dir in [
            self.raw_data_dir(),
            self.images_dir(),
            self.audio_dir(),
            self.formatted_dir(),
            self.generated_dir(),
            self.final_dir(),
        ] {
            std::fs::create_dir_all(dir)?;
        }
        for sub in ["videos", "images", "css", "js"] {
            std::fs::create_dir_all(self.static_dir().join(sub))?;
        }
        Ok(())
    }
}

/// Web server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind, e.g. `0.0.0.0:5000`
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: "0.0.0.0:5000".to_string() }
    }
}

impl ServerConfig {
    fn validate(&self) -> Result<()> {
        if self.bind_addr.parse::<std::net::SocketAddr>().is_err() {
            return Err(ConfigError::InvalidValue {
                key: "server.bind_addr".to_string(),
                value: self.bind_addr.clone()
            }.into());
        }
        Ok(())
    }
}

/// Ranking formatter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Number of entries kept per formatted ranking
    pub default_count: usize,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self { default_count: 10 }
    }
}

impl FormatterConfig {
    fn validate(&self) -> Result<()> {
        if self.default_count == 0 {
            return Err(ConfigError::InvalidValue {
                key: "formatter.default_count".to_string(),
                value: self.default_count.to_string()
            }.into());
        }
        Ok(())
    }
}

/// Composition stub configuration
///
/// Width, height, fps and duration describe the nominal vertical short-form
/// video; they are only echoed into the placeholder description.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositionConfig {
    pub width: u32,
    pub height: u32,
    pub fps: u32,

    /// Nominal video duration in seconds
    pub duration_secs: u32,

    /// How many ranked items appear in each video
    pub items_shown: usize,
}

impl Default for CompositionConfig {
    fn default() -> Self {
        Self {
            width: 1080,
            height: 1920,
            fps: 30,
            duration_secs: 15,
            items_shown: 5,
        }
    }
}

impl CompositionConfig {
    fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidValue {
                key: "composition.resolution".to_string(),
                value: format!("{}x{}", self.width, self.height)
            }.into());
        }

        if self.fps == 0 || self.duration_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "composition.timing".to_string(),
                value: format!("{}fps/{}s", self.fps, self.duration_secs)
            }.into());
        }

        if self.items_shown == 0 {
            return Err(ConfigError::InvalidValue {
                key: "composition.items_shown".to_string(),
                value: self.items_shown.to_string()
            }.into());
        }

        Ok(())
    }
}

/// Audio pairing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// File extension of placeholder tracks
    pub track_extension: String,

    /// Mood used when a run request does not name one
    pub default_mood: String,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            track_extension: "txt".to_string(),
            default_mood: "calm".to_string(),
        }
    }
}

impl AudioConfig {
    fn validate(&self) -> Result<()> {
        if self.track_extension.is_empty() || self.track_extension.contains('.') {
            return Err(ConfigError::InvalidValue {
                key: "audio.track_extension".to_string(),
                value: self.track_extension.clone()
            }.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test_config.toml");

        let original_config = Config::with_root(dir.path());

        original_config.save_to_file(&file_path).unwrap();
        let loaded_config = Config::from_file(&file_path).unwrap();

        assert_eq!(original_config.paths.root, loaded_config.paths.root);
        assert_eq!(original_config.composition.fps, loaded_config.composition.fps);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("partial.toml");
        std::fs::write(&file_path, "[server]\nbind_addr = \"127.0.0.1:8080\"\n").unwrap();

        let config = Config::from_file(&file_path).unwrap();
        assert_eq!(config.server.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.formatter.default_count, 10);
        assert_eq!(config.audio.default_mood, "calm");
    }

    #[test]
    fn test_missing_config_file() {
        let result = Config::from_file("/definitely/not/here.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_bind_addr() {
        let mut config = Config::default();
        config.server.bind_addr = "not an address".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_items_shown() {
        let mut config = Config::default();
        config.composition.items_shown = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_layout_is_rooted() {
        let config = Config::with_root("/srv/reels");
        assert_eq!(config.paths.formatted_dir(), PathBuf::from("/srv/reels/formatted_rankings"));
        assert_eq!(
            config.paths.static_dir(),
            PathBuf::from("/srv/reels/web_interface/static")
        );
    }
}
