use thiserror::Error;

/// Main error type for the ranking video pipeline
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Ranking error: {0}")]
    Ranking(#[from] RankingError),

    #[error("Composition error: {0}")]
    Composition(#[from] CompositionError),

    #[error("Audio pairing error: {0}")]
    Audio(#[from] AudioError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Generic error: {0}")]
    Generic(String),
}

/// Ranking collection and formatting errors
#[derive(Error, Debug)]
pub enum RankingError {
    #[error("Failed to parse ranking file: {path} - {reason}")]
    ParseFailed { path: String, reason: String },

    #[error("Failed to write ranking file: {path}")]
    WriteFailed { path: String },
}

/// Composition stub errors
#[derive(Error, Debug)]
pub enum CompositionError {
    #[error("Formatted ranking not found: {path}")]
    RankingNotFound { path: String },

    #[error("Formatted ranking unreadable: {path} - {reason}")]
    RankingUnreadable { path: String, reason: String },

    #[error("Output generation failed: {reason}")]
    OutputFailed { reason: String },
}

/// Audio pairing errors
#[derive(Error, Debug)]
pub enum AudioError {
    #[error("Audio mood directory not found: {mood}")]
    MoodNotFound { mood: String },

    #[error("No audio tracks found for mood: {mood}")]
    NoTracks { mood: String },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration file: {path}")]
    ParseFailed { path: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
}

/// Convenience type alias for Results using PipelineError
pub type Result<T> = std::result::Result<T, PipelineError>;

impl PipelineError {
    /// Create a generic error with a custom message
    pub fn generic<S: Into<String>>(message: S) -> Self {
        Self::Generic(message.into())
    }

    /// Whether this error only affects a single video and can be skipped
    /// without failing the whole run
    pub fn is_per_video(&self) -> bool {
        matches!(
            self,
            Self::Composition(CompositionError::RankingNotFound { .. })
                | Self::Composition(CompositionError::RankingUnreadable { .. })
                | Self::Audio(_)
        )
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Audio(AudioError::MoodNotFound { mood }) => {
                format!("No audio library exists for mood '{}'.", mood)
            }
            Self::Config(ConfigError::FileNotFound { path }) => {
                format!("Configuration file '{}' not found.", path)
            }
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_video_classification() {
        let missing = PipelineError::from(AudioError::NoTracks { mood: "calm".into() });
        assert!(missing.is_per_video());

        let unreadable = PipelineError::from(CompositionError::RankingUnreadable {
            path: "notes.json".into(),
            reason: "expected value".into(),
        });
        assert!(unreadable.is_per_video());

        let io = PipelineError::from(std::io::Error::other("disk full"));
        assert!(!io.is_per_video());

        let raw = PipelineError::from(RankingError::ParseFailed {
            path: "raw.json".into(),
            reason: "expected value".into(),
        });
        assert!(!raw.is_per_video());
    }

    #[test]
    fn test_user_message() {
        let err = PipelineError::from(AudioError::MoodNotFound { mood: "sad".into() });
        assert_eq!(err.user_message(), "No audio library exists for mood 'sad'.");
    }
}
