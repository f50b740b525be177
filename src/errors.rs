/// Custom error types for the vvsrt converter
#[derive(Debug, thiserror::Error)]
pub enum VvsrtError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Project structure error: {0}")]
    Project(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VvsrtError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn project(message: impl Into<String>) -> Self {
        Self::Project(message.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, VvsrtError>;

/// Shared limits and defaults
pub mod constants {
    /// Default maximum characters per subtitle line
    pub const DEFAULT_MAX_CHARS: usize = 30;

    /// Default maximum lines per subtitle cue
    pub const DEFAULT_MAX_LINES: usize = 2;

    /// Lines shorter than this are merged into their neighbor
    pub const DEFAULT_MIN_LINE_LENGTH: usize = 7;

    /// Fallback pre/post utterance silence when the project file omits it
    pub const DEFAULT_SILENCE_LENGTH: f64 = 0.1;
}

/// Input validation functions
pub mod validation {
    use super::*;
    use crate::vvproj::structs::{AudioQuery, Project};

    /// Reject synthesis parameters the duration pipeline cannot process.
    ///
    /// A zero speed scale would divide every mora length by zero; surfacing
    /// it here keeps infinite durations out of the cue timeline.
    pub fn validate_query(query: &AudioQuery) -> Result<()> {
        if !query.speed_scale.is_finite() || query.speed_scale <= 0.0 {
            return Err(VvsrtError::invalid_input(format!(
                "speedScale must be a strictly positive finite number, got {}",
                query.speed_scale
            )));
        }

        Ok(())
    }

    /// Check that every ordering key resolves to an utterance record.
    ///
    /// Items absent from the ordering list are merely unreachable; an
    /// ordering key without a record means the file is inconsistent.
    pub fn validate_key_sets(project: &Project) -> Result<()> {
        let missing: Vec<&str> = project
            .talk
            .audio_keys
            .iter()
            .filter(|key| !project.talk.audio_items.contains_key(*key))
            .map(|key| key.as_str())
            .collect();

        if !missing.is_empty() {
            return Err(VvsrtError::project(format!(
                "audioKeys references {} key(s) with no audioItems record: {}",
                missing.len(),
                missing.join(", ")
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helper_constructors() {
        let err = VvsrtError::config("bad config");
        assert!(matches!(err, VvsrtError::Config(_)));
        assert_eq!(err.to_string(), "Configuration error: bad config");

        let err = VvsrtError::project("no talk section");
        assert_eq!(err.to_string(), "Project structure error: no talk section");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: VvsrtError = io.into();
        assert!(matches!(err, VvsrtError::Io(_)));
    }
}
