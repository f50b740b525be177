use serde::Deserialize;

use crate::errors::constants::{
    DEFAULT_MAX_CHARS, DEFAULT_MAX_LINES, DEFAULT_MIN_LINE_LENGTH, DEFAULT_SILENCE_LENGTH,
};

/// Converter settings, loadable from a TOML file. Every field has a default
/// so a partial (or absent) file is fine.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum characters per subtitle line
    pub max_chars: usize,
    /// Maximum lines per subtitle cue
    pub max_lines: usize,
    /// Lines shorter than this are merged into their neighbor
    pub min_line_length: usize,
    /// Keep trailing emotive punctuation runs intact when splitting
    pub preserve_emotion: bool,
    pub silence: SilenceDefaults,
}

/// Fallback silence lengths for project files that omit prePhonemeLength /
/// postPhonemeLength. Kept explicit because historical tooling disagreed on
/// the post-utterance value (0.1 vs 1.0), which changes every computed
/// duration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SilenceDefaults {
    pub pre_phoneme_length: f64,
    pub post_phoneme_length: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            max_lines: DEFAULT_MAX_LINES,
            min_line_length: DEFAULT_MIN_LINE_LENGTH,
            preserve_emotion: false,
            silence: SilenceDefaults::default(),
        }
    }
}

impl Default for SilenceDefaults {
    fn default() -> Self {
        Self {
            pre_phoneme_length: DEFAULT_SILENCE_LENGTH,
            post_phoneme_length: DEFAULT_SILENCE_LENGTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.max_chars, 30);
        assert_eq!(config.max_lines, 2);
        assert_eq!(config.min_line_length, 7);
        assert!(!config.preserve_emotion);
        assert_eq!(config.silence.pre_phoneme_length, 0.1);
        assert_eq!(config.silence.post_phoneme_length, 0.1);
    }

    #[test]
    fn test_partial_toml() {
        let config: Config = toml::from_str("max_chars = 20").unwrap();
        assert_eq!(config.max_chars, 20);
        assert_eq!(config.max_lines, 2);
        assert_eq!(config.silence.post_phoneme_length, 0.1);
    }

    #[test]
    fn test_silence_override() {
        let config: Config = toml::from_str(
            "[silence]\npost_phoneme_length = 1.0\n",
        )
        .unwrap();
        assert_eq!(config.silence.pre_phoneme_length, 0.1);
        assert_eq!(config.silence.post_phoneme_length, 1.0);
    }
}
