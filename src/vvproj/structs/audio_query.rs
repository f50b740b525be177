use serde::{Deserialize, Serialize};

use super::accent_phrase::AccentPhrase;
use crate::config::SilenceDefaults;

/// Synthesis configuration of one utterance, as stored in the project file.
///
/// Pre/post silence lengths stay optional through parsing; files written by
/// older editors omit them and the fallback is a configuration decision, not
/// a parser guess.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AudioQuery {
    #[serde(default)]
    pub accent_phrases: Vec<AccentPhrase>,
    #[serde(default = "default_scale")]
    pub speed_scale: f64,
    #[serde(default)]
    pub pitch_scale: f64,
    #[serde(default = "default_scale")]
    pub intonation_scale: f64,
    #[serde(default = "default_scale")]
    pub volume_scale: f64,
    #[serde(default)]
    pub pre_phoneme_length: Option<f64>,
    #[serde(default)]
    pub post_phoneme_length: Option<f64>,
    #[serde(default)]
    pub pause_length: Option<f64>,
    #[serde(default = "default_scale")]
    pub pause_length_scale: f64,
    #[serde(default = "default_sampling_rate")]
    pub output_sampling_rate: u32,
    #[serde(default)]
    pub output_stereo: bool,
    #[serde(default)]
    pub kana: Option<String>,
}

fn default_scale() -> f64 {
    1.0
}

fn default_sampling_rate() -> u32 {
    24000
}

impl AudioQuery {
    /// Pre/post utterance silence in seconds, with configured fallbacks for
    /// files that omit the fields.
    pub fn silence_lengths(&self, defaults: &SilenceDefaults) -> (f64, f64) {
        (
            self.pre_phoneme_length
                .unwrap_or(defaults.pre_phoneme_length),
            self.post_phoneme_length
                .unwrap_or(defaults.post_phoneme_length),
        )
    }
}
