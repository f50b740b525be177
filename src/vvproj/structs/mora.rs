use serde::{Deserialize, Serialize};

/// Vowel identifier of unvoiced pause morae
pub const PAUSE_VOWEL: &str = "pau";

/// Vowel identifier of synthetic silence morae
pub const SILENCE_VOWEL: &str = "sil";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Mora {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub consonant: Option<String>,
    #[serde(default)]
    pub consonant_length: Option<f64>,
    #[serde(default)]
    pub vowel: String,
    #[serde(default)]
    pub vowel_length: f64,
    #[serde(default)]
    pub pitch: f64,
}

impl Mora {
    /// Synthetic silence mora used for pre/post utterance padding.
    pub fn silence(length: f64) -> Self {
        Self {
            text: "\u{3000}".to_string(),
            consonant: None,
            consonant_length: None,
            vowel: SILENCE_VOWEL.to_string(),
            vowel_length: length,
            pitch: 0.0,
        }
    }

    pub fn is_pause(&self) -> bool {
        self.vowel == PAUSE_VOWEL
    }

    /// Raw spoken length in seconds, before any scale transforms.
    pub fn raw_duration(&self) -> f64 {
        self.vowel_length + self.consonant_length.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let mora: Mora = serde_json::from_str(
            r#"{"text":"カ","consonant":"k","consonantLength":0.05,"vowel":"a","vowelLength":0.1,"pitch":5.4}"#,
        )
        .unwrap();
        assert_eq!(mora.consonant.as_deref(), Some("k"));
        assert_eq!(mora.consonant_length, Some(0.05));
        assert_eq!(mora.vowel_length, 0.1);
    }

    #[test]
    fn test_missing_fields_default() {
        let mora: Mora = serde_json::from_str(r#"{"text":"、","vowel":"pau"}"#).unwrap();
        assert!(mora.is_pause());
        assert_eq!(mora.vowel_length, 0.0);
        assert_eq!(mora.pitch, 0.0);
        assert!(mora.consonant.is_none());
    }

    #[test]
    fn test_raw_duration() {
        let mora: Mora = serde_json::from_str(
            r#"{"text":"カ","consonant":"k","consonantLength":0.05,"vowel":"a","vowelLength":0.1}"#,
        )
        .unwrap();
        assert!((mora.raw_duration() - 0.15).abs() < 1e-12);

        let silence = Mora::silence(0.3);
        assert_eq!(silence.raw_duration(), 0.3);
        assert!(!silence.is_pause());
    }
}
