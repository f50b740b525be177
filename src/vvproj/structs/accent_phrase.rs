use serde::{Deserialize, Serialize};

use super::mora::Mora;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccentPhrase {
    #[serde(default)]
    pub moras: Vec<Mora>,
    #[serde(default = "default_accent")]
    pub accent: u32,
    #[serde(default)]
    pub pause_mora: Option<Mora>,
    #[serde(default)]
    pub is_interrogative: bool,
}

fn default_accent() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_pause_mora() {
        let phrase: AccentPhrase = serde_json::from_str(
            r#"{
                "moras": [{"text":"ア","vowel":"a","vowelLength":0.1,"pitch":5.0}],
                "accent": 1,
                "pauseMora": {"text":"、","vowel":"pau","vowelLength":0.3,"pitch":0.0},
                "isInterrogative": false
            }"#,
        )
        .unwrap();
        assert_eq!(phrase.moras.len(), 1);
        assert!(phrase.pause_mora.as_ref().unwrap().is_pause());
    }

    #[test]
    fn test_minimal_phrase_defaults() {
        let phrase: AccentPhrase = serde_json::from_str(r#"{"moras": []}"#).unwrap();
        assert_eq!(phrase.accent, 1);
        assert!(phrase.pause_mora.is_none());
        assert!(!phrase.is_interrogative);
    }
}
