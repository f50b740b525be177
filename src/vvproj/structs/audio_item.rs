use serde::{Deserialize, Serialize};

use super::audio_query::AudioQuery;

/// One utterance of the project: its display text and synthesis query.
/// Items with empty text or no query are kept through parsing and skipped
/// during assembly.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AudioItem {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub query: Option<AudioQuery>,
}
