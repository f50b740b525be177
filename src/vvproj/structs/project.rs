use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::audio_item::AudioItem;

/// Top-level project shape. Only the talk track is consumed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Project {
    pub talk: Talk,
}

/// The talk track: `audio_keys` is the authoritative playback order,
/// `audio_items` the keyed utterance records. An item missing from
/// `audio_keys` is unreachable.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Talk {
    pub audio_keys: Vec<String>,
    pub audio_items: HashMap<String, AudioItem>,
}
