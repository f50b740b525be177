//! Optional preservation of trailing emotive punctuation runs.
//!
//! Utterances like 「すごい！！！！」 carry meaning in the repeated
//! punctuation. When the policy is enabled, such a trailing run may
//! overflow the per-line character limit and is never cut through by a
//! forced split. Off by default: the overflow it permits regressed strict
//! character-limit requirements in earlier tooling.

use once_cell::sync::Lazy;
use regex::Regex;

/// Trailing run of two or more emotive punctuation characters.
static EMOTION_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new("[。！？、…・ー～]{2,}$").unwrap());

#[derive(Debug, Clone, Copy, Default)]
pub struct EmotionPolicy {
    pub enabled: bool,
}

impl EmotionPolicy {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Split `text` into (base, trailing emotion run), if it has one.
    pub fn split_trailing_run(text: &str) -> Option<(&str, &str)> {
        let m = EMOTION_RUN.find(text)?;
        Some((&text[..m.start()], &text[m.start()..]))
    }

    /// Whether a line of this length is acceptable under `max_chars`.
    ///
    /// With the policy enabled, only the base text (without the trailing
    /// run) is held to the limit.
    pub fn allows(&self, line: &str, max_chars: usize) -> bool {
        if line.chars().count() <= max_chars {
            return true;
        }
        if !self.enabled {
            return false;
        }
        match Self::split_trailing_run(line) {
            Some((base, _)) => base.chars().count() <= max_chars,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_trailing_run() {
        let (base, run) = EmotionPolicy::split_trailing_run("すごい！！！！").unwrap();
        assert_eq!(base, "すごい");
        assert_eq!(run, "！！！！");
    }

    #[test]
    fn test_single_punctuation_is_not_a_run() {
        assert!(EmotionPolicy::split_trailing_run("終わった。").is_none());
    }

    #[test]
    fn test_mid_text_punctuation_ignored() {
        assert!(EmotionPolicy::split_trailing_run("え！！と、続く").is_none());
    }

    #[test]
    fn test_mixed_run() {
        let (base, run) = EmotionPolicy::split_trailing_run("まさか…！？").unwrap();
        assert_eq!(base, "まさか");
        assert_eq!(run, "…！？");
    }

    #[test]
    fn test_allows_overflow_only_when_enabled() {
        let line = "すごいすごい！！！！"; // 6 base + 4 run
        assert!(!EmotionPolicy::new(false).allows(line, 8));
        assert!(EmotionPolicy::new(true).allows(line, 8));
        // Base itself over the limit is still rejected
        assert!(!EmotionPolicy::new(true).allows(line, 5));
        // Within the limit is always fine
        assert!(EmotionPolicy::new(false).allows("短い！！", 8));
    }
}
