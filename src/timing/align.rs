//! Character-to-mora alignment.
//!
//! Maps source-text character positions onto the utterance's mora sequence
//! so a subtitle line's duration is the sum of the phonemes it actually
//! covers, not a character-ratio estimate.

use std::collections::HashMap;

use tracing::warn;

use crate::vvproj::structs::AccentPhrase;

/// Punctuation a pause mora stands in for within the source text.
const PAUSE_PUNCTUATION: [char; 4] = ['、', '。', '！', '？'];

/// Index from source-text character offsets to mora positions, with the raw
/// per-mora durations needed to price a text span.
pub struct MoraTimeline {
    source: Vec<char>,
    durations: Vec<f64>,
    index: HashMap<usize, usize>,
}

impl MoraTimeline {
    /// Walk the accent phrases in order, consuming one source character per
    /// spoken mora. A trailing pause mora consumes a character only when the
    /// cursor sits on pause punctuation; pauses stand for punctuation marks,
    /// not spoken morae.
    pub fn build(text: &str, phrases: &[AccentPhrase]) -> Self {
        let source: Vec<char> = text.chars().collect();
        let mut durations = Vec::new();
        let mut index = HashMap::new();
        let mut cursor = 0usize;

        for phrase in phrases {
            for mora in &phrase.moras {
                durations.push(mora.raw_duration());
                if cursor < source.len() {
                    index.insert(cursor, durations.len() - 1);
                    cursor += 1;
                }
            }

            if let Some(pause) = &phrase.pause_mora {
                durations.push(pause.raw_duration());
                if cursor < source.len() && PAUSE_PUNCTUATION.contains(&source[cursor]) {
                    index.insert(cursor, durations.len() - 1);
                    cursor += 1;
                }
            }
        }

        Self {
            source,
            durations,
            index,
        }
    }

    /// First occurrence of `span` in the source text, by character offset.
    fn find_span(&self, span: &[char]) -> Option<usize> {
        if span.is_empty() || span.len() > self.source.len() {
            return None;
        }
        self.source.windows(span.len()).position(|window| window == span)
    }

    /// Seconds of audio attributable to `span_text`.
    ///
    /// An unlocatable span (duplicate substrings, text mutated after the
    /// index was built) contributes zero duration rather than failing the
    /// run; the assembler's gap-collapse pass keeps the cue sequence
    /// contiguous regardless.
    pub fn span_duration(&self, span_text: &str) -> f64 {
        let span: Vec<char> = span_text.chars().collect();

        let start = match self.find_span(&span) {
            Some(start) => start,
            None => {
                warn!(span = span_text, "span not found in source text, contributing zero duration");
                return 0.0;
            }
        };
        let end = start + span.len() - 1;

        match (self.index.get(&start), self.index.get(&end)) {
            (Some(&first), Some(&last)) => self.durations[first..=last].iter().sum(),
            _ => {
                warn!(span = span_text, "no mora mapping for span boundary, contributing zero duration");
                0.0
            }
        }
    }
}
