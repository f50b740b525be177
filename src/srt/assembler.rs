//! Cue assembly: drives duration calculation, segmentation and alignment
//! per utterance, then makes the whole cue sequence time-contiguous.

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::errors::{validation, Result};
use crate::segment::{CharClassTokenizer, EmotionPolicy, Segmenter};
use crate::srt::cue::Cue;
use crate::timing::align::MoraTimeline;
use crate::timing::duration;
use crate::vvproj::structs::Project;

pub struct Assembler {
    segmenter: Segmenter,
    config: Config,
}

impl Assembler {
    pub fn new(segmenter: Segmenter, config: Config) -> Self {
        Self { segmenter, config }
    }

    /// Assembler with the built-in tokenizer and the given settings.
    pub fn from_config(config: Config) -> Self {
        let segmenter = Segmenter::new(
            Box::new(CharClassTokenizer),
            config.min_line_length,
            EmotionPolicy::new(config.preserve_emotion),
        );
        Self::new(segmenter, config)
    }

    /// Build the gapless cue sequence for a project.
    ///
    /// Pass 1 emits provisional cues per utterance in `audioKeys` order,
    /// anchoring each utterance at the frame-accurate running total rather
    /// than the sum of its chunk estimates. Pass 2 rewrites every end time
    /// to the next cue's start (the last to the final total), which restores
    /// the zero-gap/zero-overlap invariant whatever pass 1 drifted. Pass 3
    /// renumbers densely.
    pub fn assemble(&self, project: &Project) -> Result<Vec<Cue>> {
        let mut cues: Vec<Cue> = Vec::new();
        let mut cursor = 0.0f64;

        for key in &project.talk.audio_keys {
            let item = match project.talk.audio_items.get(key) {
                Some(item) => item,
                None => {
                    warn!(key = %key, "ordering key has no utterance record, skipping");
                    continue;
                }
            };

            if item.text.trim().is_empty() {
                debug!(key = %key, "empty utterance text, skipping");
                continue;
            }

            let query = match &item.query {
                Some(query) => query,
                None => {
                    warn!(key = %key, "utterance has no synthesis query, skipping");
                    continue;
                }
            };
            if query.accent_phrases.is_empty() {
                warn!(key = %key, "utterance has no accent phrases, skipping");
                continue;
            }

            validation::validate_query(query)?;

            let total_duration = duration::calculate_duration(query, &self.config.silence);
            let timeline = MoraTimeline::build(&item.text, &query.accent_phrases);
            let lines = self.segmenter.segment(&item.text, self.config.max_chars);

            if lines.is_empty() {
                cursor += total_duration;
                continue;
            }

            let chunks: Vec<&[String]> = if self.config.max_lines == 0 {
                vec![&lines[..]]
            } else {
                lines.chunks(self.config.max_lines).collect()
            };

            let (pre_length, post_length) = query.silence_lengths(&self.config.silence);
            let mut local_cursor = cursor;

            for (i, chunk_lines) in chunks.iter().enumerate() {
                let chunk_text = chunk_lines.concat();
                let mut chunk_duration = timeline.span_duration(&chunk_text);
                if i == 0 {
                    chunk_duration += pre_length;
                }
                if i == chunks.len() - 1 {
                    chunk_duration += post_length;
                }

                if chunk_duration == 0.0 {
                    warn!(key = %key, chunk = %chunk_text, "zero-duration chunk, no cue emitted");
                    continue;
                }

                cues.push(Cue {
                    index: 0,
                    start: local_cursor,
                    end: local_cursor + chunk_duration,
                    text: chunk_lines.join("\n"),
                });
                local_cursor += chunk_duration;
            }

            // The frame-accurate total, not the chunk sum, anchors the next
            // utterance.
            cursor += total_duration;
        }

        if !cues.is_empty() {
            for i in 0..cues.len() - 1 {
                cues[i].end = cues[i + 1].start;
            }
            let last = cues.len() - 1;
            cues[last].end = cursor;
        }

        for (i, cue) in cues.iter_mut().enumerate() {
            cue.index = i + 1;
        }

        info!(
            cues = cues.len(),
            total_seconds = cursor,
            "cue assembly complete"
        );
        Ok(cues)
    }
}
