//! Line segmentation: natural phrase boundaries first, then greedy packing
//! under the per-line character limit, then a cleanup pass for orphan lines.

use tracing::debug;

use super::emotion::EmotionPolicy;
use super::tokenizer::Tokenizer;

/// Tokens that end a sentence and therefore a phrase.
const SENTENCE_ENDERS: [&str; 5] = ["。", "！", "？", "!", "?"];

/// Characters that may trail a sentence ender as part of the same phrase.
const EMOTIVE_CHARS: [char; 8] = ['。', '！', '？', '、', '…', '・', 'ー', '～'];

/// Punctuation eligible as a forced split point, and attached to the
/// preceding piece when left dangling at a split.
const SPLIT_PUNCTUATION: [char; 2] = ['、', '。'];

pub struct Segmenter {
    tokenizer: Box<dyn Tokenizer>,
    min_line_length: usize,
    emotion: EmotionPolicy,
}

fn char_count(text: &str) -> usize {
    text.chars().count()
}

fn is_sentence_boundary(token: &str) -> bool {
    SENTENCE_ENDERS.contains(&token) || token.contains('\n')
}

fn is_emotive_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| EMOTIVE_CHARS.contains(&c))
}

impl Segmenter {
    pub fn new(
        tokenizer: Box<dyn Tokenizer>,
        min_line_length: usize,
        emotion: EmotionPolicy,
    ) -> Self {
        Self {
            tokenizer,
            min_line_length,
            emotion,
        }
    }

    /// Split `text` into display lines of at most `max_chars` characters.
    ///
    /// Lines may exceed the limit only where explicitly forced: dangling
    /// split punctuation attached to a piece, an unsplittable token, or a
    /// preserved emotion run.
    pub fn segment(&self, text: &str, max_chars: usize) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let phrases = self.sentence_phrases(text);
        debug!(phrases = phrases.len(), "natural phrase boundaries");

        let mut lines: Vec<String> = Vec::new();
        let mut current = String::new();
        for phrase in phrases {
            let phrase_len = char_count(&phrase);
            if phrase_len > max_chars && !self.emotion.allows(&phrase, max_chars) {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                lines.extend(self.split_long_phrase(&phrase, max_chars));
            } else if char_count(&current) + phrase_len <= max_chars {
                current.push_str(&phrase);
            } else {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                current = phrase;
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }

        self.adjust_line_breaks(lines, max_chars)
    }

    /// Accumulate tokens into phrases, flushing after sentence-ending
    /// punctuation or a newline. A run of emotive punctuation following the
    /// ender stays with its phrase.
    fn sentence_phrases(&self, text: &str) -> Vec<String> {
        let tokens = self.tokenizer.tokenize(text);
        let mut phrases = Vec::new();
        let mut current = String::new();
        let mut iter = tokens.into_iter().peekable();

        while let Some(token) = iter.next() {
            let boundary = is_sentence_boundary(&token);
            current.push_str(&token);
            if boundary {
                while let Some(next) = iter.peek() {
                    if is_emotive_token(next) {
                        current.push_str(next);
                        iter.next();
                    } else {
                        break;
                    }
                }
                let phrase = current.trim();
                if !phrase.is_empty() {
                    phrases.push(phrase.to_string());
                }
                current.clear();
            }
        }

        let tail = current.trim();
        if !tail.is_empty() {
            phrases.push(tail.to_string());
        }
        phrases
    }

    /// Force-split a phrase longer than `max_chars`.
    ///
    /// Prefers the rightmost split punctuation within the window, provided
    /// it falls in the right half; otherwise cuts at exactly `max_chars`.
    /// Split punctuation left dangling at the head of the remainder is
    /// pulled back onto the piece just produced.
    fn split_long_phrase(&self, phrase: &str, max_chars: usize) -> Vec<String> {
        let (body, run) = if self.emotion.enabled {
            EmotionPolicy::split_trailing_run(phrase).unwrap_or((phrase, ""))
        } else {
            (phrase, "")
        };

        let mut remaining: Vec<char> = body.chars().collect();
        let mut pieces: Vec<String> = Vec::new();

        while remaining.len() > max_chars {
            let window = &remaining[..max_chars];
            let natural = window
                .iter()
                .rposition(|c| SPLIT_PUNCTUATION.contains(c))
                .map(|i| i + 1);
            let split_index = match natural {
                Some(i) if i * 2 >= max_chars => i,
                _ => max_chars,
            };

            let mut piece = remaining[..split_index]
                .iter()
                .collect::<String>()
                .trim()
                .to_string();
            remaining.drain(..split_index);

            let dangling = remaining
                .iter()
                .take_while(|c| SPLIT_PUNCTUATION.contains(c))
                .count();
            piece.extend(remaining.drain(..dangling));

            pieces.push(piece);
        }

        let tail: String = remaining.iter().collect();
        let tail = tail.trim();
        if !tail.is_empty() {
            pieces.push(tail.to_string());
        }

        if !run.is_empty() {
            match pieces.last_mut() {
                Some(last) => last.push_str(run),
                None => pieces.push(run.to_string()),
            }
        }
        pieces
    }

    /// Merge orphan lines back into their predecessor and re-chunk on token
    /// boundaries. A line is an orphan when it is shorter than the minimum,
    /// or when it continues a Latin word cut at the junction.
    fn adjust_line_breaks(&self, lines: Vec<String>, max_chars: usize) -> Vec<String> {
        let mut adjusted = Vec::new();
        let mut i = 0;

        while i < lines.len() {
            let merge = if i + 1 < lines.len() {
                let current = lines[i].trim_end();
                let next = lines[i + 1].trim_start();
                let ascii_junction = matches!(
                    (current.chars().last(), next.chars().next()),
                    (Some(a), Some(b)) if a.is_ascii_alphabetic() && b.is_ascii_alphabetic()
                );
                ascii_junction || char_count(next.trim_end()) < self.min_line_length
            } else {
                false
            };

            if merge {
                let merged = format!("{}{}", lines[i].trim(), lines[i + 1].trim());
                adjusted.extend(self.token_chunks(&merged, max_chars));
                i += 2;
            } else {
                adjusted.push(lines[i].clone());
                i += 1;
            }
        }
        adjusted
    }

    /// Greedy token packing; a token is never split across lines, so a
    /// single token longer than `max_chars` keeps its own line.
    fn token_chunks(&self, text: &str, max_chars: usize) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut current = String::new();

        for token in self.tokenizer.tokenize(text) {
            if char_count(&current) + char_count(&token) <= max_chars {
                current.push_str(&token);
            } else {
                if !current.is_empty() {
                    chunks.push(std::mem::take(&mut current));
                }
                current = token;
            }
        }
        if !current.is_empty() {
            chunks.push(current);
        }
        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::tokenizer::{CharClassTokenizer, CharTokenizer};

    fn segmenter(min_line_length: usize, emotion_enabled: bool) -> Segmenter {
        Segmenter::new(
            Box::new(CharClassTokenizer),
            min_line_length,
            EmotionPolicy::new(emotion_enabled),
        )
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        let seg = segmenter(7, false);
        assert!(seg.segment("", 30).is_empty());
        assert!(seg.segment("  \n　", 30).is_empty());
    }

    #[test]
    fn test_short_text_is_returned_unchanged() {
        let seg = segmenter(7, false);
        assert_eq!(seg.segment("こんにちは", 30), vec!["こんにちは"]);
    }

    #[test]
    fn test_sentences_pack_into_one_line_when_they_fit() {
        let seg = segmenter(7, false);
        assert_eq!(
            seg.segment("おはよう。元気？", 30),
            vec!["おはよう。元気？"]
        );
    }

    #[test]
    fn test_force_split_prefers_punctuation() {
        let seg = segmenter(2, false);
        // 9 chars, comma at position 4 of the 5-char window
        assert_eq!(
            seg.segment("あいう、えおかきく", 5),
            vec!["あいう、", "えおかきく"]
        );
    }

    #[test]
    fn test_hard_cut_without_punctuation() {
        let seg = segmenter(2, false);
        let lines = seg.segment("あいうえおかきくけこ", 5);
        assert_eq!(lines, vec!["あいうえお", "かきくけこ"]);
        assert!(lines.iter().all(|l| l.chars().count() <= 5));
    }

    #[test]
    fn test_punctuation_in_left_half_is_ignored() {
        let seg = segmenter(2, false);
        // Comma ends at position 2 of the 6-char window: left of half, so
        // the cut lands at the window edge instead
        assert_eq!(
            seg.segment("あ、いうえおかきくけこ", 6),
            vec!["あ、いうえお", "かきくけこ"]
        );
    }

    #[test]
    fn test_punctuation_at_exactly_half_is_used() {
        let seg = segmenter(2, false);
        // Comma ends at position 3 of the 6-char window: exactly half, kept
        assert_eq!(
            seg.segment("あい、うえおかきくけこ", 6),
            vec!["あい、", "うえおかきく", "けこ"]
        );
    }

    #[test]
    fn test_dangling_punctuation_attaches_to_piece() {
        let seg = segmenter(2, false);
        let lines = seg.segment("あいうえお、、かきくけこ", 5);
        assert_eq!(lines, vec!["あいうえお、、", "かきくけこ"]);
    }

    #[test]
    fn test_orphan_line_is_merged_and_rechunked() {
        let seg = segmenter(7, false);
        let lines = seg.segment("こんにちは。やあ。", 8);
        assert_eq!(lines, vec!["こんにちは。やあ", "。"]);
    }

    #[test]
    fn test_latin_word_never_cut_at_junction() {
        let seg = segmenter(2, false);
        // Hard cut lands inside the Latin word; the merge pass re-chunks on
        // token boundaries and keeps the word whole.
        assert_eq!(seg.segment("ABCDEFGH", 6), vec!["ABCDEFGH"]);
    }

    #[test]
    fn test_round_trip_loses_no_characters() {
        let seg = segmenter(7, false);
        let text = "今日はいい天気ですね。明日も晴れるといいな。ゲームを続けます！";
        let lines = seg.segment(text, 10);
        assert_eq!(lines.concat(), text);
    }

    #[test]
    fn test_emotion_run_preserved_when_enabled() {
        let seg = segmenter(2, true);
        assert_eq!(seg.segment("すごい！！！！", 5), vec!["すごい！！！！"]);
    }

    #[test]
    fn test_emotion_run_cut_when_disabled() {
        let seg = segmenter(2, false);
        assert_eq!(
            seg.segment("すごい！！！！", 5),
            vec!["すごい！！", "！！"]
        );
    }

    #[test]
    fn test_fallback_tokenizer_keeps_sentence_quality() {
        let seg = Segmenter::new(Box::new(CharTokenizer), 2, EmotionPolicy::default());
        assert_eq!(
            seg.segment("おはよう。ございます", 5),
            vec!["おはよう。", "ございます"]
        );
    }

    #[test]
    fn test_newline_is_a_phrase_boundary() {
        let seg = segmenter(2, false);
        assert_eq!(
            seg.segment("一行目です\n二行目です", 20),
            vec!["一行目です二行目です"]
        );
    }
}
