//! Tokenization capability consumed by the segmenter.
//!
//! The segmenter only needs surface-form tokens whose concatenation
//! reproduces the input; which analyzer provides them is the caller's
//! decision, so the seam is a trait.

/// Surface-form tokenization. Implementations must preserve the original
/// character content: concatenating the returned tokens yields the input
/// text exactly, with no loss or reordering.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Script-transition heuristic tokenizer, the built-in default.
///
/// Approximates morpheme boundaries from character classes: runs of the
/// same script form one token, a kanji run absorbs its trailing hiragana
/// (okurigana), and punctuation characters are always singleton tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharClassTokenizer;

/// Degraded fallback: every character is its own token. Line breaking
/// quality drops to sentence-boundary level, but the segmenter contract is
/// unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharTokenizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Kanji,
    Hiragana,
    Katakana,
    Latin,
    Digit,
    Whitespace,
    Other,
}

fn classify(c: char) -> CharClass {
    match c {
        '\u{3041}'..='\u{309f}' => CharClass::Hiragana,
        // Prolonged sound mark belongs to the katakana run it extends
        '\u{30a1}'..='\u{30ff}' | '\u{31f0}'..='\u{31ff}' => CharClass::Katakana,
        '\u{4e00}'..='\u{9fff}' | '\u{3400}'..='\u{4dbf}' | '々' | '〆' => CharClass::Kanji,
        c if c.is_ascii_alphabetic() => CharClass::Latin,
        c if c.is_ascii_digit() => CharClass::Digit,
        c if c.is_whitespace() => CharClass::Whitespace,
        _ => CharClass::Other,
    }
}

impl Tokenizer for CharClassTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut current_class: Option<CharClass> = None;

        for c in text.chars() {
            let class = classify(c);
            let extends = match current_class {
                None => false,
                // Punctuation and symbols never extend a token
                Some(_) if class == CharClass::Other => false,
                Some(CharClass::Other) => false,
                Some(prev) => {
                    prev == class || (prev == CharClass::Kanji && class == CharClass::Hiragana)
                }
            };

            if extends {
                current.push(c);
                // An okurigana tail keeps extending as hiragana, so a
                // following kanji starts a fresh token.
                current_class = Some(class);
            } else {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
                current.push(c);
                current_class = Some(class);
            }
        }

        if !current.is_empty() {
            tokens.push(current);
        }
        tokens
    }
}

impl Tokenizer for CharTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.chars().map(|c| c.to_string()).collect()
    }
}
