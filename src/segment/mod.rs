pub mod emotion;
pub mod splitter;
pub mod tokenizer;

pub use emotion::EmotionPolicy;
pub use splitter::Segmenter;
pub use tokenizer::{CharClassTokenizer, CharTokenizer, Tokenizer};
