//! Character and pattern level stages.
//!
//! Every filter rewrites the whole text in one pass and cannot fail. Stages
//! that need word boundaries live in [`crate::normalizer`] instead.

pub mod ascii;
pub mod case;
pub mod pattern;
pub mod punctuation;
pub mod vowel;
pub mod whitespace;

pub use {
    ascii::Emojis,
    case::Lowercase,
    pattern::{Digits, Emoticons, Links, NonAscii, Tags},
    punctuation::Punctuation,
    vowel::AdjacentVowels,
    whitespace::CollapseWhitespace,
};

pub trait TextFilter: std::fmt::Debug + Send + Sync {
    fn filter(&self, text: &str) -> String;
}
