//! Token level stages.
//!
//! These stages need word boundaries: the text is split into [`Tokens`],
//! rewritten or filtered per token, and joined back with single spaces.

pub mod replace;
pub mod stopwords;
pub mod vowel;

pub use {replace::CorrectionTable, stopwords::Stopwords, vowel::FinalVowel};

use crate::{error::StageError, token::Tokens};

pub trait TextNormalizer: std::fmt::Debug + Send + Sync {
    fn normalize(&self, tokens: &mut Tokens) -> Result<(), StageError>;
}
