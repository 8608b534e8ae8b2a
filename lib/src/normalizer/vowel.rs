use crate::{
    error::StageError, filter::vowel::is_vowel, normalizer::TextNormalizer, token::Tokens,
};

/// Appends `i` to every token that does not end in a vowel.
///
/// siSwati words never end in a consonant, while informal writing drops the
/// final vowel all the time (`teng` for `tenga`).
#[derive(Clone, Copy, Debug, Default)]
pub struct FinalVowel;

impl FinalVowel {
    pub fn new() -> Self {
        Self
    }
}

impl TextNormalizer for FinalVowel {
    fn normalize(&self, tokens: &mut Tokens) -> Result<(), StageError> {
        for (position, token) in tokens.iter_mut().enumerate() {
            let last = token
                .chars()
                .next_back()
                .ok_or(StageError::EmptyToken(position))?;

            if !is_vowel(last.to_ascii_lowercase()) {
                token.push('i');
            }
        }

        Ok(())
    }
}
