use hashbrown::HashMap;

use crate::{
    error::{ConfigError, StageError, TableKind},
    normalizer::TextNormalizer,
    token::{Token, Tokens},
};

/// Exact-match word to word mapping used for slang, typo and borrowed words.
///
/// A token is replaced only when the whole token equals a key, so a short
/// key never rewrites the inside of a longer word.
#[derive(Clone, Debug)]
pub struct CorrectionTable {
    kind: TableKind,
    pairs: HashMap<String, String>,
}

impl CorrectionTable {
    /// Builds a table from `(trigger, replacement)` pairs. Later duplicates win.
    pub fn new<I, K, V>(kind: TableKind, pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let iter = pairs.into_iter();
        let mut map = HashMap::with_capacity(iter.size_hint().0);

        for (key, value) in iter {
            let (key, value) = (key.into(), value.into());

            if key.is_empty() {
                return Err(ConfigError::MalformedEntry {
                    table: kind,
                    key,
                    reason: "trigger is empty",
                });
            }

            if value.trim().is_empty() {
                return Err(ConfigError::MalformedEntry {
                    table: kind,
                    key,
                    reason: "replacement is blank",
                });
            }

            map.insert(key, value);
        }

        Ok(Self { kind, pairs: map })
    }

    pub fn empty(kind: TableKind) -> Self {
        Self {
            kind,
            pairs: HashMap::new(),
        }
    }

    #[inline]
    pub fn kind(&self) -> TableKind {
        self.kind
    }

    #[inline]
    pub fn get(&self, trigger: &str) -> Option<&str> {
        self.pairs.get(trigger).map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn triggers(&self) -> impl Iterator<Item = &str> {
        self.pairs.keys().map(String::as_str)
    }

    pub fn replacements(&self) -> impl Iterator<Item = &str> {
        self.pairs.values().map(String::as_str)
    }
}

impl TextNormalizer for CorrectionTable {
    fn normalize(&self, tokens: &mut Tokens) -> Result<(), StageError> {
        tokens.iter_mut().for_each(|token| {
            if let Some(replacement) = self.pairs.get(token.as_str()) {
                *token = Token::from(replacement.as_str());
            }
        });

        Ok(())
    }
}
