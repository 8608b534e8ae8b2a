use hashbrown::HashSet;

use crate::{error::StageError, normalizer::TextNormalizer, token::Tokens};

const ENGLISH: &str = include_str!("../assets/stopwords/en.txt");

/// Lowercased set of tokens dropped as semantically empty.
///
/// Membership is exact: tokens are not case-folded at lookup time, since
/// the pipeline lowercases the whole text long before this stage.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stopwords(HashSet<String>);

impl Stopwords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stopwords = Self::default();
        stopwords.extend(words);
        stopwords
    }

    /// The general English list, one word per line.
    pub fn english() -> Self {
        Self::new(ENGLISH.lines())
    }

    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.0.extend(
            words
                .into_iter()
                .map(|word| word.as_ref().trim().to_lowercase())
                .filter(|word| !word.is_empty()),
        );
    }

    pub fn union(mut self, other: Stopwords) -> Self {
        self.0.extend(other.0);
        self
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl TextNormalizer for Stopwords {
    fn normalize(&self, tokens: &mut Tokens) -> Result<(), StageError> {
        tokens.retain_mut(|token| !self.0.contains(token.as_str()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        normalizer::{Stopwords, TextNormalizer},
        tokens,
    };

    #[test]
    fn test_normalizer_stopwords() {
        let mut tokens = tokens!["the", "cat", "in", "the", "hat", "and", "bat"];
        let stopwords = Stopwords::new(["the", "and", "in"]);

        stopwords.normalize(&mut tokens).unwrap();

        assert_eq!(tokens, tokens!["cat", "hat", "bat"]);
    }

    #[test]
    fn test_normalizer_stopwords_none() {
        let mut tokens = tokens!["kunye", "kubili", "kutsatfu"];
        let stopwords = Stopwords::new(Vec::<&str>::new());

        stopwords.normalize(&mut tokens).unwrap();

        assert_eq!(tokens, tokens!["kunye", "kubili", "kutsatfu"]);
    }

    #[test]
    fn test_normalizer_stopwords_tokenless() {
        let mut tokens = tokens![];
        let stopwords = Stopwords::new(["the", "and", "in"]);

        stopwords.normalize(&mut tokens).unwrap();

        assert!(tokens.is_empty());
    }

    #[test]
    fn test_normalizer_stopwords_lookup_is_case_sensitive() {
        let mut tokens = tokens!["Bro", "bro", "BRO"];
        let stopwords = Stopwords::new(["BRO"]);

        stopwords.normalize(&mut tokens).unwrap();

        assert_eq!(tokens, tokens!["Bro", "BRO"]);
    }

    #[test]
    fn test_normalizer_stopwords_unicode() {
        let mut tokens = tokens!["naïve", "élève", "école"];
        let stopwords = Stopwords::new(["naïve", "élève"]);

        stopwords.normalize(&mut tokens).unwrap();

        assert_eq!(tokens, tokens!["école"]);
    }

    #[test]
    fn test_stopwords_union_collapses_duplicates() {
        let base = Stopwords::new(["the", "and"]);
        let domain = Stopwords::new(["futsi", "THE", " ", ""]);

        let merged = base.union(domain);

        assert_eq!(merged.len(), 3);
        assert!(merged.contains("futsi"));
        assert!(merged.contains("the"));
    }

    #[test]
    fn test_stopwords_english() {
        let english = Stopwords::english();

        assert_eq!(english.len(), 179);
        assert!(english.contains("the"));
        assert!(english.contains("don't"));
        assert!(!english.contains("bro"));
    }
}
