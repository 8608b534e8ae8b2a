use std::{
    ops::{Deref, DerefMut},
    slice::{Iter, IterMut},
};

#[derive(Clone, Debug, Default, Hash, Eq, PartialEq)]
pub struct Token(String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Token {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Token {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Token> for String {
    fn from(value: Token) -> Self {
        value.0
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Token(value)
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Token(String::from(value))
    }
}

impl From<&&str> for Token {
    fn from(value: &&str) -> Self {
        Token(String::from(*value))
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tokens(Vec<Token>);

impl Tokens {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.0.push(token)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, Token> {
        self.0.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, Token> {
        self.0.iter_mut()
    }

    #[inline]
    pub fn retain_mut<F>(&mut self, f: F)
    where
        F: FnMut(&mut Token) -> bool,
    {
        self.0.retain_mut(f)
    }

    /// Concatenates the tokens, placing `separator` between neighbours.
    pub fn join(&self, separator: &str) -> String {
        let capacity = self.iter().map(|token| token.len() + separator.len()).sum();
        let mut out = String::with_capacity(capacity);

        for (position, token) in self.iter().enumerate() {
            if position > 0 {
                out.push_str(separator);
            }
            out.push_str(token.as_str());
        }

        out
    }
}

impl From<Vec<Token>> for Tokens {
    fn from(value: Vec<Token>) -> Self {
        Tokens(value)
    }
}

impl FromIterator<Token> for Tokens {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Tokens(iter.into_iter().collect())
    }
}

impl IntoIterator for Tokens {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[macro_export]
macro_rules! tokens {
    ( $( $token:expr ),* $(,)? ) => {{
        $crate::token::Tokens::from(vec![
            $( $crate::token::Token::from($token) ),*
        ])
    }};
}

#[cfg(test)]
mod tests {
    use crate::token::Tokens;

    #[test]
    fn test_tokens_join() {
        let tokens = tokens!["ngiya", "tenga", "namhlanje"];
        assert_eq!(tokens.join(" "), "ngiya tenga namhlanje");
    }

    #[test]
    fn test_tokens_join_empty() {
        let tokens = Tokens::new();
        assert_eq!(tokens.join(" "), "");
    }

    #[test]
    fn test_tokens_retain() {
        let mut tokens = tokens!["one", "", "three"];
        tokens.retain_mut(|token| !token.is_empty());
        assert_eq!(tokens, tokens!["one", "three"]);
        assert_eq!(tokens.count(), 2);
    }
}
