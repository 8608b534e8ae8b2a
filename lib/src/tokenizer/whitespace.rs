use crate::{
    token::{Token, Tokens},
    tokenizer::TextTokenizer,
};

/// Word separators: Unicode whitespace plus the ASCII information separators
/// `\x1c`..=`\x1f`, which `char::is_whitespace` leaves out.
#[inline]
pub(crate) fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || ('\x1c'..='\x1f').contains(&ch)
}

#[derive(Clone, Debug, Default)]
pub struct Whitespace;

impl Whitespace {
    pub fn new() -> Self {
        Self
    }
}

impl TextTokenizer for Whitespace {
    fn tokenize<T: AsRef<str>>(&self, text: T) -> Tokens {
        text.as_ref()
            .split(is_separator)
            .filter(|word| !word.is_empty())
            .map(Token::from)
            .collect()
    }
}
