mod standard;
mod whitespace;

pub use {standard::Standard, whitespace::Whitespace};

pub(crate) use {standard::CONTRACTIONS, whitespace::is_separator};

use crate::token::Tokens;

pub trait TextTokenizer {
    fn tokenize<T: AsRef<str>>(&self, text: T) -> Tokens;
}
