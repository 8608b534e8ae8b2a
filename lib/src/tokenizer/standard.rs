use crate::{
    token::{Token, Tokens},
    tokenizer::{is_separator, TextTokenizer},
};

/// English clitics split off the word they attach to, longest first.
const CLITICS: [&str; 7] = ["n't", "'re", "'ve", "'ll", "'s", "'d", "'m"];

/// Whole words split in two, with the byte offset of the split.
pub(crate) const CONTRACTIONS: [(&str, usize); 10] = [
    ("cannot", 3),
    ("d'ye", 1),
    ("gimme", 3),
    ("gonna", 3),
    ("gotta", 3),
    ("lemme", 3),
    ("more'n", 4),
    ("wanna", 3),
    ("'tis", 2),
    ("'twas", 2),
];

/// Word tokenizer that separates punctuation and clitics from words.
///
/// Text is first split on whitespace. Leading and trailing ASCII punctuation
/// of every chunk becomes one token per character, and a trailing clitic such
/// as `n't` or `'s` becomes a token of its own. Informal contractions such as
/// `gonna` or `'tis` are split into their two words.
#[derive(Clone, Debug, Default)]
pub struct Standard;

impl Standard {
    pub fn new() -> Self {
        Self
    }

    fn split_chunk(chunk: &str, tokens: &mut Tokens) {
        let body = chunk.trim_end_matches(|ch: char| ch.is_ascii_punctuation());

        // `'tis` and `'twas` start with punctuation, so match before peeling it.
        if !body.is_empty() && split_contraction(body, tokens) {
            push_chars(&chunk[body.len()..], tokens);
            return;
        }

        let trimmed_start = chunk.trim_start_matches(|ch: char| ch.is_ascii_punctuation());
        let start = chunk.len() - trimmed_start.len();

        if trimmed_start.is_empty() {
            push_chars(chunk, tokens);
            return;
        }

        let end = body.len();

        push_chars(&chunk[..start], tokens);
        Self::split_clitic(&chunk[start..end], tokens);
        push_chars(&chunk[end..], tokens);
    }

    fn split_clitic(word: &str, tokens: &mut Tokens) {
        let lowered = word.to_ascii_lowercase();

        let clitic = CLITICS
            .iter()
            .find(|clitic| lowered.len() > clitic.len() && lowered.ends_with(*clitic));

        match clitic {
            Some(clitic) => {
                let boundary = word.len() - clitic.len();
                push_word(&word[..boundary], tokens);
                tokens.push(Token::from(&word[boundary..]));
            }
            None => push_word(word, tokens),
        }
    }
}

fn push_word(word: &str, tokens: &mut Tokens) {
    if !split_contraction(word, tokens) {
        tokens.push(Token::from(word));
    }
}

fn split_contraction(word: &str, tokens: &mut Tokens) -> bool {
    let contraction = CONTRACTIONS
        .iter()
        .find(|(contraction, _)| word.eq_ignore_ascii_case(contraction));

    match contraction {
        Some(&(_, boundary)) => {
            tokens.push(Token::from(&word[..boundary]));
            tokens.push(Token::from(&word[boundary..]));
            true
        }
        None => false,
    }
}

fn push_chars(run: &str, tokens: &mut Tokens) {
    run.chars()
        .for_each(|ch| tokens.push(Token::from(ch.to_string())));
}

impl TextTokenizer for Standard {
    fn tokenize<T: AsRef<str>>(&self, text: T) -> Tokens {
        let mut tokens = Tokens::new();

        text.as_ref()
            .split(is_separator)
            .filter(|chunk| !chunk.is_empty())
            .for_each(|chunk| Self::split_chunk(chunk, &mut tokens));

        tokens
    }
}
