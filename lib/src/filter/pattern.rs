//! Regex driven filters. Each pattern is compiled once per process.

use std::sync::OnceLock;

use regex::Regex;

use crate::filter::TextFilter;

macro_rules! pattern {
    ($name:ident, $pattern:expr) => {
        fn $name() -> &'static Regex {
            static REGEX: OnceLock<Regex> = OnceLock::new();
            REGEX.get_or_init(|| {
                Regex::new($pattern).expect(concat!("Failed to compile ", stringify!($name)))
            })
        }
    };
}

pattern!(link_regex, r"https?://\S+|www\.\S+");
pattern!(emoticon_regex, r"[:;=][\-\^]?[D\)\]\(/\\OpP]");
pattern!(tag_regex, r"<.*?>");
pattern!(non_ascii_regex, r"[^\x00-\x7F]+");
pattern!(digit_regex, r"\d");

/// Removes `http(s)://` and `www.` links up to the next whitespace.
#[derive(Clone, Copy, Debug, Default)]
pub struct Links;

impl TextFilter for Links {
    fn filter(&self, text: &str) -> String {
        link_regex().replace_all(text, "").into_owned()
    }
}

/// Removes face emoticons such as `:)`, `;-P` or `=^D`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Emoticons;

impl TextFilter for Emoticons {
    fn filter(&self, text: &str) -> String {
        emoticon_regex().replace_all(text, "").into_owned()
    }
}

/// Strips `<...>` spans, shortest match first. Tag content is kept.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tags;

impl TextFilter for Tags {
    fn filter(&self, text: &str) -> String {
        tag_regex().replace_all(text, "").into_owned()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NonAscii;

impl TextFilter for NonAscii {
    fn filter(&self, text: &str) -> String {
        non_ascii_regex().replace_all(text, "").into_owned()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Digits;

impl TextFilter for Digits {
    fn filter(&self, text: &str) -> String {
        digit_regex().replace_all(text, "").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use crate::filter::{Digits, Emoticons, Links, NonAscii, Tags, TextFilter};

    #[test]
    fn test_filter_links() {
        assert_eq!(
            Links.filter("buka https://example.com/a?b=c manje"),
            "buka  manje"
        );
        assert_eq!(Links.filter("ngena www.gov.sz"), "ngena ");
        assert_eq!(Links.filter("http://x.co"), "");
    }

    #[test]
    fn test_filter_links_requires_scheme_or_www() {
        assert_eq!(Links.filter("example.com"), "example.com");
    }

    #[test]
    fn test_filter_emoticons() {
        assert_eq!(Emoticons.filter("yebo :) kahle ;-p"), "yebo  kahle ");
        assert_eq!(Emoticons.filter(":D =^O :/ :\\ :( :]"), "     ");
    }

    #[test]
    fn test_filter_emoticons_needs_a_face() {
        assert_eq!(Emoticons.filter("time: 10"), "time: 10");
        assert_eq!(Emoticons.filter(":d"), ":d");
    }

    #[test]
    fn test_filter_tags() {
        assert_eq!(Tags.filter("<b>bold</b> text"), "bold text");
        assert_eq!(Tags.filter("<a href=\"x\">link</a>"), "link");
    }

    #[test]
    fn test_filter_tags_non_greedy() {
        assert_eq!(Tags.filter("a <x> b <y> c"), "a  b  c");
    }

    #[test]
    fn test_filter_tags_unclosed() {
        assert_eq!(Tags.filter("a < b"), "a < b");
    }

    #[test]
    fn test_filter_non_ascii() {
        assert_eq!(NonAscii.filter("naïve — école"), "nave  cole");
    }

    #[test]
    fn test_filter_digits() {
        assert_eq!(Digits.filter("2day ngi4 123"), "day ngi ");
    }
}
