use crate::filter::TextFilter;

/// Drops every character outside the 7-bit range. Nothing is transliterated.
#[derive(Clone, Copy, Debug, Default)]
pub struct Emojis;

impl Emojis {
    pub fn new() -> Self {
        Self
    }
}

impl TextFilter for Emojis {
    fn filter(&self, text: &str) -> String {
        text.chars().filter(char::is_ascii).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::filter::{Emojis, TextFilter};

    #[test]
    fn test_filter_emojis() {
        let filter = Emojis::new();
        assert_eq!(filter.filter("yebo 😀🔥 kahle"), "yebo  kahle");
    }

    #[test]
    fn test_filter_emojis_drops_accents() {
        let filter = Emojis::new();
        assert_eq!(filter.filter("café"), "caf");
    }
}
