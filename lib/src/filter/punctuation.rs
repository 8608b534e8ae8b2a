use crate::filter::TextFilter;

#[derive(Clone, Copy, Debug, Default)]
pub struct Punctuation;

impl Punctuation {
    pub fn new() -> Self {
        Self
    }
}

impl TextFilter for Punctuation {
    fn filter(&self, text: &str) -> String {
        text.chars().filter(|ch| !ch.is_ascii_punctuation()).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::filter::{Punctuation, TextFilter};

    #[test]
    fn test_filter_punctuation() {
        let filter = Punctuation::new();
        assert_eq!(
            filter.filter("sawubona!!! unjani? (kahle), e-mail"),
            "sawubona unjani kahle email"
        );
    }

    #[test]
    fn test_filter_punctuation_full_ascii_set() {
        let filter = Punctuation::new();
        assert_eq!(filter.filter(r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##), "");
    }
}
