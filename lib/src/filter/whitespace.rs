use crate::{filter::TextFilter, tokenizer::is_separator};

/// Collapses every separator run into one space and trims both ends.
#[derive(Clone, Copy, Debug, Default)]
pub struct CollapseWhitespace;

impl CollapseWhitespace {
    pub fn new() -> Self {
        Self
    }
}

impl TextFilter for CollapseWhitespace {
    fn filter(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());

        for word in text.split(is_separator).filter(|word| !word.is_empty()) {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(word);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use crate::filter::{CollapseWhitespace, TextFilter};

    #[test]
    fn test_filter_whitespace_runs() {
        let filter = CollapseWhitespace::new();
        assert_eq!(filter.filter("  ngiya \t\n tenga   "), "ngiya tenga");
    }

    #[test]
    fn test_filter_whitespace_only() {
        let filter = CollapseWhitespace::new();
        assert_eq!(filter.filter(" \u{3000}\t "), "");
    }

    #[test]
    fn test_filter_whitespace_information_separators() {
        let filter = CollapseWhitespace::new();
        assert_eq!(filter.filter("\x1cyebo\x1fbo\x1e"), "yebo bo");
    }
}
