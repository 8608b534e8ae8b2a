use crate::filter::TextFilter;

/// Unicode-aware case folding to lowercase.
#[derive(Clone, Copy, Debug, Default)]
pub struct Lowercase;

impl Lowercase {
    pub fn new() -> Self {
        Self
    }
}

impl TextFilter for Lowercase {
    fn filter(&self, text: &str) -> String {
        text.to_lowercase()
    }
}
