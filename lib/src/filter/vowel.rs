use crate::filter::TextFilter;

pub(crate) const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

#[inline]
pub(crate) fn is_vowel(ch: char) -> bool {
    VOWELS.contains(&ch)
}

/// Collapses runs of one repeated vowel, e.g. `yeeeebo` becomes `yebo`.
///
/// Only identical neighbours collapse, so `ae` or `ou` are left as written.
#[derive(Clone, Copy, Debug, Default)]
pub struct AdjacentVowels;

impl AdjacentVowels {
    pub fn new() -> Self {
        Self
    }
}

impl TextFilter for AdjacentVowels {
    fn filter(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut previous = None;

        for ch in text.chars() {
            if !(is_vowel(ch) && previous == Some(ch)) {
                out.push(ch);
            }
            previous = Some(ch);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use crate::filter::{AdjacentVowels, TextFilter};

    #[test]
    fn test_filter_vowels_collapse() {
        let filter = AdjacentVowels::new();
        assert_eq!(filter.filter("aaaaaaaaeeeeiiiooouu"), "aeiou");
    }

    #[test]
    fn test_filter_vowels_consonants_untouched() {
        let filter = AdjacentVowels::new();
        assert_eq!(filter.filter("yeeeess"), "yess");
    }

    #[test]
    fn test_filter_vowels_distinct_neighbours_kept() {
        let filter = AdjacentVowels::new();
        assert_eq!(filter.filter("lapho uaeoi"), "lapho uaeoi");
    }

    #[test]
    fn test_filter_vowels_across_words() {
        let filter = AdjacentVowels::new();
        assert_eq!(filter.filter("mine e"), "mine e");
        assert_eq!(filter.filter("ee ee"), "e e");
    }

    #[test]
    fn test_filter_vowels_uppercase_untouched() {
        let filter = AdjacentVowels::new();
        assert_eq!(filter.filter("AAA"), "AAA");
    }
}
