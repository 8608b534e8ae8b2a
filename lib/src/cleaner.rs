//! The cleaning pipeline.
//!
//! A [`Cleaner`] owns the four resource tables and runs the fifteen stages of
//! [`Stage::ORDER`] over every input. Results depend on the order: the final
//! vowel rule runs before any table lookup, so table keys have to be written
//! the way the text looks at that point (`tengi`, not `teng`).

use std::fmt::{Display, Formatter};

use hashbrown::HashSet;

use crate::{
    error::{ConfigError, StageError, StageFailure, TableKind},
    filter::{
        vowel::is_vowel, AdjacentVowels, CollapseWhitespace, Digits, Emojis, Emoticons, Links,
        Lowercase, NonAscii, Punctuation, Tags, TextFilter,
    },
    normalizer::{CorrectionTable, FinalVowel, Stopwords, TextNormalizer},
    tokenizer::{Standard, TextTokenizer, Whitespace, CONTRACTIONS},
};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Stage {
    Lowercase,
    Whitespace,
    Links,
    Emojis,
    Emoticons,
    Tags,
    NonAscii,
    Punctuation,
    AdjacentVowels,
    FinalVowel,
    Typos,
    Slang,
    Stopwords,
    Borrowed,
    Digits,
}

impl Stage {
    /// The order [`Cleaner::clean`] runs the stages in.
    pub const ORDER: [Stage; 15] = [
        Stage::Lowercase,
        Stage::Whitespace,
        Stage::Links,
        Stage::Emojis,
        Stage::Emoticons,
        Stage::Tags,
        Stage::NonAscii,
        Stage::Punctuation,
        Stage::AdjacentVowels,
        Stage::FinalVowel,
        Stage::Typos,
        Stage::Slang,
        Stage::Stopwords,
        Stage::Borrowed,
        Stage::Digits,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Stage::Lowercase => "lowercase",
            Stage::Whitespace => "whitespace",
            Stage::Links => "links",
            Stage::Emojis => "emojis",
            Stage::Emoticons => "emoticons",
            Stage::Tags => "tags",
            Stage::NonAscii => "non-ascii",
            Stage::Punctuation => "punctuation",
            Stage::AdjacentVowels => "adjacent-vowels",
            Stage::FinalVowel => "final-vowel",
            Stage::Typos => "typos",
            Stage::Slang => "slang",
            Stage::Stopwords => "stopwords",
            Stage::Borrowed => "borrowed",
            Stage::Digits => "digits",
        }
    }
}

impl Display for Stage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// siSwati text cleaner.
///
/// Tables are bound once at construction and never change afterwards, so a
/// single cleaner can be shared between threads behind an `Arc`.
#[derive(Clone, Debug)]
pub struct Cleaner {
    slang: CorrectionTable,
    typos: CorrectionTable,
    borrowed: CorrectionTable,
    stopwords: Stopwords,
}

impl Cleaner {
    pub fn new(
        slang: CorrectionTable,
        typos: CorrectionTable,
        borrowed: CorrectionTable,
        stopwords: Stopwords,
    ) -> Result<Self, ConfigError> {
        expect_kind(&slang, TableKind::Slang)?;
        expect_kind(&typos, TableKind::Typo)?;
        expect_kind(&borrowed, TableKind::Borrowed)?;

        let cleaner = Self {
            slang,
            typos,
            borrowed,
            stopwords,
        };

        cleaner.report_unreachable();

        tracing::debug!(
            slang = cleaner.slang.len(),
            typos = cleaner.typos.len(),
            borrowed = cleaner.borrowed.len(),
            stopwords = cleaner.stopwords.len(),
            "cleaner ready"
        );

        Ok(cleaner)
    }

    pub fn builder() -> CleanerBuilder {
        CleanerBuilder::default()
    }

    pub fn slang(&self) -> &CorrectionTable {
        &self.slang
    }

    pub fn typos(&self) -> &CorrectionTable {
        &self.typos
    }

    pub fn borrowed(&self) -> &CorrectionTable {
        &self.borrowed
    }

    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    /// Cleans `text`. Never fails.
    ///
    /// When a stage fails the remaining stages are skipped and the text
    /// produced by the last successful stage is returned.
    pub fn clean(&self, text: &str) -> String {
        match self.try_clean(text) {
            Ok(cleaned) => cleaned,
            Err(failure) => {
                tracing::warn!(
                    stage = %failure.stage,
                    error = %failure.source,
                    "clean degraded, returning partial text"
                );
                failure.into_partial()
            }
        }
    }

    /// Cleans `text`, reporting the first stage failure instead of degrading.
    pub fn try_clean(&self, text: &str) -> Result<String, StageFailure> {
        run_stages(text, &Stage::ORDER, |stage, current| self.apply(stage, current))
    }

    /// Runs a single stage over `text`.
    pub fn apply(&self, stage: Stage, text: &str) -> Result<String, StageError> {
        match stage {
            Stage::Lowercase => Ok(Lowercase.filter(text)),
            Stage::Whitespace => Ok(CollapseWhitespace.filter(text)),
            Stage::Links => Ok(Links.filter(text)),
            Stage::Emojis => Ok(Emojis.filter(text)),
            Stage::Emoticons => Ok(Emoticons.filter(text)),
            Stage::Tags => Ok(Tags.filter(text)),
            Stage::NonAscii => Ok(NonAscii.filter(text)),
            Stage::Punctuation => Ok(Punctuation.filter(text)),
            Stage::AdjacentVowels => Ok(AdjacentVowels.filter(text)),
            Stage::FinalVowel => tokenwise(&Whitespace, &FinalVowel, text),
            Stage::Typos => tokenwise(&Whitespace, &self.typos, text),
            Stage::Slang => tokenwise(&Whitespace, &self.slang, text),
            Stage::Stopwords => tokenwise(&Standard, &self.stopwords, text),
            Stage::Borrowed => tokenwise(&Whitespace, &self.borrowed, text),
            Stage::Digits => Ok(Digits.filter(text)),
        }
    }

    /// Table entries the pipeline can never match, with the reason why.
    ///
    /// Input words reach every lookup lowercased, stripped down to ASCII
    /// letters and digits, and given a final vowel. The later lookups also see
    /// the words of earlier replacements, which skip those rules: typo values
    /// feed the slang lookup, and typo and slang values feed the stopword and
    /// borrowed lookups after word tokenization. A key that does not look like
    /// an input word is still reachable when one of those values produces it.
    pub fn unreachable_entries(&self) -> Vec<(TableKind, &str, &'static str)> {
        let after_typos = self
            .typos
            .replacements()
            .flat_map(|value| Whitespace.tokenize(value))
            .map(String::from)
            .collect::<HashSet<_>>();

        let contractions = CONTRACTIONS
            .iter()
            .map(|&(word, _)| word)
            .filter(|word| unreachable_reason(word).is_none());

        let after_slang = self
            .typos
            .replacements()
            .chain(self.slang.replacements())
            .chain(contractions)
            .flat_map(|value| Standard.tokenize(value))
            .map(String::from)
            .collect::<HashSet<_>>();

        let produced = |kind: TableKind, key: &str| match kind {
            TableKind::Typo => false,
            TableKind::Slang => after_typos.contains(key),
            TableKind::Borrowed | TableKind::Stopwords => after_slang.contains(key),
        };

        let tables = [&self.slang, &self.typos, &self.borrowed];

        let mut entries = tables
            .into_iter()
            .flat_map(|table| table.triggers().map(move |key| (table.kind(), key)))
            .chain(self.stopwords.iter().map(|word| (TableKind::Stopwords, word)))
            .filter_map(|(kind, key)| {
                let reason = unreachable_reason(key)?;
                (!produced(kind, key)).then_some((kind, key, reason))
            })
            .collect::<Vec<_>>();

        entries.sort_unstable();
        entries
    }

    fn report_unreachable(&self) {
        let entries = self.unreachable_entries();

        for kind in TableKind::ALL {
            let mut matching = entries.iter().filter(|(table, ..)| *table == kind);

            if let Some((_, example, reason)) = matching.next() {
                tracing::warn!(
                    table = %kind,
                    count = matching.count() + 1,
                    example = %example,
                    reason = %reason,
                    "table entries can never match"
                );
            }
        }
    }
}

fn expect_kind(table: &CorrectionTable, expected: TableKind) -> Result<(), ConfigError> {
    if table.kind() == expected {
        Ok(())
    } else {
        Err(ConfigError::TableMismatch {
            expected,
            found: table.kind(),
        })
    }
}

fn tokenwise<T, N>(tokenizer: &T, normalizer: &N, text: &str) -> Result<String, StageError>
where
    T: TextTokenizer,
    N: TextNormalizer,
{
    let mut tokens = tokenizer.tokenize(text);
    normalizer.normalize(&mut tokens)?;
    Ok(tokens.join(" "))
}

fn run_stages<F>(text: &str, stages: &[Stage], mut apply: F) -> Result<String, StageFailure>
where
    F: FnMut(Stage, &str) -> Result<String, StageError>,
{
    let mut current = text.to_string();

    for &stage in stages {
        match apply(stage, &current) {
            Ok(next) => {
                tracing::trace!(%stage, text = %next);
                current = next;
            }
            Err(source) => {
                return Err(StageFailure {
                    stage,
                    partial: current,
                    source,
                })
            }
        }
    }

    Ok(current)
}

fn unreachable_reason(key: &str) -> Option<&'static str> {
    if key.chars().any(char::is_whitespace) {
        return Some("contains whitespace");
    }

    if !key.is_ascii() {
        return Some("contains non-ascii characters");
    }

    if key.chars().any(|ch| ch.is_ascii_uppercase()) {
        return Some("contains uppercase letters");
    }

    if key.chars().any(|ch| ch.is_ascii_punctuation()) {
        return Some("contains punctuation");
    }

    let repeated = key
        .as_bytes()
        .windows(2)
        .any(|pair| pair[0] == pair[1] && is_vowel(pair[0] as char));

    if repeated {
        return Some("contains a repeated vowel");
    }

    match key.chars().next_back() {
        Some(last) if !is_vowel(last) => Some("ends in a consonant"),
        _ => None,
    }
}

/// Collects the four tables and binds them all at once.
#[derive(Debug, Default)]
pub struct CleanerBuilder {
    slang: Option<CorrectionTable>,
    typos: Option<CorrectionTable>,
    borrowed: Option<CorrectionTable>,
    stopwords: Option<Stopwords>,
}

impl CleanerBuilder {
    pub fn slang(mut self, table: CorrectionTable) -> Self {
        self.slang = Some(table);
        self
    }

    pub fn typos(mut self, table: CorrectionTable) -> Self {
        self.typos = Some(table);
        self
    }

    pub fn borrowed(mut self, table: CorrectionTable) -> Self {
        self.borrowed = Some(table);
        self
    }

    pub fn stopwords(mut self, stopwords: Stopwords) -> Self {
        self.stopwords = Some(stopwords);
        self
    }

    pub fn build(self) -> Result<Cleaner, ConfigError> {
        let slang = self.slang.ok_or(ConfigError::MissingTable(TableKind::Slang))?;
        let typos = self.typos.ok_or(ConfigError::MissingTable(TableKind::Typo))?;
        let borrowed = self
            .borrowed
            .ok_or(ConfigError::MissingTable(TableKind::Borrowed))?;
        let stopwords = self
            .stopwords
            .ok_or(ConfigError::MissingTable(TableKind::Stopwords))?;

        Cleaner::new(slang, typos, borrowed, stopwords)
    }
}
