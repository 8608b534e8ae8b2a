//! siSwati text cleaning for NLP pipelines.
//!
//! Informal siSwati, mixed with English and slang, is rewritten into a
//! canonical form by an ordered pipeline of stages. See [`Stage::ORDER`].
//!
//! ```
//! use sswcleaner::{Cleaner, CorrectionTable, Stopwords, TableKind};
//!
//! let cleaner = Cleaner::builder()
//!     .slang(CorrectionTable::empty(TableKind::Slang))
//!     .typos(CorrectionTable::new(TableKind::Typo, [("tengi", "tenga")]).unwrap())
//!     .borrowed(CorrectionTable::empty(TableKind::Borrowed))
//!     .stopwords(Stopwords::new(["bro"]))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(cleaner.clean("Ngiya TENG bro!!!"), "ngiya tenga");
//! ```

pub mod cleaner;
pub mod error;
pub mod filter;
pub mod normalizer;
pub mod token;
pub mod tokenizer;

pub use {
    cleaner::{Cleaner, CleanerBuilder, Stage},
    error::{ConfigError, StageError, StageFailure, TableKind},
    normalizer::{CorrectionTable, Stopwords},
};
