extern crate thiserror;

use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::cleaner::Stage;

/// Identifies one of the four resource tables a cleaner is built from.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum TableKind {
    Slang,
    Typo,
    Borrowed,
    Stopwords,
}

impl TableKind {
    pub const ALL: [TableKind; 4] = [
        TableKind::Slang,
        TableKind::Typo,
        TableKind::Borrowed,
        TableKind::Stopwords,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TableKind::Slang => "slang",
            TableKind::Typo => "typo",
            TableKind::Borrowed => "borrowed",
            TableKind::Stopwords => "stopwords",
        }
    }
}

impl Display for TableKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Construction-time error. A cleaner is never handed out in this state.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing table: {0}")]
    MissingTable(TableKind),

    #[error("Malformed {table} entry {key:?}: {reason}")]
    MalformedEntry {
        table: TableKind,
        key: String,
        reason: &'static str,
    },

    #[error("Expected a {expected} table, got {found}")]
    TableMismatch { expected: TableKind, found: TableKind },
}

/// Failure raised inside a single stage.
#[derive(Debug, Error, PartialEq)]
pub enum StageError {
    #[error("Empty token at position {0}")]
    EmptyToken(usize),
}

/// A stage failure together with the text produced by the last stage that succeeded.
#[derive(Debug, Error, PartialEq)]
#[error("stage `{}` failed: {source}", .stage.name())]
pub struct StageFailure {
    pub stage: Stage,
    pub partial: String,
    #[source]
    pub source: StageError,
}

impl StageFailure {
    pub fn into_partial(self) -> String {
        self.partial
    }
}
