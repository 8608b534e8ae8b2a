extern crate clap;

use std::{num::NonZeroUsize, path::PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use sswcleaner::TableKind;

#[derive(Debug, Parser)]
#[command(name = "sswcleaner", version, about = "siSwati text cleaning for NLP tasks")]
pub struct Cli {
    #[command(flatten)]
    pub resources: ResourceArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct ResourceArgs {
    /// Directory holding Slang.csv, Typo.csv, Borrowed.csv and Stopwords.csv.
    #[arg(long, short = 'd', global = true, default_value = "data")]
    pub data_dir: PathBuf,

    /// JSON file with `slang`, `typos`, `borrowed` and `stopwords`, used instead of --data-dir.
    #[arg(long, short = 'r', global = true)]
    pub resources: Option<PathBuf>,

    /// Do not merge the English stopword list into the loaded stopwords.
    #[arg(long, global = true)]
    pub no_english_stopwords: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Clean each TEXT argument, or every stdin line when none is given.
    Clean(Clean),

    /// Clean input files line by line on a worker pool.
    Bulk(Bulk),

    /// Append entries from a CSV file to one of the tables under --data-dir.
    Update(Update),
}

#[derive(Debug, Parser)]
pub struct Clean {
    pub text: Vec<String>,
}

#[derive(Debug, Parser)]
pub struct Bulk {
    #[arg(long, short = 'i', required = true, num_args = 1..)]
    pub input: Vec<PathBuf>,

    #[arg(long, short = 'w', default_value = "4")]
    pub workers: NonZeroUsize,

    /// Emit one JSON record per line instead of plain text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
pub struct Update {
    #[arg(long, short = 't', value_enum)]
    pub table: TableArg,

    #[arg(long, short = 'f')]
    pub from: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum TableArg {
    Slang,
    Typo,
    Borrowed,
    Stopwords,
}

impl From<TableArg> for TableKind {
    fn from(value: TableArg) -> Self {
        match value {
            TableArg::Slang => TableKind::Slang,
            TableArg::Typo => TableKind::Typo,
            TableArg::Borrowed => TableKind::Borrowed,
            TableArg::Stopwords => TableKind::Stopwords,
        }
    }
}
