use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use sswcleaner::{Cleaner, CorrectionTable, Stopwords, TableKind};

use crate::{
    error::{Error, IoError, TableError},
    table::{self, Row},
};

/// Where the resource tables come from.
#[derive(Clone, Copy, Debug)]
pub enum Source<'a> {
    /// Directory holding `Slang.csv`, `Typo.csv`, `Borrowed.csv` and `Stopwords.csv`.
    DataDir(&'a Path),

    /// A single JSON document holding all four tables.
    Json(&'a Path),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ResourceFile {
    slang: HashMap<String, String>,
    typos: HashMap<String, String>,
    borrowed: HashMap<String, String>,
    stopwords: Vec<String>,
}

pub async fn read_file(path: &Path) -> Result<String, Error> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|error| IoError::File(path.to_path_buf(), error.kind()).into())
}

/// Reads one table from `dir`, keeping only its layout columns.
pub async fn read_table(dir: &Path, kind: TableKind) -> Result<Vec<Row>, Error> {
    let layout = table::layout(kind);
    let text = read_file(&dir.join(layout.file)).await?;
    let records = table::parse(layout.file, &text)?;

    Ok(table::select(layout.file, records, layout.columns)?)
}

/// Loads every table from `source` and builds a cleaner over them.
///
/// `base` is merged into the loaded stopwords.
pub async fn load_cleaner(source: Source<'_>, base: Stopwords) -> Result<Cleaner, Error> {
    let cleaner = match source {
        Source::DataDir(dir) => load_data_dir(dir, base).await?,
        Source::Json(path) => load_json(path, base).await?,
    };

    tracing::info!(
        slang = cleaner.slang().len(),
        typos = cleaner.typos().len(),
        borrowed = cleaner.borrowed().len(),
        stopwords = cleaner.stopwords().len(),
        "loaded resource tables"
    );

    Ok(cleaner)
}

async fn load_data_dir(dir: &Path, base: Stopwords) -> Result<Cleaner, Error> {
    let (slang, typos, borrowed, stopwords) = tokio::try_join!(
        read_table(dir, TableKind::Slang),
        read_table(dir, TableKind::Typo),
        read_table(dir, TableKind::Borrowed),
        read_table(dir, TableKind::Stopwords),
    )?;

    let stopwords = base.union(Stopwords::new(stopwords.into_iter().flatten()));

    let cleaner = Cleaner::builder()
        .slang(CorrectionTable::new(TableKind::Slang, pairs(slang))?)
        .typos(CorrectionTable::new(TableKind::Typo, pairs(typos))?)
        .borrowed(CorrectionTable::new(TableKind::Borrowed, pairs(borrowed))?)
        .stopwords(stopwords)
        .build()?;

    Ok(cleaner)
}

async fn load_json(path: &Path, base: Stopwords) -> Result<Cleaner, Error> {
    let text = read_file(path).await?;

    let resources: ResourceFile = serde_json::from_str(&text).map_err(|error| TableError::Json {
        file: path.display().to_string(),
        message: error.to_string(),
    })?;

    let cleaner = Cleaner::builder()
        .slang(CorrectionTable::new(TableKind::Slang, resources.slang)?)
        .typos(CorrectionTable::new(TableKind::Typo, resources.typos)?)
        .borrowed(CorrectionTable::new(TableKind::Borrowed, resources.borrowed)?)
        .stopwords(base.union(Stopwords::new(resources.stopwords)))
        .build()?;

    Ok(cleaner)
}

fn pairs(rows: Vec<Row>) -> impl Iterator<Item = (String, String)> {
    rows.into_iter().filter_map(|row| {
        let [key, value]: [String; 2] = row.try_into().ok()?;
        Some((key, value))
    })
}

/// Reads the lines of every input file, tagged with their source.
pub async fn read_lines(paths: &[PathBuf]) -> Result<Vec<(String, usize, String)>, Error> {
    let mut lines = Vec::new();

    for path in paths {
        let text = read_file(path).await?;
        let source = path.display().to_string();

        lines.extend(
            text.lines()
                .enumerate()
                .map(|(index, line)| (source.clone(), index + 1, line.to_string())),
        );
    }

    Ok(lines)
}
