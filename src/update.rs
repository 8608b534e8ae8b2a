use std::{collections::HashSet, io::ErrorKind, path::Path};

use sswcleaner::TableKind;

use crate::{
    error::{Error, IoError},
    read::read_file,
    table::{self, Row},
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UpdateSummary {
    pub existing: usize,
    pub added: usize,
}

/// Appends `incoming` to `existing`, skipping rows already present.
///
/// Duplicates are whole-row matches; a trigger mapped to a new replacement
/// is appended and wins when the table is loaded.
pub fn merge(existing: Vec<Row>, incoming: Vec<Row>) -> (Vec<Row>, usize) {
    let mut seen = HashSet::with_capacity(existing.len() + incoming.len());
    let mut merged = Vec::with_capacity(existing.len() + incoming.len());

    for row in existing {
        if seen.insert(row.clone()) {
            merged.push(row);
        }
    }

    let before = merged.len();

    for row in incoming {
        if seen.insert(row.clone()) {
            merged.push(row);
        }
    }

    let added = merged.len() - before;
    (merged, added)
}

/// Merges the entries of the CSV at `from` into the `kind` table under `dir`.
///
/// A table file that does not exist yet is created.
pub async fn update_table(dir: &Path, kind: TableKind, from: &Path) -> Result<UpdateSummary, Error> {
    let layout = table::layout(kind);
    let target = dir.join(layout.file);

    let existing = match tokio::fs::read_to_string(&target).await {
        Ok(text) => {
            let records = table::parse(layout.file, &text)?;
            table::select(layout.file, records, layout.columns)?
        }
        Err(error) if error.kind() == ErrorKind::NotFound => {
            tracing::info!(file = %target.display(), "creating new table file");
            Vec::new()
        }
        Err(error) => return Err(IoError::File(target, error.kind()).into()),
    };

    let source = from.display().to_string();
    let incoming = {
        let records = table::parse(&source, &read_file(from).await?)?;
        table::select(&source, records, layout.columns)?
    };

    let existing_count = existing.len();
    let (merged, added) = merge(existing, incoming);

    tokio::fs::write(&target, table::render(layout.columns, &merged))
        .await
        .map_err(|error| IoError::File(target.clone(), error.kind()))?;

    tracing::info!(table = %kind, existing = existing_count, added, "table updated");

    Ok(UpdateSummary {
        existing: existing_count,
        added,
    })
}

#[cfg(test)]
mod tests {
    use sswcleaner::TableKind;

    use crate::{
        read::read_table,
        update::{merge, update_table, UpdateSummary},
    };

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|field| field.to_string()).collect()
    }

    #[test]
    fn test_merge_drops_duplicates_keeps_order() {
        let existing = vec![row(&["gudi", "kuhle"]), row(&["loli", "kuhleka"])];
        let incoming = vec![
            row(&["loli", "kuhleka"]),
            row(&["smhi", "ngiyadzinwa"]),
            row(&["smhi", "ngiyadzinwa"]),
        ];

        let (merged, added) = merge(existing, incoming);

        assert_eq!(added, 1);
        assert_eq!(
            merged,
            vec![
                row(&["gudi", "kuhle"]),
                row(&["loli", "kuhleka"]),
                row(&["smhi", "ngiyadzinwa"]),
            ]
        );
    }

    #[test]
    fn test_merge_keeps_changed_replacement() {
        let (merged, added) = merge(
            vec![row(&["gudi", "kuhle"])],
            vec![row(&["gudi", "kahle"])],
        );

        assert_eq!(added, 1);
        assert_eq!(merged.len(), 2);
    }

    #[tokio::test]
    async fn test_update_table() {
        let dir = std::env::temp_dir().join(format!("sswcleaner-update-{}", std::process::id()));
        tokio::fs::create_dir_all(&dir).await.unwrap();

        let target = dir.join("Slang.csv");
        let from = dir.join("new-slang.csv");

        tokio::fs::write(&target, "slang,meaning\nloli,kuhleka\n")
            .await
            .unwrap();
        tokio::fs::write(&from, "meaning,slang\nkuhleka,loli\n\"ngiyadzinwa, kakhulu\",smhi\n")
            .await
            .unwrap();

        let summary = update_table(&dir, TableKind::Slang, &from).await.unwrap();
        assert_eq!(
            summary,
            UpdateSummary {
                existing: 1,
                added: 1
            }
        );

        let rows = read_table(&dir, TableKind::Slang).await.unwrap();
        assert_eq!(
            rows,
            vec![
                row(&["loli", "kuhleka"]),
                row(&["smhi", "ngiyadzinwa, kakhulu"]),
            ]
        );
    }

    #[tokio::test]
    async fn test_update_table_creates_missing_file() {
        let dir = std::env::temp_dir().join(format!("sswcleaner-create-{}", std::process::id()));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let _ = tokio::fs::remove_file(dir.join("Stopwords.csv")).await;

        let from = dir.join("new-stopwords.csv");
        tokio::fs::write(&from, "stopwords\nfutsi\nfutsi\nkodvwa\n")
            .await
            .unwrap();

        let summary = update_table(&dir, TableKind::Stopwords, &from).await.unwrap();
        assert_eq!(
            summary,
            UpdateSummary {
                existing: 0,
                added: 2
            }
        );

        let text = tokio::fs::read_to_string(dir.join("Stopwords.csv"))
            .await
            .unwrap();
        assert_eq!(text, "stopwords\nfutsi\nkodvwa\n");
    }
}
