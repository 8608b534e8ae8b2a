//! Flat-file layout of the resource tables.
//!
//! Each table is a comma separated file with a header row. Fields may be
//! wrapped in double quotes, with `""` standing for a literal quote.

use sswcleaner::TableKind;

use crate::error::TableError;

pub type Row = Vec<String>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub file: &'static str,
    pub columns: &'static [&'static str],
}

pub fn layout(kind: TableKind) -> Layout {
    match kind {
        TableKind::Slang => Layout {
            file: "Slang.csv",
            columns: &["slang", "meaning"],
        },
        TableKind::Typo => Layout {
            file: "Typo.csv",
            columns: &["typo", "correct_word"],
        },
        TableKind::Borrowed => Layout {
            file: "Borrowed.csv",
            columns: &["foreign", "siswati_version"],
        },
        TableKind::Stopwords => Layout {
            file: "Stopwords.csv",
            columns: &["stopwords"],
        },
    }
}

/// Splits `text` into records. Blank lines are skipped.
pub fn parse(file: &str, text: &str) -> Result<Vec<Row>, TableError> {
    let mut records = Vec::new();
    let mut record = Row::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if quoted {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => quoted = false,
                _ => field.push(ch),
            }
            continue;
        }

        match ch {
            '"' => quoted = true,
            ',' => record.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => finish(&mut records, &mut record, &mut field),
            _ => field.push(ch),
        }
    }

    if quoted {
        return Err(TableError::UnterminatedQuote {
            file: file.to_string(),
        });
    }

    finish(&mut records, &mut record, &mut field);
    Ok(records)
}

fn finish(records: &mut Vec<Row>, record: &mut Row, field: &mut String) {
    if record.is_empty() && field.is_empty() {
        return;
    }

    record.push(std::mem::take(field));
    records.push(std::mem::take(record));
}

/// Keeps the named `columns` of every data row, in the given order.
pub fn select(file: &str, records: Vec<Row>, columns: &[&str]) -> Result<Vec<Row>, TableError> {
    let mut records = records.into_iter();

    let header = records.next().ok_or_else(|| TableError::Empty {
        file: file.to_string(),
    })?;

    let indices = columns
        .iter()
        .map(|column| {
            header
                .iter()
                .position(|name| name.trim() == *column)
                .ok_or_else(|| TableError::MissingColumn {
                    file: file.to_string(),
                    column: column.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    records
        .enumerate()
        .map(|(position, mut row)| {
            if row.len() != header.len() {
                return Err(TableError::RowWidth {
                    file: file.to_string(),
                    row: position + 1,
                    expected: header.len(),
                    found: row.len(),
                });
            }

            Ok(indices
                .iter()
                .map(|&index| std::mem::take(&mut row[index]))
                .collect())
        })
        .collect()
}

/// Writes a header and rows back out in the format [`parse`] reads.
pub fn render(columns: &[&str], rows: &[Row]) -> String {
    let mut out = String::new();

    write_record(&mut out, columns.iter().copied());
    rows.iter()
        .for_each(|row| write_record(&mut out, row.iter().map(String::as_str)));

    out
}

fn write_record<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>) {
    for (position, field) in fields.enumerate() {
        if position > 0 {
            out.push(',');
        }

        if field.contains([',', '"', '\n', '\r']) {
            out.push('"');
            out.push_str(&field.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(field);
        }
    }

    out.push('\n');
}
