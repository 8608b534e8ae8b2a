mod bulk;
mod cli;
mod error;
mod read;
mod table;
mod update;

use std::{
    io::{BufWriter, Write},
    process::ExitCode,
    sync::Arc,
};

use clap::Parser;
use sswcleaner::{Cleaner, Stopwords, TableKind};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::EnvFilter;

use crate::{
    bulk::Record,
    cli::{Cli, Command, ResourceArgs},
    error::{Error, IoError},
    read::Source,
};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Error> {
    match cli.command {
        Command::Clean(args) => {
            let cleaner = load(&cli.resources).await?;

            if args.text.is_empty() {
                clean_stdin(&cleaner).await
            } else {
                let cleaned = args.text.iter().map(|text| cleaner.clean(text));
                write_lines(cleaned)
            }
        }

        Command::Bulk(args) => {
            let cleaner = Arc::new(load(&cli.resources).await?);

            let mut records = read::read_lines(&args.input)
                .await?
                .into_iter()
                .map(|(source, line, text)| Record { source, line, text })
                .collect::<Vec<_>>();

            bulk::clean_records(cleaner, &mut records, args.workers);

            if args.json {
                let json = records.iter().map(|record| {
                    serde_json::to_string(record).unwrap_or_else(|error| {
                        tracing::error!(line = record.line, %error, "failed to encode record");
                        String::new()
                    })
                });
                write_lines(json)
            } else {
                write_lines(records.into_iter().map(|record| record.text))
            }
        }

        Command::Update(args) => {
            let summary =
                update::update_table(&cli.resources.data_dir, args.table.into(), &args.from)
                    .await?;

            write_lines([format!(
                "{}: {} existing, {} added",
                TableKind::from(args.table),
                summary.existing,
                summary.added
            )])
        }
    }
}

async fn load(args: &ResourceArgs) -> Result<Cleaner, Error> {
    let base = if args.no_english_stopwords {
        Stopwords::default()
    } else {
        Stopwords::english()
    };

    let source = match &args.resources {
        Some(path) => Source::Json(path),
        None => Source::DataDir(&args.data_dir),
    };

    read::load_cleaner(source, base).await
}

async fn clean_stdin(cleaner: &Cleaner) -> Result<(), Error> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut out = tokio::io::BufWriter::new(tokio::io::stdout());

    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|error| IoError::Stdin(error.kind()))?
    {
        let mut cleaned = cleaner.clean(&line);
        cleaned.push('\n');

        out.write_all(cleaned.as_bytes())
            .await
            .map_err(|error| IoError::Stdout(error.kind()))?;
    }

    out.flush()
        .await
        .map_err(|error| IoError::Stdout(error.kind()).into())
}

fn write_lines<I, S>(lines: I) -> Result<(), Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = BufWriter::new(std::io::stdout().lock());

    for line in lines {
        writeln!(out, "{}", line.as_ref()).map_err(|error| IoError::Stdout(error.kind()))?;
    }

    out.flush()
        .map_err(|error| IoError::Stdout(error.kind()).into())
}
