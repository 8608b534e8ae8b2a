extern crate crossbeam_channel;

use std::{num::NonZeroUsize, sync::Arc, thread};

use crossbeam_channel::unbounded;
use serde::Serialize;
use sswcleaner::Cleaner;

/// One input line and, once the pool has run, its cleaned text.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Record {
    pub source: String,
    pub line: usize,
    pub text: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Report {
    pub lines: usize,
    pub degraded: usize,
}

/// Cleans `records` in place on `workers` threads sharing one cleaner.
///
/// Output order always matches input order.
pub fn clean_records(
    cleaner: Arc<Cleaner>,
    records: &mut [Record],
    workers: NonZeroUsize,
) -> Report {
    let (job_tx, job_rx) = unbounded::<(usize, String)>();
    let (result_tx, result_rx) = unbounded::<(usize, String, bool)>();

    let handles = (0..workers.get())
        .map(|_| {
            let cleaner = Arc::clone(&cleaner);
            let job_rx = job_rx.clone();
            let result_tx = result_tx.clone();

            thread::spawn(move || {
                for (index, text) in job_rx.iter() {
                    let (cleaned, degraded) = match cleaner.try_clean(&text) {
                        Ok(cleaned) => (cleaned, false),
                        Err(failure) => {
                            tracing::warn!(index, error = %failure, "line degraded");
                            (failure.into_partial(), true)
                        }
                    };

                    if result_tx.send((index, cleaned, degraded)).is_err() {
                        break;
                    }
                }
            })
        })
        .collect::<Vec<_>>();

    drop(result_tx);

    for (index, record) in records.iter_mut().enumerate() {
        // `job_rx` is still alive in this scope, so sending cannot fail.
        let _ = job_tx.send((index, std::mem::take(&mut record.text)));
    }
    drop(job_tx);

    let mut report = Report::default();

    for (index, cleaned, degraded) in result_rx.iter() {
        records[index].text = cleaned;
        report.lines += 1;
        report.degraded += usize::from(degraded);
    }

    for handle in handles {
        if handle.join().is_err() {
            tracing::error!("bulk worker panicked");
        }
    }

    tracing::info!(
        lines = report.lines,
        degraded = report.degraded,
        workers = workers.get(),
        "bulk clean finished"
    );

    report
}
