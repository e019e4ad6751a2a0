use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};
use tracing::info;

use crate::model::{IngestionStats, RowOutcome};

use super::normalize::Normalizer;
use super::report;
use super::row_check::{self, RowCheck};
use super::writer::{RecordWriter, WriteResult};

pub fn run_ingestion(path: &Path, writer: &mut dyn RecordWriter) -> Result<IngestionStats> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;

    info!(file = %path.display(), "starting ingest");

    ingest_from_reader(file, writer)
}

pub(crate) fn ingest_from_reader<R: Read>(
    input: R,
    writer: &mut dyn RecordWriter,
) -> Result<IngestionStats> {
    let normalizer = Normalizer::new()?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut stats = IngestionStats::default();
    let mut records = reader.records();

    // Row 1 is always consumed as the header and excluded from the counters.
    match records.next() {
        Some(first) => {
            let header = first.context("failed to read input")?;
            if let Some(reason) = row_check::header_mismatch(&header) {
                report::emit_header_warning(&reason);
            }
        }
        None => {
            report::emit_summary(&stats);
            return Ok(stats);
        }
    }

    let mut line: u64 = 1;
    for result in records {
        let record = result.context("failed to read input")?;
        line = record.position().map_or(line + 1, |pos| pos.line());
        stats.lines_read += 1;

        let outcome = process_row(&record, line, &normalizer, writer);
        stats.record(&outcome);
        report::emit(&outcome);
    }

    report::emit_summary(&stats);

    Ok(stats)
}

// Every row resolves to exactly one outcome; row-level failures never
// escape this function.
pub(super) fn process_row(
    record: &StringRecord,
    line: u64,
    normalizer: &Normalizer,
    writer: &mut dyn RecordWriter,
) -> RowOutcome {
    let candidate = match row_check::check_row(record, line) {
        RowCheck::Candidate(candidate) => candidate,
        RowCheck::Rejected(outcome) => return outcome,
    };

    let Some(clean) = normalizer.normalize(&candidate) else {
        return RowOutcome::ValidationError {
            line,
            reason: format!("invalid email format: {}", candidate.email),
        };
    };

    match writer.write(&clean) {
        WriteResult::Written if writer.simulated() => RowOutcome::WouldInsert {
            line,
            record: clean,
        },
        WriteResult::Written => RowOutcome::Inserted {
            line,
            record: clean,
        },
        WriteResult::DuplicateKey => RowOutcome::DuplicateEmail {
            line,
            record: clean,
        },
        WriteResult::StorageFailure(message) => RowOutcome::StorageError { line, message },
    }
}
