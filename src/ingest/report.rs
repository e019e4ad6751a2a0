use tracing::{info, warn};

use crate::model::{IngestionStats, RowOutcome};

pub(crate) fn emit(outcome: &RowOutcome) {
    match outcome {
        RowOutcome::Inserted { line, record } => {
            info!(
                line,
                name = %record.name,
                surname = %record.surname,
                email = %record.email,
                "inserted user"
            );
        }
        RowOutcome::WouldInsert { line, record } => {
            info!(
                line,
                name = %record.name,
                surname = %record.surname,
                email = %record.email,
                "would insert user (dry run)"
            );
        }
        RowOutcome::DuplicateEmail { line, record } => {
            warn!(line, email = %record.email, "possible duplicate email, row not inserted");
        }
        RowOutcome::ValidationError { line, reason } => {
            warn!(line, reason = %reason, "invalid row, not inserted");
        }
        RowOutcome::StorageError { line, message } => {
            warn!(line, error = %message, "failed to store row");
        }
        RowOutcome::StructuralSkip { line, reason } => {
            warn!(line, reason = %reason, "skipping malformed row");
        }
        RowOutcome::BlankRow { line } => {
            info!(line, "skipping blank row");
        }
    }
}

pub(crate) fn emit_header_warning(reason: &str) {
    warn!(reason = %reason, "header row does not match name,surname,email");
}

pub(crate) fn emit_summary(stats: &IngestionStats) {
    info!(
        lines_read = stats.lines_read,
        processed = stats.processed,
        errors = stats.errors,
        skipped = stats.skipped,
        "ingest completed"
    );
}
