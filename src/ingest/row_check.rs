use csv::StringRecord;

use crate::model::{CandidateRecord, RowOutcome};

const EXPECTED_HEADER: [&str; 3] = ["name", "surname", "email"];

pub(crate) enum RowCheck {
    Candidate(CandidateRecord),
    Rejected(RowOutcome),
}

pub(crate) fn check_row(record: &StringRecord, line: u64) -> RowCheck {
    if record.len() < 3 {
        return RowCheck::Rejected(RowOutcome::StructuralSkip {
            line,
            reason: format!("expected at least 3 columns, found {}", record.len()),
        });
    }

    let name = record.get(0).unwrap_or_default().trim();
    let surname = record.get(1).unwrap_or_default().trim();
    let email = record.get(2).unwrap_or_default().trim();

    if name.is_empty() && surname.is_empty() && email.is_empty() {
        return RowCheck::Rejected(RowOutcome::BlankRow { line });
    }

    let missing = [("name", name), ("surname", surname), ("email", email)]
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| *field)
        .collect::<Vec<&str>>();

    if !missing.is_empty() {
        return RowCheck::Rejected(RowOutcome::ValidationError {
            line,
            reason: format!("missing required field(s): {}", missing.join(", ")),
        });
    }

    RowCheck::Candidate(CandidateRecord {
        name: name.to_string(),
        surname: surname.to_string(),
        email: email.to_string(),
        line,
    })
}

pub(crate) fn header_mismatch(record: &StringRecord) -> Option<String> {
    if record.len() < 3 {
        return Some(format!(
            "expected at least 3 header columns, found {}",
            record.len()
        ));
    }

    for (index, expected) in EXPECTED_HEADER.iter().enumerate() {
        let found = record.get(index).unwrap_or_default().trim().to_lowercase();
        if found != *expected {
            return Some(format!(
                "expected column {} to be '{}', found '{}'",
                index + 1,
                expected,
                found
            ));
        }
    }

    None
}
