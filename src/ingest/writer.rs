use postgres::Client;
use postgres::error::SqlState;

use crate::model::CleanRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    Written,
    DuplicateKey,
    StorageFailure(String),
}

// Persistence capability handed to the pipeline; the pipeline never learns
// which implementation it holds beyond `simulated`.
pub trait RecordWriter {
    fn write(&mut self, record: &CleanRecord) -> WriteResult;

    fn simulated(&self) -> bool {
        false
    }
}

pub struct PersistingWriter {
    client: Client,
}

impl PersistingWriter {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl RecordWriter for PersistingWriter {
    fn write(&mut self, record: &CleanRecord) -> WriteResult {
        let result = self.client.execute(
            "INSERT INTO users(name, surname, email) VALUES ($1, $2, $3)",
            &[&record.name, &record.surname, &record.email],
        );

        match result {
            Ok(_) => WriteResult::Written,
            Err(err) if err.code() == Some(&SqlState::UNIQUE_VIOLATION) => {
                WriteResult::DuplicateKey
            }
            Err(err) => WriteResult::StorageFailure(err.to_string()),
        }
    }
}

pub struct DryRunWriter;

impl RecordWriter for DryRunWriter {
    fn write(&mut self, _record: &CleanRecord) -> WriteResult {
        WriteResult::Written
    }

    fn simulated(&self) -> bool {
        true
    }
}
