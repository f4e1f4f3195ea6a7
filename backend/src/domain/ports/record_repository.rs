//! Driven port for the external persistence layer.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::records::{FormRecord, Persisted, RecordId};

define_port_error! {
    /// Errors raised by persistence adapters.
    pub enum PersistenceError {
        /// No stored record carries the identifier.
        NotFound { kind: String, id: String } =>
            "{kind} {id} not found",
        /// The record collides with a stored one.
        Conflict { message: String } =>
            "record conflicts with existing data: {message}",
        /// The store could not be reached or failed mid-operation.
        Unavailable { message: String } =>
            "persistence layer unavailable: {message}",
    }
}

/// Create/update contract of the persistence layer for one record kind.
#[async_trait]
pub trait RecordRepository<R: FormRecord>: Send + Sync {
    /// Store a new record and assign it an identifier.
    async fn create(&self, record: R) -> Result<Persisted<R>, PersistenceError>;

    /// Replace every field of the record stored under `id`.
    async fn update(&self, id: RecordId, record: R) -> Result<Persisted<R>, PersistenceError>;

    /// Fetch one record.
    async fn find(&self, id: RecordId) -> Result<Option<Persisted<R>>, PersistenceError>;

    /// Fetch every stored record, oldest first.
    async fn list(&self) -> Result<Vec<Persisted<R>>, PersistenceError>;
}
