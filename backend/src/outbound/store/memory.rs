//! In-memory record store.
//!
//! Records live in insertion order behind an async `RwLock`, so `list`
//! returns the oldest record first. Natural keys (usernames) are unique per
//! store; a write colliding with another record's key is a conflict.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::ports::{PersistenceError, RecordRepository};
use crate::domain::{FormRecord, Persisted, RecordId};

/// [`RecordRepository`] keeping one record kind in process memory.
#[derive(Debug)]
pub struct MemoryRecordStore<R> {
    records: RwLock<Vec<Persisted<R>>>,
}

impl<R> Default for MemoryRecordStore<R> {
    fn default() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl<R: FormRecord> MemoryRecordStore<R> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether nothing has been stored yet.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

fn ensure_unique<R: FormRecord>(
    records: &[Persisted<R>],
    candidate: &R,
    exclude: Option<RecordId>,
) -> Result<(), PersistenceError> {
    let Some(key) = candidate.natural_key() else {
        return Ok(());
    };
    let taken = records
        .iter()
        .filter(|stored| Some(stored.id) != exclude)
        .any(|stored| stored.record.natural_key() == Some(key));
    if taken {
        return Err(PersistenceError::conflict(format!(
            "{} {key:?} already exists",
            R::KIND
        )));
    }
    Ok(())
}

#[async_trait]
impl<R: FormRecord> RecordRepository<R> for MemoryRecordStore<R> {
    async fn create(&self, record: R) -> Result<Persisted<R>, PersistenceError> {
        let mut records = self.records.write().await;
        ensure_unique(&records, &record, None)?;
        let persisted = Persisted::new(RecordId::random(), record);
        records.push(persisted.clone());
        debug!(kind = R::KIND, id = %persisted.id, "record created");
        Ok(persisted)
    }

    async fn update(&self, id: RecordId, record: R) -> Result<Persisted<R>, PersistenceError> {
        let mut records = self.records.write().await;
        ensure_unique(&records, &record, Some(id))?;
        let slot = records
            .iter_mut()
            .find(|stored| stored.id == id)
            .ok_or_else(|| PersistenceError::not_found(R::KIND, id.to_string()))?;
        *slot = Persisted::new(id, record);
        debug!(kind = R::KIND, %id, "record updated");
        Ok(slot.clone())
    }

    async fn find(&self, id: RecordId) -> Result<Option<Persisted<R>>, PersistenceError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|stored| stored.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Persisted<R>>, PersistenceError> {
        Ok(self.records.read().await.clone())
    }
}
