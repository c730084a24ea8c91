//! In-memory record store for the plugin session.

use crate::domain::{FormDraft, Result, RosterError, UserId, UserRecord};

/// Ordered list of user records with unique ids.
///
/// Seeded from the list reply and edited only by reconciled mutations.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<UserRecord>,
}

impl RecordStore {
    /// Replaces the contents with `records`.
    ///
    /// Later duplicates of an id are dropped so ids stay unique.
    pub fn seed(&mut self, records: Vec<UserRecord>) {
        let incoming = records.len();
        self.records.clear();
        for record in records {
            if !self.contains(record.id) {
                self.records.push(record);
            }
        }
        if self.records.len() != incoming {
            tracing::debug!(
                incoming,
                kept = self.records.len(),
                "dropped records with duplicate ids"
            );
        }
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    #[must_use]
    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: UserId) -> bool {
        self.records.iter().any(|record| record.id == id)
    }

    #[must_use]
    pub fn get(&self, id: UserId) -> Option<&UserRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Inserts `record` at the front. Callers guarantee the id is unused.
    pub fn prepend(&mut self, record: UserRecord) {
        self.records.insert(0, record);
    }

    /// Overwrites the editable fields of record `id` with the draft.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotFoundLocally`] if no record has this id.
    pub fn update(&mut self, id: UserId, draft: &FormDraft) -> Result<()> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(RosterError::NotFoundLocally(id))?;
        record.apply_draft(draft);
        Ok(())
    }

    /// Removes and returns record `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotFoundLocally`] if no record has this id.
    pub fn remove(&mut self, id: UserId) -> Result<UserRecord> {
        let index = self
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or(RosterError::NotFoundLocally(id))?;
        Ok(self.records.remove(index))
    }

    /// Id for a created record whose reply carried none.
    ///
    /// Starts from the current millisecond timestamp and is bumped past every id
    /// already in the store.
    #[must_use]
    pub fn fallback_id(&self, now_millis: i64) -> UserId {
        let next_free = self
            .records
            .iter()
            .map(|record| record.id)
            .max()
            .map_or(i64::MIN, |max| max.saturating_add(1));
        now_millis.max(next_free)
    }
}
