//! Process-local `EmailRepository` used when no database is configured.
//!
//! Entries live in a mutex-guarded ordered map keyed by address. Identifiers
//! come from a monotonically increasing sequence and are never reused,
//! matching a `BIGSERIAL` column. The lock is never held across an await point.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use pagination::PageRequest;

use crate::domain::ports::{EmailRepository, EmailRepositoryError};
use crate::domain::{EmailAddress, EmailEntry};

#[derive(Debug, Default)]
struct Store {
    entries: BTreeMap<EmailAddress, EmailEntry>,
    last_id: i64,
}

impl Store {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

/// In-memory mailing-list store.
#[derive(Debug, Default)]
pub struct InMemoryEmailRepository {
    store: Mutex<Store>,
}

impl InMemoryEmailRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, EmailRepositoryError> {
        self.store
            .lock()
            .map_err(|_| EmailRepositoryError::connection("in-memory store lock poisoned"))
    }
}

#[async_trait]
impl EmailRepository for InMemoryEmailRepository {
    async fn create(&self, email: &EmailAddress) -> Result<(), EmailRepositoryError> {
        let mut store = self.lock()?;
        if store.entries.contains_key(email) {
            return Err(EmailRepositoryError::duplicate(email.as_ref()));
        }
        let id = store.next_id();
        store
            .entries
            .insert(email.clone(), EmailEntry::subscribed(id, email.clone()));
        Ok(())
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<EmailEntry>, EmailRepositoryError> {
        let store = self.lock()?;
        Ok(store.entries.get(email).cloned())
    }

    async fn update(&self, entry: &EmailEntry) -> Result<(), EmailRepositoryError> {
        let mut store = self.lock()?;
        if let Some(existing) = store.entries.get_mut(&entry.email) {
            existing.confirmed_at = entry.confirmed_at;
            existing.opt_out = entry.opt_out;
            return Ok(());
        }
        let id = store.next_id();
        store.entries.insert(
            entry.email.clone(),
            EmailEntry {
                id,
                ..entry.clone()
            },
        );
        Ok(())
    }

    async fn delete(&self, email: &EmailAddress) -> Result<(), EmailRepositoryError> {
        let mut store = self.lock()?;
        store.entries.remove(email);
        Ok(())
    }

    async fn list_page(&self, page: PageRequest) -> Result<Vec<EmailEntry>, EmailRepositoryError> {
        let store = self.lock()?;
        let mut active: Vec<&EmailEntry> =
            store.entries.values().filter(|entry| !entry.opt_out).collect();
        active.sort_by_key(|entry| entry.id);

        let skip = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(page.count()).unwrap_or(usize::MAX);
        Ok(active.into_iter().skip(skip).take(take).cloned().collect())
    }
}
