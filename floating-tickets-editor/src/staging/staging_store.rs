use super::{StagedTicket, StagingStoreConfig, StagingStoreGarbageCollector};
use crate::{client::FloatingTicket, error::StagingError};
use std::{collections::HashMap, sync::Arc, time::Duration};
use time::OffsetDateTime;
use tokio::sync::Mutex;

///
/// In-process store keyed by ticket id. Staging the same id again
/// replaces the previous entry.
///
pub struct StagingStore {
    max_age: Duration,
    garbage_collector_interval: Duration,
    pub(super) staged: Arc<Mutex<HashMap<String, StagedTicket>>>,
}

impl StagingStore {
    pub fn new(config: StagingStoreConfig) -> Self {
        Self {
            max_age: config.max_age,
            garbage_collector_interval: config.garbage_collector_interval,
            staged: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    ///
    /// Collector sharing entries with this store,
    /// it has to be run as a separate task.
    ///
    pub fn garbage_collector(&self) -> StagingStoreGarbageCollector {
        StagingStoreGarbageCollector::new(
            self.staged.clone(),
            self.garbage_collector_interval,
            self.max_age,
        )
    }

    #[tracing::instrument(name = "Stage ticket", skip_all, fields(id = ticket.id))]
    pub async fn stage(&self, ticket: FloatingTicket) -> StagedTicket {
        let staged_ticket = StagedTicket {
            id: ticket.id.clone(),
            data: ticket,
            timestamp: OffsetDateTime::now_utc(),
        };

        let previous = self
            .staged
            .lock()
            .await
            .insert(staged_ticket.id.clone(), staged_ticket.clone());
        tracing::debug!(replaced = previous.is_some(), "ticket staged");

        staged_ticket
    }

    ///
    /// ### Errors
    /// - [StagingError::NotStaged] when nothing is staged for the id
    /// - [StagingError::Stale] when staged ticket is older than max_age,
    ///   the entry is removed
    ///
    #[tracing::instrument(name = "Resume ticket", skip(self))]
    pub async fn resume(&self, id: &str) -> Result<StagedTicket, StagingError> {
        let mut staged = self.staged.lock().await;

        let staged_ticket = staged.get(id).ok_or(StagingError::NotStaged)?;
        if OffsetDateTime::now_utc() - staged_ticket.timestamp > self.max_age {
            staged.remove(id);
            tracing::debug!("removed stale ticket");
            return Err(StagingError::Stale);
        }

        Ok(staged_ticket.clone())
    }

    ///
    /// ### Returns
    /// whether anything was staged for the id
    ///
    pub async fn discard(&self, id: &str) -> bool {
        self.staged.lock().await.remove(id).is_some()
    }

    pub async fn contains(&self, id: &str) -> bool {
        self.staged.lock().await.contains_key(id)
    }
}
