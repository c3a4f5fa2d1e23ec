use std::sync::Arc;

use chrono::Utc;

use crate::models::ActivityLog;
use crate::repository::{ActivityLogStore, StoreError};

/// Append-only audit trail for staff.
///
/// Logging is fire-and-forget: a failed append is reported via tracing and
/// swallowed, so audit problems never break the flow being audited.
#[derive(Clone)]
pub struct ActivityLogService {
    store: Arc<dyn ActivityLogStore>,
}

impl ActivityLogService {
    pub fn new(store: Arc<dyn ActivityLogStore>) -> Self {
        Self { store }
    }

    pub async fn log(&self, user: &str, action: &str, details: &str) {
        let entry = ActivityLog {
            id: 0,
            user: user.to_string(),
            action: action.to_string(),
            details: details.to_string(),
            timestamp: Utc::now(),
        };
        if let Err(err) = self.store.append(entry).await {
            tracing::error!(%err, user, action, "failed to record activity");
        } else {
            tracing::info!(user, action, "activity logged");
        }
    }

    pub async fn recent(&self, skip: usize, take: usize) -> Result<Vec<ActivityLog>, StoreError> {
        self.store.list(skip, take).await
    }

    pub async fn for_user(
        &self,
        user: &str,
        skip: usize,
        take: usize,
    ) -> Result<Vec<ActivityLog>, StoreError> {
        self.store.list_for_user(user, skip, take).await
    }

    pub async fn total_count(&self) -> Result<usize, StoreError> {
        self.store.count().await
    }

    pub async fn search(
        &self,
        term: &str,
        skip: usize,
        take: usize,
    ) -> Result<Vec<ActivityLog>, StoreError> {
        self.store.search(term, skip, take).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryActivityLog;

    fn service() -> ActivityLogService {
        ActivityLogService::new(Arc::new(InMemoryActivityLog::new()))
    }

    #[tokio::test]
    async fn test_logged_entries_come_back_newest_first() {
        let svc = service();
        svc.log("anna@example.com", "Package Search", "CPH to BCN").await;
        svc.log("anna@example.com", "Booking Created", "booking 1 for BCN").await;

        let entries = svc.recent(0, 10).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].timestamp >= entries[1].timestamp);
        assert_eq!(svc.total_count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_search_matches_user_action_and_details() {
        let svc = service();
        svc.log("anna@example.com", "Booking Created", "booking 1 for BCN").await;
        svc.log("bob@example.com", "Package Search", "CPH to ROM").await;

        assert_eq!(svc.search("booking", 0, 10).await.unwrap().len(), 1);
        assert_eq!(svc.search("ROM", 0, 10).await.unwrap().len(), 1);
        assert_eq!(svc.search("anna", 0, 10).await.unwrap().len(), 1);
        assert_eq!(svc.search("", 0, 10).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_user_scoped_listing() {
        let svc = service();
        svc.log("anna@example.com", "Package Search", "x").await;
        svc.log("bob@example.com", "Package Search", "y").await;

        let entries = svc.for_user("Anna@Example.com", 0, 10).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].user, "anna@example.com");
    }
}
