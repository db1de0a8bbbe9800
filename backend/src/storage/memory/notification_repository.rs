//! In-memory notification repository.
//!
//! Besides CRUD this carries the one piece of real mutation in the app: the
//! one-way unread -> read transition, individually or in bulk.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use shared::Notification;
use std::sync::Arc;

use super::{latency, MemoryStore};
use crate::error::StoreError;
use crate::storage::traits::NotificationStorage;

#[derive(Clone)]
pub struct NotificationRepository {
    store: Arc<MemoryStore>,
}

impl NotificationRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl NotificationStorage for NotificationRepository {
    async fn get_all(&self) -> Result<Vec<Notification>> {
        self.store.simulate(latency::GET_ALL).await;
        Ok(self.store.notifications().clone())
    }

    async fn get_by_id(&self, notification_id: &str) -> Result<Option<Notification>> {
        self.store.simulate(latency::GET_BY_ID).await;
        Ok(self
            .store
            .notifications()
            .iter()
            .find(|n| n.id == notification_id)
            .cloned())
    }

    async fn unread_count(&self) -> Result<usize> {
        self.store.simulate(latency::UNREAD_COUNT).await;
        Ok(self.store.notifications().iter().filter(|n| !n.read).count())
    }

    async fn mark_as_read(&self, notification_id: &str) -> Result<Notification> {
        self.store.simulate(latency::MARK_AS_READ).await;
        let mut notifications = self.store.notifications();
        let notification = notifications
            .iter_mut()
            .find(|n| n.id == notification_id)
            .ok_or_else(|| StoreError::not_found("notification", notification_id))?;
        notification.read = true;
        Ok(notification.clone())
    }

    async fn mark_all_as_read(&self) -> Result<Vec<Notification>> {
        self.store.simulate(latency::MARK_ALL_AS_READ).await;
        let mut notifications = self.store.notifications();
        for notification in notifications.iter_mut() {
            notification.read = true;
        }
        Ok(notifications.clone())
    }

    async fn create(&self, mut notification: Notification) -> Result<Notification> {
        self.store.simulate(latency::CREATE).await;
        notification.id = MemoryStore::generate_id();
        notification.timestamp = Utc::now();
        notification.read = false;
        debug!(
            "Storing notification {} ({})",
            notification.id, notification.title
        );
        let mut notifications = self.store.notifications();
        // Newest first, so fresh notifications land at the front
        notifications.insert(0, notification.clone());
        Ok(notification)
    }

    async fn delete(&self, notification_id: &str) -> Result<Notification> {
        self.store.simulate(latency::DELETE).await;
        let mut notifications = self.store.notifications();
        let index = notifications
            .iter()
            .position(|n| n.id == notification_id)
            .ok_or_else(|| StoreError::not_found("notification", notification_id))?;
        Ok(notifications.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repository() -> NotificationRepository {
        NotificationRepository::new(Arc::new(MemoryStore::without_latency()))
    }

    #[tokio::test]
    async fn mark_as_read_is_one_way() {
        let repo = repository();
        let marked = repo.mark_as_read("1").await.unwrap();
        assert!(marked.read);

        // Marking again keeps it read
        let marked_again = repo.mark_as_read("1").await.unwrap();
        assert!(marked_again.read);
    }

    #[tokio::test]
    async fn mark_as_read_unknown_id_is_not_found() {
        let repo = repository();
        let err = repo.mark_as_read("nope").await.unwrap_err();
        let store_err = err.downcast::<StoreError>().unwrap();
        assert_eq!(store_err, StoreError::not_found("notification", "nope"));
    }

    #[tokio::test]
    async fn mark_all_as_read_is_idempotent() {
        let repo = repository();
        assert!(repo.unread_count().await.unwrap() > 0);

        let all = repo.mark_all_as_read().await.unwrap();
        assert!(all.iter().all(|n| n.read));
        assert_eq!(repo.unread_count().await.unwrap(), 0);

        // Second application is a no-op
        let again = repo.mark_all_as_read().await.unwrap();
        assert_eq!(all, again);
    }

    #[tokio::test]
    async fn create_stamps_and_inserts_at_front() {
        let repo = repository();
        let mut template = repo.get_by_id("1").await.unwrap().unwrap();
        template.title = "Field Trip Friday".to_string();
        template.read = true; // must be reset by the store

        let created = repo.create(template).await.unwrap();
        assert!(!created.read);

        let all = repo.get_all().await.unwrap();
        assert_eq!(all[0].id, created.id);
    }
}
