use anyhow::Result;
use chrono::Utc;
use log::info;
use shared::Notification;
use std::sync::Arc;

use crate::domain::commands::notifications::{
    CreateNotificationCommand, CreateNotificationResult, DeleteNotificationCommand,
    DeleteNotificationResult, MarkAllAsReadResult, MarkAsReadCommand, MarkAsReadResult,
};
use crate::storage::traits::NotificationStorage;

/// Service for notification records, including the unread -> read state
/// machine (the only transition a notification ever makes).
#[derive(Clone)]
pub struct NotificationService {
    repository: Arc<dyn NotificationStorage>,
}

impl NotificationService {
    pub fn new(repository: Arc<dyn NotificationStorage>) -> Self {
        Self { repository }
    }

    /// List all notifications
    pub async fn get_notifications(&self) -> Result<Vec<Notification>> {
        let notifications = self.repository.get_all().await?;
        info!("Loaded {} notifications", notifications.len());
        Ok(notifications)
    }

    /// Number of notifications still unread (header bell badge)
    pub async fn unread_count(&self) -> Result<usize> {
        self.repository.unread_count().await
    }

    /// Mark one notification read
    pub async fn mark_as_read(&self, command: MarkAsReadCommand) -> Result<MarkAsReadResult> {
        info!("Marking notification read: {}", command.notification_id);
        let notification = self.repository.mark_as_read(&command.notification_id).await?;
        Ok(MarkAsReadResult { notification })
    }

    /// Mark every notification read; idempotent
    pub async fn mark_all_as_read(&self) -> Result<MarkAllAsReadResult> {
        info!("Marking all notifications read");
        let notifications = self.repository.mark_all_as_read().await?;
        Ok(MarkAllAsReadResult { notifications })
    }

    /// Create a new notification (front of the collection, unread)
    pub async fn create_notification(
        &self,
        command: CreateNotificationCommand,
    ) -> Result<CreateNotificationResult> {
        info!("Creating notification: {}", command.title);
        let notification = Notification {
            id: String::new(), // assigned by the store
            notification_type: command.notification_type,
            title: command.title,
            message: command.message,
            timestamp: Utc::now(), // stamped by the store
            read: false,
            priority: command.priority,
        };
        let notification = self.repository.create(notification).await?;
        Ok(CreateNotificationResult { notification })
    }

    /// Delete a notification
    pub async fn delete_notification(
        &self,
        command: DeleteNotificationCommand,
    ) -> Result<DeleteNotificationResult> {
        info!("Deleting notification: {}", command.notification_id);
        let notification = self.repository.delete(&command.notification_id).await?;
        Ok(DeleteNotificationResult { notification })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::NotificationRepository;
    use crate::storage::MemoryStore;
    use shared::{NotificationPriority, NotificationType};

    fn service() -> NotificationService {
        let store = Arc::new(MemoryStore::without_latency());
        NotificationService::new(Arc::new(NotificationRepository::new(store)))
    }

    #[tokio::test]
    async fn mark_all_then_mark_all_again_is_noop() {
        let service = service();
        assert!(service.unread_count().await.unwrap() > 0);

        let first = service.mark_all_as_read().await.unwrap();
        assert!(first.notifications.iter().all(|n| n.read));

        let second = service.mark_all_as_read().await.unwrap();
        assert_eq!(first.notifications, second.notifications);
        assert_eq!(service.unread_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn mark_one_reduces_unread_count() {
        let service = service();
        let before = service.unread_count().await.unwrap();
        service
            .mark_as_read(MarkAsReadCommand {
                notification_id: "1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(service.unread_count().await.unwrap(), before - 1);
    }

    #[tokio::test]
    async fn created_notification_is_newest_and_unread() {
        let service = service();
        let created = service
            .create_notification(CreateNotificationCommand {
                notification_type: NotificationType::Generic,
                title: "Picture Day".to_string(),
                message: "Order forms go home Friday.".to_string(),
                priority: NotificationPriority::Low,
            })
            .await
            .unwrap()
            .notification;

        assert!(!created.read);
        let all = service.get_notifications().await.unwrap();
        assert_eq!(all[0].id, created.id);
    }
}
