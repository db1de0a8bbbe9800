use shared::{Notification, NotificationPriority, NotificationType};

#[derive(Debug, Clone)]
pub struct MarkAsReadCommand {
    pub notification_id: String,
}

#[derive(Debug, Clone)]
pub struct MarkAsReadResult {
    pub notification: Notification,
}

#[derive(Debug, Clone)]
pub struct MarkAllAsReadResult {
    pub notifications: Vec<Notification>,
}

/// Input for creating a notification; the store assigns id and timestamp
/// and the record always starts unread
#[derive(Debug, Clone)]
pub struct CreateNotificationCommand {
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub priority: NotificationPriority,
}

#[derive(Debug, Clone)]
pub struct CreateNotificationResult {
    pub notification: Notification,
}

#[derive(Debug, Clone)]
pub struct DeleteNotificationCommand {
    pub notification_id: String,
}

#[derive(Debug, Clone)]
pub struct DeleteNotificationResult {
    pub notification: Notification,
}
