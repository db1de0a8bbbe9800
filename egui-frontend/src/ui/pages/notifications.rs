//! # Notifications Page
//!
//! Filterable notification feed with per-item and bulk mark-as-read.
//! Unread items render with a stronger title and a leading dot so the
//! state is visible without color alone.

use eframe::egui;
use gradelink_backend::domain::derivation::NotificationCategory;
use shared::Notification;

use crate::ui::app_state::GradeLinkApp;
use crate::ui::components::*;

impl GradeLinkApp {
    pub fn render_notifications_page(&mut self, ui: &mut egui::Ui) {
        page_header(
            ui,
            "Notifications",
            "Grade updates, assignment reminders, and attendance alerts.",
        );

        if self.notifications_page.loading {
            loading_state(ui, 5);
            return;
        }
        if let Some(error) = self.notifications_page.error.clone() {
            if error_state(ui, &error) {
                self.load_notifications();
            }
            return;
        }

        let counts = self.notifications_page.counts;
        ui.horizontal(|ui| {
            if counts.unread > 0 {
                ui.label(format!(
                    "{} unread notification{}",
                    counts.unread,
                    if counts.unread == 1 { "" } else { "s" }
                ));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Mark all as read").clicked() {
                        self.mark_all_notifications_read();
                    }
                });
            } else {
                ui.label(egui::RichText::new("All caught up").weak());
            }
        });
        ui.add_space(4.0);

        if let Some(category) = filter_bar(
            ui,
            &NotificationCategory::ALL_CATEGORIES,
            self.notifications_page.active_filter,
            |c| c.label(),
            |c| counts.for_category(c),
        ) {
            self.notifications_page.active_filter = category;
            self.notifications_page.derive();
        }
        ui.add_space(8.0);

        if self.notifications_page.filtered.is_empty() {
            let filter = self.notifications_page.active_filter;
            if filter == NotificationCategory::All {
                empty_state(
                    ui,
                    "No notifications",
                    "New notifications will appear here as they arrive.",
                );
            } else {
                empty_state(
                    ui,
                    &format!("No {} notifications", filter.label().to_lowercase()),
                    "Try a different filter.",
                );
            }
            return;
        }

        let notifications = self.notifications_page.filtered.clone();
        let mut mark_read = None;
        for notification in &notifications {
            if notification_row(ui, notification) {
                mark_read = Some(notification.id.clone());
            }
        }
        if let Some(id) = mark_read {
            self.mark_notification_read(id);
        }
    }
}

/// One feed row; returns true when "Mark read" was clicked
fn notification_row(ui: &mut egui::Ui, notification: &Notification) -> bool {
    let mut clicked = false;
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            if !notification.read {
                ui.label(egui::RichText::new("●").color(priority_color(notification.priority)));
            }
            let title = egui::RichText::new(&notification.title);
            ui.label(if notification.read {
                title.weak()
            } else {
                title.strong()
            });
            ui.label(
                egui::RichText::new(notification.notification_type.label())
                    .small()
                    .weak(),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if !notification.read && ui.small_button("Mark read").clicked() {
                    clicked = true;
                }
                ui.label(
                    egui::RichText::new(format_timestamp(notification.timestamp))
                        .small()
                        .weak(),
                );
            });
        });
        ui.label(&notification.message);
    });
    clicked
}
