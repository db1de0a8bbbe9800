//! # Settings Page
//!
//! Notification preference editor. Edits accumulate in the page's buffer
//! and hit disk only on an explicit save; reset restores defaults in the
//! buffer without persisting.

use eframe::egui;
use shared::{
    GRADE_THRESHOLD_MAX, GRADE_THRESHOLD_MIN, GRADE_THRESHOLD_STEP, REMINDER_DAY_CHOICES,
};

use crate::ui::app_state::GradeLinkApp;
use crate::ui::components::*;

impl GradeLinkApp {
    pub fn render_settings_page(&mut self, ui: &mut egui::Ui) {
        page_header(
            ui,
            "Notification Settings",
            "Choose which updates you receive and how they are delivered.",
        );

        if self.settings_page.loading {
            loading_state(ui, 4);
            return;
        }
        if let Some(error) = self.settings_page.error.clone() {
            if error_state(ui, &error) {
                self.load_preferences();
            }
            return;
        }

        let prefs = &mut self.settings_page.preferences;

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(egui::RichText::new("Alert Types").strong());
            ui.checkbox(&mut prefs.grade_alerts, "Grade alerts");
            ui.checkbox(&mut prefs.assignment_reminders, "Assignment reminders");
            ui.checkbox(&mut prefs.attendance_alerts, "Attendance alerts");
        });
        ui.add_space(8.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(egui::RichText::new("Delivery").strong());
            ui.checkbox(&mut prefs.email_notifications, "Email notifications");
            ui.checkbox(&mut prefs.push_notifications, "Push notifications");
            ui.checkbox(&mut prefs.notification_sound, "Play a sound");
            ui.checkbox(
                &mut prefs.auto_mark_read,
                "Automatically mark notifications as read when opened",
            );
        });
        ui.add_space(8.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(egui::RichText::new("Thresholds").strong());
            ui.horizontal(|ui| {
                ui.label("Alert when a grade falls below");
                ui.add(
                    egui::Slider::new(
                        &mut prefs.grade_threshold,
                        GRADE_THRESHOLD_MIN..=GRADE_THRESHOLD_MAX,
                    )
                    .step_by(f64::from(GRADE_THRESHOLD_STEP))
                    .suffix("%"),
                );
            });
            ui.horizontal(|ui| {
                ui.label("Remind me");
                for choice in REMINDER_DAY_CHOICES {
                    let text = if choice == 1 {
                        "1 day".to_string()
                    } else {
                        format!("{choice} days")
                    };
                    if ui
                        .selectable_label(prefs.reminder_days == choice, text)
                        .clicked()
                    {
                        prefs.reminder_days = choice;
                    }
                }
                ui.label("before a due date");
            });
        });
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            let saving = self.settings_page.saving;
            if ui
                .add_enabled(!saving, egui::Button::new("Save preferences"))
                .clicked()
            {
                self.save_preferences();
            }
            if saving {
                ui.spinner();
                ui.label("Saving...");
            }
            if ui
                .add_enabled(!saving, egui::Button::new("Reset to defaults"))
                .clicked()
            {
                self.reset_preferences();
            }
        });

        ui.add_space(16.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(egui::RichText::new("Account Information").strong());
            if let Some(student) = &self.dashboard.student {
                ui.label(format!("Student: {}", student.name));
                ui.label(format!("School: {}", student.school));
                ui.label(format!("Grade: {}", student.grade_level));
            } else {
                ui.label(
                    egui::RichText::new("Student details load with the dashboard.").weak(),
                );
            }
        });
    }
}
