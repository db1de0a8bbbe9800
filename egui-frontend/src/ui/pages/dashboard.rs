//! # Dashboard Page
//!
//! Headline stats for the selected student (GPA, attendance, assignment
//! completion), the most recent assignments, and the latest notifications.

use chrono::Utc;
use eframe::egui;
use gradelink_backend::domain::derivation::{
    attendance_trend, classify_assignment, completion_rate, completion_trend,
};
use gradelink_backend::domain::SubjectService;
use shared::{AssignmentStatus, TrendDirection};

use crate::ui::app_state::GradeLinkApp;
use crate::ui::components::*;

impl GradeLinkApp {
    pub fn render_dashboard(&mut self, ui: &mut egui::Ui) {
        page_header(
            ui,
            "Welcome back! Here's how your student is doing.",
            "Stay updated with academic progress and performance insights.",
        );

        if self.dashboard.loading {
            loading_state(ui, 4);
            return;
        }
        if let Some(error) = self.dashboard.error.clone() {
            if error_state(ui, &error) {
                self.load_dashboard();
            }
            return;
        }

        let completion = completion_rate(&self.dashboard.assignments);
        let graded_count = self
            .dashboard
            .assignments
            .iter()
            .filter(|a| a.status == AssignmentStatus::Graded)
            .count();

        ui.horizontal(|ui| {
            let (gpa, attendance) = match &self.dashboard.student {
                Some(student) => (student.gpa, student.attendance_rate),
                None => (0.0, 0),
            };
            stat_card(ui, "Current GPA", &format!("{:.1}", gpa), Some(TrendDirection::Stable));
            stat_card(
                ui,
                "Attendance Rate",
                &format!("{}%", attendance),
                Some(attendance_trend(attendance)),
            );
            stat_card(
                ui,
                "Assignment Completion",
                &format!("{}%", completion),
                Some(completion_trend(completion)),
            );
        });
        ui.label(
            egui::RichText::new(format!("{} assignments graded so far", graded_count)).weak(),
        );
        ui.add_space(12.0);

        ui.columns(2, |columns| {
            columns[0].group(|ui| {
                ui.label(egui::RichText::new("Recent Assignments").strong());
                if self.dashboard.assignments.is_empty() {
                    empty_state(
                        ui,
                        "No assignments",
                        "Assignment updates will appear here as they become available.",
                    );
                }
                let now = Utc::now();
                for assignment in self.dashboard.assignments.iter().take(5) {
                    let subject = SubjectService::subject_name(
                        &self.dashboard.subjects,
                        &assignment.subject_id,
                    );
                    ui.horizontal(|ui| {
                        ui.label(&assignment.title);
                        ui.label(egui::RichText::new(subject).weak());
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(format_date(assignment.due_date));
                            ui.label(classify_assignment(assignment, now).label());
                        });
                    });
                    ui.separator();
                }
            });

            columns[1].group(|ui| {
                ui.label(egui::RichText::new("Recent Notifications").strong());
                if self.dashboard.notifications.is_empty() {
                    empty_state(
                        ui,
                        "All caught up",
                        "New notifications will appear here.",
                    );
                }
                let recent: Vec<_> =
                    self.dashboard.notifications.iter().take(3).cloned().collect();
                for notification in recent {
                    ui.horizontal(|ui| {
                        ui.colored_label(
                            priority_color(notification.priority),
                            &notification.title,
                        );
                        if !notification.read
                            && ui.small_button("Mark read").clicked()
                        {
                            self.mark_notification_read(notification.id.clone());
                        }
                    });
                    ui.label(egui::RichText::new(&notification.message).weak());
                    ui.separator();
                }
            });
        });

        ui.add_space(12.0);
        ui.group(|ui| {
            ui.label(egui::RichText::new("Performance Summary").strong());
            if let Some(student) = &self.dashboard.student {
                ui.label(format!(
                    "{} · {} · {}",
                    student.name, student.grade_level, student.school
                ));
                ui.label(format!(
                    "GPA {:.1} / 4.0 · attendance {}% · completion {}%",
                    student.gpa, student.attendance_rate, completion
                ));
            } else {
                ui.label(egui::RichText::new("No student on record.").weak());
            }
        });
    }
}
