//! # Assignments Page
//!
//! Stats row, filter bar with badge counts, and the filtered/sorted
//! assignment list. The list is whatever the derivation layer last
//! produced; clicking a filter swaps the category and re-derives.

use chrono::Utc;
use eframe::egui;
use gradelink_backend::domain::derivation::{
    classify_assignment, score_percentage, AssignmentCategory,
};
use gradelink_backend::domain::SubjectService;
use shared::AssignmentStatus;

use crate::ui::app_state::GradeLinkApp;
use crate::ui::components::*;

impl GradeLinkApp {
    pub fn render_assignments_page(&mut self, ui: &mut egui::Ui) {
        page_header(
            ui,
            "Assignments & Grades",
            "Track all assignments, due dates, and grades across all subjects.",
        );

        if self.assignments_page.loading {
            loading_state(ui, 5);
            return;
        }
        if let Some(error) = self.assignments_page.error.clone() {
            if error_state(ui, &error) {
                self.load_assignments();
            }
            return;
        }

        let counts = self.assignments_page.counts;
        ui.horizontal(|ui| {
            stat_card(ui, "Total", &counts.total.to_string(), None);
            stat_card(ui, "Upcoming", &counts.upcoming.to_string(), None);
            stat_card(ui, "Overdue", &counts.overdue.to_string(), None);
            stat_card(ui, "Graded", &counts.graded.to_string(), None);
            stat_card(ui, "Submitted", &counts.submitted.to_string(), None);
        });
        ui.add_space(8.0);

        if let Some(category) = filter_bar(
            ui,
            &AssignmentCategory::ALL_CATEGORIES,
            self.assignments_page.active_filter,
            |c| c.label(),
            |c| counts.for_category(c),
        ) {
            self.assignments_page.active_filter = category;
            self.assignments_page.derive();
        }
        ui.add_space(8.0);

        if self.assignments_page.filtered.is_empty() {
            let filter = self.assignments_page.active_filter;
            if filter == AssignmentCategory::All {
                empty_state(
                    ui,
                    "No assignments",
                    "Assignment updates will appear here as they become available.",
                );
            } else {
                empty_state(
                    ui,
                    &format!("No {} assignments", filter.label().to_lowercase()),
                    "Try a different filter.",
                );
            }
            return;
        }

        let now = Utc::now();
        let assignments = self.assignments_page.filtered.clone();
        for assignment in &assignments {
            let subject = SubjectService::subject_name(
                &self.assignments_page.subjects,
                &assignment.subject_id,
            );
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&assignment.title).strong());
                    ui.label(egui::RichText::new(subject).weak());
                    if let Some(priority) = &assignment.priority {
                        ui.label(egui::RichText::new(priority).small().weak());
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(status_text(classify_assignment(assignment, now)));
                        ui.label(format!("Due {}", format_date(assignment.due_date)));
                    });
                });
                if !assignment.description.is_empty() {
                    ui.label(egui::RichText::new(&assignment.description).weak());
                }
                if let Some(score) = assignment.score {
                    // Seed data always carries a positive max score; a bad
                    // record renders without the percentage
                    if let Ok(pct) = score_percentage(score, assignment.max_score) {
                        ui.label(format!(
                            "Score: {}/{} ({}%)",
                            score, assignment.max_score, pct
                        ));
                    }
                }
            });
        }
    }
}

fn status_text(status: AssignmentStatus) -> egui::RichText {
    let color = match status {
        AssignmentStatus::Overdue => egui::Color32::DARK_RED,
        AssignmentStatus::Graded => egui::Color32::DARK_GREEN,
        AssignmentStatus::Submitted => egui::Color32::from_rgb(0x1f, 0x6f, 0xb2),
        AssignmentStatus::Upcoming | AssignmentStatus::InProgress => {
            egui::Color32::from_rgb(0xb0, 0x6a, 0x00)
        }
    };
    egui::RichText::new(status.label()).color(color)
}
