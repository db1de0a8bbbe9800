//! # Subjects Page
//!
//! Card grid of enrolled subjects with a detail panel. Selecting a card
//! kicks off a by-subject assignment load for the detail view.

use chrono::Utc;
use eframe::egui;
use gradelink_backend::domain::derivation::classify_assignment;
use shared::Subject;

use crate::ui::app_state::GradeLinkApp;
use crate::ui::components::*;

impl GradeLinkApp {
    pub fn render_subjects_page(&mut self, ui: &mut egui::Ui) {
        page_header(
            ui,
            "Subjects & Grades",
            "Current grades and teacher information for every enrolled subject.",
        );

        if self.subjects_page.loading {
            loading_state(ui, 4);
            return;
        }
        if let Some(error) = self.subjects_page.error.clone() {
            if error_state(ui, &error) {
                self.load_subjects();
            }
            return;
        }
        if self.subjects_page.subjects.is_empty() {
            empty_state(
                ui,
                "No subjects",
                "Enrolled subjects will appear here once available.",
            );
            return;
        }

        let subjects = self.subjects_page.subjects.clone();
        let mut clicked = None;
        ui.columns(2, |columns| {
            for (i, subject) in subjects.iter().enumerate() {
                let col = &mut columns[i % 2];
                if subject_card(col, subject) {
                    clicked = Some(subject.clone());
                }
            }
        });
        if let Some(subject) = clicked {
            let id = subject.id.clone();
            self.subjects_page.selected = Some(subject);
            self.load_subject_assignments(id);
        }

        if let Some(selected) = self.subjects_page.selected.clone() {
            ui.add_space(12.0);
            ui.separator();
            self.render_subject_detail(ui, &selected);
        }
    }

    fn render_subject_detail(&mut self, ui: &mut egui::Ui, subject: &Subject) {
        ui.horizontal(|ui| {
            ui.heading(&subject.name);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("Close").clicked() {
                    self.subjects_page.selected = None;
                    self.subjects_page.detail_assignments.clear();
                    self.subjects_page.detail_error = None;
                }
            });
        });
        ui.label(format!("Taught by {}", subject.teacher));
        ui.add_space(4.0);

        if self.subjects_page.detail_loading {
            loading_state(ui, 2);
            return;
        }
        if let Some(error) = self.subjects_page.detail_error.clone() {
            if error_state(ui, &error) {
                self.load_subject_assignments(subject.id.clone());
            }
            return;
        }
        if self.subjects_page.detail_assignments.is_empty() {
            empty_state(ui, "No assignments", "This subject has no assignments yet.");
            return;
        }

        ui.label(egui::RichText::new("Assignments").strong());
        let now = Utc::now();
        for assignment in &self.subjects_page.detail_assignments {
            ui.horizontal(|ui| {
                ui.label(&assignment.title);
                ui.label(egui::RichText::new(classify_assignment(assignment, now).label()).weak());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format_date(assignment.due_date));
                });
            });
        }
    }
}

/// One subject card; returns true when clicked
fn subject_card(ui: &mut egui::Ui, subject: &Subject) -> bool {
    let response = egui::Frame::group(ui.style())
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&subject.name).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(trend_glyph(subject.trend));
                    ui.label(
                        egui::RichText::new(&subject.current_grade)
                            .strong()
                            .size(18.0),
                    );
                });
            });
            ui.label(egui::RichText::new(&subject.teacher).weak());
            let fraction = f32::from(subject.grade_percentage) / 100.0;
            ui.add(
                egui::ProgressBar::new(fraction)
                    .text(format!("{}%", subject.grade_percentage)),
            );
        })
        .response;
    response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .clicked()
}
