//! # Shared UI Components
//!
//! Small widgets reused across pages: stat cards, filter bars with count
//! badges, empty/error states, and display helpers. All of them render
//! derived state handed in by the caller; none reach into the backend.

use chrono::{DateTime, Utc};
use eframe::egui;
use shared::{NotificationPriority, TrendDirection};

/// Section heading with the page description underneath
pub fn page_header(ui: &mut egui::Ui, title: &str, description: &str) {
    ui.heading(title);
    ui.label(egui::RichText::new(description).weak());
    ui.add_space(8.0);
}

/// One stat tile: big value, small title, optional trend arrow
pub fn stat_card(ui: &mut egui::Ui, title: &str, value: &str, trend: Option<TrendDirection>) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(title).small().weak());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(value).strong().size(22.0));
                if let Some(trend) = trend {
                    ui.label(trend_glyph(trend));
                }
            });
        });
    });
}

pub fn trend_glyph(trend: TrendDirection) -> egui::RichText {
    match trend {
        TrendDirection::Up => egui::RichText::new("▲").color(egui::Color32::DARK_GREEN),
        TrendDirection::Down => egui::RichText::new("▼").color(egui::Color32::DARK_RED),
        TrendDirection::Stable => egui::RichText::new("◆").color(egui::Color32::GRAY),
    }
}

/// Filter bar: one selectable button per category with its count badge.
/// Returns the clicked category, if any. Counts always come from the
/// unfiltered collection, so switching filters never changes the badges.
pub fn filter_bar<C: Copy + PartialEq>(
    ui: &mut egui::Ui,
    categories: &[C],
    active: C,
    label_of: impl Fn(C) -> &'static str,
    count_of: impl Fn(C) -> usize,
) -> Option<C> {
    let mut clicked = None;
    ui.horizontal_wrapped(|ui| {
        for &category in categories {
            let text = format!("{} ({})", label_of(category), count_of(category));
            if ui.selectable_label(active == category, text).clicked() {
                clicked = Some(category);
            }
        }
    });
    clicked
}

/// Centered "nothing here" block
pub fn empty_state(ui: &mut egui::Ui, title: &str, description: &str) {
    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(title).strong());
        ui.label(egui::RichText::new(description).weak());
    });
    ui.add_space(24.0);
}

/// Error block with a retry button; returns true when retry was clicked
pub fn error_state(ui: &mut egui::Ui, message: &str) -> bool {
    let mut retry = false;
    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.colored_label(egui::Color32::DARK_RED, message);
        retry = ui.button("Retry").clicked();
    });
    ui.add_space(24.0);
    retry
}

/// Placeholder rows while a page load is in flight
pub fn loading_state(ui: &mut egui::Ui, rows: usize) {
    ui.add_space(8.0);
    for _ in 0..rows {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.add_sized([ui.available_width(), 18.0], egui::Spinner::new());
        });
    }
}

pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %d, %Y").to_string()
}

pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%b %d, %Y %H:%M").to_string()
}

pub fn priority_color(priority: NotificationPriority) -> egui::Color32 {
    match priority {
        NotificationPriority::High => egui::Color32::DARK_RED,
        NotificationPriority::Medium => egui::Color32::from_rgb(0xb0, 0x6a, 0x00),
        NotificationPriority::Low => egui::Color32::GRAY,
    }
}
