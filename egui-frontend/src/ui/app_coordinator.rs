//! # App Coordinator Module
//!
//! The eframe update loop: drain completed backend calls, render the tab
//! bar and the active page, and surface transient success/error lines.
//! Pages own their rendering; this module only routes.

use eframe::egui;

use crate::ui::app_state::{GradeLinkApp, MainTab};

impl eframe::App for GradeLinkApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply whatever the backend finished since the last frame
        self.poll_loads();

        // First frame: kick off the dashboard load
        if !self.started {
            self.started = true;
            self.load_dashboard();
        }

        // Transient messages fade after a few seconds
        if self.error_message.is_some() || self.success_message.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_secs(4));
        }

        egui::TopBottomPanel::top("tab_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("GradeLink");
                ui.add_space(24.0);
                let unread = self.unread_badge();
                for tab in MainTab::ALL {
                    let label = if tab == MainTab::Notifications && unread > 0 {
                        format!("{} ({})", tab.label(), unread)
                    } else {
                        tab.label().to_string()
                    };
                    if ui
                        .selectable_label(self.current_tab == tab, label)
                        .clicked()
                        && self.current_tab != tab
                    {
                        self.switch_tab(tab);
                    }
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_messages(ui);
            egui::ScrollArea::vertical().show(ui, |ui| match self.current_tab {
                MainTab::Dashboard => self.render_dashboard(ui),
                MainTab::Assignments => self.render_assignments_page(ui),
                MainTab::Subjects => self.render_subjects_page(ui),
                MainTab::Notifications => self.render_notifications_page(ui),
                MainTab::Settings => self.render_settings_page(ui),
            });
        });
    }
}

impl GradeLinkApp {
    /// Unread count for the tab badge. The notifications page has the
    /// freshest copy once it has loaded; before that the dashboard's
    /// collection serves.
    fn unread_badge(&self) -> usize {
        if self.notifications_page.notifications.is_empty() {
            self.dashboard.notifications.iter().filter(|n| !n.read).count()
        } else {
            self.notifications_page.counts.unread
        }
    }

    /// Change tabs and reload that page's data. Reloading on every switch
    /// keeps a page that lost a stale load from sitting on its skeleton.
    fn switch_tab(&mut self, tab: MainTab) {
        self.clear_messages();
        self.current_tab = tab;
        self.load_current_tab();
    }

    fn render_messages(&mut self, ui: &mut egui::Ui) {
        if let Some(message) = self.success_message.clone() {
            ui.colored_label(egui::Color32::DARK_GREEN, message);
        }
        if let Some(message) = self.error_message.clone() {
            ui.colored_label(egui::Color32::DARK_RED, message);
        }
    }
}
