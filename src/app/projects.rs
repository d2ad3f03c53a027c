//! Projects section for `PortfolioApp`: category filter bar and cards.

use eframe::egui;

use folio::bindings::{ControlId, UiEvent};
use folio::catalog::{ProjectSpec, ProjectStatus};
use folio::state::CategoryFilter;

use super::PortfolioApp;
use crate::ui;

impl PortfolioApp {
    pub fn draw_projects(&mut self, ui: &mut egui::Ui) {
        let mut events = Vec::new();

        ui.vertical_centered(|ui| {
            ui.heading(egui::RichText::new("Featured Projects").size(28.0).strong());
        });
        ui.add_space(12.0);

        let current = self.state.filter().category;
        ui.horizontal_wrapped(|ui| {
            for option in CategoryFilter::options() {
                if ui.selectable_label(option == current, option.label()).clicked() {
                    events.push(UiEvent::Click(ControlId::ProjectFilter(option)));
                }
            }
        });
        ui.add_space(12.0);

        let filter = self.state.filter();
        let visible: Vec<&ProjectSpec> = self
            .state
            .projects()
            .iter()
            .filter(|p| filter.is_project_visible(p))
            .collect();
        for project in visible {
            draw_card(ui, project);
            ui.add_space(8.0);
        }

        self.events.extend(events);
    }
}

fn draw_card(ui: &mut egui::Ui, project: &ProjectSpec) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(project.title).size(17.0).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let color = match project.status {
                        ProjectStatus::Production => egui::Color32::from_rgb(76, 175, 80),
                        ProjectStatus::Active => ui::accent(1.0),
                    };
                    ui.label(egui::RichText::new(project.status.as_str()).small().color(color));
                });
            });
            ui.label(project.description);

            ui.horizontal_wrapped(|ui| {
                for (label, value) in project.metrics {
                    ui.label(egui::RichText::new(*value).strong().color(ui::accent(1.0)));
                    ui.label(egui::RichText::new(*label).small().weak());
                    ui.add_space(8.0);
                }
            });
            ui.horizontal_wrapped(|ui| {
                for tech in project.technologies {
                    ui.label(egui::RichText::new(*tech).small().background_color(ui::accent(0.15)));
                }
            });
        });
}
