//! Learning path section for `PortfolioApp`.
//!
//! Search box, difficulty filter bar, overall progress, then one card per
//! phase listing the items that pass the current filter.

use eframe::egui;

use folio::bindings::{ControlId, UiEvent};
use folio::catalog::{LearningItem, Phase};
use folio::render::progress::{percent, phase_label};
use folio::state::{DifficultyFilter, ViewState};

use super::PortfolioApp;
use crate::ui;

impl PortfolioApp {
    pub fn draw_learning(&mut self, ui: &mut egui::Ui) {
        let mut events = Vec::new();

        ui.vertical_centered(|ui| {
            ui.heading(egui::RichText::new("AI Learning Path").size(28.0).strong());
            ui.label(egui::RichText::new("From programming foundations to AI agents").weak());
        });
        ui.add_space(12.0);

        // Controls
        ui.horizontal_wrapped(|ui| {
            let search = ui.add_sized(
                [260.0, 24.0],
                egui::TextEdit::singleline(&mut self.search_input).hint_text("Search learning items..."),
            );
            if search.changed() {
                events.push(UiEvent::Input(ControlId::Search, self.search_input.clone()));
            }

            let current = self.state.filter().difficulty;
            for option in DifficultyFilter::options() {
                if ui.selectable_label(option == current, option.label()).clicked() {
                    events.push(UiEvent::Click(ControlId::Filter(option)));
                }
            }

            ui.separator();
            if ui.button("Reset Progress").clicked() {
                events.push(UiEvent::Click(ControlId::ClearProgress));
            }
        });
        ui.add_space(12.0);

        draw_overview(ui, &self.state);
        ui.add_space(16.0);

        let highlight = Some(self.state.filter().search.as_str());
        for phase in self.state.catalog().phases() {
            draw_phase(ui, &self.state, phase, highlight, &mut events);
            ui.add_space(12.0);
        }

        self.events.extend(events);
    }
}

fn draw_overview(ui: &mut egui::Ui, state: &ViewState) {
    let total = state.catalog().total_items();
    let progress = state.progress();
    let pct = percent(progress.completed_count(), total);

    ui.horizontal(|ui| {
        ui::progress_ring(ui, pct, 96.0);
        ui.add_space(16.0);
        ui.vertical(|ui| {
            ui.label(egui::RichText::new("Overall Progress").size(18.0).strong());
            ui.label(format!("{} Completed", progress.completed_count()));
            ui.label(format!("{} Bookmarked", progress.bookmarked_count()));
            ui.label(egui::RichText::new(format!("{} Total Items", total)).weak());
        });
    });
}

fn draw_phase(
    ui: &mut egui::Ui,
    state: &ViewState,
    phase: &Phase,
    highlight: Option<&str>,
    events: &mut Vec<UiEvent>,
) {
    let color = ui::hex_color32(phase.color);
    let done = state.progress().completed_in(phase);

    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(1.5, color))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            egui::Frame::none()
                .fill(color)
                .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                .rounding(4.0)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                egui::RichText::new(format!("Phase {}: {}", phase.id, phase.title))
                                    .size(18.0)
                                    .strong()
                                    .color(egui::Color32::WHITE),
                            );
                            ui.label(egui::RichText::new(phase.description).color(egui::Color32::WHITE));
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                egui::RichText::new(phase_label(done, phase.items.len()))
                                    .strong()
                                    .color(egui::Color32::WHITE),
                            );
                        });
                    });
                });

            let visible: Vec<&LearningItem> = phase
                .items
                .iter()
                .filter(|item| state.filter().is_visible(item))
                .collect();
            if visible.is_empty() {
                ui.label(egui::RichText::new("No items match the current filter").italics().weak());
            }
            for item in visible {
                ui.separator();
                draw_item(ui, state, item, highlight, events);
            }
        });
}

fn draw_item(
    ui: &mut egui::Ui,
    state: &ViewState,
    item: &LearningItem,
    highlight: Option<&str>,
    events: &mut Vec<UiEvent>,
) {
    let completed = state.progress().is_completed(&item.id);
    let bookmarked = state.progress().is_bookmarked(&item.id);

    ui.horizontal(|ui| {
        let title = egui::RichText::new(item.title).size(16.0).strong();
        let title = if completed { title.strikethrough() } else { title };
        ui.label(ui::maybe_highlight(title, item.title, highlight));

        ui.label(
            egui::RichText::new(item.difficulty.label())
                .small()
                .color(ui::difficulty_color(item.difficulty)),
        );
        ui.label(egui::RichText::new(item.estimated_time).small().weak());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let mark = if completed { "Completed" } else { "Mark Complete" };
            if ui.selectable_label(completed, mark).clicked() {
                events.push(UiEvent::Click(ControlId::ToggleComplete(item.id.clone())));
            }
            let star = if bookmarked { "\u{2605}" } else { "\u{2606}" };
            let bookmark_hint = if bookmarked { "Remove bookmark" } else { "Bookmark" };
            if ui.selectable_label(bookmarked, star).on_hover_text(bookmark_hint).clicked() {
                events.push(UiEvent::Click(ControlId::ToggleBookmark(item.id.clone())));
            }
        });
    });

    let description = egui::RichText::new(item.description);
    ui.label(ui::maybe_highlight(description, item.description, highlight));

    ui.horizontal_wrapped(|ui| {
        for (n, link) in item.links.iter().enumerate() {
            let text = egui::RichText::new(link.title)
                .color(ui::color32(folio::render::color::Rgba::ACCENT))
                .underline();
            let response = ui
                .add(egui::Label::new(text).sense(egui::Sense::click()))
                .on_hover_cursor(egui::CursorIcon::PointingHand)
                .on_hover_text(ui::truncate_str(link.url, 60));
            if response.clicked() {
                events.push(UiEvent::Click(ControlId::Link(item.id.clone(), n)));
            }
        }
    });
}
