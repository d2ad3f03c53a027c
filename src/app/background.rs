//! Hero section drawn over the particle field.

use eframe::egui;

use folio::bindings::UiEvent;
use folio::catalog::builtin::{BRAND_NAME, HERO_DESCRIPTION, HERO_STATS};
use folio::effects::particles::POINTER_AWAY;

use super::PortfolioApp;
use crate::ui;

pub const HERO_HEIGHT: f32 = 420.0;

impl PortfolioApp {
    pub fn draw_hero(&mut self, ui: &mut egui::Ui) {
        let width = ui.available_width();
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(width, HERO_HEIGHT), egui::Sense::hover());

        if rect.size() != self.hero_size {
            self.hero_size = rect.size();
            self.emit(UiEvent::Resize(rect.width(), rect.height()));
        }

        match response.hover_pos() {
            Some(pos) => {
                let local = pos - rect.min;
                self.particles.set_pointer(local.x, local.y);
            }
            None if self.particles.pointer() != POINTER_AWAY => self.particles.pointer_left(),
            None => {}
        }

        self.paint_particles(ui, rect);

        let mut content = ui.new_child(
            egui::UiBuilder::new()
                .max_rect(rect.shrink(32.0))
                .layout(egui::Layout::top_down(egui::Align::Center)),
        );
        self.draw_hero_text(&mut content);
    }

    fn paint_particles(&self, ui: &egui::Ui, rect: egui::Rect) {
        let painter = ui.painter_at(rect);
        let at = |x: f32, y: f32| rect.min + egui::vec2(x, y);
        let particles = self.particles.particles();

        for link in self.particles.links() {
            let (a, b) = (particles[link.a], particles[link.b]);
            painter.line_segment(
                [at(a.x, a.y), at(b.x, b.y)],
                egui::Stroke::new(1.0, ui::accent(link.opacity)),
            );
        }
        for p in particles {
            painter.circle_filled(at(p.x, p.y), p.size, ui::accent(p.opacity));
        }
    }

    fn draw_hero_text(&self, ui: &mut egui::Ui) {
        ui.add_space(24.0);

        let typed = self.typing.visible();
        let cursor = if self.typing.is_done() { "" } else { "|" };
        ui.label(egui::RichText::new(format!("{}{}", typed, cursor)).size(20.0).monospace());

        ui.label(egui::RichText::new(BRAND_NAME).size(42.0).strong());

        if let Some(role) = self.roles.active() {
            ui.label(
                egui::RichText::new(role)
                    .size(22.0)
                    .color(ui::color32(folio::render::color::Rgba::ACCENT)),
            );
        }

        ui.add_space(8.0);
        ui.add(egui::Label::new(egui::RichText::new(HERO_DESCRIPTION).size(15.0)).wrap());
        ui.add_space(16.0);

        ui.horizontal(|ui| {
            for (counter, (_, label)) in self.counters.iter().zip(HERO_STATS) {
                ui.group(|ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(egui::RichText::new(counter.text()).size(28.0).strong());
                        ui.label(egui::RichText::new(*label).weak());
                    });
                });
            }
        });
    }
}
