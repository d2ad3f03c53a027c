//! Header strip for `PortfolioApp`.
//!
//! Draws the brand (profile picture or initials), section links, theme
//! toggle, mobile menu toggle, the profile image picker and the export
//! button.

use eframe::egui;

use folio::bindings::{ControlId, UiEvent};
use folio::catalog::builtin::{BRAND_INITIALS, BRAND_NAME};
use folio::profile;

use super::PortfolioApp;
use crate::ui;

const AVATAR_SIZE: f32 = 40.0;

impl PortfolioApp {
    /// Render the top header strip.
    pub fn draw_header(&mut self, ui: &mut egui::Ui) {
        let mut events = Vec::new();
        let active = self.state.nav().active_section;
        let theme = self.state.theme();

        ui.horizontal(|ui| {
            ui.add_space(4.0);
            self.draw_avatar(ui);
            ui.label(egui::RichText::new(BRAND_NAME).size(18.0).strong());
            ui.separator();

            for section in self.state.sections() {
                let link = ui.selectable_label(section.id == active, section.label);
                if link.clicked() {
                    events.push(UiEvent::Click(ControlId::Nav(section.id.to_string())));
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Export HTML").clicked() {
                    self.export_html();
                }

                if ui
                    .button(ui::icon_glyph("fa-bars"))
                    .on_hover_text("Menu")
                    .clicked()
                {
                    events.push(UiEvent::Click(ControlId::MobileToggle));
                }

                if ui
                    .button(ui::icon_glyph(theme.toggle_icon()))
                    .on_hover_text("Toggle theme")
                    .clicked()
                {
                    events.push(UiEvent::Click(ControlId::ThemeToggle));
                }

                if ui.button("Upload").clicked() {
                    events.push(UiEvent::Click(ControlId::ProfileUpload));
                }
                ui.add_sized(
                    [180.0, 22.0],
                    egui::TextEdit::singleline(&mut self.profile_path).hint_text("Profile image path..."),
                );
            });
        });

        self.events.extend(events);
    }

    /// Section list shown while the mobile menu is open.
    pub fn draw_mobile_menu(&mut self, ui: &mut egui::Ui) {
        let active = self.state.nav().active_section;
        ui.add_space(8.0);
        for section in self.state.sections() {
            if ui.selectable_label(section.id == active, section.label).clicked() {
                self.events.push(UiEvent::Click(ControlId::Nav(section.id.to_string())));
            }
        }
    }

    fn draw_avatar(&mut self, ui: &mut egui::Ui) {
        self.refresh_profile_texture(ui.ctx());
        let size = egui::vec2(AVATAR_SIZE, AVATAR_SIZE);
        match self.profile_texture.as_ref().and_then(|(_, t)| t.as_ref()) {
            Some(texture) => {
                ui.add(egui::Image::new((texture.id(), size)).rounding(AVATAR_SIZE * 0.5));
            }
            None => {
                let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
                let painter = ui.painter_at(rect);
                painter.circle_filled(rect.center(), AVATAR_SIZE * 0.5, ui::accent(1.0));
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    BRAND_INITIALS,
                    egui::FontId::proportional(16.0),
                    egui::Color32::WHITE,
                );
            }
        }
    }

    /// Decode the stored data URL into a texture when it changed. A URL
    /// that fails to decode is remembered so it is not retried every frame.
    fn refresh_profile_texture(&mut self, ctx: &egui::Context) {
        let current = self.state.profile_image();
        let cached = self.profile_texture.as_ref().map(|(url, _)| url.as_str());
        if current == cached {
            return;
        }
        self.profile_texture = current.map(|url| {
            let texture = match profile::decode_data_url(url) {
                Ok(data) => {
                    let image = egui::ColorImage::from_rgba_unmultiplied(
                        [data.width as usize, data.height as usize],
                        &data.rgba,
                    );
                    Some(ctx.load_texture("profile-image", image, egui::TextureOptions::LINEAR))
                }
                Err(e) => {
                    log::warn!("Stored profile image unusable: {}", e);
                    None
                }
            };
            (url.to_string(), texture)
        });
    }
}
