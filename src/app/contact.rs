//! Contact form and notification toast for `PortfolioApp`.

use std::time::Instant;

use eframe::egui;

use folio::bindings::{ControlId, UiEvent};
use folio::contact::{Field, NotificationKind};
use folio::render::page::placeholder;

use super::PortfolioApp;
use crate::ui;

impl PortfolioApp {
    pub fn draw_contact(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading(egui::RichText::new("Get In Touch").size(28.0).strong());
        });
        ui.add_space(12.0);

        let sending = self.contact.is_sending();
        egui::Grid::new("contact_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                for field in [Field::Name, Field::Email, Field::Subject, Field::Message] {
                    ui.label(field_label(field));
                    let value = self.contact.field_mut(field);
                    let edit = if field == Field::Message {
                        egui::TextEdit::multiline(value).desired_rows(5)
                    } else {
                        egui::TextEdit::singleline(value)
                    };
                    ui.add_enabled(!sending, edit.hint_text(placeholder(field)).desired_width(420.0));
                    ui.end_row();
                }
            });

        ui.add_space(8.0);
        let label = if sending { "Sending..." } else { "Send Message" };
        if ui.add_enabled(!sending, egui::Button::new(label)).clicked() {
            self.emit(UiEvent::Click(ControlId::ContactSubmit));
        }
    }

    /// Validate and hand the message to the submitter. Invalid input is
    /// reported and the form left as typed.
    pub fn submit_contact(&mut self, ctx: &egui::Context) {
        let ctx = ctx.clone();
        self.contact
            .submit(&mut self.notifications, Instant::now(), move || ctx.request_repaint());
        self.mirror.set_notification(self.notifications.current());
    }

    /// Collect a finished submission.
    pub fn poll_submission(&mut self) {
        if self.contact.poll(&mut self.notifications, Instant::now()) {
            self.mirror.set_notification(self.notifications.current());
        }
    }

    /// Toast in the top-right corner while a notification is live.
    pub fn draw_notification(&mut self, ctx: &egui::Context) {
        let Some(current) = self.notifications.current() else {
            return;
        };
        let color = match current.kind {
            NotificationKind::Success => egui::Color32::from_rgb(76, 175, 80),
            NotificationKind::Error => egui::Color32::from_rgb(244, 67, 54),
            NotificationKind::Info => ui::accent(1.0),
        };
        let glyph = ui::icon_glyph(current.kind.icon());
        let message = current.message.clone();

        let mut dismissed = false;
        egui::Area::new(egui::Id::new("notification"))
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 64.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style())
                    .stroke(egui::Stroke::new(1.5, color))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new(glyph).color(color).size(18.0));
                            ui.label(message);
                            if ui.small_button(ui::icon_glyph("fa-times")).clicked() {
                                dismissed = true;
                            }
                        });
                    });
            });

        if dismissed {
            self.emit(UiEvent::Click(ControlId::DismissNotification));
        }
    }
}

fn field_label(field: Field) -> &'static str {
    match field {
        Field::Name => "Name",
        Field::Email => "Email",
        Field::Subject => "Subject",
        Field::Message => "Message",
    }
}
