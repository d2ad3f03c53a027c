use super::{ids, Markup};
use crate::bindings::ControlId;
use crate::contact::Notification;

/// Notification toast, or nothing.
pub fn render_notifications(current: Option<&Notification>) -> String {
    let close_control = ControlId::DismissNotification.to_string();
    let mut m = Markup::new();
    m.el("div", &[("id", ids::NOTIFICATIONS), ("class", "notifications")], |m| {
        let Some(n) = current else {
            return;
        };
        let class = format!("notification {} show", n.kind.as_str());
        m.el("div", &[("class", class.as_str()), ("role", "alert")], |m| {
            m.el("div", &[("class", "notification-content")], |m| {
                m.icon(n.kind.icon());
                m.text_el("span", &[], &n.message);
            });
            m.el(
                "button",
                &[("class", "notification-close"), ("data-control", close_control.as_str())],
                |m| {
                    m.icon("fas fa-times");
                },
            );
        });
    });
    m.into_string()
}
