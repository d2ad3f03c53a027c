//! Stateless egui helpers shared by the app panels: colour conversion,
//! search highlighting, the progress ring, and a few text utilities.

use eframe::egui;
use folio::catalog::Difficulty;
use folio::render::color::{parse_hex_color, Rgba};

// ─── Colours ──────────────────────────────────────────────────────────────────

pub fn color32(c: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

/// Catalog hex colour, or the accent when it does not parse.
pub fn hex_color32(hex: &str) -> egui::Color32 {
    color32(parse_hex_color(hex).unwrap_or(Rgba::ACCENT))
}

pub fn accent(alpha: f32) -> egui::Color32 {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(Rgba::ACCENT.r, Rgba::ACCENT.g, Rgba::ACCENT.b, a)
}

pub fn difficulty_color(d: Difficulty) -> egui::Color32 {
    match d {
        Difficulty::Beginner => egui::Color32::from_rgb(76, 175, 80),
        Difficulty::Intermediate => egui::Color32::from_rgb(255, 152, 0),
        Difficulty::Advanced => egui::Color32::from_rgb(244, 67, 54),
        Difficulty::Expert => egui::Color32::from_rgb(156, 39, 176),
    }
}

// ─── Widgets ──────────────────────────────────────────────────────────────────

/// Circular progress ring with the percentage in the middle.
pub fn progress_ring(ui: &mut egui::Ui, percent: u8, diameter: f32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(diameter, diameter), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let center = rect.center();
    let radius = diameter * 0.5 - 4.0;

    painter.circle_stroke(center, radius, egui::Stroke::new(6.0, color32(Rgba::TRACK)));

    let sweep = f32::from(percent.min(100)) / 100.0 * std::f32::consts::TAU;
    if sweep > 0.0 {
        let segments = ((sweep / std::f32::consts::TAU) * 64.0).ceil().max(2.0) as usize;
        // Start at 12 o'clock and run clockwise, like a conic gradient.
        let points: Vec<egui::Pos2> = (0..=segments)
            .map(|i| {
                let a = -std::f32::consts::FRAC_PI_2 + sweep * i as f32 / segments as f32;
                center + egui::vec2(a.cos(), a.sin()) * radius
            })
            .collect();
        painter.add(egui::Shape::line(points, egui::Stroke::new(6.0, color32(Rgba::ACCENT))));
    }

    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        format!("{}%", percent),
        egui::FontId::proportional(diameter * 0.22),
        ui.visuals().strong_text_color(),
    );
    response
}

// ─── Text utilities ───────────────────────────────────────────────────────────

/// Truncate `s` to at most `max_chars` Unicode scalar values, appending `"..."` if truncated.
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let t: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", t)
    }
}

/// Check if `text` contains the search term (case-insensitive).
pub fn text_matches(text: &str, highlight: Option<&str>) -> bool {
    match highlight {
        Some(q) if !q.is_empty() => text.to_lowercase().contains(&q.to_lowercase()),
        _ => false,
    }
}

/// Apply a highlight background to `rt` if it matches the search term.
pub fn maybe_highlight(rt: egui::RichText, text: &str, highlight: Option<&str>) -> egui::RichText {
    if text_matches(text, highlight) {
        rt.background_color(egui::Color32::from_rgba_unmultiplied(255, 235, 59, 90))
    } else {
        rt
    }
}

/// Glyph standing in for an icon-font class.
pub fn icon_glyph(class: &str) -> &'static str {
    let name = class.split_whitespace().last().unwrap_or("");
    match name {
        "fa-sun" => "\u{2600}",
        "fa-moon" => "\u{263E}",
        "fa-bars" => "\u{2630}",
        "fa-times" => "\u{2715}",
        "fa-check" | "fa-check-circle" => "\u{2714}",
        "fa-bookmark" => "\u{2605}",
        "fa-exclamation-circle" => "\u{26A0}",
        "fa-info-circle" => "\u{2139}",
        "fa-github" => "\u{2387}",
        "fa-envelope" => "\u{2709}",
        "fa-home" => "\u{2302}",
        _ => "\u{2022}",
    }
}
