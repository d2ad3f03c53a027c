use serde::{Deserialize, Serialize};

/// Colour scheme. Dark is the first-run default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Accepts the bare strings older releases stored without an envelope.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().trim_matches('"') {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Icon shown on the toggle button for this theme.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "fas fa-moon",
            Theme::Light => "fas fa-sun",
        }
    }
}
