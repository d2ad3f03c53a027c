//! Project showcase cards.
//!
//! Projects are static content like the learning path, but nothing about
//! them is persisted: cards are addressed by position.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    Nlp,
    Ml,
    Cv,
    Web,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 4] = [
        ProjectCategory::Nlp,
        ProjectCategory::Ml,
        ProjectCategory::Cv,
        ProjectCategory::Web,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectCategory::Nlp => "nlp",
            ProjectCategory::Ml => "ml",
            ProjectCategory::Cv => "cv",
            ProjectCategory::Web => "web",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectCategory::Nlp => "NLP",
            ProjectCategory::Ml => "Machine Learning",
            ProjectCategory::Cv => "Computer Vision",
            ProjectCategory::Web => "Web",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Production,
    Active,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Production => "production",
            ProjectStatus::Active => "active",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ProjectSpec {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    /// `(label, value)` pairs, shown in order.
    pub metrics: &'static [(&'static str, &'static str)],
    pub category: ProjectCategory,
    pub status: ProjectStatus,
}
