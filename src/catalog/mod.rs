//! Learning-path catalog.
//!
//! Immutable content defined at build time. Every item's identifier is
//! derived from `(phase id, item index)` and is written to durable storage,
//! so phases and items may only ever be appended, never reordered.

pub mod builtin;
pub mod project;

pub use project::{ProjectCategory, ProjectSpec, ProjectStatus};

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

// ─── Identifiers ─────────────────────────────────────────────────────────────

/// Stable identifier of a learning item, e.g. `"3-1"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(phase: u32, index: usize) -> Self {
        Self(format!("{}-{}", phase, index))
    }

    /// Wrap an identifier read from storage or from a control id.
    /// No validation: callers check membership against the catalog.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ─── Difficulty ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
        Difficulty::Expert,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
            Difficulty::Expert => "expert",
        }
    }

    /// Button label shown in the filter bar.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
            Difficulty::Expert => "Expert",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Some(Difficulty::Beginner),
            "intermediate" => Some(Difficulty::Intermediate),
            "advanced" => Some(Difficulty::Advanced),
            "expert" => Some(Difficulty::Expert),
            _ => None,
        }
    }
}

// ─── Static content specs ────────────────────────────────────────────────────

/// Outbound link to a third-party learning resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceLink {
    pub title: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

impl ResourceLink {
    /// Parsed URL, `None` if the literal is not an absolute http(s) URL.
    pub fn parsed(&self) -> Option<url::Url> {
        url::Url::parse(self.url)
            .ok()
            .filter(|u| matches!(u.scheme(), "http" | "https"))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ItemSpec {
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    pub estimated_time: &'static str,
    pub links: &'static [ResourceLink],
}

#[derive(Debug, Clone, Copy)]
pub struct PhaseSpec {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub items: &'static [ItemSpec],
}

// ─── Catalog entries ─────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct LearningItem {
    pub id: ItemId,
    pub phase: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    pub estimated_time: &'static str,
    pub links: &'static [ResourceLink],
    /// Lowercased visible text used by the search filter.
    search_text: String,
}

impl LearningItem {
    fn from_spec(phase: u32, index: usize, spec: &ItemSpec) -> Self {
        let mut text = String::new();
        for part in [spec.title, spec.description, spec.difficulty.as_str(), spec.estimated_time] {
            text.push_str(part);
            text.push(' ');
        }
        for link in spec.links {
            text.push_str(link.title);
            text.push(' ');
        }

        Self {
            id: ItemId::new(phase, index),
            phase,
            title: spec.title,
            description: spec.description,
            difficulty: spec.difficulty,
            estimated_time: spec.estimated_time,
            links: spec.links,
            search_text: text.trim_end().to_lowercase(),
        }
    }

    /// Case-insensitive substring match against the item's visible text.
    /// Only the empty term matches everything; whitespace is significant.
    pub fn matches_search(&self, term: &str) -> bool {
        term.is_empty() || self.search_text.contains(&term.to_lowercase())
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }
}

#[derive(Debug, Clone)]
pub struct Phase {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub items: Vec<LearningItem>,
}

/// The full set of phases plus an index of valid identifiers.
#[derive(Debug, Clone)]
pub struct Catalog {
    phases: Vec<Phase>,
    valid: HashSet<ItemId>,
}

impl Catalog {
    pub fn from_specs(specs: &[PhaseSpec]) -> Self {
        let phases: Vec<Phase> = specs
            .iter()
            .map(|p| Phase {
                id: p.id,
                title: p.title,
                description: p.description,
                icon: p.icon,
                color: p.color,
                items: p
                    .items
                    .iter()
                    .enumerate()
                    .map(|(i, spec)| LearningItem::from_spec(p.id, i, spec))
                    .collect(),
            })
            .collect();

        let valid = phases
            .iter()
            .flat_map(|p| p.items.iter().map(|i| i.id.clone()))
            .collect();

        Self { phases, valid }
    }

    /// The built-in AI learning path.
    pub fn builtin() -> Self {
        Self::from_specs(builtin::PHASES)
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    pub fn items(&self) -> impl Iterator<Item = &LearningItem> {
        self.phases.iter().flat_map(|p| p.items.iter())
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.valid.contains(id)
    }

    pub fn item(&self, id: &ItemId) -> Option<&LearningItem> {
        if !self.contains(id) {
            return None;
        }
        self.items().find(|i| &i.id == id)
    }

    pub fn phase(&self, id: u32) -> Option<&Phase> {
        self.phases.iter().find(|p| p.id == id)
    }

    pub fn total_items(&self) -> usize {
        self.valid.len()
    }

    /// Links whose URL does not parse as absolute http(s).
    pub fn invalid_links(&self) -> Vec<(&ItemId, &'static str)> {
        self.items()
            .flat_map(|item| {
                item.links
                    .iter()
                    .filter(|l| l.parsed().is_none())
                    .map(move |l| (&item.id, l.url))
            })
            .collect()
    }
}
