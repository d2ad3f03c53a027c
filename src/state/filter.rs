use crate::catalog::{Catalog, Difficulty, ItemId, LearningItem, ProjectCategory, ProjectSpec};

/// Difficulty filter button state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DifficultyFilter {
    #[default]
    All,
    Only(Difficulty),
}

impl DifficultyFilter {
    pub fn parse(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Some(DifficultyFilter::All);
        }
        Difficulty::parse(s).map(DifficultyFilter::Only)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DifficultyFilter::All => "all",
            DifficultyFilter::Only(d) => d.as_str(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DifficultyFilter::All => "All Levels",
            DifficultyFilter::Only(d) => d.label(),
        }
    }

    /// Filter bar order: "all" first, then by difficulty.
    pub fn options() -> [DifficultyFilter; 5] {
        [
            DifficultyFilter::All,
            DifficultyFilter::Only(Difficulty::Beginner),
            DifficultyFilter::Only(Difficulty::Intermediate),
            DifficultyFilter::Only(Difficulty::Advanced),
            DifficultyFilter::Only(Difficulty::Expert),
        ]
    }

    pub fn admits(self, difficulty: Difficulty) -> bool {
        match self {
            DifficultyFilter::All => true,
            DifficultyFilter::Only(d) => d == difficulty,
        }
    }
}

/// Project category filter button state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl CategoryFilter {
    pub fn parse(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Some(CategoryFilter::All);
        }
        ProjectCategory::parse(s).map(CategoryFilter::Only)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(c) => c.as_str(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(c) => c.label(),
        }
    }

    pub fn options() -> [CategoryFilter; 5] {
        [
            CategoryFilter::All,
            CategoryFilter::Only(ProjectCategory::Nlp),
            CategoryFilter::Only(ProjectCategory::Ml),
            CategoryFilter::Only(ProjectCategory::Cv),
            CategoryFilter::Only(ProjectCategory::Web),
        ]
    }

    pub fn admits(self, category: ProjectCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }
}

/// Active learning-path filters (difficulty, free-text search) and the
/// project category filter. Not persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub difficulty: DifficultyFilter,
    /// As typed; matching lowercases it.
    pub search: String,
    pub category: CategoryFilter,
}

impl FilterState {
    /// Visible iff the difficulty is admitted and the search term (if any)
    /// occurs in the item's visible text, case-insensitively.
    pub fn is_visible(&self, item: &LearningItem) -> bool {
        self.difficulty.admits(item.difficulty) && item.matches_search(&self.search)
    }

    /// Project cards only answer to the category filter.
    pub fn is_project_visible(&self, project: &ProjectSpec) -> bool {
        self.category.admits(project.category)
    }

    pub fn visible_ids<'a>(&self, catalog: &'a Catalog) -> Vec<&'a ItemId> {
        catalog
            .items()
            .filter(|i| self.is_visible(i))
            .map(|i| &i.id)
            .collect()
    }

    pub fn is_active(&self) -> bool {
        self.difficulty != DifficultyFilter::All || !self.search.is_empty()
    }
}
