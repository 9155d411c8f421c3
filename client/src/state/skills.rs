//! Skill catalog types and the category filter / detail selection state.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }

    /// CSS modifier for the level badge.
    #[must_use]
    pub fn badge_modifier(self) -> &'static str {
        match self {
            Self::Beginner => "skill-badge--beginner",
            Self::Intermediate => "skill-badge--intermediate",
            Self::Advanced => "skill-badge--advanced",
            Self::Expert => "skill-badge--expert",
        }
    }
}

/// Category filter for the skills grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(SkillCategory),
}

impl CategoryFilter {
    /// Filter buttons in display order.
    pub const ALL: [Self; 4] = [
        Self::All,
        Self::Only(SkillCategory::Frontend),
        Self::Only(SkillCategory::Backend),
        Self::Only(SkillCategory::Tools),
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Skills",
            Self::Only(SkillCategory::Frontend) => "Frontend",
            Self::Only(SkillCategory::Backend) => "Backend",
            Self::Only(SkillCategory::Tools) => "Tools & Others",
        }
    }

    #[must_use]
    pub fn matches(self, category: SkillCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => only == category,
        }
    }
}

/// One catalog entry. Immutable configuration data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillEntry {
    pub name: &'static str,
    /// Short badge text shown in place of a logo.
    pub mark: &'static str,
    /// Brand colour for the badge, as a CSS colour.
    pub accent: &'static str,
    pub category: SkillCategory,
    pub level: SkillLevel,
    pub description: &'static str,
    pub year_started: i32,
    pub related_skills: &'static [&'static str],
}

impl SkillEntry {
    /// Entry for a skill with no curated detail.
    #[must_use]
    pub const fn uncurated(name: &'static str, mark: &'static str, accent: &'static str, category: SkillCategory) -> Self {
        Self {
            name,
            mark,
            accent,
            category,
            level: SkillLevel::Intermediate,
            description: "Skill in development and continuous learning.",
            year_started: 2021,
            related_skills: &[],
        }
    }
}

/// Years of experience as displayed, `"< 1"` for the current or a future year.
#[must_use]
pub fn years_of_experience(year_started: i32, current_year: i32) -> String {
    let years = current_year - year_started;
    if years <= 0 { "< 1".to_owned() } else { years.to_string() }
}

/// Filter and detail-selection state over a fixed catalog.
///
/// The selection is looked up in the full catalog and is independent of the
/// active filter, so the detail view stays open across filter changes.
#[derive(Clone, Debug, PartialEq)]
pub struct SkillFilter {
    catalog: &'static [SkillEntry],
    active: CategoryFilter,
    selected: Option<&'static SkillEntry>,
}

impl SkillFilter {
    #[must_use]
    pub fn new(catalog: &'static [SkillEntry]) -> Self {
        Self { catalog, active: CategoryFilter::All, selected: None }
    }

    #[must_use]
    pub fn active(&self) -> CategoryFilter {
        self.active
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.active = filter;
    }

    /// Entries matching the active filter, in catalog order.
    #[must_use]
    pub fn visible(&self) -> Vec<&'static SkillEntry> {
        self.catalog.iter().filter(|entry| self.active.matches(entry.category)).collect()
    }

    /// Open the detail view for the named entry. Returns `false` and leaves
    /// the selection unchanged if the catalog has no such entry.
    pub fn select(&mut self, name: &str) -> bool {
        match self.catalog.iter().find(|entry| entry.name == name) {
            Some(entry) => {
                self.selected = Some(entry);
                true
            }
            None => false,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn selected(&self) -> Option<&'static SkillEntry> {
        self.selected
    }
}
