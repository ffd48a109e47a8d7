use shared::domain::{Category, ComboKind, EntityId};

pub const DEFAULT_OWNER_SERVICES: usize = 21_845;
pub const DEFAULT_USER_SERVICES: usize = 20;
pub const DEFAULT_VISIBLE_SERVICES: usize = 0;
pub const DEFAULT_SEARCH_SERVICES: usize = 5;
pub const DEFAULT_OWNER_CHOICES: usize = 21;
pub const DEFAULT_HISTORY_CHOICES: usize = 42;
pub const DEFAULT_HISTORY_BASE_YEAR: i64 = 2025;

/// Ordered service identifiers for one category.
pub type EntityList = Vec<EntityId>;

/// A family of synthetic labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSource {
    /// `{prefix}-Service-{i}`, numbered from 1.
    Services(Category),
    /// `Owner-{i}`, numbered from 1.
    Owners,
    /// `{year}-{month}-{day}` counted back from `base_year`.
    History { base_year: i64 },
}

impl ListSource {
    pub fn label(self, index: usize) -> String {
        match self {
            Self::Services(category) => format!("{}-Service-{}", category.prefix(), index + 1),
            Self::Owners => format!("Owner-{}", index + 1),
            Self::History { base_year } => {
                let offset = index as i64;
                format!(
                    "{}-{}-{}",
                    base_year - offset,
                    (index % 12) + 1,
                    (index % 30) + 1
                )
            }
        }
    }

    /// Lazily yields the first `limit` labels.
    pub fn labels(self, limit: usize) -> impl Iterator<Item = String> {
        (0..limit).map(move |index| self.label(index))
    }
}

/// Generates up to `limit` labels, keeping those that contain `search`
/// case-insensitively. Generation order is preserved.
pub fn list_for(source: ListSource, search: &str, limit: usize) -> Vec<String> {
    let needle = search.to_lowercase();
    source
        .labels(limit)
        .filter(|label| needle.is_empty() || label.to_lowercase().contains(&needle))
        .collect()
}

/// Sizes and defaults for every synthetic list. Built once at startup and
/// shared read-only by all requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub owner_services: usize,
    pub user_services: usize,
    pub visible_services: usize,
    pub search_services: usize,
    pub owner_choices: usize,
    pub history_choices: usize,
    pub history_base_year: i64,
    pub initial_category: String,
    pub history_default: String,
    pub owner_default: String,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            owner_services: DEFAULT_OWNER_SERVICES,
            user_services: DEFAULT_USER_SERVICES,
            visible_services: DEFAULT_VISIBLE_SERVICES,
            search_services: DEFAULT_SEARCH_SERVICES,
            owner_choices: DEFAULT_OWNER_CHOICES,
            history_choices: DEFAULT_HISTORY_CHOICES,
            history_base_year: DEFAULT_HISTORY_BASE_YEAR,
            initial_category: Category::User.key().to_string(),
            history_default: "today".to_string(),
            owner_default: "Owner-1".to_string(),
        }
    }
}

impl Catalog {
    pub fn size_of(&self, category: Category) -> usize {
        match category {
            Category::Owner => self.owner_services,
            Category::User => self.user_services,
            Category::Visible => self.visible_services,
            Category::Search => self.search_services,
        }
    }

    /// Unknown categories have no services.
    pub fn services(&self, category: Option<Category>, search: &str) -> EntityList {
        let Some(category) = category else {
            return EntityList::new();
        };
        list_for(
            ListSource::Services(category),
            search,
            self.size_of(category),
        )
        .into_iter()
        .map(EntityId::from)
        .collect()
    }

    pub fn choices(&self, kind: ComboKind, search: &str) -> Vec<String> {
        match kind {
            ComboKind::Owner => list_for(ListSource::Owners, search, self.owner_choices),
            ComboKind::History => list_for(
                ListSource::History {
                    base_year: self.history_base_year,
                },
                search,
                self.history_choices,
            ),
        }
    }

    pub fn combo_default(&self, kind: ComboKind) -> &str {
        match kind {
            ComboKind::History => &self.history_default,
            ComboKind::Owner => &self.owner_default,
        }
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
