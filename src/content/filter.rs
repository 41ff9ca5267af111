//! Work-grid filtering: category tab plus free-text search.

use serde::Deserialize;

use super::{CategoryFilter, ContentError, WorkItem};

/// Items shown on a collapsed mobile grid before "show more".
pub const COLLAPSED_PREVIEW_LEN: usize = 4;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkQuery {
    pub category: CategoryFilter,
    pub search: Option<String>,
    pub limit: Option<usize>,
}

/// Raw `?category=&q=&limit=&collapsed=` parameters before category parsing.
#[derive(Debug, Default, Deserialize)]
pub struct WorkQueryParams {
    pub category: Option<String>,
    pub q: Option<String>,
    pub limit: Option<usize>,
    /// Mobile collapsed grid; caps the result at [`COLLAPSED_PREVIEW_LEN`]
    /// unless an explicit `limit` is given.
    #[serde(default)]
    pub collapsed: bool,
}

impl TryFrom<WorkQueryParams> for WorkQuery {
    type Error = ContentError;

    fn try_from(params: WorkQueryParams) -> Result<Self, Self::Error> {
        let category = match params.category.as_deref() {
            Some(raw) => raw.parse()?,
            None => CategoryFilter::All,
        };
        let limit = params.limit.or(params.collapsed.then_some(COLLAPSED_PREVIEW_LEN));
        Ok(Self { category, search: params.q, limit })
    }
}

impl WorkQuery {
    /// Whether `item` passes both the category and search filters.
    #[must_use]
    pub fn matches(&self, item: &WorkItem) -> bool {
        self.category.matches(item.category) && self.matches_search(item)
    }

    fn matches_search(&self, item: &WorkItem) -> bool {
        let Some(needle) = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        else {
            return true;
        };
        let needle = needle.to_lowercase();
        let contains = |hay: &str| hay.to_lowercase().contains(&needle);

        contains(&item.title)
            || item.brand.as_deref().is_some_and(contains)
            || item.description.as_deref().is_some_and(contains)
    }
}

/// Filter `items` in catalog order, truncating to `query.limit` when set.
#[must_use]
pub fn filter_work<'a>(items: &'a [WorkItem], query: &WorkQuery) -> Vec<&'a WorkItem> {
    let matching = items.iter().filter(|item| query.matches(item));
    match query.limit {
        Some(limit) => matching.take(limit).collect(),
        None => matching.collect(),
    }
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
