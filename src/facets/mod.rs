mod filters;

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

pub(crate) use filters::RecordFilter;

pub const ALL: &str = "all";
pub const ALL_TOPICS: &str = "all-topics";

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FacetValue {
    #[default]
    All,
    Id(String),
}

impl FacetValue {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case(ALL)
            || trimmed.eq_ignore_ascii_case(ALL_TOPICS)
        {
            Self::All
        } else {
            Self::Id(trimmed.to_string())
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Id(id) => Some(id.as_str()),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for FacetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Id(id) => f.write_str(id),
        }
    }
}

impl From<&str> for FacetValue {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl Serialize for FacetValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Newest,
    Alphabetical,
}

impl SortOrder {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "newest" | "latest" | "date" => Some(Self::Newest),
            "alphabetical" | "title" | "a-z" | "az" => Some(Self::Alphabetical),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Alphabetical => "alphabetical",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FacetEvent {
    SetQuery(String),
    SetCategory(FacetValue),
    SetSubCategory(FacetValue),
    SetReleaseType(FacetValue),
    SetSort(SortOrder),
    GoToPage(usize),
    NextPage,
    PreviousPage,
    ClearFilters,
}

/// Ephemeral facet state for one page view.
///
/// `page` is zero-based and is not clamped here; the owner clamps it against
/// the page count of the recomputed view.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FacetSelection {
    pub query: String,
    pub category: FacetValue,
    pub sub_category: FacetValue,
    pub release_type: FacetValue,
    pub sort: SortOrder,
    pub page: usize,
}

impl FacetSelection {
    /// Any facet change resets `page` to 0, and any category change resets
    /// the sub-category.
    pub fn apply(&mut self, event: FacetEvent) -> bool {
        debug!("facet event {event:?}");
        match event {
            FacetEvent::SetQuery(query) => {
                let query = query.trim();
                if self.query == query {
                    return false;
                }
                self.query = query.to_string();
                self.page = 0;
            }
            FacetEvent::SetCategory(category) => {
                if self.category == category {
                    return false;
                }
                self.category = category;
                self.sub_category = FacetValue::All;
                self.page = 0;
            }
            FacetEvent::SetSubCategory(sub_category) => {
                if self.sub_category == sub_category {
                    return false;
                }
                self.sub_category = sub_category;
                self.page = 0;
            }
            FacetEvent::SetReleaseType(release_type) => {
                if self.release_type == release_type {
                    return false;
                }
                self.release_type = release_type;
                self.page = 0;
            }
            FacetEvent::SetSort(sort) => {
                if self.sort == sort {
                    return false;
                }
                self.sort = sort;
                self.page = 0;
            }
            FacetEvent::GoToPage(page) => {
                if self.page == page {
                    return false;
                }
                self.page = page;
            }
            FacetEvent::NextPage => {
                self.page = self.page.saturating_add(1);
            }
            FacetEvent::PreviousPage => {
                if self.page == 0 {
                    return false;
                }
                self.page -= 1;
            }
            FacetEvent::ClearFilters => {
                let cleared = Self {
                    sort: self.sort,
                    ..Self::default()
                };
                if *self == cleared {
                    return false;
                }
                *self = cleared;
            }
        }
        true
    }

    pub fn has_active_filters(&self) -> bool {
        !self.query.trim().is_empty()
            || !self.category.is_all()
            || !self.sub_category.is_all()
            || !self.release_type.is_all()
    }
}
