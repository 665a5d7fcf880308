use std::fmt;

use log::debug;
use thiserror::Error;

use crate::facets::FacetSelection;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PageMode {
    #[default]
    Browsing,
    FiltersOpen,
    Editing { draft: FacetSelection },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageAction {
    ShowFilters,
    HideFilters,
    Edit,
    Apply,
    Cancel,
}

impl fmt::Display for PageAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ShowFilters => "show filters",
            Self::HideFilters => "hide filters",
            Self::Edit => "edit filters",
            Self::Apply => "apply filters",
            Self::Cancel => "cancel editing",
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("cannot {action} while {from}")]
    NotAllowed {
        from: &'static str,
        action: PageAction,
    },
}

impl PageMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Browsing => "browsing",
            Self::FiltersOpen => "filters open",
            Self::Editing { .. } => "editing",
        }
    }

    pub fn filters_visible(&self) -> bool {
        !matches!(self, Self::Browsing)
    }

    pub fn draft(&self) -> Option<&FacetSelection> {
        match self {
            Self::Editing { draft } => Some(draft),
            _ => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut FacetSelection> {
        match self {
            Self::Editing { draft } => Some(draft),
            _ => None,
        }
    }

    /// Performs one transition. On `Apply` the edited draft is returned so
    /// the caller can commit it in a single step; a rejected action leaves
    /// the mode unchanged.
    pub fn transition(
        &mut self,
        action: PageAction,
        current: &FacetSelection,
    ) -> Result<Option<FacetSelection>, TransitionError> {
        let from = self.name();
        let (next, committed) = match (&*self, action) {
            (Self::Browsing, PageAction::ShowFilters) => (Self::FiltersOpen, None),
            (Self::FiltersOpen, PageAction::HideFilters) => (Self::Browsing, None),
            (Self::FiltersOpen, PageAction::Edit) => (
                Self::Editing {
                    draft: current.clone(),
                },
                None,
            ),
            (Self::Editing { draft }, PageAction::Apply) => {
                (Self::FiltersOpen, Some(draft.clone()))
            }
            (Self::Editing { .. }, PageAction::Cancel) => (Self::FiltersOpen, None),
            _ => return Err(TransitionError::NotAllowed { from, action }),
        };
        debug!("page mode: {from} -> {} ({action})", next.name());
        *self = next;
        Ok(committed)
    }
}
