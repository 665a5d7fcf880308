use log::debug;

use crate::catalog::Catalog;
use crate::facets::{FacetEvent, FacetSelection};
use crate::page::{PageAction, PageMode, TransitionError};
use crate::view::{clamp_page, compute_view, View};

/// One page view: the fixture catalogue, the live facet selection and the
/// page mode. Every mutation recomputes and clamps before returning, so a
/// caller never observes a half-applied selection.
#[derive(Clone, Debug)]
pub struct Finder {
    catalog: Catalog,
    selection: FacetSelection,
    mode: PageMode,
}

impl Finder {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_selection(catalog, FacetSelection::default())
    }

    pub fn with_selection(catalog: Catalog, selection: FacetSelection) -> Self {
        let mut finder = Self {
            catalog,
            selection,
            mode: PageMode::default(),
        };
        finder.clamp_page();
        finder
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &FacetSelection {
        &self.selection
    }

    pub fn mode(&self) -> &PageMode {
        &self.mode
    }

    pub fn view(&self) -> View<'_> {
        compute_view(
            self.catalog.records(),
            self.catalog.taxonomy(),
            &self.selection,
        )
    }

    pub fn apply(&mut self, event: FacetEvent) -> bool {
        if let Some(draft) = self.mode.draft_mut() {
            return draft.apply(event);
        }
        let changed = self.selection.apply(event);
        if changed {
            self.clamp_page();
        }
        changed
    }

    pub fn apply_action(&mut self, action: PageAction) -> Result<(), TransitionError> {
        if let Some(committed) = self.mode.transition(action, &self.selection)? {
            self.selection = committed;
            self.clamp_page();
        }
        Ok(())
    }

    fn clamp_page(&mut self) {
        let page_count = self.view().page_count();
        let clamped = clamp_page(self.selection.page, page_count);
        if clamped != self.selection.page {
            debug!(
                "page {} out of range for {page_count} pages, clamped to {clamped}",
                self.selection.page
            );
            self.selection.page = clamped;
        }
    }
}
