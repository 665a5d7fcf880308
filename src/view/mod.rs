use std::fmt;

use itertools::Itertools;
use log::debug;

use crate::catalog::{Record, Taxonomy};
use crate::facets::{FacetSelection, RecordFilter, SortOrder};

pub const PAGE_SIZE: usize = 10;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct View<'a> {
    pages: Vec<Vec<&'a Record>>,
    total_count: usize,
}

/// Computes the view for `selection` over `records`.
///
/// Pure and total: unresolvable ids yield an empty view, never an error.
/// Sorting is stable, so records with equal keys keep their fixture order.
pub fn compute_view<'a>(
    records: &'a [Record],
    taxonomy: &Taxonomy,
    selection: &FacetSelection,
) -> View<'a> {
    let filter = RecordFilter::resolve(selection, taxonomy);
    let matched: Vec<&'a Record> = records.iter().filter(|r| filter.matches(r)).collect();
    let total_count = matched.len();
    let sorted = sort_records(matched, selection.sort);
    let pages: Vec<Vec<&'a Record>> = sorted.chunks(PAGE_SIZE).map(<[_]>::to_vec).collect();
    debug!(
        "view computed: {total_count} of {} records, {} pages",
        records.len(),
        pages.len()
    );
    View { pages, total_count }
}

fn sort_records(records: Vec<&Record>, order: SortOrder) -> Vec<&Record> {
    match order {
        SortOrder::Alphabetical => records
            .into_iter()
            .sorted_by_key(|r| r.title.to_lowercase())
            .collect(),
        SortOrder::Newest => records
            .into_iter()
            .sorted_by(|a, b| b.published.cmp(&a.published))
            .collect(),
    }
}

pub fn clamp_page(page: usize, page_count: usize) -> usize {
    page.min(page_count.saturating_sub(1))
}

impl<'a> View<'a> {
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn pages(&self) -> &[Vec<&'a Record>] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn page(&self, index: usize) -> Option<&[&'a Record]> {
        self.pages.get(index).map(Vec::as_slice)
    }

    pub fn records(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.pages.iter().flatten().copied()
    }

    pub fn summary(&self, page: usize) -> Option<PageSummary> {
        if self.is_empty() {
            return None;
        }
        let page = clamp_page(page, self.page_count());
        let first = page * PAGE_SIZE + 1;
        let last = first + self.pages[page].len() - 1;
        Some(PageSummary {
            page,
            page_count: self.page_count(),
            first,
            last,
            total: self.total_count,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageSummary {
    pub page: usize,
    pub page_count: usize,
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

impl PageSummary {
    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count
    }
}

impl fmt::Display for PageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Showing {} to {} of {} results",
            self.first, self.last, self.total
        )
    }
}
