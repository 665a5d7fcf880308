pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod facets;
pub mod finder;
pub mod output;
pub mod page;
pub mod session;
pub mod view;

pub use catalog::{Catalog, Record, ReleaseType};
pub use facets::{FacetEvent, FacetSelection, FacetValue, SortOrder};
pub use finder::Finder;
pub use view::{compute_view, View, PAGE_SIZE};

#[cfg(test)]
mod tests;
