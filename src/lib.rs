pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod explore;
pub mod tui;
pub mod types;

pub use catalog::{CatalogSource, HttpCatalog};
pub use config::Config;
pub use error::{LecternError, Result};
pub use explore::{
    ExploreCommand, ExploreHandle, ExploreState, FetchPhase, FetcherOptions, FilterChange,
    Filters, Tab,
};
pub use types::{CourseSummary, EventSummary, Listing, ListingPage};
