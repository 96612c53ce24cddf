//! The explore controller: filter state, canonical addresses, and the
//! debounced, stale-fenced fetch cycle behind both the CLI and the TUI.

pub mod address;
pub mod controller;
pub mod fetcher;
pub mod filters;

pub use address::{build_address, parse_address};
pub use controller::{
    ExploreCommand, ExploreSnapshot, ExploreState, FetchPhase, IssuedRequest, ResponseOutcome,
};
pub use fetcher::{ExploreHandle, FetcherOptions, spawn};
pub use filters::{
    Category, Department, EventType, FilterChange, Filters, Level, SortOrder, Tab, Timeframe,
};
