//! Explore controller core: pure state transitions for testable behavior.
//!
//! This module separates the controller's state machine from the async
//! driver in [`super::fetcher`], enabling comprehensive unit testing without
//! a runtime. Commands are pure functions of the current state; the only
//! effects (the debounce timer and the network call) live in the driver.
//!
//! Response ordering: every issued request carries a monotonically
//! increasing sequence number. A completion is applied only when its
//! sequence equals the most recently issued one, so results land in
//! issuance order, never arrival order.

use crate::error::Result;
use crate::types::{Listing, ListingPage};

use super::address::{build_address, parse_address};
use super::filters::{FilterChange, Filters, Tab};

/// Lifecycle of the current fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    /// No fetch has been requested yet.
    #[default]
    Idle,
    /// The debounce timer is armed; no request issued for it yet.
    Pending,
    /// A request is in flight and no newer change has been made.
    Loading,
    /// The latest issued request succeeded.
    Loaded,
    /// The latest issued request failed; items are cleared.
    Failed,
}

/// Commands the presentation layer can apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExploreCommand {
    /// Switch listing domain. Resets the page to 1; other filters survive.
    SetTab(Tab),
    /// Replace one filter field. Resets the page to 1.
    SetFilter(FilterChange),
    /// Move to a page. Touches nothing but the page number.
    SetPage(u32),
    /// Re-issue the current snapshot unchanged.
    Refresh,
}

/// The immutable request parameters one fetch carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExploreSnapshot {
    pub tab: Tab,
    pub filters: Filters,
    pub page: u32,
    pub page_size: u32,
}

impl ExploreSnapshot {
    /// Query pairs for the catalog request. Unlike the address, a request
    /// always names its domain and page size; sentinel filters and page 1
    /// stay omitted.
    pub fn request_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("type", self.tab.param().to_string())];
        pairs.extend(self.filters.to_query_pairs());
        if self.page > 1 {
            pairs.push(("page", self.page.to_string()));
        }
        pairs.push(("limit", self.page_size.to_string()));
        pairs
    }
}

/// A request the driver must now execute.
#[derive(Debug, Clone)]
pub struct IssuedRequest {
    pub seq: u64,
    pub snapshot: ExploreSnapshot,
}

/// What happened when a completion was offered to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseOutcome {
    /// The result was current and its page replaced the view.
    Loaded,
    /// The result was current but carried an error; items were cleared.
    Failed,
    /// The result belonged to a superseded request and was discarded.
    Stale,
}

/// The complete page-owned controller state.
///
/// Owned by exactly one driver task per run; the presentation layer sees
/// cloned snapshots. Nothing here is persisted: a fresh run re-seeds from
/// an address, not from any cache.
#[derive(Debug, Clone, PartialEq)]
pub struct ExploreState {
    pub tab: Tab,
    pub filters: Filters,
    pub page: u32,
    pub page_size: u32,
    pub phase: FetchPhase,
    pub items: Vec<Listing>,
    /// Server-reported; 1 until the first successful load.
    pub total_pages: u32,
    pub total_items: u64,
    /// Message of the most recent failed fetch, cleared on success.
    pub last_error: Option<String>,
    /// Address of the most recently issued request. The shareable address
    /// shown to the user advances together with the fetch (they share the
    /// debounce timer), not on every keystroke.
    pub issued_address: String,
    /// Sequence of the most recently issued request; the stale fence.
    last_issued: u64,
}

impl ExploreState {
    pub fn new(page_size: u32) -> Self {
        Self {
            tab: Tab::default(),
            filters: Filters::default(),
            page: 1,
            page_size,
            phase: FetchPhase::Idle,
            items: Vec::new(),
            total_pages: 1,
            total_items: 0,
            last_error: None,
            issued_address: build_address(Tab::default(), &Filters::default(), 1),
            last_issued: 0,
        }
    }

    /// Seed a fresh controller from an explore address (one-time read; the
    /// address is write-only afterwards).
    pub fn seed_from_address(address: &str, page_size: u32) -> Result<Self> {
        let (tab, filters, page) = parse_address(address)?;
        let mut state = Self::new(page_size);
        state.tab = tab;
        state.filters = filters;
        state.page = page;
        state.issued_address = state.address();
        Ok(state)
    }

    /// The canonical address for the current view.
    pub fn address(&self) -> String {
        build_address(self.tab, &self.filters, self.page)
    }

    pub fn loading(&self) -> bool {
        self.phase == FetchPhase::Loading
    }

    pub fn has_prev_page(&self) -> bool {
        self.page > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }

    /// Pure command reducer: returns the next state. Every command arms the
    /// driver's debounce timer; none performs I/O.
    pub fn apply(&self, command: ExploreCommand) -> ExploreState {
        let mut next = self.clone();
        match command {
            ExploreCommand::SetTab(tab) => {
                next.tab = tab;
                // Changing domains invalidates the current page position.
                next.page = 1;
            }
            ExploreCommand::SetFilter(change) => {
                next.filters = next.filters.with(change);
                // New query, start over.
                next.page = 1;
            }
            ExploreCommand::SetPage(page) => {
                next.page = page.max(1);
            }
            ExploreCommand::Refresh => {}
        }
        next.phase = FetchPhase::Pending;
        next
    }

    /// Issue a request for the current snapshot. Advances the stale fence
    /// and moves to `Loading`; the driver executes the returned request.
    pub fn begin_fetch(&mut self) -> IssuedRequest {
        self.last_issued += 1;
        self.phase = FetchPhase::Loading;
        self.issued_address = self.address();
        IssuedRequest {
            seq: self.last_issued,
            snapshot: ExploreSnapshot {
                tab: self.tab,
                filters: self.filters.clone(),
                page: self.page,
                page_size: self.page_size,
            },
        }
    }

    /// Offer a completed request to the controller.
    ///
    /// A completion whose sequence is not the most recently issued one is
    /// discarded without touching any state. A current completion replaces
    /// `items` and the totals atomically on success, or clears `items` on
    /// failure. If a newer change is already pending its debounce window,
    /// the phase stays `Pending` so the armed timer remains truthful.
    pub fn apply_result(
        &mut self,
        seq: u64,
        result: std::result::Result<ListingPage, String>,
    ) -> ResponseOutcome {
        if seq != self.last_issued {
            return ResponseOutcome::Stale;
        }

        let was_pending = self.phase == FetchPhase::Pending;
        match result {
            Ok(page) => {
                self.items = page.items;
                self.total_pages = page.total_pages.max(1);
                self.total_items = page.total_items;
                self.last_error = None;
                self.phase = if was_pending {
                    FetchPhase::Pending
                } else {
                    FetchPhase::Loaded
                };
                ResponseOutcome::Loaded
            }
            Err(message) => {
                self.items.clear();
                self.last_error = Some(message);
                self.phase = if was_pending {
                    FetchPhase::Pending
                } else {
                    FetchPhase::Failed
                };
                ResponseOutcome::Failed
            }
        }
    }
}
