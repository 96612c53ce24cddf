//! Interactive browse TUI entry point.

use std::sync::Arc;

use crate::catalog::HttpCatalog;
use crate::config::Config;
use crate::error::{LecternError, Result};
use crate::explore::{self, ExploreState, FetcherOptions};

/// Launch the browse TUI, optionally seeded from a shared explore address.
///
/// NOTE: This function creates its own tokio runtime because it's an entry
/// point for the TUI; `main` dispatches to it synchronously.
pub fn cmd_browse(address: Option<&str>) -> Result<()> {
    use crate::tui::explore::BrowseTui;
    use iocraft::prelude::*;

    let config = Config::load()?;

    // The one-time address read happens before anything is async; after
    // this the address is a write-only projection of controller state.
    let initial = match address {
        Some(address) => ExploreState::seed_from_address(address, config.page_size)?,
        None => ExploreState::new(config.page_size),
    };

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| LecternError::Other(format!("Failed to create runtime: {e}")))?;

    rt.block_on(async {
        let catalog = Arc::new(HttpCatalog::from_config(&config)?);
        let handle = explore::spawn(
            catalog,
            initial,
            FetcherOptions {
                debounce: config.debounce(),
            },
        );

        element!(BrowseTui(handle: Some(handle)))
            .fullscreen()
            .await
            .map_err(|e| LecternError::Other(format!("TUI error: {e}")))
    })
}
