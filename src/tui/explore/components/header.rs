//! Explore header component
//!
//! Shows the app name, the canonical shareable address for the current view,
//! and the result count.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the ExploreHeader component
#[derive(Default, Props)]
pub struct ExploreHeaderProps {
    /// Canonical address of the current view
    pub address: String,
    /// Server-reported total result count
    pub total_items: u64,
}

/// Header row: "lectern explore" + address + count
#[component]
pub fn ExploreHeader(props: &ExploreHeaderProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            padding_left: 1,
            padding_right: 1,
        ) {
            Text(
                content: "lectern",
                color: Color::Cyan,
                weight: Weight::Bold,
            )
            Text(
                content: format!(" {}", props.address),
                color: theme.text_dimmed,
            )
            View(flex_grow: 1.0)
            Text(
                content: format!("{} results ", props.total_items),
                color: theme.text_dimmed,
            )
            Text(content: "[?]", color: theme.text_dimmed)
        }
    }
}
