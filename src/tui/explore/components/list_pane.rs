//! Listing pane component
//!
//! Renders the fetched page of course or event cards with selection state,
//! plus the loading and empty states.

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::{CourseSummary, EventSummary, Listing};

/// Props for the ListPane component
#[derive(Default, Props)]
pub struct ListPaneProps {
    /// Window of the current page's items to display (already scrolled)
    pub items: Vec<Listing>,
    /// Total item count on the current page (before scrolling)
    pub item_count: usize,
    /// Whether a fetch is in flight
    pub is_loading: bool,
    /// Selected index, relative to the full page
    pub selected_index: usize,
    /// Scroll offset the window was taken at
    pub scroll_offset: usize,
}

/// Format a price for display; `None` is a free listing.
fn price_label(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("${p:.2}"),
        None => "free".to_string(),
    }
}

fn course_meta(course: &CourseSummary) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(teacher) = &course.teacher {
        parts.push(teacher.clone());
    }
    if let Some(category) = &course.category {
        parts.push(category.clone());
    }
    if let Some(level) = &course.level {
        parts.push(level.clone());
    }
    if let Some(rating) = course.rating {
        parts.push(format!("{rating:.1}*"));
    }
    if let Some(enrolled) = course.enrolled_count {
        parts.push(format!("{enrolled} enrolled"));
    }
    parts.join("  ")
}

fn event_meta(event: &EventSummary) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(host) = &event.host {
        parts.push(host.clone());
    }
    if let Some(event_type) = &event.event_type {
        parts.push(event_type.clone());
    }
    if let Some(starts_at) = &event.starts_at {
        parts.push(starts_at.strftime("%b %d %H:%M").to_string());
    }
    if let Some(seats) = event.seats_left {
        parts.push(format!("{seats} seats left"));
    }
    parts.join("  ")
}

/// One listing card: marker + title + price line, meta line below.
fn render_card(listing: &Listing, selected: bool) -> AnyElement<'static> {
    let theme = theme();
    let marker = if selected { "> " } else { "  " };

    let (price, is_live) = match listing {
        Listing::Course(c) => (price_label(c.price), false),
        Listing::Event(e) => (price_label(e.price), true),
    };
    let meta = match listing {
        Listing::Course(c) => course_meta(c),
        Listing::Event(e) => event_meta(e),
    };
    let price_color = if price == "free" { theme.free } else { theme.price };

    element! {
        View(flex_direction: FlexDirection::Column, width: 100pct) {
            View(flex_direction: FlexDirection::Row, width: 100pct) {
                Text(
                    content: format!("{}{}", marker, listing.title()),
                    color: if selected { theme.highlight } else { theme.title },
                    weight: if selected { Weight::Bold } else { Weight::Normal },
                )
                View(flex_grow: 1.0)
                #(if is_live {
                    Some(element! {
                        Text(content: "LIVE ", color: theme.live, weight: Weight::Bold)
                    })
                } else {
                    None
                })
                Text(content: price, color: price_color)
            }
            Text(
                content: format!("    {}", meta),
                color: theme.meta,
            )
        }
    }
    .into_any()
}

/// Listing pane showing the current page of cards
#[component]
pub fn ListPane(props: &ListPaneProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    if props.is_loading {
        return element! {
            View(
                flex_grow: 1.0,
                width: 100pct,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
            ) {
                Text(content: "Loading listings...", color: theme.text_dimmed)
            }
        }
        .into_any();
    }

    if props.item_count == 0 {
        return element! {
            View(
                flex_grow: 1.0,
                width: 100pct,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
            ) {
                Text(content: "No results", color: theme.text_dimmed)
                Text(
                    content: "Try broadening your filters (f) or clearing the search (/)",
                    color: theme.text_dimmed,
                )
            }
        }
        .into_any();
    }

    let scroll_offset = props.scroll_offset;
    let selected_index = props.selected_index;
    let cards: Vec<AnyElement<'static>> = props
        .items
        .iter()
        .enumerate()
        .map(|(i, listing)| render_card(listing, scroll_offset + i == selected_index))
        .collect();

    element! {
        View(
            flex_grow: 1.0,
            width: 100pct,
            flex_direction: FlexDirection::Column,
            padding_left: 1,
            padding_right: 1,
            row_gap: 1,
        ) {
            #(cards)
        }
    }
    .into_any()
}
