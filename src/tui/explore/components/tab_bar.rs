//! Explore tab bar component
//!
//! Displays the [Courses] [Events] toggle with the active search text.

use iocraft::prelude::*;

use crate::explore::Tab;
use crate::tui::theme::theme;

/// Props for the TabBar component
#[derive(Default, Props)]
pub struct TabBarProps {
    /// The currently active listing domain
    pub active_tab: Tab,
    /// Current search text, shown on the right when non-empty
    pub search: Option<String>,
}

/// Tab bar showing [Courses] [Events] with the active search on the right
#[component]
pub fn TabBar(props: &TabBarProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let active = props.active_tab;
    let search = props.search.clone().unwrap_or_default();

    element! {
        View(
            width: 100pct,
            padding_left: 1,
            border_edges: Edges::Bottom,
            border_style: BorderStyle::Single,
            border_color: theme.border,
        ) {
            Text(
                content: "[Courses] ",
                color: if active == Tab::Courses { Color::Cyan } else { theme.text_dimmed },
                weight: if active == Tab::Courses { Weight::Bold } else { Weight::Normal },
            )
            Text(
                content: "[Events] ",
                color: if active == Tab::Events { Color::Cyan } else { theme.text_dimmed },
                weight: if active == Tab::Events { Weight::Bold } else { Weight::Normal },
            )
            View(flex_grow: 1.0)
            #(if search.is_empty() {
                None
            } else {
                Some(element! {
                    Text(
                        content: format!(" Search: {}", search),
                        color: Color::Yellow,
                    )
                })
            })
        }
    }
}
