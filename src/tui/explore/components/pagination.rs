//! Pagination bar component
//!
//! Shows the current page position and whether paging is possible in each
//! direction; the keymap refuses to move outside `[1, total_pages]`.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the PaginationBar component
#[derive(Default, Props)]
pub struct PaginationBarProps {
    pub page: u32,
    pub total_pages: u32,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Pagination status bar: "< p  page N of M  n >"
#[component]
pub fn PaginationBar(props: &PaginationBarProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::Center,
            column_gap: 2,
            border_edges: Edges::Top,
            border_style: BorderStyle::Single,
            border_color: theme.border,
        ) {
            Text(
                content: "< p",
                color: if props.has_prev { theme.text } else { theme.text_dimmed },
            )
            Text(
                content: format!("page {} of {}", props.page, props.total_pages),
                color: theme.text,
            )
            Text(
                content: "n >",
                color: if props.has_next { theme.text } else { theme.text_dimmed },
            )
        }
    }
}
