//! Filter modal for the explore TUI
//!
//! Edits a working copy of the filter fields; nothing reaches the catalog
//! until the selection is applied, at which point the component forwards one
//! `SetFilter` command per changed field. The working-copy state itself
//! lives in [`super::model::FilterModalState`].

use iocraft::prelude::*;

use crate::tui::components::ModalOverlay;
use crate::tui::theme::theme;

use super::model::FilterModalState;

/// Props for the filter modal
#[derive(Default, Props)]
pub struct FilterModalProps {
    pub state: Option<FilterModalState>,
}

/// Filter modal component
#[component]
pub fn FilterModal(props: &FilterModalProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(state) = props.state.clone() else {
        return element!(View()).into_any();
    };

    let rows: Vec<AnyElement<'static>> = state
        .rows()
        .into_iter()
        .map(|(label, value, focused)| {
            element! {
                View(
                    width: 100pct,
                    flex_direction: FlexDirection::Row,
                    background_color: if focused { Some(Color::DarkBlue) } else { None },
                ) {
                    Text(
                        content: format!("{label:<12}"),
                        color: if focused { Color::Yellow } else { Color::White },
                    )
                    Text(
                        content: format!("< {value} >"),
                        color: Color::Cyan,
                    )
                }
            }
            .into_any()
        })
        .collect();

    element! {
        ModalOverlay() {
            View(
                width: 48,
                flex_direction: FlexDirection::Column,
                border_style: BorderStyle::Round,
                border_color: theme.border_focused,
                padding: 1,
                background_color: Color::Black,
            ) {
                Text(content: "Filters", color: Color::Cyan, weight: Weight::Bold)
                Text(content: "")
                #(rows)
                Text(content: "")
                Text(
                    content: "Tab/j/k: field  h/l: adjust  x: clear  Enter: apply  Esc: cancel",
                    color: theme.text_dimmed,
                )
            }
        }
    }
    .into_any()
}
