//! Help modal listing every browse keybinding.

use iocraft::prelude::*;

use crate::tui::components::ModalOverlay;
use crate::tui::theme::theme;

const BINDINGS: &[(&str, &str)] = &[
    ("Tab", "Switch between courses and events"),
    ("j / k", "Move selection down / up"),
    ("g / G", "Jump to first / last card"),
    ("n / p", "Next / previous page"),
    ("/", "Focus the search box"),
    ("f", "Open the filter modal"),
    ("r", "Refresh the current view"),
    ("Esc", "Dismiss toast, clear search, or quit"),
    ("q", "Quit"),
];

/// Props for the help modal
#[derive(Default, Props)]
pub struct HelpModalProps {
    pub visible: bool,
}

/// Help modal component
#[component]
pub fn HelpModal(props: &HelpModalProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    if !props.visible {
        return element!(View()).into_any();
    }

    let rows: Vec<AnyElement<'static>> = BINDINGS
        .iter()
        .map(|(key, action)| {
            element! {
                View(flex_direction: FlexDirection::Row, width: 100pct) {
                    Text(content: format!("{key:<8}"), color: theme.highlight, weight: Weight::Bold)
                    Text(content: action.to_string(), color: theme.text)
                }
            }
            .into_any()
        })
        .collect();

    element! {
        ModalOverlay() {
            View(
                width: 52,
                flex_direction: FlexDirection::Column,
                border_style: BorderStyle::Round,
                border_color: theme.border_focused,
                padding: 1,
                background_color: Color::Black,
            ) {
                Text(content: "Keyboard shortcuts", color: Color::Cyan, weight: Weight::Bold)
                Text(content: "")
                #(rows)
                Text(content: "")
                Text(content: "Esc or ? to close", color: theme.text_dimmed)
            }
        }
    }
    .into_any()
}
