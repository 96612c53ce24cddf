//! Main browse TUI view component
//!
//! Renders the explore controller's snapshots and forwards query commands to
//! the driver. All query timing (debounce, stale discard) lives in the
//! driver; this component only mirrors snapshots and maps keys to actions.

use iocraft::prelude::*;

use crate::explore::{ExploreHandle, ExploreState};
use crate::tui::components::{Footer, InlineSearchBox, render_toast};
use crate::tui::theme::theme;
use crate::types::Listing;

use super::components::{ExploreHeader, ListPane, PaginationBar, TabBar};
use super::filter_modal::FilterModal;
use super::help_modal::HelpModal;
use super::model::{
    BrowseAction, BrowseState, commands_for_action, compute_shortcuts, key_to_action,
    reduce_browse_state,
};

/// Rows one listing card occupies (two text lines plus the row gap).
const CARD_HEIGHT: usize = 3;

/// Props for the BrowseTui component
#[derive(Default, Props)]
pub struct BrowseTuiProps {
    /// Handle to a running explore driver
    pub handle: Option<ExploreHandle>,
}

/// Main browse TUI component
#[component]
pub fn BrowseTui<'a>(props: &BrowseTuiProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();
    let theme = theme();

    let initial_snapshot = props
        .handle
        .as_ref()
        .map(|h| h.snapshot())
        .unwrap_or_else(|| ExploreState::new(12));

    let browse: State<BrowseState> = hooks.use_state({
        let initial = initial_snapshot.clone();
        move || BrowseState::new(initial)
    });
    let search_text: State<String> = hooks.use_state({
        let seed = initial_snapshot.filters.search.clone();
        move || seed
    });

    // Mirror handler: pump driver snapshots into component state.
    let mirror_handler: Handler<()> = hooks.use_async_handler({
        let browse = browse;
        let receiver = props.handle.as_ref().map(|h| h.subscribe());

        move |()| {
            let mut browse = browse;
            let receiver = receiver.clone();

            async move {
                let Some(mut receiver) = receiver else {
                    return;
                };
                loop {
                    if receiver.changed().await.is_err() {
                        break;
                    }
                    let snapshot = receiver.borrow_and_update().clone();
                    let mut current = browse.read().clone();
                    current.absorb_snapshot(snapshot);
                    browse.set(current);
                }
            }
        }
    });

    // Start the mirror exactly once
    let mut mirror_started = hooks.use_state(|| false);
    if !mirror_started.get() {
        mirror_started.set(true);
        mirror_handler.clone()(());
    }

    // Search edits: echo is handled by the input component; the query change
    // goes through the driver, which debounces keystrokes centrally.
    let search_changed: Handler<String> = hooks.use_async_handler({
        let browse = browse;
        let handle = props.handle.clone();

        move |text: String| {
            let mut browse = browse;
            let handle = handle.clone();

            async move {
                let current = browse.read().clone();
                let action = BrowseAction::UpdateSearch(text);
                if let Some(handle) = &handle {
                    for command in commands_for_action(&current, &action) {
                        handle.send(command);
                    }
                }
                browse.set(reduce_browse_state(current, action, 0));
            }
        }
    });

    let list_height = ((height.saturating_sub(7)) as usize / CARD_HEIGHT).max(1);

    // Keyboard event handling
    hooks.use_terminal_events({
        let handle = props.handle.clone();
        let search_text = search_text;

        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let mut browse = browse;
                let mut search_text = search_text;

                let current = browse.read().clone();
                let Some(action) = key_to_action(code, modifiers, &current) else {
                    return;
                };

                if action == BrowseAction::ClearSearchAndExit {
                    search_text.set(String::new());
                }

                if let Some(handle) = &handle {
                    for command in commands_for_action(&current, &action) {
                        handle.send(command);
                    }
                }
                browse.set(reduce_browse_state(current, action, list_height));
            }
            _ => {}
        }
    });

    // Exit if requested
    if browse.read().should_exit {
        system.exit();
    }

    // Snapshot for rendering
    let current = browse.read().clone();
    let explore = &current.explore;

    let visible: Vec<Listing> = explore
        .items
        .iter()
        .skip(current.scroll_offset)
        .take(list_height)
        .cloned()
        .collect();

    let search_display = if explore.filters.search.is_empty() {
        None
    } else {
        Some(explore.filters.search.clone())
    };
    let shortcuts = compute_shortcuts(&current);

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            ExploreHeader(
                address: explore.issued_address.clone(),
                total_items: explore.total_items,
            )

            TabBar(
                active_tab: explore.tab,
                search: search_display,
            )

            // Search bar
            View(
                width: 100pct,
                padding_left: 1,
                padding_right: 1,
                height: 1,
            ) {
                InlineSearchBox(
                    value: Some(search_text),
                    has_focus: current.search_focused,
                    on_change: Some(search_changed.clone()),
                )
            }

            // Listing cards
            ListPane(
                items: visible,
                item_count: explore.items.len(),
                is_loading: explore.loading(),
                selected_index: current.selected_index,
                scroll_offset: current.scroll_offset,
            )

            PaginationBar(
                page: explore.page,
                total_pages: explore.total_pages,
                has_prev: explore.has_prev_page(),
                has_next: explore.has_next_page(),
            )

            Footer(shortcuts: shortcuts)

            // Toast notification
            #(render_toast(&current.toast))

            // Modal overlays
            FilterModal(state: current.filter_modal.clone())
            HelpModal(visible: current.show_help_modal)
        }
    }
}
