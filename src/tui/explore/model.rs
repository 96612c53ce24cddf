//! Browse TUI model types for testable state management
//!
//! This module separates UI state (`BrowseState`) from rendering, enabling
//! unit testing without the iocraft framework. Pure reducers handle local UI
//! transitions; actions that change the query are translated into
//! [`ExploreCommand`]s by [`commands_for_action`] and executed externally by
//! the component, which forwards them to the explore driver.

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::explore::{
    Category, Department, EventType, ExploreCommand, ExploreState, FetchPhase, FilterChange,
    Filters, Level, SortOrder, Timeframe,
};
use crate::tui::components::{Shortcut, Toast};

// ============================================================================
// State Types
// ============================================================================

/// UI-local state layered over the mirrored controller snapshot
#[derive(Debug, Clone)]
pub struct BrowseState {
    /// Latest controller snapshot (filters, page, phase, items)
    pub explore: ExploreState,

    // Navigation
    /// Index of the selected listing
    pub selected_index: usize,
    /// Scroll offset for the listing pane
    pub scroll_offset: usize,

    // Search
    /// Whether the search box is focused
    pub search_focused: bool,

    // Modals
    /// Filter modal state, when open
    pub filter_modal: Option<FilterModalState>,
    /// Whether the help modal is visible
    pub show_help_modal: bool,
    /// Optional toast notification to display
    pub toast: Option<Toast>,

    /// Whether the application should exit
    pub should_exit: bool,
}

impl BrowseState {
    pub fn new(explore: ExploreState) -> Self {
        Self {
            explore,
            selected_index: 0,
            scroll_offset: 0,
            search_focused: false,
            filter_modal: None,
            show_help_modal: false,
            toast: None,
            should_exit: false,
        }
    }

    /// Absorb a new controller snapshot: clamp the selection to the new item
    /// count and surface a fresh failure as an error toast.
    pub fn absorb_snapshot(&mut self, snapshot: ExploreState) {
        let newly_failed = snapshot.phase == FetchPhase::Failed
            && (self.explore.phase != FetchPhase::Failed
                || self.explore.last_error != snapshot.last_error);
        if newly_failed && let Some(message) = &snapshot.last_error {
            self.toast = Some(Toast::error(format!("Fetch failed: {message}")));
        }

        if snapshot.items.len() != self.explore.items.len()
            || snapshot.page != self.explore.page
            || snapshot.tab != self.explore.tab
        {
            let max_index = snapshot.items.len().saturating_sub(1);
            self.selected_index = self.selected_index.min(max_index);
            self.scroll_offset = self.scroll_offset.min(self.selected_index);
        }

        self.explore = snapshot;
    }
}

// ============================================================================
// Filter Modal
// ============================================================================

/// Working copy of the filter fields edited in the modal. Changes are only
/// forwarded to the controller on apply; Esc discards them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterModalState {
    pub category: Category,
    pub level: Level,
    pub department: Department,
    pub event_type: EventType,
    pub timeframe: Timeframe,
    pub sort: SortOrder,
    /// Currently focused field index
    pub focused_field: usize,
}

impl FilterModalState {
    /// Number of configurable fields
    pub const FIELD_COUNT: usize = 6;

    pub fn from_filters(filters: &Filters) -> Self {
        Self {
            category: filters.category,
            level: filters.level,
            department: filters.department,
            event_type: filters.event_type,
            timeframe: filters.timeframe,
            sort: filters.sort,
            focused_field: 0,
        }
    }

    pub fn focus_next(&mut self) {
        self.focused_field = (self.focused_field + 1) % Self::FIELD_COUNT;
    }

    pub fn focus_prev(&mut self) {
        self.focused_field = (self.focused_field + Self::FIELD_COUNT - 1) % Self::FIELD_COUNT;
    }

    /// Cycle the focused field's value forward or backward.
    pub fn adjust(&mut self, forward: bool) {
        match self.focused_field {
            0 => self.category = self.category.cycled(forward),
            1 => self.level = self.level.cycled(forward),
            2 => self.department = self.department.cycled(forward),
            3 => self.event_type = self.event_type.cycled(forward),
            4 => self.timeframe = self.timeframe.cycled(forward),
            _ => self.sort = self.sort.cycled(forward),
        }
    }

    /// Reset every field to its sentinel.
    pub fn clear(&mut self) {
        let focused = self.focused_field;
        *self = Self::from_filters(&Filters::default());
        self.focused_field = focused;
    }

    /// Field rows for rendering: (label, current value label, focused)
    pub fn rows(&self) -> Vec<(&'static str, &'static str, bool)> {
        vec![
            ("Category", self.category.label(), self.focused_field == 0),
            ("Level", self.level.label(), self.focused_field == 1),
            ("Department", self.department.label(), self.focused_field == 2),
            ("Format", self.event_type.label(), self.focused_field == 3),
            ("Timeframe", self.timeframe.label(), self.focused_field == 4),
            ("Sort", self.sort.label(), self.focused_field == 5),
        ]
    }

    /// The single-field changes needed to turn `current` into this modal's
    /// selection. Untouched fields produce no command.
    pub fn changes_from(&self, current: &Filters) -> Vec<FilterChange> {
        let mut changes = Vec::new();
        if self.category != current.category {
            changes.push(FilterChange::Category(self.category));
        }
        if self.level != current.level {
            changes.push(FilterChange::Level(self.level));
        }
        if self.department != current.department {
            changes.push(FilterChange::Department(self.department));
        }
        if self.event_type != current.event_type {
            changes.push(FilterChange::EventType(self.event_type));
        }
        if self.timeframe != current.timeframe {
            changes.push(FilterChange::Timeframe(self.timeframe));
        }
        if self.sort != current.sort {
            changes.push(FilterChange::Sort(self.sort));
        }
        changes
    }
}

// ============================================================================
// Action Types
// ============================================================================

/// All possible actions on the browse TUI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseAction {
    // Navigation
    MoveUp,
    MoveDown,
    GoToTop,
    GoToBottom,

    // Query (forwarded to the explore driver)
    SwitchTab,
    NextPage,
    PrevPage,
    Refresh,
    /// Search text edited; carries the full new text
    UpdateSearch(String),

    // Search focus
    FocusSearch,
    ExitSearch,
    ClearSearchAndExit,

    // Modals
    ShowFilterModal,
    HideFilterModal,
    ApplyFilterModal,
    FilterModalNextField,
    FilterModalPrevField,
    FilterModalAdjust(bool),
    FilterModalClear,
    ShowHelp,
    HideHelp,
    DismissToast,

    // App
    Quit,
}

// ============================================================================
// Pure Functions
// ============================================================================

/// Pure reducer: apply a UI action to the browse state.
///
/// Query-changing actions only touch local UI state here (closing modals,
/// exiting search focus); their controller commands come from
/// [`commands_for_action`] and are sent by the component.
pub fn reduce_browse_state(
    mut state: BrowseState,
    action: BrowseAction,
    list_height: usize,
) -> BrowseState {
    let item_count = state.explore.items.len();

    match action {
        BrowseAction::MoveUp => {
            state.selected_index = state.selected_index.saturating_sub(1);
            state.scroll_offset =
                adjust_scroll(state.scroll_offset, state.selected_index, list_height);
        }
        BrowseAction::MoveDown => {
            if item_count > 0 {
                state.selected_index = (state.selected_index + 1).min(item_count - 1);
                state.scroll_offset =
                    adjust_scroll(state.scroll_offset, state.selected_index, list_height);
            }
        }
        BrowseAction::GoToTop => {
            state.selected_index = 0;
            state.scroll_offset = 0;
        }
        BrowseAction::GoToBottom => {
            if item_count > 0 {
                state.selected_index = item_count - 1;
                state.scroll_offset =
                    adjust_scroll(state.scroll_offset, state.selected_index, list_height);
            }
        }

        // Query actions: the controller snapshot arriving later resets the
        // list; only selection bookkeeping happens here.
        BrowseAction::SwitchTab | BrowseAction::Refresh => {}
        BrowseAction::NextPage | BrowseAction::PrevPage => {
            state.selected_index = 0;
            state.scroll_offset = 0;
        }
        BrowseAction::UpdateSearch(_) => {
            state.selected_index = 0;
            state.scroll_offset = 0;
        }

        BrowseAction::FocusSearch => {
            state.search_focused = true;
        }
        BrowseAction::ExitSearch => {
            state.search_focused = false;
        }
        BrowseAction::ClearSearchAndExit => {
            state.search_focused = false;
            state.selected_index = 0;
            state.scroll_offset = 0;
        }

        BrowseAction::ShowFilterModal => {
            state.filter_modal = Some(FilterModalState::from_filters(&state.explore.filters));
        }
        BrowseAction::HideFilterModal | BrowseAction::ApplyFilterModal => {
            state.filter_modal = None;
        }
        BrowseAction::FilterModalNextField => {
            if let Some(modal) = &mut state.filter_modal {
                modal.focus_next();
            }
        }
        BrowseAction::FilterModalPrevField => {
            if let Some(modal) = &mut state.filter_modal {
                modal.focus_prev();
            }
        }
        BrowseAction::FilterModalAdjust(forward) => {
            if let Some(modal) = &mut state.filter_modal {
                modal.adjust(forward);
            }
        }
        BrowseAction::FilterModalClear => {
            if let Some(modal) = &mut state.filter_modal {
                modal.clear();
            }
        }
        BrowseAction::ShowHelp => {
            state.show_help_modal = true;
        }
        BrowseAction::HideHelp => {
            state.show_help_modal = false;
        }
        BrowseAction::DismissToast => {
            state.toast = None;
        }

        BrowseAction::Quit => {
            state.should_exit = true;
        }
    }

    state
}

/// Controller commands an action implies, given the state *before* the
/// reducer ran. Pure; the component forwards these to the driver.
pub fn commands_for_action(state: &BrowseState, action: &BrowseAction) -> Vec<ExploreCommand> {
    match action {
        BrowseAction::SwitchTab => vec![ExploreCommand::SetTab(state.explore.tab.toggle())],
        BrowseAction::NextPage if state.explore.has_next_page() => {
            vec![ExploreCommand::SetPage(state.explore.page + 1)]
        }
        BrowseAction::PrevPage if state.explore.has_prev_page() => {
            vec![ExploreCommand::SetPage(state.explore.page - 1)]
        }
        BrowseAction::Refresh => vec![ExploreCommand::Refresh],
        BrowseAction::UpdateSearch(text) => {
            vec![ExploreCommand::SetFilter(FilterChange::Search(text.clone()))]
        }
        BrowseAction::ClearSearchAndExit if !state.explore.filters.search.is_empty() => {
            vec![ExploreCommand::SetFilter(FilterChange::Search(String::new()))]
        }
        BrowseAction::ApplyFilterModal => state
            .filter_modal
            .as_ref()
            .map(|modal| {
                modal
                    .changes_from(&state.explore.filters)
                    .into_iter()
                    .map(ExploreCommand::SetFilter)
                    .collect()
            })
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

/// Adjust scroll offset to keep the selected item visible
pub fn adjust_scroll(scroll_offset: usize, selected_index: usize, list_height: usize) -> usize {
    if list_height == 0 {
        return 0;
    }

    if selected_index < scroll_offset {
        return selected_index;
    }

    if selected_index >= scroll_offset + list_height {
        return selected_index.saturating_sub(list_height - 1);
    }

    scroll_offset
}

/// Convert a key event to a BrowseAction (pure function)
///
/// Modal states capture input first, then search focus, then normal mode.
/// Returns `None` if the key maps to nothing in the current context.
pub fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    state: &BrowseState,
) -> Option<BrowseAction> {
    // Help modal - Esc or '?' closes it
    if state.show_help_modal {
        return match code {
            KeyCode::Esc | KeyCode::Char('?') => Some(BrowseAction::HideHelp),
            _ => None,
        };
    }

    // Filter modal
    if state.filter_modal.is_some() {
        return match (code, modifiers) {
            (KeyCode::Esc, _) => Some(BrowseAction::HideFilterModal),
            (KeyCode::Enter, _) => Some(BrowseAction::ApplyFilterModal),
            (KeyCode::BackTab, _) => Some(BrowseAction::FilterModalPrevField),
            (KeyCode::Tab, _) | (KeyCode::Char('j') | KeyCode::Down, _) => {
                Some(BrowseAction::FilterModalNextField)
            }
            (KeyCode::Char('k') | KeyCode::Up, _) => Some(BrowseAction::FilterModalPrevField),
            (KeyCode::Char('h') | KeyCode::Left, _) => Some(BrowseAction::FilterModalAdjust(false)),
            (KeyCode::Char('l') | KeyCode::Right, _) => Some(BrowseAction::FilterModalAdjust(true)),
            (KeyCode::Char('x'), _) => Some(BrowseAction::FilterModalClear),
            _ => None,
        };
    }

    // Search mode
    if state.search_focused {
        return match (code, modifiers) {
            (KeyCode::Esc, _) => Some(BrowseAction::ClearSearchAndExit),
            (KeyCode::Enter, _) => Some(BrowseAction::ExitSearch),
            (KeyCode::Char('q'), m) if m.contains(KeyModifiers::CONTROL) => {
                Some(BrowseAction::Quit)
            }
            // Other characters are handled by the search box component
            _ => None,
        };
    }

    // Normal mode
    match (code, modifiers) {
        (KeyCode::Char('j') | KeyCode::Down, KeyModifiers::NONE) => Some(BrowseAction::MoveDown),
        (KeyCode::Char('k') | KeyCode::Up, KeyModifiers::NONE) => Some(BrowseAction::MoveUp),
        (KeyCode::Char('g'), KeyModifiers::NONE) => Some(BrowseAction::GoToTop),
        (KeyCode::Char('G'), _) => Some(BrowseAction::GoToBottom),

        (KeyCode::Tab, KeyModifiers::NONE) => Some(BrowseAction::SwitchTab),
        (KeyCode::Char('n') | KeyCode::Char(']') | KeyCode::Right, KeyModifiers::NONE) => {
            Some(BrowseAction::NextPage)
        }
        (KeyCode::Char('p') | KeyCode::Char('[') | KeyCode::Left, KeyModifiers::NONE) => {
            Some(BrowseAction::PrevPage)
        }
        (KeyCode::Char('r'), KeyModifiers::NONE) => Some(BrowseAction::Refresh),

        (KeyCode::Char('/'), KeyModifiers::NONE) => Some(BrowseAction::FocusSearch),
        (KeyCode::Char('f'), KeyModifiers::NONE) => Some(BrowseAction::ShowFilterModal),
        (KeyCode::Char('?'), KeyModifiers::NONE) => Some(BrowseAction::ShowHelp),

        (KeyCode::Esc, KeyModifiers::NONE) => {
            if state.toast.is_some() {
                Some(BrowseAction::DismissToast)
            } else {
                Some(BrowseAction::Quit)
            }
        }
        (KeyCode::Char('q'), KeyModifiers::NONE) => Some(BrowseAction::Quit),

        _ => None,
    }
}

/// Shortcuts for the footer, context-sensitive like the key map.
pub fn compute_shortcuts(state: &BrowseState) -> Vec<Shortcut> {
    if state.show_help_modal {
        return vec![Shortcut::new("Esc", "close")];
    }
    if state.filter_modal.is_some() {
        return vec![
            Shortcut::new("Tab/j/k", "field"),
            Shortcut::new("h/l", "adjust"),
            Shortcut::new("x", "clear"),
            Shortcut::new("Enter", "apply"),
            Shortcut::new("Esc", "cancel"),
        ];
    }
    if state.search_focused {
        return vec![
            Shortcut::new("Enter", "apply search"),
            Shortcut::new("Esc", "clear & exit"),
            Shortcut::new("C-q", "quit"),
        ];
    }

    vec![
        Shortcut::new("q", "quit"),
        Shortcut::new("Tab", "courses/events"),
        Shortcut::new("j/k", "nav"),
        Shortcut::new("n/p", "page"),
        Shortcut::new("/", "search"),
        Shortcut::new("f", "filter"),
        Shortcut::new("r", "refresh"),
        Shortcut::new("?", "help"),
    ]
}

// ============================================================================
// Tests
// ============================================================================
