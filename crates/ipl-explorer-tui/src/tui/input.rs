// Keyboard input handling and command dispatch.
//
// Translates crossterm key events into ViewState mutations (team, filters,
// search text, tabs, scrolling) or into a UserCommand for the run loop.
// Any mutation of the selection marks the state dirty so the dashboard
// query re-runs.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{StatusMessage, ViewState};
use crate::protocol::{TabId, UserCommand};

/// Shown when `f` is pressed on a source without role and nationality columns.
pub const FILTERS_UNAVAILABLE: &str =
    "Role and nationality filters need both columns in the auction data.";

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the run loop has to act (quit, export).
/// Everything else is handled here by mutating `view_state`.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // Windows reports both Press and Release; only act on Press.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C always quits immediately regardless of mode.
    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    view_state.message = None;

    if view_state.confirm_quit {
        return handle_confirm_quit(key_event, view_state);
    }
    if view_state.search_mode {
        return handle_search_mode(key_event, view_state);
    }
    if view_state.filter_open {
        return handle_filter_picker(key_event, view_state);
    }

    match key_event.code {
        KeyCode::Char(c @ '1'..='7') => {
            if let Some(tab) = TabId::from_digit(c) {
                view_state.active_tab = tab;
            }
            None
        }

        // Team selection
        KeyCode::Tab => {
            step_team(view_state, true);
            None
        }
        KeyCode::BackTab => {
            step_team(view_state, false);
            None
        }

        // Scrolling (main panel)
        KeyCode::Up | KeyCode::Char('k') => {
            scroll_up(view_state, 1);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            scroll_down(view_state, 1);
            None
        }
        KeyCode::PageUp => {
            scroll_up(view_state, page_size());
            None
        }
        KeyCode::PageDown => {
            scroll_down(view_state, page_size());
            None
        }

        KeyCode::Char('/') => {
            view_state.search_mode = true;
            view_state.active_tab = TabId::Search;
            None
        }

        KeyCode::Char('f') => {
            if view_state.filters_available() {
                view_state.filter_open = true;
                view_state.filter_cursor = 0;
            } else {
                view_state.message = Some(StatusMessage::info(FILTERS_UNAVAILABLE));
            }
            None
        }

        // Top-N size
        KeyCode::Char('+') | KeyCode::Char('=') => {
            adjust_top_n(view_state, true);
            None
        }
        KeyCode::Char('-') => {
            adjust_top_n(view_state, false);
            None
        }

        // Comparison players
        KeyCode::Char(',') => {
            step_compare(view_state, 0, false);
            None
        }
        KeyCode::Char('.') => {
            step_compare(view_state, 0, true);
            None
        }
        KeyCode::Char('<') => {
            step_compare(view_state, 1, false);
            None
        }
        KeyCode::Char('>') => {
            step_compare(view_state, 1, true);
            None
        }

        KeyCode::Char('e') => Some(UserCommand::Export),

        // Quit: enter confirmation mode instead of quitting immediately
        KeyCode::Char('q') => {
            view_state.confirm_quit = true;
            None
        }

        _ => None,
    }
}

/// `y`/`q` confirm, `n`/Esc cancel, everything else is swallowed.
fn handle_confirm_quit(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('q') | KeyCode::Char('Q') => {
            Some(UserCommand::Quit)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            view_state.confirm_quit = false;
            None
        }
        _ => None,
    }
}

/// Typing edits the search text; Enter keeps it, Esc clears it.
fn handle_search_mode(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Esc => {
            view_state.search_mode = false;
            if !view_state.selection.search.is_empty() {
                view_state.selection.search.clear();
                view_state.dirty = true;
            }
        }
        KeyCode::Enter => {
            view_state.search_mode = false;
        }
        KeyCode::Backspace => {
            if view_state.selection.search.pop().is_some() {
                view_state.dirty = true;
            }
        }
        KeyCode::Char(c) => {
            view_state.selection.search.push(c);
            view_state.dirty = true;
        }
        _ => {}
    }
    None
}

/// Up/Down move the cursor, Space toggles, Esc/Enter close.
fn handle_filter_picker(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    let count = view_state.filter_options.len();
    match key_event.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('f') => {
            view_state.filter_open = false;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            view_state.filter_cursor = view_state.filter_cursor.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if view_state.filter_cursor + 1 < count {
                view_state.filter_cursor += 1;
            }
        }
        KeyCode::Char(' ') => {
            if let Some(option) = view_state.filter_options.get(view_state.filter_cursor) {
                option.toggle(&mut view_state.selection);
                view_state.dirty = true;
                reset_scroll(view_state);
            }
        }
        _ => {}
    }
    None
}

/// Move to the next (or previous) team, wrapping around.
fn step_team(view_state: &mut ViewState, forward: bool) {
    let count = view_state.teams.len();
    if count == 0 {
        return;
    }
    let next = match view_state.team_position() {
        Some(pos) => step_index(pos - 1, count, forward),
        None => 0,
    };
    view_state.selection.team = view_state.teams[next].clone();
    view_state.dirty = true;
    reset_scroll(view_state);
}

fn adjust_top_n(view_state: &mut ViewState, up: bool) {
    let current = view_state.selection.top_n;
    let next = if up {
        (current + 1).min(view_state.top_n_max)
    } else {
        current.saturating_sub(1).max(1)
    };
    if next != current {
        view_state.selection.top_n = next;
        view_state.dirty = true;
    }
}

/// Cycle comparison slot `slot` through the candidate list, wrapping around.
fn step_compare(view_state: &mut ViewState, slot: usize, forward: bool) {
    let count = view_state.compare_candidates.len();
    if count == 0 {
        return;
    }
    let next = step_index(view_state.compare_index[slot], count, forward);
    view_state.compare_index[slot] = next;
    view_state.selection.compare[slot] = Some(view_state.compare_candidates[next].clone());
    view_state.dirty = true;
}

fn step_index(current: usize, count: usize, forward: bool) -> usize {
    if forward {
        (current + 1) % count
    } else {
        (current + count - 1) % count
    }
}

/// Get the widget key for scroll state based on the active tab.
pub fn active_widget_key(tab: TabId) -> &'static str {
    match tab {
        TabId::Roster => "roster",
        TabId::Prices => "prices",
        TabId::Roles => "roles",
        TabId::TopPaid => "top_paid",
        TabId::Compare => "compare",
        TabId::TeamSpend => "team_spend",
        TabId::Search => "search",
    }
}

fn scroll_up(view_state: &mut ViewState, lines: usize) {
    let key = active_widget_key(view_state.active_tab);
    let offset = view_state.scroll_offset.entry(key.to_string()).or_insert(0);
    *offset = offset.saturating_sub(lines);
}

fn scroll_down(view_state: &mut ViewState, lines: usize) {
    let key = active_widget_key(view_state.active_tab);
    let offset = view_state.scroll_offset.entry(key.to_string()).or_insert(0);
    *offset = offset.saturating_add(lines);
}

/// Team-dependent tables start from the top after the team or filters change.
fn reset_scroll(view_state: &mut ViewState) {
    for tab in [TabId::Roster, TabId::Prices, TabId::Roles] {
        view_state.scroll_offset.remove(active_widget_key(tab));
    }
}

/// Page size for PageUp/PageDown scrolling.
fn page_size() -> usize {
    10
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_support::loaded_state;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl_key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn press(state: &mut ViewState, codes: &[KeyCode]) {
        for code in codes {
            handle_key(key(*code), state);
        }
    }

    // -- Tabs --

    #[test]
    fn digits_switch_tabs() {
        let mut state = ViewState::default();
        assert!(handle_key(key(KeyCode::Char('4')), &mut state).is_none());
        assert_eq!(state.active_tab, TabId::TopPaid);
        handle_key(key(KeyCode::Char('7')), &mut state);
        assert_eq!(state.active_tab, TabId::Search);
        handle_key(key(KeyCode::Char('8')), &mut state);
        assert_eq!(state.active_tab, TabId::Search);
        assert!(!state.dirty);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut state = ViewState::default();
        let mut event = key(KeyCode::Char('2'));
        event.kind = KeyEventKind::Release;
        handle_key(event, &mut state);
        assert_eq!(state.active_tab, TabId::Roster);
    }

    // -- Teams --

    #[test]
    fn tab_cycles_teams_with_wraparound() {
        let mut state = loaded_state();
        assert_eq!(state.selection.team, "Chennai Super Kings");
        press(&mut state, &[KeyCode::Tab]);
        assert_eq!(state.selection.team, "Gujarat Titans");
        assert!(state.dirty);
        press(&mut state, &[KeyCode::Tab, KeyCode::Tab]);
        assert_eq!(state.selection.team, "Chennai Super Kings");
        press(&mut state, &[KeyCode::BackTab]);
        assert_eq!(state.selection.team, "Unsold");
    }

    #[test]
    fn team_change_resets_team_scroll_only() {
        let mut state = loaded_state();
        state.scroll_offset.insert("roster".into(), 4);
        state.scroll_offset.insert("team_spend".into(), 2);
        press(&mut state, &[KeyCode::Tab]);
        assert_eq!(state.scroll("roster"), 0);
        assert_eq!(state.scroll("team_spend"), 2);
    }

    #[test]
    fn team_keys_noop_without_teams() {
        let mut state = ViewState::default();
        press(&mut state, &[KeyCode::Tab, KeyCode::BackTab]);
        assert!(!state.dirty);
    }

    // -- Scroll --

    #[test]
    fn scroll_is_per_tab_and_saturates() {
        let mut state = ViewState::default();
        press(&mut state, &[KeyCode::Down, KeyCode::Down, KeyCode::PageDown]);
        assert_eq!(state.scroll("roster"), 2 + page_size());
        press(&mut state, &[KeyCode::Char('5'), KeyCode::Up]);
        assert_eq!(state.scroll("compare"), 0);
        press(&mut state, &[KeyCode::Char('1'), KeyCode::PageUp, KeyCode::PageUp]);
        assert_eq!(state.scroll("roster"), 0);
    }

    // -- Search --

    #[test]
    fn search_mode_captures_text() {
        let mut state = loaded_state();
        press(&mut state, &[KeyCode::Char('/')]);
        assert!(state.search_mode);
        assert_eq!(state.active_tab, TabId::Search);

        // 'q' and digits are text while searching.
        press(
            &mut state,
            &[KeyCode::Char('g'), KeyCode::Char('i'), KeyCode::Char('q')],
        );
        assert_eq!(state.selection.search, "giq");
        assert!(!state.confirm_quit);
        press(&mut state, &[KeyCode::Backspace, KeyCode::Char('l')]);
        assert_eq!(state.selection.search, "gil");
        assert!(state.dirty);

        press(&mut state, &[KeyCode::Enter]);
        assert!(!state.search_mode);
        assert_eq!(state.selection.search, "gil");
    }

    #[test]
    fn esc_clears_search() {
        let mut state = loaded_state();
        press(
            &mut state,
            &[KeyCode::Char('/'), KeyCode::Char('x'), KeyCode::Esc],
        );
        assert!(!state.search_mode);
        assert!(state.selection.search.is_empty());
    }

    // -- Filters --

    #[test]
    fn filter_picker_toggles_options() {
        let mut state = loaded_state();
        press(&mut state, &[KeyCode::Char('f')]);
        assert!(state.filter_open);

        // Options: Batsman, Bowler, Indian, Overseas.
        press(&mut state, &[KeyCode::Down, KeyCode::Char(' ')]);
        assert!(state.selection.roles.contains("Bowler"));
        assert!(state.dirty);

        press(&mut state, &[KeyCode::Down, KeyCode::Down, KeyCode::Down, KeyCode::Down]);
        assert_eq!(state.filter_cursor, 3);
        press(&mut state, &[KeyCode::Char(' ')]);
        assert!(state.selection.nationalities.contains("Overseas"));

        // Keys that normally act are inert while the picker is open.
        press(&mut state, &[KeyCode::Tab, KeyCode::Char('q')]);
        assert_eq!(state.selection.team, "Chennai Super Kings");
        assert!(!state.confirm_quit);

        press(&mut state, &[KeyCode::Esc]);
        assert!(!state.filter_open);
        assert!(state.selection.roles.contains("Bowler"));
    }

    #[test]
    fn filter_picker_unavailable_without_columns() {
        let mut state = ViewState::default();
        press(&mut state, &[KeyCode::Char('f')]);
        assert!(!state.filter_open);
        assert_eq!(
            state.message.as_ref().map(|m| m.text.as_str()),
            Some(FILTERS_UNAVAILABLE)
        );

        // Any following key clears the message.
        press(&mut state, &[KeyCode::Char('2')]);
        assert!(state.message.is_none());
    }

    // -- Top N --

    #[test]
    fn top_n_stays_within_bounds() {
        let mut state = loaded_state();
        assert_eq!(state.selection.top_n, 3);
        press(&mut state, &[KeyCode::Char('+'); 5]);
        assert_eq!(state.selection.top_n, 5);
        press(&mut state, &[KeyCode::Char('-'); 9]);
        assert_eq!(state.selection.top_n, 1);
    }

    // -- Comparison --

    #[test]
    fn compare_slots_cycle_independently() {
        let mut state = loaded_state();
        // Candidates: Mohammed Shami, Rashid Khan, Ruturaj Gaikwad, Shubman Gill.
        press(&mut state, &[KeyCode::Char('.')]);
        assert_eq!(state.selection.compare[0].as_deref(), Some("Rashid Khan"));
        press(&mut state, &[KeyCode::Char('<')]);
        assert_eq!(state.selection.compare[1].as_deref(), Some("Shubman Gill"));
        press(&mut state, &[KeyCode::Char(','), KeyCode::Char(',')]);
        assert_eq!(state.selection.compare[0].as_deref(), Some("Shubman Gill"));
        assert!(state.dirty);
    }

    // -- Commands --

    #[test]
    fn e_requests_export() {
        let mut state = ViewState::default();
        assert_eq!(
            handle_key(key(KeyCode::Char('e')), &mut state),
            Some(UserCommand::Export)
        );
    }

    #[test]
    fn quit_needs_confirmation() {
        let mut state = ViewState::default();
        assert!(handle_key(key(KeyCode::Char('q')), &mut state).is_none());
        assert!(state.confirm_quit);

        // Other keys are blocked while confirming.
        handle_key(key(KeyCode::Char('3')), &mut state);
        assert_eq!(state.active_tab, TabId::Roster);

        handle_key(key(KeyCode::Esc), &mut state);
        assert!(!state.confirm_quit);

        handle_key(key(KeyCode::Char('q')), &mut state);
        assert_eq!(
            handle_key(key(KeyCode::Char('y')), &mut state),
            Some(UserCommand::Quit)
        );
    }

    #[test]
    fn ctrl_c_quits_from_any_mode() {
        let mut state = ViewState::default();
        state.search_mode = true;
        assert_eq!(
            handle_key(ctrl_key(KeyCode::Char('c')), &mut state),
            Some(UserCommand::Quit)
        );
        assert!(state.selection.search.is_empty());
    }
}
