// TUI dashboard: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` holding the user's selection and the latest
// `DashboardView`. Key presses mutate the selection; whenever it changes the
// dashboard query re-runs and the next render tick (~30 fps) draws the result.

pub mod input;
pub mod layout;
pub mod widgets;

use std::collections::HashMap;
use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::Frame;
use tracing::{info, warn};

use ipl_explorer_core::dashboard::{query, DashboardView, Selection};
use ipl_explorer_core::dataset::Dataset;

use crate::app::{FilterOption, Session};
use crate::protocol::{TabId, UserCommand};

use layout::build_layout;

// ---------------------------------------------------------------------------
// Status messages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Error,
}

/// One-line notice shown in the help bar until the next key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        StatusMessage {
            kind: MessageKind::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        StatusMessage {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        StatusMessage {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// TUI-local state: what the user picked and what the pipeline returned.
pub struct ViewState {
    /// Current team, filters, search text, top-N and comparison players.
    pub selection: Selection,
    /// Result of the last dashboard query for `selection`.
    pub view: DashboardView,
    /// Team picker entries, sorted.
    pub teams: Vec<String>,
    /// Role and nationality options. Empty when filtering is unavailable.
    pub filter_options: Vec<FilterOption>,
    /// Players offered in the comparison pickers.
    pub compare_candidates: Vec<String>,
    /// Index into `compare_candidates` for each comparison slot.
    pub compare_index: [usize; 2],
    /// Upper bound for the top-paid table size.
    pub top_n_max: usize,
    /// Which tab is active in the main panel.
    pub active_tab: TabId,
    /// Per-widget scroll offsets (keyed by widget name).
    pub scroll_offset: HashMap<String, usize>,
    /// Whether the search bar is capturing keystrokes.
    pub search_mode: bool,
    /// Whether the filter picker overlay is shown.
    pub filter_open: bool,
    /// Highlighted row in the filter picker.
    pub filter_cursor: usize,
    /// Whether the quit confirmation dialog is shown.
    pub confirm_quit: bool,
    pub message: Option<StatusMessage>,
    /// The selection changed since `view` was computed.
    pub dirty: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        let selection = Selection::default();
        ViewState {
            view: query(&Dataset::default(), &selection),
            selection,
            teams: Vec::new(),
            filter_options: Vec::new(),
            compare_candidates: Vec::new(),
            compare_index: [0, 0],
            top_n_max: 20,
            active_tab: TabId::Roster,
            scroll_offset: HashMap::new(),
            search_mode: false,
            filter_open: false,
            filter_cursor: 0,
            confirm_quit: false,
            message: None,
            dirty: false,
        }
    }
}

impl ViewState {
    /// Initial state for a loaded session, with the first query already run.
    pub fn from_session(session: &Session) -> Self {
        let selection = session.initial_selection();
        ViewState {
            view: session.query(&selection),
            selection,
            teams: session.teams(),
            filter_options: session.filter_options(),
            compare_candidates: session.compare_candidates(),
            top_n_max: session.config.dashboard.top_n_max,
            ..ViewState::default()
        }
    }

    /// Re-run the dashboard query if the selection changed.
    pub fn refresh(&mut self, session: &Session) {
        if self.dirty {
            self.view = session.query(&self.selection);
            self.dirty = false;
        }
    }

    /// 1-based position of the selected team in the picker, if any.
    pub fn team_position(&self) -> Option<usize> {
        self.teams
            .iter()
            .position(|t| *t == self.selection.team)
            .map(|i| i + 1)
    }

    /// Scroll offset for a widget key.
    pub fn scroll(&self, key: &str) -> usize {
        self.scroll_offset.get(key).copied().unwrap_or(0)
    }

    /// Whether the role/nationality picker can be opened.
    pub fn filters_available(&self) -> bool {
        !self.filter_options.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// Export the roster currently on screen and report the outcome.
fn export_roster(state: &mut ViewState, session: &Session) {
    state.message = Some(match session.export(&state.view) {
        Ok(path) => StatusMessage::success(format!(
            "Exported {} players to {}",
            state.view.roster.len(),
            path.display()
        )),
        Err(e) => {
            warn!("export failed: {e}");
            StatusMessage::error(format!("Export failed: {e}"))
        }
    });
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete dashboard frame.
pub fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, state);
    widgets::search_bar::render(frame, layout.search_bar, state);
    render_main_panel(frame, layout.main_panel, state);
    widgets::report_card::render(frame, layout.report_card, state);
    widgets::highlights::render(frame, layout.highlights, state);
    widgets::help_bar::render(frame, layout.help_bar, state);

    if state.filter_open {
        widgets::filter_picker::render(frame, frame.area(), state);
    }
    if state.confirm_quit {
        widgets::quit_confirm::render(frame, frame.area());
    }
}

fn render_main_panel(frame: &mut Frame, area: ratatui::layout::Rect, state: &ViewState) {
    match state.active_tab {
        TabId::Roster => widgets::roster::render(frame, area, state),
        TabId::Prices => widgets::prices::render(frame, area, state),
        TabId::Roles => widgets::roles::render(frame, area, state),
        TabId::TopPaid => widgets::top_paid::render(frame, area, state),
        TabId::Compare => widgets::compare::render(frame, area, state),
        TabId::TeamSpend => widgets::team_spend::render(frame, area, state),
        TabId::Search => widgets::search_results::render(frame, area, state),
    }
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop until the user quits.
///
/// 1. Initializes the terminal (raw mode, alternate screen).
/// 2. Installs a panic hook that restores the terminal.
/// 3. Multiplexes keyboard input and render ticks.
/// 4. Restores the terminal on exit.
pub async fn run(session: Session) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view_state = ViewState::from_session(&session);
    info!(
        "dashboard ready: {} teams, {} comparison candidates",
        view_state.teams.len(),
        view_state.compare_candidates.len()
    );

    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let result = loop {
        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        match input::handle_key(key_event, &mut view_state) {
                            Some(UserCommand::Quit) => break Ok(()),
                            Some(UserCommand::Export) => export_roster(&mut view_state, &session),
                            None => {}
                        }
                        view_state.refresh(&session);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        break Err(anyhow::Error::new(e).context("terminal input error"));
                    }
                    None => break Ok(()),
                }
            }

            _ = render_tick.tick() => {
                if let Err(e) = terminal.draw(|frame| render_frame(frame, &view_state)) {
                    break Err(anyhow::Error::new(e).context("failed to draw frame"));
                }
            }
        }
    };

    ratatui::restore();

    result
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
