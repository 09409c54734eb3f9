// Search results widget: auction matches on top, career stats below.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use ipl_explorer_core::pipeline::SearchOutcome;

use super::compare::stats_table;
use super::{clamp_scroll, format_price, placeholder};
use crate::tui::ViewState;

pub const PLAYER_NOT_FOUND: &str = "Player not found in the auction data.";
pub const STATS_NOT_FOUND: &str = "Stats not found in the local dataset.";
const NOT_SEARCHED: &str = "Press / and type part of a player's name.";

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let halves = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_hits(frame, halves[0], state);
    render_stats(frame, halves[1], state);
}

fn render_hits(frame: &mut Frame, area: Rect, state: &ViewState) {
    let query = state.selection.search.trim();
    let title = format!("Search Results for \"{query}\"");

    let hits = match &state.view.search_hits {
        SearchOutcome::NotSearched => {
            frame.render_widget(placeholder("Search Results", NOT_SEARCHED), area);
            return;
        }
        SearchOutcome::NotFound => {
            frame.render_widget(placeholder(title, PLAYER_NOT_FOUND), area);
            return;
        }
        SearchOutcome::Found(hits) => hits,
    };

    let visible = (area.height as usize).saturating_sub(3);
    let offset = clamp_scroll(state.scroll("search"), hits.len(), visible);

    let header = Row::new(vec![
        Cell::from("#"),
        Cell::from("Player Name"),
        Cell::from("Team"),
        Cell::from("Price (in Lacs)"),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = hits
        .iter()
        .enumerate()
        .skip(offset)
        .map(|(i, h)| {
            Row::new(vec![
                Cell::from((i + 1).to_string()),
                Cell::from(h.player.clone()),
                Cell::from(h.team.clone()),
                Cell::from(format_price(h.price)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Min(18),
        Constraint::Min(18),
        Constraint::Length(16),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(format!("{title} ({})", hits.len())));
    frame.render_widget(table, area);
}

fn render_stats(frame: &mut Frame, area: Rect, state: &ViewState) {
    let matches = match &state.view.stats_matches {
        SearchOutcome::NotSearched => {
            frame.render_widget(placeholder("Career Stats", NOT_SEARCHED), area);
            return;
        }
        SearchOutcome::NotFound => {
            frame.render_widget(placeholder("Career Stats", STATS_NOT_FOUND), area);
            return;
        }
        SearchOutcome::Found(matches) => matches,
    };

    let title = format!("Career Stats ({} found)", matches.players.len());
    frame.render_widget(stats_table(matches, 0, title), area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
