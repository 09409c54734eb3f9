// Roster widget: the selected team's players, most expensive first.
//
// Scrollable table: #, Player Name, Price (in Lacs)

use ratatui::layout::{Constraint, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{
    Block, Borders, Cell, Row, Scrollbar, ScrollbarOrientation, ScrollbarState, Table,
};
use ratatui::Frame;

use super::{clamp_scroll, format_price, placeholder, NO_PLAYERS};
use crate::tui::ViewState;

/// Render the roster table into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let view = &state.view;
    let title = format!("Players Bought by {}", view.team);

    if view.team_empty {
        frame.render_widget(placeholder(title, NO_PLAYERS), area);
        return;
    }

    // Borders and header take 3 rows.
    let visible_rows = (area.height as usize).saturating_sub(3);
    let total = view.roster.len();
    let offset = clamp_scroll(state.scroll("roster"), total, visible_rows);

    let header = Row::new(vec![
        Cell::from("#"),
        Cell::from("Player Name"),
        Cell::from("Price (in Lacs)"),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = view
        .roster
        .iter()
        .skip(offset)
        .map(|r| {
            let style = if r.price.is_none() {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(r.rank.to_string()),
                Cell::from(r.player.clone()),
                Cell::from(format_price(r.price)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Min(20),
        Constraint::Length(16),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("{title} ({total})")),
    );
    frame.render_widget(table, area);

    if total > visible_rows {
        let mut scrollbar_state =
            ScrollbarState::new(total.saturating_sub(visible_rows)).position(offset);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
