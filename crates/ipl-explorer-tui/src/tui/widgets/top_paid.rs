// Top paid widget: the N most expensive players across all teams.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use super::{clamp_scroll, format_price, placeholder};
use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let view = &state.view;
    let title = format!(
        "Top {} Most Expensive Players (+/- to change, max {})",
        state.selection.top_n, state.top_n_max
    );

    if view.top_paid.is_empty() {
        frame.render_widget(placeholder(title, "No priced players in the auction data."), area);
        return;
    }

    let visible = (area.height as usize).saturating_sub(3);
    let offset = clamp_scroll(state.scroll("top_paid"), view.top_paid.len(), visible);

    let header = Row::new(vec![
        Cell::from("#"),
        Cell::from("Player"),
        Cell::from("Team"),
        Cell::from("Price"),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = view
        .top_paid
        .iter()
        .skip(offset)
        .map(|r| {
            let style = if r.team == view.team {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(r.rank.to_string()),
                Cell::from(r.player.clone()),
                Cell::from(r.team.clone()),
                Cell::from(format_price(Some(r.price))),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Min(18),
        Constraint::Min(18),
        Constraint::Length(8),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_support::{loaded_state, render_lines};

    #[test]
    fn lists_top_n_in_price_order() {
        let state = loaded_state();
        let lines = render_lines(90, 8, |frame| render(frame, frame.area(), &state));
        assert!(lines[0].contains("Top 3 Most Expensive Players"));
        assert!(lines[2].contains("Rashid Khan") && lines[2].contains("1,500"));
        assert!(lines[3].contains("Deepak Chahar"));
        assert!(lines[4].contains("Shubman Gill"));
        assert!(!lines[5].contains("Shami"));
    }
}
