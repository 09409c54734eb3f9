// Prices widget: bar chart of player prices and each player's share of the
// team's spend.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use ipl_explorer_core::pipeline::views::ChartPoint;

use super::{clamp_scroll, format_price, placeholder, NO_PLAYERS};
use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let view = &state.view;
    let title = format!("{} Player Prices", view.team);

    if view.team_empty {
        frame.render_widget(placeholder(title, NO_PLAYERS), area);
        return;
    }
    if view.price_chart.is_empty() {
        frame.render_widget(placeholder(title, "No priced players in this selection."), area);
        return;
    }

    let halves = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let offset = state.scroll("prices");
    render_chart(frame, halves[0], &title, &view.price_chart, offset);
    render_share(
        frame,
        halves[1],
        &format!("{} - Price Distribution", view.team),
        &view.price_share,
        offset,
    );
}

/// Horizontal bars, one per player, labelled with the price.
fn render_chart(frame: &mut Frame, area: Rect, title: &str, points: &[ChartPoint], offset: usize) {
    let visible = (area.height as usize).saturating_sub(2);
    let offset = clamp_scroll(offset, points.len(), visible);

    let bars: Vec<Bar> = points
        .iter()
        .skip(offset)
        .take(visible)
        .map(|p| {
            Bar::default()
                .value(p.value.max(0.0).round() as u64)
                .label(Line::from(p.category.clone()))
                .text_value(format_price(Some(p.value)))
                .style(Style::default().fg(Color::Cyan))
        })
        .collect();

    let max = points
        .iter()
        .map(|p| p.value.max(0.0).round() as u64)
        .max()
        .unwrap_or(0);

    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .max(max.max(1))
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, area);
}

/// Percentage of the team's spend per player, in roster order.
fn render_share(frame: &mut Frame, area: Rect, title: &str, points: &[ChartPoint], offset: usize) {
    let visible = (area.height as usize).saturating_sub(3);
    let offset = clamp_scroll(offset, points.len(), visible);

    let header = Row::new(vec![Cell::from("Player Name"), Cell::from("Share")]).style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );
    let rows: Vec<Row> = points
        .iter()
        .skip(offset)
        .map(|p| {
            Row::new(vec![
                Cell::from(p.category.clone()),
                Cell::from(format!("{:>5.1}%", p.value)),
            ])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Min(20), Constraint::Length(8)])
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    frame.render_widget(table, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
