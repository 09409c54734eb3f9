// Team spend widget: total auction spend per franchise, in crores.

use ratatui::layout::{Direction, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders};
use ratatui::Frame;

use super::{clamp_scroll, format_crores, placeholder};
use crate::tui::ViewState;

const TITLE: &str = "Total Spend by Each Team (in ₹ Crores)";

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let spend = &state.view.team_spend;
    if spend.is_empty() {
        frame.render_widget(placeholder(TITLE, "No sold players in the auction data."), area);
        return;
    }

    // Each bar takes one row plus a one-row gap.
    let visible = (area.height as usize).saturating_sub(2).div_ceil(2);
    let offset = clamp_scroll(state.scroll("team_spend"), spend.len(), visible);

    let bars: Vec<Bar> = spend
        .iter()
        .skip(offset)
        .take(visible)
        .map(|t| {
            let style = if t.team == state.view.team {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::Green)
            };
            Bar::default()
                // Hundredths of a crore keep the bar lengths exact.
                .value((t.crores * 100.0).max(0.0).round() as u64)
                .label(Line::from(t.team.clone()))
                .text_value(format_crores(t.crores))
                .style(style)
        })
        .collect();

    let max = spend
        .iter()
        .map(|t| (t.crores * 100.0).max(0.0).round() as u64)
        .max()
        .unwrap_or(0);

    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(TITLE))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(1)
        .max(max.max(1))
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_support::{loaded_state, render_text};

    #[test]
    fn bars_for_sold_teams_only() {
        let state = loaded_state();
        let text = render_text(100, 12, |frame| render(frame, frame.area(), &state));
        assert!(text.contains("Gujarat Titans"));
        assert!(text.contains("Chennai Super Kings"));
        assert!(!text.contains("Unsold"));
        assert!(text.contains("₹31.25 Cr"));
    }

    #[test]
    fn empty_league_message() {
        let state = ViewState::default();
        let text = render_text(80, 5, |frame| render(frame, frame.area(), &state));
        assert!(text.contains("No sold players"));
    }
}
