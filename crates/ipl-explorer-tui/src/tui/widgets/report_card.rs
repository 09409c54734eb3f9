// Report card widget: spend totals and the best value-for-money player
// for the selected team.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use ipl_explorer_core::pipeline::format_stat;
use ipl_explorer_core::pipeline::metrics::BusinessReport;

use super::{format_lacs, format_price, placeholder, NO_PLAYERS};
use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let title = format!("{} - Business Report", state.view.team);
    let Some(report) = &state.view.report else {
        frame.render_widget(placeholder(title, NO_PLAYERS), area);
        return;
    };

    let paragraph = Paragraph::new(report_lines(report))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(paragraph, area);
}

fn report_lines(report: &BusinessReport) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::Gray);
    let value = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let top = &report.top_performer;

    let avg = report
        .avg_price
        .map(format_lacs)
        .unwrap_or_else(|| "--".to_string());
    let roi = top
        .roi
        .map(|r| format!("{r:.2}"))
        .unwrap_or_else(|| "--".to_string());

    vec![
        Line::from(vec![
            Span::styled(" Total Spent:   ", label),
            Span::styled(format_lacs(report.total_spent), value.fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::styled(" Avg Price:     ", label),
            Span::styled(avg, value),
        ]),
        Line::from(vec![
            Span::styled(" Players:       ", label),
            Span::styled(
                format!("{} ({} with stats)", report.players, report.matched_stats),
                value,
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Top Performer: ", label),
            Span::styled(top.player.clone(), value.fg(Color::Yellow)),
        ]),
        Line::from(vec![
            Span::styled("   ROI ", label),
            Span::styled(roi, value),
            Span::styled(" at ", label),
            Span::raw(format_price(top.price)),
            Span::styled(" L", label),
        ]),
        Line::from(vec![
            Span::styled("   ", label),
            Span::raw(format_stat(top.runs)),
            Span::styled(" runs, ", label),
            Span::raw(format_stat(top.wickets)),
            Span::styled(" wickets", label),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_support::{loaded_state, render_text, session};

    #[test]
    fn shows_spend_and_top_performer() {
        let state = loaded_state();
        let text = render_text(50, 12, |frame| render(frame, frame.area(), &state));
        assert!(text.contains("Chennai Super Kings - Business Report"));
        assert!(text.contains("₹2,000 L"));
        assert!(text.contains("₹1,000 L"));
        assert!(text.contains("2 (1 with stats)"));
        assert!(text.contains("Ruturaj Gaikwad"));
        assert!(text.contains("ROI 0.98 at 600 L"));
    }

    #[test]
    fn bowler_value_counts_wickets() {
        let session = session();
        let mut state = loaded_state();
        state.selection.team = "Gujarat Titans".into();
        state.dirty = true;
        state.refresh(&session);
        // Shami: (5 + 20 * 28) / 625 = 0.904; Gill: 890 / 800 = 1.11
        let text = render_text(50, 12, |frame| render(frame, frame.area(), &state));
        assert!(text.contains("Shubman Gill"));
        assert!(text.contains("890 runs, 0 wickets"));
    }

    #[test]
    fn empty_selection_message() {
        let mut state = loaded_state();
        state.view.report = None;
        let text = render_text(50, 6, |frame| render(frame, frame.area(), &state));
        assert!(text.contains("No players match"));
    }
}
