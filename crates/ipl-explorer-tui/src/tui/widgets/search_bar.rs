// Search bar widget: the free-text player search input.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let search = &state.selection.search;

    let line = if state.search_mode {
        Line::from(vec![
            Span::styled(format!(" {search}"), Style::default().fg(Color::White)),
            Span::styled(
                "_",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
        ])
    } else if search.is_empty() {
        Line::from(Span::styled(
            " Press / to search players by name",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(
            format!(" {search}"),
            Style::default().fg(Color::Cyan),
        ))
    };

    let border = if state.search_mode {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title("Search Player"),
    );
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_support::render_text;

    #[test]
    fn shows_hint_when_idle() {
        let state = ViewState::default();
        let text = render_text(60, 3, |frame| render(frame, frame.area(), &state));
        assert!(text.contains("Press / to search"));
    }

    #[test]
    fn shows_query_and_cursor_while_typing() {
        let mut state = ViewState::default();
        state.search_mode = true;
        state.selection.search = "gill".into();
        let text = render_text(60, 3, |frame| render(frame, frame.area(), &state));
        assert!(text.contains("gill_"));
    }
}
