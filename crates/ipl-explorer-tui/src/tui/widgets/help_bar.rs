// Help bar widget: key hints for the current mode, or the last status
// message until the next key press.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::{MessageKind, ViewState};

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let line = match &state.message {
        Some(message) => {
            let color = match message.kind {
                MessageKind::Info => Color::Cyan,
                MessageKind::Success => Color::Green,
                MessageKind::Error => Color::Red,
            };
            Line::from(Span::styled(
                format!(" {}", message.text),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
        }
        None => hint_line(hints(state)),
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// `(key, action)` pairs for the active mode.
pub fn hints(state: &ViewState) -> &'static [(&'static str, &'static str)] {
    if state.confirm_quit {
        &[("y", "quit"), ("n/Esc", "stay")]
    } else if state.search_mode {
        &[("type", "search"), ("Enter", "keep"), ("Esc", "clear")]
    } else if state.filter_open {
        &[("↑↓", "move"), ("Space", "toggle"), ("Esc", "close")]
    } else {
        &[
            ("Tab", "team"),
            ("1-7", "tabs"),
            ("/", "search"),
            ("f", "filters"),
            ("+/-", "top N"),
            ("e", "export"),
            ("↑↓", "scroll"),
            ("q", "quit"),
        ]
    }
}

fn hint_line(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for (key, action) in hints {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {action}  "), Style::default().fg(Color::Gray)));
    }
    Line::from(spans)
}
