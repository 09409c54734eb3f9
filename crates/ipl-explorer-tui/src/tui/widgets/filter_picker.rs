// Filter picker overlay: checkbox list of roles and nationalities.
//
// Up/Down move the cursor, Space toggles, Esc/Enter/f close.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::quit_confirm::centered_rect;
use crate::tui::ViewState;

const DIALOG_WIDTH: u16 = 40;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let options = &state.filter_options;
    // Section headers plus borders.
    let wanted = options.len() as u16 + 4;
    let dialog_area = centered_rect(DIALOG_WIDTH, wanted.max(5), area);
    frame.render_widget(Clear, dialog_area);

    let inner_rows = dialog_area.height.saturating_sub(2) as usize;
    let mut lines = Vec::with_capacity(options.len() + 2);
    let mut cursor_line = 0;
    let mut current = None;

    for (i, option) in options.iter().enumerate() {
        if current != Some(option.dimension) {
            current = Some(option.dimension);
            lines.push(Line::from(Span::styled(
                option.dimension.label(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )));
        }

        let mark = if option.is_selected(&state.selection) { "[x]" } else { "[ ]" };
        let style = if i == state.filter_cursor {
            cursor_line = lines.len();
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(format!(" {mark} {}", option.value), style)));
    }

    // Keep the cursor on screen in short terminals.
    let offset = (cursor_line + 1).saturating_sub(inner_rows);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Filters (space toggles, esc closes) ");
    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((offset as u16, 0))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, dialog_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_support::{loaded_state, render_lines, render_text};

    #[test]
    fn lists_options_under_headers() {
        let mut state = loaded_state();
        state.filter_open = true;
        state.selection.roles.insert("Bowler".into());
        let text = render_text(80, 20, |frame| render(frame, frame.area(), &state));
        assert!(text.contains("Filters"));
        assert!(text.contains("Role"));
        assert!(text.contains("Nationality"));
        assert!(text.contains("[x] Bowler"));
        assert!(text.contains("[ ] Batsman"));
        assert!(text.contains("[ ] Overseas"));
    }

    #[test]
    fn cursor_stays_visible_when_short() {
        let mut state = loaded_state();
        state.filter_cursor = state.filter_options.len() - 1;
        let last = state.filter_options[state.filter_cursor].value.clone();
        let lines = render_lines(60, 5, |frame| render(frame, frame.area(), &state));
        assert!(lines.iter().any(|l| l.contains(&last)));
    }
}
