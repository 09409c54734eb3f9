// Highlights widget: the team's costliest and cheapest buys plus the
// active filters.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use ipl_explorer_core::pipeline::views::PricedPlayer;

use super::{format_price, placeholder, NO_PLAYERS};
use crate::tui::ViewState;

const TITLE: &str = "Highlights";

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    if state.view.team_empty {
        frame.render_widget(placeholder(TITLE, NO_PLAYERS), area);
        return;
    }

    let label = Style::default().fg(Color::Gray);
    let mut lines = Vec::new();

    match &state.view.extremes {
        Some(extremes) => {
            lines.push(player_line(" Most Expensive: ", &extremes.costliest, Color::Red));
            lines.push(player_line(" Cheapest:       ", &extremes.cheapest, Color::Green));
        }
        None => lines.push(Line::from(Span::styled(
            " No prices recorded for this team.",
            Style::default().fg(Color::DarkGray),
        ))),
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(" Roles:       ", label),
        Span::raw(join_or_all(&state.selection.roles)),
    ]));
    lines.push(Line::from(vec![
        Span::styled(" Nationality: ", label),
        Span::raw(join_or_all(&state.selection.nationalities)),
    ]));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(TITLE));
    frame.render_widget(paragraph, area);
}

fn player_line(label: &'static str, player: &PricedPlayer, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::Gray)),
        Span::styled(
            player.player.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" ({} L)", format_price(Some(player.price)))),
    ])
}

fn join_or_all(values: &std::collections::BTreeSet<String>) -> String {
    if values.is_empty() {
        "All".to_string()
    } else {
        values.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}
