// Status bar widget: selected team, team counter, active filters, tab bar.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use ipl_explorer_core::dashboard::Selection;

use crate::protocol::TabId;
use crate::tui::ViewState;

/// Render the status bar into the given area.
///
/// Layout: [team] [n/total] [filters] | [tab bar]
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut spans = vec![Span::styled(
        format!(" {} ", state.selection.team),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(pos) = state.team_position() {
        spans.push(Span::styled(
            format!("({}/{})", pos, state.teams.len()),
            Style::default().fg(Color::Gray),
        ));
    }

    if let Some(summary) = filter_summary(&state.selection) {
        spans.push(Span::styled(
            format!(" [{summary}]"),
            Style::default().fg(Color::Cyan),
        ));
    }

    spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
    spans.extend(tab_spans(state.active_tab));

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// Active role and nationality filters, e.g. `Bowler+Batsman / Overseas`.
/// `None` when nothing is filtered.
pub fn filter_summary(selection: &Selection) -> Option<String> {
    let join = |set: &std::collections::BTreeSet<String>| {
        set.iter().map(String::as_str).collect::<Vec<_>>().join("+")
    };
    let parts: Vec<String> = [&selection.roles, &selection.nationalities]
        .into_iter()
        .filter(|set| !set.is_empty())
        .map(join)
        .collect();
    (!parts.is_empty()).then(|| parts.join(" / "))
}

/// Tab indicator spans with the active tab highlighted, e.g.
/// "[1:Roster] [2:Prices] ... [7:Search]"
pub fn tab_spans(active: TabId) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for tab in TabId::ALL {
        let style = if tab == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(
            format!("[{}:{}]", tab.number(), tab.label()),
            style,
        ));
        spans.push(Span::raw(" "));
    }
    spans
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
