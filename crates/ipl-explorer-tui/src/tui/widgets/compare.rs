// Compare widget: two players' stats side by side.
//
// `,`/`.` pick the first player, `<`/`>` the second.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use ipl_explorer_core::pipeline::views::Comparison;
use ipl_explorer_core::pipeline::SearchOutcome;

use super::{clamp_scroll, placeholder};
use crate::tui::ViewState;

pub const NOT_AVAILABLE: &str = "Comparison data not available.";

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let [first, second] = &state.selection.compare;
    let title = format!(
        "Compare: {} vs {}  (,/. and </> to change)",
        first.as_deref().unwrap_or("--"),
        second.as_deref().unwrap_or("--")
    );

    let SearchOutcome::Found(comparison) = &state.view.comparison else {
        frame.render_widget(placeholder(title, NOT_AVAILABLE), area);
        return;
    };

    let visible = (area.height as usize).saturating_sub(3);
    let offset = clamp_scroll(state.scroll("compare"), comparison.rows.len(), visible);
    frame.render_widget(stats_table(comparison, offset, title), area);
}

/// Stat names down the left, one column per player. Shared with the
/// search tab's stats half.
pub(crate) fn stats_table(comparison: &Comparison, offset: usize, title: String) -> Table<'static> {
    let header = Row::new(
        std::iter::once(Cell::from("Stat"))
            .chain(comparison.players.iter().map(|p| Cell::from(p.clone())))
            .collect::<Vec<_>>(),
    )
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = comparison
        .rows
        .iter()
        .skip(offset)
        .map(|r| {
            let stat = Cell::from(r.stat.clone()).style(Style::default().fg(Color::Gray));
            let values = r
                .values
                .iter()
                .map(|v| Cell::from(v.clone().unwrap_or_else(|| "--".to_string())));
            Row::new(std::iter::once(stat).chain(values).collect::<Vec<_>>())
        })
        .collect();

    let widths: Vec<Constraint> = std::iter::once(Constraint::Length(16))
        .chain(comparison.players.iter().map(|_| Constraint::Min(16)))
        .collect();

    Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_support::{loaded_state, render_lines, render_text, session};

    #[test]
    fn side_by_side_columns() {
        let session = session();
        let mut state = loaded_state();
        state.selection.compare = [Some("Rashid Khan".into()), Some("Shubman Gill".into())];
        state.dirty = true;
        state.refresh(&session);

        let lines = render_lines(80, 10, |frame| render(frame, frame.area(), &state));
        assert!(lines[1].contains("Rashid Khan") && lines[1].contains("Shubman Gill"));
        let wickets = lines.iter().find(|l| l.contains("wickets")).unwrap();
        assert!(wickets.contains("27"));
        assert!(lines.iter().any(|l| l.contains("matches")));
    }

    #[test]
    fn unknown_players_show_message() {
        let mut state = loaded_state();
        state.view.comparison = SearchOutcome::NotFound;
        let text = render_text(80, 5, |frame| render(frame, frame.area(), &state));
        assert!(text.contains(NOT_AVAILABLE));
    }
}
