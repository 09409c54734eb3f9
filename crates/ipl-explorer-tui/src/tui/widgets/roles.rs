// Roles widget: player count per role for the selected team.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use ipl_explorer_core::pipeline::aggregate::RoleCount;

use super::{clamp_scroll, placeholder, NO_PLAYERS};
use crate::tui::ViewState;

pub const NO_ROLE_COLUMN: &str = "Role data is not available in the auction file.";

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let view = &state.view;
    let title = format!("{} - Role Distribution", view.team);

    let Some(breakdown) = &view.role_breakdown else {
        frame.render_widget(placeholder(title, NO_ROLE_COLUMN), area);
        return;
    };
    if view.team_empty {
        frame.render_widget(placeholder(title, NO_PLAYERS), area);
        return;
    }
    if breakdown.is_empty() {
        frame.render_widget(placeholder(title, "No roles recorded for these players."), area);
        return;
    }

    let visible = (area.height as usize).saturating_sub(3);
    let offset = clamp_scroll(state.scroll("roles"), breakdown.len(), visible);
    let total: usize = breakdown.iter().map(|r| r.count).sum();

    let header = Row::new(vec![
        Cell::from("Role"),
        Cell::from("Count"),
        Cell::from("Share"),
        Cell::from(""),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = breakdown
        .iter()
        .skip(offset)
        .map(|r| {
            Row::new(vec![
                Cell::from(r.role.clone()),
                Cell::from(r.count.to_string()),
                Cell::from(format!("{:>5.1}%", share(r, total))),
                Cell::from(meter(r.count, total, 20)).style(Style::default().fg(Color::Magenta)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(16),
        Constraint::Length(6),
        Constraint::Length(7),
        Constraint::Length(20),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(table, area);
}

fn share(role: &RoleCount, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        role.count as f64 / total as f64 * 100.0
    }
}

/// Proportional block meter, `width` cells at 100%.
pub fn meter(count: usize, total: usize, width: usize) -> String {
    if total == 0 {
        return String::new();
    }
    let filled = (count * width + total / 2) / total;
    "█".repeat(filled.min(width))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_support::{loaded_state, render_text, session};

    #[test]
    fn meter_scales_to_width() {
        assert_eq!(meter(1, 2, 10).chars().count(), 5);
        assert_eq!(meter(2, 2, 10).chars().count(), 10);
        assert_eq!(meter(0, 4, 10), "");
        assert_eq!(meter(3, 0, 10), "");
    }

    #[test]
    fn counts_roles_for_team() {
        let session = session();
        let mut state = loaded_state();
        state.selection.team = "Gujarat Titans".into();
        state.dirty = true;
        state.refresh(&session);
        let text = render_text(80, 8, |frame| render(frame, frame.area(), &state));
        assert!(text.contains("Batsman"));
        assert!(text.contains("Bowler"));
        assert!(text.contains("50.0%"));
    }

    #[test]
    fn missing_role_column_message() {
        let mut state = loaded_state();
        state.view.role_breakdown = None;
        let text = render_text(80, 5, |frame| render(frame, frame.area(), &state));
        assert!(text.contains(NO_ROLE_COLUMN));
    }
}
