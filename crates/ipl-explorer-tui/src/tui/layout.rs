// Screen layout: panel arrangement and sizing.
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +--------------------------------------------------+
// | Search Bar (3 rows)                               |
// +-------------------------+------------------------+
// | Main Panel (65%)         | Sidebar (35%)          |
// |                          | +- Report Card (60%) -+|
// |                          | +- Highlights (40%) --+|
// +-------------------------+------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each dashboard zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: selected team, team counter, active filters, tab bar.
    pub status_bar: Rect,
    /// Player search input.
    pub search_bar: Rect,
    /// Left side of the middle section: tab-switched content area.
    pub main_panel: Rect,
    /// Right sidebar top: business report for the selected team.
    pub report_card: Rect,
    /// Right sidebar bottom: costliest/cheapest player and filter summary.
    pub highlights: Rect,
    /// Bottom row: keyboard hints or the latest status message.
    pub help_bar: Rect,
}

/// Build the dashboard layout from the available terminal area.
pub fn build_layout(area: Rect) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status bar
            Constraint::Length(3), // search bar
            Constraint::Min(8),    // main + sidebar
            Constraint::Length(1), // help bar
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(vertical[2]);

    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(horizontal[1]);

    AppLayout {
        status_bar: vertical[0],
        search_bar: vertical[1],
        main_panel: horizontal[0],
        report_card: sidebar[0],
        highlights: sidebar[1],
        help_bar: vertical[3],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn test_area() -> Rect {
        Rect::new(0, 0, 160, 50)
    }

    fn all_rects(layout: &AppLayout) -> [(&'static str, Rect); 6] {
        [
            ("status_bar", layout.status_bar),
            ("search_bar", layout.search_bar),
            ("main_panel", layout.main_panel),
            ("report_card", layout.report_card),
            ("highlights", layout.highlights),
            ("help_bar", layout.help_bar),
        ]
    }

    #[test]
    fn layout_all_rects_nonzero() {
        let layout = build_layout(test_area());
        for (name, rect) in all_rects(&layout) {
            assert!(
                rect.width > 0 && rect.height > 0,
                "{name} has zero area: {rect:?}"
            );
        }
    }

    #[test]
    fn fixed_rows_have_fixed_heights() {
        let layout = build_layout(test_area());
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.search_bar.height, 3);
        assert_eq!(layout.help_bar.height, 1);
    }

    #[test]
    fn main_panel_wider_than_sidebar() {
        let layout = build_layout(test_area());
        assert!(layout.main_panel.width > layout.report_card.width);
        assert_eq!(layout.report_card.width, layout.highlights.width);
    }

    #[test]
    fn report_card_above_and_taller_than_highlights() {
        let layout = build_layout(test_area());
        assert!(layout.report_card.y < layout.highlights.y);
        assert!(layout.report_card.height > layout.highlights.height);
    }

    #[test]
    fn layout_fits_within_area() {
        let area = test_area();
        let layout = build_layout(area);
        for (name, rect) in all_rects(&layout) {
            assert!(rect.right() <= area.width, "{name} exceeds width");
            assert!(rect.bottom() <= area.height, "{name} exceeds height");
        }
    }

    #[test]
    fn small_terminal_still_valid() {
        let layout = build_layout(Rect::new(0, 0, 40, 16));
        for (name, rect) in all_rects(&layout) {
            assert!(rect.width > 0 && rect.height > 0, "{name} collapsed");
        }
    }
}
