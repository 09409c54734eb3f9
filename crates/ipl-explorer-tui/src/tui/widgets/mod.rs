// TUI widget modules for each dashboard panel, plus the number formatting
// they share.

pub mod compare;
pub mod filter_picker;
pub mod help_bar;
pub mod highlights;
pub mod prices;
pub mod quit_confirm;
pub mod report_card;
pub mod roles;
pub mod roster;
pub mod search_bar;
pub mod search_results;
pub mod status_bar;
pub mod team_spend;
pub mod top_paid;

use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Shown wherever team-dependent data would be when the filters removed
/// every player.
pub const NO_PLAYERS: &str = "No players match the current filters.";

/// Insert `,` thousands separators into a whole number.
pub fn group_thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// `₹1,850 L`
pub fn format_lacs(value: f64) -> String {
    format!("₹{} L", group_thousands(value))
}

/// Table cell for a price in lacs; `--` when unknown.
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) if p.fract() == 0.0 => group_thousands(p),
        Some(p) => format!("{p:.2}"),
        None => "--".to_string(),
    }
}

/// `₹31.35 Cr`
pub fn format_crores(value: f64) -> String {
    format!("₹{value:.2} Cr")
}

/// First row to draw so that `offset` never scrolls past the last page.
pub fn clamp_scroll(offset: usize, total: usize, visible: usize) -> usize {
    offset.min(total.saturating_sub(visible))
}

/// Bordered, dimmed one-liner used for empty and not-found states.
pub fn placeholder<'a>(title: impl Into<Line<'a>>, text: &str) -> Paragraph<'a> {
    let title: Line<'a> = title.into();
    Paragraph::new(format!("  {text}"))
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(title))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
