// Types shared between the input handler and the run loop.

/// Main panel tabs, in the order of their number keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabId {
    Roster,
    Prices,
    Roles,
    TopPaid,
    Compare,
    TeamSpend,
    Search,
}

impl TabId {
    pub const ALL: [TabId; 7] = [
        TabId::Roster,
        TabId::Prices,
        TabId::Roles,
        TabId::TopPaid,
        TabId::Compare,
        TabId::TeamSpend,
        TabId::Search,
    ];

    /// Tab for a number key `1`..=`7`.
    pub fn from_digit(c: char) -> Option<TabId> {
        let idx = c.to_digit(10)?.checked_sub(1)?;
        TabId::ALL.get(idx as usize).copied()
    }

    /// 1-based key number shown in the tab bar.
    pub fn number(self) -> usize {
        TabId::ALL.iter().position(|t| *t == self).map_or(0, |i| i + 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            TabId::Roster => "Roster",
            TabId::Prices => "Prices",
            TabId::Roles => "Roles",
            TabId::TopPaid => "Top Paid",
            TabId::Compare => "Compare",
            TabId::TeamSpend => "Team Spend",
            TabId::Search => "Search",
        }
    }
}

/// Actions the input handler cannot complete on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserCommand {
    /// Write the selected team's roster to the export directory.
    Export,
    Quit,
}
