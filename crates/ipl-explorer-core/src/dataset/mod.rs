// In-memory tables for the auction results and the player statistics.
//
// Both tables are built once by the loader and then only read. `Dataset`
// bundles them into the snapshot every pipeline stage borrows.

pub mod loader;
pub mod schema;

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;
use tracing::warn;

pub use loader::{load_all, load_all_from_paths, LoadError};
pub use schema::UNSOLD_TEAM;

// ---------------------------------------------------------------------------
// Auction table
// ---------------------------------------------------------------------------

/// One player at the auction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuctionRecord {
    pub player: String,
    /// Franchise that bought the player, or `"Unsold"`.
    pub team: String,
    /// Final price in lacs. `None` when the source cell was blank or not a number.
    pub price: Option<f64>,
    pub role: Option<String>,
    pub nationality: Option<String>,
}

/// Which optional auction columns the source actually provided.
///
/// Computed once at load time so the filter stage and the UI never have to
/// probe the table again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AuctionSchema {
    pub has_team: bool,
    pub has_price: bool,
    pub has_role: bool,
    pub has_nationality: bool,
}

impl AuctionSchema {
    /// Role and nationality filtering is only offered when both columns exist.
    pub fn supports_player_filters(&self) -> bool {
        self.has_role && self.has_nationality
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuctionTable {
    pub schema: AuctionSchema,
    pub records: Vec<AuctionRecord>,
}

impl AuctionTable {
    pub fn new(schema: AuctionSchema, records: Vec<AuctionRecord>) -> Self {
        AuctionTable { schema, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct team names, sorted. Includes `"Unsold"` when present.
    pub fn teams(&self) -> Vec<String> {
        distinct_sorted(self.records.iter().map(|r| Some(r.team.as_str())))
    }

    /// Distinct non-empty role values, sorted.
    pub fn role_options(&self) -> Vec<String> {
        distinct_sorted(self.records.iter().map(|r| r.role.as_deref()))
    }

    /// Distinct non-empty nationality values, sorted.
    pub fn nationality_options(&self) -> Vec<String> {
        distinct_sorted(self.records.iter().map(|r| r.nationality.as_deref()))
    }
}

// ---------------------------------------------------------------------------
// Stats table
// ---------------------------------------------------------------------------

/// Career statistics for one player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsRecord {
    pub player_name: String,
    pub runs: f64,
    pub wickets: f64,
    /// Every other source column, aligned with `StatsTable::extra_columns`.
    pub extra: Vec<Option<String>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsTable {
    /// Lower-cased names of the pass-through columns, in source order.
    pub extra_columns: Vec<String>,
    pub records: Vec<StatsRecord>,
    /// True when the source had no runs column and zeros were filled in.
    pub runs_synthesized: bool,
    /// True when the source had no wickets column and zeros were filled in.
    pub wickets_synthesized: bool,
    by_name: HashMap<String, usize>,
}

impl StatsTable {
    /// Build the table and its name index. When a name repeats, the first
    /// row keeps the index slot.
    pub fn new(
        extra_columns: Vec<String>,
        records: Vec<StatsRecord>,
        runs_synthesized: bool,
        wickets_synthesized: bool,
    ) -> Self {
        let mut by_name = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if by_name.contains_key(&record.player_name) {
                warn!(
                    "duplicate stats row for '{}', joining on the first one",
                    record.player_name
                );
                continue;
            }
            by_name.insert(record.player_name.clone(), i);
        }
        StatsTable {
            extra_columns,
            records,
            runs_synthesized,
            wickets_synthesized,
            by_name,
        }
    }

    /// Exact-name lookup used by the join.
    pub fn find(&self, player_name: &str) -> Option<&StatsRecord> {
        self.by_name.get(player_name).map(|&i| &self.records[i])
    }

    /// Value of a pass-through column for a record, by column name.
    pub fn extra_value<'a>(&self, record: &'a StatsRecord, column: &str) -> Option<&'a str> {
        let idx = self.extra_columns.iter().position(|c| c == column)?;
        record.extra.get(idx).and_then(|v| v.as_deref())
    }

    /// Distinct player names, sorted.
    pub fn player_names(&self) -> Vec<String> {
        distinct_sorted(self.records.iter().map(|r| Some(r.player_name.as_str())))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Dataset snapshot
// ---------------------------------------------------------------------------

/// Both tables, loaded once per session and shared read-only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub auction: AuctionTable,
    pub stats: StatsTable,
}

impl Dataset {
    pub fn new(auction: AuctionTable, stats: StatsTable) -> Self {
        Dataset { auction, stats }
    }
}

fn distinct_sorted<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
    values
        .flatten()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn auction(player: &str, team: &str, role: Option<&str>) -> AuctionRecord {
        AuctionRecord {
            player: player.to_string(),
            team: team.to_string(),
            price: None,
            role: role.map(str::to_string),
            nationality: None,
        }
    }

    fn stats(name: &str, runs: f64) -> StatsRecord {
        StatsRecord {
            player_name: name.to_string(),
            runs,
            wickets: 0.0,
            extra: vec![Some(format!("{name}-extra"))],
        }
    }

    #[test]
    fn teams_are_sorted_and_distinct() {
        let table = AuctionTable::new(
            AuctionSchema::default(),
            vec![
                auction("A", "Punjab Kings", None),
                auction("B", "Unsold", None),
                auction("C", "Chennai Super Kings", None),
                auction("D", "Punjab Kings", None),
            ],
        );
        assert_eq!(
            table.teams(),
            vec!["Chennai Super Kings", "Punjab Kings", "Unsold"]
        );
    }

    #[test]
    fn role_options_skip_missing_values() {
        let table = AuctionTable::new(
            AuctionSchema::default(),
            vec![
                auction("A", "X", Some("Batsman")),
                auction("B", "X", None),
                auction("C", "X", Some("All-Rounder")),
                auction("D", "X", Some("Batsman")),
            ],
        );
        assert_eq!(table.role_options(), vec!["All-Rounder", "Batsman"]);
        assert!(table.nationality_options().is_empty());
    }

    #[test]
    fn player_filters_need_both_columns() {
        let mut schema = AuctionSchema {
            has_role: true,
            ..AuctionSchema::default()
        };
        assert!(!schema.supports_player_filters());
        schema.has_nationality = true;
        assert!(schema.supports_player_filters());
    }

    #[test]
    fn stats_find_uses_first_duplicate() {
        let table = StatsTable::new(
            vec!["matches".into()],
            vec![stats("Virat Kohli", 10.0), stats("Virat Kohli", 99.0)],
            false,
            false,
        );
        assert_eq!(table.find("Virat Kohli").unwrap().runs, 10.0);
        assert!(table.find("virat kohli").is_none());
        assert_eq!(table.player_names(), vec!["Virat Kohli"]);
    }

    #[test]
    fn extra_value_by_column_name() {
        let table = StatsTable::new(
            vec!["matches".into()],
            vec![stats("Shubman Gill", 1.0)],
            false,
            false,
        );
        let record = &table.records[0];
        assert_eq!(table.extra_value(record, "matches"), Some("Shubman Gill-extra"));
        assert_eq!(table.extra_value(record, "average"), None);
    }
}
