// Team / role / nationality selection and free-text player search.

use std::collections::BTreeSet;

use serde::Serialize;

use super::price_desc;
use super::views::{side_by_side, Comparison};
use crate::dataset::{AuctionRecord, AuctionSchema, AuctionTable, StatsRecord, StatsTable};

// ---------------------------------------------------------------------------
// SearchOutcome
// ---------------------------------------------------------------------------

/// Result of a lookup that can legitimately come back empty.
///
/// `NotFound` is an expected answer, not an error: the dashboard shows an
/// informational message and skips whatever depended on the result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SearchOutcome<T> {
    /// No query was given.
    NotSearched,
    /// A query was given and nothing matched.
    NotFound,
    Found(T),
}

impl<T> SearchOutcome<T> {
    pub fn found(&self) -> Option<&T> {
        match self {
            SearchOutcome::Found(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, SearchOutcome::NotFound)
    }

    pub fn is_searched(&self) -> bool {
        !matches!(self, SearchOutcome::NotSearched)
    }
}

// ---------------------------------------------------------------------------
// Team filter
// ---------------------------------------------------------------------------

/// Rows of one team, optionally narrowed by role and nationality.
///
/// Dimensions combine with AND; the values inside a dimension combine with
/// OR. An empty set means "don't filter on this dimension".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamFilter {
    pub team: String,
    pub roles: BTreeSet<String>,
    pub nationalities: BTreeSet<String>,
}

impl TeamFilter {
    pub fn team(team: impl Into<String>) -> Self {
        TeamFilter {
            team: team.into(),
            ..TeamFilter::default()
        }
    }

    fn accepts(&self, schema: &AuctionSchema, record: &AuctionRecord) -> bool {
        if record.team != self.team {
            return false;
        }
        if schema.has_role && !member(&self.roles, record.role.as_deref()) {
            return false;
        }
        if schema.has_nationality
            && !member(&self.nationalities, record.nationality.as_deref())
        {
            return false;
        }
        true
    }
}

fn member(selected: &BTreeSet<String>, value: Option<&str>) -> bool {
    if selected.is_empty() {
        return true;
    }
    value.is_some_and(|v| selected.contains(v))
}

/// Keep the rows accepted by `filter`, in input order.
///
/// Predicates on a column the source doesn't have are skipped. Running the
/// result through `select` again with the same filter returns it unchanged.
pub fn select<'a, I>(
    rows: I,
    schema: &AuctionSchema,
    filter: &TeamFilter,
) -> Vec<&'a AuctionRecord>
where
    I: IntoIterator<Item = &'a AuctionRecord>,
{
    rows.into_iter()
        .filter(|r| filter.accepts(schema, r))
        .collect()
}

impl AuctionTable {
    /// Convenience wrapper around [`select`] for the whole table.
    pub fn select(&self, filter: &TeamFilter) -> Vec<&AuctionRecord> {
        select(&self.records, &self.schema, filter)
    }
}

// ---------------------------------------------------------------------------
// Player search
// ---------------------------------------------------------------------------

/// An auction row matching a name search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub player: String,
    pub team: String,
    pub price: Option<f64>,
}

fn needle(query: &str) -> Option<String> {
    let trimmed = query.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

/// Case-insensitive substring search over auction player names.
///
/// Hits come back most expensive first, unpriced players last.
pub fn search_players(table: &AuctionTable, query: &str) -> SearchOutcome<Vec<SearchHit>> {
    let Some(needle) = needle(query) else {
        return SearchOutcome::NotSearched;
    };

    let mut hits: Vec<SearchHit> = table
        .records
        .iter()
        .filter(|r| r.player.to_lowercase().contains(&needle))
        .map(|r| SearchHit {
            player: r.player.clone(),
            team: r.team.clone(),
            price: r.price,
        })
        .collect();

    if hits.is_empty() {
        return SearchOutcome::NotFound;
    }
    hits.sort_by(|a, b| price_desc(a.price, b.price));
    SearchOutcome::Found(hits)
}

// ---------------------------------------------------------------------------
// Stats search
// ---------------------------------------------------------------------------

/// Every stats row whose name contains the query, side by side in table
/// order. Stats blank for all matches are left out.
pub fn search_stats(table: &StatsTable, query: &str) -> SearchOutcome<Comparison> {
    let Some(needle) = needle(query) else {
        return SearchOutcome::NotSearched;
    };
    let matches: Vec<&StatsRecord> = table
        .records
        .iter()
        .filter(|r| r.player_name.to_lowercase().contains(&needle))
        .collect();
    if matches.is_empty() {
        return SearchOutcome::NotFound;
    }
    SearchOutcome::Found(side_by_side(table, &matches))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        player: &str,
        team: &str,
        price: Option<f64>,
        role: &str,
        nat: &str,
    ) -> AuctionRecord {
        AuctionRecord {
            player: player.to_string(),
            team: team.to_string(),
            price,
            role: Some(role.to_string()),
            nationality: Some(nat.to_string()),
        }
    }

    fn full_schema() -> AuctionSchema {
        AuctionSchema {
            has_team: true,
            has_price: true,
            has_role: true,
            has_nationality: true,
        }
    }

    fn table() -> AuctionTable {
        AuctionTable::new(
            full_schema(),
            vec![
                record("Virat Kohli", "RCB", Some(1500.0), "Batsman", "Indian"),
                record("Faf du Plessis", "RCB", Some(700.0), "Batsman", "Overseas"),
                record("Wanindu Hasaranga", "RCB", Some(1075.0), "All-Rounder", "Overseas"),
                record("Mohammed Siraj", "RCB", Some(700.0), "Bowler", "Indian"),
                record("Ben Stokes", "CSK", Some(1625.0), "All-Rounder", "Overseas"),
                record("Joe Root", "Unsold", None, "Batsman", "Overseas"),
            ],
        )
    }

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn names(rows: &[&AuctionRecord]) -> Vec<String> {
        rows.iter().map(|r| r.player.clone()).collect()
    }

    #[test]
    fn team_only() {
        let t = table();
        let rows = t.select(&TeamFilter::team("RCB"));
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.team == "RCB"));
    }

    #[test]
    fn roles_or_within_dimension() {
        let t = table();
        let filter = TeamFilter {
            team: "RCB".into(),
            roles: set(&["Bowler", "All-Rounder"]),
            nationalities: BTreeSet::new(),
        };
        assert_eq!(
            names(&t.select(&filter)),
            vec!["Wanindu Hasaranga", "Mohammed Siraj"]
        );
    }

    #[test]
    fn role_and_nationality_combine_with_and() {
        let t = table();
        let filter = TeamFilter {
            team: "RCB".into(),
            roles: set(&["Batsman"]),
            nationalities: set(&["Overseas"]),
        };
        assert_eq!(names(&t.select(&filter)), vec!["Faf du Plessis"]);
    }

    #[test]
    fn select_is_idempotent() {
        let t = table();
        let filter = TeamFilter {
            team: "RCB".into(),
            roles: set(&["Batsman", "Bowler"]),
            nationalities: set(&["Indian"]),
        };
        let once = t.select(&filter);
        let twice = select(once.iter().copied(), &t.schema, &filter);
        assert_eq!(once, twice);
    }

    #[test]
    fn missing_role_column_skips_predicate() {
        let mut t = table();
        t.schema.has_role = false;
        for r in &mut t.records {
            r.role = None;
        }
        let filter = TeamFilter {
            team: "RCB".into(),
            roles: set(&["Bowler"]),
            nationalities: BTreeSet::new(),
        };
        assert_eq!(t.select(&filter).len(), 4);
    }

    #[test]
    fn rows_without_role_dropped_when_roles_selected() {
        let mut t = table();
        t.records[0].role = None;
        let filter = TeamFilter {
            team: "RCB".into(),
            roles: set(&["Batsman"]),
            nationalities: BTreeSet::new(),
        };
        assert_eq!(names(&t.select(&filter)), vec!["Faf du Plessis"]);
    }

    #[test]
    fn filter_can_empty_a_team() {
        let t = table();
        let filter = TeamFilter {
            team: "CSK".into(),
            roles: set(&["Bowler"]),
            nationalities: BTreeSet::new(),
        };
        assert!(t.select(&filter).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let t = table();
        let outcome = search_players(&t, "koh");
        let hits = outcome.found().expect("should match");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].player, "Virat Kohli");

        let outcome = search_players(&t, "  ROOT ");
        assert_eq!(outcome.found().unwrap()[0].player, "Joe Root");
    }

    #[test]
    fn search_hits_sorted_by_price_desc() {
        let t = table();
        let outcome = search_players(&t, "o");
        let prices: Vec<_> = outcome.found().unwrap().iter().map(|h| h.price).collect();
        // Kohli, Siraj, Stokes and Root contain an "o".
        assert_eq!(prices, vec![Some(1625.0), Some(1500.0), Some(700.0), None]);
    }

    #[test]
    fn search_without_match_is_not_found() {
        let t = table();
        let outcome = search_players(&t, "dhoni");
        assert!(outcome.is_not_found());
        assert!(outcome.is_searched());
    }

    #[test]
    fn empty_search_is_not_searched() {
        let t = table();
        assert_eq!(search_players(&t, ""), SearchOutcome::NotSearched);
        assert_eq!(search_players(&t, "   "), SearchOutcome::NotSearched);
    }

    fn stats_row(name: &str, runs: f64, wickets: f64, extra: Vec<Option<&str>>) -> StatsRecord {
        StatsRecord {
            player_name: name.into(),
            runs,
            wickets,
            extra: extra.into_iter().map(|v| v.map(String::from)).collect(),
        }
    }

    #[test]
    fn stats_search_lists_every_match() {
        let stats = StatsTable::new(
            vec!["matches".into(), "best bowling".into()],
            vec![
                stats_row("Rohit Sharma", 332.0, 0.0, vec![Some("16"), None]),
                stats_row("Virat Kohli", 639.0, 0.0, vec![Some("14"), None]),
                stats_row("Ishant Sharma", 10.0, 10.0, vec![Some("8"), None]),
            ],
            false,
            false,
        );
        let outcome = search_stats(&stats, "SHARMA");
        let found = outcome.found().unwrap();
        assert_eq!(found.players, vec!["Rohit Sharma", "Ishant Sharma"]);
        let rows: Vec<&str> = found.rows.iter().map(|r| r.stat.as_str()).collect();
        assert_eq!(rows, vec!["runs", "wickets", "matches"]);
        assert_eq!(found.rows[0].values, vec![Some("332".into()), Some("10".into())]);

        let single = search_stats(&stats, "kohli");
        assert_eq!(single.found().unwrap().players, vec!["Virat Kohli"]);

        assert!(search_stats(&stats, "dhoni").is_not_found());
        assert_eq!(search_stats(&stats, "  "), SearchOutcome::NotSearched);
        assert!(search_stats(&StatsTable::default(), "kohli").is_not_found());
    }
}
