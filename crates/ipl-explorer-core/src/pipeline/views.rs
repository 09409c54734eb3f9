// Display tables and chart series derived from a selection.
//
// Everything here returns owned rows so the caller can keep them after the
// borrowed selection is gone.

use serde::Serialize;

use super::{format_stat, price_desc, SearchOutcome};
use crate::dataset::{AuctionRecord, AuctionTable, StatsRecord, StatsTable};

/// A `{category, value}` pair for bar charts and share tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub category: String,
    pub value: f64,
}

// ---------------------------------------------------------------------------
// Roster
// ---------------------------------------------------------------------------

/// One line of the team roster. `rank` is the 1-based display index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterRow {
    pub rank: usize,
    pub player: String,
    pub price: Option<f64>,
}

/// Players of the selection, most expensive first, unpriced last.
pub fn team_roster(subset: &[&AuctionRecord]) -> Vec<RosterRow> {
    let mut sorted = subset.to_vec();
    sorted.sort_by(|a, b| price_desc(a.price, b.price));
    sorted
        .into_iter()
        .enumerate()
        .map(|(i, r)| RosterRow {
            rank: i + 1,
            player: r.player.clone(),
            price: r.price,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Cheapest / costliest
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricedPlayer {
    pub player: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceExtremes {
    pub cheapest: PricedPlayer,
    pub costliest: PricedPlayer,
}

/// Cheapest and most expensive priced players; the first one wins a tie.
/// `None` when nobody in the selection has a price.
pub fn price_extremes(subset: &[&AuctionRecord]) -> Option<PriceExtremes> {
    let mut priced = subset
        .iter()
        .filter_map(|r| r.price.map(|p| (r.player.as_str(), p)));
    let first = priced.next()?;
    let (mut low, mut high) = (first, first);
    for entry in priced {
        if entry.1 < low.1 {
            low = entry;
        }
        if entry.1 > high.1 {
            high = entry;
        }
    }
    Some(PriceExtremes {
        cheapest: PricedPlayer {
            player: low.0.to_string(),
            price: low.1,
        },
        costliest: PricedPlayer {
            player: high.0.to_string(),
            price: high.1,
        },
    })
}

// ---------------------------------------------------------------------------
// Top N
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopPaidRow {
    pub rank: usize,
    pub player: String,
    pub team: String,
    pub price: f64,
}

/// The `n` most expensive priced players across the whole auction.
pub fn top_paid(table: &AuctionTable, n: usize) -> Vec<TopPaidRow> {
    let mut priced: Vec<(&AuctionRecord, f64)> = table
        .records
        .iter()
        .filter_map(|r| r.price.map(|p| (r, p)))
        .collect();
    priced.sort_by(|a, b| price_desc(Some(a.1), Some(b.1)));
    priced
        .into_iter()
        .take(n)
        .enumerate()
        .map(|(i, (r, price))| TopPaidRow {
            rank: i + 1,
            player: r.player.clone(),
            team: r.team.clone(),
            price,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Chart series
// ---------------------------------------------------------------------------

/// Bar chart series: priced players, most expensive first.
pub fn price_chart(subset: &[&AuctionRecord]) -> Vec<ChartPoint> {
    let mut points: Vec<ChartPoint> = subset
        .iter()
        .filter_map(|r| {
            r.price.map(|p| ChartPoint {
                category: r.player.clone(),
                value: p,
            })
        })
        .collect();
    points.sort_by(|a, b| price_desc(Some(a.value), Some(b.value)));
    points
}

/// Each priced player's percentage of the selection's total spend, in
/// selection order. Empty when the total is not positive.
pub fn price_share(subset: &[&AuctionRecord]) -> Vec<ChartPoint> {
    let total: f64 = subset.iter().filter_map(|r| r.price).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    subset
        .iter()
        .filter_map(|r| {
            r.price.map(|p| ChartPoint {
                category: r.player.clone(),
                value: p / total * 100.0,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Player comparison
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub stat: String,
    /// One value per entry in `Comparison::players`.
    pub values: Vec<Option<String>>,
}

/// Stats side by side: one row per stat, one column per player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub players: Vec<String>,
    pub rows: Vec<ComparisonRow>,
}

/// Put the stats rows named `first` and `second` side by side.
///
/// Every stats row with either name is included, in table order. Stats that
/// are blank for all of them are dropped.
pub fn compare_players(
    stats: &StatsTable,
    first: Option<&str>,
    second: Option<&str>,
) -> SearchOutcome<Comparison> {
    if first.is_none() && second.is_none() {
        return SearchOutcome::NotSearched;
    }
    let wanted = |name: &str| first == Some(name) || second == Some(name);
    let records: Vec<&StatsRecord> = stats
        .records
        .iter()
        .filter(|r| wanted(&r.player_name))
        .collect();
    if records.is_empty() {
        return SearchOutcome::NotFound;
    }

    SearchOutcome::Found(side_by_side(stats, &records))
}

/// Lay `records` out as columns, one row per stat.
///
/// Runs and wickets are always present; extra columns blank for every
/// record are dropped.
pub fn side_by_side(stats: &StatsTable, records: &[&StatsRecord]) -> Comparison {
    let mut rows = vec![
        ComparisonRow {
            stat: "runs".into(),
            values: records.iter().map(|r| Some(format_stat(r.runs))).collect(),
        },
        ComparisonRow {
            stat: "wickets".into(),
            values: records.iter().map(|r| Some(format_stat(r.wickets))).collect(),
        },
    ];
    for (i, column) in stats.extra_columns.iter().enumerate() {
        let values: Vec<Option<String>> = records
            .iter()
            .map(|r| r.extra.get(i).cloned().flatten())
            .collect();
        if values.iter().any(Option::is_some) {
            rows.push(ComparisonRow {
                stat: column.clone(),
                values,
            });
        }
    }

    Comparison {
        players: records.iter().map(|r| r.player_name.clone()).collect(),
        rows,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
