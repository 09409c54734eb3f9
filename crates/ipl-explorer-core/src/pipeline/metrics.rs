// Auction/stats join and the team business report (spend, average price,
// best return on investment).

use serde::Serialize;

use crate::dataset::{AuctionRecord, StatsRecord, StatsTable};

/// Runs-equivalent of one wicket in the ROI score.
pub const WICKET_WEIGHT: f64 = 20.0;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetricsError {
    /// Aggregates over zero rows are undefined; callers check first.
    #[error("cannot compute team metrics over an empty selection")]
    EmptySubset,
}

// ---------------------------------------------------------------------------
// Join
// ---------------------------------------------------------------------------

/// An auction row with its stats, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRecord<'a> {
    pub auction: &'a AuctionRecord,
    pub stats: Option<&'a StatsRecord>,
    /// Runs from the matched stats row, 0 when unmatched.
    pub runs: f64,
    /// Wickets from the matched stats row, 0 when unmatched.
    pub wickets: f64,
    /// `None` when the player has no price.
    pub roi: Option<f64>,
}

/// Price used as the ROI denominator. A price of 0 counts as 1.
pub fn effective_price(price: f64) -> f64 {
    if price == 0.0 {
        1.0
    } else {
        price
    }
}

/// `(runs + 20 * wickets) / effective_price`.
pub fn roi(runs: f64, wickets: f64, price: Option<f64>) -> Option<f64> {
    price.map(|p| (runs + WICKET_WEIGHT * wickets) / effective_price(p))
}

/// Left join on `player == player_name`. One output row per input row.
pub fn join<'a>(subset: &[&'a AuctionRecord], stats: &'a StatsTable) -> Vec<MergedRecord<'a>> {
    subset
        .iter()
        .map(|&auction| {
            let matched = stats.find(&auction.player);
            let runs = matched.map_or(0.0, |s| s.runs);
            let wickets = matched.map_or(0.0, |s| s.wickets);
            MergedRecord {
                auction,
                stats: matched,
                runs,
                wickets,
                roi: roi(runs, wickets, auction.price),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Business report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopPerformer {
    pub player: String,
    pub team: String,
    pub price: Option<f64>,
    pub runs: f64,
    pub wickets: f64,
    pub roi: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessReport {
    pub players: usize,
    /// Sum of known prices, in lacs.
    pub total_spent: f64,
    /// Mean of known prices, in lacs. `None` if no player has a price.
    pub avg_price: Option<f64>,
    pub top_performer: TopPerformer,
    /// Players found in the stats table.
    pub matched_stats: usize,
}

/// Joined rows plus the report computed from them.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamMetrics<'a> {
    pub merged: Vec<MergedRecord<'a>>,
    pub report: BusinessReport,
}

/// Join `subset` against `stats` and summarize it.
pub fn metrics<'a>(
    subset: &[&'a AuctionRecord],
    stats: &'a StatsTable,
) -> Result<TeamMetrics<'a>, MetricsError> {
    let merged = join(subset, stats);
    let report = business_report(&merged)?;
    Ok(TeamMetrics { merged, report })
}

/// Aggregate joined rows. Spend figures use the real prices; the 0-as-1
/// rule only applies inside the ROI.
pub fn business_report(merged: &[MergedRecord<'_>]) -> Result<BusinessReport, MetricsError> {
    let top = top_performer(merged).ok_or(MetricsError::EmptySubset)?;

    let prices: Vec<f64> = merged.iter().filter_map(|m| m.auction.price).collect();
    let total_spent: f64 = prices.iter().sum();
    let avg_price = (!prices.is_empty()).then(|| total_spent / prices.len() as f64);

    Ok(BusinessReport {
        players: merged.len(),
        total_spent,
        avg_price,
        top_performer: TopPerformer {
            player: top.auction.player.clone(),
            team: top.auction.team.clone(),
            price: top.auction.price,
            runs: top.runs,
            wickets: top.wickets,
            roi: top.roi,
        },
        matched_stats: merged.iter().filter(|m| m.stats.is_some()).count(),
    })
}

/// Highest ROI; the earliest row wins a tie. Rows without an ROI rank last,
/// so an all-unpriced selection yields its first row.
pub fn top_performer<'m, 'a>(merged: &'m [MergedRecord<'a>]) -> Option<&'m MergedRecord<'a>> {
    let mut best = merged.first()?;
    for candidate in &merged[1..] {
        let better = match (candidate.roi, best.roi) {
            (Some(c), Some(b)) => c > b,
            (Some(_), None) => true,
            _ => false,
        };
        if better {
            best = candidate;
        }
    }
    Some(best)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
