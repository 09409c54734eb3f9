// One full pass of the pipeline for the current user selection.
//
// The UI calls `query` after every interaction and renders whatever comes
// back; nothing is cached between calls.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use crate::dataset::Dataset;
use crate::pipeline::aggregate::{role_breakdown, team_spend, RoleCount, TeamSpend};
use crate::pipeline::filter::{search_players, search_stats, SearchHit, TeamFilter};
use crate::pipeline::metrics::{metrics, BusinessReport, MetricsError};
use crate::pipeline::views::{
    compare_players, price_chart, price_extremes, price_share, team_roster, top_paid, ChartPoint,
    Comparison, PriceExtremes, RosterRow, TopPaidRow,
};
use crate::pipeline::SearchOutcome;

/// Everything the user can choose on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub team: String,
    pub roles: BTreeSet<String>,
    pub nationalities: BTreeSet<String>,
    /// Free-text player search. Blank means no search.
    pub search: String,
    pub top_n: usize,
    /// The two players in the stats comparison.
    pub compare: [Option<String>; 2],
}

impl Selection {
    pub fn team_filter(&self) -> TeamFilter {
        TeamFilter {
            team: self.team.clone(),
            roles: self.roles.clone(),
            nationalities: self.nationalities.clone(),
        }
    }
}

/// All derived tables for one selection. Owns its data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub team: String,
    /// The filters removed every player of the team. Team-dependent views
    /// below are then empty and `report` is `None`.
    pub team_empty: bool,
    pub roster: Vec<RosterRow>,
    pub report: Option<BusinessReport>,
    pub extremes: Option<PriceExtremes>,
    pub price_chart: Vec<ChartPoint>,
    pub price_share: Vec<ChartPoint>,
    /// `None` when the auction source has no role column.
    pub role_breakdown: Option<Vec<RoleCount>>,
    pub top_paid: Vec<TopPaidRow>,
    pub comparison: SearchOutcome<Comparison>,
    pub team_spend: Vec<TeamSpend>,
    pub search_hits: SearchOutcome<Vec<SearchHit>>,
    /// Stats rows matching the search, one column per player.
    pub stats_matches: SearchOutcome<Comparison>,
}

/// Run every pipeline stage for `selection`.
pub fn query(dataset: &Dataset, selection: &Selection) -> DashboardView {
    let auction = &dataset.auction;
    let stats = &dataset.stats;

    let search_hits = search_players(auction, &selection.search);
    let stats_matches = search_stats(stats, &selection.search);

    let subset = auction.select(&selection.team_filter());
    debug!(
        "selection for {} kept {} of {} rows",
        selection.team,
        subset.len(),
        auction.len()
    );

    let report = match metrics(&subset, stats) {
        Ok(m) => Some(m.report),
        Err(MetricsError::EmptySubset) => None,
    };

    let [first, second] = &selection.compare;

    DashboardView {
        team: selection.team.clone(),
        team_empty: subset.is_empty(),
        roster: team_roster(&subset),
        report,
        extremes: price_extremes(&subset),
        price_chart: price_chart(&subset),
        price_share: price_share(&subset),
        role_breakdown: auction.schema.has_role.then(|| role_breakdown(&subset)),
        top_paid: top_paid(auction, selection.top_n),
        comparison: compare_players(stats, first.as_deref(), second.as_deref()),
        team_spend: team_spend(auction),
        search_hits,
        stats_matches,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
