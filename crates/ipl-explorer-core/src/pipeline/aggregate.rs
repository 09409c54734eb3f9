// League-wide and per-team rollups.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::dataset::{AuctionRecord, AuctionTable, UNSOLD_TEAM};

pub const LACS_PER_CRORE: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamSpend {
    pub team: String,
    /// Total spend in crores.
    pub crores: f64,
}

/// Total spend per franchise in crores, biggest spender first.
///
/// Unsold players are left out. Equal totals are ordered by team name.
pub fn team_spend(table: &AuctionTable) -> Vec<TeamSpend> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for record in table.records.iter().filter(|r| r.team != UNSOLD_TEAM) {
        *totals.entry(record.team.as_str()).or_insert(0.0) += record.price.unwrap_or(0.0);
    }

    let mut spend: Vec<TeamSpend> = totals
        .into_iter()
        .map(|(team, lacs)| TeamSpend {
            team: team.to_string(),
            crores: lacs / LACS_PER_CRORE,
        })
        .collect();
    spend.sort_by(|a, b| {
        b.crores
            .partial_cmp(&a.crores)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    spend
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleCount {
    pub role: String,
    pub count: usize,
}

/// Player count per role in `subset`. Players without a role are skipped.
pub fn role_breakdown(subset: &[&AuctionRecord]) -> Vec<RoleCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for role in subset.iter().filter_map(|r| r.role.as_deref()) {
        *counts.entry(role).or_insert(0) += 1;
    }

    let mut breakdown: Vec<RoleCount> = counts
        .into_iter()
        .map(|(role, count)| RoleCount {
            role: role.to_string(),
            count,
        })
        .collect();
    breakdown.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.role.cmp(&b.role)));
    breakdown
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
