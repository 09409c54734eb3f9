// Header normalization, synonym tables and cell coercion.
//
// Source files come from whoever exported them, so the same column shows up
// under several names. Each canonical column lists the headers it accepts in
// priority order; the first one present wins.

/// Team assigned to players nobody bought.
pub const UNSOLD_TEAM: &str = "Unsold";

// Auction headers are only trimmed, so matching is case-sensitive.
pub(crate) const AUCTION_PLAYER: &[&str] = &["name", "Player"];
pub(crate) const AUCTION_TEAM: &[&str] = &["franchise", "Team"];
pub(crate) const AUCTION_PRICE: &[&str] = &["final price (in lacs)", "Price"];
pub(crate) const AUCTION_ROLE: &[&str] = &["Role", "role"];
pub(crate) const AUCTION_NATIONALITY: &[&str] = &["Nationality", "nationality"];

// Stats headers are trimmed and lower-cased before matching.
pub(crate) const STATS_PLAYER: &[&str] = &["player name"];
pub(crate) const STATS_RUNS: &[&str] = &["runs", "total runs", "runs scored"];
pub(crate) const STATS_WICKETS: &[&str] = &["wickets", "total wickets", "wickets taken"];

/// Cell spellings that mean "no value". Mirrors what spreadsheet exports
/// write for blanks.
const MISSING_MARKERS: &[&str] = &["", "nan", "na", "n/a", "#n/a", "null", "none"];

/// Auction header: trimmed (and stripped of a byte-order mark).
pub fn normalize_auction_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').trim().to_string()
}

/// Stats header: trimmed and lower-cased.
pub fn normalize_stats_header(raw: &str) -> String {
    normalize_auction_header(raw).to_lowercase()
}

/// Index of the first candidate header present in `headers`.
pub(crate) fn resolve(headers: &[String], candidates: &[&str]) -> Option<usize> {
    candidates
        .iter()
        .find_map(|want| headers.iter().position(|h| h == want))
}

/// True when a cell is blank or one of the usual missing-value spellings.
///
/// Broader than blank-or-`nan`: the markers compare ASCII-case-insensitively,
/// so `None`, `NULL` and `N/A` in any casing all read as missing.
pub fn is_missing(raw: &str) -> bool {
    let trimmed = raw.trim();
    MISSING_MARKERS
        .iter()
        .any(|marker| trimmed.eq_ignore_ascii_case(marker))
}

/// Trimmed text, or `None` for a missing cell.
pub fn optional_text(raw: &str) -> Option<String> {
    if is_missing(raw) {
        None
    } else {
        Some(raw.trim().to_string())
    }
}

/// Team name: trimmed, with blanks and `nan` mapped to `"Unsold"`.
pub fn normalize_team(raw: &str) -> String {
    optional_text(raw).unwrap_or_else(|| UNSOLD_TEAM.to_string())
}

/// Lenient numeric coercion. Anything that is not a finite number is `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    if is_missing(raw) {
        return None;
    }
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
