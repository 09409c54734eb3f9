// Auction and stats CSV loading.
//
// Rows are never rejected: short rows read as blanks, invalid UTF-8 is
// replaced, and cells that fail numeric coercion become absent. Only an
// unreadable file or a missing player column stops the load.

use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};
use tracing::{debug, info, warn};

use super::schema::{
    self, normalize_auction_header, normalize_stats_header, normalize_team, optional_text,
    parse_number, resolve,
};
use super::{AuctionRecord, AuctionSchema, AuctionTable, Dataset, StatsRecord, StatsTable};
use crate::config::{Config, DataPaths};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("{path} has no {column} column (expected one of: {expected})")]
    MissingColumn {
        path: String,
        column: &'static str,
        expected: String,
    },
}

/// Label used in errors for reader-based loads.
const READER_ORIGIN: &str = "<reader>";

// ---------------------------------------------------------------------------
// Column resolution
// ---------------------------------------------------------------------------

struct AuctionColumns {
    player: usize,
    team: Option<usize>,
    price: Option<usize>,
    role: Option<usize>,
    nationality: Option<usize>,
}

impl AuctionColumns {
    fn resolve(headers: &[String], origin: &str) -> Result<Self, LoadError> {
        let player = required(headers, schema::AUCTION_PLAYER, "player", origin)?;
        let columns = AuctionColumns {
            player,
            team: resolve(headers, schema::AUCTION_TEAM),
            price: resolve(headers, schema::AUCTION_PRICE),
            role: resolve(headers, schema::AUCTION_ROLE),
            nationality: resolve(headers, schema::AUCTION_NATIONALITY),
        };
        if columns.team.is_none() {
            warn!("{origin}: no team column, every player is marked unsold");
        }
        if columns.price.is_none() {
            warn!("{origin}: no price column, all prices are absent");
        }
        Ok(columns)
    }

    fn schema(&self) -> AuctionSchema {
        AuctionSchema {
            has_team: self.team.is_some(),
            has_price: self.price.is_some(),
            has_role: self.role.is_some(),
            has_nationality: self.nationality.is_some(),
        }
    }
}

struct StatsColumns {
    player_name: usize,
    runs: Option<usize>,
    wickets: Option<usize>,
    extra: Vec<usize>,
}

impl StatsColumns {
    fn resolve(headers: &[String], origin: &str) -> Result<Self, LoadError> {
        let player_name = required(headers, schema::STATS_PLAYER, "player name", origin)?;
        let runs = resolve(headers, schema::STATS_RUNS);
        let wickets = resolve(headers, schema::STATS_WICKETS);
        let extra = (0..headers.len())
            .filter(|i| Some(*i) != runs && Some(*i) != wickets && *i != player_name)
            .collect();
        if runs.is_none() {
            info!("{origin}: no runs column, filling runs with 0");
        }
        if wickets.is_none() {
            info!("{origin}: no wickets column, filling wickets with 0");
        }
        Ok(StatsColumns {
            player_name,
            runs,
            wickets,
            extra,
        })
    }
}

fn required(
    headers: &[String],
    candidates: &[&str],
    column: &'static str,
    origin: &str,
) -> Result<usize, LoadError> {
    resolve(headers, candidates).ok_or_else(|| LoadError::MissingColumn {
        path: origin.to_string(),
        column,
        expected: candidates.join(", "),
    })
}

// ---------------------------------------------------------------------------
// Cell access
// ---------------------------------------------------------------------------

/// Cell text at `idx`, or "" when the row is short.
fn cell(record: &ByteRecord, idx: usize) -> String {
    record
        .get(idx)
        .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
        .unwrap_or_default()
}

fn opt_cell(record: &ByteRecord, idx: Option<usize>) -> String {
    idx.map(|i| cell(record, i)).unwrap_or_default()
}

/// Numeric stat cell; absent or unparsable reads as 0.
fn stat_cell(record: &ByteRecord, idx: Option<usize>, player: &str, column: &str) -> f64 {
    let Some(i) = idx else {
        return 0.0;
    };
    let raw = cell(record, i);
    match parse_number(&raw) {
        Some(v) => v,
        None => {
            if !schema::is_missing(&raw) {
                debug!("non-numeric {column} '{}' for '{player}', using 0", raw.trim());
            }
            0.0
        }
    }
}

// ---------------------------------------------------------------------------
// Reader-based loaders
// ---------------------------------------------------------------------------

fn csv_reader<R: Read>(rdr: R) -> csv::Reader<R> {
    ReaderBuilder::new().flexible(true).from_reader(rdr)
}

fn read_auction<R: Read>(rdr: R, origin: &str) -> Result<AuctionTable, LoadError> {
    let csv_err = |source: csv::Error| LoadError::Csv {
        path: origin.to_string(),
        source,
    };
    let mut reader = csv_reader(rdr);
    let headers: Vec<String> = reader
        .byte_headers()
        .map_err(csv_err)?
        .iter()
        .map(|h| normalize_auction_header(&String::from_utf8_lossy(h)))
        .collect();
    let columns = AuctionColumns::resolve(&headers, origin)?;

    let mut records = Vec::new();
    let mut record = ByteRecord::new();
    while reader.read_byte_record(&mut record).map_err(csv_err)? {
        let player = cell(&record, columns.player).trim().to_string();
        let raw_price = opt_cell(&record, columns.price);
        let price = parse_number(&raw_price);
        if price.is_none() && !schema::is_missing(&raw_price) {
            debug!("unparsable price '{}' for '{}'", raw_price.trim(), player);
        }
        records.push(AuctionRecord {
            team: normalize_team(&opt_cell(&record, columns.team)),
            price,
            role: optional_text(&opt_cell(&record, columns.role)),
            nationality: optional_text(&opt_cell(&record, columns.nationality)),
            player,
        });
    }

    Ok(AuctionTable::new(columns.schema(), records))
}

fn read_stats<R: Read>(rdr: R, origin: &str) -> Result<StatsTable, LoadError> {
    let csv_err = |source: csv::Error| LoadError::Csv {
        path: origin.to_string(),
        source,
    };
    let mut reader = csv_reader(rdr);
    let headers: Vec<String> = reader
        .byte_headers()
        .map_err(csv_err)?
        .iter()
        .map(|h| normalize_stats_header(&String::from_utf8_lossy(h)))
        .collect();
    let columns = StatsColumns::resolve(&headers, origin)?;
    let extra_columns = columns.extra.iter().map(|&i| headers[i].clone()).collect();

    let mut records = Vec::new();
    let mut record = ByteRecord::new();
    while reader.read_byte_record(&mut record).map_err(csv_err)? {
        let player_name = cell(&record, columns.player_name).trim().to_string();
        records.push(StatsRecord {
            runs: stat_cell(&record, columns.runs, &player_name, "runs"),
            wickets: stat_cell(&record, columns.wickets, &player_name, "wickets"),
            extra: columns
                .extra
                .iter()
                .map(|&i| optional_text(&cell(&record, i)))
                .collect(),
            player_name,
        });
    }

    Ok(StatsTable::new(
        extra_columns,
        records,
        columns.runs.is_none(),
        columns.wickets.is_none(),
    ))
}

/// Load the auction table from any reader (used by tests and callers that
/// already hold the bytes).
pub fn load_auction_from_reader<R: Read>(rdr: R) -> Result<AuctionTable, LoadError> {
    read_auction(rdr, READER_ORIGIN)
}

/// Load the stats table from any reader.
pub fn load_stats_from_reader<R: Read>(rdr: R) -> Result<StatsTable, LoadError> {
    read_stats(rdr, READER_ORIGIN)
}

// ---------------------------------------------------------------------------
// Public path-based loaders
// ---------------------------------------------------------------------------

fn open(path: &Path) -> Result<std::fs::File, LoadError> {
    std::fs::File::open(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

/// Load the auction results CSV.
pub fn load_auction(path: &Path) -> Result<AuctionTable, LoadError> {
    read_auction(open(path)?, &path.display().to_string())
}

/// Load the player stats CSV.
pub fn load_stats(path: &Path) -> Result<StatsTable, LoadError> {
    read_stats(open(path)?, &path.display().to_string())
}

/// Load both tables using the paths from the config.
pub fn load_all(config: &Config) -> Result<Dataset, LoadError> {
    load_all_from_paths(&config.data_paths)
}

/// Load both tables from explicit paths.
pub fn load_all_from_paths(paths: &DataPaths) -> Result<Dataset, LoadError> {
    let auction = load_auction(Path::new(&paths.auction))?;
    let stats = load_stats(Path::new(&paths.stats))?;

    if auction.is_empty() {
        warn!("auction file {} has no rows", paths.auction);
    }
    if stats.is_empty() {
        warn!("stats file {} has no rows", paths.stats);
    }

    Ok(Dataset::new(auction, stats))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
