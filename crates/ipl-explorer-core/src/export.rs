// CSV download of a team roster.

use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::pipeline::views::RosterRow;

pub const EXPORT_HEADER: [&str; 2] = ["Player Name", "Price (in Lacs)"];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to export: the selected roster is empty")]
    EmptyRoster,

    #[error("I/O error writing {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error writing {path}: {source}")]
    Csv { path: String, source: csv::Error },
}

/// Write `rows` as `Player Name,Price (in Lacs)`. Missing prices are empty
/// cells.
pub fn write_roster_csv<W: Write>(rows: &[RosterRow], writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(EXPORT_HEADER)?;
    for row in rows {
        let price = row.price.map(|p| p.to_string()).unwrap_or_default();
        wtr.write_record([row.player.as_str(), price.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// `"{team}_players.csv"`, with path separators replaced so the name stays
/// inside the export directory.
pub fn export_file_name(team: &str) -> String {
    let safe: String = team
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("{safe}_players.csv")
}

/// Write the roster of `team` into `dir`, creating the directory if needed.
/// Returns the path of the written file.
pub fn export_roster(dir: &Path, team: &str, rows: &[RosterRow]) -> Result<PathBuf, ExportError> {
    if rows.is_empty() {
        return Err(ExportError::EmptyRoster);
    }

    std::fs::create_dir_all(dir).map_err(|source| ExportError::Io {
        path: dir.display().to_string(),
        source,
    })?;
    let path = dir.join(export_file_name(team));
    let file = std::fs::File::create(&path).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    write_roster_csv(rows, file).map_err(|source| ExportError::Csv {
        path: path.display().to_string(),
        source,
    })?;

    info!("exported {} players of {} to {}", rows.len(), team, path.display());
    Ok(path)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
