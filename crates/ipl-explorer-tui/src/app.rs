// Session state: the loaded config and dataset, plus the option lists the
// dashboard offers. The terminal front end drives it one query at a time.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use ipl_explorer_core::config::Config;
use ipl_explorer_core::dashboard::{self, DashboardView, Selection};
use ipl_explorer_core::dataset::Dataset;
use ipl_explorer_core::export::{self, ExportError};

// ---------------------------------------------------------------------------
// Filter options
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDimension {
    Role,
    Nationality,
}

impl FilterDimension {
    pub fn label(self) -> &'static str {
        match self {
            FilterDimension::Role => "Role",
            FilterDimension::Nationality => "Nationality",
        }
    }
}

/// One toggleable entry in the filter picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub dimension: FilterDimension,
    pub value: String,
}

impl FilterOption {
    pub fn is_selected(&self, selection: &Selection) -> bool {
        match self.dimension {
            FilterDimension::Role => selection.roles.contains(&self.value),
            FilterDimension::Nationality => selection.nationalities.contains(&self.value),
        }
    }

    /// Add the value to the selection, or remove it if already there.
    pub fn toggle(&self, selection: &mut Selection) {
        let set = match self.dimension {
            FilterDimension::Role => &mut selection.roles,
            FilterDimension::Nationality => &mut selection.nationalities,
        };
        if !set.remove(&self.value) {
            set.insert(self.value.clone());
        }
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Everything loaded at startup. Read-only for the rest of the run.
pub struct Session {
    pub config: Config,
    pub dataset: Dataset,
}

impl Session {
    pub fn new(config: Config, dataset: Dataset) -> Self {
        Session { config, dataset }
    }

    /// Team picker entries, sorted, `"Unsold"` included.
    pub fn teams(&self) -> Vec<String> {
        self.dataset.auction.teams()
    }

    /// Role values followed by nationality values. Empty when the auction
    /// source lacks either column.
    pub fn filter_options(&self) -> Vec<FilterOption> {
        let auction = &self.dataset.auction;
        if !auction.schema.supports_player_filters() {
            return Vec::new();
        }
        let roles = auction.role_options().into_iter().map(|value| FilterOption {
            dimension: FilterDimension::Role,
            value,
        });
        let nationalities = auction
            .nationality_options()
            .into_iter()
            .map(|value| FilterOption {
                dimension: FilterDimension::Nationality,
                value,
            });
        roles.chain(nationalities).collect()
    }

    /// Players offered in the comparison pickers.
    pub fn compare_candidates(&self) -> Vec<String> {
        self.dataset.stats.player_names()
    }

    /// Startup selection: first team, configured top-N, and the first stats
    /// player in both comparison slots.
    pub fn initial_selection(&self) -> Selection {
        let first_player = self.compare_candidates().into_iter().next();
        Selection {
            team: self.teams().into_iter().next().unwrap_or_default(),
            top_n: self.config.dashboard.top_n_default,
            compare: [first_player.clone(), first_player],
            ..Selection::default()
        }
    }

    pub fn query(&self, selection: &Selection) -> DashboardView {
        debug!("querying dashboard for {:?}", selection);
        dashboard::query(&self.dataset, selection)
    }

    pub fn export_dir(&self) -> &Path {
        Path::new(&self.config.export.dir)
    }

    /// Write the roster shown in `view` to the export directory.
    pub fn export(&self, view: &DashboardView) -> Result<PathBuf, ExportError> {
        let path = export::export_roster(self.export_dir(), &view.team, &view.roster)?;
        info!("roster export written to {}", path.display());
        Ok(path)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use ipl_explorer_core::config::{DashboardConfig, DataPaths, ExportConfig};
    use ipl_explorer_core::dataset::loader::{load_auction_from_reader, load_stats_from_reader};

    const AUCTION: &str = "\
name,Role,Nationality,final price (in lacs),franchise
Andre Russell,All-Rounder,Overseas,1200,Kolkata Knight Riders
Shreyas Iyer,Batsman,Indian,1225,Kolkata Knight Riders
Kagiso Rabada,Bowler,Overseas,925,Punjab Kings
Steve Smith,Batsman,Overseas,,
";

    const STATS: &str = "\
player name,runs,wickets
Shreyas Iyer,401,0
Andre Russell,227,7
";

    fn config(export_dir: &str) -> Config {
        Config {
            data_paths: DataPaths {
                auction: "a.csv".into(),
                stats: "s.csv".into(),
            },
            export: ExportConfig {
                dir: export_dir.into(),
            },
            dashboard: DashboardConfig {
                top_n_default: 5,
                top_n_max: 20,
            },
        }
    }

    fn session(auction: &str, export_dir: &str) -> Session {
        Session::new(
            config(export_dir),
            Dataset::new(
                load_auction_from_reader(auction.as_bytes()).unwrap(),
                load_stats_from_reader(STATS.as_bytes()).unwrap(),
            ),
        )
    }

    #[test]
    fn initial_selection_uses_first_team_and_player() {
        let s = session(AUCTION, "exports");
        let sel = s.initial_selection();
        assert_eq!(sel.team, "Kolkata Knight Riders");
        assert_eq!(sel.top_n, 5);
        assert_eq!(
            sel.compare,
            [Some("Andre Russell".into()), Some("Andre Russell".into())]
        );
        assert!(sel.search.is_empty());
    }

    #[test]
    fn filter_options_list_roles_then_nationalities() {
        let s = session(AUCTION, "exports");
        let values: Vec<_> = s
            .filter_options()
            .into_iter()
            .map(|o| (o.dimension, o.value))
            .collect();
        assert_eq!(
            values,
            vec![
                (FilterDimension::Role, "All-Rounder".to_string()),
                (FilterDimension::Role, "Batsman".to_string()),
                (FilterDimension::Role, "Bowler".to_string()),
                (FilterDimension::Nationality, "Indian".to_string()),
                (FilterDimension::Nationality, "Overseas".to_string()),
            ]
        );
    }

    #[test]
    fn no_filter_options_without_nationality() {
        let auction = "name,Role,final price (in lacs),franchise\nA,Bowler,20,X\n";
        let s = session(auction, "exports");
        assert!(s.filter_options().is_empty());
    }

    #[test]
    fn toggle_adds_and_removes() {
        let option = FilterOption {
            dimension: FilterDimension::Nationality,
            value: "Overseas".into(),
        };
        let mut sel = Selection::default();
        option.toggle(&mut sel);
        assert!(option.is_selected(&sel));
        option.toggle(&mut sel);
        assert!(!option.is_selected(&sel));
        assert!(sel.nationalities.is_empty());
    }

    #[test]
    fn export_writes_selected_roster() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("out");
        let s = session(AUCTION, dir.to_str().unwrap());
        let view = s.query(&s.initial_selection());
        let path = s.export(&view).unwrap();
        assert_eq!(path, dir.join("Kolkata Knight Riders_players.csv"));
        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.starts_with("Player Name,Price (in Lacs)\nShreyas Iyer,1225\n"));
    }
}
