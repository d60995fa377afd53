use anyhow::Result;
use log::{info, warn};
use serde::Serialize;

use crate::config::settings::AppConfig;
use crate::domain::{Fixture, Match, TournamentData};
use crate::errors::LoadError;
use crate::feed::{FeedLoader, FeedSource};
use crate::stats::{self, ConcededTotal, DisciplineRecord, GroupTable, ScorerTotal};

pub const NO_UPCOMING: &str = "No upcoming matches yet. Stay tuned!";
pub const NO_RESULTS: &str = "No match results yet.";
pub const NO_STANDINGS: &str = "No groups defined yet.";
pub const NO_SCORERS: &str = "No scorers yet.";
pub const NO_CONCEDED: &str = "No goals-conceded data yet.";
pub const NO_CARDS: &str = "No players with cards yet.";

/// One dashboard section: rows ready for display, nothing to show, or a failed computation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Section<T> {
    Ready { rows: Vec<T> },
    Empty { message: String },
    Failed { reason: String },
}

impl<T> Section<T> {
    pub fn from_rows(rows: Vec<T>, empty_message: &str) -> Self {
        if rows.is_empty() {
            Section::Empty {
                message: empty_message.to_string(),
            }
        } else {
            Section::Ready { rows }
        }
    }

    #[cfg(test)]
    pub fn rows(&self) -> &[T] {
        match self {
            Section::Ready { rows } => rows,
            _ => &[],
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Section::Failed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub upcoming: Section<Fixture>,
    pub results: Section<Match>,
    pub standings: Section<GroupTable>,
    pub top_scorers: Section<ScorerTotal>,
    pub fewest_conceded: Section<ConcededTotal>,
    pub discipline: Section<DisciplineRecord>,
}

/// Loads the feed and runs every statistic over it, once per render
pub struct DashboardService {
    config: AppConfig,
    loader: FeedLoader,
}

impl DashboardService {
    pub fn new(config: AppConfig) -> Result<Self> {
        let loader = FeedLoader::new(&config.feed)?;
        Ok(Self { config, loader })
    }

    pub async fn run(&self, source: &FeedSource) -> Result<Dashboard, LoadError> {
        let data = self.loader.load(source).await?;
        Ok(self.build(&data))
    }

    /// Computes all sections; a failed section never affects the others
    pub fn build(&self, data: &TournamentData) -> Dashboard {
        info!("Building dashboard from {} results", data.past_matches.len());
        let ranking = &self.config.ranking;

        let standings = match stats::calculate_standings(&data.past_matches, &data.teams, &data.groups) {
            Ok(tables) => Section::from_rows(tables, NO_STANDINGS),
            Err(e) => {
                warn!("Standings unavailable: {}", e);
                Section::Failed {
                    reason: e.to_string(),
                }
            }
        };

        Dashboard {
            upcoming: Section::from_rows(stats::upcoming_fixtures(&data.upcoming_matches), NO_UPCOMING),
            results: Section::from_rows(
                stats::recent_results(&data.past_matches, ranking.recent_results),
                NO_RESULTS,
            ),
            standings,
            top_scorers: Section::from_rows(
                stats::rank_top_scorers(&data.past_matches, ranking),
                NO_SCORERS,
            ),
            fewest_conceded: Section::from_rows(
                stats::rank_fewest_conceded(&data.past_matches, &data.teams, ranking),
                NO_CONCEDED,
            ),
            discipline: Section::from_rows(
                stats::rank_discipline(&data.past_matches, ranking),
                NO_CARDS,
            ),
        }
    }
}
