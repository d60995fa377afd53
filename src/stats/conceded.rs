use log::{debug, warn};

use super::ranking::{top_n, Tally};
use super::types::ConcededTotal;
use crate::config::RankingSettings;
use crate::domain::{Match, Team};

/// Ranks teams by goals conceded, fewest first.
///
/// Every known team starts at zero, so teams without a match still rank.
/// Matches naming a team outside `teams` only count for the known side.
pub fn rank_fewest_conceded(
    matches: &[Match],
    teams: &[Team],
    config: &RankingSettings,
) -> Vec<ConcededTotal> {
    debug!("Counting goals conceded for {} teams", teams.len());

    let mut conceded: Tally<ConcededTotal> = Tally::new();
    for team in teams {
        conceded.entry_or_insert_with(&team.name, || ConcededTotal {
            team: team.name.clone(),
            goals: 0,
        });
    }

    for result in matches {
        add_conceded(&mut conceded, &result.team_a, result.goals_b);
        add_conceded(&mut conceded, &result.team_b, result.goals_a);
    }

    top_n(conceded.into_vec(), config.leaderboard_size, |a, b| a.goals.cmp(&b.goals))
}

fn add_conceded(conceded: &mut Tally<ConcededTotal>, team: &str, goals: u32) {
    match conceded.get_mut(team) {
        Some(total) => total.goals += u64::from(goals),
        None => warn!("Skipping goals conceded by unknown team '{}'", team),
    }
}
