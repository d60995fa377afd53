use log::debug;

use super::ranking::Tally;
use super::types::{GroupTable, TeamStanding};
use crate::domain::{Match, MatchOutcome, Team};
use crate::errors::DataIntegrityError;

const POINTS_FOR_WIN: u64 = 3;
const POINTS_FOR_DRAW: u64 = 1;

#[derive(Clone, Copy)]
enum Side {
    A,
    B,
}

/// Folds match results into per-team records and returns one ranked table per group.
///
/// Tables follow the order of `groups`. Within a group teams are ordered by
/// points, then goal difference, both descending; remaining ties keep the
/// order in which teams appear in `teams`.
pub fn calculate_standings(
    matches: &[Match],
    teams: &[Team],
    groups: &[String],
) -> Result<Vec<GroupTable>, DataIntegrityError> {
    debug!(
        "Calculating standings for {} teams in {} groups from {} matches",
        teams.len(),
        groups.len(),
        matches.len()
    );

    let mut table = StandingsTable::from_teams(teams);
    for (match_index, result) in matches.iter().enumerate() {
        table.record(match_index, result)?;
    }

    Ok(table.into_group_tables(groups))
}

struct StandingsTable {
    standings: Tally<TeamStanding>,
}

impl StandingsTable {
    fn from_teams(teams: &[Team]) -> Self {
        let mut standings = Tally::new();
        for team in teams {
            // A repeated name keeps its first position; the last group listed wins
            let standing = standings.entry_or_insert_with(&team.name, || {
                TeamStanding::new(&team.name, &team.group)
            });
            standing.group = team.group.clone();
        }
        Self { standings }
    }

    fn record(&mut self, match_index: usize, result: &Match) -> Result<(), DataIntegrityError> {
        self.ensure_known(match_index, &result.team_a)?;
        self.ensure_known(match_index, &result.team_b)?;

        let outcome = result.outcome();
        if let Some(team_a) = self.standings.get_mut(&result.team_a) {
            apply_result(team_a, result.goals_a, result.goals_b, outcome, Side::A);
        }
        if let Some(team_b) = self.standings.get_mut(&result.team_b) {
            apply_result(team_b, result.goals_b, result.goals_a, outcome, Side::B);
        }
        Ok(())
    }

    fn ensure_known(&self, match_index: usize, team: &str) -> Result<(), DataIntegrityError> {
        if self.standings.contains(team) {
            Ok(())
        } else {
            Err(DataIntegrityError::UnknownTeam {
                team: team.to_string(),
                match_index,
            })
        }
    }

    fn into_group_tables(self, groups: &[String]) -> Vec<GroupTable> {
        let standings = self.standings.into_vec();
        groups
            .iter()
            .map(|group| GroupTable {
                group: group.clone(),
                standings: rank_group(&standings, group),
            })
            .collect()
    }
}

fn apply_result(
    standing: &mut TeamStanding,
    goals_for: u32,
    goals_against: u32,
    outcome: MatchOutcome,
    side: Side,
) {
    standing.played += 1;
    standing.goals_for += u64::from(goals_for);
    standing.goals_against += u64::from(goals_against);

    match (outcome, side) {
        (MatchOutcome::Draw, _) => {
            standing.draws += 1;
            standing.points += POINTS_FOR_DRAW;
        }
        (MatchOutcome::HomeWin, Side::A) | (MatchOutcome::AwayWin, Side::B) => {
            standing.wins += 1;
            standing.points += POINTS_FOR_WIN;
        }
        _ => standing.losses += 1,
    }

    standing.goal_difference = goal_difference(standing.goals_for, standing.goals_against);
}

// Each side is capped at i64::MAX, so the subtraction cannot overflow
fn goal_difference(goals_for: u64, goals_against: u64) -> i64 {
    let goals_for = i64::try_from(goals_for).unwrap_or(i64::MAX);
    let goals_against = i64::try_from(goals_against).unwrap_or(i64::MAX);
    goals_for - goals_against
}

fn rank_group(standings: &[TeamStanding], group: &str) -> Vec<TeamStanding> {
    let mut ranked: Vec<TeamStanding> = standings
        .iter()
        .filter(|s| s.group == group)
        .cloned()
        .collect();

    // Vec::sort_by is stable
    ranked.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| b.goal_difference.cmp(&a.goal_difference))
    });
    ranked
}
