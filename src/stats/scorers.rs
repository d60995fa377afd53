use log::debug;

use super::ranking::{top_n, Tally};
use super::types::ScorerTotal;
use crate::config::RankingSettings;
use crate::domain::Match;

/// Sums goals per player over every scorer entry and returns the leading scorers.
/// A player's team is the one on their first entry.
pub fn rank_top_scorers(matches: &[Match], config: &RankingSettings) -> Vec<ScorerTotal> {
    let mut totals: Tally<ScorerTotal> = Tally::new();

    for entry in matches.iter().flat_map(|m| m.scorers.iter()) {
        let total = totals.entry_or_insert_with(&entry.player, || ScorerTotal {
            player: entry.player.clone(),
            team: entry.team.clone(),
            goals: 0,
        });
        total.goals += u64::from(entry.goals);
    }

    debug!("Found {} distinct scorers", totals.len());
    top_n(totals.into_vec(), config.leaderboard_size, |a, b| b.goals.cmp(&a.goals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ScorerEntry;

    fn scorer(player: &str, team: &str, goals: u32) -> ScorerEntry {
        ScorerEntry {
            player: player.to_string(),
            team: team.to_string(),
            goals,
        }
    }

    fn with_scorers(scorers: Vec<ScorerEntry>) -> Match {
        let mut m = Match::new("A", "B", 0, 0);
        m.scorers = scorers;
        m
    }

    #[test]
    fn test_goals_summed_across_matches() {
        let matches = vec![
            with_scorers(vec![scorer("X", "A", 1)]),
            with_scorers(vec![scorer("X", "A", 1)]),
        ];

        let ranked = rank_top_scorers(&matches, &RankingSettings::default());

        assert_eq!(
            ranked,
            vec![ScorerTotal {
                player: "X".to_string(),
                team: "A".to_string(),
                goals: 2,
            }]
        );
    }

    #[test]
    fn test_goal_total_beyond_u32() {
        let matches = vec![
            with_scorers(vec![scorer("X", "A", u32::MAX)]),
            with_scorers(vec![scorer("X", "A", 1)]),
        ];

        let ranked = rank_top_scorers(&matches, &RankingSettings::default());

        assert_eq!(ranked[0].goals, u64::from(u32::MAX) + 1);
    }

    #[test]
    fn test_first_seen_team_is_kept() {
        let matches = vec![
            with_scorers(vec![scorer("X", "A", 1), scorer("X", "B", 2)]),
            with_scorers(vec![scorer("X", "C", 1)]),
        ];

        let ranked = rank_top_scorers(&matches, &RankingSettings::default());

        assert_eq!(ranked[0].team, "A");
        assert_eq!(ranked[0].goals, 4);
    }

    #[test]
    fn test_top_five_with_stable_ties() {
        let matches = vec![with_scorers(vec![
            scorer("P1", "A", 1),
            scorer("P2", "A", 3),
            scorer("P3", "B", 2),
            scorer("P4", "B", 1),
            scorer("P5", "A", 3),
            scorer("P6", "B", 1),
            scorer("P7", "B", 0),
        ])];

        let ranked = rank_top_scorers(&matches, &RankingSettings::default());
        let names: Vec<&str> = ranked.iter().map(|s| s.player.as_str()).collect();

        assert_eq!(names, vec!["P2", "P5", "P3", "P1", "P4"]);
    }

    #[test]
    fn test_deterministic_on_rerun() {
        let matches = vec![
            with_scorers(vec![scorer("X", "A", 1), scorer("Y", "B", 1)]),
            with_scorers(vec![scorer("Z", "A", 1)]),
        ];
        let config = RankingSettings::default();

        assert_eq!(rank_top_scorers(&matches, &config), rank_top_scorers(&matches, &config));
    }

    #[test]
    fn test_no_scorers_is_empty() {
        let config = RankingSettings::default();
        assert!(rank_top_scorers(&[], &config).is_empty());
        assert!(rank_top_scorers(&[Match::new("A", "B", 0, 0)], &config).is_empty());
    }
}
