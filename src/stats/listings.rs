use crate::domain::{Fixture, Match};

/// All upcoming fixtures, unchanged
pub fn upcoming_fixtures(fixtures: &[Fixture]) -> Vec<Fixture> {
    fixtures.to_vec()
}

/// The last `count` results in feed order
pub fn recent_results(matches: &[Match], count: usize) -> Vec<Match> {
    let start = matches.len().saturating_sub(count);
    matches[start..].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_results_is_suffix_in_order() {
        let matches: Vec<Match> = (1..=7).map(|i| Match::new(&format!("T{i}"), "X", i, 0)).collect();

        let recent = recent_results(&matches, 5);
        let goals: Vec<u32> = recent.iter().map(|m| m.goals_a).collect();

        assert_eq!(goals, vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_recent_results_short_input() {
        let matches = vec![Match::new("A", "B", 1, 0)];
        assert_eq!(recent_results(&matches, 5), matches);
        assert!(recent_results(&[], 5).is_empty());
    }

    #[test]
    fn test_upcoming_fixtures_pass_through() {
        let fixtures = vec![Fixture {
            team_a: "A".to_string(),
            team_b: "B".to_string(),
            date: "2024-06-14".to_string(),
        }];

        assert_eq!(upcoming_fixtures(&fixtures), fixtures);
        assert!(upcoming_fixtures(&[]).is_empty());
    }
}
