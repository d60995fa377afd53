use serde::{Deserialize, Serialize};

/// Whole tournament feed as published in the static data document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentData {
    #[serde(default)]
    pub upcoming_matches: Vec<Fixture>,
    #[serde(default)]
    pub past_matches: Vec<Match>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub groups: Vec<String>,
}

/// Team entry, keyed by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub group: String,
}

impl Team {
    pub fn new(name: &str, group: &str) -> Self {
        Self {
            name: name.to_string(),
            group: group.to_string(),
        }
    }
}

/// Scheduled match that has not been played yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    pub team_a: String,
    pub team_b: String,
    pub date: String,
}

/// Completed match result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub team_a: String,
    pub team_b: String,
    pub goals_a: u32,
    pub goals_b: u32,
    #[serde(default)]
    pub scorers: Vec<ScorerEntry>,
    #[serde(default)]
    pub cards: Vec<CardEntry>,
}

impl Match {
    pub fn new(team_a: &str, team_b: &str, goals_a: u32, goals_b: u32) -> Self {
        Self {
            team_a: team_a.to_string(),
            team_b: team_b.to_string(),
            goals_a,
            goals_b,
            scorers: Vec::new(),
            cards: Vec::new(),
        }
    }

    pub fn outcome(&self) -> MatchOutcome {
        match self.goals_a.cmp(&self.goals_b) {
            std::cmp::Ordering::Greater => MatchOutcome::HomeWin,
            std::cmp::Ordering::Less => MatchOutcome::AwayWin,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    HomeWin, // team A scored more
    AwayWin, // team B scored more
    Draw,
}

/// Goals by one player in one match. A player may appear in several entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorerEntry {
    pub player: String,
    pub team: String,
    pub goals: u32,
}

/// A single card issued to a player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardEntry {
    pub player: String,
    #[serde(rename = "type")]
    pub card_type: CardType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Yellow,
    Red,
    // Anything else in the feed; counted as neither colour
    #[serde(other)]
    Other,
}
