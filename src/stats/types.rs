use serde::Serialize;

pub type TeamName = String;
pub type PlayerName = String;

/// A team's aggregated record within its group
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStanding {
    pub name: TeamName,
    pub group: String,
    pub points: u64,
    pub played: u64,
    pub wins: u64,
    pub draws: u64,
    pub losses: u64,
    pub goals_for: u64,
    pub goals_against: u64,
    pub goal_difference: i64,
}

impl TeamStanding {
    pub fn new(name: &str, group: &str) -> Self {
        Self {
            name: name.to_string(),
            group: group.to_string(),
            points: 0,
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
        }
    }
}

/// Ranked standings of one group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupTable {
    pub group: String,
    pub standings: Vec<TeamStanding>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScorerTotal {
    pub player: PlayerName,
    pub team: TeamName, // first team seen for this player
    pub goals: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConcededTotal {
    pub team: TeamName,
    pub goals: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisciplineRecord {
    pub player: PlayerName,
    pub yellow: u64,
    pub red: u64,
    pub suspended: bool,
}

impl DisciplineRecord {
    pub fn new(player: &str) -> Self {
        Self {
            player: player.to_string(),
            yellow: 0,
            red: 0,
            suspended: false,
        }
    }

    pub fn total_cards(&self) -> u64 {
        self.yellow + self.red
    }
}
