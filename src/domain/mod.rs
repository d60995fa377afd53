pub mod models;

pub use models::{
    CardEntry, CardType, Fixture, Match, MatchOutcome, ScorerEntry, Team, TournamentData,
};
