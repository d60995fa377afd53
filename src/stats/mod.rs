pub mod conceded;
pub mod discipline;
pub mod listings;
mod ranking;
pub mod scorers;
pub mod standings;
pub mod types;

pub use conceded::rank_fewest_conceded;
pub use discipline::rank_discipline;
pub use listings::{recent_results, upcoming_fixtures};
pub use scorers::rank_top_scorers;
pub use standings::calculate_standings;
pub use types::{ConcededTotal, DisciplineRecord, GroupTable, ScorerTotal, TeamStanding};
