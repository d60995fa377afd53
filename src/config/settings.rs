pub const SOURCE_ENV_VAR: &str = "DASHBOARD_SOURCE";

#[derive(Debug, Clone)]
pub struct RankingSettings {
    pub leaderboard_size: usize,
    pub recent_results: usize,
    pub suspension_threshold: u32,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            leaderboard_size: 5,
            recent_results: 5,
            suspension_threshold: 3, // yellow cards
        }
    }
}

#[derive(Debug, Clone)]
pub struct FeedSettings {
    pub default_source: String,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            default_source: "data.json".to_string(),
            user_agent: "TournamentDashboard/0.1",
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub ranking: RankingSettings,
    pub feed: FeedSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            ranking: RankingSettings::default(),
            feed: FeedSettings::default(),
        }
    }

    /// Feed source given on the command line, then `DASHBOARD_SOURCE`,
    /// then the configured default
    pub fn resolve_source(&self, explicit: Option<&str>) -> String {
        explicit
            .map(str::to_string)
            .or_else(|| std::env::var(SOURCE_ENV_VAR).ok())
            .unwrap_or_else(|| self.feed.default_source.clone())
    }
}
