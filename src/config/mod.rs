pub mod settings;

pub use settings::{AppConfig, FeedSettings, RankingSettings};
