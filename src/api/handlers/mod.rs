use crate::feed::FeedSource;
use crate::services::dashboard::DashboardService;

pub mod dashboard;

pub struct AppState {
    pub service: DashboardService,
    pub source: FeedSource,
}
