use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::services::dashboard::{Dashboard, Section};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub generated_at: DateTime<Utc>,
    pub source: String,
    #[serde(flatten)]
    pub dashboard: Dashboard,
}

impl DashboardResponse {
    pub fn new(source: String, dashboard: Dashboard) -> Self {
        Self {
            generated_at: Utc::now(),
            source,
            dashboard,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionResponse<T: Serialize> {
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub section: Section<T>,
}

impl<T: Serialize> SectionResponse<T> {
    pub fn new(section: Section<T>) -> Self {
        Self {
            generated_at: Utc::now(),
            section,
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
