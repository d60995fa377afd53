use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::models::DashboardResponse;
use crate::config::settings::AppConfig;
use crate::feed::FeedSource;
use crate::services::dashboard::DashboardService;

/// Writes a computed dashboard to a JSON file
pub struct ExportService {
    source: FeedSource,
    output: PathBuf,
    service: DashboardService,
}

impl ExportService {
    pub fn new(source: FeedSource, output: PathBuf, config: AppConfig) -> Result<Self> {
        Ok(Self {
            source,
            output,
            service: DashboardService::new(config)?,
        })
    }

    pub async fn run(&self) -> Result<()> {
        info!("=== Exporting dashboard ===");

        let dashboard = self.service.run(&self.source).await?;
        let response = DashboardResponse::new(self.source.to_string(), dashboard);
        write_json(&self.output, &response)?;

        info!("  → Saved dashboard to {}", self.output.display());
        Ok(())
    }
}

fn write_json<T: serde::Serialize>(path: &Path, data: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context("Failed to create export directory")?;
    }
    let json = serde_json::to_string_pretty(data).context("Failed to serialize dashboard")?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_export_writes_dashboard() {
        let dir = std::env::temp_dir().join("tournament_dashboard_test_export");
        fs::create_dir_all(&dir).unwrap();
        let feed = dir.join("data.json");
        fs::write(
            &feed,
            r#"{"pastMatches": [{"teamA": "A", "teamB": "B", "goalsA": 0, "goalsB": 3}],
                "teams": [{"name": "A", "group": "1"}, {"name": "B", "group": "1"}],
                "groups": ["1"]}"#,
        )
        .unwrap();
        let output = dir.join("out").join("dashboard.json");

        let export = ExportService::new(FeedSource::File(feed), output.clone(), AppConfig::new()).unwrap();
        export.run().await.unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written["standings"]["rows"][0]["standings"][0]["name"], "B");
        assert_eq!(written["fewestConceded"]["rows"][0]["team"], "B");
        assert_eq!(written["upcoming"]["status"], "empty");

        // Cleanup
        fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_export_stops_on_load_failure() {
        let dir = std::env::temp_dir().join("tournament_dashboard_test_export_missing");
        let output = dir.join("dashboard.json");
        let source = FeedSource::File(dir.join("absent.json"));

        let export = ExportService::new(source, output.clone(), AppConfig::new()).unwrap();

        assert!(export.run().await.is_err());
        assert!(!output.exists());
    }
}
