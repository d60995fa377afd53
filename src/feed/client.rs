use anyhow::{Context, Result};
use log::info;
use reqwest::Client;
use std::path::Path;
use std::time::Duration;

use super::source::FeedSource;
use crate::config::FeedSettings;
use crate::domain::TournamentData;
use crate::errors::{fetch_context, parse_context, read_context, LoadError};

/// Loads the tournament feed from disk or over HTTP
pub struct FeedLoader {
    client: Client,
}

impl FeedLoader {
    pub fn new(settings: &FeedSettings) -> Result<Self> {
        let client = Self::build_client(settings.user_agent, settings.timeout_secs)?;
        Ok(Self { client })
    }

    pub async fn load(&self, source: &FeedSource) -> Result<TournamentData, LoadError> {
        let body = match source {
            FeedSource::File(path) => self.read_file(path).await?,
            FeedSource::Url(url) => self.fetch_url(url).await?,
        };
        let data = parse_feed(&body)?;

        info!(
            "Loaded feed from {}: {} teams, {} played, {} upcoming",
            source,
            data.teams.len(),
            data.past_matches.len(),
            data.upcoming_matches.len()
        );
        Ok(data)
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    async fn read_file(&self, path: &Path) -> Result<String, LoadError> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|source| LoadError::Read {
                context: read_context(&path.display().to_string()),
                source,
            })
    }

    async fn fetch_url(&self, url: &str) -> Result<String, LoadError> {
        let to_fetch_error = |source| LoadError::Fetch {
            context: fetch_context(url),
            source,
        };

        let response = self.client.get(url).send().await.map_err(to_fetch_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                context: fetch_context(url),
                status: status.as_u16(),
            });
        }
        response.text().await.map_err(to_fetch_error)
    }
}

pub fn parse_feed(body: &str) -> Result<TournamentData, LoadError> {
    serde_json::from_str(body).map_err(|source| LoadError::Parse {
        context: parse_context("tournament feed"),
        source,
    })
}
