use anyhow::Result;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::create_router;
use crate::api::handlers::AppState;
use crate::config::settings::AppConfig;
use crate::feed::FeedSource;
use crate::services::dashboard::DashboardService;

pub struct ServerService {
    port: u16,
    source: FeedSource,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, source: FeedSource, config: AppConfig) -> Self {
        Self {
            port,
            source,
            config,
        }
    }

    pub async fn run(self) -> Result<()> {
        info!("Serving dashboard for feed {}", self.source);

        let state = Arc::new(AppState {
            service: DashboardService::new(self.config)?,
            source: self.source,
        });

        let app = create_router(state).layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
