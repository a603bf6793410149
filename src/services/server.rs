use anyhow::{Context, Result};
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::settings::AppConfig;
use crate::domain::Dataset;

pub struct ServerService {
    port: u16,
    config: AppConfig,
    dataset: Dataset,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig, dataset: Dataset) -> Self {
        Self {
            port,
            config,
            dataset,
        }
    }

    pub async fn run(self) -> Result<()> {
        let addr = SocketAddr::new(self.config.server.bind_address, self.port);
        let state = Arc::new(AppState::new(self.dataset, self.config)?);

        let app = create_router(state).layer(CorsLayer::permissive());

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        info!("Dashboard listening on http://{}", addr);

        axum::serve(listener, app).await?;

        Ok(())
    }
}
