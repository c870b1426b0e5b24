//! Server Bootstrap
//!
//! 依存性注入とHTTPサーバーの起動

use anyhow::{Context, Result};
use axum::Router;
use log::info;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::adapter::config::{Config, StorageConfig};
use crate::adapter::http::{create_router, ApiState};
use crate::adapter::repositories::{InMemoryRepository, JsonFileRepository};
use crate::application::converters::{ConferenceConverter, SessionConverter};
use crate::application::dto::VendorMediaTypes;
use crate::application::use_cases::ConferenceResource;
use crate::domain::entities::conference::Conference;
use crate::domain::repositories::Repository;

/// 設定とリポジトリからアプリケーションのルーターを組み立てる
pub fn create_app<R>(config: &Config, repository: Arc<R>) -> Router
where
    R: Repository<Conference> + 'static,
{
    let media_types = VendorMediaTypes::new(&config.media_namespace);

    let resource = ConferenceResource::new(
        repository,
        Arc::new(ConferenceConverter::new(media_types.clone())),
        Arc::new(SessionConverter::new(media_types.clone())),
        &media_types,
        &config.base_uri,
    );

    create_router(ApiState::new(
        Arc::new(resource),
        media_types,
        config.base_uri.clone(),
    ))
}

/// カンファレンスREST APIサーバー
pub struct ConferenceServer {
    config: Config,
}

impl ConferenceServer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// 設定に従ってリポジトリを選び、サーバーを起動する
    ///
    /// Ctrl+Cを受け取るまで戻らない
    ///
    /// # Errors
    ///
    /// バインドに失敗した場合、またはサーバーが異常終了した場合にエラーを返す
    pub async fn run(&self) -> Result<()> {
        match &self.config.storage {
            StorageConfig::Memory => {
                info!("Using in-memory storage");
                self.serve(Arc::new(InMemoryRepository::<Conference>::new()))
                    .await
            }
            StorageConfig::JsonFile { path } => {
                let repository = JsonFileRepository::<Conference>::new(path);
                info!("Using JSON file storage at {}", repository.path().display());
                self.serve(Arc::new(repository)).await
            }
        }
    }

    async fn serve<R>(&self, repository: Arc<R>) -> Result<()>
    where
        R: Repository<Conference> + 'static,
    {
        let app = create_app(&self.config, repository);

        let listener = TcpListener::bind(&self.config.bind_address)
            .await
            .with_context(|| format!("Failed to bind {}", self.config.bind_address))?;
        let address = listener.local_addr().context("Failed to read local address")?;
        info!(
            "Serving conferences on http://{} (media namespace: {})",
            address, self.config.media_namespace
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server terminated unexpectedly")?;

        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
