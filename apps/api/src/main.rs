mod config;
mod errors;
mod ingest;
mod models;
mod render;
mod routes;
mod state;
mod storage;

use anyhow::Result;
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, S3Settings, StorageBackend};
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::{LocalDiskStorage, S3Storage, StorageSink};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume API v{}", env!("CARGO_PKG_VERSION"));

    let storage: Arc<dyn StorageSink> = match &config.storage {
        StorageBackend::Local => {
            let dir = config.generated_dir();
            tokio::fs::create_dir_all(&dir).await?;
            info!("Local storage at {}", dir.display());
            Arc::new(LocalDiskStorage::new(dir))
        }
        StorageBackend::S3(settings) => {
            let client = build_s3_client(settings).await;
            info!("S3 storage initialized (bucket: {})", settings.bucket);
            Arc::new(S3Storage::new(
                client,
                settings.bucket.clone(),
                &config.public_url_prefix,
            ))
        }
    };

    let state = AppState {
        config: config.clone(),
        storage,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs an S3 client configured for MinIO (local) or AWS (production).
async fn build_s3_client(settings: &S3Settings) -> aws_sdk_s3::Client {
    let credentials = Credentials::new(
        &settings.access_key_id,
        &settings.secret_access_key,
        None,
        None,
        "resume-api-static",
    );

    let s3_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(credentials)
        .endpoint_url(&settings.endpoint)
        .load()
        .await;

    aws_sdk_s3::Client::new(&s3_config)
}
