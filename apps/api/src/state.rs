use std::sync::Arc;

use crate::config::Config;
use crate::storage::StorageSink;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Where generated PDFs go. Local disk or S3, chosen at startup.
    pub storage: Arc<dyn StorageSink>,
}
