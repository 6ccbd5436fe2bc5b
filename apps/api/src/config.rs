use std::path::PathBuf;

use anyhow::{bail, Context, Result};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Where generated PDFs are stored.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageBackend {
    Local,
    S3(S3Settings),
}

#[derive(Debug, Clone, PartialEq)]
pub struct S3Settings {
    pub bucket: String,
    pub endpoint: String,
    pub access_key_id: String,
    pub secret_access_key: String,
}

/// Application configuration loaded from environment variables.
/// Startup fails if a required variable is missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Root of local storage; generated PDFs live in `<upload_dir>/generated`.
    pub upload_dir: PathBuf,
    /// Prefix of the URL handed back to clients, e.g. `/uploads/generated`.
    pub public_url_prefix: String,
    pub storage: StorageBackend,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_source(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let require = |key: &str| {
            get(key).with_context(|| format!("Required environment variable '{key}' is not set"))
        };

        let storage = match get("STORAGE_BACKEND").as_deref().unwrap_or("local") {
            "local" => StorageBackend::Local,
            "s3" => StorageBackend::S3(S3Settings {
                bucket: require("S3_BUCKET")?,
                endpoint: require("S3_ENDPOINT")?,
                access_key_id: require("AWS_ACCESS_KEY_ID")?,
                secret_access_key: require("AWS_SECRET_ACCESS_KEY")?,
            }),
            other => bail!("STORAGE_BACKEND must be 'local' or 's3', got '{other}'"),
        };

        let public_url_prefix = get("PUBLIC_URL_PREFIX")
            .unwrap_or_else(|| "/uploads/generated".to_string())
            .trim_end_matches('/')
            .to_string();
        if !public_url_prefix.starts_with('/') {
            bail!("PUBLIC_URL_PREFIX must start with '/'");
        }

        Ok(Config {
            port: get("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            upload_dir: PathBuf::from(get("UPLOAD_DIR").unwrap_or_else(|| "uploads".to_string())),
            public_url_prefix,
            storage,
            max_upload_bytes: match get("MAX_UPLOAD_BYTES") {
                Some(v) => v
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a positive integer")?,
                None => DEFAULT_MAX_UPLOAD_BYTES,
            },
        })
    }

    /// Directory generated PDFs are written to by the local backend.
    pub fn generated_dir(&self) -> PathBuf {
        self.upload_dir.join("generated")
    }
}
