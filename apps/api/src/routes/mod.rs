pub mod health;
pub mod resumes;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::config::StorageBackend;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/resumes/templates",
            get(resumes::handle_list_templates),
        )
        .route("/api/v1/resumes/render", post(resumes::handle_render))
        .route("/api/v1/resumes/parse-pdf", post(resumes::handle_parse_pdf));

    // Generated PDFs are served under the public prefix from whichever backend holds them.
    let prefix = &state.config.public_url_prefix;
    router = match state.config.storage {
        StorageBackend::Local => {
            router.nest_service(prefix, ServeDir::new(state.config.generated_dir()))
        }
        StorageBackend::S3(_) => router.route(
            &format!("{prefix}/:filename"),
            get(resumes::handle_get_generated),
        ),
    };

    router
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::config::{Config, S3Settings};
    use crate::storage::{LocalDiskStorage, StorageError, StorageSink};

    const BOUNDARY: &str = "resume-api-test-boundary";

    fn test_state(dir: &std::path::Path) -> AppState {
        let mut config = Config::from_source(|_| None).unwrap();
        config.upload_dir = dir.to_path_buf();
        let storage = Arc::new(LocalDiskStorage::new(config.generated_dir()));
        AppState { config, storage }
    }

    /// Object-store stand-in keyed by file name.
    #[derive(Default)]
    struct MemoryStorage {
        objects: Mutex<HashMap<String, Vec<u8>>>,
    }

    #[async_trait]
    impl StorageSink for MemoryStorage {
        async fn write(&self, name: &str, bytes: Vec<u8>) -> Result<String, StorageError> {
            self.objects.lock().unwrap().insert(name.to_string(), bytes);
            Ok(format!("s3://resumes/uploads/generated/{name}"))
        }

        async fn read(&self, name: &str) -> Result<Option<Vec<u8>>, StorageError> {
            Ok(self.objects.lock().unwrap().get(name).cloned())
        }

        async fn delete(&self, name: &str) -> Result<(), StorageError> {
            self.objects.lock().unwrap().remove(name);
            Ok(())
        }
    }

    fn s3_state() -> (AppState, Arc<MemoryStorage>) {
        let mut config = Config::from_source(|_| None).unwrap();
        config.storage = StorageBackend::S3(S3Settings {
            bucket: "resumes".into(),
            endpoint: "http://localhost:9000".into(),
            access_key_id: "minio".into(),
            secret_access_key: "minio123".into(),
        });
        let storage = Arc::new(MemoryStorage::default());
        let state = AppState {
            config,
            storage: storage.clone(),
        };
        (state, storage)
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    fn json_post(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart_upload(field: &str, content_type: &str, bytes: &[u8]) -> Request<Body> {
        let mut body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; \
             filename=\"resume.pdf\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
        Request::builder()
            .method("POST")
            .uri("/api/v1/resumes/parse-pdf")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn sample_request() -> Value {
        json!({
            "structuredData": {
                "personalInfo": {"name": "Jane Doe", "email": "jane@example.com"},
                "summary": "Backend engineer.",
                "skills": ["Go", "Rust"]
            },
            "template": "classic"
        })
    }

    #[tokio::test]
    async fn test_health() {
        let dir = tempfile::tempdir().unwrap();
        let request = Request::get("/health").body(Body::empty()).unwrap();
        let (status, body) = send(build_router(test_state(dir.path())), request).await;
        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "resume-api");
    }

    #[tokio::test]
    async fn test_list_templates_endpoint() {
        let dir = tempfile::tempdir().unwrap();
        let request = Request::get("/api/v1/resumes/templates")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(build_router(test_state(dir.path())), request).await;
        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_slice(&body).unwrap();
        let ids: Vec<_> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids, ["modern", "classic", "minimal", "creative", "professional"]);
        assert_eq!(body[0]["headerStyle"], "colored-bar");
    }

    #[tokio::test]
    async fn test_render_stores_and_serves_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let router = build_router(test_state(dir.path()));

        let (status, body) = send(
            router.clone(),
            json_post("/api/v1/resumes/render", sample_request()),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{}", String::from_utf8_lossy(&body));
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["template"], "classic");
        assert_eq!(body["pageCount"], 1);
        let filename = body["filename"].as_str().unwrap();
        let url = body["url"].as_str().unwrap();
        assert_eq!(url, format!("/uploads/generated/{filename}"));
        assert!(dir.path().join("generated").join(filename).exists());

        let (status, pdf) = send(router, Request::get(url).body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert!(pdf.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_render_unknown_template_falls_back_to_modern() {
        let dir = tempfile::tempdir().unwrap();
        let mut request = sample_request();
        request["template"] = json!("nonexistent");
        let (status, body) = send(
            build_router(test_state(dir.path())),
            json_post("/api/v1/resumes/render", request),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["template"], "modern");
    }

    #[tokio::test]
    async fn test_render_replaces_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let router = build_router(test_state(dir.path()));

        let (_, first) = send(
            router.clone(),
            json_post("/api/v1/resumes/render", sample_request()),
        )
        .await;
        let first: Value = serde_json::from_slice(&first).unwrap();
        let first_name = first["filename"].as_str().unwrap().to_string();

        let mut request = sample_request();
        request["replaces"] = first["url"].clone();
        let (status, second) = send(router, json_post("/api/v1/resumes/render", request)).await;
        assert_eq!(status, StatusCode::OK);
        let second: Value = serde_json::from_slice(&second).unwrap();

        let generated = dir.path().join("generated");
        assert!(!generated.join(&first_name).exists());
        assert!(generated
            .join(second["filename"].as_str().unwrap())
            .exists());
    }

    #[tokio::test]
    async fn test_render_without_data_is_validation_error() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = send(
            build_router(test_state(dir.path())),
            json_post("/api/v1/resumes/render", json!({"template": "modern"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_parse_pdf_rejects_non_pdf_upload() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = send(
            build_router(test_state(dir.path())),
            multipart_upload("resume", "text/plain", b"hello"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"]["message"], "Only PDF files are allowed");
    }

    #[tokio::test]
    async fn test_parse_pdf_requires_resume_field() {
        let dir = tempfile::tempdir().unwrap();
        let (status, _) = send(
            build_router(test_state(dir.path())),
            multipart_upload("attachment", "application/pdf", b"%PDF-1.7"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_parse_pdf_rejects_oversized_upload() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(dir.path());
        state.config.max_upload_bytes = 1024;
        let (status, _) = send(
            build_router(state),
            multipart_upload("resume", "application/pdf", &vec![b'x'; 4096]),
        )
        .await;
        assert!(status.is_client_error(), "got {status}");
    }

    #[tokio::test]
    async fn test_s3_backend_serves_rendered_url() {
        let (state, storage) = s3_state();
        let router = build_router(state);

        let (status, body) = send(
            router.clone(),
            json_post("/api/v1/resumes/render", sample_request()),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{}", String::from_utf8_lossy(&body));
        let body: Value = serde_json::from_slice(&body).unwrap();
        let filename = body["filename"].as_str().unwrap();
        let url = body["url"].as_str().unwrap();
        assert_eq!(url, format!("/uploads/generated/{filename}"));
        assert!(storage.objects.lock().unwrap().contains_key(filename));

        let response = router
            .clone()
            .oneshot(Request::get(url).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        let pdf = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(pdf.starts_with(b"%PDF"));

        let (status, _) = send(
            router,
            Request::get("/uploads/generated/resume_missing.pdf")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_render_accepts_loose_custom_styles() {
        let dir = tempfile::tempdir().unwrap();
        let mut request = sample_request();
        request["customStyles"] = json!({"primaryColor": "", "lineSpacing": "18"});
        let (status, body) = send(
            build_router(test_state(dir.path())),
            json_post("/api/v1/resumes/render", request),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{}", String::from_utf8_lossy(&body));
    }
}
