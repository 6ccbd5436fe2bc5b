use axum::{
    extract::{Multipart, Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::ingest::{extract_resume_text, IngestError, ParsedPdf};
use crate::models::resume::StructuredResume;
use crate::render::{list_templates, render_resume, StyleOverride, TemplateId, TemplateSummary};
use crate::state::AppState;
use crate::storage::StorageError;

const UPLOAD_FIELD: &str = "resume";
const PDF_CONTENT_TYPE: &str = "application/pdf";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    pub structured_data: Option<StructuredResume>,
    pub template: Option<String>,
    #[serde(default)]
    pub custom_styles: StyleOverride,
    /// URL of a previously generated PDF to retire once the new one is stored.
    pub replaces: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderResponse {
    pub filename: String,
    pub url: String,
    pub template: &'static str,
    pub page_count: usize,
    pub generated_at: DateTime<Utc>,
}

/// GET /api/v1/resumes/templates
pub async fn handle_list_templates() -> Json<Vec<TemplateSummary>> {
    Json(list_templates())
}

/// POST /api/v1/resumes/render
pub async fn handle_render(
    State(state): State<AppState>,
    Json(req): Json<RenderRequest>,
) -> Result<Json<RenderResponse>, AppError> {
    let resume = req
        .structured_data
        .ok_or_else(|| AppError::Validation("structuredData is required".to_string()))?;
    let template_id = req
        .template
        .unwrap_or_else(|| TemplateId::DEFAULT.as_str().to_string());
    let template = TemplateId::resolve(&template_id).as_str();

    let output = render_resume(
        state.storage.as_ref(),
        &state.config.public_url_prefix,
        resume,
        template_id,
        req.custom_styles,
    )
    .await?;

    if let Some(previous) = req.replaces.as_deref() {
        retire_previous(&state, previous, &output.filename).await;
    }

    Ok(Json(RenderResponse {
        filename: output.filename,
        url: output.url,
        template,
        page_count: output.page_count,
        generated_at: output.generated_at,
    }))
}

/// GET <PUBLIC_URL_PREFIX>/:filename
/// Streams a generated PDF back from storage when it does not live on local disk.
pub async fn handle_get_generated(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let bytes = match state.storage.read(&filename).await {
        Ok(Some(bytes)) => bytes,
        Ok(None) | Err(StorageError::InvalidName(_)) => {
            return Err(AppError::NotFound(format!("{filename} not found")))
        }
        Err(e) => return Err(e.into()),
    };
    Ok(([(header::CONTENT_TYPE, PDF_CONTENT_TYPE)], bytes))
}

/// Deletes a superseded PDF. Failures are logged and never fail the request.
async fn retire_previous(state: &AppState, previous_url: &str, new_filename: &str) {
    let Some(name) = generated_name(previous_url, &state.config.public_url_prefix) else {
        warn!(previous_url, "Ignoring replaces: not a generated resume URL");
        return;
    };
    if name == new_filename {
        return;
    }
    match state.storage.delete(name).await {
        Ok(()) => info!(filename = name, "Retired previous resume PDF"),
        Err(e) => warn!(filename = name, "Failed to retire previous resume PDF: {e}"),
    }
}

/// Extracts the stored file name from a URL under `prefix`.
/// Accepts relative (`/uploads/generated/x.pdf`) and absolute URLs.
fn generated_name<'a>(url: &'a str, prefix: &str) -> Option<&'a str> {
    let marker = format!("{}/", prefix.trim_end_matches('/'));
    let start = url.find(&marker)? + marker.len();
    let rest = &url[start..];
    let name = rest.split(['?', '#']).next().unwrap_or_default();
    if name.is_empty() || name.contains('/') {
        return None;
    }
    Some(name)
}

/// POST /api/v1/resumes/parse-pdf
pub async fn handle_parse_pdf(mut multipart: Multipart) -> Result<Json<ParsedPdf>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.body_text()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        if field.content_type() != Some(PDF_CONTENT_TYPE) {
            return Err(IngestError::NotPdf.into());
        }
        let filename = field.file_name().unwrap_or("upload.pdf").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;
        info!(%filename, size = bytes.len(), "Parsing uploaded resume PDF");

        let parsed = tokio::task::spawn_blocking(move || extract_resume_text(&bytes))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task failed: {e}")))??;
        return Ok(Json(parsed));
    }
    Err(AppError::Validation("No file uploaded".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_name_from_relative_and_absolute_urls() {
        let prefix = "/uploads/generated";
        assert_eq!(
            generated_name("/uploads/generated/resume_a.pdf", prefix),
            Some("resume_a.pdf")
        );
        assert_eq!(
            generated_name("https://cdn.example.com/uploads/generated/resume_b.pdf?v=2", prefix),
            Some("resume_b.pdf")
        );
    }

    #[test]
    fn test_generated_name_rejects_foreign_urls() {
        let prefix = "/uploads/generated";
        assert_eq!(generated_name("/static/resume_a.pdf", prefix), None);
        assert_eq!(generated_name("/uploads/generated/", prefix), None);
        assert_eq!(generated_name("/uploads/generated/nested/x.pdf", prefix), None);
    }

    #[test]
    fn test_render_request_tolerates_loose_custom_styles() {
        let req: RenderRequest = serde_json::from_str(
            r#"{
                "structuredData": {},
                "customStyles": {"primaryColor": 255, "accentColor": "", "lineSpacing": "18"}
            }"#,
        )
        .unwrap();
        assert_eq!(req.custom_styles.primary_color, None);
        assert_eq!(req.custom_styles.accent_color, None);
        assert_eq!(req.custom_styles.line_spacing, Some(18.0));
    }

    #[test]
    fn test_render_request_accepts_camel_case() {
        let req: RenderRequest = serde_json::from_str(
            r##"{
                "structuredData": {"personalInfo": {"name": "Jane"}},
                "template": "classic",
                "customStyles": {"primaryColor": "#ff0000"}
            }"##,
        )
        .unwrap();
        assert_eq!(req.template.as_deref(), Some("classic"));
        assert_eq!(req.custom_styles.primary_color.as_deref(), Some("#ff0000"));
        assert_eq!(req.structured_data.unwrap().personal_info.name, "Jane");
        assert!(req.replaces.is_none());
    }
}
