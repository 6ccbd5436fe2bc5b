//! Document assembly: style resolution, section order, serialization, storage.
//!
//! # Pipeline
//! resolve style → header → summary → skills → experience → projects →
//! education → certifications → serialize → store.
//!
//! Layout and serialization are CPU-bound and run via `tokio::task::spawn_blocking`
//! with owned inputs; the storage write only happens once the bytes exist, so a
//! failed render never leaves a file behind.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::resume::StructuredResume;
use crate::render::context::RenderContext;
use crate::render::page::Document;
use crate::render::pdf::serialize_document;
use crate::render::sections::{
    render_certifications, render_education, render_experience, render_header, render_projects,
    render_skills, render_summary,
};
use crate::render::style::{resolve_style, ResolvedStyle, StyleOverride};
use crate::render::RenderError;
use crate::storage::StorageSink;

/// Result of a successful render, handed back to the caller.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOutput {
    pub filename: String,
    /// Storage location (filesystem path or object URI).
    #[serde(skip_serializing)]
    pub filepath: String,
    /// Caller-facing relative URL.
    pub url: String,
    pub page_count: usize,
    pub generated_at: DateTime<Utc>,
}

/// Lays out a resume against an already-resolved style.
pub fn layout_with_style(resume: &StructuredResume, style: &ResolvedStyle) -> Document {
    let mut ctx = RenderContext::new(style);
    render_header(&mut ctx, &resume.personal_info);
    render_summary(&mut ctx, &resume.summary);
    render_skills(&mut ctx, &resume.skills);
    render_experience(&mut ctx, &resume.experience);
    render_projects(&mut ctx, &resume.projects);
    render_education(&mut ctx, &resume.education);
    render_certifications(&mut ctx, &resume.certifications);
    ctx.into_document()
}

/// Lays out a resume without serializing it.
pub fn layout_resume(
    resume: &StructuredResume,
    template_id: &str,
    overrides: &StyleOverride,
) -> Document {
    let style = resolve_style(template_id, overrides);
    debug!(
        template = style.template.as_str(),
        has_body = resume.has_body(),
        "Laying out resume"
    );
    layout_with_style(resume, &style)
}

fn document_title(resume: &StructuredResume) -> String {
    let name = resume.personal_info.name.trim();
    if name.is_empty() {
        "Resume".to_string()
    } else {
        format!("{name} - Resume")
    }
}

/// Lays out and serializes a resume. Returns the PDF bytes and the page count.
pub fn render_pdf_bytes(
    resume: &StructuredResume,
    template_id: &str,
    overrides: &StyleOverride,
) -> Result<(Vec<u8>, usize), RenderError> {
    let doc = layout_resume(resume, template_id, overrides);
    let bytes = serialize_document(&doc, &document_title(resume))?;
    Ok((bytes, doc.page_count()))
}

/// `resume_<uuid>.pdf`
pub fn generate_filename() -> String {
    format!("resume_{}.pdf", Uuid::new_v4())
}

/// Full render: layout, serialize, write to storage.
pub async fn render_resume(
    storage: &dyn StorageSink,
    url_prefix: &str,
    resume: StructuredResume,
    template_id: String,
    overrides: StyleOverride,
) -> Result<RenderOutput, RenderError> {
    let (bytes, page_count) = tokio::task::spawn_blocking(move || {
        render_pdf_bytes(&resume, &template_id, &overrides)
    })
    .await
    .map_err(|e| RenderError::Internal(format!("render task failed: {e}")))??;

    let filename = generate_filename();
    let size_kb = bytes.len() / 1024;
    let filepath = storage.write(&filename, bytes).await?;
    let url = format!("{}/{}", url_prefix.trim_end_matches('/'), filename);

    info!(%filename, pages = page_count, size_kb, "Resume PDF generated");

    Ok(RenderOutput {
        filename,
        filepath,
        url,
        page_count,
        generated_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{ExperienceEntry, PersonalInfo};
    use crate::render::page::{Element, MARGIN, PAGE_HEIGHT, PAGE_WIDTH};
    use crate::render::font_metrics::text_width;
    use crate::storage::LocalDiskStorage;

    fn all_texts(doc: &Document) -> Vec<String> {
        doc.pages()
            .iter()
            .flat_map(|p| p.text_runs())
            .map(|r| r.text.clone())
            .collect()
    }

    fn long_experience(entries: usize) -> Vec<ExperienceEntry> {
        (0..entries)
            .map(|i| ExperienceEntry {
                title: format!("Engineer {i}"),
                company: "Acme".into(),
                start_date: "2019".into(),
                end_date: "2021".into(),
                description: "Designed and operated services handling large volumes of traffic \
                              with careful attention to latency, reliability and cost."
                    .repeat(3),
                highlights: vec![
                    "Cut p99 latency by 40% through connection pooling and caching".into(),
                    "Led migration of twelve services to a shared deployment pipeline".into(),
                ],
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_empty_resume_renders_single_page_header_only() {
        for template in ["modern", "classic", "minimal", "creative", "professional"] {
            let doc = layout_resume(&StructuredResume::default(), template, &StyleOverride::default());
            assert_eq!(doc.page_count(), 1, "{template}");
            assert!(all_texts(&doc).is_empty(), "{template}: {:?}", all_texts(&doc));
            // The header divider is always present.
            assert!(doc.pages()[0]
                .elements
                .iter()
                .any(|e| matches!(e, Element::Line { .. })));
        }
        let (bytes, pages) =
            render_pdf_bytes(&StructuredResume::default(), "modern", &StyleOverride::default())
                .unwrap();
        assert_eq!(pages, 1);
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_classic_end_to_end_content() {
        let resume = StructuredResume {
            personal_info: PersonalInfo {
                name: "Jane Doe".into(),
                ..Default::default()
            },
            skills: vec!["Go".into(), "Rust".into()],
            experience: vec![ExperienceEntry {
                title: "Engineer".into(),
                company: "Acme".into(),
                current: true,
                start_date: "2021".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let style = resolve_style("classic", &StyleOverride::default());
        let doc = layout_with_style(&resume, &style);
        let runs: Vec<_> = doc.pages()[0].text_runs().collect();

        let name = runs.iter().find(|r| r.text == "JANE DOE").expect("name run");
        let width = text_width("JANE DOE", style.fonts.header, 24.0);
        assert!((name.x - (PAGE_WIDTH - width) / 2.0).abs() < 1e-3);

        // The classic bullet is folded by the output encoding.
        assert!(runs.iter().any(|r| r.text == "Go * Rust"), "{:?}", all_texts(&doc));
        assert!(runs.iter().any(|r| r.text == "Acme | 2021 - Present"));

        let order: Vec<_> = all_texts(&doc);
        let pos = |t: &str| order.iter().position(|x| x == t).unwrap();
        assert!(pos("SKILLS") < pos("EXPERIENCE"));
        assert!(pos("Engineer") < pos("Acme | 2021 - Present"));
    }

    #[test]
    fn test_section_order_is_fixed() {
        let resume = StructuredResume {
            summary: "Summary text".into(),
            skills: vec!["Rust".into()],
            experience: long_experience(1),
            projects: vec![Default::default()],
            education: vec![Default::default()],
            certifications: vec![crate::models::resume::CertificationEntry {
                name: "CKA".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let doc = layout_resume(&resume, "minimal", &StyleOverride::default());
        let texts = all_texts(&doc);
        let headings: Vec<_> = texts
            .iter()
            .filter(|t| {
                [
                    "PROFESSIONAL SUMMARY",
                    "SKILLS",
                    "EXPERIENCE",
                    "PROJECTS",
                    "EDUCATION",
                    "CERTIFICATIONS",
                ]
                .contains(&t.as_str())
            })
            .cloned()
            .collect();
        assert_eq!(
            headings,
            vec![
                "PROFESSIONAL SUMMARY",
                "SKILLS",
                "EXPERIENCE",
                "PROJECTS",
                "EDUCATION",
                "CERTIFICATIONS"
            ]
        );
    }

    #[test]
    fn test_long_experience_paginates_without_splitting_lines() {
        let resume = StructuredResume {
            experience: long_experience(12),
            ..Default::default()
        };
        let doc = layout_resume(&resume, "modern", &StyleOverride::default());
        assert!(doc.page_count() > 1, "expected pagination");
        for page in doc.pages() {
            for run in page.text_runs() {
                assert!(run.y >= MARGIN, "{:?} drawn below the bottom margin", run.text);
                assert!(run.y <= PAGE_HEIGHT - MARGIN, "{:?} above the top margin", run.text);
            }
        }
        // Continuation pages start at the top margin.
        let first_on_second = doc.pages()[1].text_runs().next().unwrap();
        assert_eq!(first_on_second.y, PAGE_HEIGHT - MARGIN);
    }

    #[test]
    fn test_line_spacing_override_changes_layout() {
        let resume = StructuredResume {
            summary: "word ".repeat(300),
            ..Default::default()
        };
        let tight = layout_resume(&resume, "minimal", &StyleOverride::default());
        let loose = layout_resume(
            &resume,
            "minimal",
            &StyleOverride {
                line_spacing: Some(28.0),
                ..Default::default()
            },
        );
        let y_of_last = |doc: &Document| doc.pages()[0].text_runs().last().unwrap().y;
        assert!(y_of_last(&loose) < y_of_last(&tight) || loose.page_count() > tight.page_count());
    }

    #[tokio::test]
    async fn test_render_resume_writes_file_and_builds_url() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalDiskStorage::new(dir.path());
        let resume = StructuredResume {
            personal_info: PersonalInfo {
                name: "Jane Doe".into(),
                ..Default::default()
            },
            experience: long_experience(12),
            ..Default::default()
        };
        let output = render_resume(
            &storage,
            "/uploads/generated/",
            resume,
            "professional".into(),
            StyleOverride::default(),
        )
        .await
        .unwrap();

        assert!(output.filename.starts_with("resume_") && output.filename.ends_with(".pdf"));
        assert_eq!(output.url, format!("/uploads/generated/{}", output.filename));
        let bytes = std::fs::read(&output.filepath).unwrap();
        let pages = lopdf::Document::load_mem(&bytes).unwrap().get_pages().len();
        assert_eq!(pages, output.page_count);
        assert!(pages > 1);
    }

    #[test]
    fn test_generated_filenames_are_unique() {
        assert_ne!(generate_filename(), generate_filename());
    }
}
