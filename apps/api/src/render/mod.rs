//! PDF template rendering engine.
//! Turns a StructuredResume into a paginated, styled US Letter PDF.
//! Layout is pure and synchronous; only the storage write is async.

pub mod assembler;
pub mod context;
pub mod font_metrics;
pub mod page;
pub mod pdf;
pub mod sanitize;
pub mod sections;
pub mod style;
pub mod wrap;

use thiserror::Error;

use crate::storage::StorageError;

// Re-export the public API consumed by handlers.
pub use assembler::render_resume;
pub use style::{list_templates, StyleOverride, TemplateId, TemplateSummary};

/// Fatal render failures. Leniency cases (bad colors, unknown templates,
/// unsupported characters) never reach this type.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to generate PDF: font embedding failed: {0}")]
    FontEmbedding(String),

    #[error("Failed to generate PDF: serialization failed: {0}")]
    Serialization(String),

    #[error("Failed to generate PDF: {0}")]
    Storage(#[from] StorageError),

    #[error("Failed to generate PDF: {0}")]
    Internal(String),
}
