//! Section renderers, one per resume section.
//!
//! Each renderer skips itself when its data is empty, reserves space before every
//! atomic block and advances the cursor after drawing. Field joins only include
//! non-empty parts, so no separator is ever emitted for a missing field.

use crate::models::resume::{
    CertificationEntry, EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry,
};
use crate::render::context::{RenderContext, SECTION_GAP};
use crate::render::page::{CONTENT_WIDTH, MARGIN, PAGE_HEIGHT, PAGE_WIDTH};
use crate::render::style::{HeaderStyle, Rgb};

const EXPERIENCE_ENTRY_SPACE: f32 = 60.0;
const PROJECT_ENTRY_SPACE: f32 = 50.0;
const EDUCATION_ENTRY_SPACE: f32 = 40.0;
const CERTIFICATION_SPACE: f32 = 20.0;

const COLORED_BAR_HEIGHT: f32 = 90.0;
const HEADER_CONTACT_GREY: Rgb = Rgb::new(0.9, 0.9, 0.9);

// ────────────────────────────────────────────────────────────────────────────
// Formatting helpers
// ────────────────────────────────────────────────────────────────────────────

/// Joins the non-blank parts with ` | `.
pub fn join_present<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(|p| p.as_ref().trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" | ")
}

/// `start - end`, with `Present` replacing the end when `current` is set.
/// A missing side drops the separator; both missing yields an empty string.
pub fn format_date_range(start: &str, end: &str, current: bool) -> String {
    let start = start.trim();
    let end = if current { "Present" } else { end.trim() };
    match (start.is_empty(), end.is_empty()) {
        (false, false) => format!("{start} - {end}"),
        (false, true) => start.to_string(),
        (true, false) => end.to_string(),
        (true, true) => String::new(),
    }
}

/// `Degree in Field`, or whichever of the two is present.
pub fn format_degree(degree: &str, field: &str) -> String {
    let (degree, field) = (degree.trim(), field.trim());
    match (degree.is_empty(), field.is_empty()) {
        (false, false) => format!("{degree} in {field}"),
        (false, true) => degree.to_string(),
        (true, _) => field.to_string(),
    }
}

pub fn contact_line(info: &PersonalInfo) -> String {
    join_present(&[&info.email, &info.phone, &info.location])
}

pub fn links_line(info: &PersonalInfo) -> String {
    let labelled = |label: &str, value: &str| {
        let value = value.trim();
        if value.is_empty() {
            String::new()
        } else {
            format!("{label}: {value}")
        }
    };
    join_present(&[
        labelled("LinkedIn", &info.linkedin),
        labelled("GitHub", &info.github),
        labelled("Portfolio", &info.portfolio),
    ])
}

/// Skills joined by the template's bullet glyph (unsanitized).
pub fn skills_line(skills: &[String], bullet: &str) -> String {
    skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(&format!(" {bullet} "))
}

pub fn experience_meta_line(exp: &ExperienceEntry) -> String {
    join_present(&[
        exp.company.clone(),
        exp.location.clone(),
        format_date_range(&exp.start_date, &exp.end_date, exp.current),
    ])
}

pub fn education_meta_line(edu: &EducationEntry) -> String {
    let gpa = if edu.gpa.trim().is_empty() {
        String::new()
    } else {
        format!("GPA: {}", edu.gpa.trim())
    };
    join_present(&[
        edu.institution.clone(),
        edu.location.clone(),
        format_date_range(&edu.start_date, &edu.end_date, false),
        gpa,
    ])
}

pub fn project_links_line(project: &ProjectEntry) -> String {
    let url = if project.url.trim().is_empty() {
        String::new()
    } else {
        format!("URL: {}", project.url.trim())
    };
    let github = if project.github.trim().is_empty() {
        String::new()
    } else {
        format!("GitHub: {}", project.github.trim())
    };
    join_present(&[url, github])
}

pub fn certification_line(cert: &CertificationEntry) -> String {
    join_present(&[&cert.name, &cert.issuer, &cert.date])
}

// ────────────────────────────────────────────────────────────────────────────
// Header
// ────────────────────────────────────────────────────────────────────────────

pub fn render_header(ctx: &mut RenderContext<'_>, info: &PersonalInfo) {
    let style = ctx.style;
    let name = info.name.trim().to_uppercase();
    let contact = contact_line(info);
    let (header_font, body_font) = (style.fonts.header, style.fonts.body);

    match style.layout.header_style {
        HeaderStyle::ColoredBar => {
            ctx.fill_rect(
                0.0,
                PAGE_HEIGHT - COLORED_BAR_HEIGHT,
                PAGE_WIDTH,
                COLORED_BAR_HEIGHT,
                style.colors.header_bg,
            );
            ctx.draw_text_at(&name, MARGIN, PAGE_HEIGHT - 50.0, header_font, 26.0, Rgb::WHITE);
            ctx.draw_text_at(&contact, MARGIN, PAGE_HEIGHT - 72.0, body_font, 10.0, HEADER_CONTACT_GREY);
            ctx.doc.set_cursor(PAGE_HEIGHT - 110.0);
        }
        HeaderStyle::Centered => {
            if !name.is_empty() {
                let x = (PAGE_WIDTH - ctx.width_of(&name, header_font, 24.0)) / 2.0;
                ctx.draw_text(&name, x, header_font, 24.0, style.colors.primary);
                ctx.doc.advance(30.0);
            }
            if !contact.is_empty() {
                let x = (PAGE_WIDTH - ctx.width_of(&contact, body_font, 10.0)) / 2.0;
                ctx.draw_text(&contact, x, body_font, 10.0, style.colors.secondary);
                ctx.doc.advance(20.0);
            }
        }
        HeaderStyle::LeftAligned => render_left_header(ctx, &name, &contact),
        HeaderStyle::Sidebar => {
            let top = ctx.cursor();
            render_left_header(ctx, &name, &contact);
            // Accent stripe beside the identity block.
            let bottom = ctx.cursor() + 5.0;
            if top > bottom {
                ctx.fill_rect(MARGIN - 14.0, bottom, 4.0, top - bottom + 20.0, style.colors.primary);
            }
        }
        HeaderStyle::TwoColumn => render_two_column_header(ctx, info, &name),
    }

    let links = links_line(info);
    if !links.is_empty() {
        ctx.draw_wrapped(&links, MARGIN, CONTENT_WIDTH, body_font, 9.0, style.colors.accent, 12.0);
    }

    let y = ctx.cursor();
    ctx.draw_line((MARGIN, y), (PAGE_WIDTH - MARGIN, y), 1.0, style.colors.accent);
    ctx.doc.advance(SECTION_GAP);
}

fn render_left_header(ctx: &mut RenderContext<'_>, name: &str, contact: &str) {
    let style = ctx.style;
    if !name.is_empty() {
        ctx.draw_text(name, MARGIN, style.fonts.header, 24.0, style.colors.primary);
        ctx.doc.advance(30.0);
    }
    if !contact.is_empty() {
        ctx.draw_text(contact, MARGIN, style.fonts.body, 10.0, style.colors.secondary);
        ctx.doc.advance(15.0);
    }
}

/// Name on the left, contact details stacked right-aligned. Falls back to the
/// left-aligned layout when the two columns would collide.
fn render_two_column_header(ctx: &mut RenderContext<'_>, info: &PersonalInfo, name: &str) {
    let style = ctx.style;
    let (header_font, body_font) = (style.fonts.header, style.fonts.body);
    let parts: Vec<&str> = [&info.email, &info.phone, &info.location]
        .into_iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    let name_width = ctx.width_of(name, header_font, 24.0);
    let column_width = parts
        .iter()
        .map(|p| ctx.width_of(p, body_font, 10.0))
        .fold(0.0_f32, f32::max);
    if name_width + column_width + 20.0 > CONTENT_WIDTH {
        render_left_header(ctx, name, &contact_line(info));
        return;
    }

    let top = ctx.cursor();
    ctx.draw_text(name, MARGIN, header_font, 24.0, style.colors.primary);
    let name_bottom = if name.is_empty() { top } else { top - 30.0 };

    let right = PAGE_WIDTH - MARGIN;
    let mut y = top;
    for part in &parts {
        let x = right - ctx.width_of(part, body_font, 10.0);
        ctx.draw_text_at(part, x, y, body_font, 10.0, style.colors.secondary);
        y -= 13.0;
    }
    let bottom = name_bottom.min(y - 2.0);
    ctx.doc.set_cursor(bottom.min(top));
}

// ────────────────────────────────────────────────────────────────────────────
// Body sections
// ────────────────────────────────────────────────────────────────────────────

pub fn render_summary(ctx: &mut RenderContext<'_>, summary: &str) {
    if summary.trim().is_empty() {
        return;
    }
    ctx.section_header("Professional Summary");
    ctx.draw_body(summary, 0.0);
    ctx.doc.advance(SECTION_GAP);
}

pub fn render_skills(ctx: &mut RenderContext<'_>, skills: &[String]) {
    let line = skills_line(skills, &ctx.style.bullet());
    if line.is_empty() {
        return;
    }
    ctx.section_header("Skills");
    ctx.draw_body(&line, 0.0);
    ctx.doc.advance(SECTION_GAP);
}

pub fn render_experience(ctx: &mut RenderContext<'_>, entries: &[ExperienceEntry]) {
    if entries.is_empty() {
        return;
    }
    let style = ctx.style;
    let bullet = style.bullet();
    ctx.section_header("Experience");

    for exp in entries {
        ctx.doc.ensure_space(EXPERIENCE_ENTRY_SPACE);
        ctx.draw_wrapped(&exp.title, MARGIN, CONTENT_WIDTH, style.fonts.header, 11.0, style.colors.text, 14.0);
        ctx.draw_wrapped(
            &experience_meta_line(exp),
            MARGIN,
            CONTENT_WIDTH,
            style.fonts.body,
            10.0,
            style.colors.secondary,
            14.0,
        );
        ctx.draw_body(&exp.description, 10.0);
        for highlight in exp.highlights.iter().filter(|h| !h.trim().is_empty()) {
            ctx.draw_body(&format!("{bullet} {}", highlight.trim()), 15.0);
        }
        ctx.doc.advance(10.0);
    }
    ctx.doc.advance(10.0);
}

pub fn render_projects(ctx: &mut RenderContext<'_>, projects: &[ProjectEntry]) {
    if projects.is_empty() {
        return;
    }
    let style = ctx.style;
    ctx.section_header("Projects");

    for project in projects {
        ctx.doc.ensure_space(PROJECT_ENTRY_SPACE);
        ctx.draw_wrapped(&project.name, MARGIN, CONTENT_WIDTH, style.fonts.header, 11.0, style.colors.text, 14.0);

        let technologies = project
            .technologies
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        if !technologies.is_empty() {
            ctx.draw_wrapped(
                &format!("Technologies: {technologies}"),
                MARGIN + 10.0,
                CONTENT_WIDTH - 10.0,
                style.fonts.accent,
                9.0,
                style.colors.secondary,
                12.0,
            );
        }

        ctx.draw_body(&project.description, 10.0);
        ctx.draw_wrapped(
            &project_links_line(project),
            MARGIN + 10.0,
            CONTENT_WIDTH - 10.0,
            style.fonts.body,
            9.0,
            style.colors.accent,
            12.0,
        );
        ctx.doc.advance(8.0);
    }
    ctx.doc.advance(10.0);
}

pub fn render_education(ctx: &mut RenderContext<'_>, entries: &[EducationEntry]) {
    if entries.is_empty() {
        return;
    }
    let style = ctx.style;
    ctx.section_header("Education");

    for edu in entries {
        ctx.doc.ensure_space(EDUCATION_ENTRY_SPACE);
        ctx.draw_wrapped(
            &format_degree(&edu.degree, &edu.field),
            MARGIN,
            CONTENT_WIDTH,
            style.fonts.header,
            11.0,
            style.colors.text,
            14.0,
        );
        ctx.draw_wrapped(
            &education_meta_line(edu),
            MARGIN,
            CONTENT_WIDTH,
            style.fonts.body,
            10.0,
            style.colors.secondary,
            14.0,
        );
        ctx.doc.advance(6.0);
    }
    ctx.doc.advance(10.0);
}

pub fn render_certifications(ctx: &mut RenderContext<'_>, certifications: &[CertificationEntry]) {
    if certifications.is_empty() {
        return;
    }
    let style = ctx.style;
    let bullet = style.bullet();
    ctx.section_header("Certifications");

    for cert in certifications {
        let line = certification_line(cert);
        if line.is_empty() {
            continue;
        }
        ctx.doc.ensure_space(CERTIFICATION_SPACE);
        ctx.draw_body(&format!("{bullet} {line}"), 0.0);
        if !cert.url.trim().is_empty() {
            ctx.draw_wrapped(
                cert.url.trim(),
                MARGIN + 10.0,
                CONTENT_WIDTH - 10.0,
                style.fonts.body,
                9.0,
                style.colors.accent,
                12.0,
            );
        }
    }
}
