//! RenderContext: the resolved style plus the document being laid out.
//!
//! Section renderers receive `&mut RenderContext` and only ever draw through
//! these helpers, so sanitization and page-break checks cannot be skipped.

use crate::render::font_metrics::{text_width, StandardFont};
use crate::render::page::{Document, Element, TextRun, CONTENT_WIDTH, MARGIN};
use crate::render::sanitize::sanitize;
use crate::render::style::{ResolvedStyle, Rgb, SectionStyle};
use crate::render::wrap::wrap_text;

/// Space reserved for a section heading before it is drawn.
pub const SECTION_HEADER_SPACE: f32 = 40.0;
pub const SECTION_GAP: f32 = 20.0;

pub struct RenderContext<'a> {
    pub style: &'a ResolvedStyle,
    pub doc: Document,
}

impl<'a> RenderContext<'a> {
    pub fn new(style: &'a ResolvedStyle) -> Self {
        Self {
            style,
            doc: Document::new(),
        }
    }

    pub fn into_document(self) -> Document {
        self.doc
    }

    pub fn cursor(&self) -> f32 {
        self.doc.cursor_y()
    }

    pub fn width_of(&self, text: &str, font: StandardFont, size: f32) -> f32 {
        text_width(&sanitize(text), font, size)
    }

    /// Draws a single run at an absolute position. Blank text draws nothing.
    pub fn draw_text_at(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        font: StandardFont,
        size: f32,
        color: Rgb,
    ) {
        let text = sanitize(text);
        if text.trim().is_empty() {
            return;
        }
        self.doc.push(Element::Text(TextRun {
            text,
            x,
            y,
            font,
            size,
            color,
        }));
    }

    /// Draws a single run on the cursor baseline.
    pub fn draw_text(&mut self, text: &str, x: f32, font: StandardFont, size: f32, color: Rgb) {
        let y = self.cursor();
        self.draw_text_at(text, x, y, font, size, color);
    }

    /// Wraps `text` to `max_width` and draws it line by line, checking for space
    /// before every line. Paragraphs may therefore continue on the next page.
    /// Returns the number of lines drawn.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_wrapped(
        &mut self,
        text: &str,
        x: f32,
        max_width: f32,
        font: StandardFont,
        size: f32,
        color: Rgb,
        step: f32,
    ) -> usize {
        let lines = wrap_text(text, max_width, font, size);
        for line in &lines {
            self.doc.ensure_space(step);
            self.draw_text(line, x, font, size, color);
            self.doc.advance(step);
        }
        lines.len()
    }

    /// Body paragraph at the document line height.
    pub fn draw_body(&mut self, text: &str, indent: f32) -> usize {
        let style = self.style;
        self.draw_wrapped(
            text,
            MARGIN + indent,
            CONTENT_WIDTH - indent,
            style.fonts.body,
            10.0,
            style.colors.text,
            style.line_height,
        )
    }

    pub fn draw_line(&mut self, from: (f32, f32), to: (f32, f32), thickness: f32, color: Rgb) {
        self.doc.push(Element::Line {
            from,
            to,
            thickness,
            color,
        });
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb) {
        self.doc.push(Element::Rect {
            x,
            y,
            width,
            height,
            fill: Some(color),
            border: None,
        });
    }

    pub fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb, thickness: f32) {
        self.doc.push(Element::Rect {
            x,
            y,
            width,
            height,
            fill: None,
            border: Some((color, thickness)),
        });
    }

    /// Draws a section heading in the template's section style.
    pub fn section_header(&mut self, title: &str) {
        self.doc.ensure_space(SECTION_HEADER_SPACE);
        let style = self.style;
        let title = title.to_uppercase();
        let y = self.cursor();
        let (font, primary) = (style.fonts.header, style.colors.primary);

        match style.layout.section_style {
            SectionStyle::Underlined => {
                self.draw_text(&title, MARGIN, font, 12.0, primary);
                self.doc.advance(4.0);
                let rule_y = self.cursor();
                self.draw_line((MARGIN, rule_y), (MARGIN + CONTENT_WIDTH, rule_y), 1.0, primary);
                self.doc.advance(14.0);
            }
            SectionStyle::Colored => {
                self.fill_rect(MARGIN - 5.0, y - 5.0, CONTENT_WIDTH + 10.0, 20.0, primary.tint(0.1));
                self.draw_text(&title, MARGIN, font, 12.0, primary);
                self.doc.advance(22.0);
            }
            SectionStyle::Boxed => {
                self.stroke_rect(MARGIN - 5.0, y - 5.0, CONTENT_WIDTH + 10.0, 20.0, primary, 1.0);
                self.draw_text(&title, MARGIN + 5.0, font, 11.0, primary);
                self.doc.advance(22.0);
            }
            SectionStyle::Bold | SectionStyle::Simple => {
                self.draw_text(&title, MARGIN, font, 12.0, primary);
                self.doc.advance(18.0);
            }
        }
    }
}
