//! Serializes a laid-out `Document` to PDF bytes with printpdf.

use std::collections::HashMap;
use std::io::{BufWriter, Cursor};

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Polygon, Pt,
};
use tracing::debug;

use crate::render::font_metrics::StandardFont;
use crate::render::page::{Document, Element, TextRun, PAGE_HEIGHT, PAGE_WIDTH};
use crate::render::style::Rgb;
use crate::render::RenderError;

const LAYER_NAME: &str = "Layer 1";

fn builtin(font: StandardFont) -> BuiltinFont {
    match font {
        StandardFont::Helvetica => BuiltinFont::Helvetica,
        StandardFont::HelveticaBold => BuiltinFont::HelveticaBold,
        StandardFont::HelveticaOblique => BuiltinFont::HelveticaOblique,
        StandardFont::TimesRoman => BuiltinFont::TimesRoman,
        StandardFont::TimesBold => BuiltinFont::TimesBold,
        StandardFont::TimesItalic => BuiltinFont::TimesItalic,
    }
}

fn mm(pt: f32) -> Mm {
    Mm::from(Pt(pt))
}

fn point(x: f32, y: f32) -> (Point, bool) {
    (Point::new(mm(x), mm(y)), false)
}

fn pdf_color(c: Rgb) -> Color {
    Color::Rgb(printpdf::Rgb::new(c.r, c.g, c.b, None))
}

/// Embeds the standard fonts the document actually uses.
fn embed_fonts(
    pdf: &PdfDocumentReference,
    doc: &Document,
) -> Result<HashMap<StandardFont, IndirectFontRef>, RenderError> {
    let mut fonts = HashMap::new();
    for run in doc.pages().iter().flat_map(|p| p.text_runs()) {
        if fonts.contains_key(&run.font) {
            continue;
        }
        let handle = pdf.add_builtin_font(builtin(run.font)).map_err(|e| {
            RenderError::FontEmbedding(format!("{}: {e}", run.font.postscript_name()))
        })?;
        debug!(font = run.font.postscript_name(), "Embedded standard font");
        fonts.insert(run.font, handle);
    }
    Ok(fonts)
}

fn draw_text(layer: &PdfLayerReference, run: &TextRun, font: &IndirectFontRef) {
    layer.set_fill_color(pdf_color(run.color));
    layer.use_text(run.text.as_str(), run.size, mm(run.x), mm(run.y), font);
}

fn draw_element(
    layer: &PdfLayerReference,
    element: &Element,
    fonts: &HashMap<StandardFont, IndirectFontRef>,
) -> Result<(), RenderError> {
    match element {
        Element::Text(run) => {
            let font = fonts.get(&run.font).ok_or_else(|| {
                RenderError::FontEmbedding(format!(
                    "{} was not embedded",
                    run.font.postscript_name()
                ))
            })?;
            draw_text(layer, run, font);
        }
        Element::Line {
            from,
            to,
            thickness,
            color,
        } => {
            layer.set_outline_color(pdf_color(*color));
            layer.set_outline_thickness(*thickness);
            layer.add_line(Line {
                points: vec![point(from.0, from.1), point(to.0, to.1)],
                is_closed: false,
            });
        }
        Element::Rect {
            x,
            y,
            width,
            height,
            fill,
            border,
        } => {
            let ring = vec![
                point(*x, *y),
                point(x + width, *y),
                point(x + width, y + height),
                point(*x, y + height),
            ];
            if let Some(fill) = fill {
                layer.set_fill_color(pdf_color(*fill));
                layer.add_polygon(Polygon {
                    rings: vec![ring.clone()],
                    mode: PaintMode::Fill,
                    winding_order: WindingOrder::NonZero,
                });
            }
            if let Some((color, thickness)) = border {
                layer.set_outline_color(pdf_color(*color));
                layer.set_outline_thickness(*thickness);
                layer.add_line(Line {
                    points: ring,
                    is_closed: true,
                });
            }
        }
    }
    Ok(())
}

/// Writes every page of `doc` into a fresh PDF and returns the bytes.
pub fn serialize_document(doc: &Document, title: &str) -> Result<Vec<u8>, RenderError> {
    let (pdf, first_page, first_layer) =
        PdfDocument::new(title, mm(PAGE_WIDTH), mm(PAGE_HEIGHT), LAYER_NAME);
    let fonts = embed_fonts(&pdf, doc)?;

    for (i, page) in doc.pages().iter().enumerate() {
        let layer = if i == 0 {
            pdf.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) = pdf.add_page(mm(PAGE_WIDTH), mm(PAGE_HEIGHT), LAYER_NAME);
            pdf.get_page(page_index).get_layer(layer_index)
        };
        for element in &page.elements {
            draw_element(&layer, element, &fonts)?;
        }
    }

    let mut buf = Vec::new();
    {
        let mut writer = BufWriter::new(Cursor::new(&mut buf));
        pdf.save(&mut writer)
            .map_err(|e| RenderError::Serialization(e.to_string()))?;
    }
    Ok(buf)
}
