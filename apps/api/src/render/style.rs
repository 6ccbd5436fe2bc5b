//! Template definitions and style resolution.
//!
//! The template set is closed: `TemplateId` enumerates it and each variant owns an
//! immutable `TemplateDefinition`. Unknown ids resolve to `Modern`. User overrides
//! are layered onto a copy of the palette; definitions are never mutated.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::render::font_metrics::StandardFont;

/// Default body line height in points.
pub const DEFAULT_LINE_HEIGHT: f32 = 14.0;

/// Color used when an override is not a valid `#RRGGBB` string.
pub const FALLBACK_OVERRIDE_COLOR: Rgb = Rgb::new(0.1, 0.1, 0.3);

// ────────────────────────────────────────────────────────────────────────────
// Primitive style types
// ────────────────────────────────────────────────────────────────────────────

/// RGB color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Blends toward white, keeping `amount` of the original color.
    pub fn tint(&self, amount: f32) -> Rgb {
        let mix = |c: f32| 1.0 - (1.0 - c) * amount;
        Rgb::new(mix(self.r), mix(self.g), mix(self.b))
    }
}

/// Parses `#RRGGBB` (case-insensitive, `#` optional).
pub fn parse_hex_color(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .ok()
            .map(|v| f32::from(v) / 255.0)
    };
    Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Lenient variant used for user overrides: malformed input yields the fallback color.
pub fn hex_to_rgb(hex: &str) -> Rgb {
    parse_hex_color(hex).unwrap_or(FALLBACK_OVERRIDE_COLOR)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub text: Rgb,
    pub accent: Rgb,
    pub background: Rgb,
    pub header_bg: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSet {
    pub header: StandardFont,
    pub body: StandardFont,
    pub accent: StandardFont,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderStyle {
    ColoredBar,
    Centered,
    LeftAligned,
    Sidebar,
    TwoColumn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionStyle {
    Underlined,
    Colored,
    Boxed,
    Bold,
    Simple,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateLayout {
    pub header_style: HeaderStyle,
    pub section_style: SectionStyle,
    pub bullet_glyph: char,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateDefinition {
    pub name: &'static str,
    pub colors: Palette,
    pub fonts: FontSet,
    pub layout: TemplateLayout,
}

// ────────────────────────────────────────────────────────────────────────────
// Template set
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    Modern,
    Classic,
    Minimal,
    Creative,
    Professional,
}

const HELVETICA_SET: FontSet = FontSet {
    header: StandardFont::HelveticaBold,
    body: StandardFont::Helvetica,
    accent: StandardFont::HelveticaOblique,
};

const TIMES_SET: FontSet = FontSet {
    header: StandardFont::TimesBold,
    body: StandardFont::TimesRoman,
    accent: StandardFont::TimesItalic,
};

static MODERN: TemplateDefinition = TemplateDefinition {
    name: "Modern",
    colors: Palette {
        primary: Rgb::new(0.04, 0.52, 0.89),
        secondary: Rgb::new(0.4, 0.4, 0.4),
        text: Rgb::new(0.1, 0.1, 0.1),
        accent: Rgb::new(0.04, 0.52, 0.89),
        background: Rgb::WHITE,
        header_bg: Rgb::new(0.04, 0.52, 0.89),
    },
    fonts: HELVETICA_SET,
    layout: TemplateLayout {
        header_style: HeaderStyle::ColoredBar,
        section_style: SectionStyle::Underlined,
        bullet_glyph: '\u{25CF}',
    },
};

static CLASSIC: TemplateDefinition = TemplateDefinition {
    name: "Classic",
    colors: Palette {
        primary: Rgb::new(0.1, 0.1, 0.3),
        secondary: Rgb::new(0.3, 0.3, 0.3),
        text: Rgb::new(0.15, 0.15, 0.15),
        accent: Rgb::new(0.2, 0.4, 0.6),
        background: Rgb::WHITE,
        header_bg: Rgb::WHITE,
    },
    fonts: TIMES_SET,
    layout: TemplateLayout {
        header_style: HeaderStyle::Centered,
        section_style: SectionStyle::Bold,
        bullet_glyph: '\u{2022}',
    },
};

static MINIMAL: TemplateDefinition = TemplateDefinition {
    name: "Minimal",
    colors: Palette {
        primary: Rgb::new(0.0, 0.0, 0.0),
        secondary: Rgb::new(0.5, 0.5, 0.5),
        text: Rgb::new(0.2, 0.2, 0.2),
        accent: Rgb::new(0.3, 0.3, 0.3),
        background: Rgb::WHITE,
        header_bg: Rgb::WHITE,
    },
    fonts: FontSet {
        header: StandardFont::HelveticaBold,
        body: StandardFont::Helvetica,
        accent: StandardFont::Helvetica,
    },
    layout: TemplateLayout {
        header_style: HeaderStyle::LeftAligned,
        section_style: SectionStyle::Simple,
        bullet_glyph: '-',
    },
};

static CREATIVE: TemplateDefinition = TemplateDefinition {
    name: "Creative",
    colors: Palette {
        primary: Rgb::new(0.56, 0.27, 0.68),
        secondary: Rgb::new(0.4, 0.4, 0.45),
        text: Rgb::new(0.2, 0.2, 0.25),
        accent: Rgb::new(0.93, 0.46, 0.19),
        background: Rgb::WHITE,
        header_bg: Rgb::new(0.56, 0.27, 0.68),
    },
    fonts: HELVETICA_SET,
    layout: TemplateLayout {
        header_style: HeaderStyle::Sidebar,
        section_style: SectionStyle::Colored,
        bullet_glyph: '\u{25B8}',
    },
};

static PROFESSIONAL: TemplateDefinition = TemplateDefinition {
    name: "Professional",
    colors: Palette {
        primary: Rgb::new(0.13, 0.27, 0.42),
        secondary: Rgb::new(0.35, 0.35, 0.35),
        text: Rgb::new(0.15, 0.15, 0.15),
        accent: Rgb::new(0.18, 0.55, 0.34),
        background: Rgb::WHITE,
        header_bg: Rgb::new(0.13, 0.27, 0.42),
    },
    fonts: TIMES_SET,
    layout: TemplateLayout {
        header_style: HeaderStyle::TwoColumn,
        section_style: SectionStyle::Boxed,
        bullet_glyph: '\u{25A0}',
    },
};

impl TemplateId {
    pub const DEFAULT: TemplateId = TemplateId::Modern;

    pub const ALL: [TemplateId; 5] = [
        TemplateId::Modern,
        TemplateId::Classic,
        TemplateId::Minimal,
        TemplateId::Creative,
        TemplateId::Professional,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Modern => "modern",
            TemplateId::Classic => "classic",
            TemplateId::Minimal => "minimal",
            TemplateId::Creative => "creative",
            TemplateId::Professional => "professional",
        }
    }

    pub fn parse(id: &str) -> Option<TemplateId> {
        Self::ALL.into_iter().find(|t| t.as_str() == id)
    }

    /// Like `parse`, but unknown ids fall back to the default template.
    pub fn resolve(id: &str) -> TemplateId {
        Self::parse(id).unwrap_or(Self::DEFAULT)
    }

    pub fn definition(&self) -> &'static TemplateDefinition {
        match self {
            TemplateId::Modern => &MODERN,
            TemplateId::Classic => &CLASSIC,
            TemplateId::Minimal => &MINIMAL,
            TemplateId::Creative => &CREATIVE,
            TemplateId::Professional => &PROFESSIONAL,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Overrides and resolution
// ────────────────────────────────────────────────────────────────────────────

/// User-supplied customization layered over a template.
///
/// Deserialization never fails on a field's value: blank or non-string colors
/// and non-numeric spacing read as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleOverride {
    /// Replaces primary, headerBg and accent.
    #[serde(deserialize_with = "lenient_color")]
    pub primary_color: Option<String>,
    /// Replaces accent only; applied after `primary_color`.
    #[serde(deserialize_with = "lenient_color")]
    pub accent_color: Option<String>,
    /// Accepts a number or a numeric string.
    #[serde(deserialize_with = "lenient_spacing")]
    pub line_spacing: Option<f32>,
}

fn lenient_color<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}

fn lenient_spacing<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f32>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Number(n) => n.as_f64().map(|v| v as f32),
        Value::String(s) => s.trim().parse::<f32>().ok(),
        _ => None,
    })
}

/// Non-blank override value, if any.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// Fully resolved style for one render call.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub template: TemplateId,
    pub colors: Palette,
    pub fonts: FontSet,
    pub layout: TemplateLayout,
    pub line_height: f32,
}

impl ResolvedStyle {
    /// Bullet glyph as a string, before sanitization.
    pub fn bullet(&self) -> String {
        self.layout.bullet_glyph.to_string()
    }
}

pub fn resolve_style(template_id: &str, overrides: &StyleOverride) -> ResolvedStyle {
    let template = TemplateId::resolve(template_id);
    let definition = template.definition();

    let mut colors = definition.colors;
    if let Some(primary) = present(overrides.primary_color.as_deref()) {
        let color = hex_to_rgb(primary);
        colors.primary = color;
        colors.header_bg = color;
        colors.accent = color;
    }
    if let Some(accent) = present(overrides.accent_color.as_deref()) {
        colors.accent = hex_to_rgb(accent);
    }

    let line_height = overrides
        .line_spacing
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(DEFAULT_LINE_HEIGHT);

    ResolvedStyle {
        template,
        colors,
        fonts: definition.fonts,
        layout: definition.layout,
        line_height,
    }
}

/// Entry in the template picker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSummary {
    pub id: TemplateId,
    pub name: &'static str,
    pub header_style: HeaderStyle,
    pub section_style: SectionStyle,
}

pub fn list_templates() -> Vec<TemplateSummary> {
    TemplateId::ALL
        .into_iter()
        .map(|id| {
            let def = id.definition();
            TemplateSummary {
                id,
                name: def.name,
                header_style: def.layout.header_style,
                section_style: def.layout.section_style,
            }
        })
        .collect()
}
