//! Static font-metric tables for the PDF standard fonts used by the templates.
//!
//! Widths are in em units (glyph advance / 1000 from the standard AFM files), so
//! the width of a string at a given point size is `sum(widths) * size`.
//! Tables cover ASCII 0x20..=0x7E (95 printable characters), index = (char as usize) - 32,
//! and the Latin-1 upper half 0xA0..=0xFF (96 characters), index = (char as usize) - 0xA0.
//! Sanitized text never contains anything outside those two ranges; anything else
//! is measured at `average_char_width`.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Font enum
// ────────────────────────────────────────────────────────────────────────────

/// The standard (non-embedded-program) fonts every template draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    TimesRoman,
    TimesBold,
    TimesItalic,
}

impl StandardFont {
    /// PostScript name, as written into the PDF font dictionary.
    pub fn postscript_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::HelveticaOblique => "Helvetica-Oblique",
            StandardFont::TimesRoman => "Times-Roman",
            StandardFont::TimesBold => "Times-Bold",
            StandardFont::TimesItalic => "Times-Italic",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for one standard font.
///
/// Width array slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
pub struct FontMetricTable {
    pub font: StandardFont,
    widths: [f32; 95],
    /// Latin-1 0xA0..=0xFF in WinAnsi order.
    upper_widths: [f32; 96],
    /// Fallback width for characters outside both tables.
    pub average_char_width: f32,
}

impl FontMetricTable {
    /// Measures the advance width of a string in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else if (0xA0..=0xFF).contains(&code) {
                    self.upper_widths[code - 0xA0]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Advance width of a string in points at the given font size.
    pub fn width_at_size(&self, s: &str, size: f32) -> f32 {
        self.measure_str(s) * size
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

#[rustfmt::skip]
const HELVETICA_UPPER: [f32; 96] = [
    // nbsp   ¡      ¢      £      ¤      ¥      ¦      §
    0.278, 0.333, 0.556, 0.556, 0.556, 0.556, 0.260, 0.556,
    // ¨      ©      ª      «      ¬      shy    ®      ¯
    0.333, 0.737, 0.370, 0.556, 0.584, 0.333, 0.737, 0.333,
    // °      ±      ²      ³      ´      µ      ¶      ·
    0.400, 0.584, 0.333, 0.333, 0.333, 0.556, 0.537, 0.278,
    // ¸      ¹      º      »      ¼      ½      ¾      ¿
    0.333, 0.333, 0.365, 0.556, 0.834, 0.834, 0.834, 0.611,
    // À      Á      Â      Ã      Ä      Å      Æ      Ç
    0.667, 0.667, 0.667, 0.667, 0.667, 0.667, 1.000, 0.722,
    // È      É      Ê      Ë      Ì      Í      Î      Ï
    0.667, 0.667, 0.667, 0.667, 0.278, 0.278, 0.278, 0.278,
    // Ð      Ñ      Ò      Ó      Ô      Õ      Ö      ×
    0.722, 0.722, 0.778, 0.778, 0.778, 0.778, 0.778, 0.584,
    // Ø      Ù      Ú      Û      Ü      Ý      Þ      ß
    0.778, 0.722, 0.722, 0.722, 0.722, 0.667, 0.667, 0.611,
    // à      á      â      ã      ä      å      æ      ç
    0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.889, 0.500,
    // è      é      ê      ë      ì      í      î      ï
    0.556, 0.556, 0.556, 0.556, 0.278, 0.278, 0.278, 0.278,
    // ð      ñ      ò      ó      ô      õ      ö      ÷
    0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.584,
    // ø      ù      ú      û      ü      ý      þ      ÿ
    0.611, 0.556, 0.556, 0.556, 0.556, 0.500, 0.556, 0.500,
];

#[rustfmt::skip]
const HELVETICA_BOLD_UPPER: [f32; 96] = [
    // nbsp   ¡      ¢      £      ¤      ¥      ¦      §
    0.278, 0.333, 0.556, 0.556, 0.556, 0.556, 0.280, 0.556,
    // ¨      ©      ª      «      ¬      shy    ®      ¯
    0.333, 0.737, 0.370, 0.556, 0.584, 0.333, 0.737, 0.333,
    // °      ±      ²      ³      ´      µ      ¶      ·
    0.400, 0.584, 0.333, 0.333, 0.333, 0.611, 0.556, 0.278,
    // ¸      ¹      º      »      ¼      ½      ¾      ¿
    0.333, 0.333, 0.365, 0.556, 0.834, 0.834, 0.834, 0.611,
    // À      Á      Â      Ã      Ä      Å      Æ      Ç
    0.722, 0.722, 0.722, 0.722, 0.722, 0.722, 1.000, 0.722,
    // È      É      Ê      Ë      Ì      Í      Î      Ï
    0.667, 0.667, 0.667, 0.667, 0.278, 0.278, 0.278, 0.278,
    // Ð      Ñ      Ò      Ó      Ô      Õ      Ö      ×
    0.722, 0.722, 0.778, 0.778, 0.778, 0.778, 0.778, 0.584,
    // Ø      Ù      Ú      Û      Ü      Ý      Þ      ß
    0.778, 0.722, 0.722, 0.722, 0.722, 0.667, 0.667, 0.611,
    // à      á      â      ã      ä      å      æ      ç
    0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.889, 0.556,
    // è      é      ê      ë      ì      í      î      ï
    0.556, 0.556, 0.556, 0.556, 0.278, 0.278, 0.278, 0.278,
    // ð      ñ      ò      ó      ô      õ      ö      ÷
    0.611, 0.611, 0.611, 0.611, 0.611, 0.611, 0.611, 0.584,
    // ø      ù      ú      û      ü      ý      þ      ÿ
    0.611, 0.611, 0.611, 0.611, 0.611, 0.556, 0.611, 0.556,
];

#[rustfmt::skip]
const TIMES_ROMAN_UPPER: [f32; 96] = [
    // nbsp   ¡      ¢      £      ¤      ¥      ¦      §
    0.250, 0.333, 0.500, 0.500, 0.500, 0.500, 0.200, 0.500,
    // ¨      ©      ª      «      ¬      shy    ®      ¯
    0.333, 0.760, 0.276, 0.500, 0.564, 0.333, 0.760, 0.333,
    // °      ±      ²      ³      ´      µ      ¶      ·
    0.400, 0.564, 0.300, 0.300, 0.333, 0.500, 0.453, 0.250,
    // ¸      ¹      º      »      ¼      ½      ¾      ¿
    0.333, 0.300, 0.310, 0.500, 0.750, 0.750, 0.750, 0.444,
    // À      Á      Â      Ã      Ä      Å      Æ      Ç
    0.722, 0.722, 0.722, 0.722, 0.722, 0.722, 0.889, 0.667,
    // È      É      Ê      Ë      Ì      Í      Î      Ï
    0.611, 0.611, 0.611, 0.611, 0.333, 0.333, 0.333, 0.333,
    // Ð      Ñ      Ò      Ó      Ô      Õ      Ö      ×
    0.722, 0.722, 0.722, 0.722, 0.722, 0.722, 0.722, 0.564,
    // Ø      Ù      Ú      Û      Ü      Ý      Þ      ß
    0.722, 0.722, 0.722, 0.722, 0.722, 0.722, 0.556, 0.500,
    // à      á      â      ã      ä      å      æ      ç
    0.444, 0.444, 0.444, 0.444, 0.444, 0.444, 0.667, 0.444,
    // è      é      ê      ë      ì      í      î      ï
    0.444, 0.444, 0.444, 0.444, 0.278, 0.278, 0.278, 0.278,
    // ð      ñ      ò      ó      ô      õ      ö      ÷
    0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.564,
    // ø      ù      ú      û      ü      ý      þ      ÿ
    0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500,
];

#[rustfmt::skip]
const TIMES_BOLD_UPPER: [f32; 96] = [
    // nbsp   ¡      ¢      £      ¤      ¥      ¦      §
    0.250, 0.333, 0.500, 0.500, 0.500, 0.500, 0.220, 0.500,
    // ¨      ©      ª      «      ¬      shy    ®      ¯
    0.333, 0.747, 0.300, 0.500, 0.570, 0.333, 0.747, 0.333,
    // °      ±      ²      ³      ´      µ      ¶      ·
    0.400, 0.570, 0.300, 0.300, 0.333, 0.556, 0.540, 0.250,
    // ¸      ¹      º      »      ¼      ½      ¾      ¿
    0.333, 0.300, 0.330, 0.500, 0.750, 0.750, 0.750, 0.500,
    // À      Á      Â      Ã      Ä      Å      Æ      Ç
    0.722, 0.722, 0.722, 0.722, 0.722, 0.722, 1.000, 0.722,
    // È      É      Ê      Ë      Ì      Í      Î      Ï
    0.667, 0.667, 0.667, 0.667, 0.389, 0.389, 0.389, 0.389,
    // Ð      Ñ      Ò      Ó      Ô      Õ      Ö      ×
    0.722, 0.722, 0.778, 0.778, 0.778, 0.778, 0.778, 0.570,
    // Ø      Ù      Ú      Û      Ü      Ý      Þ      ß
    0.778, 0.722, 0.722, 0.722, 0.722, 0.722, 0.611, 0.556,
    // à      á      â      ã      ä      å      æ      ç
    0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.722, 0.444,
    // è      é      ê      ë      ì      í      î      ï
    0.444, 0.444, 0.444, 0.444, 0.278, 0.278, 0.278, 0.278,
    // ð      ñ      ò      ó      ô      õ      ö      ÷
    0.500, 0.556, 0.500, 0.500, 0.500, 0.500, 0.500, 0.570,
    // ø      ù      ú      û      ü      ý      þ      ÿ
    0.500, 0.556, 0.556, 0.556, 0.556, 0.500, 0.556, 0.500,
];

#[rustfmt::skip]
const TIMES_ITALIC_UPPER: [f32; 96] = [
    // nbsp   ¡      ¢      £      ¤      ¥      ¦      §
    0.250, 0.389, 0.500, 0.500, 0.500, 0.500, 0.275, 0.500,
    // ¨      ©      ª      «      ¬      shy    ®      ¯
    0.333, 0.760, 0.276, 0.500, 0.675, 0.333, 0.760, 0.333,
    // °      ±      ²      ³      ´      µ      ¶      ·
    0.400, 0.675, 0.300, 0.300, 0.333, 0.500, 0.523, 0.250,
    // ¸      ¹      º      »      ¼      ½      ¾      ¿
    0.333, 0.300, 0.310, 0.500, 0.750, 0.750, 0.750, 0.500,
    // À      Á      Â      Ã      Ä      Å      Æ      Ç
    0.611, 0.611, 0.611, 0.611, 0.611, 0.611, 0.889, 0.667,
    // È      É      Ê      Ë      Ì      Í      Î      Ï
    0.611, 0.611, 0.611, 0.611, 0.333, 0.333, 0.333, 0.333,
    // Ð      Ñ      Ò      Ó      Ô      Õ      Ö      ×
    0.722, 0.667, 0.722, 0.722, 0.722, 0.722, 0.722, 0.675,
    // Ø      Ù      Ú      Û      Ü      Ý      Þ      ß
    0.722, 0.722, 0.722, 0.722, 0.722, 0.556, 0.611, 0.500,
    // à      á      â      ã      ä      å      æ      ç
    0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.667, 0.444,
    // è      é      ê      ë      ì      í      î      ï
    0.444, 0.444, 0.444, 0.444, 0.278, 0.278, 0.278, 0.278,
    // ð      ñ      ò      ó      ô      õ      ö      ÷
    0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.675,
    // ø      ù      ú      û      ü      ý      þ      ÿ
    0.500, 0.500, 0.500, 0.500, 0.500, 0.444, 0.500, 0.444,
];

/// Helvetica and Helvetica-Oblique share advance widths.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [f32; 95] = [
    // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
    0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
    // 0      1      2      3      4      5      6      7      8      9
    0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
    // :      ;      <      =      >      ?      @
    0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
    // A      B      C      D      E      F      G      H      I      J      K      L      M
    0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
    // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
    0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
    // [      \      ]      ^      _      `
    0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
    // a      b      c      d      e      f      g      h      i      j      k      l      m
    0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
    // n      o      p      q      r      s      t      u      v      w      x      y      z
    0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
    // {      |      }      ~
    0.334, 0.260, 0.334, 0.584,
];

static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    font: StandardFont::Helvetica,
    widths: HELVETICA_WIDTHS,
    upper_widths: HELVETICA_UPPER,
    average_char_width: 0.556,
};

static HELVETICA_OBLIQUE_TABLE: FontMetricTable = FontMetricTable {
    font: StandardFont::HelveticaOblique,
    widths: HELVETICA_WIDTHS,
    upper_widths: HELVETICA_UPPER,
    average_char_width: 0.556,
};

static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    font: StandardFont::HelveticaBold,
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.333, 0.474, 0.556, 0.556, 0.889, 0.722, 0.238, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.333, 0.333, 0.584, 0.584, 0.584, 0.611, 0.975,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.722, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.556, 0.722, 0.611, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.584, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.611, 0.556, 0.611, 0.556, 0.333, 0.611, 0.611, 0.278, 0.278, 0.556, 0.278, 0.889,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.611, 0.611, 0.611, 0.611, 0.389, 0.556, 0.333, 0.611, 0.556, 0.778, 0.556, 0.556, 0.500,
        // {      |      }      ~
        0.389, 0.280, 0.389, 0.584,
    ],
    upper_widths: HELVETICA_BOLD_UPPER,
    average_char_width: 0.611,
};

static TIMES_ROMAN_TABLE: FontMetricTable = FontMetricTable {
    font: StandardFont::TimesRoman,
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.250, 0.333, 0.408, 0.500, 0.500, 0.833, 0.778, 0.180, 0.333, 0.333, 0.500, 0.564, 0.250, 0.333, 0.250, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.564, 0.564, 0.564, 0.444, 0.921,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.667, 0.667, 0.722, 0.611, 0.556, 0.722, 0.722, 0.333, 0.389, 0.722, 0.611, 0.889,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.722, 0.556, 0.722, 0.667, 0.556, 0.611, 0.722, 0.722, 0.944, 0.722, 0.722, 0.611,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.469, 0.500, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.444, 0.500, 0.444, 0.500, 0.444, 0.333, 0.500, 0.500, 0.278, 0.278, 0.500, 0.278, 0.778,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.500, 0.500, 0.500, 0.500, 0.333, 0.389, 0.278, 0.500, 0.500, 0.722, 0.500, 0.500, 0.444,
        // {      |      }      ~
        0.480, 0.200, 0.480, 0.541,
    ],
    upper_widths: TIMES_ROMAN_UPPER,
    average_char_width: 0.500,
};

static TIMES_BOLD_TABLE: FontMetricTable = FontMetricTable {
    font: StandardFont::TimesBold,
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.250, 0.333, 0.555, 0.500, 0.500, 1.000, 0.833, 0.278, 0.333, 0.333, 0.500, 0.570, 0.250, 0.333, 0.250, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500,
        // :      ;      <      =      >      ?      @
        0.333, 0.333, 0.570, 0.570, 0.570, 0.500, 0.930,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.778, 0.389, 0.500, 0.778, 0.667, 0.944,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.611, 0.778, 0.722, 0.556, 0.667, 0.722, 0.722, 1.000, 0.722, 0.722, 0.667,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.581, 0.500, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.500, 0.556, 0.444, 0.556, 0.444, 0.333, 0.500, 0.556, 0.278, 0.333, 0.556, 0.278, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.500, 0.556, 0.556, 0.444, 0.389, 0.333, 0.556, 0.500, 0.722, 0.500, 0.500, 0.444,
        // {      |      }      ~
        0.394, 0.220, 0.394, 0.520,
    ],
    upper_widths: TIMES_BOLD_UPPER,
    average_char_width: 0.540,
};

static TIMES_ITALIC_TABLE: FontMetricTable = FontMetricTable {
    font: StandardFont::TimesItalic,
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.250, 0.333, 0.420, 0.500, 0.500, 0.833, 0.778, 0.214, 0.333, 0.333, 0.500, 0.675, 0.250, 0.333, 0.250, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500,
        // :      ;      <      =      >      ?      @
        0.333, 0.333, 0.675, 0.675, 0.675, 0.500, 0.920,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.611, 0.611, 0.667, 0.722, 0.611, 0.611, 0.722, 0.722, 0.333, 0.444, 0.667, 0.556, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.667, 0.722, 0.611, 0.722, 0.611, 0.500, 0.556, 0.722, 0.611, 0.833, 0.611, 0.556, 0.556,
        // [      \      ]      ^      _      `
        0.389, 0.278, 0.389, 0.422, 0.500, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.500, 0.500, 0.444, 0.500, 0.444, 0.278, 0.500, 0.500, 0.278, 0.278, 0.444, 0.278, 0.722,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.500, 0.500, 0.500, 0.500, 0.389, 0.389, 0.278, 0.500, 0.444, 0.667, 0.444, 0.444, 0.389,
        // {      |      }      ~
        0.400, 0.275, 0.400, 0.541,
    ],
    upper_widths: TIMES_ITALIC_UPPER,
    average_char_width: 0.500,
};

/// Returns the static metric table for a standard font.
pub fn get_metrics(font: StandardFont) -> &'static FontMetricTable {
    match font {
        StandardFont::Helvetica => &HELVETICA_TABLE,
        StandardFont::HelveticaBold => &HELVETICA_BOLD_TABLE,
        StandardFont::HelveticaOblique => &HELVETICA_OBLIQUE_TABLE,
        StandardFont::TimesRoman => &TIMES_ROMAN_TABLE,
        StandardFont::TimesBold => &TIMES_BOLD_TABLE,
        StandardFont::TimesItalic => &TIMES_ITALIC_TABLE,
    }
}

/// Width of `text` in points when set in `font` at `size`.
pub fn text_width(text: &str, font: StandardFont, size: f32) -> f32 {
    get_metrics(font).width_at_size(text, size)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
