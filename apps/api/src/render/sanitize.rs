//! Text sanitization for the single-byte output encoding.
//!
//! The standard fonts are written with a Latin-1 compatible encoding, so
//! typographic punctuation is folded to ASCII first and anything else outside
//! 0x20..=0x7E / 0xA0..=0xFF is dropped. Sanitization never fails.

/// True for characters the output encoding can represent.
pub fn is_printable_latin1(c: char) -> bool {
    matches!(c as u32, 0x20..=0x7E | 0xA0..=0xFF)
}

/// Maps arbitrary text onto the printable Latin-1 subset.
///
/// Idempotent: every substitution produces printable ASCII.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' | '\u{2032}' => out.push('\''),
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' => out.push('"'),
            '\u{2010}'..='\u{2015}' | '\u{2212}' => out.push('-'),
            '\u{2026}' => out.push_str("..."),
            // Triangular bullets
            '\u{25B8}' | '\u{25B9}' | '\u{25BA}' => out.push('>'),
            '\u{25CF}' | '\u{25CB}' | '\u{25A0}' | '\u{25AA}' | '\u{25E6}' | '\u{2022}'
            | '\u{2023}' | '\u{2043}' | '\u{2219}' => out.push('*'),
            '\u{00A0}' | '\u{2007}' | '\u{2009}' | '\u{202F}' => out.push(' '),
            '\u{2190}'..='\u{2193}' => out.push_str("->"),
            c if is_printable_latin1(c) => out.push(c),
            _ => {}
        }
    }
    out
}
