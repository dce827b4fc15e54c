use unicode_normalization::UnicodeNormalization;

/// Repair glyph-level artifacts in extracted page text.
///
/// Applies Unicode NFC normalization, expands the Latin ligatures
/// (ff, fi, fl, ffi, ffl) and drops U+FFFD replacement characters left by
/// undecodable glyphs. Whitespace is not touched.
pub fn repair_glyphs(text: &str) -> String {
    let ligatures = [
        ('\u{FB00}', "ff"),
        ('\u{FB01}', "fi"),
        ('\u{FB02}', "fl"),
        ('\u{FB03}', "ffi"),
        ('\u{FB04}', "ffl"),
    ];

    let mut result = String::with_capacity(text.len());
    for c in text.nfc() {
        if c == '\u{FFFD}' {
            continue;
        }
        match ligatures.iter().find(|(lig, _)| *lig == c) {
            Some((_, replacement)) => result.push_str(replacement),
            None => result.push(c),
        }
    }

    result
}
