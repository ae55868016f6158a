use std::fmt::Write;

/// Returns true for characters that may appear unescaped in an ident: `[a-zA-Z0-9_-]`.
pub fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Escape one piece of text for use inside a custom ident.
///
/// Works on UTF-16 code units, so characters outside the BMP come out as two
/// escaped surrogates. Hex escapes are lowercase, unpadded and unterminated.
///
/// ```
/// use custom_ident::escape;
///
/// assert_eq!(escape("my custom ident!"), "my_custom_ident\\21");
/// assert_eq!(escape("a.b?c"), "a\\.b\\?c");
/// ```
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for unit in text.encode_utf16() {
        match char::from_u32(u32::from(unit)) {
            Some(c) if is_ident_char(c) => out.push(c),
            Some(' ') => out.push('_'),
            Some(c @ ('.' | '?')) => {
                out.push('\\');
                out.push(c);
            },
            _ => {
                let _ = write!(out, "\\{unit:x}");
            },
        }
    }
    out
}
