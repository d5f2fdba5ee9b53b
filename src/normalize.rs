use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Maximum length of the recipient name field (EMV tag 59).
pub const MAX_NAME_LEN: usize = 25;
/// Maximum length of the recipient city field (EMV tag 60).
pub const MAX_CITY_LEN: usize = 15;

/// Reduces free-form text to the restricted alphabet the payload format
/// allows for name and city: uppercase ASCII letters, digits and spaces.
///
/// Uppercase first, then NFD-decompose so accented letters split into a
/// base letter plus combining marks, drop the marks, drop anything still
/// outside `[A-Z0-9 ]`, trim, and truncate to `max_len` codepoints.
/// Returns `None` when nothing survives; the caller decides which
/// validation error that is.
pub fn normalize_field(raw: &str, max_len: usize) -> Option<String> {
    let cleaned: String = raw
        .to_uppercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || *c == ' ')
        .collect();
    let normalized: String = cleaned.trim().chars().take(max_len).collect();

    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}
