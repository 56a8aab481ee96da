//! Colour codes of the form `#RRGGBB`.

/// Returns true if `code` is a `#` followed by exactly six hex digits.
pub fn is_valid_colour_code(code: &str) -> bool {
    let Some(hex) = code.strip_prefix('#') else {
        return false;
    };
    hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Canonical stored form: `#` followed by upper-case hex digits.
///
/// Returns `None` if the input is not a valid colour code.
pub fn normalize_colour_code(code: &str) -> Option<String> {
    is_valid_colour_code(code).then(|| code.to_ascii_uppercase())
}
