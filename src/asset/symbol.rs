//! Identifier derivation: relative path → C symbol name.
//!
//! ```text
//! css/app.css        -> CSS__APP_CSS
//! js/vendor-min.js   -> JS__VENDOR_MIN_JS
//! index.html         -> INDEX_HTML
//! 404.html           -> _404_HTML
//! ```
//!
//! Distinct paths can normalize to the same name (`a-b.js` and `a.b.js`);
//! `Manifest` reports that as a collision.

/// Derive the array identifier for a `/`-separated relative path.
pub fn derive(rel_path: &str) -> String {
    let mut symbol = String::with_capacity(rel_path.len() + 4);

    for ch in rel_path.chars() {
        match ch {
            '/' => symbol.push_str("__"),
            c if c.is_ascii_alphanumeric() => symbol.push(c.to_ascii_uppercase()),
            _ => symbol.push('_'),
        }
    }

    if symbol.starts_with(|c: char| c.is_ascii_digit()) {
        symbol.insert(0, '_');
    }
    symbol
}

/// Check that a name is usable as a C identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
