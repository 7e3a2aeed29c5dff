//! Slug derivation.

/// Derives a URL-safe slug from free text.
///
/// Lowercases, maps whitespace and punctuation runs to single dashes, and
/// drops everything outside `[a-z0-9-]`. Returns an empty string when the
/// input contains no usable characters; callers must treat that as invalid.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.chars() {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    slug
}
