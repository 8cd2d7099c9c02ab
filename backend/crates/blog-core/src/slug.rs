/// Derive a URL slug from a post title.
///
/// ASCII letters and digits are kept (lowercased); every other run of
/// characters becomes a single `-`. Titles with nothing usable map to `post`.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        String::from("post")
    } else {
        slug
    }
}

/// Slug for the n-th collision of `base` (n starts at 2)
pub fn with_suffix(base: &str, n: u32) -> String {
    format!("{base}-{n}")
}
