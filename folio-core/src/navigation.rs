//! Current-page detection for navigation links.

/// Whether a nav link `href` points at the page at `path`. The site root
/// and `index.html` are treated as the same page.
#[must_use]
pub fn is_current_link(path: &str, href: &str) -> bool {
    href == path
        || (path.ends_with('/') && href == "index.html")
        || (href == "/" && path.ends_with("index.html"))
}
