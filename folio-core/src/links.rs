//! Card link handling.
//!
//! Cards carry free-form link strings entered through the admin panel:
//! full URLs, bare domains, protocol-relative URLs, `mailto:`/`tel:` targets
//! and site-internal routes with or without a leading slash. Hosts open
//! external targets in a new browser context and route internal ones.

use once_cell::sync::Lazy;
use regex::Regex;

static SCHEME_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^https?://").expect("static regex"));
static CONTACT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(mailto|tel):").expect("static regex"));
static BARE_DOMAIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[\w.-]+\.[a-z]{2,}([/:?#].*)?$").expect("static regex")
});

/// Where a card link leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Absolute URL or contact link, opened outside the site.
    External(String),
    /// Site route, always starting with `/`.
    Internal(String),
}

/// Canonical form of a link string: contact links and absolute URLs are kept,
/// protocol-relative URLs get `https:`, bare domains get `https://`.
/// Anything else is returned trimmed.
pub fn normalize_link(href: &str) -> String {
    let trimmed = href.trim();
    if CONTACT.is_match(trimmed) || SCHEME_URL.is_match(trimmed) {
        return trimmed.to_string();
    }
    if let Some(rest) = trimmed.strip_prefix("//") {
        return format!("https://{rest}");
    }
    if BARE_DOMAIN.is_match(trimmed) {
        return format!("https://{trimmed}");
    }
    trimmed.to_string()
}

/// Classify a link. `None` for empty links (the card is not clickable).
pub fn classify_link(href: &str) -> Option<LinkTarget> {
    let target = normalize_link(href);
    if target.is_empty() {
        return None;
    }
    if SCHEME_URL.is_match(&target) || CONTACT.is_match(&target) {
        return Some(LinkTarget::External(target));
    }
    if target.starts_with('/') {
        Some(LinkTarget::Internal(target))
    } else {
        Some(LinkTarget::Internal(format!("/{target}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_common_forms() {
        assert_eq!(normalize_link(" https://nature.com "), "https://nature.com");
        assert_eq!(normalize_link("//cdn.example.org/a"), "https://cdn.example.org/a");
        assert_eq!(normalize_link("doi.org/10.1000/182"), "https://doi.org/10.1000/182");
        assert_eq!(normalize_link("MAILTO:me@example.org"), "MAILTO:me@example.org");
        assert_eq!(normalize_link("publications"), "publications");
    }

    #[test]
    fn classifies_targets() {
        assert_eq!(classify_link(""), None);
        assert_eq!(classify_link("   "), None);
        assert_eq!(
            classify_link("www.nature.com"),
            Some(LinkTarget::External("https://www.nature.com".into()))
        );
        assert_eq!(
            classify_link("tel:+82-2-000-0000"),
            Some(LinkTarget::External("tel:+82-2-000-0000".into()))
        );
        assert_eq!(
            classify_link("publications"),
            Some(LinkTarget::Internal("/publications".into()))
        );
        assert_eq!(
            classify_link("/research/metasurfaces"),
            Some(LinkTarget::Internal("/research/metasurfaces".into()))
        );
    }
}
