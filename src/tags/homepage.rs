//! Homepage-link tag content: a single URL, optionally schemeless.

use crate::locale::Locale;
use crate::tags::parser::LinkSite;

/// Trim the URL and default the scheme to `https://` when none is present.
/// Returns `None` for blank content, in which case the tag renders nothing.
pub fn normalize_url(content: &str) -> Option<String> {
    let url = content.trim();
    if url.is_empty() {
        return None;
    }
    if url.contains("://") || url.starts_with("//") {
        Some(url.to_string())
    } else {
        Some(format!("https://{url}"))
    }
}

/// Anchor text for a link tag. Named platforms use their product name; the
/// generic `homepage`/`website` tags use the localized affordance.
pub fn link_label(site: LinkSite, locale: Locale) -> &'static str {
    match site {
        LinkSite::Homepage | LinkSite::Website => locale.visit_homepage(),
        LinkSite::Github => "GitHub",
        LinkSite::Scholar => "Google Scholar",
        LinkSite::Linkedin => "LinkedIn",
        LinkSite::Researchgate => "ResearchGate",
    }
}
