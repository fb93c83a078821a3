// src/fetcher/html.rs
// =============================================================================
// This module extracts links from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// A page references other URLs from more places than just <a> tags, and
// every one of them is a path worth discovering: stylesheets, scripts,
// images and form targets all count. We read five tag/attribute pairs:
//
//   <a href>  <link href>  <script src>  <img src>  <form action>
//
// Relative references are resolved against the page's own URL with the
// `url` crate, the same way a browser does it.
// =============================================================================

use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

// Which elements carry URLs, and in which attribute
const LINK_SOURCES: [(&str, &str); 5] = [
    ("a[href]", "href"),
    ("link[href]", "href"),
    ("script[src]", "src"),
    ("img[src]", "src"),
    ("form[action]", "action"),
];

// Extracts all absolute HTTP(S) URLs referenced by a page
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//   base_url: the URL of the page itself (for resolving relative links)
//
// Returns: Vec<String> of absolute URLs, deduplicated within this page
//
// Example:
//   html = "<a href='/docs'>Docs</a><img src='logo.png'>"
//   base_url = "https://example.com"
//   result = ["https://example.com/docs", "https://example.com/logo.png"]
pub fn extract_links(html: &str, base_url: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    // Parse the base URL once; without it relative links are unresolvable
    let base = match Url::parse(base_url) {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Warning: Invalid base URL: {}", base_url);
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for (css, attr) in LINK_SOURCES {
        // Selector::parse returns Result, so we use .unwrap() which panics
        // on error. This is OK here because our selectors are constants and
        // known to be valid.
        let selector = Selector::parse(css).unwrap();

        for element in document.select(&selector) {
            if let Some(value) = element.value().attr(attr) {
                if let Some(absolute_url) = resolve_url(&base, value) {
                    // Only keep HTTP/HTTPS links, once each
                    if is_crawlable_link(&absolute_url) && seen.insert(absolute_url.clone()) {
                        links.push(absolute_url);
                    }
                }
            }
        }
    }

    links
}

// Resolves a possibly-relative reference to an absolute URL
//
// Examples:
//   base = "https://example.com/page"
//   href = "/docs" -> Some("https://example.com/docs")
//   href = "../other" -> Some("https://example.com/other")
//   href = "https://other.com" -> Some("https://other.com/")
//   href = "#section" -> None (same page)
//
// References that can't resolve to a URL are dropped silently - they
// never reach the crawl engine.
fn resolve_url(base: &Url, href: &str) -> Option<String> {
    // Skip same-page anchors and special protocols
    if href.starts_with('#')
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("javascript:")
    {
        return None;
    }

    // Url::join handles both absolute and relative references
    match base.join(href) {
        Ok(url) => Some(url.to_string()),
        Err(_) => None,
    }
}

// Checks if a URL is something the crawler could fetch
//
// Filters out data:, file:, ftp: and anything else that isn't plain HTTP
fn is_crawlable_link(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_absolute_link() {
        let html = r#"<a href="https://www.rust-lang.org">Rust</a>"#;
        let links = extract_links(html, "https://example.com");
        assert_eq!(links, vec!["https://www.rust-lang.org/"]);
    }

    #[test]
    fn test_resolve_relative_link() {
        let html = r#"<a href="/docs">Docs</a>"#;
        let links = extract_links(html, "https://example.com/page");
        assert_eq!(links, vec!["https://example.com/docs"]);
    }

    #[test]
    fn test_all_five_sources_are_read() {
        let html = r#"
            <a href="/a">A</a>
            <link rel="stylesheet" href="/style.css">
            <script src="/app.js"></script>
            <img src="/logo.png">
            <form action="/submit"></form>
        "#;
        let links = extract_links(html, "https://example.com");
        assert_eq!(links.len(), 5);
        assert!(links.contains(&"https://example.com/style.css".to_string()));
        assert!(links.contains(&"https://example.com/submit".to_string()));
    }

    #[test]
    fn test_duplicates_within_a_page_collapse() {
        let html = r#"
            <a href="/docs">Docs</a>
            <a href="/docs">Documentation</a>
        "#;
        let links = extract_links(html, "https://example.com");
        assert_eq!(links, vec!["https://example.com/docs"]);
    }

    #[test]
    fn test_skip_anchor_and_special_protocols() {
        let html = r##"
            <a href="#section">Jump</a>
            <a href="mailto:test@example.com">Email</a>
            <a href="tel:+15551234567">Call</a>
            <a href="javascript:void(0)">Click</a>
        "##;
        let links = extract_links(html, "https://example.com");
        assert!(links.is_empty());
    }

    #[test]
    fn test_non_http_schemes_are_dropped() {
        let html = r#"<a href="ftp://files.example.com/x">FTP</a>"#;
        let links = extract_links(html, "https://example.com");
        assert!(links.is_empty());
    }

    #[test]
    fn test_invalid_base_url_yields_nothing() {
        let html = r#"<a href="/docs">Docs</a>"#;
        let links = extract_links(html, "not a url");
        assert!(links.is_empty());
    }
}
