// src/urls/domain.rs
// =============================================================================
// This module decides which URLs belong to the crawl.
//
// site-scout never leaves the site it was pointed at: a URL is "in-domain"
// when its host is the base host itself or any subdomain of it.
//
//   base host "example.com" matches:
//     example.com, www.example.com, docs.api.example.com
//   and does NOT match:
//     other.com, notexample.com ("...notexample.com" merely ends with the
//     same letters - the dot check catches this)
// =============================================================================

use url::Url;

// Checks whether a URL's host is the base host or a subdomain of it
//
// Parameters:
//   url: the absolute URL to test
//   base_host: the crawl's base host (e.g., "example.com")
//
// Returns: true if the URL may be crawled, false otherwise
//
// Pure function: no side effects, no network access. URLs that don't parse
// or have no host (like "mailto:" links) are simply not in-domain.
pub fn is_same_domain(url: &str, base_host: &str) -> bool {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(_) => return false,
    };

    match parsed.host_str() {
        Some(host) => host == base_host || host.ends_with(&format!(".{}", base_host)),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_host_matches() {
        assert!(is_same_domain("https://a.com/p", "a.com"));
    }

    #[test]
    fn test_subdomain_matches() {
        assert!(is_same_domain("https://sub.a.com/p", "a.com"));
        assert!(is_same_domain("https://deep.sub.a.com/p", "a.com"));
    }

    #[test]
    fn test_other_host_does_not_match() {
        assert!(!is_same_domain("https://other.com/p", "a.com"));
    }

    #[test]
    fn test_lookalike_suffix_does_not_match() {
        // "nota.com" ends with "a.com" but is a different domain
        assert!(!is_same_domain("https://nota.com/p", "a.com"));
    }

    #[test]
    fn test_unparseable_url_does_not_match() {
        assert!(!is_same_domain("not a url", "a.com"));
    }

    #[test]
    fn test_hostless_url_does_not_match() {
        assert!(!is_same_domain("mailto:someone@a.com", "a.com"));
    }
}
