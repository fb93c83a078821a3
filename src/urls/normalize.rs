// src/urls/normalize.rs
// =============================================================================
// This module canonicalizes URLs into deduplication keys.
//
// The same page is usually reachable under several spellings:
//   https://example.com/docs
//   https://example.com/docs/
//   https://example.com/docs#install
// All three must count as ONE page, or the crawler would fetch it three
// times. normalize_url() collapses them into a single key:
//
//   scheme://host[:port]<path without trailing slash>[?query]
//
// The query string is kept - /search?q=a and /search?q=b really are
// different pages. The fragment (#...) is dropped - it never reaches the
// server.
//
// The key is used ONLY for deduplication, never for display or fetching.
// =============================================================================

use url::Url;

// Builds the deduplication key for a URL
//
// Parameters:
//   url: any absolute URL (e.g., "https://example.com/docs/")
//
// Returns: the normalized key as a String
//
// Examples:
//   "https://example.com/docs/"      -> "https://example.com/docs"
//   "https://example.com/docs#intro" -> "https://example.com/docs"
//   "https://example.com/"           -> "https://example.com"
//   "https://example.com/s?q=rust"   -> "https://example.com/s?q=rust"
//
// There is no error path: input that doesn't parse as a URL is returned
// as-is. Whether a URL is actually fetchable is the fetcher's concern,
// not ours - a garbage key still deduplicates consistently against itself.
pub fn normalize_url(url: &str) -> String {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(_) => return url.to_string(),
    };

    let mut key = format!("{}://{}", parsed.scheme(), parsed.host_str().unwrap_or(""));

    // Non-default ports distinguish servers, so they stay in the key
    if let Some(port) = parsed.port() {
        key.push(':');
        key.push_str(&port.to_string());
    }

    // Strip a single trailing slash so /docs/ and /docs collapse.
    // The root path "/" becomes the empty string, leaving just scheme://host
    let path = parsed.path();
    key.push_str(path.strip_suffix('/').unwrap_or(path));

    if let Some(query) = parsed.query() {
        key.push('?');
        key.push_str(query);
    }

    key
}
