// src/fetcher/mod.rs
// =============================================================================
// This module contains the crawl engine's external collaborators: the HTTP
// fetcher and the HTML link extractor.
//
// Submodules:
// - http: Fetches pages with reqwest and maps every failure to data
// - html: Extracts the URLs a page references, using scraper
//
// The engine in src/crawl never imports reqwest or scraper directly - it
// only sees the FetchOutcome type and plain functions. main.rs wires these
// adapters in; tests wire in mocks.
// =============================================================================

mod html;
mod http;

pub use html::extract_links;
pub use http::{build_client, fetch_page, FetchOutcome};
