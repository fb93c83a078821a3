// src/crawl/mod.rs
// =============================================================================
// This module is the crawl engine.
//
// Submodules:
// - session: The shared state of one crawl (visited registry + path ledger)
// - frontier: The breadth-first scheduler that drives the whole crawl
//
// The split mirrors the two halves of the problem: session is WHAT the
// workers share (and how they share it safely), frontier is WHEN work
// happens (depth levels, batching, the worker pool).
//
// This file (mod.rs) is the module root - it re-exports the public API
// that main.rs and the tests use.
// =============================================================================

mod frontier;
mod session;

pub use frontier::{run_crawl, CrawlOptions};
pub use session::{status_label, CrawlSession, DiscoveryRecord};
