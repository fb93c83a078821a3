// src/crawl/frontier.rs
// =============================================================================
// This module is the breadth-first crawl engine.
//
// How it works, one depth level at a time:
// 1. Pull EVERY queued entry at the current depth out of the frontier
// 2. Stop entirely once that depth exceeds the configured maximum
// 3. Fan the batch out across a bounded pool of concurrent workers
// 4. Wait for the whole batch - the per-level barrier - then union the
//    link sets the workers returned
// 5. Enqueue each new in-domain link at depth + 1 and repeat
//
// Each worker does: normalize -> claim -> domain check -> fetch -> record
// -> extract links. Losing the claim means another worker already owns the
// URL, so the loser simply returns no links.
//
// The frontier itself is owned by this single coordinating task. Workers
// never touch it - they hand their links back through the stream, and only
// the coordinator enqueues. The only state workers share is the
// CrawlSession (visited set + ledger).
//
// The fetch and extract steps are passed in as plain functions. Production
// wires in the reqwest/scraper adapters from src/fetcher; tests wire in
// closures over in-memory page maps and drive the whole engine without a
// network.
//
// Rust concepts:
// - Generics with trait bounds: The engine works with any fetch function
// - buffer_unordered(W): Run at most W futures at once, like a worker pool
// - VecDeque: Double-ended queue, perfect for breadth-first traversal
// =============================================================================

use anyhow::{anyhow, Result};
use futures::stream::{self, StreamExt};
use std::collections::VecDeque;
use std::future::Future;
use url::Url;

use super::session::{status_label, CrawlSession};
use crate::fetcher::FetchOutcome;
use crate::urls::{is_same_domain, normalize_url};

// Knobs for one crawl run
#[derive(Debug, Clone)]
pub struct CrawlOptions {
    /// Maximum link-depth to crawl, inclusive (the seed is depth 0)
    pub max_depth: usize,
    /// How many fetches may be in flight at once
    pub workers: usize,
}

// One unit of pending work: a URL and how many hops from the seed it is
//
// Created when a link survives the enqueue filters, consumed exactly once
// by a worker, never mutated in between.
#[derive(Debug, Clone)]
struct FrontierEntry {
    url: String,
    depth: usize,
}

// Crawls a site breadth-first from the seed URL
//
// Parameters:
//   seed_url: absolute URL the crawl starts from; its host becomes the
//             base domain that bounds the whole crawl
//   options:  depth bound and worker pool width
//   session:  shared visited set + ledger; the caller keeps a reference
//             and reads the ledger afterwards (or mid-crawl on interrupt)
//   fetch:    async function URL -> FetchOutcome; must not panic
//   extract:  function (html, page_url) -> absolute URLs found on the page
//
// Returns Ok(()) when the frontier empties or the depth bound is hit.
// The only error is an unusable seed URL, reported before any fetching.
//
// A single URL failing to fetch never stops the crawl: the failure is
// recorded in the ledger and that page simply contributes no links.
pub async fn run_crawl<F, Fut, E>(
    seed_url: &str,
    options: &CrawlOptions,
    session: &CrawlSession,
    fetch: F,
    extract: E,
) -> Result<()>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = FetchOutcome>,
    E: Fn(&str, &str) -> Vec<String>,
{
    let seed = Url::parse(seed_url).map_err(|e| anyhow!("Invalid URL '{}': {}", seed_url, e))?;
    let base_host = seed
        .host_str()
        .ok_or_else(|| anyhow!("URL has no host: {}", seed_url))?
        .to_string();

    // The frontier holds (URL, depth) pairs in non-decreasing depth order.
    // Only this task ever touches it.
    let mut frontier: VecDeque<FrontierEntry> = VecDeque::new();
    frontier.push_back(FrontierEntry {
        url: seed_url.to_string(),
        depth: 0,
    });

    while let Some(front) = frontier.front() {
        let current_depth = front.depth;

        // Hard cutoff: past the bound we discard whatever is left queued
        if current_depth > options.max_depth {
            break;
        }

        // Step 1: batch the entire current depth level
        let mut batch = Vec::new();
        while frontier.front().map(|entry| entry.depth) == Some(current_depth) {
            if let Some(entry) = frontier.pop_front() {
                batch.push(entry);
            }
        }

        // Steps 3-4: dispatch the batch through a pool of at most
        // `workers` concurrent visits, then wait for all of them.
        // collect() only completes once every future in the stream has,
        // so this line is both the worker pool AND the level barrier.
        let link_sets: Vec<Vec<String>> = stream::iter(batch)
            .map(|entry| visit(entry, &base_host, session, &fetch, &extract))
            .buffer_unordered(options.workers.max(1))
            .collect()
            .await;

        // Step 5: union the returned links and refill the frontier.
        // is_visited() is only a cheap pre-filter to keep the queue small;
        // the claim() inside visit() remains the authoritative dedup.
        for links in link_sets {
            for link in links {
                let key = normalize_url(&link);
                if !session.is_visited(&key) && is_same_domain(&link, &base_host) {
                    frontier.push_back(FrontierEntry {
                        url: link,
                        depth: current_depth + 1,
                    });
                }
            }
        }
    }

    Ok(())
}

// Processes a single frontier entry; returns the links found on the page
//
// Workers within a batch run concurrently with no ordering between them,
// which is fine: nothing a worker does depends on another worker's result.
async fn visit<F, Fut, E>(
    entry: FrontierEntry,
    base_host: &str,
    session: &CrawlSession,
    fetch: &F,
    extract: &E,
) -> Vec<String>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = FetchOutcome>,
    E: Fn(&str, &str) -> Vec<String>,
{
    // The claim decides ownership. Two pages linking the same URL put two
    // entries in one batch; exactly one worker gets true here.
    let key = normalize_url(&entry.url);
    if !session.claim(&key) {
        return Vec::new();
    }

    // Out-of-domain URLs are never fetched and never recorded. They only
    // show up here if the caller seeded one directly - the coordinator
    // filters links before they enter the frontier.
    if !is_same_domain(&entry.url, base_host) {
        return Vec::new();
    }

    let outcome = fetch(entry.url.clone()).await;

    // One ledger record per claimed, attempted URL - fetch failures too
    session.record(path_of(&entry.url), outcome.status);

    // Streaming progress line, printed as results arrive
    println!("[{}] {}", status_label(outcome.status), entry.url);

    match outcome.body {
        Some(body) => extract(&body, &entry.url),
        None => Vec::new(),
    }
}

// Extracts the path component for the ledger ("/" for the bare host)
fn path_of(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => {
            let path = parsed.path();
            if path.is_empty() {
                "/".to_string()
            } else {
                path.to_string()
            }
        }
        Err(_) => "/".to_string(),
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why batch a whole depth level before dispatching?
//    - Breadth-first order: every depth-d page finishes before any
//      depth-(d+1) page starts
//    - The depth bound then becomes a single comparison per level
//
// 2. What does buffer_unordered(W) buy us?
//    - At most W fetches in flight at once (bounded outbound connections)
//    - Results come back in completion order, which is fine because the
//      coordinator only looks at them after the whole batch is done
//
// 3. Why does the engine take fetch/extract as parameters?
//    - The hard part of a crawler is the coordination, not the HTTP
//    - With the collaborators injected, tests can run thousands of crawls
//      against in-memory "sites" in milliseconds
// -----------------------------------------------------------------------------
