// src/crawl/session.rs
// =============================================================================
// This module holds the shared state of one crawl: the visited registry and
// the path ledger, bundled into a CrawlSession.
//
// Why a session object?
// - The visited set and the ledger are touched by every concurrent worker
// - Making them fields of one value (instead of globals) means two crawls
//   in the same process - say, two tests running in parallel - can never
//   interfere with each other
//
// The one operation that matters here is claim(): an atomic
// "test-and-insert" on the visited set. When two pages link to the same
// URL and both copies are dispatched in the same batch, both workers call
// claim() - exactly one gets true and fetches, the other discards. That
// single primitive is what guarantees every URL is fetched at most once.
//
// Rust concepts:
// - Mutex: Mutual exclusion so only one worker touches the set at a time
// - HashSet::insert: Returns whether the value was newly inserted, which
//   makes "test and insert" one indivisible step under the lock
// =============================================================================

use serde::Serialize;
use std::collections::HashSet;
use std::sync::Mutex;

// One discovered path and the HTTP status it answered with
//
// status is None when the fetch failed entirely (network error, timeout) -
// that is the ledger's failure marker. The derived ordering sorts by path
// first, then status, which is exactly the order reports are printed in.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct DiscoveryRecord {
    /// The URL path that was discovered (e.g., "/docs/install")
    pub path: String,
    /// The HTTP status code, or None if the fetch failed
    pub status: Option<u16>,
}

impl DiscoveryRecord {
    /// Helper method to check if the record counts as a success
    ///
    /// Returns true only for 2xx statuses
    pub fn is_ok(&self) -> bool {
        matches!(self.status, Some(code) if (200..300).contains(&code))
    }
}

// Formats a status for display: the numeric code, or "ERR" for failures
pub fn status_label(status: Option<u16>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "ERR".to_string(),
    }
}

// The shared mutable state of one crawl invocation
//
// Both fields grow monotonically: a visited entry is never removed, a
// ledger record is never rewritten. Workers only ever add.
pub struct CrawlSession {
    /// Normalized URLs that have been claimed for processing
    visited: Mutex<HashSet<String>>,
    /// Discovery records accumulated for the final report
    ledger: Mutex<Vec<DiscoveryRecord>>,
}

impl CrawlSession {
    pub fn new() -> Self {
        Self {
            visited: Mutex::new(HashSet::new()),
            ledger: Mutex::new(Vec::new()),
        }
    }

    // Atomically claims a normalized URL for processing
    //
    // Returns true if THIS call inserted the key (the caller won and must
    // process the URL), false if some earlier caller already owns it.
    //
    // HashSet::insert does the test and the insert in one step while we
    // hold the lock, so under N concurrent claims of the same key exactly
    // one caller sees true.
    pub fn claim(&self, key: &str) -> bool {
        self.visited
            .lock()
            .expect("visited set lock poisoned")
            .insert(key.to_string())
    }

    // Cheap membership check used when filling the frontier
    //
    // This is only a pre-filter to keep obviously-seen URLs out of the
    // queue. It is NOT the authoritative dedup - claim() at dispatch time
    // is, because another copy of the URL may be claimed between this
    // check and dispatch.
    pub fn is_visited(&self, key: &str) -> bool {
        self.visited
            .lock()
            .expect("visited set lock poisoned")
            .contains(key)
    }

    // Appends one discovery record to the ledger
    //
    // No dedup here: the same path reached through different query strings
    // is recorded once per distinct URL, by design.
    pub fn record(&self, path: String, status: Option<u16>) {
        self.ledger
            .lock()
            .expect("ledger lock poisoned")
            .push(DiscoveryRecord { path, status });
    }

    // Returns a sorted copy of the ledger
    //
    // Sorted ascending by (path, status) so reports are stable no matter
    // which order the concurrent workers finished in. Also what gets
    // dumped when the user interrupts the crawl - a best-effort partial
    // result.
    pub fn snapshot(&self) -> Vec<DiscoveryRecord> {
        let mut records = self.ledger.lock().expect("ledger lock poisoned").clone();
        records.sort();
        records
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Mutex and not RwLock?
//    - Nearly every access writes (claim inserts, record appends)
//    - RwLock only helps when reads vastly outnumber writes
//
// 2. Why .expect() on lock()?
//    - lock() fails only if another thread panicked while holding the lock
//    - At that point the crawl state is suspect anyway, so crashing with a
//      clear message is the right move
//
// 3. Why does claim() take &self and not &mut self?
//    - The Mutex provides "interior mutability": many workers share one
//      &CrawlSession and the lock serializes the actual mutation
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_first_claim_wins_then_loses() {
        let session = CrawlSession::new();
        assert!(session.claim("https://a.com/x"));
        assert!(!session.claim("https://a.com/x"));
        // A different key is an independent claim
        assert!(session.claim("https://a.com/y"));
    }

    #[test]
    fn test_claim_is_at_most_once_under_concurrency() {
        let session = Arc::new(CrawlSession::new());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let session = Arc::clone(&session);
                thread::spawn(move || session.claim("https://a.com/contested"))
            })
            .collect();

        let wins = handles
            .into_iter()
            .map(|handle| handle.join().expect("claimer thread panicked"))
            .filter(|&won| won)
            .count();

        // Exactly one of the 16 concurrent claimers may win
        assert_eq!(wins, 1);
    }

    #[test]
    fn test_is_visited_reflects_claims() {
        let session = CrawlSession::new();
        assert!(!session.is_visited("https://a.com/x"));
        session.claim("https://a.com/x");
        assert!(session.is_visited("https://a.com/x"));
    }

    #[test]
    fn test_snapshot_sorts_by_path_then_status() {
        let session = CrawlSession::new();
        session.record("/b".to_string(), Some(200));
        session.record("/a".to_string(), Some(404));
        session.record("/a".to_string(), None);

        let records = session.snapshot();
        let expected = vec![
            DiscoveryRecord { path: "/a".to_string(), status: None },
            DiscoveryRecord { path: "/a".to_string(), status: Some(404) },
            DiscoveryRecord { path: "/b".to_string(), status: Some(200) },
        ];
        assert_eq!(records, expected);
    }

    #[test]
    fn test_records_are_not_deduplicated() {
        let session = CrawlSession::new();
        // Same path from two query-string variants of the URL
        session.record("/search".to_string(), Some(200));
        session.record("/search".to_string(), Some(200));
        assert_eq!(session.snapshot().len(), 2);
    }

    #[test]
    fn test_is_ok_boundaries() {
        let ok = DiscoveryRecord { path: "/".to_string(), status: Some(200) };
        let redirect = DiscoveryRecord { path: "/".to_string(), status: Some(301) };
        let failed = DiscoveryRecord { path: "/".to_string(), status: None };
        assert!(ok.is_ok());
        assert!(!redirect.is_ok());
        assert!(!failed.is_ok());
    }
}
