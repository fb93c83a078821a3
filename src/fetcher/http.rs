// src/fetcher/http.rs
// =============================================================================
// This module fetches pages over HTTP.
//
// The contract with the crawl engine is deliberately boring: fetch_page
// NEVER fails. Whatever goes wrong - timeout, DNS, connection reset, a
// body that isn't valid UTF-8 - comes back as a FetchOutcome with the
// relevant parts set to None. A crawler that aborted on the first dead
// link would be useless; dead links are findings, not errors.
//
// Client settings:
// - 10 second timeout per request (a timed-out fetch is just a failure)
// - Redirects followed (reqwest's default policy)
// - A browser-like User-Agent, because some sites answer 403 to anything
//   that looks like a bot
// =============================================================================

use reqwest::Client;
use std::time::Duration;

// Some servers fingerprint the agent string; a desktop browser UA gets the
// same response a person would see
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

// What one fetch attempt produced
//
// status: None means the request itself failed (no HTTP conversation
//         happened) - this is the ledger's failure marker
// body:   None when there is no usable text to extract links from
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub status: Option<u16>,
    pub body: Option<String>,
}

impl FetchOutcome {
    /// The outcome of a fetch that never got an HTTP response
    pub fn failure() -> Self {
        Self {
            status: None,
            body: None,
        }
    }
}

// Builds the HTTP client shared by every worker
//
// reqwest clients hold a connection pool internally and are made to be
// cloned cheaply, so one client serves the whole crawl.
pub fn build_client() -> anyhow::Result<Client> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(FETCH_TIMEOUT)
        .build()?;
    Ok(client)
}

// Fetches one URL and reports what happened
//
// Never returns an error and never panics: the crawl engine treats the
// outcome as plain data.
pub async fn fetch_page(client: &Client, url: &str) -> FetchOutcome {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(_) => return FetchOutcome::failure(),
    };

    // We have a status even if reading the body fails below
    let status = response.status().as_u16();

    match response.text().await {
        Ok(body) => FetchOutcome {
            status: Some(status),
            body: Some(body),
        },
        Err(_) => FetchOutcome {
            status: Some(status),
            body: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unfetchable_url_is_a_failure_not_an_error() {
        let client = build_client().expect("client build failed");
        // An invalid scheme never produces an HTTP conversation
        let outcome = fetch_page(&client, "notascheme://nowhere").await;
        assert_eq!(outcome.status, None);
        assert_eq!(outcome.body, None);
    }

    #[test]
    fn test_failure_constructor_is_fully_absent() {
        let outcome = FetchOutcome::failure();
        assert!(outcome.status.is_none());
        assert!(outcome.body.is_none());
    }
}
