// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Build the crawl session and the HTTP client
// 3. Run the crawl, racing it against ctrl-c
// 4. Print the sorted report (and optionally write it to a file)
// 5. Exit with proper code (0 = completed OR interrupted, 2 = startup error)
//
// An interrupted crawl is NOT a failure: whatever the ledger holds at that
// moment is printed as a best-effort partial result and the exit code
// stays 0.
//
// Rust concepts used:
// - async/await: Because we make many network requests concurrently
// - tokio::select!: Race two futures, keep whichever finishes first
// - Result<T, E>: For error handling (T = success type, E = error type)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;     // src/cli.rs - command-line parsing
mod crawl;   // src/crawl/ - the breadth-first crawl engine
mod fetcher; // src/fetcher/ - HTTP fetching and HTML link extraction
mod urls;    // src/urls/ - URL normalization and domain matching

use anyhow::Result;
use clap::Parser;
use url::Url;

use cli::Cli;
use crawl::{run_crawl, status_label, CrawlOptions, CrawlSession, DiscoveryRecord};

// The #[tokio::main] attribute transforms our async main into a real main
// function. It creates a tokio runtime and runs our async code inside it.
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = crawl completed or was interrupted (partial report emitted)
//   Err   = startup error (bad seed URL, client build failure)
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, bad values, etc.
    let cli = Cli::parse();

    // A bare "example.com" is treated as "https://example.com"
    let seed_url = ensure_scheme(&cli.url);

    // Resolve the base domain up front so an unusable seed fails here,
    // before any network activity
    let base_host = Url::parse(&seed_url)
        .map_err(|e| anyhow::anyhow!("Invalid URL '{}': {}", seed_url, e))?
        .host_str()
        .ok_or_else(|| anyhow::anyhow!("URL has no host: {}", seed_url))?
        .to_string();

    print_start_banner(&seed_url, &base_host, cli.depth);

    let session = CrawlSession::new();
    let client = fetcher::build_client()?;
    let options = CrawlOptions {
        max_depth: cli.depth,
        workers: cli.workers,
    };

    // Wrap the shared client into the async fetch function the engine
    // expects. Cloning a reqwest Client is cheap - it's reference counted
    // internally - so each fetch gets its own handle.
    let fetch = {
        let client = client.clone();
        move |url: String| {
            let client = client.clone();
            async move { fetcher::fetch_page(&client, &url).await }
        }
    };

    // Race the crawl against ctrl-c. If the user interrupts, the crawl
    // future is dropped right here - in-flight fetches are abandoned - and
    // we fall through to report whatever was discovered so far.
    tokio::select! {
        result = run_crawl(&seed_url, &options, &session, fetch, fetcher::extract_links) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            println!("\n\nCrawl interrupted by user.");
        }
    }

    let records = session.snapshot();
    print_results(&records, cli.json)?;

    if let Some(path) = &cli.output {
        write_output_file(path, &records)?;
        println!("\nResults saved to: {}", path);
    }

    Ok(0)
}

// Prefixes https:// when the user typed a bare host
fn ensure_scheme(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

// Prints the banner shown before the first request goes out
fn print_start_banner(seed_url: &str, base_host: &str, max_depth: usize) {
    println!("\n{}", "=".repeat(60));
    println!("Starting crawl: {}", seed_url);
    println!("Base domain: {}", base_host);
    println!("Max depth: {}", max_depth);
    println!("{}\n", "=".repeat(60));
}

// Prints the results either as the path listing or as JSON
fn print_results(records: &[DiscoveryRecord], json: bool) -> Result<()> {
    if json {
        // Serialize records to JSON and print
        let json_output = serde_json::to_string_pretty(records)?;
        println!("{}", json_output);
        return Ok(());
    }

    println!("\n{}", "=".repeat(60));
    println!("DISCOVERED PATHS ({} total)", records.len());
    println!("{}\n", "=".repeat(60));

    for record in records {
        // ✓ marks a 2xx answer, ✗ everything else including failures
        let mark = if record.is_ok() { "✓" } else { "✗" };
        println!("  {} [{}] {}", mark, status_label(record.status), record.path);
    }

    // Print summary
    let ok_count = records.iter().filter(|record| record.is_ok()).count();
    println!("\n📊 Summary:");
    println!("   ✅ OK: {}", ok_count);
    println!("   ❌ Failed: {}", records.len() - ok_count);
    println!("   📋 Total: {}", records.len());

    Ok(())
}

// Writes one "<status>\t<path>" line per record, in snapshot order
fn write_output_file(path: &str, records: &[DiscoveryRecord]) -> Result<()> {
    let mut contents = String::new();
    for record in records {
        contents.push_str(&format!(
            "{}\t{}\n",
            status_label(record.status),
            record.path
        ));
    }
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_scheme_adds_https() {
        assert_eq!(ensure_scheme("example.com"), "https://example.com");
    }

    #[test]
    fn test_ensure_scheme_keeps_existing() {
        assert_eq!(ensure_scheme("http://example.com"), "http://example.com");
        assert_eq!(ensure_scheme("https://example.com"), "https://example.com");
    }

    #[test]
    fn test_output_file_format() {
        let records = vec![
            DiscoveryRecord {
                path: "/".to_string(),
                status: Some(200),
            },
            DiscoveryRecord {
                path: "/broken".to_string(),
                status: None,
            },
        ];

        let dir = std::env::temp_dir().join("site-scout-test-output");
        std::fs::create_dir_all(&dir).expect("temp dir");
        let path = dir.join("paths.tsv");
        let path = path.to_str().expect("utf-8 temp path");

        write_output_file(path, &records).expect("write failed");
        let written = std::fs::read_to_string(path).expect("read back failed");
        assert_eq!(written, "200\t/\nERR\t/broken\n");
    }
}
